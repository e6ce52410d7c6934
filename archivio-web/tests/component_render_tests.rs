use archivio_core::challenge::{Challenge, ChallengeTest};
use archivio_core::settings::EventSettings;
use archivio_core::user::{Role, User};
use archivio_web::components::modal::Modal;
use archivio_web::components::navbar::Navbar;
use archivio_web::components::toast::{Notice, Toast};
use archivio_web::components::ui::aids_modal::AidsModal;
use archivio_web::components::ui::challenge_modal::ChallengeModal;
use archivio_web::components::ui::resources_panel::ResourcesPanel;
use futures::executor::block_on;
use yew::{AttrValue, Callback, Children, LocalServerRenderer};

fn player() -> User {
    User {
        id: "u-1".into(),
        email: "p@example.com".into(),
        username: "Lucrezia".into(),
        role: Role::Player,
        max_actions: 10,
        used_actions: 0,
    }
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    let open_props = archivio_web::components::modal::Props {
        open: true,
        title: AttrValue::from("Prova contrapposta"),
        description: Some(AttrValue::from("Scegli come affrontarla")),
        on_close: Callback::noop(),
        children: Children::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("modal__header"));
    assert!(html.contains("Scegli come affrontarla"));

    let closed_props = archivio_web::components::modal::Props {
        open: false,
        title: AttrValue::from("Prova contrapposta"),
        description: None,
        on_close: Callback::noop(),
        children: Children::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn navbar_shows_player_links_when_signed_in() {
    let props = archivio_web::components::navbar::Props {
        settings: EventSettings::default(),
        user: Some(player()),
        on_navigate: Callback::noop(),
        on_logout: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Navbar>::with_props(props).render());
    assert!(html.contains("Oracolo"));
    assert!(html.contains("Archivio"));
    assert!(html.contains("Background"));
    assert!(html.contains("Lucrezia"));
    assert!(html.contains("Esci"));
    assert!(!html.contains("Gestione"));
}

#[test]
fn navbar_shows_admin_link_for_narration() {
    let mut user = player();
    user.role = Role::Admin;
    let props = archivio_web::components::navbar::Props {
        settings: EventSettings::default(),
        user: Some(user),
        on_navigate: Callback::noop(),
        on_logout: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Navbar>::with_props(props).render());
    assert!(html.contains("Gestione"));
}

#[test]
fn navbar_offers_auth_entry_points_when_anonymous() {
    let props = archivio_web::components::navbar::Props {
        settings: EventSettings::default(),
        user: None,
        on_navigate: Callback::noop(),
        on_logout: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Navbar>::with_props(props).render());
    assert!(html.contains("Accedi"));
    assert!(html.contains("Registrati"));
    assert!(html.contains("L'Archivio Maledetto"));
}

#[test]
fn toast_success_and_error_styles_differ() {
    let props = archivio_web::components::toast::Props {
        notice: Some(Notice::success("Background salvato")),
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Toast>::with_props(props).render());
    assert!(html.contains("toast--success"));

    let props = archivio_web::components::toast::Props {
        notice: Some(Notice::error("Azione non consentita")),
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Toast>::with_props(props).render());
    assert!(html.contains("toast--error"));
}

#[test]
fn challenge_modal_opens_on_the_test_choice() {
    let challenge = Challenge {
        id: "c-1".into(),
        name: "Antico tomo".into(),
        description: "Le pagine sembrano muoversi da sole.".into(),
        keywords: vec!["tomo".into()],
        allow_refuge_defense: false,
        tests: vec![
            ChallengeTest {
                attribute: "Intelligenza + Occulto".into(),
                difficulty: 7,
                success_text: "ok".into(),
                tie_text: "eh".into(),
                failure_text: "no".into(),
            },
            ChallengeTest {
                attribute: "Autocontrollo + Intimidire".into(),
                difficulty: 6,
                success_text: "ok".into(),
                tie_text: "eh".into(),
                failure_text: "no".into(),
            },
        ],
    };
    let props = archivio_web::components::ui::challenge_modal::Props {
        token: AttrValue::from("tok"),
        challenge,
        on_close: Callback::noop(),
        on_resolved: Callback::noop(),
        on_notify: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ChallengeModal>::with_props(props).render());
    assert!(html.contains("Antico tomo"));
    assert!(html.contains("Intelligenza + Occulto"));
    assert!(html.contains("Autocontrollo + Intimidire"));
}

#[test]
fn aids_modal_waits_for_both_fetches() {
    let props = archivio_web::components::ui::aids_modal::Props {
        token: AttrValue::from("tok"),
        window_key: AttrValue::from("2025-06-14T18:00|2025-06-15T02:00"),
        on_close: Callback::noop(),
        on_redeemed: Callback::noop(),
        on_notify: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AidsModal>::with_props(props).render());
    assert!(html.contains("Consultazione dell'Archivio..."));
}

#[test]
fn resources_panel_starts_in_loading_state() {
    let props = archivio_web::components::ui::resources_panel::Props {
        token: AttrValue::from("tok"),
        on_notify: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResourcesPanel>::with_props(props).render());
    assert!(html.contains("Calcolo delle risorse"));
}
