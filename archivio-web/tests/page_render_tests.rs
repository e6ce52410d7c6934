use archivio_core::settings::EventSettings;
use archivio_core::user::{Role, User};
use archivio_web::pages::admin::AdminPage;
use archivio_web::pages::archive::ArchivePage;
use archivio_web::pages::background::BackgroundPage;
use archivio_web::pages::dashboard::DashboardPage;
use archivio_web::pages::landing::LandingPage;
use archivio_web::pages::login::LoginPage;
use archivio_web::pages::not_found::NotFoundPage;
use archivio_web::pages::register::RegisterPage;
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn player() -> User {
    User {
        id: "u-1".into(),
        email: "p@example.com".into(),
        username: "Lucrezia".into(),
        role: Role::Player,
        max_actions: 10,
        used_actions: 4,
    }
}

#[test]
fn landing_page_renders_default_hero() {
    let props = archivio_web::pages::landing::Props {
        settings: EventSettings::default(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LandingPage>::with_props(props).render());
    assert!(html.contains("Svela i Segreti"));
    assert!(html.contains("dell'Antico Sapere"));
}

#[test]
fn landing_page_honors_custom_hero_text() {
    let props = archivio_web::pages::landing::Props {
        settings: EventSettings {
            hero_title: "Notte dei Custodi".into(),
            ..EventSettings::default()
        },
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LandingPage>::with_props(props).render());
    assert!(html.contains("Notte dei Custodi"));
    assert!(!html.contains("Svela i Segreti"));
}

#[test]
fn login_page_renders_credential_form() {
    let props = archivio_web::pages::login::Props {
        settings: EventSettings::default(),
        on_authenticated: Callback::noop(),
        on_navigate: Callback::noop(),
        on_notify: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoginPage>::with_props(props).render());
    assert!(html.contains("Entra nell'Archivio"));
    assert!(html.contains("Non hai un account? Registrati"));
}

#[test]
fn register_page_renders_signup_form() {
    let props = archivio_web::pages::register::Props {
        settings: EventSettings::default(),
        on_authenticated: Callback::noop(),
        on_navigate: Callback::noop(),
        on_notify: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<RegisterPage>::with_props(props).render());
    assert!(html.contains("Nome del personaggio"));
    assert!(html.contains("Hai già un account? Accedi"));
}

#[test]
fn dashboard_shows_quota_and_placeholder() {
    let props = archivio_web::pages::dashboard::Props {
        token: AttrValue::from("tok"),
        user: player(),
        settings: EventSettings::default(),
        on_user_refresh: Callback::noop(),
        on_notify: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DashboardPage>::with_props(props).render());
    assert!(html.contains("Azioni rimaste: 6 di 10"));
    assert!(html.contains("Poni la tua domanda all'Oracolo..."));
    assert!(html.contains("Focalizzazioni"));
}

#[test]
fn archive_page_waits_for_history() {
    let props = archivio_web::pages::archive::Props {
        token: AttrValue::from("tok"),
        on_notify: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ArchivePage>::with_props(props).render());
    assert!(html.contains("Consultazione dell'Archivio..."));
}

#[test]
fn background_page_waits_for_sheet() {
    let props = archivio_web::pages::background::Props {
        token: AttrValue::from("tok"),
        on_notify: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<BackgroundPage>::with_props(props).render());
    assert!(html.contains("Consultazione dell'Archivio..."));
}

#[test]
fn admin_page_lists_every_panel_tab() {
    let props = archivio_web::pages::admin::Props {
        token: AttrValue::from("tok"),
        settings: EventSettings::default(),
        on_settings_saved: Callback::noop(),
        on_notify: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AdminPage>::with_props(props).render());
    for label in ["Conoscenza", "Giocatori", "Personalizza", "Prove", "Risorse"] {
        assert!(html.contains(label), "missing tab {label}");
    }
}

#[test]
fn not_found_page_renders_escape_hatch() {
    let props = archivio_web::pages::not_found::Props {
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFoundPage>::with_props(props).render());
    assert!(html.contains("Pagina non trovata"));
}
