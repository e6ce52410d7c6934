//! Narration panel: one page, six tabbed sections.

use archivio_core::settings::EventSettings;
use yew::prelude::*;

use crate::components::toast::Notice;
use crate::components::ui::admin::aids::AidsPanel;
use crate::components::ui::admin::challenges::ChallengesPanel;
use crate::components::ui::admin::customize::CustomizePanel;
use crate::components::ui::admin::items::ItemsPanel;
use crate::components::ui::admin::knowledge::KnowledgePanel;
use crate::components::ui::admin::users::UsersPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Knowledge,
    Users,
    Customize,
    Challenges,
    Aids,
    Items,
}

const TABS: [Tab; 6] = [
    Tab::Knowledge,
    Tab::Users,
    Tab::Customize,
    Tab::Challenges,
    Tab::Aids,
    Tab::Items,
];

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Knowledge => "Conoscenza",
            Tab::Users => "Giocatori",
            Tab::Customize => "Personalizza",
            Tab::Challenges => "Prove",
            Tab::Aids => "Focalizzazioni",
            Tab::Items => "Risorse",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub settings: EventSettings,
    pub on_settings_saved: Callback<EventSettings>,
    pub on_notify: Callback<Notice>,
}

#[function_component(AdminPage)]
pub fn admin_page(props: &Props) -> Html {
    let active = use_state(|| Tab::Knowledge);

    let tab_bar = TABS.iter().map(|tab| {
        let is_active = *active == *tab;
        let onclick = {
            let active = active.clone();
            let tab = *tab;
            Callback::from(move |_| active.set(tab))
        };
        html! {
            <button
                type="button"
                class={classes!("admin__tab", is_active.then_some("admin__tab--active"))}
                {onclick}
            >
                { tab.label() }
            </button>
        }
    });

    let panel = match *active {
        Tab::Knowledge => html! {
            <KnowledgePanel token={props.token.clone()} on_notify={props.on_notify.clone()} />
        },
        Tab::Users => html! {
            <UsersPanel token={props.token.clone()} on_notify={props.on_notify.clone()} />
        },
        Tab::Customize => html! {
            <CustomizePanel
                token={props.token.clone()}
                settings={props.settings.clone()}
                on_saved={props.on_settings_saved.clone()}
                on_notify={props.on_notify.clone()}
            />
        },
        Tab::Challenges => html! {
            <ChallengesPanel token={props.token.clone()} on_notify={props.on_notify.clone()} />
        },
        Tab::Aids => html! {
            <AidsPanel token={props.token.clone()} on_notify={props.on_notify.clone()} />
        },
        Tab::Items => html! {
            <ItemsPanel token={props.token.clone()} on_notify={props.on_notify.clone()} />
        },
    };

    html! {
        <main class="admin">
            <h1>{ "Gestione dell'evento" }</h1>
            <nav class="admin__tabs">{ for tab_bar }</nav>
            <section class="admin__panel">{ panel }</section>
        </main>
    }
}
