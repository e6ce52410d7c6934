use archivio_core::settings::EventSettings;
use archivio_core::user::User;
use yew::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub settings: EventSettings,
    #[prop_or_default]
    pub user: Option<User>,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

fn nav_button(label: &str, route: Route, on_navigate: &Callback<Route>) -> Html {
    let onclick = {
        let cb = on_navigate.clone();
        Callback::from(move |_| cb.emit(route.clone()))
    };
    html! {
        <button type="button" class="navbar__link" {onclick}>{ label }</button>
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let brand = {
        let cb = props.on_navigate.clone();
        let home = if props.user.is_some() {
            Route::Dashboard
        } else {
            Route::Landing
        };
        Callback::from(move |_| cb.emit(home.clone()))
    };
    let on_logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <nav class="navbar">
            <button type="button" class="navbar__brand" onclick={brand}>
                { props.settings.event_logo_url.as_ref().map_or_else(
                    || html! { <span>{ props.settings.event_name.clone() }</span> },
                    |url| html! { <img src={url.clone()} alt={props.settings.event_name.clone()} /> },
                ) }
            </button>
            <div class="navbar__links">
                { match props.user.as_ref() {
                    Some(user) => html! {
                        <>
                            { nav_button("Oracolo", Route::Dashboard, &props.on_navigate) }
                            { nav_button("Archivio", Route::Archive, &props.on_navigate) }
                            { nav_button("Background", Route::Background, &props.on_navigate) }
                            { user.role.is_admin().then(|| {
                                nav_button("Gestione", Route::Admin, &props.on_navigate)
                            }).unwrap_or_default() }
                            <span class="navbar__user">{ user.username.clone() }</span>
                            <button type="button" class="navbar__logout" onclick={on_logout}>
                                { "Esci" }
                            </button>
                        </>
                    },
                    None => html! {
                        <>
                            { nav_button("Accedi", Route::Login, &props.on_navigate) }
                            { nav_button("Registrati", Route::Register, &props.on_navigate) }
                        </>
                    },
                } }
            </div>
        </nav>
    }
}
