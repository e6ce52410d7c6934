use archivio_core::settings::EventSettings;
use yew::prelude::*;

use crate::api::{RegisterRequest, TokenResponse};
use crate::components::toast::Notice;
use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub settings: EventSettings,
    pub on_authenticated: Callback<TokenResponse>,
    pub on_navigate: Callback<Route>,
    pub on_notify: Callback<Notice>,
}

#[function_component(RegisterPage)]
pub fn register_page(props: &Props) -> Html {
    let email = use_state(String::new);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let busy = use_state(|| false);

    let bind = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let username = username.clone();
        let password = password.clone();
        let busy = busy.clone();
        let on_authenticated = props.on_authenticated.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let request = RegisterRequest {
                email: email.trim().to_string(),
                username: username.trim().to_string(),
                password: (*password).clone(),
            };
            if request.email.is_empty() || request.username.is_empty() {
                on_notify.emit(Notice::error("Email e nome sono obbligatori"));
                return;
            }
            if request.password.len() < 6 {
                on_notify.emit(Notice::error("La password deve avere almeno 6 caratteri"));
                return;
            }
            busy.set(true);
            let busy = busy.clone();
            let on_authenticated = on_authenticated.clone();
            let on_notify = on_notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::register(&request).await {
                    Ok(response) => on_authenticated.emit(response),
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let to_login = {
        let cb = props.on_navigate.clone();
        Callback::from(move |_| cb.emit(Route::Login))
    };

    html! {
        <main class="auth-page">
            <form class="auth-page__form" onsubmit={on_submit}>
                <h1>{ props.settings.event_name.clone() }</h1>
                <h2>{ "Registrati" }</h2>
                <input
                    type="text"
                    placeholder="Nome del personaggio"
                    value={(*username).clone()}
                    oninput={bind(&username)}
                />
                <input
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={bind(&email)}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={bind(&password)}
                />
                <button type="submit" disabled={*busy}>
                    { if *busy { "Registrazione in corso..." } else { "Crea l'account" } }
                </button>
                <button type="button" class="auth-page__switch" onclick={to_login}>
                    { "Hai già un account? Accedi" }
                </button>
            </form>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_registration_fields() {
        let props = Props {
            settings: EventSettings::default(),
            on_authenticated: Callback::noop(),
            on_navigate: Callback::noop(),
            on_notify: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<RegisterPage>::with_props(props).render());
        assert!(html.contains("Nome del personaggio"));
        assert!(html.contains("Crea l'account"));
    }
}
