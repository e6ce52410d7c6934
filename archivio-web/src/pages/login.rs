use archivio_core::settings::EventSettings;
use yew::prelude::*;

use crate::api::{LoginRequest, TokenResponse};
use crate::components::toast::Notice;
use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub settings: EventSettings,
    pub on_authenticated: Callback<TokenResponse>,
    pub on_navigate: Callback<Route>,
    pub on_notify: Callback<Notice>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &Props) -> Html {
    let email = use_state(String::new);
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
        let password = password.clone();
        let busy = busy.clone();
        let on_authenticated = props.on_authenticated.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let request = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            if request.email.is_empty() || request.password.is_empty() {
                on_notify.emit(Notice::error("Inserisci email e password"));
                return;
            }
            busy.set(true);
            let busy = busy.clone();
            let on_authenticated = on_authenticated.clone();
            let on_notify = on_notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::login(&request).await {
                    Ok(response) => on_authenticated.emit(response),
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let to_register = {
        let cb = props.on_navigate.clone();
        Callback::from(move |_| cb.emit(Route::Register))
    };

    html! {
        <main class="auth-page">
            <form class="auth-page__form" onsubmit={on_submit}>
                <h1>{ props.settings.event_name.clone() }</h1>
                <h2>{ "Accedi" }</h2>
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
                    { if *busy { "Accesso in corso..." } else { "Entra nell'Archivio" } }
                </button>
                <button type="button" class="auth-page__switch" onclick={to_register}>
                    { "Non hai un account? Registrati" }
                </button>
            </form>
        </main>
    }
}
