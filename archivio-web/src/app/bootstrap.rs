//! One-shot boot sequence: load settings, validate any stored token.

use yew::prelude::*;

use crate::app::state::AppState;

#[derive(Clone)]
struct BootHandles {
    token: UseStateHandle<Option<AttrValue>>,
    user: UseStateHandle<Option<archivio_core::user::User>>,
    settings: UseStateHandle<archivio_core::settings::EventSettings>,
    boot_ready: UseStateHandle<bool>,
}

#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = BootHandles {
        token: app_state.token.clone(),
        user: app_state.user.clone(),
        settings: app_state.settings.clone(),
        boot_ready: app_state.boot_ready.clone(),
    };
    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            let settings = crate::config::load_settings().await;
            handles.settings.set(settings);

            if let Some(token) = handles.token.as_ref().map(ToString::to_string) {
                match crate::api::me(&token).await {
                    Ok(user) => handles.user.set(Some(user)),
                    Err(e) => {
                        // Expired or revoked token: drop to anonymous.
                        log::warn!("stored session rejected: {e}");
                        crate::session::clear_token();
                        handles.token.set(None);
                    }
                }
            }
            handles.boot_ready.set(true);
        });
        || {}
    });
}
