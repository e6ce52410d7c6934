use archivio_core::settings::EventSettings;
use archivio_core::user::User;
use yew::prelude::*;

use crate::components::toast::Notice;

/// Cross-cutting app state: session, settings cache, boot progress, toast.
///
/// Two single-writer singletons (session, settings) plus transient UI bits.
/// Updates are whole-value replacements through the `UseStateHandle`s.
#[derive(Clone)]
pub struct AppState {
    pub token: UseStateHandle<Option<AttrValue>>,
    pub user: UseStateHandle<Option<User>>,
    pub settings: UseStateHandle<EventSettings>,
    pub boot_ready: UseStateHandle<bool>,
    pub notice: UseStateHandle<Option<Notice>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        token: use_state(|| crate::session::stored_token().map(AttrValue::from)),
        user: use_state(|| None::<User>),
        settings: use_state(EventSettings::default),
        boot_ready: use_state(|| false),
        notice: use_state(|| None::<Notice>),
    }
}

impl AppState {
    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_admin())
    }

    /// Adopt a fresh login/register response.
    pub fn start_session(&self, token: &str, user: User) {
        crate::session::store_token(token);
        self.token.set(Some(AttrValue::from(token.to_string())));
        self.user.set(Some(user));
    }

    pub fn end_session(&self) {
        crate::session::clear_token();
        self.token.set(None);
        self.user.set(None);
    }
}
