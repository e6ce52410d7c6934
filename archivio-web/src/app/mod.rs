#[cfg(target_arch = "wasm32")]
use crate::routes::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod state;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let Some(navigator) = use_navigator() else {
        return Html::default();
    };

    let on_navigate = {
        let navigator = navigator.clone();
        Callback::from(move |route: Route| navigator.push(&route))
    };
    let on_logout = {
        let app_state = app_state.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            app_state.end_session();
            navigator.push(&Route::Landing);
        })
    };
    let on_notify = {
        let notice = app_state.notice.clone();
        Callback::from(move |n: crate::components::toast::Notice| notice.set(Some(n)))
    };
    let on_dismiss = {
        let notice = app_state.notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    if !*app_state.boot_ready {
        return html! {
            <div class="boot-screen">
                <p>{ "Caricamento dell'Archivio..." }</p>
            </div>
        };
    }

    let switch = {
        let app_state = app_state.clone();
        let on_navigate = on_navigate.clone();
        let on_notify = on_notify.clone();
        move |route: Route| render_route(&route, &app_state, &on_navigate, &on_notify)
    };

    html! {
        <>
            <crate::components::navbar::Navbar
                user={(*app_state.user).clone()}
                settings={(*app_state.settings).clone()}
                on_navigate={on_navigate}
                on_logout={on_logout}
            />
            <crate::components::toast::Toast
                notice={(*app_state.notice).clone()}
                on_dismiss={on_dismiss}
            />
            <Switch<Route> render={switch} />
        </>
    }
}

#[cfg(target_arch = "wasm32")]
fn render_route(
    route: &Route,
    app_state: &state::AppState,
    on_navigate: &Callback<Route>,
    on_notify: &Callback<crate::components::toast::Notice>,
) -> Html {
    // Guards: private routes require a session, /admin the admin role.
    if !route.is_public() && !app_state.authenticated() {
        return login_page(app_state, on_navigate, on_notify);
    }
    if route.is_admin_only() && !app_state.is_admin() {
        return html! { <crate::pages::not_found::NotFoundPage on_navigate={on_navigate.clone()} /> };
    }

    let token = app_state
        .token
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    match route {
        Route::Landing => {
            if app_state.authenticated() {
                return render_route(&Route::Dashboard, app_state, on_navigate, on_notify);
            }
            html! {
                <crate::pages::landing::LandingPage
                    settings={(*app_state.settings).clone()}
                    on_navigate={on_navigate.clone()}
                />
            }
        }
        Route::Login => login_page(app_state, on_navigate, on_notify),
        Route::Register => html! {
            <crate::pages::register::RegisterPage
                settings={(*app_state.settings).clone()}
                on_authenticated={session_callback(app_state, on_navigate)}
                on_navigate={on_navigate.clone()}
                on_notify={on_notify.clone()}
            />
        },
        Route::Dashboard => {
            let Some(user) = (*app_state.user).clone() else {
                return Html::default();
            };
            let user_handle = app_state.user.clone();
            let on_user_refresh = Callback::from(move |u| user_handle.set(Some(u)));
            html! {
                <crate::pages::dashboard::DashboardPage
                    token={AttrValue::from(token)}
                    {user}
                    settings={(*app_state.settings).clone()}
                    {on_user_refresh}
                    on_notify={on_notify.clone()}
                />
            }
        }
        Route::Archive => html! {
            <crate::pages::archive::ArchivePage
                token={AttrValue::from(token)}
                on_notify={on_notify.clone()}
            />
        },
        Route::Background => html! {
            <crate::pages::background::BackgroundPage
                token={AttrValue::from(token)}
                on_notify={on_notify.clone()}
            />
        },
        Route::Admin => {
            let settings_handle = app_state.settings.clone();
            let on_settings_saved = Callback::from(move |s| settings_handle.set(s));
            html! {
                <crate::pages::admin::AdminPage
                    token={AttrValue::from(token)}
                    settings={(*app_state.settings).clone()}
                    {on_settings_saved}
                    on_notify={on_notify.clone()}
                />
            }
        }
        Route::NotFound => html! {
            <crate::pages::not_found::NotFoundPage on_navigate={on_navigate.clone()} />
        },
    }
}

#[cfg(target_arch = "wasm32")]
fn session_callback(
    app_state: &state::AppState,
    on_navigate: &Callback<Route>,
) -> Callback<crate::api::TokenResponse> {
    let app_state = app_state.clone();
    let on_navigate = on_navigate.clone();
    Callback::from(move |resp: crate::api::TokenResponse| {
        app_state.start_session(&resp.access_token, resp.user);
        on_navigate.emit(Route::Dashboard);
    })
}

#[cfg(target_arch = "wasm32")]
fn login_page(
    app_state: &state::AppState,
    on_navigate: &Callback<Route>,
    on_notify: &Callback<crate::components::toast::Notice>,
) -> Html {
    html! {
        <crate::pages::login::LoginPage
            settings={(*app_state.settings).clone()}
            on_authenticated={session_callback(app_state, on_navigate)}
            on_navigate={on_navigate.clone()}
            on_notify={on_notify.clone()}
        />
    }
}
