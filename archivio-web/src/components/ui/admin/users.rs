//! Player administration: action budgets, roles, resets.

use archivio_core::user::{Role, User};
use yew::prelude::*;

use crate::components::toast::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub on_notify: Callback<Notice>,
}

#[function_component(UsersPanel)]
pub fn users_panel(props: &Props) -> Html {
    let users = use_state(|| None::<Vec<User>>);
    let reload_tick = use_state(|| 0_u32);

    {
        let token = props.token.to_string();
        let users = users.clone();
        let on_notify = props.on_notify.clone();
        use_effect_with(*reload_tick, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::admin_users(&token).await {
                    Ok(list) => users.set(Some(list)),
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
            || {}
        });
    }

    let reload = {
        let reload_tick = reload_tick.clone();
        Callback::from(move |()| reload_tick.set(reload_tick.wrapping_add(1)))
    };

    let Some(list) = &*users else {
        return html! { <p>{ "Lettura degli iscritti..." }</p> };
    };

    html! {
        <section class="admin-users">
            <table class="admin-users__table">
                <thead>
                    <tr>
                        <th>{ "Utente" }</th>
                        <th>{ "Azioni" }</th>
                        <th>{ "Ruolo" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for list.iter().map(|user| html! {
                        <UserRow
                            token={props.token.clone()}
                            user={user.clone()}
                            on_changed={reload.clone()}
                            on_notify={props.on_notify.clone()}
                        />
                    }) }
                </tbody>
            </table>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct RowProps {
    token: AttrValue,
    user: User,
    on_changed: Callback<()>,
    on_notify: Callback<Notice>,
}

#[function_component(UserRow)]
fn user_row(props: &RowProps) -> Html {
    let max_actions = use_state(|| props.user.max_actions.to_string());

    let oninput = {
        let max_actions = max_actions.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                max_actions.set(input.value());
            }
        })
    };

    let run = |label: &'static str, action: RowAction| {
        let token = props.token.to_string();
        let user_id = props.user.id.clone();
        let max_actions = max_actions.clone();
        let current_role = props.user.role;
        let on_changed = props.on_changed.clone();
        let on_notify = props.on_notify.clone();
        let onclick = Callback::from(move |_| {
            if action == RowAction::Delete
                && !crate::dom::confirm("Sei sicuro di voler eliminare questo giocatore?")
            {
                return;
            }
            let token = token.clone();
            let user_id = user_id.clone();
            let max_actions = max_actions.clone();
            let on_changed = on_changed.clone();
            let on_notify = on_notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match action {
                    RowAction::SaveActions => match max_actions.trim().parse::<i32>() {
                        Ok(value) if value >= 0 => {
                            crate::api::set_user_actions(&token, &user_id, value)
                                .await
                                .map(|_| ())
                        }
                        _ => {
                            on_notify.emit(Notice::error("Numero di azioni non valido"));
                            return;
                        }
                    },
                    RowAction::ToggleRole => {
                        let role = if current_role.is_admin() { "player" } else { "admin" };
                        crate::api::set_user_role(&token, &user_id, role)
                            .await
                            .map(|_| ())
                    }
                    RowAction::ResetActions => crate::api::reset_user_actions(&token, &user_id)
                        .await
                        .map(|_| ()),
                    RowAction::Delete => crate::api::delete_user(&token, &user_id).await,
                };
                match result {
                    Ok(()) => on_changed.emit(()),
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
        });
        html! { <button type="button" {onclick}>{ label }</button> }
    };

    html! {
        <tr class="admin-users__row">
            <td>
                <span class="admin-users__name">{ props.user.username.clone() }</span>
                <span class="admin-users__email">{ props.user.email.clone() }</span>
            </td>
            <td>
                <span>{ format!("{} usate / ", props.user.used_actions) }</span>
                <input type="number" min="0" value={(*max_actions).clone()} {oninput} />
                { run("Salva", RowAction::SaveActions) }
                { run("Azzera", RowAction::ResetActions) }
            </td>
            <td>
                <span>{ role_label(props.user.role) }</span>
                { run(if props.user.role.is_admin() { "Rendi giocatore" } else { "Rendi admin" }, RowAction::ToggleRole) }
            </td>
            <td>
                { run("Elimina", RowAction::Delete) }
            </td>
        </tr>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RowAction {
    SaveActions,
    ToggleRole,
    ResetActions,
    Delete,
}

const fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Narrazione",
        Role::Player => "Giocatore",
    }
}
