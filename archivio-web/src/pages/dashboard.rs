//! Conversation surface: oracle chat, challenge dispatch, aid redemption.

use std::collections::HashSet;

use archivio_core::challenge::{Challenge, find_challenge};
use archivio_core::conversation::{ConversationEntry, ConversationLog};
use archivio_core::settings::EventSettings;
use archivio_core::user::{ActionQuota, User};
use yew::prelude::*;

use crate::components::toast::Notice;
use crate::components::ui::aids_modal::AidsModal;
use crate::components::ui::challenge_modal::ChallengeModal;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub user: User,
    pub settings: EventSettings,
    /// Replaces the cached user after the server debits an action.
    pub on_user_refresh: Callback<User>,
    pub on_notify: Callback<Notice>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &Props) -> Html {
    let log = use_state(ConversationLog::new);
    let question = use_state(String::new);
    let challenges = use_state(Vec::<Challenge>::new);
    let attempted = use_state(HashSet::<String>::new);
    let follower_remaining = use_state(|| None::<i32>);
    let active_challenge = use_state(|| None::<Challenge>);
    let aids_open = use_state(|| false);
    let sending = use_state(|| false);

    // Challenges, prior attempts and the follower status are independent
    // reads; all three go out at mount.
    {
        let token = props.token.to_string();
        let challenges = challenges.clone();
        let attempted = attempted.clone();
        let follower_remaining = follower_remaining.clone();
        use_effect_with((), move |()| {
            {
                let token = token.clone();
                let challenges = challenges.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match crate::api::challenges(&token).await {
                        Ok(list) => challenges.set(list),
                        Err(e) => log::warn!("challenge list unavailable: {e}"),
                    }
                });
            }
            {
                let token = token.clone();
                let attempted = attempted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match crate::api::my_attempts(&token).await {
                        Ok(ids) => attempted.set(ids.into_iter().collect()),
                        Err(e) => log::warn!("attempt list unavailable: {e}"),
                    }
                });
            }
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::follower_status(&token).await {
                    Ok(status) => follower_remaining.set(Some(status.remaining_actions_before)),
                    Err(e) => log::warn!("follower status unavailable: {e}"),
                }
            });
            || {}
        });
    }

    let quota = effective_quota(&props.user, *follower_remaining);

    let refresh_user = {
        let token = props.token.to_string();
        let on_user_refresh = props.on_user_refresh.clone();
        Callback::from(move |()| {
            let token = token.clone();
            let on_user_refresh = on_user_refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::me(&token).await {
                    Ok(user) => on_user_refresh.emit(user),
                    Err(e) => log::warn!("profile refresh failed: {e}"),
                }
            });
        })
    };

    let oninput = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                question.set(input.value());
            }
        })
    };

    let on_submit = {
        let log = log.clone();
        let question = question.clone();
        let challenges = challenges.clone();
        let attempted = attempted.clone();
        let sending = sending.clone();
        let token = props.token.to_string();
        let refresh_user = refresh_user.clone();
        let on_notify = props.on_notify.clone();
        let exhausted = quota.exhausted();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            let text = question.trim().to_string();
            if text.is_empty() {
                return;
            }
            if exhausted {
                on_notify.emit(Notice::error("Hai esaurito le tue azioni disponibili"));
                return;
            }

            // Keyword dispatch first: a match becomes an offer, not a
            // chat request, and costs nothing.
            if let Some(hit) = find_challenge(&text, &challenges, &attempted) {
                let mut next = (*log).clone();
                next.push(ConversationEntry::UserText(text));
                next.push(ConversationEntry::ChallengeOffer {
                    challenge_id: hit.id.clone(),
                    name: hit.name.clone(),
                    description: hit.description.clone(),
                });
                log.set(next);
                question.set(String::new());
                return;
            }

            let mut next = (*log).clone();
            let pending = next.push_pending(ConversationEntry::UserText(text.clone()));
            log.set(next.clone());
            question.set(String::new());
            sending.set(true);

            let log = log.clone();
            let sending = sending.clone();
            let token = token.clone();
            let refresh_user = refresh_user.clone();
            let on_notify = on_notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::send_chat(&token, &text).await {
                    Ok(response) => {
                        let mut after = next;
                        after.commit(pending);
                        after.push(ConversationEntry::OracleText(response.answer));
                        log.set(after);
                        refresh_user.emit(());
                    }
                    Err(e) => {
                        let mut after = next;
                        after.rollback(pending);
                        log.set(after);
                        on_notify.emit(Notice::error(e.to_string()));
                    }
                }
                sending.set(false);
            });
        })
    };

    let open_aids = {
        let aids_open = aids_open.clone();
        Callback::from(move |_| aids_open.set(true))
    };

    let challenge_modal = active_challenge.as_ref().map(|challenge| {
        let on_close = {
            let active_challenge = active_challenge.clone();
            Callback::from(move |()| active_challenge.set(None))
        };
        let on_resolved = {
            let log = log.clone();
            let attempted = attempted.clone();
            let refresh_user = refresh_user.clone();
            let name = challenge.name.clone();
            let id = challenge.id.clone();
            Callback::from(move |outcome| {
                let mut next_attempted = (*attempted).clone();
                next_attempted.insert(id.clone());
                attempted.set(next_attempted);

                let mut next = (*log).clone();
                next.push(ConversationEntry::ChallengeResult {
                    name: name.clone(),
                    outcome,
                });
                log.set(next);
                refresh_user.emit(());
            })
        };
        html! {
            <ChallengeModal
                token={props.token.clone()}
                challenge={challenge.clone()}
                {on_close}
                {on_resolved}
                on_notify={props.on_notify.clone()}
            />
        }
    });

    let aids_modal = (*aids_open).then(|| {
        let on_close = {
            let aids_open = aids_open.clone();
            Callback::from(move |()| aids_open.set(false))
        };
        let on_redeemed = {
            let log = log.clone();
            let aids_open = aids_open.clone();
            let refresh_user = refresh_user.clone();
            Callback::from(move |(name, result)| {
                let mut next = (*log).clone();
                next.push(ConversationEntry::AidResult { name, result });
                log.set(next);
                aids_open.set(false);
                refresh_user.emit(());
            })
        };
        html! {
            <AidsModal
                token={props.token.clone()}
                window_key={AttrValue::from(props.settings.window_key())}
                {on_close}
                {on_redeemed}
                on_notify={props.on_notify.clone()}
            />
        }
    });

    html! {
        <main class="dashboard">
            <header class="dashboard__header">
                <h1>{ props.settings.oracle_name.clone() }</h1>
                <span class="dashboard__quota">
                    { format!("Azioni rimaste: {} di {}", quota.remaining().max(0), quota.max_actions) }
                </span>
            </header>
            <section class="dashboard__transcript">
                { if log.is_empty() {
                    html! { <p class="dashboard__empty">{ props.settings.chat_placeholder.clone() }</p> }
                } else {
                    html! { for log.visible().map(|entry| render_entry(entry, &challenges, &attempted, &active_challenge)) }
                } }
            </section>
            <form class="dashboard__input" onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder={props.settings.chat_placeholder.clone()}
                    value={(*question).clone()}
                    oninput={oninput}
                    disabled={*sending}
                />
                <button type="submit" disabled={*sending}>
                    { if *sending { "..." } else { "Chiedi" } }
                </button>
                <button type="button" class="dashboard__aids" onclick={open_aids}>
                    { "Focalizzazioni" }
                </button>
            </form>
            { challenge_modal.unwrap_or_default() }
            { aids_modal.unwrap_or_default() }
        </main>
    }
}

/// Quota shown in the header: the follower endpoint reports how many
/// actions remain before the next one, which can exceed the profile max.
fn effective_quota(user: &User, follower_remaining: Option<i32>) -> ActionQuota {
    let base = user.quota();
    match follower_remaining {
        Some(remaining_before) => base.with_follower_bonus(remaining_before),
        None => base,
    }
}

fn render_entry(
    entry: &ConversationEntry,
    challenges: &UseStateHandle<Vec<Challenge>>,
    attempted: &UseStateHandle<HashSet<String>>,
    active_challenge: &UseStateHandle<Option<Challenge>>,
) -> Html {
    match entry {
        ConversationEntry::UserText(text) => html! {
            <div class="entry entry--user">{ text.clone() }</div>
        },
        ConversationEntry::OracleText(text) => html! {
            <div class="entry entry--oracle">{ text.clone() }</div>
        },
        ConversationEntry::ChallengeOffer {
            challenge_id,
            name,
            description,
        } => {
            let already_attempted = attempted.contains(challenge_id);
            let onclick = {
                let challenges = challenges.clone();
                let active_challenge = active_challenge.clone();
                let challenge_id = challenge_id.clone();
                Callback::from(move |_| {
                    if let Some(challenge) =
                        challenges.iter().find(|c| c.id == challenge_id).cloned()
                    {
                        active_challenge.set(Some(challenge));
                    }
                })
            };
            html! {
                <div class="entry entry--offer">
                    <h3>{ name.clone() }</h3>
                    <p>{ description.clone() }</p>
                    <button type="button" disabled={already_attempted} {onclick}>
                        { if already_attempted { "Prova già affrontata" } else { "Affronta la prova" } }
                    </button>
                </div>
            }
        }
        ConversationEntry::ChallengeResult { name, outcome } => html! {
            <div class={classes!("entry", "entry--result", outcome.outcome.css_class())}>
                <h3>{ format!("{name}: {}", outcome.outcome.label()) }</h3>
                <p>{ outcome.message.clone() }</p>
            </div>
        },
        ConversationEntry::AidResult { name, result } => html! {
            <div class="entry entry--aid">
                <h3>{ format!("{name} ({})", result.level_name) }</h3>
                <p>{ result.text.clone() }</p>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archivio_core::user::Role;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props() -> Props {
        Props {
            token: AttrValue::from("tok"),
            user: User {
                id: "u-1".into(),
                email: "p@example.com".into(),
                username: "player".into(),
                role: Role::Player,
                max_actions: 10,
                used_actions: 3,
            },
            settings: EventSettings::default(),
            on_user_refresh: Callback::noop(),
            on_notify: Callback::noop(),
        }
    }

    #[test]
    fn header_shows_oracle_name_and_quota() {
        let html = block_on(LocalServerRenderer::<DashboardPage>::with_props(props()).render());
        assert!(html.contains("L'Oracolo"));
        assert!(html.contains("Azioni rimaste: 7 di 10"));
    }

    #[test]
    fn empty_transcript_shows_the_placeholder() {
        let html = block_on(LocalServerRenderer::<DashboardPage>::with_props(props()).render());
        assert!(html.contains("Poni la tua domanda all'Oracolo..."));
    }

    #[test]
    fn follower_bonus_raises_the_displayed_ceiling() {
        let p = props();
        let quota = effective_quota(&p.user, Some(9));
        assert_eq!(quota.max_actions, 12);
        assert_eq!(quota.remaining(), 9);
        let quota = effective_quota(&p.user, None);
        assert_eq!(quota.max_actions, 10);
    }
}
