//! Read-only archive of past exchanges with the oracle.

use archivio_core::history::{ChallengeRecord, HistoryEntry};
use yew::prelude::*;

use crate::components::toast::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub on_notify: Callback<Notice>,
}

#[function_component(ArchivePage)]
pub fn archive_page(props: &Props) -> Html {
    let entries = use_state(|| None::<Vec<HistoryEntry>>);
    let selected = use_state(|| None::<String>);

    {
        let token = props.token.to_string();
        let entries = entries.clone();
        let on_notify = props.on_notify.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::chat_history(&token).await {
                    Ok(list) => entries.set(Some(list)),
                    Err(e) => {
                        entries.set(Some(Vec::new()));
                        on_notify.emit(Notice::error(e.to_string()));
                    }
                }
            });
            || {}
        });
    }

    let Some(list) = entries.as_ref() else {
        return html! {
            <main class="archive">
                <p class="archive__loading">{ "Consultazione dell'Archivio..." }</p>
            </main>
        };
    };

    let detail = selected
        .as_ref()
        .and_then(|id| list.iter().find(|e| &e.id == id));

    html! {
        <main class="archive">
            <h1>{ "Archivio delle consultazioni" }</h1>
            { if list.is_empty() {
                html! { <p class="archive__empty">{ "Nessuna consultazione registrata" }</p> }
            } else {
                html! {
                    <div class="archive__layout">
                        <ul class="archive__list">
                            { for list.iter().map(|entry| render_row(entry, &selected)) }
                        </ul>
                        <section class="archive__detail">
                            { match detail {
                                Some(entry) => render_detail(entry),
                                None => html! { <p>{ "Seleziona una consultazione" }</p> },
                            } }
                        </section>
                    </div>
                }
            } }
        </main>
    }
}

fn render_row(entry: &HistoryEntry, selected: &UseStateHandle<Option<String>>) -> Html {
    let is_selected = selected.as_deref() == Some(entry.id.as_str());
    let onclick = {
        let selected = selected.clone();
        let id = entry.id.clone();
        Callback::from(move |_| selected.set(Some(id.clone())))
    };
    let badge = entry.challenge().map(|record| {
        html! {
            <span class={classes!("archive__badge", record.outcome.css_class())}>
                { record.outcome.label() }
            </span>
        }
    });
    html! {
        <li class={classes!("archive__row", is_selected.then_some("archive__row--selected"))}>
            <button type="button" {onclick}>
                <span class="archive__date">{ entry.created_at.clone() }</span>
                <span class="archive__question">{ entry.question.clone() }</span>
                { badge.unwrap_or_default() }
            </button>
        </li>
    }
}

fn render_detail(entry: &HistoryEntry) -> Html {
    match entry.challenge() {
        Some(record) => render_challenge_detail(entry, record),
        None => html! {
            <article class="exchange">
                <p class="exchange__question">{ entry.question.clone() }</p>
                <p class="exchange__answer">{ entry.answer.clone() }</p>
                <time>{ entry.created_at.clone() }</time>
            </article>
        },
    }
}

fn render_challenge_detail(entry: &HistoryEntry, record: &ChallengeRecord) -> Html {
    html! {
        <article class={classes!("exchange", "exchange--challenge", record.outcome.css_class())}>
            <h2>{ record.challenge_name.clone() }</h2>
            <p>{ record.description.clone() }</p>
            <dl class="exchange__rolls">
                <dt>{ record.attribute.clone() }</dt>
                <dd>
                    { format!(
                        "({}\u{d7}{}) = {}",
                        record.player_value, record.player_roll, record.player_result
                    ) }
                </dd>
                <dt>{ "Difficoltà" }</dt>
                <dd>
                    { format!(
                        "({}\u{d7}{}) = {}",
                        record.difficulty, record.difficulty_roll, record.difficulty_result
                    ) }
                </dd>
            </dl>
            <h3>{ record.outcome.label() }</h3>
            <p class="exchange__outcome">{ record.outcome_text.clone() }</p>
            <time>{ entry.created_at.clone() }</time>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archivio_core::challenge::Outcome;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn shows_loading_until_the_history_arrives() {
        let props = Props {
            token: AttrValue::from("tok"),
            on_notify: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ArchivePage>::with_props(props).render());
        assert!(html.contains("Consultazione dell'Archivio..."));
    }

    #[function_component(DetailHarness)]
    fn detail_harness() -> Html {
        let record = ChallengeRecord {
            challenge_name: "Antico tomo".into(),
            description: "Decifrare le pagine proibite".into(),
            attribute: "Intelligenza + Occulto".into(),
            player_value: 5,
            player_roll: 4,
            player_result: 20,
            difficulty: 7,
            difficulty_roll: 2,
            difficulty_result: 14,
            outcome: Outcome::Success,
            outcome_text: "Le pagine si aprono.".into(),
        };
        let entry = HistoryEntry {
            id: "h-1".into(),
            question: "tomo".into(),
            answer: String::new(),
            created_at: "2025-06-14T21:10:00".into(),
            kind: "challenge".into(),
            challenge_data: Some(record.clone()),
        };
        render_challenge_detail(&entry, &record)
    }

    #[test]
    fn challenge_detail_lists_both_rolls() {
        let html = block_on(LocalServerRenderer::<DetailHarness>::new().render());
        assert!(html.contains("(5\u{d7}4) = 20"));
        assert!(html.contains("(7\u{d7}2) = 14"));
        assert!(html.contains("Successo!"));
        assert!(html.contains("outcome--success"));
    }
}
