//! Challenge administration: CRUD with per-test fields.

use archivio_core::challenge::{Challenge, ChallengeTest};
use yew::prelude::*;

use crate::components::toast::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub on_notify: Callback<Notice>,
}

fn blank_test() -> ChallengeTest {
    ChallengeTest {
        attribute: String::new(),
        difficulty: 5,
        success_text: String::new(),
        tie_text: String::new(),
        failure_text: String::new(),
    }
}

fn blank_challenge() -> Challenge {
    Challenge {
        id: String::new(),
        name: String::new(),
        description: String::new(),
        keywords: Vec::new(),
        allow_refuge_defense: false,
        tests: vec![blank_test()],
    }
}

#[function_component(ChallengesPanel)]
pub fn challenges_panel(props: &Props) -> Html {
    let list = use_state(|| None::<Vec<Challenge>>);
    let draft = use_state(|| None::<Challenge>);
    let keywords_text = use_state(String::new);
    let reload_tick = use_state(|| 0_u32);

    {
        let token = props.token.to_string();
        let list = list.clone();
        let on_notify = props.on_notify.clone();
        use_effect_with(*reload_tick, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::challenges(&token).await {
                    Ok(challenges) => list.set(Some(challenges)),
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
            || {}
        });
    }

    let open_editor = {
        let draft = draft.clone();
        let keywords_text = keywords_text.clone();
        Callback::from(move |challenge: Challenge| {
            keywords_text.set(challenge.keywords.join(", "));
            draft.set(Some(challenge));
        })
    };
    let on_new = {
        let open_editor = open_editor.clone();
        Callback::from(move |_| open_editor.emit(blank_challenge()))
    };

    let editor = draft.as_ref().map(|challenge| {
        render_editor(
            props,
            &draft,
            &keywords_text,
            &reload_tick,
            challenge,
        )
    });

    html! {
        <section class="admin-challenges">
            <button type="button" onclick={on_new}>{ "Nuova prova" }</button>
            { editor.unwrap_or_default() }
            { render_list(props, &list, &reload_tick, &open_editor) }
        </section>
    }
}

fn render_list(
    props: &Props,
    list: &UseStateHandle<Option<Vec<Challenge>>>,
    reload_tick: &UseStateHandle<u32>,
    open_editor: &Callback<Challenge>,
) -> Html {
    let Some(challenges) = &**list else {
        return html! { <p>{ "Lettura delle prove..." }</p> };
    };
    html! {
        <ul class="admin-challenges__list">
            { for challenges.iter().map(|challenge| {
                let on_edit = {
                    let open_editor = open_editor.clone();
                    let challenge = challenge.clone();
                    Callback::from(move |_| open_editor.emit(challenge.clone()))
                };
                let on_delete = {
                    let token = props.token.to_string();
                    let reload_tick = reload_tick.clone();
                    let on_notify = props.on_notify.clone();
                    let id = challenge.id.clone();
                    Callback::from(move |_| {
                        if !crate::dom::confirm("Sei sicuro di voler eliminare questa prova?") {
                            return;
                        }
                        let token = token.clone();
                        let reload_tick = reload_tick.clone();
                        let on_notify = on_notify.clone();
                        let id = id.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            match crate::api::delete_challenge(&token, &id).await {
                                Ok(()) => reload_tick.set(reload_tick.wrapping_add(1)),
                                Err(e) => on_notify.emit(Notice::error(e.to_string())),
                            }
                        });
                    })
                };
                html! {
                    <li class="admin-challenges__item">
                        <div>
                            <h3>{ challenge.name.clone() }</h3>
                            <p>{ format!(
                                "{} prove · parole chiave: {}",
                                challenge.tests.len(),
                                challenge.keywords.join(", ")
                            ) }</p>
                        </div>
                        <div>
                            <button type="button" onclick={on_edit}>{ "Modifica" }</button>
                            <button type="button" onclick={on_delete}>{ "Elimina" }</button>
                        </div>
                    </li>
                }
            }) }
        </ul>
    }
}

#[allow(clippy::too_many_lines)]
fn render_editor(
    props: &Props,
    draft: &UseStateHandle<Option<Challenge>>,
    keywords_text: &UseStateHandle<String>,
    reload_tick: &UseStateHandle<u32>,
    challenge: &Challenge,
) -> Html {
    let edit = |apply: fn(&mut Challenge, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>()
                && let Some(mut next) = (*draft).clone()
            {
                apply(&mut next, input.value());
                draft.set(Some(next));
            }
        })
    };
    let on_keywords = {
        let keywords_text = keywords_text.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                keywords_text.set(input.value());
            }
        })
    };
    let on_toggle_refuge = {
        let draft = draft.clone();
        Callback::from(move |_| {
            if let Some(mut next) = (*draft).clone() {
                next.allow_refuge_defense = !next.allow_refuge_defense;
                draft.set(Some(next));
            }
        })
    };
    let on_add_test = {
        let draft = draft.clone();
        Callback::from(move |_| {
            if let Some(mut next) = (*draft).clone() {
                next.tests.push(blank_test());
                draft.set(Some(next));
            }
        })
    };
    let edit_test = |idx: usize, apply: fn(&mut ChallengeTest, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>()
                && let Some(mut next) = (*draft).clone()
                && let Some(test) = next.tests.get_mut(idx)
            {
                apply(test, input.value());
                draft.set(Some(next));
            }
        })
    };
    let remove_test = |idx: usize| {
        let draft = draft.clone();
        Callback::from(move |_| {
            if let Some(mut next) = (*draft).clone()
                // At least one test must remain.
                && next.tests.len() > 1
                && idx < next.tests.len()
            {
                next.tests.remove(idx);
                draft.set(Some(next));
            }
        })
    };

    let on_cancel = {
        let draft = draft.clone();
        Callback::from(move |_| draft.set(None))
    };

    let on_save = {
        let token = props.token.to_string();
        let draft = draft.clone();
        let keywords_text = keywords_text.clone();
        let reload_tick = reload_tick.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(mut challenge) = (*draft).clone() else {
                return;
            };
            challenge.keywords = keywords_text
                .split(',')
                .map(|kw| kw.trim().to_lowercase())
                .filter(|kw| !kw.is_empty())
                .collect();
            if challenge.name.trim().is_empty() {
                on_notify.emit(Notice::error("Il nome della prova è obbligatorio"));
                return;
            }
            if challenge.tests.iter().any(|t| t.attribute.trim().is_empty()) {
                on_notify.emit(Notice::error("Ogni prova richiede un attributo"));
                return;
            }
            let token = token.clone();
            let draft = draft.clone();
            let reload_tick = reload_tick.clone();
            let on_notify = on_notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = if challenge.id.is_empty() {
                    crate::api::create_challenge(&token, &challenge).await
                } else {
                    crate::api::update_challenge(&token, &challenge).await
                };
                match result {
                    Ok(_) => {
                        draft.set(None);
                        reload_tick.set(reload_tick.wrapping_add(1));
                        on_notify.emit(Notice::success("Prova salvata"));
                    }
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
        })
    };

    html! {
        <form class="admin-challenges__editor" onsubmit={on_save}>
            <input
                type="text"
                placeholder="Nome"
                value={challenge.name.clone()}
                oninput={edit(|c, v| c.name = v)}
            />
            <input
                type="text"
                placeholder="Descrizione"
                value={challenge.description.clone()}
                oninput={edit(|c, v| c.description = v)}
            />
            <input
                type="text"
                placeholder="Parole chiave (separate da virgola)"
                value={(**keywords_text).clone()}
                oninput={on_keywords}
            />
            <label>
                <input
                    type="checkbox"
                    checked={challenge.allow_refuge_defense}
                    onchange={on_toggle_refuge}
                />
                { "Consenti la difesa del Rifugio" }
            </label>
            { for challenge.tests.iter().enumerate().map(|(idx, test)| html! {
                <fieldset class="admin-challenges__test">
                    <input
                        type="text"
                        placeholder="Attributo (es. Intelligenza + Occulto)"
                        value={test.attribute.clone()}
                        oninput={edit_test(idx, |t, v| t.attribute = v)}
                    />
                    <input
                        type="number"
                        min="1"
                        placeholder="Difficoltà"
                        value={test.difficulty.to_string()}
                        oninput={edit_test(idx, |t, v| {
                            if let Ok(d) = v.trim().parse() {
                                t.difficulty = d;
                            }
                        })}
                    />
                    <input
                        type="text"
                        placeholder="Testo in caso di successo"
                        value={test.success_text.clone()}
                        oninput={edit_test(idx, |t, v| t.success_text = v)}
                    />
                    <input
                        type="text"
                        placeholder="Testo in caso di parità"
                        value={test.tie_text.clone()}
                        oninput={edit_test(idx, |t, v| t.tie_text = v)}
                    />
                    <input
                        type="text"
                        placeholder="Testo in caso di fallimento"
                        value={test.failure_text.clone()}
                        oninput={edit_test(idx, |t, v| t.failure_text = v)}
                    />
                    <button type="button" onclick={remove_test(idx)}>{ "Rimuovi prova" }</button>
                </fieldset>
            }) }
            <button type="button" onclick={on_add_test}>{ "Aggiungi prova" }</button>
            <div class="admin-challenges__actions">
                <button type="button" onclick={on_cancel}>{ "Annulla" }</button>
                <button type="submit">{ "Salva" }</button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn panel_offers_the_new_challenge_action() {
        let props = Props {
            token: AttrValue::from("tok"),
            on_notify: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ChallengesPanel>::with_props(props).render());
        assert!(html.contains("Nuova prova"));
        assert!(html.contains("Lettura delle prove"));
    }

    #[test]
    fn blank_challenge_starts_with_one_test() {
        let c = blank_challenge();
        assert_eq!(c.tests.len(), 1);
        assert!(c.id.is_empty());
    }
}
