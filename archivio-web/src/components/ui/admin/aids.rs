//! Aid administration: CRUD with level tiers and the event date window.

use archivio_core::aid::{AID_ATTRIBUTES, Aid, AidLevel};
use yew::prelude::*;

use crate::components::toast::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub on_notify: Callback<Notice>,
}

fn blank_level() -> AidLevel {
    AidLevel {
        level: 1,
        level_name: String::new(),
        text: String::new(),
    }
}

fn blank_aid() -> Aid {
    Aid {
        id: String::new(),
        name: String::new(),
        attribute: AID_ATTRIBUTES[0].to_string(),
        levels: vec![blank_level()],
        event_date: String::new(),
        end_date: None,
        start_time: None,
        end_time: None,
    }
}

#[function_component(AidsPanel)]
pub fn aids_panel(props: &Props) -> Html {
    let list = use_state(|| None::<Vec<Aid>>);
    let draft = use_state(|| None::<Aid>);
    let reload_tick = use_state(|| 0_u32);

    {
        let token = props.token.to_string();
        let list = list.clone();
        let on_notify = props.on_notify.clone();
        use_effect_with(*reload_tick, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::active_aids(&token).await {
                    Ok(aids) => list.set(Some(aids)),
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
            || {}
        });
    }

    let on_new = {
        let draft = draft.clone();
        Callback::from(move |_| draft.set(Some(blank_aid())))
    };

    let editor = draft
        .as_ref()
        .map(|aid| render_editor(props, &draft, &reload_tick, aid));

    html! {
        <section class="admin-aids">
            <button type="button" onclick={on_new}>{ "Nuova focalizzazione" }</button>
            { editor.unwrap_or_default() }
            { render_list(props, &list, &draft, &reload_tick) }
        </section>
    }
}

fn render_list(
    props: &Props,
    list: &UseStateHandle<Option<Vec<Aid>>>,
    draft: &UseStateHandle<Option<Aid>>,
    reload_tick: &UseStateHandle<u32>,
) -> Html {
    let Some(aids) = &**list else {
        return html! { <p>{ "Lettura delle focalizzazioni..." }</p> };
    };
    html! {
        <ul class="admin-aids__list">
            { for aids.iter().map(|aid| {
                let on_edit = {
                    let draft = draft.clone();
                    let aid = aid.clone();
                    Callback::from(move |_| draft.set(Some(aid.clone())))
                };
                let on_delete = {
                    let token = props.token.to_string();
                    let reload_tick = reload_tick.clone();
                    let on_notify = props.on_notify.clone();
                    let id = aid.id.clone();
                    Callback::from(move |_| {
                        if !crate::dom::confirm("Sei sicuro di voler eliminare questa focalizzazione?") {
                            return;
                        }
                        let token = token.clone();
                        let reload_tick = reload_tick.clone();
                        let on_notify = on_notify.clone();
                        let id = id.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            match crate::api::delete_aid(&token, &id).await {
                                Ok(()) => reload_tick.set(reload_tick.wrapping_add(1)),
                                Err(e) => on_notify.emit(Notice::error(e.to_string())),
                            }
                        });
                    })
                };
                html! {
                    <li class="admin-aids__item">
                        <div>
                            <h3>{ aid.name.clone() }</h3>
                            <p>{ format!("{} · {} livelli · {}", aid.attribute, aid.levels.len(), aid.event_date) }</p>
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
    draft: &UseStateHandle<Option<Aid>>,
    reload_tick: &UseStateHandle<u32>,
    aid: &Aid,
) -> Html {
    let edit = |apply: fn(&mut Aid, String)| {
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
    let on_attribute = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>()
                && let Some(mut next) = (*draft).clone()
            {
                next.attribute = select.value();
                draft.set(Some(next));
            }
        })
    };
    let edit_level = |idx: usize, apply: fn(&mut AidLevel, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>()
                && let Some(mut next) = (*draft).clone()
                && let Some(level) = next.levels.get_mut(idx)
            {
                apply(level, input.value());
                draft.set(Some(next));
            }
        })
    };
    let on_add_level = {
        let draft = draft.clone();
        Callback::from(move |_| {
            if let Some(mut next) = (*draft).clone() {
                next.levels.push(blank_level());
                draft.set(Some(next));
            }
        })
    };
    let remove_level = |idx: usize| {
        let draft = draft.clone();
        Callback::from(move |_| {
            if let Some(mut next) = (*draft).clone()
                && next.levels.len() > 1
                && idx < next.levels.len()
            {
                next.levels.remove(idx);
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
        let reload_tick = reload_tick.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(aid) = (*draft).clone() else {
                return;
            };
            if aid.name.trim().is_empty() {
                on_notify.emit(Notice::error("Il nome della focalizzazione è obbligatorio"));
                return;
            }
            if aid.levels.iter().any(|l| l.level_name.trim().is_empty()) {
                on_notify.emit(Notice::error("Ogni livello richiede un nome"));
                return;
            }
            let token = token.clone();
            let draft = draft.clone();
            let reload_tick = reload_tick.clone();
            let on_notify = on_notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = if aid.id.is_empty() {
                    crate::api::create_aid(&token, &aid).await
                } else {
                    crate::api::update_aid(&token, &aid).await
                };
                match result {
                    Ok(_) => {
                        draft.set(None);
                        reload_tick.set(reload_tick.wrapping_add(1));
                        on_notify.emit(Notice::success("Focalizzazione salvata"));
                    }
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
        })
    };

    let opt_edit = |apply: fn(&mut Aid, Option<String>)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>()
                && let Some(mut next) = (*draft).clone()
            {
                let value = input.value();
                apply(&mut next, if value.is_empty() { None } else { Some(value) });
                draft.set(Some(next));
            }
        })
    };

    html! {
        <form class="admin-aids__editor" onsubmit={on_save}>
            <input
                type="text"
                placeholder="Nome"
                value={aid.name.clone()}
                oninput={edit(|a, v| a.name = v)}
            />
            <select onchange={on_attribute}>
                { for AID_ATTRIBUTES.iter().map(|attribute| html! {
                    <option value={*attribute} selected={aid.attribute == *attribute}>
                        { *attribute }
                    </option>
                }) }
            </select>
            <div class="admin-aids__window">
                <input
                    type="date"
                    value={aid.event_date.clone()}
                    oninput={edit(|a, v| a.event_date = v)}
                />
                <input
                    type="date"
                    value={aid.end_date.clone().unwrap_or_default()}
                    oninput={opt_edit(|a, v| a.end_date = v)}
                />
                <input
                    type="time"
                    value={aid.start_time.clone().unwrap_or_default()}
                    oninput={opt_edit(|a, v| a.start_time = v)}
                />
                <input
                    type="time"
                    value={aid.end_time.clone().unwrap_or_default()}
                    oninput={opt_edit(|a, v| a.end_time = v)}
                />
            </div>
            { for aid.levels.iter().enumerate().map(|(idx, level)| html! {
                <fieldset class="admin-aids__level">
                    <input
                        type="number"
                        min="1"
                        placeholder="Soglia"
                        value={level.level.to_string()}
                        oninput={edit_level(idx, |l, v| {
                            if let Ok(n) = v.trim().parse() {
                                l.level = n;
                            }
                        })}
                    />
                    <input
                        type="text"
                        placeholder="Nome del livello"
                        value={level.level_name.clone()}
                        oninput={edit_level(idx, |l, v| l.level_name = v)}
                    />
                    <input
                        type="text"
                        placeholder="Testo rivelato"
                        value={level.text.clone()}
                        oninput={edit_level(idx, |l, v| l.text = v)}
                    />
                    <button type="button" onclick={remove_level(idx)}>{ "Rimuovi livello" }</button>
                </fieldset>
            }) }
            <button type="button" onclick={on_add_level}>{ "Aggiungi livello" }</button>
            <div class="admin-aids__actions">
                <button type="button" onclick={on_cancel}>{ "Annulla" }</button>
                <button type="submit">{ "Salva" }</button>
            </div>
        </form>
    }
}
