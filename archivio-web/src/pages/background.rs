//! Background sheet: fillable once, then locked to read-only.

use archivio_core::background::{BackgroundSheet, CONTACTS_BUDGET, Contact};
use yew::prelude::*;

use crate::components::toast::Notice;
use crate::components::ui::resources_panel::ResourcesPanel;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub on_notify: Callback<Notice>,
}

#[function_component(BackgroundPage)]
pub fn background_page(props: &Props) -> Html {
    let sheet = use_state(|| None::<BackgroundSheet>);
    let saving = use_state(|| false);

    {
        let token = props.token.to_string();
        let sheet = sheet.clone();
        let on_notify = props.on_notify.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::my_background(&token).await {
                    Ok(s) => sheet.set(Some(s)),
                    Err(e) => {
                        sheet.set(Some(BackgroundSheet::default()));
                        on_notify.emit(Notice::error(e.to_string()));
                    }
                }
            });
            || {}
        });
    }

    let Some(current) = sheet.as_ref() else {
        return html! {
            <main class="background">
                <p class="background__loading">{ "Consultazione dell'Archivio..." }</p>
            </main>
        };
    };

    let body = if current.locked_for_player {
        render_locked(current)
    } else {
        render_editor(props, current, &sheet, &saving)
    };

    html! {
        <main class="background">
            <h1>{ "Background" }</h1>
            { body }
            <ResourcesPanel token={props.token.clone()} on_notify={props.on_notify.clone()} />
        </main>
    }
}

fn render_locked(sheet: &BackgroundSheet) -> Html {
    html! {
        <section class="background__sheet background__sheet--locked">
            <p class="background__notice">{ "Il tuo Background è stato salvato ed è definitivo." }</p>
            <dl>
                <dt>{ "Risorse" }</dt><dd>{ sheet.risorse }</dd>
                <dt>{ "Seguaci" }</dt><dd>{ sheet.seguaci }</dd>
                <dt>{ "Rifugio" }</dt><dd>{ sheet.rifugio }</dd>
                <dt>{ "Mentore" }</dt><dd>{ sheet.mentor }</dd>
                <dt>{ "Notorietà" }</dt><dd>{ sheet.notoriety }</dd>
            </dl>
            { if sheet.contacts.is_empty() {
                html! {}
            } else {
                html! {
                    <>
                        <h2>{ "Contatti" }</h2>
                        <ul class="background__contacts">
                            { for sheet.contacts.iter().map(|c| html! {
                                <li>{ format!("{}: {}", c.name, c.value) }</li>
                            }) }
                        </ul>
                    </>
                }
            } }
        </section>
    }
}

fn render_editor(
    props: &Props,
    current: &BackgroundSheet,
    sheet: &UseStateHandle<Option<BackgroundSheet>>,
    saving: &UseStateHandle<bool>,
) -> Html {
    // Every field edit rebuilds the whole sheet; the state holds the draft.
    let edit_number = |apply: fn(&mut BackgroundSheet, i32)| {
        let sheet = sheet.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>()
                && let Ok(value) = input.value().parse::<i32>()
                && let Some(mut draft) = (*sheet).clone()
            {
                apply(&mut draft, value);
                sheet.set(Some(draft));
            }
        })
    };

    let edit_contact_name = |index: usize| {
        let sheet = sheet.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>()
                && let Some(mut draft) = (*sheet).clone()
                && let Some(contact) = draft.contacts.get_mut(index)
            {
                contact.name = input.value();
                sheet.set(Some(draft));
            }
        })
    };

    let edit_contact_value = |index: usize| {
        let sheet = sheet.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>()
                && let Ok(value) = input.value().parse::<i32>()
                && let Some(mut draft) = (*sheet).clone()
                && let Some(contact) = draft.contacts.get_mut(index)
            {
                contact.value = value;
                sheet.set(Some(draft));
            }
        })
    };

    let add_contact = {
        let sheet = sheet.clone();
        Callback::from(move |_| {
            if let Some(mut draft) = (*sheet).clone() {
                draft.contacts.push(Contact {
                    name: String::new(),
                    value: 0,
                });
                sheet.set(Some(draft));
            }
        })
    };

    let remove_contact = |index: usize| {
        let sheet = sheet.clone();
        Callback::from(move |_| {
            if let Some(mut draft) = (*sheet).clone()
                && index < draft.contacts.len()
            {
                draft.contacts.remove(index);
                sheet.set(Some(draft));
            }
        })
    };

    let on_save = {
        let token = props.token.to_string();
        let on_notify = props.on_notify.clone();
        let sheet = sheet.clone();
        let saving = saving.clone();
        let draft = current.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            if let Err(reason) = draft.validate() {
                on_notify.emit(Notice::error(reason.to_string()));
                return;
            }
            saving.set(true);
            let token = token.clone();
            let on_notify = on_notify.clone();
            let sheet = sheet.clone();
            let saving = saving.clone();
            let payload = draft.submission();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::save_background(&token, &payload).await {
                    Ok(stored) => {
                        sheet.set(Some(stored));
                        on_notify.emit(Notice::success("Background salvato"));
                    }
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let contacts_total = current.contacts_total();

    html! {
        <form class="background__sheet" onsubmit={on_save}>
            <p class="background__notice">
                { "Il Background si compila una sola volta: dopo il salvataggio diventa definitivo." }
            </p>
            <label>
                { "Risorse (0-20)" }
                <input type="number" min="0" max="20" value={current.risorse.to_string()}
                    oninput={edit_number(|s, v| s.risorse = v)} />
            </label>
            <label>
                { "Seguaci" }
                <input type="number" min="0" value={current.seguaci.to_string()}
                    oninput={edit_number(|s, v| s.seguaci = v)} />
            </label>
            <label>
                { "Rifugio (1-5)" }
                <input type="number" min="1" max="5" value={current.rifugio.to_string()}
                    oninput={edit_number(|s, v| s.rifugio = v)} />
            </label>
            <label>
                { "Mentore" }
                <input type="number" min="0" value={current.mentor.to_string()}
                    oninput={edit_number(|s, v| s.mentor = v)} />
            </label>
            <label>
                { "Notorietà" }
                <input type="number" min="0" value={current.notoriety.to_string()}
                    oninput={edit_number(|s, v| s.notoriety = v)} />
            </label>

            <h2>{ format!("Contatti ({contacts_total}/{CONTACTS_BUDGET})") }</h2>
            { for current.contacts.iter().enumerate().map(|(i, contact)| html! {
                <div class="background__contact">
                    <input type="text" placeholder="Nome del contatto"
                        value={contact.name.clone()} oninput={edit_contact_name(i)} />
                    <input type="number" min="0" value={contact.value.to_string()}
                        oninput={edit_contact_value(i)} />
                    <button type="button" onclick={remove_contact(i)}>{ "Rimuovi" }</button>
                </div>
            }) }
            <button type="button" class="background__add" onclick={add_contact}>
                { "Aggiungi contatto" }
            </button>

            <button type="submit" disabled={**saving}>
                { if **saving { "Salvataggio..." } else { "Salva il Background" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn shows_loading_until_the_sheet_arrives() {
        let props = Props {
            token: AttrValue::from("tok"),
            on_notify: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<BackgroundPage>::with_props(props).render());
        assert!(html.contains("Consultazione dell'Archivio..."));
    }

    #[function_component(LockedHarness)]
    fn locked_harness() -> Html {
        render_locked(&BackgroundSheet {
            risorse: 10,
            seguaci: 2,
            rifugio: 3,
            contacts: vec![Contact {
                name: "polizia".into(),
                value: 3,
            }],
            locked_for_player: true,
            ..BackgroundSheet::default()
        })
    }

    #[test]
    fn locked_sheet_renders_read_only_values() {
        let html = block_on(LocalServerRenderer::<LockedHarness>::new().render());
        assert!(html.contains("definitivo"));
        assert!(html.contains("polizia: 3"));
        assert!(!html.contains("<input"));
    }
}
