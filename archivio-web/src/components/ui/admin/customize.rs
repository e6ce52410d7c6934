//! Event customization form: branding text, colors, time window.

use archivio_core::settings::EventSettings;
use yew::prelude::*;

use crate::components::toast::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub settings: EventSettings,
    /// Fired with the saved value so the app-wide cache can be replaced.
    pub on_saved: Callback<EventSettings>,
    pub on_notify: Callback<Notice>,
}

#[function_component(CustomizePanel)]
pub fn customize_panel(props: &Props) -> Html {
    let draft = use_state(|| props.settings.clone());
    let busy = use_state(|| false);

    let edit = |apply: fn(&mut EventSettings, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                let mut next = (*draft).clone();
                apply(&mut next, input.value());
                draft.set(next);
            }
        })
    };
    let edit_area = |apply: fn(&mut EventSettings, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                let mut next = (*draft).clone();
                apply(&mut next, area.value());
                draft.set(next);
            }
        })
    };
    let on_save = {
        let token = props.token.to_string();
        let draft = draft.clone();
        let busy = busy.clone();
        let on_saved = props.on_saved.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            busy.set(true);
            let token = token.clone();
            let settings = (*draft).clone();
            let busy = busy.clone();
            let on_saved = on_saved.clone();
            let on_notify = on_notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::config::save_settings(&token, &settings).await {
                    Ok(saved) => {
                        on_saved.emit(saved);
                        on_notify.emit(Notice::success("Personalizzazione salvata"));
                    }
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let field = |label: &str, value: String, oninput: Callback<InputEvent>| {
        html! {
            <label class="admin-customize__field">
                <span>{ label.to_string() }</span>
                <input type="text" {value} {oninput} />
            </label>
        }
    };
    let color = |label: &str, value: String, oninput: Callback<InputEvent>| {
        html! {
            <label class="admin-customize__field">
                <span>{ label.to_string() }</span>
                <input type="color" {value} {oninput} />
            </label>
        }
    };

    html! {
        <form class="admin-customize" onsubmit={on_save}>
            { field("Nome dell'evento", draft.event_name.clone(), edit(|s, v| s.event_name = v)) }
            { field("Nome dell'oracolo", draft.oracle_name.clone(), edit(|s, v| s.oracle_name = v)) }
            { field(
                "Logo (URL)",
                draft.event_logo_url.clone().unwrap_or_default(),
                edit(|s, v| s.event_logo_url = if v.trim().is_empty() { None } else { Some(v) }),
            ) }
            { field(
                "Immagine di sfondo (URL)",
                draft.background_image_url.clone().unwrap_or_default(),
                edit(|s, v| s.background_image_url = if v.trim().is_empty() { None } else { Some(v) }),
            ) }
            <div class="admin-customize__colors">
                { color("Colore primario", draft.primary_color.clone(), edit(|s, v| s.primary_color = v)) }
                { color("Colore secondario", draft.secondary_color.clone(), edit(|s, v| s.secondary_color = v)) }
                { color("Colore d'accento", draft.accent_color.clone(), edit(|s, v| s.accent_color = v)) }
                { color("Colore di sfondo", draft.background_color.clone(), edit(|s, v| s.background_color = v)) }
            </div>
            { field("Titolo principale", draft.hero_title.clone(), edit(|s, v| s.hero_title = v)) }
            { field("Sottotitolo", draft.hero_subtitle.clone(), edit(|s, v| s.hero_subtitle = v)) }
            <label class="admin-customize__field">
                <span>{ "Descrizione" }</span>
                <textarea
                    value={draft.hero_description.clone()}
                    oninput={edit_area(|s, v| s.hero_description = v)}
                />
            </label>
            { field(
                "Testo della chat",
                draft.chat_placeholder.clone(),
                edit(|s, v| s.chat_placeholder = v),
            ) }
            <div class="admin-customize__window">
                { field(
                    "Inizio evento",
                    draft.event_window_start.clone().unwrap_or_default(),
                    edit(|s, v| s.event_window_start = if v.trim().is_empty() { None } else { Some(v) }),
                ) }
                { field(
                    "Fine evento",
                    draft.event_window_end.clone().unwrap_or_default(),
                    edit(|s, v| s.event_window_end = if v.trim().is_empty() { None } else { Some(v) }),
                ) }
            </div>
            <button type="submit" disabled={*busy}>
                { if *busy { "Salvataggio..." } else { "Salva la personalizzazione" } }
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
    fn form_is_prefilled_from_the_settings_cache() {
        let props = Props {
            token: AttrValue::from("tok"),
            settings: EventSettings::default(),
            on_saved: Callback::noop(),
            on_notify: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<CustomizePanel>::with_props(props).render());
        assert!(html.contains("L'Archivio Maledetto"));
        assert!(html.contains("#8a0000"));
        assert!(html.contains("Salva la personalizzazione"));
    }
}
