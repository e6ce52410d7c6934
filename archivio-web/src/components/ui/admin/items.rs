//! Resource item administration.

use archivio_core::resources::ResourceItem;
use yew::prelude::*;

use crate::components::toast::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub on_notify: Callback<Notice>,
}

fn blank_item() -> ResourceItem {
    ResourceItem {
        id: String::new(),
        name: String::new(),
        description: None,
        cost_resources: 1,
        block_until: None,
    }
}

#[function_component(ItemsPanel)]
pub fn items_panel(props: &Props) -> Html {
    let list = use_state(|| None::<Vec<ResourceItem>>);
    let draft = use_state(|| None::<ResourceItem>);
    let reload_tick = use_state(|| 0_u32);

    {
        let token = props.token.to_string();
        let list = list.clone();
        let on_notify = props.on_notify.clone();
        use_effect_with(*reload_tick, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::resource_items(&token).await {
                    Ok(items) => list.set(Some(items)),
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
            || {}
        });
    }

    let on_new = {
        let draft = draft.clone();
        Callback::from(move |_| draft.set(Some(blank_item())))
    };

    let editor = draft
        .as_ref()
        .map(|item| render_editor(props, &draft, &reload_tick, item));

    html! {
        <section class="admin-items">
            <button type="button" onclick={on_new}>{ "Nuovo oggetto" }</button>
            { editor.unwrap_or_default() }
            { render_list(props, &list, &draft, &reload_tick) }
        </section>
    }
}

fn render_list(
    props: &Props,
    list: &UseStateHandle<Option<Vec<ResourceItem>>>,
    draft: &UseStateHandle<Option<ResourceItem>>,
    reload_tick: &UseStateHandle<u32>,
) -> Html {
    let Some(items) = &**list else {
        return html! { <p>{ "Lettura degli oggetti..." }</p> };
    };
    html! {
        <ul class="admin-items__list">
            { for items.iter().map(|item| {
                let on_edit = {
                    let draft = draft.clone();
                    let item = item.clone();
                    Callback::from(move |_| draft.set(Some(item.clone())))
                };
                let on_delete = {
                    let token = props.token.to_string();
                    let reload_tick = reload_tick.clone();
                    let on_notify = props.on_notify.clone();
                    let id = item.id.clone();
                    Callback::from(move |_| {
                        if !crate::dom::confirm("Sei sicuro di voler eliminare questo oggetto?") {
                            return;
                        }
                        let token = token.clone();
                        let reload_tick = reload_tick.clone();
                        let on_notify = on_notify.clone();
                        let id = id.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            match crate::api::delete_resource_item(&token, &id).await {
                                Ok(()) => reload_tick.set(reload_tick.wrapping_add(1)),
                                Err(e) => on_notify.emit(Notice::error(e.to_string())),
                            }
                        });
                    })
                };
                html! {
                    <li class="admin-items__item">
                        <div>
                            <h3>{ item.name.clone() }</h3>
                            <p>{ format!("Costo: {}", item.cost_resources) }</p>
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

fn render_editor(
    props: &Props,
    draft: &UseStateHandle<Option<ResourceItem>>,
    reload_tick: &UseStateHandle<u32>,
    item: &ResourceItem,
) -> Html {
    let edit = |apply: fn(&mut ResourceItem, String)| {
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
            let Some(item) = (*draft).clone() else {
                return;
            };
            if item.name.trim().is_empty() {
                on_notify.emit(Notice::error("Il nome dell'oggetto è obbligatorio"));
                return;
            }
            if item.cost_resources <= 0 {
                on_notify.emit(Notice::error("Il costo deve essere positivo"));
                return;
            }
            let token = token.clone();
            let draft = draft.clone();
            let reload_tick = reload_tick.clone();
            let on_notify = on_notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = if item.id.is_empty() {
                    crate::api::create_resource_item(&token, &item).await
                } else {
                    crate::api::update_resource_item(&token, &item).await
                };
                match result {
                    Ok(_) => {
                        draft.set(None);
                        reload_tick.set(reload_tick.wrapping_add(1));
                        on_notify.emit(Notice::success("Oggetto salvato"));
                    }
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
        })
    };

    html! {
        <form class="admin-items__editor" onsubmit={on_save}>
            <input
                type="text"
                placeholder="Nome"
                value={item.name.clone()}
                oninput={edit(|i, v| i.name = v)}
            />
            <input
                type="text"
                placeholder="Descrizione"
                value={item.description.clone().unwrap_or_default()}
                oninput={edit(|i, v| i.description = if v.trim().is_empty() { None } else { Some(v) })}
            />
            <input
                type="number"
                min="1"
                placeholder="Costo in risorse"
                value={item.cost_resources.to_string()}
                oninput={edit(|i, v| {
                    if let Ok(cost) = v.trim().parse() {
                        i.cost_resources = cost;
                    }
                })}
            />
            <input
                type="date"
                value={item.block_until.clone().unwrap_or_default()}
                oninput={edit(|i, v| i.block_until = if v.is_empty() { None } else { Some(v) })}
            />
            <div class="admin-items__actions">
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
    fn panel_offers_the_new_item_action() {
        let props = Props {
            token: AttrValue::from("tok"),
            on_notify: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ItemsPanel>::with_props(props).render());
        assert!(html.contains("Nuovo oggetto"));
    }
}
