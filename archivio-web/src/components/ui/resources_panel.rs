//! Resource ledger panel: totals plus purchasable items.

use archivio_core::resources::{ResourceItem, ResourceState};
use yew::prelude::*;

use crate::components::toast::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub on_notify: Callback<Notice>,
}

#[function_component(ResourcesPanel)]
pub fn resources_panel(props: &Props) -> Html {
    let state = use_state(|| None::<ResourceState>);
    let busy = use_state(|| false);

    {
        let token = props.token.to_string();
        let state = state.clone();
        let on_notify = props.on_notify.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::resources_available(&token).await {
                    Ok(ledger) => state.set(Some(ledger)),
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
            || {}
        });
    }

    let Some(ledger) = &*state else {
        return html! { <p class="resources-panel__loading">{ "Calcolo delle risorse..." }</p> };
    };

    html! {
        <section class="resources-panel">
            <h2>{ "Risorse" }</h2>
            <div class="resources-panel__totals">
                <span>{ format!("Totali: {}", ledger.total_resources) }</span>
                <span>{ format!("Bloccate: {}", ledger.locked_resources) }</span>
                <span class="resources-panel__available">
                    { format!("Disponibili: {}", ledger.available_resources) }
                </span>
            </div>
            { if ledger.items.is_empty() {
                html! { <p>{ "Nessun oggetto acquistabile al momento." }</p> }
            } else {
                html! {
                    <ul class="resources-panel__items">
                        { for ledger.items.iter().map(|item| render_item(props, &state, &busy, ledger, item)) }
                    </ul>
                }
            } }
        </section>
    }
}

fn render_item(
    props: &Props,
    state: &UseStateHandle<Option<ResourceState>>,
    busy: &UseStateHandle<bool>,
    ledger: &ResourceState,
    item: &ResourceItem,
) -> Html {
    let affordable = ledger.can_purchase(item);
    let onclick = {
        let state = state.clone();
        let busy = busy.clone();
        let token = props.token.to_string();
        let on_notify = props.on_notify.clone();
        let item_id = item.id.clone();
        let item_name = item.name.clone();
        Callback::from(move |_| {
            if *busy {
                return;
            }
            busy.set(true);
            let state = state.clone();
            let busy = busy.clone();
            let token = token.clone();
            let on_notify = on_notify.clone();
            let item_id = item_id.clone();
            let item_name = item_name.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::purchase(&token, &item_id).await {
                    // The response is the whole new ledger; replace, never
                    // decrement locally.
                    Ok(ledger) => {
                        state.set(Some(ledger));
                        on_notify.emit(Notice::success(format!("{item_name} acquisito")));
                    }
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <li class="resources-panel__item">
            <div>
                <h3>{ item.name.clone() }</h3>
                { item.description.as_ref().map(|d| html! { <p>{ d.clone() }</p> }).unwrap_or_default() }
                { item.block_until.as_ref().map(|date| html! {
                    <p class="resources-panel__block">{ format!("Punti bloccati fino al {date}") }</p>
                }).unwrap_or_default() }
            </div>
            <button type="button" disabled={!affordable || **busy} {onclick}>
                { format!("Acquista ({})", item.cost_resources) }
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_loading_row_before_data() {
        let props = Props {
            token: AttrValue::from("tok"),
            on_notify: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ResourcesPanel>::with_props(props).render());
        assert!(html.contains("Calcolo delle risorse"));
    }
}
