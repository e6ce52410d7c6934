//! Modal for declaring attribute values and redeeming aid levels.
//!
//! Two steps: declare values for the fixed attribute set, then pick an
//! eligible (aid, level) pair. Declared values persist to device storage
//! under the event-window key so a returning player skips re-entry; the
//! eligible set is always recomputed against fresh server data.

use archivio_core::aid::{AID_ATTRIBUTES, Aid, AidUseResult, UsedAid};
use archivio_core::aid_flow::{AidFlow, AidStep};
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::toast::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    /// Device-storage namespace from the event settings.
    pub window_key: AttrValue,
    pub on_close: Callback<()>,
    /// Fired after a successful redeem with the aid name and the server text.
    pub on_redeemed: Callback<(String, AidUseResult)>,
    pub on_notify: Callback<Notice>,
}

#[function_component(AidsModal)]
pub fn aids_modal(props: &Props) -> Html {
    let flow = use_state(AidFlow::new);
    let aids = use_state(|| None::<Vec<Aid>>);
    let used = use_state(|| None::<Vec<UsedAid>>);
    let busy = use_state(|| false);

    // On mount: restore any stored declarations, then load aids and used
    // pairs. The two reads are independent; issue both at once and render a
    // loading row until both have landed.
    {
        let token = props.token.to_string();
        let window_key = props.window_key.to_string();
        let flow = flow.clone();
        let aids = aids.clone();
        let used = used.clone();
        let on_notify = props.on_notify.clone();
        use_effect_with((), move |()| {
            let stored = crate::storage::load_declared_values(&window_key);
            if !stored.is_empty() {
                flow.set(AidFlow::with_declared(stored));
            }
            {
                let token = token.clone();
                let aids = aids.clone();
                let on_notify = on_notify.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match crate::api::active_aids(&token).await {
                        Ok(list) => aids.set(Some(list)),
                        Err(e) => {
                            on_notify.emit(Notice::error(e.to_string()));
                            aids.set(Some(Vec::new()));
                        }
                    }
                });
            }
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::my_used_aids(&token).await {
                    Ok(list) => used.set(Some(list)),
                    Err(e) => {
                        on_notify.emit(Notice::error(e.to_string()));
                        used.set(Some(Vec::new()));
                    }
                }
            });
            || {}
        });
    }

    let body = match (&*aids, &*used) {
        (Some(aids_list), Some(used_list)) => match flow.step {
            AidStep::Input => render_input(props, &flow, aids_list, used_list),
            AidStep::Select => render_select(props, &flow, aids_list, used_list, &busy),
        },
        _ => html! { <p class="aids-modal__loading">{ "Consultazione dell'Archivio..." }</p> },
    };

    html! {
        <Modal
            open={true}
            title={AttrValue::from("Focalizzazioni")}
            on_close={props.on_close.clone()}
        >
            { body }
        </Modal>
    }
}

fn render_input(
    props: &Props,
    flow: &UseStateHandle<AidFlow>,
    aids: &[Aid],
    used: &[UsedAid],
) -> Html {
    let on_proceed = {
        let flow = flow.clone();
        let window_key = props.window_key.to_string();
        let on_notify = props.on_notify.clone();
        let aids = aids.to_vec();
        let used = used.to_vec();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*flow).clone();
            if !next.can_proceed() {
                on_notify.emit(Notice::error(
                    "Dichiara almeno un valore per procedere",
                ));
                return;
            }
            crate::storage::store_declared_values(&window_key, &next.declared);
            let eligible = next.proceed(&aids, &used);
            if eligible.is_empty() {
                on_notify.emit(Notice::error(
                    "Nessuna focalizzazione disponibile con i valori dichiarati",
                ));
            }
            flow.set(next);
        })
    };

    html! {
        <form class="aids-input" onsubmit={on_proceed}>
            <p>{ "Dichiara i tuoi valori di attributo:" }</p>
            { for AID_ATTRIBUTES.iter().map(|attribute| {
                let value = flow
                    .declared
                    .get(*attribute)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                let oninput = {
                    let flow = flow.clone();
                    let attribute = (*attribute).to_string();
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                            let mut next = (*flow).clone();
                            match input.value().trim().parse::<i32>() {
                                Ok(v) => next.declare(&attribute, v),
                                Err(_) => next.clear(&attribute),
                            }
                            flow.set(next);
                        }
                    })
                };
                html! {
                    <label class="aids-input__attribute">
                        <span>{ *attribute }</span>
                        <input type="number" min="0" {value} {oninput} />
                    </label>
                }
            }) }
            <button type="submit">{ "Verifica le focalizzazioni" }</button>
        </form>
    }
}

fn render_select(
    props: &Props,
    flow: &UseStateHandle<AidFlow>,
    aids: &[Aid],
    used: &[UsedAid],
    busy: &UseStateHandle<bool>,
) -> Html {
    // Recomputed on every render so a refreshed used-list is reflected
    // without leaving the step.
    let eligible = flow.qualifying(aids, used);

    let on_back = {
        let flow = flow.clone();
        Callback::from(move |_| {
            let mut next = (*flow).clone();
            next.back_to_input();
            flow.set(next);
        })
    };

    html! {
        <div class="aids-select">
            { if eligible.is_empty() {
                html! { <p>{ "Nessuna focalizzazione rimasta per i valori dichiarati." }</p> }
            } else {
                html! {
                    <ul class="aids-select__list">
                        { for eligible.iter().map(|q| {
                            html! {
                                <li class="aids-select__aid">
                                    <h3>{ q.aid.name.clone() }</h3>
                                    <p class="aids-select__attribute">{ q.aid.attribute.clone() }</p>
                                    <div class="aids-select__levels">
                                        { for q.levels.iter().map(|level| {
                                            let onclick = redeem_callback(
                                                props, flow, busy, &q.aid, level.level,
                                            );
                                            html! {
                                                <button type="button" disabled={**busy} {onclick}>
                                                    { format!("{} (liv. {})", level.level_name, level.level) }
                                                </button>
                                            }
                                        }) }
                                    </div>
                                </li>
                            }
                        }) }
                    </ul>
                }
            } }
            <button type="button" class="aids-select__back" onclick={on_back} disabled={**busy}>
                { "Modifica i valori" }
            </button>
        </div>
    }
}

fn redeem_callback(
    props: &Props,
    flow: &UseStateHandle<AidFlow>,
    busy: &UseStateHandle<bool>,
    aid: &Aid,
    level: i32,
) -> Callback<MouseEvent> {
    let flow = flow.clone();
    let busy = busy.clone();
    let aid = aid.clone();
    let token = props.token.to_string();
    let on_redeemed = props.on_redeemed.clone();
    let on_notify = props.on_notify.clone();
    Callback::from(move |_| {
        if *busy {
            return;
        }
        let Some(request) = flow.use_request(&aid, level) else {
            return;
        };
        busy.set(true);
        let busy = busy.clone();
        let token = token.clone();
        let aid_name = aid.name.clone();
        let on_redeemed = on_redeemed.clone();
        let on_notify = on_notify.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match crate::api::use_aid(&token, &request).await {
                Ok(result) => on_redeemed.emit((aid_name, result)),
                // Failure keeps the selection step; manual retry.
                Err(e) => on_notify.emit(Notice::error(e.to_string())),
            }
            busy.set(false);
        });
    })
}
