//! Modal walking one opposed challenge from test choice to outcome.

use archivio_core::challenge::{AttemptOutcome, Challenge};
use archivio_core::challenge_flow::{ChallengeFlow, ChallengeStep};
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::toast::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub challenge: Challenge,
    pub on_close: Callback<()>,
    /// Fired once the server resolves the attempt, with the outcome bundle.
    pub on_resolved: Callback<AttemptOutcome>,
    pub on_notify: Callback<Notice>,
}

#[function_component(ChallengeModal)]
pub fn challenge_modal(props: &Props) -> Html {
    let flow = use_state(|| ChallengeFlow::new(props.challenge.clone()));
    let value_input = use_state(String::new);
    let use_refuge = use_state(|| false);
    let busy = use_state(|| false);

    let body = match &flow.step {
        ChallengeStep::Choose => render_choose(&flow),
        ChallengeStep::Input { .. } => render_input(props, &flow, &value_input, &use_refuge, &busy),
        ChallengeStep::Result { outcome } => render_result(outcome, &props.on_close),
    };

    html! {
        <Modal
            open={true}
            title={props.challenge.name.clone()}
            description={Some(AttrValue::from(props.challenge.description.clone()))}
            on_close={props.on_close.clone()}
        >
            { body }
        </Modal>
    }
}

fn render_choose(flow: &UseStateHandle<ChallengeFlow>) -> Html {
    let tests = flow.challenge.tests.clone();
    html! {
        <div class="challenge-choose">
            <p>{ "Scegli la prova da affrontare:" }</p>
            <ul class="challenge-choose__tests">
                { for tests.iter().enumerate().map(|(idx, test)| {
                    let onclick = {
                        let flow = flow.clone();
                        Callback::from(move |_| {
                            let mut next = (*flow).clone();
                            next.select_test(idx);
                            flow.set(next);
                        })
                    };
                    html! {
                        <li>
                            <button type="button" class="challenge-choose__test" {onclick}>
                                <span class="challenge-choose__attribute">{ test.attribute.clone() }</span>
                                <span class="challenge-choose__difficulty">
                                    { format!("Difficoltà {}", test.difficulty) }
                                </span>
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

fn render_input(
    props: &Props,
    flow: &UseStateHandle<ChallengeFlow>,
    value_input: &UseStateHandle<String>,
    use_refuge: &UseStateHandle<bool>,
    busy: &UseStateHandle<bool>,
) -> Html {
    let attribute = flow
        .selected_test()
        .map(|t| t.attribute.clone())
        .unwrap_or_default();

    let oninput = {
        let value_input = value_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                value_input.set(input.value());
            }
        })
    };
    let on_toggle_refuge = {
        let use_refuge = use_refuge.clone();
        Callback::from(move |_| use_refuge.set(!*use_refuge))
    };
    let on_back = {
        let flow = flow.clone();
        Callback::from(move |_| {
            let mut next = (*flow).clone();
            next.back_to_choose();
            flow.set(next);
        })
    };

    let on_submit = {
        let flow = flow.clone();
        let value_input = value_input.clone();
        let use_refuge = use_refuge.clone();
        let busy = busy.clone();
        let token = props.token.to_string();
        let on_resolved = props.on_resolved.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let Ok(value) = value_input.trim().parse::<i32>() else {
                on_notify.emit(Notice::error("Inserisci un valore numerico"));
                return;
            };
            let Some(request) = flow.attempt_request(value, *use_refuge) else {
                on_notify.emit(Notice::error("Il valore non può essere negativo"));
                return;
            };
            busy.set(true);
            let flow = flow.clone();
            let busy = busy.clone();
            let token = token.clone();
            let on_resolved = on_resolved.clone();
            let on_notify = on_notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::attempt_challenge(&token, &request).await {
                    Ok(outcome) => {
                        let mut next = (*flow).clone();
                        next.complete(outcome.clone());
                        flow.set(next);
                        on_resolved.emit(outcome);
                    }
                    // Stay in the input step: the player may resubmit.
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <form class="challenge-input" onsubmit={on_submit}>
            <p>{ format!("Dichiara il tuo valore di {attribute}") }</p>
            <input
                type="number"
                min="0"
                max="20"
                value={(**value_input).clone()}
                oninput={oninput}
            />
            { if flow.challenge.allow_refuge_defense {
                html! {
                    <label class="challenge-input__refuge">
                        <input type="checkbox" checked={**use_refuge} onchange={on_toggle_refuge} />
                        { "Usa la difesa del Rifugio" }
                    </label>
                }
            } else {
                Html::default()
            } }
            <div class="challenge-input__actions">
                <button type="button" onclick={on_back} disabled={**busy}>
                    { "Indietro" }
                </button>
                <button type="submit" disabled={**busy}>
                    { if **busy { "Lancio in corso..." } else { "Tira i dadi" } }
                </button>
            </div>
        </form>
    }
}

fn render_result(outcome: &AttemptOutcome, on_close: &Callback<()>) -> Html {
    let onclick = {
        let cb = on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class={classes!("challenge-result", outcome.outcome.css_class())}>
            <h3 class="challenge-result__label">{ outcome.outcome.label() }</h3>
            <div class="challenge-result__rolls">
                <p>
                    { format!(
                        "Tu: ({}×{}) = {}",
                        outcome.player_value, outcome.player_roll, outcome.player_result
                    ) }
                </p>
                <p>
                    { format!(
                        "Difficoltà: ({}×{}) = {}",
                        outcome.difficulty, outcome.difficulty_roll, outcome.difficulty_result
                    ) }
                </p>
            </div>
            <p class="challenge-result__message">{ outcome.message.clone() }</p>
            <button type="button" {onclick}>{ "Chiudi" }</button>
        </div>
    }
}
