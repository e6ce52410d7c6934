use yew::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_navigate: Callback<Route>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_navigate.clone();
        Callback::from(move |_| cb.emit(Route::Landing))
    };
    html! {
        <main class="not-found">
            <h1>{ "Pagina non trovata" }</h1>
            <p>{ "Questo scaffale dell'Archivio è vuoto." }</p>
            <button type="button" onclick={go_home}>{ "Torna all'ingresso" }</button>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn offers_a_way_home() {
        let props = Props {
            on_navigate: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<NotFoundPage>::with_props(props).render());
        assert!(html.contains("Pagina non trovata"));
        assert!(html.contains("Torna all'ingresso"));
    }
}
