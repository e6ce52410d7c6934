use archivio_core::settings::EventSettings;
use yew::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub settings: EventSettings,
    pub on_navigate: Callback<Route>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &Props) -> Html {
    let go = |route: Route| {
        let cb = props.on_navigate.clone();
        Callback::from(move |_| cb.emit(route.clone()))
    };

    let style = props
        .settings
        .background_image_url
        .as_ref()
        .map(|url| format!("background-image: url({url})"));

    html! {
        <main class="landing" {style}>
            <section class="landing__hero">
                <h1>{ props.settings.hero_title.clone() }</h1>
                <h2>{ props.settings.hero_subtitle.clone() }</h2>
                <p>{ props.settings.hero_description.clone() }</p>
                <div class="landing__actions">
                    <button type="button" class="landing__cta" onclick={go(Route::Login)}>
                        { "Accedi" }
                    </button>
                    <button type="button" onclick={go(Route::Register)}>
                        { "Registrati" }
                    </button>
                </div>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn hero_text_comes_from_the_settings() {
        let props = Props {
            settings: EventSettings::default(),
            on_navigate: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LandingPage>::with_props(props).render());
        assert!(html.contains("Svela i Segreti"));
        assert!(html.contains("dell'Antico Sapere"));
        assert!(html.contains("Accedi"));
    }

    #[test]
    fn background_image_is_applied_when_configured() {
        let props = Props {
            settings: EventSettings {
                background_image_url: Some("https://example.com/bg.jpg".into()),
                ..EventSettings::default()
            },
            on_navigate: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LandingPage>::with_props(props).render());
        assert!(html.contains("background-image"));
    }
}
