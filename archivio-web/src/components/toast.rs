use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient status message; one at a time, newest wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &Props) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return Html::default();
    };

    let class = match notice.kind {
        NoticeKind::Success => "toast toast--success",
        NoticeKind::Error => "toast toast--error",
    };
    let on_dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div {class} role="status">
            <span class="toast__message">{ notice.message.clone() }</span>
            <button type="button" class="toast__close" aria-label="Chiudi avviso" onclick={on_dismiss}>
                {"X"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn error_notice_renders_with_error_class() {
        let props = Props {
            notice: Some(Notice::error("Token scaduto")),
            on_dismiss: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Toast>::with_props(props).render());
        assert!(html.contains("toast--error"));
        assert!(html.contains("Token scaduto"));
    }

    #[test]
    fn absent_notice_renders_nothing() {
        let props = Props {
            notice: None,
            on_dismiss: Callback::noop(),
        };
        let html = block_on(
            LocalServerRenderer::<Toast>::with_props(props)
                .hydratable(false)
                .render(),
        );
        assert!(!html.contains("toast"));
    }
}
