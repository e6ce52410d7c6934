//! Knowledge-base administration: create, upload, delete.

use archivio_core::knowledge::{KnowledgeCreate, KnowledgeDoc, uploadable_filename};
use yew::prelude::*;

use crate::components::toast::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub token: AttrValue,
    pub on_notify: Callback<Notice>,
}

#[function_component(KnowledgePanel)]
pub fn knowledge_panel(props: &Props) -> Html {
    let docs = use_state(|| None::<Vec<KnowledgeDoc>>);
    let title = use_state(String::new);
    let content = use_state(String::new);
    let category = use_state(|| "general".to_string());

    {
        let token = props.token.to_string();
        let docs = docs.clone();
        let on_notify = props.on_notify.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::knowledge_list(&token).await {
                    Ok(list) => docs.set(Some(list)),
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
            || {}
        });
    }

    let on_create = {
        let token = props.token.to_string();
        let docs = docs.clone();
        let title = title.clone();
        let content = content.clone();
        let category = category.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if title.trim().is_empty() || content.trim().is_empty() {
                on_notify.emit(Notice::error("Titolo e contenuto sono obbligatori"));
                return;
            }
            let body = KnowledgeCreate {
                title: title.trim().to_string(),
                content: (*content).clone(),
                category: (*category).clone(),
            };
            let token = token.clone();
            let docs = docs.clone();
            let title = title.clone();
            let content = content.clone();
            let on_notify = on_notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::create_knowledge(&token, &body).await {
                    Ok(doc) => {
                        let mut list = docs.as_ref().cloned().unwrap_or_default();
                        list.insert(0, doc);
                        docs.set(Some(list));
                        title.set(String::new());
                        content.set(String::new());
                        on_notify.emit(Notice::success("Documento creato"));
                    }
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
        })
    };

    let on_upload = {
        let token = props.token.to_string();
        let docs = docs.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if !uploadable_filename(&file.name()) {
                on_notify.emit(Notice::error("Solo file .txt o .md supportati"));
                return;
            }
            let token = token.clone();
            let docs = docs.clone();
            let on_notify = on_notify.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::upload_knowledge(&token, &file).await {
                    Ok(doc) => {
                        let mut list = docs.as_ref().cloned().unwrap_or_default();
                        list.insert(0, doc);
                        docs.set(Some(list));
                        on_notify.emit(Notice::success("Documento caricato"));
                    }
                    Err(e) => on_notify.emit(Notice::error(e.to_string())),
                }
            });
        })
    };

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };
    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                content.set(area.value());
            }
        })
    };

    html! {
        <section class="admin-knowledge">
            <form class="admin-knowledge__form" onsubmit={on_create}>
                <input
                    type="text"
                    placeholder="Titolo"
                    value={(*title).clone()}
                    oninput={text_input(&title)}
                />
                <input
                    type="text"
                    placeholder="Categoria"
                    value={(*category).clone()}
                    oninput={text_input(&category)}
                />
                <textarea
                    placeholder="Contenuto"
                    value={(*content).clone()}
                    oninput={on_content}
                />
                <button type="submit">{ "Aggiungi documento" }</button>
            </form>
            <label class="admin-knowledge__upload">
                { "Carica un file .txt o .md" }
                <input type="file" accept=".txt,.md" onchange={on_upload} />
            </label>
            { render_list(props, &docs) }
        </section>
    }
}

fn render_list(props: &Props, docs: &UseStateHandle<Option<Vec<KnowledgeDoc>>>) -> Html {
    let Some(list) = &**docs else {
        return html! { <p>{ "Lettura dei documenti..." }</p> };
    };
    if list.is_empty() {
        return html! { <p>{ "Nessun documento nella base di conoscenza." }</p> };
    }
    html! {
        <ul class="admin-knowledge__list">
            { for list.iter().map(|doc| {
                let on_delete = {
                    let token = props.token.to_string();
                    let docs = docs.clone();
                    let on_notify = props.on_notify.clone();
                    let id = doc.id.clone();
                    Callback::from(move |_| {
                        if !crate::dom::confirm("Sei sicuro di voler eliminare questo documento?") {
                            return;
                        }
                        let token = token.clone();
                        let docs = docs.clone();
                        let on_notify = on_notify.clone();
                        let id = id.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            match crate::api::delete_knowledge(&token, &id).await {
                                Ok(()) => {
                                    let list: Vec<KnowledgeDoc> = docs
                                        .as_ref()
                                        .cloned()
                                        .unwrap_or_default()
                                        .into_iter()
                                        .filter(|d| d.id != id)
                                        .collect();
                                    docs.set(Some(list));
                                }
                                Err(e) => on_notify.emit(Notice::error(e.to_string())),
                            }
                        });
                    })
                };
                html! {
                    <li class="admin-knowledge__doc">
                        <div>
                            <h3>{ doc.title.clone() }</h3>
                            <p class="admin-knowledge__meta">
                                { format!("{} · {}", doc.category, doc.created_by) }
                            </p>
                        </div>
                        <button type="button" onclick={on_delete}>{ "Elimina" }</button>
                    </li>
                }
            }) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_create_form_and_upload_control() {
        let props = Props {
            token: AttrValue::from("tok"),
            on_notify: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<KnowledgePanel>::with_props(props).render());
        assert!(html.contains("Aggiungi documento"));
        assert!(html.contains("Carica un file"));
    }
}
