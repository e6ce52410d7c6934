//! Typed client for the event backend.
//!
//! One REST origin, bearer credential, JSON bodies. Non-OK responses carry a
//! `{"detail": "..."}` string which is surfaced to the player verbatim; the
//! status code itself is never interpreted beyond ok/not-ok. Transport
//! failures collapse into a single connection-error message. No retry and no
//! client-side timeout: retry is always a manual resubmit.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, Response};

use archivio_core::aid::{Aid, AidUseRequest, AidUseResult, UsedAid};
use archivio_core::background::BackgroundSheet;
use archivio_core::challenge::{AttemptOutcome, AttemptRequest, Challenge};
use archivio_core::history::HistoryEntry;
use archivio_core::knowledge::{KnowledgeCreate, KnowledgeDoc};
use archivio_core::resources::{ResourceItem, ResourceState};
use archivio_core::settings::EventSettings;
use archivio_core::user::{FollowerStatus, User};

pub const API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure; the backend was never reached.
    #[error("Errore di connessione al server")]
    Network(String),
    /// Non-OK response; holds the backend `detail` string.
    #[error("{0}")]
    Server(String),
    /// The body did not parse as the expected shape.
    #[error("Risposta inattesa dal server")]
    Decode(String),
}

enum Body {
    None,
    Json(String),
    Form(FormData),
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn send(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Body,
) -> Result<Response, ApiError> {
    let net = |e: JsValue| ApiError::Network(crate::dom::js_error_message(&e));

    let init = RequestInit::new();
    init.set_method(method);
    let headers = Headers::new().map_err(net)?;
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(net)?;
    }
    match body {
        Body::None => {}
        Body::Json(json) => {
            headers.set("Content-Type", "application/json").map_err(net)?;
            init.set_body(&JsValue::from_str(&json));
        }
        // The browser supplies the multipart boundary itself.
        Body::Form(form) => init.set_body(form.as_ref()),
    }
    init.set_headers(&headers);

    let url = format!("{API_BASE}{path}");
    let request = Request::new_with_str_and_init(&url, &init).map_err(net)?;
    let value = JsFuture::from(crate::dom::window().fetch_with_request(&request))
        .await
        .map_err(net)?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch returned a non-Response value".into()))?;

    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Server(read_detail(&response).await))
    }
}

#[allow(clippy::future_not_send)]
async fn read_text(response: &Response) -> Result<String, ApiError> {
    let promise = response
        .text()
        .map_err(|e| ApiError::Network(crate::dom::js_error_message(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Network(crate::dom::js_error_message(&e)))?;
    Ok(value.as_string().unwrap_or_default())
}

/// Extract the `detail` string from an error body, falling back to the
/// HTTP status line when the body is absent or unparseable.
#[allow(clippy::future_not_send)]
async fn read_detail(response: &Response) -> String {
    let fallback = format!("Errore {}", response.status());
    let Ok(body) = read_text(response).await else {
        return fallback;
    };
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or(fallback)
}

#[allow(clippy::future_not_send)]
async fn request_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Body,
) -> Result<T, ApiError> {
    let response = send(method, path, token, body).await?;
    let text = read_text(&response).await?;
    serde_json::from_str(&text).map_err(|e| {
        log::error!("decode failure for {method} {path}: {e}");
        ApiError::Decode(e.to_string())
    })
}

#[allow(clippy::future_not_send)]
async fn get_json<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, ApiError> {
    request_json("GET", path, Some(token), Body::None).await
}

#[allow(clippy::future_not_send)]
async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    request_json("POST", path, token, Body::Json(json)).await
}

#[allow(clippy::future_not_send)]
async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: &str,
    body: &B,
) -> Result<T, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    request_json("PUT", path, Some(token), Body::Json(json)).await
}

#[allow(clippy::future_not_send)]
async fn delete(path: &str, token: &str) -> Result<(), ApiError> {
    send("DELETE", path, Some(token), Body::None).await.map(|_| ())
}

// ---- auth ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub user: User,
}

#[allow(clippy::future_not_send)]
pub async fn login(req: &LoginRequest) -> Result<TokenResponse, ApiError> {
    post_json("/auth/login", None, req).await
}

#[allow(clippy::future_not_send)]
pub async fn register(req: &RegisterRequest) -> Result<TokenResponse, ApiError> {
    post_json("/auth/register", None, req).await
}

#[allow(clippy::future_not_send)]
pub async fn me(token: &str) -> Result<User, ApiError> {
    get_json("/auth/me", token).await
}

// ---- chat ----

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub created_at: String,
}

#[allow(clippy::future_not_send)]
pub async fn send_chat(token: &str, question: &str) -> Result<ChatResponse, ApiError> {
    post_json(
        "/chat",
        Some(token),
        &ChatRequest {
            question: question.to_string(),
        },
    )
    .await
}

#[allow(clippy::future_not_send)]
pub async fn chat_history(token: &str) -> Result<Vec<HistoryEntry>, ApiError> {
    get_json("/chat/history", token).await
}

// ---- challenges ----

#[allow(clippy::future_not_send)]
pub async fn challenges(token: &str) -> Result<Vec<Challenge>, ApiError> {
    get_json("/challenges", token).await
}

#[allow(clippy::future_not_send)]
pub async fn my_attempts(token: &str) -> Result<Vec<String>, ApiError> {
    get_json("/challenges/my-attempts", token).await
}

#[allow(clippy::future_not_send)]
pub async fn attempt_challenge(
    token: &str,
    req: &AttemptRequest,
) -> Result<AttemptOutcome, ApiError> {
    post_json("/challenges/attempt", Some(token), req).await
}

#[allow(clippy::future_not_send)]
pub async fn create_challenge(token: &str, challenge: &Challenge) -> Result<Challenge, ApiError> {
    post_json("/challenges", Some(token), challenge).await
}

#[allow(clippy::future_not_send)]
pub async fn update_challenge(token: &str, challenge: &Challenge) -> Result<Challenge, ApiError> {
    put_json(&format!("/challenges/{}", challenge.id), token, challenge).await
}

#[allow(clippy::future_not_send)]
pub async fn delete_challenge(token: &str, id: &str) -> Result<(), ApiError> {
    delete(&format!("/challenges/{id}"), token).await
}

// ---- aids ----

#[allow(clippy::future_not_send)]
pub async fn active_aids(token: &str) -> Result<Vec<Aid>, ApiError> {
    get_json("/aids/active", token).await
}

#[allow(clippy::future_not_send)]
pub async fn my_used_aids(token: &str) -> Result<Vec<UsedAid>, ApiError> {
    get_json("/aids/my-used", token).await
}

#[allow(clippy::future_not_send)]
pub async fn use_aid(token: &str, req: &AidUseRequest) -> Result<AidUseResult, ApiError> {
    post_json("/aids/use", Some(token), req).await
}

#[allow(clippy::future_not_send)]
pub async fn create_aid(token: &str, aid: &Aid) -> Result<Aid, ApiError> {
    post_json("/aids", Some(token), aid).await
}

#[allow(clippy::future_not_send)]
pub async fn update_aid(token: &str, aid: &Aid) -> Result<Aid, ApiError> {
    put_json(&format!("/aids/{}", aid.id), token, aid).await
}

#[allow(clippy::future_not_send)]
pub async fn delete_aid(token: &str, id: &str) -> Result<(), ApiError> {
    delete(&format!("/aids/{id}"), token).await
}

// ---- background & resources ----

#[allow(clippy::future_not_send)]
pub async fn my_background(token: &str) -> Result<BackgroundSheet, ApiError> {
    get_json("/background/me", token).await
}

#[allow(clippy::future_not_send)]
pub async fn save_background(
    token: &str,
    sheet: &BackgroundSheet,
) -> Result<BackgroundSheet, ApiError> {
    post_json("/background/me", Some(token), sheet).await
}

#[allow(clippy::future_not_send)]
pub async fn resources_available(token: &str) -> Result<ResourceState, ApiError> {
    get_json("/resources/available", token).await
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PurchaseRequest<'a> {
    item_id: &'a str,
}

/// The response is the whole new ledger; callers replace their state with it.
#[allow(clippy::future_not_send)]
pub async fn purchase(token: &str, item_id: &str) -> Result<ResourceState, ApiError> {
    post_json("/resources/purchase", Some(token), &PurchaseRequest { item_id }).await
}

#[allow(clippy::future_not_send)]
pub async fn resource_items(token: &str) -> Result<Vec<ResourceItem>, ApiError> {
    get_json("/resources/items", token).await
}

#[allow(clippy::future_not_send)]
pub async fn create_resource_item(
    token: &str,
    item: &ResourceItem,
) -> Result<ResourceItem, ApiError> {
    post_json("/resources/items", Some(token), item).await
}

#[allow(clippy::future_not_send)]
pub async fn update_resource_item(
    token: &str,
    item: &ResourceItem,
) -> Result<ResourceItem, ApiError> {
    put_json(&format!("/resources/items/{}", item.id), token, item).await
}

#[allow(clippy::future_not_send)]
pub async fn delete_resource_item(token: &str, id: &str) -> Result<(), ApiError> {
    delete(&format!("/resources/items/{id}"), token).await
}

#[allow(clippy::future_not_send)]
pub async fn follower_status(token: &str) -> Result<FollowerStatus, ApiError> {
    get_json("/followers/status", token).await
}

// ---- settings ----

#[allow(clippy::future_not_send)]
pub async fn settings() -> Result<EventSettings, ApiError> {
    request_json("GET", "/settings", None, Body::None).await
}

#[allow(clippy::future_not_send)]
pub async fn save_settings(token: &str, settings: &EventSettings) -> Result<EventSettings, ApiError> {
    put_json("/settings", token, settings).await
}

// ---- knowledge ----

#[allow(clippy::future_not_send)]
pub async fn knowledge_list(token: &str) -> Result<Vec<KnowledgeDoc>, ApiError> {
    get_json("/knowledge", token).await
}

#[allow(clippy::future_not_send)]
pub async fn create_knowledge(
    token: &str,
    doc: &KnowledgeCreate,
) -> Result<KnowledgeDoc, ApiError> {
    post_json("/knowledge", Some(token), doc).await
}

#[allow(clippy::future_not_send)]
pub async fn delete_knowledge(token: &str, id: &str) -> Result<(), ApiError> {
    delete(&format!("/knowledge/{id}"), token).await
}

#[allow(clippy::future_not_send)]
pub async fn upload_knowledge(token: &str, file: &web_sys::File) -> Result<KnowledgeDoc, ApiError> {
    let form = FormData::new()
        .map_err(|e| ApiError::Network(crate::dom::js_error_message(&e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(crate::dom::js_error_message(&e)))?;
    request_json("POST", "/knowledge/upload", Some(token), Body::Form(form)).await
}

// ---- admin: users ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct UpdateActions {
    max_actions: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct UpdateRole<'a> {
    role: &'a str,
}

#[allow(clippy::future_not_send)]
pub async fn admin_users(token: &str) -> Result<Vec<User>, ApiError> {
    get_json("/admin/users", token).await
}

#[allow(clippy::future_not_send)]
pub async fn set_user_actions(
    token: &str,
    user_id: &str,
    max_actions: i32,
) -> Result<serde_json::Value, ApiError> {
    put_json(
        &format!("/admin/users/{user_id}/actions"),
        token,
        &UpdateActions { max_actions },
    )
    .await
}

#[allow(clippy::future_not_send)]
pub async fn set_user_role(
    token: &str,
    user_id: &str,
    role: &str,
) -> Result<serde_json::Value, ApiError> {
    put_json(
        &format!("/admin/users/{user_id}/role"),
        token,
        &UpdateRole { role },
    )
    .await
}

#[allow(clippy::future_not_send)]
pub async fn reset_user_actions(token: &str, user_id: &str) -> Result<serde_json::Value, ApiError> {
    post_json(
        &format!("/admin/users/{user_id}/reset-actions"),
        Some(token),
        &serde_json::json!({}),
    )
    .await
}

#[allow(clippy::future_not_send)]
pub async fn delete_user(token: &str, user_id: &str) -> Result<(), ApiError> {
    delete(&format!("/admin/users/{user_id}"), token).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_expected_fields() {
        let req = LoginRequest {
            email: "p@example.com".into(),
            password: "segreto".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"email": "p@example.com", "password": "segreto"})
        );
    }

    #[test]
    fn token_response_parses_user_inline() {
        let json = r#"{
            "access_token": "jwt-token",
            "user": {
                "id": "u-1",
                "email": "p@example.com",
                "username": "player",
                "role": "player",
                "max_actions": 10,
                "used_actions": 0
            }
        }"#;
        let resp: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.access_token, "jwt-token");
        assert_eq!(resp.user.username, "player");
    }

    #[test]
    fn api_error_displays_the_server_detail_verbatim() {
        let err = ApiError::Server("Hai esaurito le tue azioni disponibili".into());
        assert_eq!(err.to_string(), "Hai esaurito le tue azioni disponibili");
        let err = ApiError::Network("dns".into());
        assert_eq!(err.to_string(), "Errore di connessione al server");
    }
}
