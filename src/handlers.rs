use crate::error::RelayError;
use crate::prompts::{outline_call, proofread_call};
use crate::state::AppState;
use crate::types::{CompletionCall, OutlineRequest, ProofreadRequest, SuggestionItem};
use crate::utils::{
    ExtractionProfile, OUTLINE_PROFILE, PROOFREAD_PROFILE, decode_payload, optional_text,
    required_text, strip_fences,
};
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpResponse, Responder, web};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

pub const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Registers every route, at the root and again under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::resource("/health").route(web::get().to(health)))
        .service(web::scope("/api").configure(relay_routes))
        .configure(relay_routes);
}

fn relay_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/outline")
            .route(web::post().to(outline))
            .route(web::method(Method::OPTIONS).to(preflight)),
    )
    .service(
        web::resource("/proofread")
            .route(web::post().to(proofread))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}

/// Bodies that are not a JSON object still get a JSON `{error}` reply.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            log::warn!("Rejected request body: {err}");
            RelayError::Validation(format!("Invalid request body: {err}")).into()
        })
}

pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
        .add(("Access-Control-Max-Age", "86400"))
}

pub async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

pub(crate) fn text_len(field: Option<&Value>) -> usize {
    field.and_then(Value::as_str).map_or(0, |text| text.chars().count())
}

pub async fn outline(
    state: web::Data<AppState>,
    body: web::Json<Option<OutlineRequest>>,
) -> Result<HttpResponse, RelayError> {
    let request_id = Uuid::new_v4();
    let body = body.into_inner().unwrap_or_default();

    log::info!(
        "[{request_id}] Outline request: essayLength={} goalLength={}",
        text_len(body.essay_text.as_ref()),
        text_len(body.outline_goal.as_ref())
    );

    let essay_text = required_text(body.essay_text.as_ref(), "Essay text is required")
        .inspect_err(|_| log::info!("[{request_id}] Rejected: essay text missing or blank"))?;
    let goal = optional_text(body.outline_goal.as_ref(), "Outline goal must be a string")
        .inspect_err(|_| log::warn!("[{request_id}] Rejected: outline goal is not a string"))?;

    let call = outline_call(&state.config, essay_text, goal);
    let outline = relay(&state, request_id, &call, &OUTLINE_PROFILE).await?;

    log::info!("[{request_id}] Returning outline");
    Ok(HttpResponse::Ok().json(outline))
}

pub async fn proofread(
    state: web::Data<AppState>,
    body: web::Json<Option<ProofreadRequest>>,
) -> Result<HttpResponse, RelayError> {
    let request_id = Uuid::new_v4();
    let body = body.into_inner().unwrap_or_default();

    log::info!(
        "[{request_id}] Proofread request: textLength={}",
        text_len(body.text.as_ref())
    );

    let text = required_text(body.text.as_ref(), "No text provided")
        .inspect_err(|_| log::info!("[{request_id}] Rejected: text missing or blank"))?;

    let call = proofread_call(&state.config, text);
    let suggestions = relay(&state, request_id, &call, &PROOFREAD_PROFILE).await?;

    if log::log_enabled!(log::Level::Info) {
        match serde_json::from_value::<Vec<SuggestionItem>>(suggestions.clone()) {
            Ok(items) => log::info!("[{request_id}] Returning {} suggestion(s)", items.len()),
            Err(e) => log::warn!(
                "[{request_id}] Suggestions do not match the expected shape, passing through: {e}"
            ),
        }
    }

    Ok(HttpResponse::Ok().json(suggestions))
}

/// Oracle call, fence stripping and decoding. Nothing is retried.
async fn relay(
    state: &AppState,
    request_id: Uuid,
    call: &CompletionCall,
    profile: &ExtractionProfile,
) -> Result<Value, RelayError> {
    if state.config.debug {
        log::debug!(
            "[{}] [{request_id}] Calling model {} with {} user part(s)",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            call.model,
            call.user_parts.len()
        );
    }

    let reply = state
        .oracle
        .complete(call)
        .await
        .inspect_err(|err| log::error!("[{request_id}] Completion failed: {err}"))?;

    let stripped = strip_fences(&reply, profile.fence);
    if state.config.debug {
        log::debug!(
            "[{request_id}] Stripped response ({} chars):\n{stripped}",
            stripped.chars().count()
        );
    }

    decode_payload(stripped, profile)
}

pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "oracleBaseUrl": state.oracle.base_url(),
        "outlineModel": state.config.outline_model,
        "proofreadModel": state.config.proofread_model
    }))
}
