use actix_web::{
    error::JsonPayloadError,
    http::{header, StatusCode},
    web, HttpResponse, ResponseError,
};

use crate::{
    spreadsheet_client::{RelayError, SpreadsheetClient, SubmissionPayload},
    utils::error_chain_fmt,
};

pub const SUBMISSION_RECORDED_MESSAGE: &str = "Inscrição registrada com sucesso!";
pub const SUBMISSION_ERROR_MESSAGE: &str = "Erro na inscrição.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método não permitido";

#[derive(serde::Serialize)]
pub struct SubmitResponse {
    pub message: String,
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("Only POST is accepted")]
    MethodNotAllowed,
    #[error("The body is not a JSON object")]
    InvalidBody(#[source] JsonPayloadError),
    #[error("Failed to relay the submission")]
    RelayError(#[from] RelayError),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmitError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SubmitError::InvalidBody(_) | SubmitError::RelayError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
    // Nothing from the spreadsheet ever reaches the caller.
    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        let message = match self {
            SubmitError::MethodNotAllowed => {
                response.insert_header((header::ALLOW, "POST"));
                METHOD_NOT_ALLOWED_MESSAGE
            }
            SubmitError::InvalidBody(_) | SubmitError::RelayError(_) => SUBMISSION_ERROR_MESSAGE,
        };
        response.json(SubmitResponse {
            message: message.to_string(),
        })
    }
}

/// Unreadable bodies get the same answer as a failed relay.
pub fn submit_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|e, _request| {
        let e = SubmitError::InvalidBody(e);
        tracing::warn!(error.cause_chain = ?e, "Rejected a sign-up body");
        e.into()
    })
}

#[tracing::instrument(
    name = "Relay a sign-up",
    skip(payload, spreadsheet_client),
    fields(
        player_name = ?payload.name,
        player_class = ?payload.class,
        player_ip = ?payload.ip
    )
)]
pub async fn submit(
    payload: web::Json<SubmissionPayload>,
    spreadsheet_client: web::Data<SpreadsheetClient>,
) -> Result<HttpResponse, SubmitError> {
    spreadsheet_client
        .record_submission(&payload)
        .await
        .inspect_err(|e| tracing::error!(error.cause_chain = ?e, "Failed to relay a sign-up"))?;
    Ok(HttpResponse::Ok().json(SubmitResponse {
        message: SUBMISSION_RECORDED_MESSAGE.to_string(),
    }))
}

pub async fn submit_method_not_allowed() -> Result<HttpResponse, SubmitError> {
    Err(SubmitError::MethodNotAllowed)
}
