use actix_web::{http::StatusCode, web, HttpResponse};

use super::render;
use crate::{
    form::{reduce, FormEvent, FormFields, FormState},
    spreadsheet_client::{SpreadsheetClient, SubmissionPayload},
};

/// Validate the posted fields, relay them and render the outcome.
///
/// Fields are taken as posted: the digit filtering of the ip input only
/// happens in the browser, so anything else is rejected by validation.
#[tracing::instrument(
    name = "Sign up from the form",
    skip(form, spreadsheet_client),
    fields(
        player_name = %form.name,
        player_class = %form.class,
        player_ip = %form.ip
    )
)]
pub async fn sign_up(
    form: web::Form<FormFields>,
    spreadsheet_client: web::Data<SpreadsheetClient>,
) -> Result<HttpResponse, actix_web::Error> {
    let state = reduce(FormState::with_fields(form.0), FormEvent::SubmitRequested);
    let Some(submission) = state.in_flight() else {
        tracing::info!("Rejected an invalid sign-up");
        return render(&state, StatusCode::BAD_REQUEST);
    };
    let payload = SubmissionPayload::from(submission);
    let event = match spreadsheet_client.record_submission(&payload).await {
        Ok(()) => FormEvent::SubmissionSucceeded,
        Err(e) => {
            tracing::error!(error.cause_chain = ?e, "Failed to relay a sign-up");
            FormEvent::SubmissionFailed
        }
    };
    render(&reduce(state, event), StatusCode::OK)
}
