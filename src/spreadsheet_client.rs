use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{domain::NewSubmission, utils::error_chain_fmt};

/// Status the spreadsheet script reports once the row is recorded.
const SUCCESS_STATUS: &str = "success";

/// Sign-up fields as relayed to the spreadsheet, forwarded without any check.
///
/// Built from any JSON object: the three keys are picked with their values as
/// sent, `null` included. `name` and `class` win over `nome` and `classe` when
/// both are present. Absent keys stay absent on the outbound body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct SubmissionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<Value>,
}

impl From<Map<String, Value>> for SubmissionPayload {
    fn from(mut body: Map<String, Value>) -> Self {
        let mut pick = |key: &str, alias: Option<&str>| {
            body.remove(key)
                .or_else(|| alias.and_then(|alias| body.remove(alias)))
        };
        Self {
            name: pick("name", Some("nome")),
            class: pick("class", Some("classe")),
            ip: pick("ip", None),
        }
    }
}

impl From<&NewSubmission> for SubmissionPayload {
    fn from(submission: &NewSubmission) -> Self {
        Self {
            name: Some(submission.name.as_ref().into()),
            class: Some(submission.class.label().into()),
            ip: Some(submission.ip.as_ref().into()),
        }
    }
}

#[derive(Deserialize)]
struct ScriptResponse {
    #[serde(default)]
    status: Option<String>,
}

#[derive(thiserror::Error)]
pub enum RelayError {
    #[error("Failed to reach the spreadsheet endpoint")]
    Transport(#[source] reqwest::Error),
    #[error("The spreadsheet endpoint answered with an unreadable body")]
    MalformedResponse(#[source] reqwest::Error),
    #[error("The spreadsheet endpoint reported status {0:?}")]
    Rejected(Option<String>),
}

impl std::fmt::Debug for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct SpreadsheetClient {
    http_client: Client,
    endpoint: Url,
}

impl SpreadsheetClient {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            http_client: builder.build().expect("Could not build the Client"),
            endpoint,
        }
    }

    #[tracing::instrument(name = "Relay a submission to the spreadsheet", skip(self, payload))]
    pub async fn record_submission(&self, payload: &SubmissionPayload) -> Result<(), RelayError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(RelayError::Transport)?;
        let body: ScriptResponse = response
            .json()
            .await
            .map_err(RelayError::MalformedResponse)?;
        match body.status {
            Some(status) if status == SUCCESS_STATUS => Ok(()),
            status => Err(RelayError::Rejected(status)),
        }
    }
}
