//! State of the sign-up form.
//!
//! The form is an explicit, serializable [`FormState`] advanced by [`reduce`].
//! Rendering and the network call live in `routes::home`; everything here is
//! pure so every transition can be tested without a browser.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{NewSubmission, PlayerClass, PlayerIp, PlayerIpError, PlayerName, MAX_PLAYER_IP};

/// Command the player pastes in the game chat once signed up.
pub const FOLLOW_UP_COMMAND: &str = "#forcecityoverload true";
/// How long a copy confirmation stays on screen.
pub const COPY_MESSAGE_TTL: Duration = Duration::from_secs(2);

pub const SUBMITTING_MESSAGE: &str = "Enviando...";
pub const SUBMISSION_SUCCEEDED_MESSAGE: &str = "Inscrição enviada com sucesso!";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Erro ao enviar inscrição.";
pub const IP_ABOVE_LIMIT_MESSAGE: &str = "O IP digitado supera o limite permitido.";
pub const COPY_SUCCEEDED_MESSAGE: &str = "✅ Comando copiado!";
pub const COPY_FAILED_MESSAGE: &str = "❌ Falha ao copiar.";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Por favor, preencha todos os campos.")]
    MissingFields,
    #[error("Classe inválida.")]
    UnknownClass,
    #[error("O IP deve conter apenas números.")]
    IpNotNumeric,
    #[error("O IP deve ser no máximo 2300.")]
    IpOutOfRange,
}

impl ValidationError {
    /// Ip errors are shown next to the ip input, the others in the banner.
    pub fn concerns_ip(&self) -> bool {
        matches!(
            self,
            ValidationError::IpNotNumeric | ValidationError::IpOutOfRange
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Class,
    Ip,
}

/// Raw content of the inputs, as the player typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub ip: String,
}

impl FormFields {
    pub fn validate(&self) -> Result<NewSubmission, ValidationError> {
        if self.name.trim().is_empty() || self.class.is_empty() || self.ip.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let ip = PlayerIp::parse(self.ip.clone()).map_err(|e| match e {
            PlayerIpError::Empty => ValidationError::MissingFields,
            PlayerIpError::NotNumeric => ValidationError::IpNotNumeric,
            PlayerIpError::OutOfRange => ValidationError::IpOutOfRange,
        })?;
        let class = PlayerClass::parse(&self.class).map_err(|_| ValidationError::UnknownClass)?;
        let name = PlayerName::parse(self.name.clone()).map_err(|_| ValidationError::MissingFields)?;
        Ok(NewSubmission { name, class, ip })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "submission", rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Submitting(NewSubmission),
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    fn new(kind: BannerKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyStatus {
    #[default]
    Neutral,
    Copying,
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            CopyStatus::Copied => Some(COPY_SUCCEEDED_MESSAGE),
            CopyStatus::Failed => Some(COPY_FAILED_MESSAGE),
            CopyStatus::Neutral | CopyStatus::Copying => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub fields: FormFields,
    pub phase: Phase,
    pub banner: Option<Banner>,
    pub ip_error: Option<String>,
    pub command_revealed: bool,
    pub copy: CopyStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    FieldEdited { field: Field, value: String },
    SubmitRequested,
    SubmissionSucceeded,
    SubmissionFailed,
    CopyRequested,
    CopySucceeded,
    CopyFailed,
    CopyMessageExpired,
}

impl FormState {
    /// Restore a form holding `fields` exactly as given, without the
    /// per-keystroke ip filtering.
    pub fn with_fields(fields: FormFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    /// The submission waiting on the relay, if any.
    pub fn in_flight(&self) -> Option<&NewSubmission> {
        match &self.phase {
            Phase::Submitting(submission) => Some(submission),
            _ => None,
        }
    }
}

pub fn reduce(mut state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::FieldEdited { field, value } => {
            if state.is_submitting() {
                return state;
            }
            match field {
                Field::Name => state.fields.name = value,
                Field::Class => state.fields.class = value,
                Field::Ip => {
                    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
                    state.ip_error = exceeds_limit(&digits).then(|| IP_ABOVE_LIMIT_MESSAGE.to_string());
                    state.fields.ip = digits;
                }
            }
        }
        FormEvent::SubmitRequested => {
            if state.is_submitting() {
                return state;
            }
            match state.fields.validate() {
                Ok(submission) => {
                    state.ip_error = None;
                    state.banner = Some(Banner::new(BannerKind::Info, SUBMITTING_MESSAGE));
                    state.command_revealed = false;
                    state.copy = CopyStatus::Neutral;
                    state.phase = Phase::Submitting(submission);
                }
                Err(e) if e.concerns_ip() => state.ip_error = Some(e.to_string()),
                Err(e) => state.banner = Some(Banner::new(BannerKind::Error, e.to_string())),
            }
        }
        FormEvent::SubmissionSucceeded => {
            if !state.is_submitting() {
                return state;
            }
            state.fields = FormFields::default();
            state.banner = Some(Banner::new(
                BannerKind::Success,
                SUBMISSION_SUCCEEDED_MESSAGE,
            ));
            state.command_revealed = true;
            state.phase = Phase::Succeeded;
        }
        FormEvent::SubmissionFailed => {
            if !state.is_submitting() {
                return state;
            }
            state.banner = Some(Banner::new(BannerKind::Error, SUBMISSION_FAILED_MESSAGE));
            state.phase = Phase::Failed;
        }
        FormEvent::CopyRequested => {
            if state.command_revealed {
                state.copy = CopyStatus::Copying;
            }
        }
        FormEvent::CopySucceeded => {
            if state.copy == CopyStatus::Copying {
                state.copy = CopyStatus::Copied;
            }
        }
        FormEvent::CopyFailed => {
            if state.copy == CopyStatus::Copying {
                state.copy = CopyStatus::Failed;
            }
        }
        FormEvent::CopyMessageExpired => {
            if matches!(state.copy, CopyStatus::Copied | CopyStatus::Failed) {
                state.copy = CopyStatus::Neutral;
            }
        }
    }
    state
}

fn exceeds_limit(digits: &str) -> bool {
    // An all-digit string that does not fit a u32 is far above the limit.
    !digits.is_empty() && digits.parse::<u32>().map_or(true, |ip| ip > MAX_PLAYER_IP)
}
