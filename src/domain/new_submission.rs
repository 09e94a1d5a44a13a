use super::{PlayerClass, PlayerIp, PlayerName};

/// A validated sign-up, alive for the duration of a single request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewSubmission {
    pub name: PlayerName,
    pub class: PlayerClass,
    pub ip: PlayerIp,
}
