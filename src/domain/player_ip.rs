/// Highest in-game identifier accepted for a sign-up.
pub const MAX_PLAYER_IP: u32 = 2300;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerIpError {
    #[error("The ip cannot be empty")]
    Empty,
    #[error("The ip must only contain digits")]
    NotNumeric,
    #[error("The ip must be at most {MAX_PLAYER_IP}")]
    OutOfRange,
}

/// An in-game identifier, kept as the digits the player typed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerIp(String);

impl PlayerIp {
    pub fn parse(s: String) -> Result<PlayerIp, PlayerIpError> {
        if s.is_empty() {
            return Err(PlayerIpError::Empty);
        }
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(PlayerIpError::NotNumeric);
        }
        // Only digits are left, so overflow is the sole parse failure.
        match s.parse::<u32>() {
            Ok(value) if value <= MAX_PLAYER_IP => Ok(Self(s)),
            _ => Err(PlayerIpError::OutOfRange),
        }
    }
}

impl AsRef<str> for PlayerIp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerIp {
    type Error = PlayerIpError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<PlayerIp> for String {
    fn from(ip: PlayerIp) -> Self {
        ip.0
    }
}
