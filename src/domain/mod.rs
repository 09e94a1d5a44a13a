mod new_submission;
mod player_class;
mod player_ip;
mod player_name;

pub use new_submission::NewSubmission;
pub use player_class::PlayerClass;
pub use player_ip::{PlayerIp, PlayerIpError, MAX_PLAYER_IP};
pub use player_name::PlayerName;
