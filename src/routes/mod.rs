mod health_check;
mod home;
mod submit;

pub use health_check::*;
pub use home::*;
pub use submit::*;
