mod config;
mod session;

pub use config::{HostArgs, SeedKind};
pub use session::Session;
