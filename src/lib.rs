pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod types;

pub use error::PollsError;
pub use service::PollsHandle;
pub use types::{Poll, PollId, PollInput};
