pub mod poll;

pub use poll::{Poll, PollId, PollInput};
