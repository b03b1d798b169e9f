pub mod poll_loader;
pub mod poll_store;
pub mod polls_actor;

pub use poll_store::PollStore;
pub use polls_actor::PollsHandle;
