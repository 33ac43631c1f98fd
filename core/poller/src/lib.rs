mod config;
mod error;
mod operation;
pub mod poll;
mod poller;
mod scheduler;

pub use config::*;
pub use error::*;
pub use operation::*;
pub use poll::poll_until;
pub use poller::*;
pub use scheduler::*;
