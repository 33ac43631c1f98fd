pub mod logging;
mod scheduler;

pub use scheduler::*;
