//! Core runtime types and utilities

pub mod types;
pub mod error;
pub mod logging;
pub mod time;
pub mod events;

pub use types::*;
pub use error::Error;
pub use events::{Observers, SubscriptionId};
pub use time::{Delay, FrameClock};
