//! State machine for the lifecycle of a single room booking.
//!
//! A [`BookingContext`] holds exactly one [`BookingState`] and forwards each
//! requested [`Action`] to it. The state decides whether the booking moves on,
//! and the result comes back as an [`Outcome`].

pub mod action;
pub mod booking_state;
pub mod context;
pub mod demo;
pub mod error;
pub mod logger;
pub mod observers;
pub mod outcome;
pub mod visualization;

pub use action::Action;
pub use booking_state::BookingState;
pub use context::{BookingContext, TransitionRecord};
pub use error::{BookingError, Result};
pub use outcome::Outcome;
pub use visualization::StateVisualization;
