use std::fmt;

use serde::Serialize;

use crate::{
    action::Action, booking_state::BookingState, error::Result, observers::StateObserver,
    outcome::Outcome,
};

/// Represents a state transition applied to a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRecord {
    /// The state before the transition
    pub from: BookingState,
    /// The state after the transition
    pub to: BookingState,
    /// The action that triggered the transition
    pub action: Action,
}

/// Holds the current state of one booking and dispatches actions to it
pub struct BookingContext {
    /// The single live state
    state: BookingState,
    /// Transitions applied so far, oldest first
    history: Vec<TransitionRecord>,
    /// Registered observers, notified in order
    observers: Vec<Box<dyn StateObserver>>,
}

impl fmt::Debug for BookingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingContext")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl BookingContext {
    /// Create a context holding `initial_state`
    #[must_use]
    pub fn new(initial_state: BookingState) -> Self {
        Self { state: initial_state, history: Vec::new(), observers: Vec::new() }
    }

    /// Register an observer to be notified of every handled action
    pub fn register_observer(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Replace the held state unconditionally
    pub fn set_state(&mut self, state: BookingState) {
        self.state = state;
    }

    /// Forward `action` to the current state
    ///
    /// The returned outcome tells whether the booking moved. Invalid actions
    /// are not errors; they leave the state untouched.
    pub fn request(&mut self, action: impl Into<Action>) -> Outcome {
        let action = action.into();
        let current = self.state;
        let outcome = current.handle(self, &action);

        if let Outcome::Transitioned { from, to, .. } = outcome {
            self.history.push(TransitionRecord { from, to, action });
        }

        for observer in &self.observers {
            observer.on_outcome(&outcome);
        }

        outcome
    }

    /// Get the current state
    #[must_use]
    pub const fn state(&self) -> BookingState {
        self.state
    }

    /// Get the display name of the current state
    #[must_use]
    pub const fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// Get the transitions applied so far
    #[must_use]
    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    /// Render the transition history as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a `BookingError::Json` if the history cannot be serialized
    pub fn history_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.history)?)
    }
}

impl Default for BookingContext {
    fn default() -> Self {
        Self::new(BookingState::default())
    }
}

impl fmt::Display for BookingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state_name())
    }
}
