use std::fmt;

use serde::Serialize;

use crate::{action::Action, booking_state::BookingState};

/// The result of handling one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The action moved the booking to a new state
    Transitioned {
        /// State before the action
        from: BookingState,
        /// State after the action
        to: BookingState,
        /// The action that caused the move
        action: Action,
    },
    /// The action is not recognised by a transient state
    Rejected {
        /// The unchanged state
        state: BookingState,
        /// The rejected action
        action: Action,
    },
    /// The booking is already finished; nothing changes
    Terminal {
        /// The terminal state
        state: BookingState,
        /// The ignored action
        action: Action,
    },
}

impl Outcome {
    /// Whether the context holds a different state afterwards
    #[must_use]
    pub const fn changed_state(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// The state the context holds after this outcome
    #[must_use]
    pub const fn state_after(&self) -> BookingState {
        match self {
            Self::Transitioned { to, .. } => *to,
            Self::Rejected { state, .. } | Self::Terminal { state, .. } => *state,
        }
    }

    /// The action that produced this outcome
    #[must_use]
    pub const fn action(&self) -> &Action {
        match self {
            Self::Transitioned { action, .. }
            | Self::Rejected { action, .. }
            | Self::Terminal { action, .. } => action,
        }
    }

    /// Human-readable status line for this outcome
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Transitioned { to: BookingState::BookingCancelled, .. } => {
                "Booking cancelled. Moving to BookingCancelled state.".to_string()
            }
            Self::Transitioned { to: BookingState::RoomSelected, .. } => {
                "Room selected. Moving to RoomSelected state.".to_string()
            }
            Self::Transitioned { to: BookingState::BookingConfirmed, .. } => {
                "Booking confirmed. Moving to BookingConfirmed state.".to_string()
            }
            Self::Transitioned { to: BookingState::Paid, .. } => {
                "Payment completed. Moving to Paid state.".to_string()
            }
            // No action leads back to Idle
            Self::Transitioned { to: BookingState::Idle, .. } => "Moving to Idle state.".to_string(),
            Self::Rejected { state, .. } => format!("Invalid action in {state} state."),
            Self::Terminal { state: BookingState::BookingCancelled, .. } => {
                "Booking already cancelled.".to_string()
            }
            Self::Terminal { .. } => "Booking is already paid and completed.".to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;
    use crate::{action::Action, booking_state::BookingState};

    #[test]
    fn every_message_matches_its_table_row() {
        let rows = [
            (BookingState::Idle, Action::SelectRoom, "Room selected. Moving to RoomSelected state."),
            (
                BookingState::RoomSelected,
                Action::ConfirmBooking,
                "Booking confirmed. Moving to BookingConfirmed state.",
            ),
            (
                BookingState::RoomSelected,
                Action::Cancel,
                "Booking cancelled. Moving to BookingCancelled state.",
            ),
            (BookingState::BookingConfirmed, Action::Pay, "Payment completed. Moving to Paid state."),
            (
                BookingState::BookingConfirmed,
                Action::Cancel,
                "Booking cancelled. Moving to BookingCancelled state.",
            ),
            (BookingState::Idle, Action::Pay, "Invalid action in Idle state."),
            (BookingState::RoomSelected, Action::Pay, "Invalid action in RoomSelected state."),
            (
                BookingState::BookingConfirmed,
                Action::SelectRoom,
                "Invalid action in BookingConfirmed state.",
            ),
            (BookingState::Paid, Action::Pay, "Booking is already paid and completed."),
            (BookingState::BookingCancelled, Action::Cancel, "Booking already cancelled."),
        ];

        for (state, action, message) in rows {
            assert_eq!(state.decide(&action).message(), message, "{state} + {action}");
        }
    }

    #[test]
    fn hand_built_move_to_idle_still_renders() {
        let outcome = Outcome::Transitioned {
            from: BookingState::Paid,
            to: BookingState::Idle,
            action: Action::Other("reset".to_string()),
        };
        assert_eq!(outcome.message(), "Moving to Idle state.");
    }

    #[test]
    fn cancel_message_does_not_depend_on_source_state() {
        for from in [BookingState::RoomSelected, BookingState::BookingConfirmed] {
            assert_eq!(
                from.decide(&Action::Cancel).message(),
                "Booking cancelled. Moving to BookingCancelled state."
            );
        }
    }

    #[test]
    fn rejection_names_the_state() {
        let outcome = BookingState::RoomSelected.decide(&Action::SelectRoom);
        assert!(!outcome.changed_state());
        assert_eq!(outcome.to_string(), "Invalid action in RoomSelected state.");
    }

    #[test]
    fn terminal_messages() {
        assert_eq!(
            BookingState::Paid.decide(&Action::Cancel).message(),
            "Booking is already paid and completed."
        );
        assert_eq!(
            BookingState::BookingCancelled.decide(&Action::Pay).message(),
            "Booking already cancelled."
        );
    }

    #[test]
    fn outcome_keeps_the_action() {
        let action = Action::Other("refund".to_string());
        let outcome = BookingState::Paid.decide(&action);
        assert!(matches!(outcome, Outcome::Terminal { state: BookingState::Paid, .. }));
        assert_eq!(outcome.action(), &action);
    }
}
