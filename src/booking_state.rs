use std::fmt;

use serde::Serialize;

use crate::{action::Action, context::BookingContext, outcome::Outcome};

/// Represents the lifecycle stages of a room booking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BookingState {
    /// Nothing has been chosen yet
    #[default]
    Idle,
    /// A room has been picked but not confirmed
    RoomSelected,
    /// The booking is confirmed and awaiting payment
    BookingConfirmed,
    /// The booking is paid and complete
    Paid,
    /// The booking was abandoned
    BookingCancelled,
}

impl BookingState {
    /// Every state, in lifecycle order
    pub const ALL: [Self; 5] =
        [Self::Idle, Self::RoomSelected, Self::BookingConfirmed, Self::Paid, Self::BookingCancelled];

    /// Get the display name of the state
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::RoomSelected => "RoomSelected",
            Self::BookingConfirmed => "BookingConfirmed",
            Self::Paid => "Paid",
            Self::BookingCancelled => "BookingCancelled",
        }
    }

    /// Whether every action leaves this state unchanged
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Paid | Self::BookingCancelled)
    }

    /// Decide what `action` does in this state without applying it
    #[must_use]
    pub fn decide(self, action: &Action) -> Outcome {
        let next = match (self, action) {
            (Self::Paid | Self::BookingCancelled, _) => {
                return Outcome::Terminal { state: self, action: action.clone() };
            }
            (Self::Idle, Action::SelectRoom) => Self::RoomSelected,
            (Self::RoomSelected, Action::ConfirmBooking) => Self::BookingConfirmed,
            (Self::BookingConfirmed, Action::Pay) => Self::Paid,
            (Self::RoomSelected | Self::BookingConfirmed, Action::Cancel) => Self::BookingCancelled,
            (Self::Idle | Self::RoomSelected | Self::BookingConfirmed, _) => {
                return Outcome::Rejected { state: self, action: action.clone() };
            }
        };

        Outcome::Transitioned { from: self, to: next, action: action.clone() }
    }

    /// Handle `action` on behalf of `context`, replacing its state on a transition
    pub fn handle(self, context: &mut BookingContext, action: &Action) -> Outcome {
        let outcome = self.decide(action);
        log::debug!(target: "booking", "{}: {}", self.name(), outcome.message());

        if let Outcome::Transitioned { to, .. } = outcome {
            context.set_state(to);
        }

        outcome
    }
}

impl fmt::Display for BookingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::BookingState;
    use crate::{action::Action, outcome::Outcome};

    #[test]
    fn names_are_unique() {
        for (i, a) in BookingState::ALL.iter().enumerate() {
            for b in BookingState::ALL.iter().skip(i.saturating_add(1)) {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn only_paid_and_cancelled_are_terminal() {
        let terminal: Vec<_> = BookingState::ALL.into_iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, vec![BookingState::Paid, BookingState::BookingCancelled]);
    }

    #[test]
    fn each_transient_state_has_one_advancing_action() {
        let advancing = [
            (BookingState::Idle, Action::SelectRoom, BookingState::RoomSelected),
            (BookingState::RoomSelected, Action::ConfirmBooking, BookingState::BookingConfirmed),
            (BookingState::BookingConfirmed, Action::Pay, BookingState::Paid),
        ];

        for (from, action, to) in advancing {
            assert_eq!(from.decide(&action).state_after(), to);
        }
    }

    #[test]
    fn idle_cannot_be_cancelled() {
        assert!(matches!(
            BookingState::Idle.decide(&Action::Cancel),
            Outcome::Rejected { state: BookingState::Idle, .. }
        ));
    }

    #[test]
    fn decide_is_total() {
        let mut actions = Action::KNOWN.to_vec();
        actions.push(Action::Other("anything".to_string()));
        actions.push(Action::Other(String::new()));

        for state in BookingState::ALL {
            for action in &actions {
                let next = state.decide(action).state_after();
                assert!(BookingState::ALL.contains(&next));
            }
        }
    }
}
