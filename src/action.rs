use std::{convert::Infallible, fmt, str::FromStr};

use serde::Serialize;

/// Actions a caller can request on a booking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Pick a room for the booking
    SelectRoom,
    /// Confirm the selected room
    ConfirmBooking,
    /// Pay for a confirmed booking
    Pay,
    /// Abandon the booking
    Cancel,
    /// Any label outside the known vocabulary
    Other(String),
}

impl Action {
    /// Every action the state machine recognises, in table order
    pub const KNOWN: [Self; 4] = [Self::SelectRoom, Self::ConfirmBooking, Self::Pay, Self::Cancel];

    /// The wire label of this action
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SelectRoom => "select_room",
            Self::ConfirmBooking => "confirm_booking",
            Self::Pay => "pay",
            Self::Cancel => "cancel",
            Self::Other(label) => label,
        }
    }
}

impl FromStr for Action {
    type Err = Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(label))
    }
}

impl From<&str> for Action {
    fn from(label: &str) -> Self {
        match label {
            "select_room" => Self::SelectRoom,
            "confirm_booking" => Self::ConfirmBooking,
            "pay" => Self::Pay,
            "cancel" => Self::Cancel,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Action {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
