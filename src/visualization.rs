use std::{collections::HashSet, fs, path::Path};

use crate::{
    action::Action,
    booking_state::BookingState,
    context::{BookingContext, TransitionRecord},
    error::Result,
    outcome::Outcome,
};

/// Visualization tools for the booking state machine
#[derive(Debug)]
pub struct StateVisualization;

impl StateVisualization {
    /// Every transition the machine allows, derived from `BookingState::decide`
    #[must_use]
    pub fn transition_table() -> Vec<(BookingState, Action, BookingState)> {
        BookingState::ALL
            .into_iter()
            .flat_map(|state| Action::KNOWN.into_iter().map(move |action| (state, action)))
            .filter_map(|(state, action)| match state.decide(&action) {
                Outcome::Transitioned { to, .. } => Some((state, action, to)),
                Outcome::Rejected { .. } | Outcome::Terminal { .. } => None,
            })
            .collect()
    }

    /// Generate a DOT graph of the state machine
    ///
    /// The current state is filled green, terminal states get a double border,
    /// and transitions already taken are drawn in red.
    #[must_use]
    pub fn generate_dot(context: &BookingContext) -> String {
        let mut dot = String::from("digraph booking {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

        for state in BookingState::ALL {
            let mut attrs = format!("label=\"{state}\"");
            if state == context.state() {
                attrs.push_str(", fillcolor=palegreen");
            }
            if state.is_terminal() {
                attrs.push_str(", peripheries=2");
            }
            dot.push_str(&format!("  {state} [{attrs}];\n"));
        }

        let taken: HashSet<(BookingState, BookingState)> =
            context.history().iter().map(|record| (record.from, record.to)).collect();

        for (from, action, to) in Self::transition_table() {
            let style = if taken.contains(&(from, to)) {
                "color=red, penwidth=2.0"
            } else {
                "color=black"
            };
            dot.push_str(&format!("  {from} -> {to} [label=\"{action}\", {style}];\n"));
        }

        dot.push_str("}\n");
        dot
    }

    /// Save the DOT representation to a file
    ///
    /// # Errors
    ///
    /// Returns a `BookingError::Io` if the file cannot be created or written to
    pub fn save_dot_to_file(dot: &str, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, dot)?;
        Ok(())
    }

    /// Generate a markdown table of the history
    #[must_use]
    pub fn history_table(history: &[TransitionRecord]) -> String {
        if history.is_empty() {
            return "No transitions recorded yet.".to_string();
        }

        let mut table = String::from("| # | From | Action | To |\n");
        table.push_str("|---|------|--------|----|\n");

        for (n, record) in (1..).zip(history) {
            table.push_str(&format!(
                "| {n} | {} | {} | {} |\n",
                record.from, record.action, record.to
            ));
        }

        table
    }
}
