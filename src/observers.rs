use crate::outcome::Outcome;

/// Trait for observing handled actions
pub trait StateObserver {
    /// Called after the context has handled an action
    fn on_outcome(&self, outcome: &Outcome);
}

/// Prints every status message to stdout
#[derive(Debug)]
pub struct ConsoleReporter;

impl StateObserver for ConsoleReporter {
    fn on_outcome(&self, outcome: &Outcome) {
        println!("{}", outcome.message());
    }
}

/// Logs handled actions through the `log` facade
#[derive(Debug)]
pub struct TransitionLogger;

impl StateObserver for TransitionLogger {
    fn on_outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Transitioned { from, to, action } => {
                log::info!(target: "booking", "{from} --({action})--> {to}");
            }
            Outcome::Rejected { state, action } => {
                log::warn!(target: "booking", "action '{action}' rejected in {state}");
            }
            Outcome::Terminal { state, action } => {
                log::debug!(target: "booking", "action '{action}' ignored, booking is {state}");
            }
        }
    }
}
