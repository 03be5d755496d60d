//! Two-stage matcher: activation gate, then ordered command rules with
//! dispatch to registered handlers.

mod gate;
mod registry;
mod rules;

pub use gate::{ActivationGate, GateDecision, GateState};
pub use registry::{CommandRegistry, Handler, HandlerError, HandlerResult};
pub use rules::{Command, CommandName, RuleSet};

use crate::transcript::Segment;

/// Per-segment classification result, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Activated,
    Matched(CommandName),
    NoMatch { cleaned: String },
    Ignored,
}

/// One pass over a transcript: gate, rules and registry, plus the single
/// armed flag. Segments are processed fully, one at a time, in order.
pub struct Session {
    gate: ActivationGate,
    rules: RuleSet,
    registry: CommandRegistry,
    state: GateState,
}

impl Session {
    pub fn new(gate: ActivationGate, rules: RuleSet, registry: CommandRegistry) -> Self {
        Self {
            gate,
            rules,
            registry,
            state: GateState::default(),
        }
    }

    pub fn armed(&self) -> bool {
        self.state.armed
    }

    /// Run one segment through gate, matcher and handler dispatch.
    ///
    /// A rule match whose command name has no registry entry degrades to
    /// `NoMatch` and the handler is never invoked. Handler failures are the
    /// only error surface; they end the pass.
    pub fn process(&mut self, segment: &Segment) -> Result<Outcome, HandlerError> {
        let text = segment.text.trim();
        match self.gate.evaluate(&mut self.state, text) {
            GateDecision::Activated => Ok(Outcome::Activated),
            GateDecision::Ignored => Ok(Outcome::Ignored),
            GateDecision::Candidate(cleaned) => {
                if let Some(command) = self.rules.resolve(&cleaned) {
                    if self.registry.dispatch(&command)? {
                        return Ok(Outcome::Matched(command.name()));
                    }
                }
                Ok(Outcome::NoMatch { cleaned })
            }
        }
    }
}
