use regex::Regex;

/// One-shot activation state for a single transcript pass.
/// Starts disarmed; a detected activation phrase arms it for exactly the
/// next segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateState {
    pub armed: bool,
}

/// What the gate decided for one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The segment contains the activation phrase; the gate is now armed.
    Activated,
    /// The gate was armed: match the cleaned text against the rules.
    Candidate(String),
    /// Not armed and no activation phrase present.
    Ignored,
}

/// Detects the activation phrase and arms/disarms the one-shot gate.
pub struct ActivationGate {
    detect: Regex,
    strip: Regex,
}

impl ActivationGate {
    /// Build a gate for the given phrase ("hey rex" by default). Detection
    /// is case-insensitive and word-bounded, so the phrase inside a larger
    /// word does not trigger.
    pub fn new(phrase: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(phrase);
        Ok(Self {
            detect: Regex::new(&format!(r"(?i)\b{escaped}\b"))?,
            strip: Regex::new(&format!(r"(?i)^{escaped}\b[,:]?\s*"))?,
        })
    }

    /// Evaluate one segment's text against the gate.
    ///
    /// Activation detection takes precedence: a segment containing the
    /// phrase is classified `Activated` even when a command follows in the
    /// same utterance; the command has to be repeated in the next one. An
    /// armed gate is consumed by exactly one segment, whatever the match
    /// outcome turns out to be.
    pub fn evaluate(&self, state: &mut GateState, text: &str) -> GateDecision {
        if self.detect.is_match(text) {
            state.armed = true;
            return GateDecision::Activated;
        }
        if state.armed {
            state.armed = false;
            return GateDecision::Candidate(self.strip_leading(text));
        }
        GateDecision::Ignored
    }

    /// Strip a single leading occurrence of the activation phrase, with an
    /// optional trailing comma or colon, then trim whitespace.
    fn strip_leading(&self, text: &str) -> String {
        self.strip.replace(text, "").trim().to_string()
    }
}
