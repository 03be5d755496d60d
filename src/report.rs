//! Line-per-segment reporting of match outcomes.

use crate::matcher::Outcome;
use crate::transcript::Segment;

/// Render one segment's outcome. Activated and ignored segments echo the
/// original text; a no-match echoes the cleaned candidate text.
pub fn render(segment: &Segment, outcome: &Outcome) -> String {
    let span = format!("[{}-{}s]", segment.start, segment.end);
    match outcome {
        Outcome::Activated => {
            format!("{span} → (activation detected): '{}'", segment.text)
        }
        Outcome::Matched(name) => format!("{span} → matched: {}", name.as_str()),
        Outcome::NoMatch { cleaned } => format!("{span} → (no match)  '{cleaned}'"),
        Outcome::Ignored => {
            format!("{span} → (ignored, no activation): '{}'", segment.text)
        }
    }
}

pub fn print(segment: &Segment, outcome: &Outcome) {
    println!("{}", render(segment, outcome));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::CommandName;

    fn seg() -> Segment {
        Segment {
            start: "0.80".into(),
            end: "1.80".into(),
            text: "Hey Rex".into(),
        }
    }

    #[test]
    fn renders_each_outcome_kind() {
        assert_eq!(
            render(&seg(), &Outcome::Activated),
            "[0.80-1.80s] → (activation detected): 'Hey Rex'"
        );
        assert_eq!(
            render(&seg(), &Outcome::Matched(CommandName::StartMusic)),
            "[0.80-1.80s] → matched: start_music"
        );
        assert_eq!(
            render(
                &seg(),
                &Outcome::NoMatch {
                    cleaned: "next song".into()
                }
            ),
            "[0.80-1.80s] → (no match)  'next song'"
        );
        assert_eq!(
            render(&seg(), &Outcome::Ignored),
            "[0.80-1.80s] → (ignored, no activation): 'Hey Rex'"
        );
    }
}
