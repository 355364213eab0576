//! Spoken guidance for reached steps.

use crate::route::RouteStep;
use log::debug;

/// Speech collaborator.
///
/// Fire-and-forget: the core never observes a return value. An
/// implementation that cannot speak simply does nothing, and a new call
/// replaces any utterance still in flight - reached-step events are
/// already rate-limited by physical travel, so queueing would only stack
/// stale directions.
pub trait Narrator {
    /// Speak the given text, replacing any in-flight utterance
    fn speak(&mut self, text: &str);
}

/// Converts reached steps into sanitized speech requests.
pub struct NarrationDispatcher<N> {
    voice: N,
}

impl<N: Narrator> NarrationDispatcher<N> {
    /// Wrap a speech collaborator
    pub fn new(voice: N) -> Self {
        Self { voice }
    }

    /// Announce one step.
    ///
    /// Markup is stripped before speaking; a step whose instruction is
    /// markup-only stays silent.
    pub fn announce(&mut self, step: &RouteStep) {
        let text = strip_markup(&step.instruction_markup);
        if text.is_empty() {
            debug!("skipping narration: markup-only instruction");
            return;
        }
        self.voice.speak(&text);
    }

    /// Recover the wrapped collaborator
    pub fn into_voice(self) -> N {
        self.voice
    }
}

/// Remove `<...>` spans and collapse the whitespace left behind.
///
/// A `<` with no closing `>` is kept literally, matching how the backend's
/// instructions are cleaned for display.
fn strip_markup(markup: &str) -> String {
    let mut stripped = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close) => {
                stripped.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    stripped.push_str(rest);

    let mut text = String::with_capacity(stripped.len());
    let mut last_was_space = true;
    for c in stripped.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                text.push(' ');
                last_was_space = true;
            }
        } else {
            text.push(c);
            last_was_space = false;
        }
    }
    while text.ends_with(' ') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;

    #[derive(Default)]
    struct RecordingVoice {
        spoken: Vec<String>,
    }

    impl Narrator for RecordingVoice {
        fn speak(&mut self, text: &str) {
            self.spoken.push(text.to_string());
        }
    }

    fn step(instruction: &str) -> RouteStep {
        RouteStep {
            location: GeoPoint::new(18.5, 73.85),
            instruction_markup: instruction.to_string(),
            distance_text: "100 m".to_string(),
        }
    }

    #[test]
    fn test_strip_simple_tags() {
        assert_eq!(strip_markup("Turn <b>left</b> onto FC Road"), "Turn left onto FC Road");
    }

    #[test]
    fn test_strip_nested_markup_and_collapse_whitespace() {
        assert_eq!(
            strip_markup("Head north <div style=\"font-size:0.9em\">Pass the temple</div>"),
            "Head north Pass the temple"
        );
        assert_eq!(strip_markup("<b> </b>Continue straight "), "Continue straight");
    }

    #[test]
    fn test_unclosed_angle_kept_literally() {
        assert_eq!(strip_markup("speed < 30 km/h"), "speed < 30 km/h");
    }

    #[test]
    fn test_announce_speaks_clean_text() {
        let mut dispatcher = NarrationDispatcher::new(RecordingVoice::default());
        dispatcher.announce(&step("Turn <b>right</b> at the signal"));
        let voice = dispatcher.into_voice();
        assert_eq!(voice.spoken, vec!["Turn right at the signal"]);
    }

    #[test]
    fn test_markup_only_instruction_is_silent() {
        let mut dispatcher = NarrationDispatcher::new(RecordingVoice::default());
        dispatcher.announce(&step("<div></div>"));
        assert!(dispatcher.into_voice().spoken.is_empty());
    }
}
