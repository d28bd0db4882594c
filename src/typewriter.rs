//! Typewriter effect
//!
//! Types a phrase one character at a time, holds it, deletes it, then moves
//! on to the next phrase. Each [`Typewriter::step`] returns the text to show
//! and how long to wait before the next step.

use crate::consts::*;

/// Output of a single typewriter step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Text to display
    pub text: String,
    /// Delay before the next step (ms)
    pub delay_ms: u32,
}

/// Typing cycle position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Typewriter {
    /// Index into the phrase list
    pub phrase_index: usize,
    /// Characters of the current phrase currently shown
    pub char_index: usize,
    pub deleting: bool,
}

impl Typewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first phrase with nothing typed
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Delay before the very first step
    pub fn start_delay_ms() -> u32 {
        TYPE_START_DELAY_MS
    }

    /// Text currently shown for the given phrase list
    pub fn visible_text(&self, phrases: &[&str]) -> String {
        match phrases.get(self.phrase_index) {
            Some(phrase) => phrase.chars().take(self.char_index).collect(),
            None => String::new(),
        }
    }

    /// Advance one character (typing or deleting)
    pub fn step(&mut self, phrases: &[&str]) -> Frame {
        if phrases.is_empty() {
            return Frame {
                text: String::new(),
                delay_ms: HOLD_DELAY_MS,
            };
        }
        // Phrase list may have shrunk after a locale change
        if self.phrase_index >= phrases.len() {
            self.reset();
        }

        let phrase = phrases[self.phrase_index];
        let len = phrase.chars().count();

        let mut delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.char_index = (self.char_index + 1).min(len);
            TYPE_DELAY_MS
        };
        let text = phrase.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index >= len {
            delay_ms = HOLD_DELAY_MS;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % phrases.len();
            delay_ms = NEXT_PHRASE_DELAY_MS;
        }

        Frame { text, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: [&str; 2] = ["Hi", "Yo!"];

    fn run(tw: &mut Typewriter, steps: usize) -> Vec<Frame> {
        (0..steps).map(|_| tw.step(&PHRASES)).collect()
    }

    fn frame(text: &str, delay_ms: u32) -> Frame {
        Frame {
            text: text.to_string(),
            delay_ms,
        }
    }

    #[test]
    fn test_full_cycle() {
        let mut tw = Typewriter::new();
        let frames = run(&mut tw, 5);
        assert_eq!(
            frames,
            vec![
                frame("H", TYPE_DELAY_MS),
                frame("Hi", HOLD_DELAY_MS),
                frame("H", DELETE_DELAY_MS),
                frame("", NEXT_PHRASE_DELAY_MS),
                frame("Y", TYPE_DELAY_MS),
            ]
        );
        assert_eq!(tw.phrase_index, 1);
        assert!(!tw.deleting);
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut tw = Typewriter::new();
        // "Hi": 2 up + 2 down, "Yo!": 3 up + 3 down
        run(&mut tw, 10);
        assert_eq!(tw.phrase_index, 0);
        assert_eq!(tw.char_index, 0);
        assert_eq!(tw.step(&PHRASES), frame("H", TYPE_DELAY_MS));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let phrases = ["héé"];
        let mut tw = Typewriter::new();
        assert_eq!(tw.step(&phrases).text, "h");
        assert_eq!(tw.step(&phrases).text, "hé");
        let last = tw.step(&phrases);
        assert_eq!(last, frame("héé", HOLD_DELAY_MS));
    }

    #[test]
    fn test_reset_and_visible_text() {
        let mut tw = Typewriter::new();
        run(&mut tw, 6);
        assert_eq!(tw.visible_text(&PHRASES), "Yo");
        tw.reset();
        assert_eq!(tw, Typewriter::default());
        assert_eq!(tw.visible_text(&PHRASES), "");
    }

    #[test]
    fn test_phrase_index_out_of_range_resets() {
        let mut tw = Typewriter {
            phrase_index: 5,
            char_index: 3,
            deleting: true,
        };
        assert_eq!(tw.step(&PHRASES), frame("H", TYPE_DELAY_MS));
    }

    #[test]
    fn test_empty_phrase_list() {
        let mut tw = Typewriter::new();
        assert_eq!(tw.step(&[]).text, "");
    }
}
