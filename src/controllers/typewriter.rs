#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub hold_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 10,
            hold_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Typing,
    Holding,
    Deleting,
}

/// Types each phrase one character at a time, holds it, deletes it, and
/// moves on to the next phrase, looping forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    mode: Mode,
    timing: TypewriterTiming,
    next_delay: u64,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> Self {
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            mode: Mode::Typing,
            next_delay: timing.type_ms,
            timing,
        }
    }

    fn current_len(&self) -> usize {
        self.phrases
            .get(self.phrase)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    /// Advances one step and returns how long to wait before the next one.
    pub fn tick(&mut self) -> u64 {
        if self.phrases.is_empty() {
            self.next_delay = self.timing.hold_ms;
            return self.next_delay;
        }
        let len = self.current_len();
        self.next_delay = match self.mode {
            Mode::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.mode = Mode::Holding;
                    self.timing.hold_ms
                } else {
                    self.timing.type_ms
                }
            }
            Mode::Holding => {
                self.mode = Mode::Deleting;
                self.timing.delete_ms
            }
            Mode::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.mode = Mode::Typing;
                    self.timing.type_ms
                } else {
                    self.timing.delete_ms
                }
            }
        };
        self.next_delay
    }

    pub fn delay_ms(&self) -> u64 {
        self.next_delay
    }

    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(phrases: &[&str]) -> Typewriter {
        Typewriter::new(
            phrases.iter().map(|s| s.to_string()).collect(),
            TypewriterTiming::default(),
        )
    }

    #[test]
    fn test_types_holds_deletes_and_loops() {
        let mut tw = writer(&["hi", "yo"]);
        assert_eq!(tw.text(), "");

        assert_eq!(tw.tick(), 100);
        assert_eq!(tw.text(), "h");
        assert_eq!(tw.tick(), 1500);
        assert_eq!(tw.text(), "hi");

        assert_eq!(tw.tick(), 10);
        assert_eq!(tw.text(), "hi");
        assert_eq!(tw.tick(), 10);
        assert_eq!(tw.text(), "h");
        assert_eq!(tw.tick(), 100);
        assert_eq!(tw.text(), "");

        tw.tick();
        assert_eq!(tw.text(), "y");
        tw.tick();
        assert_eq!(tw.text(), "yo");
        tw.tick();
        tw.tick();
        tw.tick();
        // back to the first phrase
        tw.tick();
        assert_eq!(tw.text(), "h");
    }

    #[test]
    fn test_multibyte_phrases() {
        let mut tw = writer(&["¡olé!"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "¡o");
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.text(), "¡olé!");
    }

    #[test]
    fn test_no_phrases() {
        let mut tw = writer(&[]);
        assert_eq!(tw.tick(), 1500);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.delay_ms(), 1500);
    }
}
