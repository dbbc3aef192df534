//! Character-by-character text reveal

/// Pause between finishing and retyping when looping, on top of the delay
const LOOP_RESTART_PAUSE_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing { typed: usize },
    Done,
}

/// Types `text` one character at a time.
///
/// The first character appears `delay_ms` after start and one more every
/// `speed_ms`; the effect is done one `speed_ms` after the last character.
/// A looping typewriter clears and starts over `delay_ms + 2s` after that.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    speed_ms: u64,
    delay_ms: u64,
    looping: bool,
    started_at: Option<u64>,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            char_count: text.chars().count(),
            text,
            speed_ms: 100,
            delay_ms: 0,
            looping: false,
            started_at: None,
        }
    }

    pub fn with_speed(mut self, speed_ms: u64) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Begin (or restart) typing at `now_ms`
    pub fn start(&mut self, now_ms: u64) {
        self.started_at = Some(now_ms);
    }

    /// Swap the text and start over
    pub fn set_text(&mut self, text: impl Into<String>, now_ms: u64) {
        self.text = text.into();
        self.char_count = self.text.chars().count();
        self.start(now_ms);
    }

    fn typing_ms(&self) -> u64 {
        self.delay_ms + self.char_count as u64 * self.speed_ms
    }

    fn phase(&self, now_ms: u64) -> Option<Phase> {
        let started_at = self.started_at?;
        let mut elapsed = now_ms.saturating_sub(started_at);
        let typing_ms = self.typing_ms();

        if self.looping {
            elapsed %= typing_ms + self.delay_ms + LOOP_RESTART_PAUSE_MS;
        }

        let phase = if elapsed >= typing_ms {
            Phase::Done
        } else if elapsed < self.delay_ms {
            Phase::Typing { typed: 0 }
        } else {
            let typed = (elapsed - self.delay_ms) / self.speed_ms + 1;
            Phase::Typing {
                typed: (typed as usize).min(self.char_count),
            }
        };
        Some(phase)
    }

    /// Text typed so far
    pub fn visible_text(&self, now_ms: u64) -> &str {
        let typed = match self.phase(now_ms) {
            None => 0,
            Some(Phase::Typing { typed }) => typed,
            Some(Phase::Done) => self.char_count,
        };
        match self.text.char_indices().nth(typed) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn is_typing(&self, now_ms: u64) -> bool {
        matches!(self.phase(now_ms), Some(Phase::Typing { .. }))
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        matches!(self.phase(now_ms), Some(Phase::Done))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_character_per_step() {
        let mut writer = Typewriter::new("Home").with_speed(100).with_delay(50);
        assert_eq!(writer.visible_text(0), "");
        assert!(!writer.is_typing(0));

        writer.start(1000);
        assert_eq!(writer.visible_text(1049), "");
        assert!(writer.is_typing(1049));
        assert_eq!(writer.visible_text(1050), "H");
        assert_eq!(writer.visible_text(1249), "Ho");
        assert_eq!(writer.visible_text(1350), "Home");
        assert!(writer.is_typing(1350));

        assert!(writer.is_done(1450));
        assert_eq!(writer.visible_text(99_999), "Home");
    }

    #[test]
    fn test_loop_restarts_after_pause() {
        let mut writer = Typewriter::new("ab").with_speed(100).with_delay(0).with_loop(true);
        writer.start(0);
        assert!(writer.is_done(200));
        assert_eq!(writer.visible_text(2199), "ab");

        // Cycle is 200 typing + 0 delay + 2000 pause
        assert_eq!(writer.visible_text(2200), "a");
        assert!(writer.is_typing(2200));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut writer = Typewriter::new("ঢাকা").with_speed(10);
        writer.start(0);
        assert_eq!(writer.visible_text(0), "ঢ");
        assert_eq!(writer.visible_text(10), "ঢা");
        assert_eq!(writer.visible_text(40), "ঢাকা");
    }

    #[test]
    fn test_empty_text_and_zero_speed() {
        let mut empty = Typewriter::new("").with_delay(300);
        empty.start(0);
        assert!(empty.is_typing(299));
        assert!(empty.is_done(300));

        let mut instant = Typewriter::new("now").with_speed(0).with_delay(10);
        instant.start(0);
        assert_eq!(instant.visible_text(5), "");
        assert_eq!(instant.visible_text(10), "now");
        assert!(instant.is_done(10));
    }

    #[test]
    fn test_set_text_restarts() {
        let mut writer = Typewriter::new("old").with_speed(10);
        writer.start(0);
        writer.set_text("new text", 1000);
        assert_eq!(writer.visible_text(1000), "n");
        assert_eq!(writer.text(), "new text");
    }
}
