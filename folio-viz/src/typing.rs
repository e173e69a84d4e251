//! Typewriter headline effect.
//!
//! Cycles through a list of role strings: type forward one character per
//! tick, hold the complete string, delete one character per tick, hold the
//! empty line, then move on to the next string. The machine is synchronous;
//! the caller drives it with one timer per returned delay.

/// Delay before the next tick while typing forward.
pub const TYPE_DELAY_MS: u32 = 100;
/// Delay before the next tick while deleting.
pub const DELETE_DELAY_MS: u32 = 50;
/// Hold time on a fully typed string.
pub const HOLD_FULL_MS: u32 = 2000;
/// Hold time on the empty line before the next string starts.
pub const HOLD_EMPTY_MS: u32 = 500;

/// What to display after a tick, and how long to wait before the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// State machine for the typewriter effect.
#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: Vec<String>,
    index: usize,
    /// Visible prefix length, counted in characters (not bytes).
    visible: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            texts,
            index: 0,
            visible: 0,
            deleting: false,
        }
    }

    fn current(&self) -> &str {
        self.texts.get(self.index).map(String::as_str).unwrap_or("")
    }

    /// Advance one tick.
    pub fn tick(&mut self) -> TypeFrame {
        if self.texts.is_empty() {
            return TypeFrame {
                text: String::new(),
                delay_ms: HOLD_EMPTY_MS,
            };
        }

        let length = self.current().chars().count();
        let mut delay_ms = if self.deleting {
            self.visible = self.visible.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.visible = (self.visible + 1).min(length);
            TYPE_DELAY_MS
        };

        let text: String = self.current().chars().take(self.visible).collect();

        if !self.deleting && self.visible == length {
            delay_ms = HOLD_FULL_MS;
            self.deleting = true;
        } else if self.deleting && self.visible == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.texts.len();
            delay_ms = HOLD_EMPTY_MS;
        }

        TypeFrame { text, delay_ms }
    }
}
