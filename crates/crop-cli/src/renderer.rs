//! Typing-effect output for LLM answers

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Default pause between characters
pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(30);

/// Writes an answer to the console, followed by a newline
pub trait Renderer {
    fn render(&self, out: &mut dyn Write, text: &str) -> io::Result<()>;
}

/// Prints one character at a time with a fixed delay. Blocks the thread for
/// the whole answer; a zero delay prints immediately.
#[derive(Debug, Clone, Copy)]
pub struct TypingRenderer {
    delay: Duration,
}

impl TypingRenderer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Renderer without any delay, for piped output and tests
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for TypingRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TYPING_DELAY)
    }
}

impl Renderer for TypingRenderer {
    fn render(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        if self.delay.is_zero() {
            writeln!(out, "{}", text)?;
            return out.flush();
        }

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            out.flush()?;
            thread::sleep(self.delay);
        }
        writeln!(out)?;
        out.flush()
    }
}
