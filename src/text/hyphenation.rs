//! Hyphenation-aware paragraph accumulation.
//!
//! PDF text extraction keeps the visible hyphen of a word that was broken at
//! the end of a line:
//!
//! - "exam-" (line 1) + "ple text" (line 2) → "example text"
//! - "Hello" (line 1) + "world" (line 2) → "Hello world"
//! - "end -" (line 1) + "next" (line 2) → "end - next" (detached dash, not a break)
//!
//! A line ends with a *break hyphen* when its last character is `-` and the
//! character before it is not a space. Such a line merges directly into the
//! following line with the hyphen removed. Every other line merges with a
//! single space.
//!
//! No dictionary is consulted, so genuine compounds broken at their hyphen
//! ("self-" + "regulation") are merged as "selfregulation".

/// Check whether a working-form line ends with a break hyphen.
///
/// # Examples
///
/// ```
/// use pdf_paragraphs::text::ends_with_break_hyphen;
///
/// assert!(ends_with_break_hyphen("exam-"));
/// assert!(!ends_with_break_hyphen("end -"));
/// assert!(!ends_with_break_hyphen("no hyphen"));
/// ```
pub fn ends_with_break_hyphen(line: &str) -> bool {
    line.strip_suffix('-')
        .is_some_and(|before| !before.ends_with(' '))
}

/// Accumulation state of a [`ParagraphBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferState {
    /// No lines collected since the last boundary
    Idle,
    /// At least one line collected
    Accumulating,
}

/// Collects consecutive non-blank lines into one paragraph.
///
/// Lines are appended with [`push`](Self::push); a blank line or the end of
/// the page closes the paragraph with [`flush`](Self::flush). A break hyphen is
/// stripped as soon as its line is appended, and the next line then joins
/// without a space.
#[derive(Debug, Clone)]
pub struct ParagraphBuffer {
    text: String,
    state: BufferState,
    /// The last appended line had its break hyphen stripped
    join_tight: bool,
}

impl Default for ParagraphBuffer {
    fn default() -> Self {
        Self {
            text: String::new(),
            state: BufferState::Idle,
            join_tight: false,
        }
    }
}

impl ParagraphBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current accumulation state.
    pub fn state(&self) -> BufferState {
        self.state
    }

    /// Append one non-blank working-form line. Empty lines are ignored.
    pub fn push(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        let (body, tight) = if ends_with_break_hyphen(line) {
            (&line[..line.len() - 1], true)
        } else {
            (line, false)
        };

        match self.state {
            BufferState::Idle => {
                self.text.push_str(body);
                self.state = BufferState::Accumulating;
            },
            BufferState::Accumulating => {
                if !self.join_tight {
                    self.text.push(' ');
                }
                self.text.push_str(body);
            },
        }

        self.join_tight = tight;
    }

    /// Close the current paragraph and return to [`BufferState::Idle`].
    ///
    /// Returns `None` when nothing but whitespace was collected, e.g. a
    /// paragraph made of a lone `-`.
    pub fn flush(&mut self) -> Option<String> {
        let text = std::mem::take(&mut self.text);
        self.state = BufferState::Idle;
        self.join_tight = false;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == text.len() {
            Some(text)
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_hyphen_detection() {
        assert!(ends_with_break_hyphen("Govern-"));
        assert!(ends_with_break_hyphen("state-of-the-"));
        assert!(ends_with_break_hyphen("123-"));
        assert!(ends_with_break_hyphen("-"));
    }

    #[test]
    fn test_break_hyphen_negative() {
        assert!(!ends_with_break_hyphen(""));
        assert!(!ends_with_break_hyphen("end -"));
        assert!(!ends_with_break_hyphen("- bullet"));
        assert!(!ends_with_break_hyphen("dash\u{2013}"));
    }

    #[test]
    fn test_hyphen_rejoin() {
        let mut buf = ParagraphBuffer::new();
        buf.push("exam-");
        buf.push("ple text");
        assert_eq!(buf.flush().as_deref(), Some("example text"));
    }

    #[test]
    fn test_plain_join_inserts_space() {
        let mut buf = ParagraphBuffer::new();
        buf.push("Hello");
        buf.push("world");
        assert_eq!(buf.flush().as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_detached_dash_keeps_space() {
        let mut buf = ParagraphBuffer::new();
        buf.push("end -");
        buf.push("next");
        assert_eq!(buf.flush().as_deref(), Some("end - next"));
    }

    #[test]
    fn test_chained_breaks() {
        let mut buf = ParagraphBuffer::new();
        buf.push("incom-");
        buf.push("prehen-");
        buf.push("sible");
        assert_eq!(buf.flush().as_deref(), Some("incomprehensible"));
    }

    #[test]
    fn test_trailing_hyphen_stripped_at_paragraph_end() {
        let mut buf = ParagraphBuffer::new();
        buf.push("dangling-");
        assert_eq!(buf.flush().as_deref(), Some("dangling"));
    }

    #[test]
    fn test_lone_hyphen_paragraph_discarded() {
        let mut buf = ParagraphBuffer::new();
        buf.push("-");
        assert_eq!(buf.state(), BufferState::Accumulating);
        assert!(buf.flush().is_none());
        assert_eq!(buf.state(), BufferState::Idle);
    }

    #[test]
    fn test_lone_hyphen_line_joins_tight() {
        let mut buf = ParagraphBuffer::new();
        buf.push("left");
        buf.push("-");
        buf.push("right");
        assert_eq!(buf.flush().as_deref(), Some("left right"));
    }

    #[test]
    fn test_state_transitions() {
        let mut buf = ParagraphBuffer::new();
        assert_eq!(buf.state(), BufferState::Idle);
        buf.push("");
        assert_eq!(buf.state(), BufferState::Idle);
        buf.push("line");
        assert_eq!(buf.state(), BufferState::Accumulating);
        assert!(buf.flush().is_some());
        assert_eq!(buf.state(), BufferState::Idle);
        assert!(buf.flush().is_none());
    }

    #[test]
    fn test_flush_resets_tight_join() {
        let mut buf = ParagraphBuffer::new();
        buf.push("broken-");
        buf.flush();
        buf.push("fresh");
        buf.push("start");
        assert_eq!(buf.flush().as_deref(), Some("fresh start"));
    }
}
