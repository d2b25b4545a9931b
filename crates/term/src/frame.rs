//! Styled text frame handed from the view to the renderer.

use crate::types::PieceKind;

/// A run of text, optionally tinted with a piece color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub piece: Option<PieceKind>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            piece: None,
        }
    }

    pub fn piece(text: impl Into<String>, kind: PieceKind) -> Self {
        Self {
            text: text.into(),
            piece: Some(kind),
        }
    }
}

pub type Line = Vec<Span>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    lines: Vec<Line>,
    /// Whether the last line is a prompt that should not end with a newline.
    prompt: bool,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.lines.push(vec![Span::plain(text)]);
    }

    pub fn blank(&mut self) {
        self.lines.push(Vec::new());
    }

    /// Mark the last line as a prompt.
    pub fn set_prompt(&mut self, prompt: bool) {
        self.prompt = prompt;
    }

    pub fn is_prompt(&self) -> bool {
        self.prompt
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Text without any styling, lines joined by `\n`.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for span in line {
                out.push_str(&span.text);
            }
        }
        if !self.prompt && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }
}
