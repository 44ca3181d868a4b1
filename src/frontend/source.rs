use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// A loaded program text together with the name used in diagnostics.
#[derive(Debug, Clone)]
pub struct Source {
    name: String,
    text: String,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Source {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Source::new(path.display().to_string(), text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based line and column of a byte offset. Offsets past the end map to
    /// the position just after the last character.
    pub fn location(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        let before = &self.text[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }

    fn line_text(&self, line: usize) -> &str {
        self.text.lines().nth(line - 1).unwrap_or("")
    }

    /// Formats `message` as a diagnostic anchored at `offset`:
    ///
    /// ```text
    /// prog.bx:1:9: Error: syntax error while processing PLUS
    ///     s = x + + x;
    ///             ^
    /// ```
    pub fn render(&self, offset: usize, message: &str) -> String {
        let (line, column) = self.location(offset);
        let mut out = String::new();
        let _ = writeln!(out, "{}:{}:{}: Error: {}", self.name(), line, column, message);
        let _ = writeln!(out, "    {}", self.line_text(line));
        let _ = write!(out, "    {}^", " ".repeat(column - 1));
        out
    }
}
