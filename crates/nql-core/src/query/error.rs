//! Error types for query compilation.

use std::fmt;

/// Error that aborted a compilation.
///
/// No partial query is ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    /// Kind of error.
    pub kind: CompileErrorKind,
    /// Byte offset in the input where the error was detected.
    pub position: usize,
    /// 1-based line of `position`.
    pub line: usize,
    /// 1-based column of `position`.
    pub column: usize,
    /// The offending input fragment.
    pub fragment: String,
    /// Human-readable message.
    pub message: String,
}

impl CompileError {
    /// Creates a new compile error.
    #[must_use]
    pub fn new(
        kind: CompileErrorKind,
        position: usize,
        line: usize,
        column: usize,
        fragment: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            position,
            line,
            column,
            fragment: fragment.into(),
            message: message.into(),
        }
    }

    /// The query text was absent.
    #[must_use]
    pub fn null_input() -> Self {
        Self::new(
            CompileErrorKind::NullInput,
            0,
            1,
            1,
            "",
            "query is required",
        )
    }

    /// Syntax error at a byte offset of `input`; line and column are derived
    /// from the offset.
    #[must_use]
    pub fn syntax(input: &str, position: usize, message: impl Into<String>) -> Self {
        let position = position.min(input.len());
        let (line, column) = line_col(input, position);
        Self::new(
            CompileErrorKind::Syntax,
            position,
            line,
            column,
            fragment_at(input, position),
            message,
        )
    }

    /// Returns true for a syntax error.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        self.kind == CompileErrorKind::Syntax
    }

    /// Returns true when the input was absent.
    #[must_use]
    pub fn is_null_input(&self) -> bool {
        self.kind == CompileErrorKind::NullInput
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} at line {}, column {}",
            self.kind.code(),
            self.message,
            self.line,
            self.column
        )
    }
}

impl std::error::Error for CompileError {}

/// Kind of compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompileErrorKind {
    /// The query text was absent (NQL-E001).
    NullInput,
    /// Malformed input (NQL-E002).
    Syntax,
}

impl CompileErrorKind {
    /// Returns the error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NullInput => "NQL-E001",
            Self::Syntax => "NQL-E002",
        }
    }
}

const FRAGMENT_LEN: usize = 32;

fn fragment_at(input: &str, position: usize) -> String {
    let start = floor_char_boundary(input, position);
    input[start..].chars().take(FRAGMENT_LEN).collect()
}

fn floor_char_boundary(input: &str, mut position: usize) -> usize {
    while position > 0 && !input.is_char_boundary(position) {
        position -= 1;
    }
    position
}

fn line_col(input: &str, position: usize) -> (usize, usize) {
    let before = &input[..floor_char_boundary(input, position)];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rsplit('\n')
        .next()
        .map_or(0, |l| l.chars().count())
        + 1;
    (line, column)
}
