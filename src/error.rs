//! All errors related to linting a commit message.

use std::fmt;

use crate::component::Type;
use crate::component::MAX_HEADER_LEN;

/// The error returned when parsing a commit fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,

    context: Option<String>,
}

impl Error {
    /// Create a new error from a `ErrorKind`.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Attach the offending line or value.
    pub(crate) fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The line or value that caused the error, if any.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let context = self.context().unwrap_or_default();
        match self.kind {
            ErrorKind::InvalidHeader => write!(f, "invalid header line: {context}"),
            ErrorKind::HeaderTooLong => write!(
                f,
                "header must be at most {MAX_HEADER_LEN} characters: {context}"
            ),
            ErrorKind::UnknownType => {
                write!(f, "type \"{context}\" is not valid, must be one of: ")?;
                for (i, ty) in Type::ALL.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(ty.as_str())?;
                }
                Ok(())
            }
            ErrorKind::BreakingChangeUndocumented => write!(
                f,
                "breaking changes must be described in body or footers: {context}"
            ),
            ErrorKind::MalformedFooterBlock => write!(f, "encountered invalid footer: {context}"),
            ErrorKind::FooterNotPrecededByBlankLine => {
                write!(f, "footer not preceded by blank line: {context}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// All possible error kinds returned when parsing a conventional commit.
///
/// When a message violates several rules, the first one hit in this order is
/// reported: header shape, header length, type vocabulary, breaking change
/// documentation, then the footer rules in line order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The first line does not match `<type>[(<scope>)][!]: <description>`.
    InvalidHeader,

    /// The first line is longer than [`MAX_HEADER_LEN`] characters.
    HeaderTooLong,

    /// The type is not one of [`Type::ALL`].
    UnknownType,

    /// The header carries `!` but no lines follow it.
    BreakingChangeUndocumented,

    /// A line that is not a footer follows a footer.
    MalformedFooterBlock,

    /// A footer line is not directly preceded by an empty line.
    FooterNotPrecededByBlankLine,
}
