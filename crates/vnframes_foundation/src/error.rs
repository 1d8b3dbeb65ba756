//! Error types for the vnframes system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::pos::PosKind;
use crate::selrestr::Logic;

/// The main error type for vnframes operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .context.as_ref().map(|c| format!(" ({c})")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error, replacing any existing context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Fills in the source file of this error's context, keeping the rest.
    #[must_use]
    pub fn in_source(mut self, source: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_source(source));
        self
    }

    /// Fills in the class id of this error's context, unless already set.
    #[must_use]
    pub fn in_class(mut self, class_id: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(if context.class_id.is_some() {
            context
        } else {
            context.with_class(class_id)
        });
        self
    }

    /// Fills in the frame of this error's context, unless already set.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(if context.frame.is_some() {
            context
        } else {
            context.with_frame(frame)
        });
        self
    }

    /// Records that the error surfaced through `stage`.
    ///
    /// Called from the inside out, so the outermost stage is listed first.
    #[must_use]
    pub fn via(mut self, stage: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_outer_entry(stage));
        self
    }

    /// Creates a structural parse error for a resource element.
    #[must_use]
    pub fn structural(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StructuralParse {
            element: element.into(),
            message: message.into(),
        })
    }

    /// Creates an invalid token error.
    #[must_use]
    pub fn invalid_token(pos: PosKind, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken {
            pos,
            reason: reason.into(),
        })
    }

    /// Creates a restriction resolution error.
    #[must_use]
    pub fn restriction_resolution(
        labels: &[String],
        logic: Logic,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::RestrictionResolution {
            labels: labels.to_vec(),
            logic,
            reason: reason.into(),
        })
    }

    /// Creates an unknown format error.
    #[must_use]
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownFormat(name.into()))
    }

    /// Creates a role mismatch error for a merge of differently-typed roles.
    #[must_use]
    pub fn role_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::new(ErrorKind::RoleMismatch {
            left: left.into(),
            right: right.into(),
        })
    }

    /// Creates a malformed placeholder error.
    #[must_use]
    pub fn malformed_placeholder(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedPlaceholder {
            token: token.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invalid class id error.
    #[must_use]
    pub fn invalid_class_id(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidClassId(id.into()))
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: message.to_string(),
        })
    }

    /// Creates a JSON error.
    #[must_use]
    pub fn json(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Json(message.to_string()))
    }

    /// Creates an XML syntax error.
    #[must_use]
    pub fn xml(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Xml(message.to_string()))
    }

    /// Creates a CSV error.
    #[must_use]
    pub fn csv(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Csv(message.to_string()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error was caused by invalid resource structure.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::StructuralParse { .. } | ErrorKind::InvalidToken { .. } | ErrorKind::Xml(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A resource node violates the expected class/frame schema.
    #[error("structural parse error in <{element}>: {message}")]
    StructuralParse {
        /// The element being parsed.
        element: String,
        /// Description of the violation.
        message: String,
    },

    /// A token's field combination is not valid for its kind.
    #[error("invalid {pos} token: {reason}")]
    InvalidToken {
        /// The token kind.
        pos: PosKind,
        /// Why the token was rejected.
        reason: String,
    },

    /// A restriction combination did not resolve to any literal.
    #[error("cannot resolve restrictions {logic}{labels:?}: {reason}")]
    RestrictionResolution {
        /// The offending restriction labels.
        labels: Vec<String>,
        /// The combination mode.
        logic: Logic,
        /// Why resolution failed.
        reason: String,
    },

    /// A caller requested an undefined format name.
    #[error("unknown frame format: {0}")]
    UnknownFormat(String),

    /// Two roles of different type were merged.
    #[error("cannot merge roles: {left} and {right} have different role types")]
    RoleMismatch {
        /// Role type of the left operand.
        left: String,
        /// Role type of the right operand.
        right: String,
    },

    /// A primary token carries qualifiers that cannot be normalized.
    #[error("malformed placeholder {token:?}: {reason}")]
    MalformedPlaceholder {
        /// The token.
        token: String,
        /// Why normalization failed.
        reason: String,
    },

    /// A class id does not have the `name-n.n...` shape.
    #[error("invalid class id: {0}")]
    InvalidClassId(String),

    /// Reading or writing a file failed.
    #[error("i/o error on '{path}': {message}")]
    Io {
        /// The file involved.
        path: String,
        /// The underlying error message.
        message: String,
    },

    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(String),

    /// The XML document is not well formed.
    #[error("xml error: {0}")]
    Xml(String),

    /// CSV encoding failed.
    #[error("csv error: {0}")]
    Csv(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file.
    pub source: Option<String>,
    /// Class id being processed.
    pub class_id: Option<String>,
    /// Frame (primary string) being processed.
    pub frame: Option<String>,
    /// Formats the error passed through, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the class id.
    #[must_use]
    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.class_id = Some(class_id.into());
        self
    }

    /// Sets the frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frame = Some(frame.into());
        self
    }

    /// Adds a stack entry above the ones already present.
    #[must_use]
    pub fn with_outer_entry(mut self, entry: impl Into<String>) -> Self {
        self.stack.insert(0, entry.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(source) = &self.source {
            parts.push(format!("in {source}"));
        }
        if let Some(class_id) = &self.class_id {
            parts.push(format!("class {class_id}"));
        }
        if let Some(frame) = &self.frame {
            parts.push(format!("frame '{frame}'"));
        }
        if !self.stack.is_empty() {
            parts.push(format!("via {}", self.stack.join(" > ")));
        }
        write!(f, "{}", parts.join(", "))
    }
}

/// Result type alias for vnframes operations.
pub type Result<T> = std::result::Result<T, Error>;
