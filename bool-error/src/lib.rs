//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors in this workspace are raised while building boolean expressions, so there is no
//! user-written source text to point at. Instead, each [`Error`] carries the operator call that
//! was attempted, written out in functional notation (such as `NOT(A, B)`), and the spans of the
//! error index into that text.

pub use ariadne;

// lets `#[derive(ErrorKind)]` refer to this crate by name in the tests below
#[cfg(test)]
extern crate self as bool_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The source ID used when building reports from an [`Error`].
pub const SRC_ID: &str = "expression";

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as [`Any`], so callers can downcast to the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// A one-line description of the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of an operator call that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The operator call that caused this error, such as `NOT(A, B)`.
    pub source: String,

    /// The regions of [`Error::source`] that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given source, spans and kind.
    pub fn new(source: impl Into<String>, spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { source: source.into(), spans, kind: Box::new(kind) }
    }

    /// Returns the kind of error if it is of type `K`.
    pub fn downcast_kind<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report(&self) -> Report<(&'static str, Range<usize>)> {
        self.kind.build_report(SRC_ID, &self.spans)
    }

    /// Writes the report of this error to the given writer.
    pub fn write_report(&self, writer: impl std::io::Write) -> std::io::Result<()> {
        self.build_report().write((SRC_ID, Source::from(&self.source)), writer)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self) -> std::io::Result<()> {
        self.build_report().eprint((SRC_ID, Source::from(&self.source)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.message(), self.source)
    }
}

impl std::error::Error for Error {}
