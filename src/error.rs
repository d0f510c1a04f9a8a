//! Errors returned by this crate. Color conversions never fail, only component
//! access by index and parsing text can.

/// The main error type.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A component was accessed with an index past the last component.
    #[error("component index {index} is out of range, colors have 4 components")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
    },
    /// Text could not be parsed as a color.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Error returned when parsing a color from text of the form
/// `(c0, c1, c2, c3)` fails.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The text does not start with `(` and end with `)`.
    #[error("expected the components to be enclosed in parentheses")]
    MissingParentheses,
    /// The wrong number of comma separated components were found.
    #[error("expected 4 components, found {0}")]
    ComponentCount(usize),
    /// A component is not a valid number.
    #[error("component {index} is not a valid number: {text:?}")]
    InvalidComponent {
        /// Position of the component, starting at 0.
        index: usize,
        /// The offending text, trimmed.
        text: String,
    },
}
