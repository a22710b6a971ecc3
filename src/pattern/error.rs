use std::fmt;

/// URL template compilation error
///
/// Returned by `PathPattern::compile()` when a template cannot be turned
/// into a matcher. Surfaced synchronously at registration time; a route
/// with a malformed template is never added to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The template string is empty
    Empty,
    /// A parameter marker with no identifier (e.g. `/users/:`)
    MissingParameterName {
        /// The offending segment
        segment: String,
    },
    /// A parameter identifier containing characters outside `[A-Za-z0-9_]`
    InvalidParameterName {
        /// The offending segment
        segment: String,
    },
    /// A `:` marker appearing anywhere but the start of a segment
    StrayMarker {
        /// The offending segment
        segment: String,
    },
    /// The generated regex was rejected by the regex engine
    ///
    /// Should not happen for templates that pass segment validation; kept
    /// so compilation failures surface as errors instead of panics.
    Compile {
        /// The original template
        pattern: String,
        /// The regex engine's error message
        message: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Empty => {
                write!(f, "URL pattern error: pattern is empty")
            }
            PatternError::MissingParameterName { segment } => {
                write!(
                    f,
                    "URL pattern error: segment '{}' declares a parameter without a name. \
                    Expected an identifier after ':' (e.g. ':id').",
                    segment
                )
            }
            PatternError::InvalidParameterName { segment } => {
                write!(
                    f,
                    "URL pattern error: segment '{}' has an invalid parameter name. \
                    Parameter names may only contain ASCII letters, digits, and '_'.",
                    segment
                )
            }
            PatternError::StrayMarker { segment } => {
                write!(
                    f,
                    "URL pattern error: segment '{}' contains ':' outside the leading \
                    position. Parameter markers must start a segment (e.g. '/users/:id').",
                    segment
                )
            }
            PatternError::Compile { pattern, message } => {
                write!(
                    f,
                    "URL pattern error: failed to compile '{}' into a matcher: {}",
                    pattern, message
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}
