use std::fmt;

/// Represents a failure of one of the rendering stages.
///
/// The error itself only names the stage that failed.  The underlying
/// decoder or template engine error is attached as [`source`] and can be
/// reached by walking the error chain:
///
/// ```rust
/// # use std::error::Error as _;
/// let err = jsontpl::decode("{bad}").unwrap_err();
/// assert_eq!(err.to_string(), "failed to decode JSON data");
/// assert!(err.source().is_some());
/// ```
///
/// [`source`]: std::error::Error::source
pub struct Error {
    kind: ErrorKind,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("source", &self.source)
            .finish()
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }
}

impl Eq for Error {}

/// An enum describing the stage that failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The data argument is not well formed JSON.
    Decode,
    /// The template source could not be compiled.
    TemplateSyntax,
    /// The template failed while rendering.
    Execution,
    /// The rendered output could not be written.
    Output,
}

impl ErrorKind {
    fn description(self) -> &'static str {
        match self {
            ErrorKind::Decode => "failed to decode JSON data",
            ErrorKind::TemplateSyntax => "failed to compile template",
            ErrorKind::Execution => "failed to render template",
            ErrorKind::Output => "failed to write output",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Error {
    /// Creates a new error of the given kind caused by `source`.
    pub fn new<E: std::error::Error + Send + Sync + 'static>(kind: ErrorKind, source: E) -> Error {
        Error {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|err| err.as_ref() as _)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind, source: None }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorKind::Decode, err)
    }
}
