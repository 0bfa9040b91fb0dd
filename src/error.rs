//! Error handling

use std::fmt;

/// Failures surfaced by the effect pipeline.
#[derive(Debug)]
pub enum Ephoto360Error {
    /// The effect page URL failed construction-time validation.
    InvalidUrl(String),
    /// Network, connection or timeout failure on any of the three calls.
    Transport(reqwest::Error),
    /// The HTML could not be queried at all, as opposed to an individual
    /// field being absent (which is tolerated silently).
    MarkupParse(String),
    /// The submission response held none of the expected form value
    /// locations; the page structure was unrecognized or the request was
    /// rejected.
    MissingGeneratedValue,
    /// The generated form value was not JSON of the expected shape. A
    /// known signal that the target effect supports only one text field;
    /// retry with a single input.
    SingleInputRequired,
    /// The entropy source failed while picking a radio option.
    SecureRandom(String),
    /// The image creation response was malformed.
    ResponseDecode(serde_json::Error),
}

impl fmt::Display for Ephoto360Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(url) => {
                write!(f, "invalid URL {url:?}: must be a photo360.com URL")
            }
            Self::Transport(err) => write!(f, "request failed: {err}"),
            Self::MarkupParse(err) => write!(f, "failed to query markup: {err}"),
            Self::MissingGeneratedValue => write!(f, "no generated form value found"),
            Self::SingleInputRequired => {
                write!(f, "please try using a URL that requires 1 input field")
            }
            Self::SecureRandom(err) => {
                write!(f, "failed to generate secure random number: {err}")
            }
            Self::ResponseDecode(err) => {
                write!(f, "failed to decode image creation response: {err}")
            }
        }
    }
}

impl std::error::Error for Ephoto360Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::ResponseDecode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Ephoto360Error {
    fn from(err: reqwest::Error) -> Self {
        Ephoto360Error::Transport(err)
    }
}
