//! Image creation response handling and the public result type.

use std::fmt;

use serde::Deserialize;

/// Final outcome of one pipeline run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EffectResult {
    /// Whether the site reported the generation as successful.
    pub success: bool,
    /// Absolute URL of the generated image.
    pub image_url: String,
    /// Site session identifier, normalized to a display string.
    pub session_id: String,
}

/// JSON response of the image creation endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ImageCreationResponse {
    #[serde(default)]
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) image: String,
    #[serde(default)]
    pub(crate) fullsize_image: String,
    #[serde(default)]
    pub(crate) session_id: Option<SessionId>,
}

impl ImageCreationResponse {
    /// The image path to use: the full size path wins when both are
    /// present.
    fn image_path(&self) -> &str {
        if !self.fullsize_image.is_empty() {
            &self.fullsize_image
        } else {
            &self.image
        }
    }

    /// Builds the caller-facing result, prefixing the image path with the
    /// build server reported in the generated form value.
    pub(crate) fn into_result(self, build_server: &str) -> EffectResult {
        let image_url = format!("{}{}", build_server, self.image_path());
        let session_id = self
            .session_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        EffectResult {
            success: self.success,
            image_url,
            session_id,
        }
    }
}

/// The session identifier arrives as whatever JSON type the site felt
/// like sending; it is normalized to a display string here and never
/// propagated as a variant.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SessionId {
    /// A plain JSON integer.
    Integer(i64),
    /// A JSON float; integral values render without the decimal point.
    Float(f64),
    /// A JSON string, passed through unchanged.
    Text(String),
    /// Anything else, rendered in its JSON form.
    Other(serde_json::Value),
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) if value.fract() == 0.0 => write!(f, "{value:.0}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}
