//! Submission field assembly and the generated form shape.

use serde::Deserialize;

use crate::error::Ephoto360Error;
use crate::page::EffectPage;
use crate::random::SecureRandom;

/// Fields replayed in the submission POST, assembled from the harvested
/// effect page state.
#[derive(Clone, Debug, Default)]
pub(crate) struct SubmissionFields {
    pub(crate) submit: String,
    pub(crate) token: String,
    pub(crate) build_server: String,
    pub(crate) build_server_id: Option<i64>,
    pub(crate) radio: Option<String>,
}

impl SubmissionFields {
    /// Builds the submission fields: the build server id is carried only
    /// when it parses as an integer, and one radio option is picked
    /// uniformly when the page offered any.
    pub(crate) fn assemble(
        page: &EffectPage,
        random: &dyn SecureRandom,
    ) -> Result<Self, Ephoto360Error> {
        let radio = if page.radio_options.is_empty() {
            None
        } else {
            let index = random.pick_index(page.radio_options.len())?;
            let option = page.radio_options.get(index).cloned().ok_or_else(|| {
                Ephoto360Error::SecureRandom(format!(
                    "index {index} out of range for {} options",
                    page.radio_options.len()
                ))
            })?;
            Some(option)
        };

        Ok(Self {
            submit: page.submit.clone(),
            token: page.token.clone(),
            build_server: page.build_server.clone(),
            build_server_id: page.build_server_id.parse::<i64>().ok(),
            radio,
        })
    }

    /// Field name/value pairs for the multipart submission, optional
    /// fields omitted.
    pub(crate) fn parts(&self) -> Vec<(&'static str, String)> {
        let mut parts = vec![
            ("submit", self.submit.clone()),
            ("token", self.token.clone()),
            ("build_server", self.build_server.clone()),
        ];
        if let Some(id) = self.build_server_id {
            parts.push(("build_server_id", id.to_string()));
        }
        if let Some(radio) = &self.radio {
            parts.push(("radio0[radio]", radio.clone()));
        }
        parts
    }
}

/// The JSON blob embedded in the submission response, echoed back to the
/// image creation endpoint. Absent fields default; a type mismatch means
/// the effect wants a single input field.
#[derive(Debug, Deserialize)]
pub(crate) struct GeneratedForm {
    #[serde(default)]
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) token: String,
    #[serde(default)]
    pub(crate) build_server: String,
    #[serde(default)]
    pub(crate) build_server_id: String,
    #[serde(default)]
    pub(crate) radio0: Option<RadioChoice>,
    #[serde(default)]
    pub(crate) text: Vec<String>,
}

/// Nested radio selection inside the generated form value.
#[derive(Debug, Deserialize)]
pub(crate) struct RadioChoice {
    #[serde(default)]
    pub(crate) radio: String,
}

impl GeneratedForm {
    pub(crate) fn parse(raw: &str) -> Result<Self, Ephoto360Error> {
        serde_json::from_str(raw).map_err(|_| Ephoto360Error::SingleInputRequired)
    }

    /// The chosen radio option, if one was submitted.
    pub(crate) fn radio(&self) -> Option<&str> {
        self.radio0
            .as_ref()
            .map(|choice| choice.radio.as_str())
            .filter(|radio| !radio.is_empty())
    }

    /// Pairs for the url-encoded image creation request. Text entries keep
    /// their submitted order; the site maps them to effect slots
    /// positionally.
    pub(crate) fn creation_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("id", self.id.clone()),
            ("token", self.token.clone()),
            ("build_server", self.build_server.clone()),
            ("build_server_id", self.build_server_id.clone()),
        ];
        if let Some(radio) = self.radio() {
            params.push(("radio0[radio]", radio.to_string()));
        }
        for text in &self.text {
            params.push(("text[]", text.clone()));
        }
        params
    }
}
