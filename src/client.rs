//! The effect client and its three-stage pipeline.

use reqwest::header::{ACCEPT, COOKIE, HeaderMap, ORIGIN, REFERER, SET_COOKIE, USER_AGENT};
use tracing::{debug, warn};
use url::Url;

use crate::constants::{
    ACCEPT_JSON, ACCEPT_PAGE, BROWSER_USER_AGENT, CREATE_IMAGE_PATH, DEFAULT_EFFECT_URL,
    DOMAIN_MARKER, REQUEST_TIMEOUT,
};
use crate::error::Ephoto360Error;
use crate::form::{GeneratedForm, SubmissionFields};
use crate::page::{self, EffectPage};
use crate::random::{OsRandom, SecureRandom};
use crate::response::{EffectResult, ImageCreationResponse};

/// One effect-generation session against a photo360 effect page.
///
/// Not safe to share across simultaneous invocations: the submission
/// field state is overwritten on every `execute` call.
pub struct Ephoto360 {
    page_url: Url,
    input_text: Vec<String>,
    fields: SubmissionFields,
    random: Box<dyn SecureRandom + Send + Sync>,
}

impl std::fmt::Debug for Ephoto360 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ephoto360")
            .field("page_url", &self.page_url)
            .field("input_text", &self.input_text)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl Ephoto360 {
    /// Creates a client for the given effect page URL.
    ///
    /// An empty string substitutes the default foggy-glass effect. The
    /// URL must contain `photo360.com` and parse as an absolute URL.
    pub fn new(effect_page_url: &str) -> Result<Self, Ephoto360Error> {
        let effect_page_url = if effect_page_url.is_empty() {
            DEFAULT_EFFECT_URL
        } else {
            effect_page_url
        };
        if !effect_page_url.contains(DOMAIN_MARKER) {
            return Err(Ephoto360Error::InvalidUrl(effect_page_url.to_string()));
        }
        let page_url = Url::parse(effect_page_url)
            .map_err(|_| Ephoto360Error::InvalidUrl(effect_page_url.to_string()))?;

        Ok(Self {
            page_url,
            input_text: vec!["Faris".to_string()],
            fields: SubmissionFields::default(),
            random: Box::new(OsRandom),
        })
    }

    /// Replaces the text inputs with exactly one element.
    pub fn set_text(&mut self, text: &str) {
        self.input_text = vec![text.to_string()];
    }

    /// Replaces the text inputs wholesale, keeping the caller's order.
    pub fn set_texts(&mut self, texts: Vec<String>) {
        if texts.is_empty() {
            warn!("replacing text inputs with an empty list; the site will likely reject the submission");
        }
        self.input_text = texts;
    }

    /// Swaps the secure random source used for the radio option pick.
    pub fn with_random_source(mut self, source: Box<dyn SecureRandom + Send + Sync>) -> Self {
        self.random = source;
        self
    }

    /// The validated effect page URL this client targets.
    pub fn effect_page_url(&self) -> &str {
        self.page_url.as_str()
    }

    /// The current text inputs, in submission order.
    pub fn texts(&self) -> &[String] {
        &self.input_text
    }

    /// Runs the whole pipeline: fetch the effect page, submit the form
    /// data, request the image creation. Every stage failure aborts the
    /// remaining stages; nothing is retried.
    pub async fn execute(&mut self) -> Result<EffectResult, Ephoto360Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let cookies = self.fetch_initial_page(&http).await?;
        let generated_form_value = self.submit_form_data(&http, &cookies).await?;
        self.create_image(&http, &generated_form_value, &cookies).await
    }

    /// Origin (scheme + host) of the effect page, sent as the Origin
    /// header and used as the base of the creation endpoint.
    fn origin(&self) -> String {
        self.page_url.origin().ascii_serialization()
    }

    /// Stage 1: loads the effect page, harvests cookies and the hidden
    /// form state, and assembles the submission fields on the instance.
    async fn fetch_initial_page(
        &mut self,
        http: &reqwest::Client,
    ) -> Result<String, Ephoto360Error> {
        debug!("fetching effect page {}", self.page_url);
        let response = http
            .get(self.page_url.as_str())
            .header(ACCEPT, ACCEPT_PAGE)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ORIGIN, self.origin())
            .header(REFERER, self.page_url.as_str())
            .send()
            .await?;

        let cookies = join_cookies(response.headers());
        let body = response.text().await?;

        let effect_page = EffectPage::parse(&body)?;
        self.fields = SubmissionFields::assemble(&effect_page, self.random.as_ref())?;
        Ok(cookies)
    }

    /// Stage 3: posts the multipart submission and pulls the generated
    /// form value out of the response markup.
    async fn submit_form_data(
        &self,
        http: &reqwest::Client,
        cookies: &str,
    ) -> Result<String, Ephoto360Error> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.fields.parts() {
            form = form.text(name, value);
        }
        for text in &self.input_text {
            form = form.text("text[]", text.clone());
        }

        debug!("submitting form data to {}", self.page_url);
        let response = http
            .post(self.page_url.as_str())
            .multipart(form)
            .header(ACCEPT, "*/*")
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(COOKIE, cookies)
            .header(ORIGIN, self.origin())
            .header(REFERER, self.page_url.as_str())
            .send()
            .await?;

        let body = response.text().await?;
        page::generated_form_value(&body)?.ok_or(Ephoto360Error::MissingGeneratedValue)
    }

    /// Stage 4: decodes the generated form value, echoes it to the
    /// creation endpoint and normalizes the JSON response.
    async fn create_image(
        &self,
        http: &reqwest::Client,
        generated_form_value: &str,
        cookies: &str,
    ) -> Result<EffectResult, Ephoto360Error> {
        let generated_form = GeneratedForm::parse(generated_form_value)?;
        let create_image_url = format!("{}{}", self.origin(), CREATE_IMAGE_PATH);

        debug!("requesting image creation at {create_image_url}");
        let response = http
            .post(&create_image_url)
            .form(&generated_form.creation_params())
            .header(ACCEPT, ACCEPT_JSON)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(COOKIE, cookies)
            .header(ORIGIN, self.origin())
            .header(REFERER, self.page_url.as_str())
            .send()
            .await?;

        let body = response.text().await?;
        let creation: ImageCreationResponse =
            serde_json::from_str(&body).map_err(Ephoto360Error::ResponseDecode)?;

        Ok(creation.into_result(&generated_form.build_server))
    }
}

/// Joins every `Set-Cookie` name=value pair into one Cookie header value
/// for replay on the two POST calls.
fn join_cookies(headers: &HeaderMap) -> String {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_uses_the_documented_default() {
        let client = Ephoto360::new("").expect("create client");
        assert_eq!(client.effect_page_url(), DEFAULT_EFFECT_URL);
    }

    #[test]
    fn accepts_a_real_effect_url() {
        let url = "https://en.ephoto360.com/write-text-on-wet-glass-online-589.html";
        let client = Ephoto360::new(url).expect("create client");
        assert_eq!(client.effect_page_url(), url);
    }

    #[test]
    fn rejects_a_url_without_the_domain_marker() {
        let err = Ephoto360::new("https://example.com/test").expect_err("creation should fail");
        assert!(matches!(err, Ephoto360Error::InvalidUrl(_)));
    }

    #[test]
    fn rejects_a_marker_string_that_is_not_a_url() {
        let err = Ephoto360::new("photo360.com").expect_err("creation should fail");
        assert!(matches!(err, Ephoto360Error::InvalidUrl(_)));
    }

    #[test]
    fn constructor_seeds_a_default_text() {
        let client = Ephoto360::new("").expect("create client");
        assert_eq!(client.texts(), ["Faris"]);
    }

    #[test]
    fn set_text_replaces_the_whole_list() {
        let mut client = Ephoto360::new("").expect("create client");
        client.set_texts(vec!["a".to_string(), "b".to_string()]);
        client.set_text("X");
        assert_eq!(client.texts(), ["X"]);
    }

    #[test]
    fn set_texts_replaces_the_whole_list_in_order() {
        let mut client = Ephoto360::new("").expect("create client");
        client.set_texts(vec![
            "First".to_string(),
            "Second".to_string(),
            "Third".to_string(),
        ]);
        assert_eq!(client.texts(), ["First", "Second", "Third"]);
    }

    #[test]
    fn cookies_join_as_name_value_pairs() {
        let mut headers = HeaderMap::new();
        headers.append(
            SET_COOKIE,
            "PHPSESSID=abc123; Path=/; HttpOnly".parse().expect("header value"),
        );
        headers.append(SET_COOKIE, "region=eu".parse().expect("header value"));
        assert_eq!(join_cookies(&headers), "PHPSESSID=abc123; region=eu");
    }

    #[test]
    fn no_cookies_join_to_an_empty_string() {
        assert_eq!(join_cookies(&HeaderMap::new()), "");
    }
}
