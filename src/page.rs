//! Markup extraction for the effect page and the submission response.

use scraper::{ElementRef, Html, Selector};

use crate::error::Ephoto360Error;

/// Hidden form state harvested from the initial effect page.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct EffectPage {
    pub(crate) build_server: String,
    pub(crate) build_server_id: String,
    pub(crate) token: String,
    pub(crate) submit: String,
    pub(crate) radio_options: Vec<String>,
}

impl EffectPage {
    /// Harvests the hidden fields and radio option values from the effect
    /// page markup. A missing field yields an empty string; only a
    /// selector the engine cannot compile fails the whole parse.
    pub(crate) fn parse(html: &str) -> Result<Self, Ephoto360Error> {
        let document = Html::parse_document(html);

        let radio_selector = compile("input[name=\"radio0[radio]\"]")?;
        let radio_options = document
            .select(&radio_selector)
            .filter_map(|input| input.value().attr("value"))
            .map(str::to_string)
            .collect();

        Ok(Self {
            build_server: value_attr_by_id(&document, "#build_server")?,
            build_server_id: value_attr_by_id(&document, "#build_server_id")?,
            token: value_attr_by_id(&document, "#token")?,
            submit: value_attr_by_id(&document, "#submit")?,
            radio_options,
        })
    }
}

/// Where to look for the generated form value in the submission response.
enum Lookup {
    /// Trimmed text content of the element.
    Text(&'static str),
    /// Raw `value` attribute of the element.
    ValueAttr(&'static str),
}

/// Lookup order for the generated form value; the first non-empty result
/// wins.
const FORM_VALUE_LOOKUPS: [Lookup; 4] = [
    Lookup::Text("#form_value"),
    Lookup::Text("#form_value_input"),
    Lookup::ValueAttr("#form_value"),
    Lookup::ValueAttr("#form_value_input"),
];

/// Extracts the generated form value embedded in the submission response,
/// trying each known location in order. Returns `None` when every
/// location is empty or absent.
pub(crate) fn generated_form_value(html: &str) -> Result<Option<String>, Ephoto360Error> {
    let document = Html::parse_document(html);
    for lookup in &FORM_VALUE_LOOKUPS {
        let candidate = match lookup {
            Lookup::Text(selector) => select_one(&document, selector)?
                .map(|element| element.text().collect::<String>().trim().to_string()),
            Lookup::ValueAttr(selector) => select_one(&document, selector)?
                .and_then(|element| element.value().attr("value"))
                .map(str::to_string),
        };
        if let Some(value) = candidate
            && !value.is_empty()
        {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn compile(selector: &str) -> Result<Selector, Ephoto360Error> {
    Selector::parse(selector).map_err(|err| Ephoto360Error::MarkupParse(err.to_string()))
}

fn select_one<'a>(
    document: &'a Html,
    selector: &str,
) -> Result<Option<ElementRef<'a>>, Ephoto360Error> {
    let selector = compile(selector)?;
    Ok(document.select(&selector).next())
}

fn value_attr_by_id(document: &Html, selector: &str) -> Result<String, Ephoto360Error> {
    Ok(select_one(document, selector)?
        .and_then(|element| element.value().attr("value"))
        .unwrap_or_default()
        .to_string())
}
