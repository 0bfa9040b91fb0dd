//! Shared constants for the effect pipeline
//!

use std::time::Duration;

/// Effect page used when the caller passes an empty URL.
pub const DEFAULT_EFFECT_URL: &str =
    "https://en.ephoto360.com/handwritten-text-on-foggy-glass-online-680.html";

/// Marker every accepted effect page URL must contain.
pub const DOMAIN_MARKER: &str = "photo360.com";

/// Path of the image creation endpoint, appended to the page origin.
pub const CREATE_IMAGE_PATH: &str = "/effect/create-image";

/// Per-request timeout shared by all three pipeline calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent sent on every request; the site rejects obviously
/// non-browser clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36 Edg/115.0.1901.188";

/// Accept header for the initial page fetch.
pub const ACCEPT_PAGE: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";

/// Accept header for the image creation call.
pub const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";
