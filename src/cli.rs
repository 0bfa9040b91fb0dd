//! CLI parser
use clap::Parser;

#[derive(Parser, Debug)]
/// CLI Options
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "EPHOTO360_DEBUG")]
    /// Enable debug logging. Env: EPHOTO360_DEBUG
    pub debug: bool,
    #[clap(env = "EPHOTO360_EFFECT_URL")]
    /// Effect page URL; omitted uses the default foggy-glass effect.
    /// Env: EPHOTO360_EFFECT_URL
    pub url: Option<String>,
    #[clap(long, short)]
    /// Text to render; repeat the flag for effects with multiple input
    /// fields.
    pub text: Vec<String>,
}
