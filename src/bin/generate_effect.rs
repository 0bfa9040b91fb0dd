//! Generate one text effect and print the resulting image URL.
//!
//! Minimal UX:
//!   generate_effect "https://en.ephoto360.com/...-680.html" -t "Hello World"

use anyhow::{Result, anyhow};
use clap::Parser;
use ephoto360::cli::CliOptions;
use ephoto360::client::Ephoto360;
use ephoto360::config::setup_logging;
use ephoto360::error::Ephoto360Error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliOptions::parse();
    let _ = setup_logging(cli.debug);

    let url = cli.url.unwrap_or_default();
    let mut client = Ephoto360::new(&url)?;
    if !cli.text.is_empty() {
        client.set_texts(cli.text);
    }

    let result = match client.execute().await {
        Ok(result) => result,
        // Some effects only accept one input field; the site signals it
        // through an undecodable generated form value.
        Err(Ephoto360Error::SingleInputRequired) if client.texts().len() > 1 => {
            eprintln!("Effect requires a single input, retrying with the first text only...");
            let first = client.texts()[0].clone();
            client.set_text(&first);
            client.execute().await?
        }
        Err(err) => return Err(err.into()),
    };

    if !result.success {
        return Err(anyhow!("the site reported the generation as failed"));
    }

    println!("Image URL: {}", result.image_url);
    println!("Session ID: {}", result.session_id);
    Ok(())
}
