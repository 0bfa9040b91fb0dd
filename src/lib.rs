//! Client for generating EPhoto360 text effects
//!
//! Automates the site's form workflow: fetch an effect page, harvest the
//! hidden form tokens, submit the caller's text and ask the site to build
//! the final image, returning its absolute URL.
//!
//! ```no_run
//! # async fn run() -> Result<(), ephoto360::error::Ephoto360Error> {
//! let mut client = ephoto360::client::Ephoto360::new("")?;
//! client.set_text("Hello World");
//! let result = client.execute().await?;
//! println!("{}", result.image_url);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions)]
#![deny(clippy::all)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::complexity)]
#![deny(clippy::correctness)]
#![deny(clippy::disallowed_methods)]
#![deny(clippy::expect_used)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::panic)]
#![deny(clippy::perf)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::unreachable)]
#![deny(clippy::unwrap_used)]
#![deny(warnings)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
mod form;
mod page;
pub mod random;
pub mod response;
