//! A Rust client for the Flagship Decision API, a feature flagging and experimentation service.
//!
//! # Overview
//!
//! The crate revolves around a [`Client`] bound to a Flagship environment. The client assigns
//! `visitors` to campaign variations, where each visitor has an ID and a [`Context`] of key-value
//! attributes used for targeting. Three operations are available:
//!
//! - [`Client::request_single_campaign`] assigns a visitor to one campaign.
//! - [`Client::request_all_campaigns`] assigns a visitor to every campaign of the environment.
//! - [`Client::request_campaign_activation`] records that a visitor has seen a variation.
//!
//! Assignment calls are shaped by [`RequestOptions`] (decision group, trigger hit, response format
//! and [`Mode`]).
//!
//! # HTTP
//!
//! The client builds requests but does not perform them itself: it borrows an [`HttpSender`].
//! `reqwest::blocking::Client` implements it out of the box. Responses and transport errors are
//! returned exactly as the sender produced them.
//!
//! # Error Handling
//!
//! [`Error`] covers the failures detected by the client itself, all of them at construction time
//! (empty environment ID, invalid base URL).
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate for logging
//! messages under the `flagship` target. Consider integrating a `log`-compatible logger
//! implementation for better visibility into outgoing requests.
//!
//! # Examples
//!
//! ```no_run
//! use flagship::{ClientConfig, Context, RequestOptions};
//!
//! let http = reqwest::blocking::Client::new();
//! let mut config = ClientConfig::from_environment_id("my_environment_id");
//! config.request_options(RequestOptions::default().enable_mode_simple());
//! let client = config.to_client(&http)?;
//!
//! let mut context = Context::new();
//! context.add("plan", "premium");
//!
//! let response = client.request_all_campaigns("visitor", &context)?;
//! println!("{}", response.text()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

mod client;
mod config;
mod context;
mod error;
mod request_options;
mod sender;

pub use client::Client;
pub use config::ClientConfig;
pub use context::Context;
pub use error::{Error, Result};
pub use request_options::{Mode, RequestOptions};
pub use sender::{HttpSender, SendResult};
