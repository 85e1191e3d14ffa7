//! # graph-cards
//!
//! Typed Adaptive Cards builders and a thin Microsoft Graph REST client.
//!
//! ## Features
//!
//! - **Cards**: every Adaptive Cards element, action, input and layout as a
//!   plain struct with fluent `with_*` / `add_*` setters and serde support
//! - **Graph**: one small client per REST path (me, calendar, calendar view,
//!   events, presence, teamwork, chats, virtual events) with
//!   `list`/`get`/`create`/`update`/`delete`
//! - **URL templating**: a single helper that fills `{name}` placeholders,
//!   builds the query string and collects header parameters
//! - **Security**: the bearer token is never logged and is redacted from
//!   error messages
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error types with token sanitization
//! - [`url_template`] - Path, query and header parameter expansion
//! - [`http`] - Shared HTTP client, per-request config and client options
//! - [`graph`] - Resource clients and Graph data models
//! - [`cards`] - Adaptive Cards object model
//!
//! ## Configuration
//!
//! - `GRAPH_ACCESS_TOKEN`: bearer token (required)
//! - `GRAPH_BASE_URL`: defaults to `https://graph.microsoft.com/v1.0`
//! - `GRAPH_PRODUCT`: User-Agent product name, defaults to `teams`
//! - `GRAPH_TIMEOUT_SECS`: request timeout, defaults to 30
//!
//! Token acquisition is out of scope; bring a token from your own auth flow.
//!
//! ## Example
//!
//! Posting a card into a chat:
//!
//! ```ignore
//! use graph_cards::cards::{AdaptiveCard, TextBlock};
//! use graph_cards::config::Config;
//! use graph_cards::graph::ChatsClient;
//!
//! async fn example() -> Result<(), graph_cards::error::GraphError> {
//!     let config = Config::from_env()?;
//!     let chats = ChatsClient::new(&config)?;
//!
//!     let card = AdaptiveCard::new().add_body([TextBlock::new("Build passed").wrap().into()]);
//!     let sent = chats.chat("19:abc@thread.v2").messages().send_card(&card, None).await?;
//!     println!("posted {}", sent.id.unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cards;
pub mod config;
pub mod error;
pub mod graph;
pub mod http;
pub mod url_template;
