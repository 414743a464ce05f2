//! Core components for signing HTTP requests with OAuth 1.0a.
//!
//! This crate provides the foundational types and traits shared by the oauthsign
//! crates. It holds no protocol logic of its own: the signature pipeline lives in
//! `oauthsign-hmac-sha1`, concrete transports live in their own crates.
//!
//! ## Overview
//!
//! - **Context**: A container that holds the environment implementation used while
//!   loading credentials.
//! - **Traits**: Abstract interfaces for credential loading ([`ProvideCredential`]) and
//!   for the HTTP transport a signed request is written to ([`Transport`]).
//! - **Endpoint**: The server a client talks to, normalized the way OAuth 1.0a base
//!   strings require.
//!
//! ## Example
//!
//! ```
//! use oauthsign_core::{Context, ProvideCredential, Result, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(ctx.env_var("MY_KEY").map(|key| MyCredential { key }))
//!     }
//! }
//!
//! let cred = MyLoader.provide_credential(&Context::new()).unwrap();
//! assert!(cred.is_none());
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA1 and base64 helpers
//! - [`time`]: Time sources for request timestamps
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod endpoint;
pub use endpoint::Endpoint;

mod transport;
pub use transport::{MemoryTransport, Transport, TransportCall};

mod api;
pub use api::{ProvideCredential, SigningCredential};

mod chain;
pub use chain::ProvideCredentialChain;
