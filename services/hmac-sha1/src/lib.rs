//! OAuth 1.0a HMAC-SHA1 request signing.
//!
//! - [RFC 5849: The OAuth 1.0 Protocol](https://www.rfc-editor.org/rfc/rfc5849)
//!
//! The pipeline runs once per request:
//!
//! 1. [`generate_nonce`] picks a fresh 32 characters nonce.
//! 2. [`string_to_sign`] collects the protocol, query and form body parameters,
//!    encodes and sorts them into the signature base string.
//! 3. [`sign`] computes HMAC-SHA1 over the base string and encodes the digest.
//! 4. [`authorization`] assembles the `OAuth ...` header value.
//!
//! [`OAuthClient`] drives these steps and writes the signed request to a
//! [`Transport`](oauthsign_core::Transport).
//!
//! ## Example
//!
//! ```
//! use http::StatusCode;
//! use oauthsign_core::{Endpoint, MemoryTransport};
//! use oauthsign_core::time::TimeSource;
//! use oauthsign_hmac_sha1::{Credential, OAuthClient};
//!
//! # fn main() -> oauthsign_core::Result<()> {
//! let credential = Credential::new("ck", "cs", "at", "ats");
//! let transport = MemoryTransport::new().with_response(StatusCode::OK, "{}");
//!
//! let mut client = OAuthClient::new(
//!     transport,
//!     Endpoint::from_host_port("example.com", 80),
//!     credential,
//! )?
//! .with_time_source(TimeSource::System);
//!
//! client.get("/status")?;
//! assert_eq!(client.response_status_code()?, StatusCode::OK);
//! # Ok(())
//! # }
//! ```

mod constants;

mod credential;
pub use credential::Credential;

mod encode;
pub use encode::percent_encode;

mod nonce;
pub use nonce::{generate_nonce, generate_nonce_with};

mod sign_request;
pub use sign_request::{authorization, sign, sign_request, string_to_sign, RequestContext};

mod client;
pub use client::OAuthClient;

mod provide_credential;
pub use provide_credential::{
    DefaultCredentialProvider, EnvCredentialProvider, StaticCredentialProvider,
};

pub use constants::{
    FORM_URLENCODED, OAUTH1_ACCESS_TOKEN, OAUTH1_ACCESS_TOKEN_SECRET, OAUTH1_CONSUMER_KEY,
    OAUTH1_CONSUMER_SECRET,
};
