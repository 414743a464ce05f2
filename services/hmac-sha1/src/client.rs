use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderValue, Method, StatusCode};
use log::{debug, warn};
use oauthsign_core::time::TimeSource;
use oauthsign_core::{Endpoint, Error, Result, SigningCredential, Transport};

use crate::constants::FORM_URLENCODED;
use crate::credential::Credential;
use crate::nonce::generate_nonce;
use crate::sign_request::{sign_request, RequestContext};

/// OAuthClient signs every request with OAuth 1.0a HMAC-SHA1 and writes it to a
/// [`Transport`].
///
/// Requests are handled one at a time: each call builds, signs and sends a request to
/// completion before returning. Every request gets a fresh nonce and timestamp.
#[derive(Debug)]
pub struct OAuthClient<T: Transport> {
    transport: T,
    endpoint: Endpoint,
    credential: Credential,
    time_source: TimeSource,
}

impl<T: Transport> OAuthClient<T> {
    /// Create a new client.
    ///
    /// Returns a credential error if the consumer key or secret is empty.
    pub fn new(transport: T, endpoint: Endpoint, credential: Credential) -> Result<Self> {
        check_credential(&credential)?;

        Ok(Self {
            transport,
            endpoint,
            credential,
            time_source: TimeSource::default(),
        })
    }

    /// Set the time source used for `oauth_timestamp`.
    ///
    /// Without one every request is signed with timestamp `0`.
    pub fn with_time_source(mut self, time_source: TimeSource) -> Self {
        self.time_source = time_source;
        self
    }

    /// Replace the time source used for `oauth_timestamp`.
    pub fn set_time_source(&mut self, time_source: TimeSource) {
        self.time_source = time_source;
    }

    /// Replace the credential, including its cached signing key.
    pub fn set_credential(&mut self, credential: Credential) -> Result<()> {
        check_credential(&credential)?;
        self.credential = credential;
        Ok(())
    }

    /// Credential in use.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Endpoint requests are signed for.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Consume the client and return its transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Send a signed `GET` request.
    pub fn get(&mut self, path: &str) -> Result<()> {
        self.request(Method::GET, path, None, None)
    }

    /// Send a signed `POST` request without body.
    pub fn post(&mut self, path: &str) -> Result<()> {
        self.request(Method::POST, path, None, None)
    }

    /// Send a signed `POST` request with body.
    pub fn post_with_body(
        &mut self,
        path: &str,
        content_type: &str,
        body: impl AsRef<[u8]>,
    ) -> Result<()> {
        self.request(Method::POST, path, Some(content_type), Some(body.as_ref()))
    }

    /// Send a signed `PUT` request without body.
    pub fn put(&mut self, path: &str) -> Result<()> {
        self.request(Method::PUT, path, None, None)
    }

    /// Send a signed `PUT` request with body.
    pub fn put_with_body(
        &mut self,
        path: &str,
        content_type: &str,
        body: impl AsRef<[u8]>,
    ) -> Result<()> {
        self.request(Method::PUT, path, Some(content_type), Some(body.as_ref()))
    }

    /// Send a signed `PATCH` request without body.
    pub fn patch(&mut self, path: &str) -> Result<()> {
        self.request(Method::PATCH, path, None, None)
    }

    /// Send a signed `PATCH` request with body.
    pub fn patch_with_body(
        &mut self,
        path: &str,
        content_type: &str,
        body: impl AsRef<[u8]>,
    ) -> Result<()> {
        self.request(Method::PATCH, path, Some(content_type), Some(body.as_ref()))
    }

    /// Send a signed `DELETE` request without body.
    pub fn delete(&mut self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path, None, None)
    }

    /// Send a signed `DELETE` request with body.
    pub fn delete_with_body(
        &mut self,
        path: &str,
        content_type: &str,
        body: impl AsRef<[u8]>,
    ) -> Result<()> {
        self.request(Method::DELETE, path, Some(content_type), Some(body.as_ref()))
    }

    /// Sign and send a request.
    ///
    /// `path` may carry a query string; its parameters are signed and it is passed to
    /// the transport unchanged. `body` is signed only when `content_type` is exactly
    /// `application/x-www-form-urlencoded`, otherwise it is sent as opaque payload.
    ///
    /// Transport errors are returned as they are, nothing is retried.
    pub fn request(
        &mut self,
        method: Method,
        path: &str,
        content_type: Option<&str>,
        body: Option<&[u8]>,
    ) -> Result<()> {
        let nonce = generate_nonce();
        if !self.time_source.is_set() {
            warn!("no time source configured, signing {method} {path} with timestamp 0");
        }
        let timestamp = self.time_source.timestamp();

        let (base_path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        if !base_path.is_empty() && !base_path.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "request path {path} must start with '/'"
            )));
        }

        let form_body = match (content_type, body) {
            (Some(FORM_URLENCODED), Some(body)) => Some(body),
            _ => None,
        };
        let content_type = content_type.map(HeaderValue::from_str).transpose()?;

        let ctx = RequestContext {
            method: &method,
            url: self.endpoint.base_url(base_path),
            query,
            form_body,
            timestamp,
            nonce,
        };
        let authorization = sign_request(&ctx, &self.credential)?;
        debug!("signed {method} {} at {timestamp}", ctx.url);

        self.transport.begin_request()?;
        self.transport.start_request(path, &method)?;
        if let Some(v) = &content_type {
            self.transport.send_header(&CONTENT_TYPE, v)?;
        }
        if let Some(body) = body {
            self.transport
                .send_header(&CONTENT_LENGTH, &HeaderValue::from(body.len()))?;
        }
        self.transport.send_header(&AUTHORIZATION, &authorization)?;
        self.transport.begin_body()?;
        if let Some(body) = body {
            self.transport.write(body)?;
        }
        self.transport.end_request()
    }

    /// Status code of the last response.
    pub fn response_status_code(&mut self) -> Result<StatusCode> {
        self.transport.response_status_code()
    }

    /// Body of the last response.
    pub fn response_body(&mut self) -> Result<String> {
        self.transport.response_body()
    }
}

fn check_credential(credential: &Credential) -> Result<()> {
    if !credential.is_valid() {
        return Err(Error::credential_invalid(
            "consumer key and consumer secret must not be empty",
        ));
    }
    Ok(())
}
