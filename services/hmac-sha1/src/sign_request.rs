//! OAuth 1.0a HMAC-SHA1 signature.
use std::fmt::Write;

use http::HeaderValue;
use http::Method;
use log::debug;
use oauthsign_core::hash::base64_hmac_sha1;
use oauthsign_core::Result;
use percent_encoding::percent_decode;

use crate::constants::*;
use crate::credential::Credential;
use crate::encode::percent_encode;

/// Per request data that goes into the signature.
///
/// Created when a request starts and dropped once its header is built. Nonce and
/// timestamp must be fresh for every request.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    /// HTTP method.
    pub method: &'a Method,
    /// Base string URI: scheme, host, optional port and path, no query.
    pub url: String,
    /// Raw query string, without the leading `?`.
    pub query: Option<&'a str>,
    /// Raw `application/x-www-form-urlencoded` body.
    pub form_body: Option<&'a [u8]>,
    /// Unix timestamp in seconds.
    pub timestamp: u64,
    /// Nonce of this request.
    pub nonce: String,
}

impl<'a> RequestContext<'a> {
    /// Create a context without query or body parameters.
    pub fn new(
        method: &'a Method,
        url: impl Into<String>,
        timestamp: u64,
        nonce: impl Into<String>,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            query: None,
            form_body: None,
            timestamp,
            nonce: nonce.into(),
        }
    }

    /// Set the raw query string.
    pub fn with_query(mut self, query: &'a str) -> Self {
        self.query = Some(query);
        self
    }

    /// Set the raw form encoded body.
    ///
    /// Only pass bodies whose content type is `application/x-www-form-urlencoded`;
    /// any other body is opaque payload and never signed.
    pub fn with_form_body(mut self, body: &'a [u8]) -> Self {
        self.form_body = Some(body);
        self
    }
}

/// Construct the signature base string.
///
/// ## Format
///
/// ```text
/// UPPERCASE(METHOD) + "&" +
/// percent_encode(base string URI) + "&" +
/// percent_encode(normalized parameters)
/// ```
///
/// Parameters are the six protocol parameters, the query parameters and the form body
/// parameters. Each key and value is percent encoded, the pairs are sorted by encoded
/// key then encoded value, and joined as `k=v` with `&`.
///
/// ## Reference
///
/// - [RFC 5849 §3.4.1: Signature Base String](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1)
pub fn string_to_sign(ctx: &RequestContext, cred: &Credential) -> Result<String> {
    let timestamp = ctx.timestamp.to_string();

    let mut params: Vec<(String, String)> = [
        (OAUTH_CONSUMER_KEY, cred.consumer_key()),
        (OAUTH_NONCE, ctx.nonce.as_str()),
        (OAUTH_SIGNATURE_METHOD, HMAC_SHA1),
        (OAUTH_TIMESTAMP, timestamp.as_str()),
        (OAUTH_TOKEN, cred.access_token()),
        (OAUTH_VERSION, VERSION_1_0),
    ]
    .into_iter()
    .map(|(k, v)| (percent_encode(k), percent_encode(v)))
    .collect();

    if let Some(query) = ctx.query {
        params.extend(normalize_params(query.as_bytes()));
    }
    if let Some(body) = ctx.form_body {
        params.extend(normalize_params(body));
    }

    params.sort();

    let mut param_string = String::new();
    for (idx, (k, v)) in params.iter().enumerate() {
        if idx != 0 {
            param_string.push('&');
        }
        write!(param_string, "{k}={v}")?;
    }

    let s = format!(
        "{}&{}&{}",
        ctx.method.as_str().to_ascii_uppercase(),
        percent_encode(&ctx.url),
        percent_encode(&param_string)
    );

    debug!("string to sign ({} params): {}", params.len(), &s);
    Ok(s)
}

/// Split `input` on `&` and `=`, decode each token, then re-encode it per RFC 3986.
///
/// A token without `=` is a key with an empty value. Decoding works on raw bytes, so
/// escapes that are not valid UTF-8 survive unchanged.
fn normalize_params(input: &[u8]) -> impl Iterator<Item = (String, String)> + '_ {
    input
        .split(|&b| b == b'&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = match pair.iter().position(|&b| b == b'=') {
                Some(idx) => (&pair[..idx], &pair[idx + 1..]),
                None => (pair, &[][..]),
            };
            (percent_encode(decode_param(k)), percent_encode(decode_param(v)))
        })
}

/// Decode one form token: `+` is a space, then `%XX` escapes are resolved.
fn decode_param(input: &[u8]) -> Vec<u8> {
    let plus_as_space: Vec<u8> = input
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&plus_as_space).collect()
}

/// Calculate the signature of `string_to_sign`.
///
/// Returns the base64 encoded HMAC-SHA1 digest, percent encoded so it can go into the
/// header verbatim.
pub fn sign(string_to_sign: &str, signing_key: &str) -> Result<String> {
    let signature = base64_hmac_sha1(signing_key.as_bytes(), string_to_sign.as_bytes())?;
    Ok(percent_encode(signature))
}

/// Assemble the `Authorization` header value.
///
/// ```text
/// OAuth oauth_consumer_key="<ck>",oauth_nonce="<n>",oauth_signature="<sig>",oauth_signature_method="HMAC-SHA1",oauth_timestamp="<ts>",oauth_token="<tok>",oauth_version="1.0"
/// ```
///
/// The field order is fixed. `signature` is expected to be percent encoded already;
/// every other value is percent encoded here.
pub fn authorization(signature: &str, ctx: &RequestContext, cred: &Credential) -> String {
    let fields = [
        (OAUTH_CONSUMER_KEY, percent_encode(cred.consumer_key())),
        (OAUTH_NONCE, percent_encode(&ctx.nonce)),
        (OAUTH_SIGNATURE, signature.to_string()),
        (OAUTH_SIGNATURE_METHOD, HMAC_SHA1.to_string()),
        (OAUTH_TIMESTAMP, ctx.timestamp.to_string()),
        (OAUTH_TOKEN, percent_encode(cred.access_token())),
        (OAUTH_VERSION, VERSION_1_0.to_string()),
    ];

    let mut s = String::from("OAuth ");
    for (idx, (k, v)) in fields.iter().enumerate() {
        if idx != 0 {
            s.push(',');
        }
        s.push_str(k);
        s.push_str("=\"");
        s.push_str(v);
        s.push('"');
    }

    s
}

/// Run the whole pipeline and return the `Authorization` header value.
///
/// The value is marked sensitive.
pub fn sign_request(ctx: &RequestContext, cred: &Credential) -> Result<HeaderValue> {
    let string_to_sign = string_to_sign(ctx, cred)?;
    let signature = sign(&string_to_sign, cred.signing_key())?;

    let mut value: HeaderValue = authorization(&signature, ctx, cred).parse()?;
    value.set_sensitive(true);
    Ok(value)
}
