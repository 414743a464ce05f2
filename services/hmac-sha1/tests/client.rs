use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderValue, Method, StatusCode};
use oauthsign_core::hash::base64_decode;
use oauthsign_core::time::TimeSource;
use oauthsign_core::{Endpoint, ErrorKind, MemoryTransport, Result, TransportCall};
use oauthsign_hmac_sha1::{
    sign_request, Credential, OAuthClient, RequestContext, FORM_URLENCODED,
};
use percent_encoding::percent_decode_str;
use pretty_assertions::assert_eq;

use crate::{auth_map, auth_params, init_logger};

fn client(endpoint: Endpoint, ts: u64) -> OAuthClient<MemoryTransport> {
    OAuthClient::new(
        MemoryTransport::new().with_response(StatusCode::OK, r#"{"ok":true}"#),
        endpoint,
        Credential::new("ck", "cs", "at", "ats"),
    )
    .expect("credential must be valid")
    .with_time_source(TimeSource::fixed(ts))
}

fn authorization(t: &MemoryTransport) -> String {
    t.header(&AUTHORIZATION)
        .expect("authorization must be sent")
        .to_str()
        .expect("authorization must be ascii")
        .to_string()
}

/// Sign again with the nonce and timestamp found in `header`.
fn resign(
    header: &str,
    method: &Method,
    url: &str,
    query: Option<&str>,
    body: Option<&[u8]>,
) -> String {
    let fields = auth_map(header);
    let mut ctx = RequestContext::new(
        method,
        url,
        fields["oauth_timestamp"].parse().expect("timestamp must be a number"),
        fields["oauth_nonce"].clone(),
    );
    ctx.query = query;
    ctx.form_body = body;

    sign_request(&ctx, &Credential::new("ck", "cs", "at", "ats"))
        .expect("sign must succeed")
        .to_str()
        .expect("ascii")
        .to_string()
}

#[test]
fn test_get_end_to_end() -> Result<()> {
    init_logger();

    let mut c = client(Endpoint::from_host_port("example.com", 80), 1700000000);
    c.get("/status")?;
    assert_eq!(c.response_status_code()?, StatusCode::OK);
    assert_eq!(c.response_body()?, r#"{"ok":true}"#);

    let header = authorization(c.transport());
    let fields = auth_params(&header);
    let names: Vec<_> = fields.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "oauth_consumer_key",
            "oauth_nonce",
            "oauth_signature",
            "oauth_signature_method",
            "oauth_timestamp",
            "oauth_token",
            "oauth_version",
        ]
    );

    let fields = auth_map(&header);
    assert_eq!(fields["oauth_consumer_key"], "ck");
    assert_eq!(fields["oauth_token"], "at");
    assert_eq!(fields["oauth_timestamp"], "1700000000");
    assert_eq!(fields["oauth_signature_method"], "HMAC-SHA1");
    assert_eq!(fields["oauth_version"], "1.0");

    let nonce = &fields["oauth_nonce"];
    assert_eq!(nonce.len(), 32);
    assert!(nonce.bytes().all(|b| b.is_ascii_alphanumeric()));

    let signature = percent_decode_str(&fields["oauth_signature"])
        .decode_utf8()
        .expect("signature must be utf-8");
    assert_eq!(base64_decode(&signature)?.len(), 20);

    assert_eq!(
        header,
        resign(&header, &Method::GET, "http://example.com/status", None, None)
    );
    Ok(())
}

#[test]
fn test_query_is_signed_and_passed_through() -> Result<()> {
    let mut c = client(Endpoint::from_host_port("example.com", 80), 1700000000);
    c.get("/status?b=2&a=1")?;

    assert_eq!(
        c.transport().calls()[1],
        TransportCall::StartRequest {
            path: "/status?b=2&a=1".to_string(),
            method: Method::GET,
        }
    );

    let header = authorization(c.transport());
    assert_eq!(
        header,
        resign(
            &header,
            &Method::GET,
            "http://example.com/status",
            Some("b=2&a=1"),
            None
        )
    );
    assert_ne!(
        header,
        resign(&header, &Method::GET, "http://example.com/status", None, None)
    );
    Ok(())
}

#[test]
fn test_form_body_is_signed() -> Result<()> {
    let mut c = client(Endpoint::from_host_port("example.com", 80), 1318622958);
    c.post_with_body("/resource", FORM_URLENCODED, "c=hello+world&a=")?;

    let t = c.transport();
    assert_eq!(t.written(), b"c=hello+world&a=");
    assert_eq!(
        t.header(&CONTENT_TYPE),
        Some(&HeaderValue::from_static(FORM_URLENCODED))
    );
    assert_eq!(t.header(&CONTENT_LENGTH), Some(&HeaderValue::from_static("16")));

    let header = authorization(t);
    assert_eq!(
        header,
        resign(
            &header,
            &Method::POST,
            "http://example.com/resource",
            None,
            Some(b"c=hello+world&a=")
        )
    );
    Ok(())
}

#[test]
fn test_json_body_is_not_signed() -> Result<()> {
    let mut c = client(Endpoint::from_host_port("example.com", 80), 1318622958);
    c.post_with_body("/resource", "application/json", r#"{"a":"b=c"}"#)?;

    let t = c.transport();
    assert_eq!(t.written(), br#"{"a":"b=c"}"#);

    let header = authorization(t);
    assert_eq!(
        header,
        resign(&header, &Method::POST, "http://example.com/resource", None, None)
    );
    Ok(())
}

#[test]
fn test_content_type_with_parameters_is_not_signed() -> Result<()> {
    let mut c = client(Endpoint::from_host_port("example.com", 80), 1318622958);
    c.put_with_body(
        "/resource",
        "application/x-www-form-urlencoded; charset=utf-8",
        "a=1",
    )?;

    let header = authorization(c.transport());
    assert_eq!(
        header,
        resign(&header, &Method::PUT, "http://example.com/resource", None, None)
    );
    Ok(())
}

#[test]
fn test_https_endpoint() -> Result<()> {
    let mut c = client(Endpoint::from_host_port("api.twitter.com", 443), 1318622958);
    c.patch("/1.1/statuses/update.json?include_entities=true")?;

    let header = authorization(c.transport());
    assert_eq!(
        header,
        resign(
            &header,
            &Method::PATCH,
            "https://api.twitter.com/1.1/statuses/update.json",
            Some("include_entities=true"),
            None
        )
    );
    Ok(())
}

#[test]
fn test_every_request_gets_a_fresh_nonce() -> Result<()> {
    let mut c = client(Endpoint::from_host_port("example.com", 80), 1700000000);

    c.get("/status")?;
    let first = auth_map(&authorization(c.transport()));
    c.get("/status")?;
    let second = auth_map(&authorization(c.transport()));

    assert_ne!(first["oauth_nonce"], second["oauth_nonce"]);
    assert_ne!(first["oauth_signature"], second["oauth_signature"]);
    Ok(())
}

#[test]
fn test_unset_time_source_signs_with_zero() -> Result<()> {
    let mut c = OAuthClient::new(
        MemoryTransport::new(),
        Endpoint::from_host_port("example.com", 80),
        Credential::new("ck", "cs", "", ""),
    )?;
    c.delete("/items/1")?;

    let fields = auth_map(&authorization(c.transport()));
    assert_eq!(fields["oauth_timestamp"], "0");
    assert_eq!(fields["oauth_token"], "");
    Ok(())
}

#[test]
fn test_callback_time_source() -> Result<()> {
    let mut c = client(Endpoint::from_host_port("example.com", 80), 0)
        .with_time_source(TimeSource::callback(|| 1234567890));
    c.post("/items")?;

    let fields = auth_map(&authorization(c.transport()));
    assert_eq!(fields["oauth_timestamp"], "1234567890");
    Ok(())
}

#[test]
fn test_transport_failure() {
    let mut c = OAuthClient::new(
        MemoryTransport::new().with_start_error("host unreachable"),
        Endpoint::from_host_port("example.com", 80),
        Credential::new("ck", "cs", "at", "ats"),
    )
    .expect("credential must be valid");

    let err = c.put("/items/1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
