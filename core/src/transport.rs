use std::fmt::Debug;

use http::{HeaderName, HeaderValue, Method, StatusCode};

use crate::{Error, Result};

/// Transport is the HTTP connection a signed request is written to.
///
/// The signer owns no socket. It drives the transport through these calls in a
/// fixed order for every request:
///
/// 1. [`begin_request`](Transport::begin_request)
/// 2. [`start_request`](Transport::start_request)
/// 3. [`send_header`](Transport::send_header), once per header
/// 4. [`begin_body`](Transport::begin_body)
/// 5. [`write`](Transport::write), only when a body is present
/// 6. [`end_request`](Transport::end_request)
///
/// Connection lifecycle, TLS and timeouts belong to the implementation. Every call
/// blocks until it completes; errors are handed back to the caller unchanged.
pub trait Transport: Debug {
    /// Reset any state left from a previous request.
    fn begin_request(&mut self) -> Result<()>;

    /// Open the request line. `path` keeps its query string.
    fn start_request(&mut self, path: &str, method: &Method) -> Result<()>;

    /// Send one request header.
    fn send_header(&mut self, name: &HeaderName, value: &HeaderValue) -> Result<()>;

    /// Finish the header section.
    fn begin_body(&mut self) -> Result<()>;

    /// Write body bytes.
    fn write(&mut self, body: &[u8]) -> Result<()>;

    /// Finish the request.
    fn end_request(&mut self) -> Result<()>;

    /// Status code of the response to the last request.
    fn response_status_code(&mut self) -> Result<StatusCode>;

    /// Body of the response to the last request.
    fn response_body(&mut self) -> Result<String>;
}

/// One call observed by [`MemoryTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    /// `begin_request` was called.
    BeginRequest,
    /// `start_request` was called.
    StartRequest {
        /// Request path including query.
        path: String,
        /// Request method.
        method: Method,
    },
    /// `send_header` was called.
    SendHeader {
        /// Header name.
        name: HeaderName,
        /// Header value.
        value: HeaderValue,
    },
    /// `begin_body` was called.
    BeginBody,
    /// `write` was called.
    Write(Vec<u8>),
    /// `end_request` was called.
    EndRequest,
}

/// MemoryTransport records every call and replays a canned response.
///
/// This is useful for testing signers without any socket.
#[derive(Debug, Clone)]
pub struct MemoryTransport {
    calls: Vec<TransportCall>,
    status: StatusCode,
    body: String,
    start_error: Option<String>,
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTransport {
    /// Create a transport that answers `200 OK` with an empty body.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            status: StatusCode::OK,
            body: String::new(),
            start_error: None,
        }
    }

    /// Set the response returned for every request.
    pub fn with_response(mut self, status: StatusCode, body: impl Into<String>) -> Self {
        self.status = status;
        self.body = body.into();
        self
    }

    /// Make `start_request` fail with a transport error.
    pub fn with_start_error(mut self, message: impl Into<String>) -> Self {
        self.start_error = Some(message.into());
        self
    }

    /// All calls recorded so far.
    pub fn calls(&self) -> &[TransportCall] {
        &self.calls
    }

    /// Value of the last header sent with `name`.
    pub fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
        self.calls.iter().rev().find_map(|call| match call {
            TransportCall::SendHeader { name: n, value } if n == name => Some(value),
            _ => None,
        })
    }

    /// All body bytes written so far.
    pub fn written(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                TransportCall::Write(bs) => Some(bs.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }
}

impl Transport for MemoryTransport {
    fn begin_request(&mut self) -> Result<()> {
        self.calls.clear();
        self.calls.push(TransportCall::BeginRequest);
        Ok(())
    }

    fn start_request(&mut self, path: &str, method: &Method) -> Result<()> {
        if let Some(msg) = &self.start_error {
            return Err(Error::transport(msg.clone()));
        }

        self.calls.push(TransportCall::StartRequest {
            path: path.to_string(),
            method: method.clone(),
        });
        Ok(())
    }

    fn send_header(&mut self, name: &HeaderName, value: &HeaderValue) -> Result<()> {
        self.calls.push(TransportCall::SendHeader {
            name: name.clone(),
            value: value.clone(),
        });
        Ok(())
    }

    fn begin_body(&mut self) -> Result<()> {
        self.calls.push(TransportCall::BeginBody);
        Ok(())
    }

    fn write(&mut self, body: &[u8]) -> Result<()> {
        self.calls.push(TransportCall::Write(body.to_vec()));
        Ok(())
    }

    fn end_request(&mut self) -> Result<()> {
        self.calls.push(TransportCall::EndRequest);
        Ok(())
    }

    fn response_status_code(&mut self) -> Result<StatusCode> {
        Ok(self.status)
    }

    fn response_body(&mut self) -> Result<String> {
        Ok(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use http::header::CONTENT_TYPE;

    #[test]
    fn test_memory_transport_records_calls() -> Result<()> {
        let mut t = MemoryTransport::new().with_response(StatusCode::CREATED, "done");

        t.begin_request()?;
        t.start_request("/items?x=1", &Method::POST)?;
        t.send_header(&CONTENT_TYPE, &HeaderValue::from_static("text/plain"))?;
        t.begin_body()?;
        t.write(b"hello ")?;
        t.write(b"world")?;
        t.end_request()?;

        assert_eq!(t.calls().len(), 7);
        assert_eq!(
            t.calls()[1],
            TransportCall::StartRequest {
                path: "/items?x=1".to_string(),
                method: Method::POST,
            }
        );
        assert_eq!(
            t.header(&CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/plain"))
        );
        assert_eq!(t.written(), b"hello world");
        assert_eq!(t.response_status_code()?, StatusCode::CREATED);
        assert_eq!(t.response_body()?, "done");

        // A new request starts from a clean record.
        t.begin_request()?;
        assert_eq!(t.calls(), &[TransportCall::BeginRequest]);
        Ok(())
    }

    #[test]
    fn test_memory_transport_start_error() {
        let mut t = MemoryTransport::new().with_start_error("connection refused");
        let err = t.start_request("/", &Method::GET).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
