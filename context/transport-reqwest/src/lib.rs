// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Blocking [`Transport`] backed by [`reqwest`].

use http::header::CONTENT_LENGTH;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use log::debug;
use oauthsign_core::{Endpoint, Error, Result, Transport};
use reqwest::blocking::Client;

/// ReqwestTransport buffers each request and sends it with a blocking
/// [`reqwest::blocking::Client`] once [`Transport::end_request`] is called.
///
/// `Content-Length` is derived by reqwest from the buffered body, so the value
/// handed in through `send_header` is dropped.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: Client,
    endpoint: Endpoint,

    pending: Option<PendingRequest>,
    response: Option<Response>,
}

#[derive(Debug)]
struct PendingRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Vec<u8>,
}

#[derive(Debug)]
struct Response {
    status: StatusCode,
    body: String,
}

impl ReqwestTransport {
    /// Create a new ReqwestTransport with the default client.
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Create a new ReqwestTransport with a reqwest blocking client.
    pub fn with_client(client: Client, endpoint: Endpoint) -> Self {
        Self {
            client,
            endpoint,
            pending: None,
            response: None,
        }
    }

    fn pending(&mut self) -> Result<&mut PendingRequest> {
        self.pending
            .as_mut()
            .ok_or_else(|| Error::transport("no request started"))
    }

    fn response(&self) -> Result<&Response> {
        self.response
            .as_ref()
            .ok_or_else(|| Error::transport("no response received"))
    }
}

impl Transport for ReqwestTransport {
    fn begin_request(&mut self) -> Result<()> {
        self.pending = None;
        self.response = None;
        Ok(())
    }

    fn start_request(&mut self, path: &str, method: &Method) -> Result<()> {
        self.pending = Some(PendingRequest {
            method: method.clone(),
            path: path.to_string(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        });
        Ok(())
    }

    fn send_header(&mut self, name: &HeaderName, value: &HeaderValue) -> Result<()> {
        let req = self.pending()?;
        if *name != CONTENT_LENGTH {
            req.headers.append(name.clone(), value.clone());
        }
        Ok(())
    }

    fn begin_body(&mut self) -> Result<()> {
        self.pending().map(|_| ())
    }

    fn write(&mut self, body: &[u8]) -> Result<()> {
        self.pending()?.body.extend_from_slice(body);
        Ok(())
    }

    fn end_request(&mut self) -> Result<()> {
        let req = self
            .pending
            .take()
            .ok_or_else(|| Error::transport("no request started"))?;
        let url = format!("{}{}", self.endpoint, req.path);
        debug!("sending {} {url}", req.method);

        let mut builder = self.client.request(req.method, &url).headers(req.headers);
        if !req.body.is_empty() {
            builder = builder.body(req.body);
        }

        let resp = builder.send().map_err(|e| {
            Error::transport(format!("failed to send request to {url}")).with_source(e)
        })?;
        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;
        debug!("received {status} from {url}");

        self.response = Some(Response { status, body });
        Ok(())
    }

    fn response_status_code(&mut self) -> Result<StatusCode> {
        Ok(self.response()?.status)
    }

    fn response_body(&mut self) -> Result<String> {
        Ok(self.response()?.body.clone())
    }
}
