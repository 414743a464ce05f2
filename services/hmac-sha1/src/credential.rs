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

use std::fmt::{Debug, Formatter};

use oauthsign_core::{utils::Redact, SigningCredential};

use crate::encode::percent_encode;

/// Credential for OAuth 1.0a HMAC-SHA1.
///
/// The signing key is derived once at construction and reused for every request.
/// Fields are private so the key can never go stale: replace the whole credential to
/// change any of them.
#[derive(Clone)]
pub struct Credential {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    access_token_secret: String,
    signing_key: String,
}

impl Credential {
    /// Create a new credential.
    ///
    /// Use empty `access_token` and `access_token_secret` for one-legged requests.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        let consumer_secret = consumer_secret.into();
        let access_token_secret = access_token_secret.into();

        // RFC 5849 §3.4.2: both secrets are encoded, then joined with `&`.
        let signing_key = format!(
            "{}&{}",
            percent_encode(&consumer_secret),
            percent_encode(&access_token_secret)
        );

        Self {
            consumer_key: consumer_key.into(),
            consumer_secret,
            access_token: access_token.into(),
            access_token_secret,
            signing_key,
        }
    }

    /// Consumer key, sent as `oauth_consumer_key`.
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// Access token, sent as `oauth_token`.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// HMAC key: `consumer_secret&access_token_secret`.
    pub fn signing_key(&self) -> &str {
        &self.signing_key
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("access_token", &Redact::from(&self.access_token))
            .field(
                "access_token_secret",
                &Redact::from(&self.access_token_secret),
            )
            .finish_non_exhaustive()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer_key.is_empty() && !self.consumer_secret.is_empty()
    }
}
