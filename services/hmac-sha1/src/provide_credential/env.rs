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

use log::debug;
use oauthsign_core::{Context, ProvideCredential, Result};

use crate::{constants::*, Credential};

/// EnvCredentialProvider loads OAuth 1.0a credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `OAUTH1_CONSUMER_KEY`: The consumer key
/// - `OAUTH1_CONSUMER_SECRET`: The consumer secret
/// - `OAUTH1_ACCESS_TOKEN`: The access token (optional)
/// - `OAUTH1_ACCESS_TOKEN_SECRET`: The access token secret (optional)
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let (Some(consumer_key), Some(consumer_secret)) = (
            envs.get(OAUTH1_CONSUMER_KEY),
            envs.get(OAUTH1_CONSUMER_SECRET),
        ) else {
            return Ok(None);
        };

        let access_token = envs.get(OAUTH1_ACCESS_TOKEN);
        let access_token_secret = envs.get(OAUTH1_ACCESS_TOKEN_SECRET);
        if access_token.is_none() {
            debug!("{OAUTH1_ACCESS_TOKEN} is not set, loading consumer only credential");
        }

        Ok(Some(Credential::new(
            consumer_key,
            consumer_secret,
            access_token.cloned().unwrap_or_default(),
            access_token_secret.cloned().unwrap_or_default(),
        )))
    }
}
