use oauthsign_core::{Context, ProvideCredential, Result};

use crate::Credential;

/// StaticCredentialProvider provides fixed OAuth 1.0a credentials.
///
/// Use it when the consumer key and secret are known up front and need no loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    access_token_secret: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with consumer key and consumer secret.
    pub fn new(consumer_key: &str, consumer_secret: &str) -> Self {
        Self {
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
            access_token: String::new(),
            access_token_secret: String::new(),
        }
    }

    /// Set the access token and its secret.
    pub fn with_access_token(mut self, token: &str, secret: &str) -> Self {
        self.access_token = token.to_string();
        self.access_token_secret = secret.to_string();
        self
    }
}

impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential::new(
            &self.consumer_key,
            &self.consumer_secret,
            &self.access_token,
            &self.access_token_secret,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credential_provider() -> Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new("ck", "cs");
        let cred = provider.provide_credential(&ctx)?.expect("must be loaded");
        assert_eq!(cred.consumer_key(), "ck");
        assert_eq!(cred.access_token(), "");
        assert_eq!(cred.signing_key(), "cs&");

        let provider = StaticCredentialProvider::new("ck", "cs").with_access_token("at", "ats");
        let cred = provider.provide_credential(&ctx)?.expect("must be loaded");
        assert_eq!(cred.access_token(), "at");
        assert_eq!(cred.signing_key(), "cs&ats");

        Ok(())
    }
}
