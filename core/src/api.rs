use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used to load credentials from the environment.
///
/// Loading happens before the first request and again whenever the caller wants to
/// reset credentials; it never happens while a request is being signed.
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + 'static;

    /// Load credential from current env.
    ///
    /// Returns `Ok(None)` if this source holds no credential.
    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}
