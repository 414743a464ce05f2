use std::fmt::{Display, Formatter};
use std::str::FromStr;

use http::uri::Scheme;
use http::Uri;

use crate::{Error, Result};

/// Endpoint is the server a signed request is sent to.
///
/// OAuth 1.0a signs the base string URI (RFC 5849 §3.4.1.2): scheme and host
/// lowercase, the port only when it is not the scheme's default, and the path
/// without its query. `Endpoint` keeps exactly the parts needed to build it.
///
/// ```
/// use oauthsign_core::Endpoint;
///
/// let ep: Endpoint = "HTTPS://Api.Example.com:443".parse().unwrap();
/// assert_eq!(ep.base_url("/1.1/statuses"), "https://api.example.com/1.1/statuses");
///
/// let ep = Endpoint::from_host_port("192.168.1.10", 8080);
/// assert_eq!(ep.to_string(), "http://192.168.1.10:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    scheme: Scheme,
    host: String,
    port: u16,
}

impl Endpoint {
    /// Build an endpoint from host and port.
    ///
    /// Port 443 selects `https`, any other port selects `http`.
    pub fn from_host_port(host: &str, port: u16) -> Self {
        let scheme = if port == 443 {
            Scheme::HTTPS
        } else {
            Scheme::HTTP
        };

        Self {
            scheme,
            host: host.to_ascii_lowercase(),
            port,
        }
    }

    /// Scheme of this endpoint, `http` or `https`.
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Lowercased host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port the transport connects to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns `true` if the port is the default one of the scheme.
    pub fn is_default_port(&self) -> bool {
        self.port == default_port(&self.scheme)
    }

    /// Build the base string URI for `path`.
    ///
    /// `path` must not carry a query; an empty path becomes `/`.
    pub fn base_url(&self, path: &str) -> String {
        let path = if path.is_empty() { "/" } else { path };
        format!("{self}{path}")
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if !self.is_default_port() {
            write!(f, ":{}", self.port)?;
        }
        Ok(())
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let uri = Uri::from_str(s)?;

        let scheme = match uri.scheme_str().map(|v| v.to_ascii_lowercase()).as_deref() {
            Some("http") => Scheme::HTTP,
            Some("https") => Scheme::HTTPS,
            Some(v) => {
                return Err(Error::config_invalid(format!(
                    "endpoint scheme {v} is not supported"
                )))
            }
            None => return Err(Error::config_invalid("endpoint must carry a scheme")),
        };
        let authority = uri
            .authority()
            .ok_or_else(|| Error::config_invalid("endpoint must carry a host"))?;
        if !matches!(uri.path(), "" | "/") || uri.query().is_some() {
            return Err(Error::config_invalid(format!(
                "endpoint {s} must not carry a path or query"
            )));
        }

        let port = authority.port_u16().unwrap_or_else(|| default_port(&scheme));
        Ok(Self {
            host: authority.host().to_ascii_lowercase(),
            scheme,
            port,
        })
    }
}

fn default_port(scheme: &Scheme) -> u16 {
    if scheme == &Scheme::HTTPS {
        443
    } else {
        80
    }
}
