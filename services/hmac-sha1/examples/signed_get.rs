//! Send one signed GET request using credentials from the environment.
//!
//! ```shell
//! OAUTH1_CONSUMER_KEY=... OAUTH1_CONSUMER_SECRET=... \
//!     cargo run --example signed_get -- api.example.com 443 /1.1/account/verify_credentials.json
//! ```

use std::env;

use oauthsign_core::time::TimeSource;
use oauthsign_core::{Context, Endpoint, OsEnv, ProvideCredential};
use oauthsign_hmac_sha1::{DefaultCredentialProvider, OAuthClient};
use oauthsign_transport_reqwest::ReqwestTransport;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut args = env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "example.com".to_string());
    let port: u16 = args.next().as_deref().unwrap_or("443").parse()?;
    let path = args.next().unwrap_or_else(|| "/".to_string());

    let ctx = Context::new().with_env(OsEnv);
    let Some(credential) = DefaultCredentialProvider::new().provide_credential(&ctx)? else {
        anyhow::bail!("set OAUTH1_CONSUMER_KEY and OAUTH1_CONSUMER_SECRET first");
    };
    println!("Loaded credential: {credential:?}");

    let endpoint = Endpoint::from_host_port(&host, port);
    let transport = ReqwestTransport::new(endpoint.clone());
    let mut client =
        OAuthClient::new(transport, endpoint, credential)?.with_time_source(TimeSource::System);

    client.get(&path)?;
    println!("Status: {}", client.response_status_code()?);
    println!("{}", client.response_body()?);

    Ok(())
}
