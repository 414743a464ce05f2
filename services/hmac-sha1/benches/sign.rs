use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use http::Method;
use oauthsign_core::time::TimeSource;
use oauthsign_core::{Endpoint, MemoryTransport};
use oauthsign_hmac_sha1::{generate_nonce, sign_request, Credential, OAuthClient, RequestContext};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("hmac_sha1");

    let cred = Credential::new(
        "xvz1evFS4wEEPTGEFPHBog",
        "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
        "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
    );

    group.bench_function("nonce", |b| b.iter(generate_nonce));

    group.bench_function("sign_request", |b| {
        b.iter(|| {
            let ctx = RequestContext::new(
                &Method::POST,
                "https://api.twitter.com/1.1/statuses/update.json",
                1318622958,
                "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
            )
            .with_query("include_entities=true")
            .with_form_body(b"status=Hello%20Ladies%20%2b%20Gentlemen");

            sign_request(&ctx, &cred).expect("must success")
        })
    });

    group.bench_function("client_get", |b| {
        let mut client = OAuthClient::new(
            MemoryTransport::new(),
            Endpoint::from_host_port("api.twitter.com", 443),
            cred.clone(),
        )
        .expect("must success")
        .with_time_source(TimeSource::fixed(1318622958));

        b.iter(|| {
            client
                .get("/1.1/statuses/home_timeline.json?count=20")
                .expect("must success")
        })
    });

    group.finish();
}
