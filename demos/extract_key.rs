//! API key extraction demonstration.
//!
//! Runs a handful of `Authorization` values through the extractor and prints
//! the outcome along with the status a server would answer with. Rejections
//! are logged through `tracing`; set `RUST_LOG=debug` to see them.
//!
//! Run with: `cargo run --example extract_key`

use apikey_auth::{ApiKeyExtractor, ExtractApiKey};
use http::Request;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== API Key Extraction Example ===\n");

    let extractor = ApiKeyExtractor::new();
    let samples = [
        None,
        Some("Bearer somekey"),
        Some("ApiKey"),
        Some("apikey lower-case-scheme"),
        Some("ApiKey my-secret-key"),
        Some("ApiKey my-secret-key trailing-ignored"),
    ];

    for sample in samples {
        let mut builder = Request::builder().uri("/v1/users");
        if let Some(value) = sample {
            builder = builder.header("Authorization", value);
        }
        let request = match builder.body(()) {
            Ok(request) => request,
            Err(err) => {
                println!("could not build request: {}", err);
                continue;
            }
        };

        let shown = describe(sample);
        match request.extract_api_key(&extractor) {
            Ok(key) => println!("{:45} -> 200 OK, key = {}", shown, key),
            Err(err) => println!("{:45} -> {} ({})", shown, err.status_code(), err),
        }
    }

    println!("\nNotice: extracted keys print as [REDACTED]");
}

/// Labels a header value by its scheme and token count so the key is never printed.
fn describe(value: Option<&str>) -> String {
    let Some(value) = value else {
        return "<none>".to_string();
    };
    let mut tokens = value.split_whitespace();
    match tokens.next() {
        Some(scheme) => format!("{} (+{} token(s))", scheme, tokens.count()),
        None => "<blank>".to_string(),
    }
}
