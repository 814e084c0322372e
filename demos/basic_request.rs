//! Builds a few requests and prints what a transport would receive.
//!
//! This example shows how to:
//! - Branch several requests from one partially configured builder
//! - Attach query parameters and a JSON body
//! - Resolve the rendered request against an API base URL
//!
//! Run with: `cargo run --example basic_request`

use http_client_utilities::{ClientRequest, Error, RequestBuilder};
use serde::Serialize;
use url::Url;

#[derive(Debug, Serialize)]
struct CreateServer {
    name: String,
    server_type: String,
    labels: Vec<String>,
}

fn print_request(base: &Url, request: &ClientRequest) -> Result<(), Error> {
    println!("{} {}", request.method(), request.resolve(base)?);
    for (name, value) in request.headers() {
        println!("  {}: {}", name, value.to_str().unwrap_or("<binary>"));
    }
    if let Some(body) = request.body_str() {
        println!("  {}", body);
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("http_client_utilities=debug,basic_request=info")
        .init();

    let base = Url::parse("https://api.example.com/v1/")?;
    let authorized = RequestBuilder::get("/servers", None)
        .with_header("Authorization", "Bearer t0k3n");

    let list = authorized
        .with_query_params([("page", 1), ("per_page", 25)])
        .build()?;
    print_request(&base, &list)?;

    let filtered = authorized
        .with_query_param("label_selector", "env=prod")
        .build()?;
    print_request(&base, &filtered)?;

    let create = RequestBuilder::post("servers")
        .with_header("Authorization", "Bearer t0k3n")
        .with_request_content(&CreateServer {
            name: "web-1".to_string(),
            server_type: "cx22".to_string(),
            labels: vec!["env=prod".to_string()],
        })
        .build()?;
    print_request(&base, &create)?;

    tracing::info!("Built {} requests", 3);
    Ok(())
}
