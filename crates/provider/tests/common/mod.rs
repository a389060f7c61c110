//! Shared helpers for provider integration tests.

use secrecy::SecretString;
use serde_json::{Value, json};
use sumologic_client::{AccessCredentials, SumologicClient};

#[allow(unused_imports)]
pub use sumologic_provider::{ProviderError, SumologicProvider};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// A fully registered provider whose client talks to `server`.
#[allow(dead_code)]
pub fn provider_for(server: &MockServer) -> SumologicProvider {
    let client = SumologicClient::builder()
        .base_url(format!("{}/api", server.uri()))
        .credentials(AccessCredentials::new(
            "suTEST",
            SecretString::new("test-key".to_string().into()),
        ))
        .build()
        .expect("client should build");
    SumologicProvider::new().with_client(client)
}

#[allow(dead_code)]
pub fn collector_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{} collector", name),
        "category": "prod/web",
        "timeZone": "Etc/UTC",
        "collectorType": "Hosted",
        "alive": true
    })
}

#[allow(dead_code)]
pub fn collector_envelope(id: i64, name: &str) -> Value {
    json!({ "collector": collector_json(id, name) })
}
