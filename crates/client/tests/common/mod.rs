//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every client built here points at a wiremock server

use secrecy::SecretString;

#[allow(unused_imports)]
pub use sumologic_client::testing::load_fixture;

#[allow(unused_imports)]
pub use sumologic_client::{AccessCredentials, ClientError, SumologicClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Access id used by every test client.
#[allow(dead_code)]
pub const TEST_ACCESS_ID: &str = "suTEST";

/// Build a client against a mock server, with the API prefix the real service uses.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> SumologicClient {
    SumologicClient::builder()
        .base_url(format!("{}/api", server.uri()))
        .credentials(AccessCredentials::new(
            TEST_ACCESS_ID,
            SecretString::new("test-key".to_string().into()),
        ))
        .build()
        .expect("client should build")
}
