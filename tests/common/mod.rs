/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for maplerad tests

use maplerad::{ClientConfig, MapleradClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub const TEST_SECRET: &str = "sk_test_123";

/// Client pointed at a mock server, default timeouts
pub fn test_client(server: &MockServer) -> MapleradClient {
    MapleradClient::with_config_and_base_url(TEST_SECRET, ClientConfig::default(), &server.uri())
        .expect("client init")
}
