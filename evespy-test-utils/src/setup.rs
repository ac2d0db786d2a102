use evespy::{
    data::{esi::EsiRepository, zkillboard::ZkillboardRepository},
    Config, PlayerInformationAggregator,
};
use mockito::{Server, ServerGuard};

use crate::constant::TEST_USER_AGENT;

pub struct TestSetup {
    pub server: ServerGuard,
    pub aggregator: PlayerInformationAggregator,
}

/// Aggregator wired against one mock server. Both base URLs point at the
/// same server; the two services use disjoint path spaces so their mocks
/// never collide.
pub async fn test_setup() -> TestSetup {
    let server = Server::new_async().await;
    let config = test_config(&server);

    let aggregator =
        PlayerInformationAggregator::new(&config).expect("Failed to build aggregator");

    TestSetup { server, aggregator }
}

pub struct TestRepositories {
    pub server: ServerGuard,
    pub esi: EsiRepository,
    pub zkillboard: ZkillboardRepository,
}

/// Bare repositories against one mock server, for data-layer tests.
pub async fn test_repositories() -> TestRepositories {
    let server = Server::new_async().await;
    let config = test_config(&server);

    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()
        .expect("Failed to build HTTP client");

    TestRepositories {
        esi: EsiRepository::new(client.clone(), &config.esi_url),
        zkillboard: ZkillboardRepository::new(client, &config.zkillboard_url),
        server,
    }
}

fn test_config(server: &ServerGuard) -> Config {
    let mut config = Config::new(TEST_USER_AGENT);
    config.esi_url = server.url();
    config.zkillboard_url = server.url();
    config
}
