use httpmock::MockServer;
use swarm_client::{Swarm, SwarmConfig};

/// Build a client against the mock server, negotiated at `version`.
pub fn swarm_at(server: &MockServer, version: u32) -> Swarm {
    let _ = env_logger::builder().is_test(true).try_init();

    let url = format!("{}/api/v{}", server.base_url(), version);
    Swarm::new(SwarmConfig::new(url, "bruno", "secret")).unwrap()
}
