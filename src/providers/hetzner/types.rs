// 3rd party crates
use reqwest::Client;

/// Represents a client for interacting with the Hetzner DNS API.
#[derive(Debug, Clone)]
pub struct Hetzner {
    pub api_base_url: String,
    pub client: Client,
}
