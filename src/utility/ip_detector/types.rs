/// Resolves the public IP through an HTTP echo service.
#[derive(Debug, Clone)]
pub struct IpDetector {
    pub service: String,
    pub client: reqwest::Client,
}
