/// IP echo service queried for the public address.
pub const IP_ECHO_URL: &str = "http://icanhazip.com";
