pub mod errors;
pub mod functions;
pub mod hetzner;
pub mod impls;
pub mod traits;
pub mod types;

pub use traits::DnsProvider;
