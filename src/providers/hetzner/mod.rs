//! Hetzner DNS provider.
//!
//! Talks to the Hetzner DNS API bulk endpoint (`PUT {base}/records/bulk`)
//! authenticated with the `Auth-API-Token` header.

pub mod constants;
pub mod functions;
pub mod impls;
pub mod types;
