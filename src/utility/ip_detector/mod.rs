//! Public IP detection.
//!
//! Resolves the caller's public address with a single unauthenticated GET
//! against an IP echo service. The trimmed response body is taken as the
//! address verbatim; neither IPv4 nor IPv6 syntax is checked.
//!
//! The [`traits::PublicIpSource`] trait is the seam the run flow depends on,
//! with [`types::IpDetector`] as the HTTP implementation.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;
