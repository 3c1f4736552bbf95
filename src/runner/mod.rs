//! The run flow.
//!
//! `Start → ConfigLoaded → IpResolved → UpdateSubmitted → Outcome → Terminated`.
//! Every step hands its result back up as a value; [`functions::terminate`]
//! is the only place that decides whether to notify.

pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;

pub use functions::{evaluate_response, execute, run, terminate};
pub use types::{Outcome, RunContext};
