pub mod constants;
pub mod errors;
pub mod functions;

pub use functions::init_logging;
