pub mod constants;
pub mod logging;

pub use constants::*;
pub use logging::init_tracing;
