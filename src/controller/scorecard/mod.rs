pub mod http_handlers;
pub mod stats_aggregators;

pub use http_handlers::*;
pub use stats_aggregators::*;
