// Middleware module - contains CORS and observability setup

pub mod cors;
pub mod observability;

pub use cors::create_cors_layer;
pub use observability::init_tracing;
