//! Model invocation boundary adapters

mod http_gateway;

pub use http_gateway::{HealthStatus, HttpLlmGateway};
