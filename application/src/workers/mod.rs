//! Worker lifecycle and the static worker pool

pub mod pool;
pub mod worker;

pub use pool::WorkerPool;
pub use worker::Worker;
