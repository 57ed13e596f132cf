//! Use cases: one per coordination pattern

pub mod dispatch;
pub mod refine;
pub mod route;

pub use dispatch::{DispatchError, DispatchOutcome, DispatchUseCase};
pub use refine::{RefineError, RefineOutcome, RefineUseCase};
pub use route::{ROUTING_FAILED_RESPONSE, RouteError, RouteOutcome, RouteUseCase};
