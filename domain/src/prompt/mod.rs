//! Prompt templates for each coordination flow

pub mod dispatch;
pub mod refine;
pub mod route;
pub mod worker;

pub use dispatch::DispatchPromptTemplate;
pub use refine::RefinePromptTemplate;
pub use route::RoutePromptTemplate;
