pub mod models;
pub mod queue;

pub use models::PriorityRequest;
pub use queue::PriorityRequestQueue;
