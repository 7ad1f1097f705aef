use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// A priority customer waiting to be served
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriorityRequest {
    pub id: Uuid,
    pub customer_name: String,
    pub age: i32,
    pub requested_at: DateTime<Utc>,
}

impl PriorityRequest {
    pub fn new(customer_name: String, age: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name,
            age,
            requested_at: Utc::now(),
        }
    }
}
