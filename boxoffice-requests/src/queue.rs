use crate::models::PriorityRequest;
use boxoffice_shared::Masked;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Oldest customer first; equal ages are served in arrival order.
type QueueKey = (Reverse<i32>, u64);

/// Pending priority requests, highest age served first
#[derive(Debug, Clone, Default)]
pub struct PriorityRequestQueue {
    pending: BTreeMap<QueueKey, PriorityRequest>,
    next_seq: u64,
}

impl PriorityRequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a request for `customer_name`
    pub fn add_request(&mut self, customer_name: String, age: i32) -> &PriorityRequest {
        let request = PriorityRequest::new(customer_name, age);
        let key = (Reverse(age), self.next_seq);
        self.next_seq += 1;

        tracing::info!(
            request_id = %request.id,
            customer = %Masked(&request.customer_name),
            age,
            "priority request queued"
        );
        self.pending.entry(key).or_insert(request)
    }

    /// Remove and return the highest-age request
    pub fn process_next(&mut self) -> Option<PriorityRequest> {
        let (_, request) = self.pending.pop_first()?;
        tracing::info!(request_id = %request.id, age = request.age, "priority request processed");
        Some(request)
    }

    /// Pending requests in the order they will be served
    pub fn list_all(&self) -> impl Iterator<Item = &PriorityRequest> + '_ {
        self.pending.values()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
