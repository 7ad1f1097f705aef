use boxoffice_shared::Showtime;
use serde::{Deserialize, Serialize};

/// A screening on today's schedule. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub name: String,
    pub showtime: Showtime,
}

impl Movie {
    pub fn new(name: impl Into<String>, showtime: Showtime) -> Self {
        Self {
            name: name.into(),
            showtime,
        }
    }
}
