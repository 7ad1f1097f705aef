pub mod models;
pub mod pii;

pub use models::showtime::{Showtime, ShowtimeError, MINUTES_PER_DAY};
pub use pii::Masked;
