pub mod movie;
pub mod seats;
pub mod showtimes;

pub use movie::Movie;
pub use seats::{Seat, SeatError, SeatNumber, SeatRegistry};
pub use showtimes::ShowtimeQueue;
