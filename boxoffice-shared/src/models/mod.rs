pub mod showtime;
