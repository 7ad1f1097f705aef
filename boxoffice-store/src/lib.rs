pub mod app_config;
pub mod box_office;

pub use app_config::{CinemaConfig, Config, MovieConfig};
pub use box_office::{BoxOffice, StoreError};
