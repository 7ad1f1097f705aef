use crate::app_config::CinemaConfig;
use boxoffice_catalog::{Movie, SeatNumber, SeatRegistry, ShowtimeQueue};
use boxoffice_shared::{Showtime, ShowtimeError};
use std::collections::HashMap;

/// In-memory state of the cinema: one seat registry per movie and the
/// day's schedule. Movies are registered through `add_movie` only, so the
/// two structures always hold the same set of names.
#[derive(Debug, Default)]
pub struct BoxOffice {
    registries: HashMap<String, SeatRegistry>,
    schedule: ShowtimeQueue,
}

impl BoxOffice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the schedule described by `config`, seating `1..=seats_per_movie`
    /// for every movie.
    pub fn from_config(config: &CinemaConfig) -> Result<Self, StoreError> {
        let mut office = Self::new();

        for movie in &config.movies {
            let showtime = Showtime::from_minutes(movie.showtime)
                .map_err(|source| StoreError::InvalidShowtime {
                    movie: movie.name.clone(),
                    source,
                })?;
            office.add_movie(&movie.name, showtime, 1..=config.seats_per_movie)?;
        }

        tracing::info!(
            movies = office.schedule.len(),
            seats_per_movie = config.seats_per_movie,
            "box office initialized"
        );
        Ok(office)
    }

    pub fn add_movie(
        &mut self,
        name: &str,
        showtime: Showtime,
        seats: std::ops::RangeInclusive<SeatNumber>,
    ) -> Result<(), StoreError> {
        if self.registries.contains_key(name) {
            return Err(StoreError::DuplicateMovie(name.to_string()));
        }

        self.registries.insert(name.to_string(), SeatRegistry::with_seats(seats));
        self.schedule.add(Movie::new(name, showtime));
        Ok(())
    }

    pub fn movie(&self, name: &str) -> Option<&Movie> {
        self.schedule.find(name)
    }

    pub fn showtimes(&self) -> &ShowtimeQueue {
        &self.schedule
    }

    pub fn seats(&self, name: &str) -> Result<&SeatRegistry, StoreError> {
        self.registries.get(name)
            .ok_or_else(|| StoreError::MovieNotFound(name.to_string()))
    }

    pub fn seats_mut(&mut self, name: &str) -> Result<&mut SeatRegistry, StoreError> {
        self.registries.get_mut(name)
            .ok_or_else(|| StoreError::MovieNotFound(name.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Movie already scheduled: {0}")]
    DuplicateMovie(String),

    #[error("Invalid showtime for {movie}: {source}")]
    InvalidShowtime {
        movie: String,
        source: ShowtimeError,
    },
}
