use boxoffice_requests::PriorityRequestQueue;
use boxoffice_store::{BoxOffice, CinemaConfig, StoreError};
use crate::error::ConsoleError;

/// Per-run user context. Only the selected movie for now.
#[derive(Debug, Default)]
pub struct Session {
    current_movie: Option<String>,
}

impl Session {
    pub fn current_movie(&self) -> Option<&str> {
        self.current_movie.as_deref()
    }

    pub fn select(&mut self, movie: String) {
        self.current_movie = Some(movie);
    }

    pub fn clear(&mut self) {
        self.current_movie = None;
    }

    pub fn require_movie(&self) -> Result<&str, ConsoleError> {
        self.current_movie().ok_or(ConsoleError::NoMovieSelected)
    }
}

/// Everything the menu actions operate on
pub struct AppState {
    pub cinema: CinemaConfig,
    pub box_office: BoxOffice,
    pub requests: PriorityRequestQueue,
    pub session: Session,
}

impl AppState {
    pub fn new(cinema: CinemaConfig) -> Result<Self, StoreError> {
        let box_office = BoxOffice::from_config(&cinema)?;
        Ok(Self {
            cinema,
            box_office,
            requests: PriorityRequestQueue::new(),
            session: Session::default(),
        })
    }
}
