use crate::movie::Movie;
use boxoffice_shared::Showtime;
use std::collections::BTreeMap;

/// Movies ordered earliest showtime first.
///
/// Views borrow the queue; nothing short of `add` changes it. Movies sharing
/// a showtime keep the order they were added in.
#[derive(Debug, Clone, Default)]
pub struct ShowtimeQueue {
    movies: BTreeMap<(Showtime, u64), Movie>,
    next_seq: u64,
}

impl ShowtimeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, movie: Movie) {
        tracing::debug!(movie = %movie.name, showtime = movie.showtime.minutes(), "movie scheduled");
        self.movies.insert((movie.showtime, self.next_seq), movie);
        self.next_seq += 1;
    }

    /// Every scheduled movie, earliest first
    pub fn list_all_ascending(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.movies.values()
    }

    pub fn find(&self, name: &str) -> Option<&Movie> {
        self.movies.values().find(|movie| movie.name == name)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
