use boxoffice_catalog::SeatError;
use boxoffice_store::StoreError;
use std::io;

/// Everything a menu action can fail with. All variants except `Io` and
/// `InputClosed` are reported to the user and the menu loop carries on.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Invalid choice. Please try again.")]
    InvalidMenuChoice(String),

    #[error("Invalid movie selection. Please try again.")]
    InvalidSelection(String),

    #[error("Please select a movie first.")]
    NoMovieSelected,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error(transparent)]
    Seat(#[from] SeatError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Input closed")]
    InputClosed,

    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    /// Errors that end the session instead of being printed
    pub fn is_terminal(&self) -> bool {
        matches!(self, ConsoleError::Io(_) | ConsoleError::InputClosed)
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
