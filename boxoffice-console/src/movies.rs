use crate::console::Console;
use crate::error::{ConsoleError, ConsoleResult};
use crate::state::AppState;
use std::io::{BufRead, Write};

pub fn view_showtimes<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    writeln!(console, "\nMovies by Showtimes:")?;
    for movie in state.box_office.showtimes().list_all_ascending() {
        writeln!(console, "  {} - {}", movie.name, movie.showtime)?;
    }
    Ok(())
}

/// Select a movie by its exact name. A name that doesn't match clears any
/// previous selection.
pub fn choose_movie<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    let name = console.prompt("\nEnter the name of the movie you want to select: ")?;

    let Some(movie) = state.box_office.movie(&name) else {
        tracing::warn!(movie = %name, "unknown movie selected");
        state.session.clear();
        return Err(ConsoleError::InvalidSelection(name));
    };

    writeln!(console, "You selected: {}", movie.name)?;
    writeln!(
        console,
        "Thank you for choosing {}. Your chosen movie, '{}', will start at {}.",
        state.cinema.name, movie.name, movie.showtime
    )?;

    tracing::info!(movie = %movie.name, "movie selected");
    state.session.select(name);
    Ok(())
}
