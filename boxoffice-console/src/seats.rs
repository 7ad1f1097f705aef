use crate::console::Console;
use crate::error::ConsoleResult;
use crate::state::AppState;
use std::io::{BufRead, Write};

pub fn view_seats<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    let movie = state.session.require_movie()?;
    let registry = state.box_office.seats(movie)?;

    tracing::debug!(
        movie,
        available = registry.available_count(),
        booked = registry.booked_count(),
        "listing seats"
    );
    writeln!(console, "\nAvailable Seats for {}:", movie)?;
    if registry.is_empty() {
        writeln!(console, "No seats available.")?;
        return Ok(());
    }

    for seat in registry.list_seats() {
        let status = if seat.booked { "Booked" } else { "Available" };
        writeln!(console, "  Seat {} ({})", seat.seat_number, status)?;
    }
    Ok(())
}

pub fn book_seat<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    let movie = state.session.require_movie()?;
    let seat_number = console.prompt_number("Enter seat number to book: ")?;

    state.box_office.seats_mut(movie)?.book_seat(seat_number)?;
    writeln!(console, "Seat {} successfully booked.", seat_number)?;
    Ok(())
}

/// Cancelling also removes the seat from the movie
pub fn cancel_booking<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    let movie = state.session.require_movie()?;
    let seat_number = console.prompt_number("Enter seat number to cancel booking: ")?;

    state.box_office.seats_mut(movie)?.cancel_booking(seat_number)?;
    writeln!(
        console,
        "Booking for Seat {} successfully canceled and seat deleted.",
        seat_number
    )?;
    Ok(())
}
