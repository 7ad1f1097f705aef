use std::io::{BufRead, Write};

pub mod console;
pub mod error;
pub mod menu;
pub mod movies;
pub mod requests;
pub mod seats;
pub mod state;

pub use console::Console;
pub use error::{ConsoleError, ConsoleResult};
pub use menu::MenuChoice;
pub use state::{AppState, Session};

const RULE: &str = "=============================================";

/// Run the box office menu until the user exits or input runs out.
///
/// Rejected actions are printed and the menu is shown again; only I/O
/// failures are returned.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    write_banner(state, console)?;

    loop {
        menu::write_menu(console, &state.session)?;

        let line = match console.prompt("Enter your choice: ") {
            Ok(line) => line,
            Err(ConsoleError::InputClosed) => break,
            Err(e) => return Err(e),
        };

        let choice = match MenuChoice::parse(&line) {
            Ok(choice) => choice,
            Err(e) => {
                writeln!(console, "{}", e)?;
                continue;
            }
        };

        if choice == MenuChoice::Exit {
            writeln!(
                console,
                "Thank you for visiting {}. Have a great day!",
                state.cinema.name
            )?;
            break;
        }

        match dispatch(choice, state, console) {
            Ok(()) => {}
            Err(ConsoleError::InputClosed) => break,
            Err(e) if e.is_terminal() => return Err(e),
            Err(e) => {
                tracing::debug!(?choice, error = %e, "action rejected");
                writeln!(console, "{}", e)?;
            }
        }
    }

    tracing::info!("session ended");
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    match choice {
        MenuChoice::ViewShowtimes => movies::view_showtimes(state, console),
        MenuChoice::ChooseMovie => movies::choose_movie(state, console),
        MenuChoice::ViewSeats => seats::view_seats(state, console),
        MenuChoice::BookSeat => seats::book_seat(state, console),
        MenuChoice::CancelBooking => seats::cancel_booking(state, console),
        MenuChoice::AddPriorityRequest => requests::add_request(state, console),
        MenuChoice::ProcessNextRequest => requests::process_next(state, console),
        MenuChoice::ViewPriorityRequests => requests::view_requests(state, console),
        MenuChoice::Exit => Ok(()),
    }
}

fn write_banner<W: Write>(state: &AppState, out: &mut W) -> ConsoleResult<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{:^45}", format!("Welcome to {}!", state.cinema.name))?;
    writeln!(out, "{:^45}", state.cinema.tagline)?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}
