use crate::error::ConsoleError;
use crate::state::Session;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    ViewShowtimes,
    ChooseMovie,
    ViewSeats,
    BookSeat,
    CancelBooking,
    AddPriorityRequest,
    ProcessNextRequest,
    ViewPriorityRequests,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<MenuChoice, ConsoleError> {
        let number: u8 = input.trim().parse()
            .map_err(|_| ConsoleError::InvalidMenuChoice(input.to_owned()))?;

        match number {
            0 => Ok(MenuChoice::Exit),
            1 => Ok(MenuChoice::ViewShowtimes),
            2 => Ok(MenuChoice::ChooseMovie),
            3 => Ok(MenuChoice::ViewSeats),
            4 => Ok(MenuChoice::BookSeat),
            5 => Ok(MenuChoice::CancelBooking),
            6 => Ok(MenuChoice::AddPriorityRequest),
            7 => Ok(MenuChoice::ProcessNextRequest),
            8 => Ok(MenuChoice::ViewPriorityRequests),
            _ => Err(ConsoleError::InvalidMenuChoice(input.to_owned())),
        }
    }
}

const MENU_ITEMS: &str = "\
1. View Movies by Showtimes
2. Choose Movie
3. View Seats
4. Book Seat
5. Cancel Booking
6. Add Priority Request
7. Process Next Priority Request
8. View Priority Requests
0. Exit";

pub fn write_menu(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out, "\n--- Main Menu ---")?;
    match session.current_movie() {
        Some(movie) => writeln!(out, "Current Movie: {}", movie)?,
        None => writeln!(out, "No movie selected.")?,
    }
    writeln!(out, "{}", MENU_ITEMS)
}
