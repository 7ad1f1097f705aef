use crate::console::Console;
use crate::error::ConsoleResult;
use crate::state::AppState;
use std::io::{BufRead, Write};

pub fn add_request<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    let customer_name = console.prompt("Enter customer name: ")?.trim().to_string();
    let age = console.prompt_number("Enter customer age: ")?;

    let request = state.requests.add_request(customer_name, age);
    writeln!(
        console,
        "Request added for {} (Age: {}).",
        request.customer_name, request.age
    )?;
    Ok(())
}

pub fn process_next<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    match state.requests.process_next() {
        Some(request) => writeln!(
            console,
            "Processing request for {} (Age: {})",
            request.customer_name, request.age
        )?,
        None => writeln!(console, "No pending requests.")?,
    }
    Ok(())
}

pub fn view_requests<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> ConsoleResult<()> {
    if state.requests.is_empty() {
        writeln!(console, "No pending requests.")?;
        return Ok(());
    }

    writeln!(console, "Pending requests:")?;
    for request in state.requests.list_all() {
        writeln!(console, "  {} (Age: {})", request.customer_name, request.age)?;
    }
    Ok(())
}
