use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Seat numbers are taken straight from user input, so negatives are
/// representable; they simply never match a configured seat.
pub type SeatNumber = i32;

/// One seat of a screening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub seat_number: SeatNumber,
    pub booked: bool,
}

/// Seat inventory for a single movie, ordered by seat number.
///
/// A seat is either present (available or booked) or absent. Cancelling a
/// booking removes the seat rather than returning it to the available pool.
#[derive(Debug, Clone, Default)]
pub struct SeatRegistry {
    seats: BTreeMap<SeatNumber, Seat>,
}

impl SeatRegistry {
    pub fn new() -> Self {
        Self {
            seats: BTreeMap::new(),
        }
    }

    /// Registry pre-filled with available seats for every number in `range`
    pub fn with_seats(range: RangeInclusive<SeatNumber>) -> Self {
        let mut registry = Self::new();
        for seat_number in range {
            registry.add_seat(seat_number);
        }
        registry
    }

    /// Add an available seat. Returns `false` and leaves the existing seat
    /// untouched if the number is already registered.
    pub fn add_seat(&mut self, seat_number: SeatNumber) -> bool {
        if self.seats.contains_key(&seat_number) {
            return false;
        }
        self.seats.insert(seat_number, Seat { seat_number, booked: false });
        true
    }

    pub fn seat(&self, seat_number: SeatNumber) -> Option<&Seat> {
        self.seats.get(&seat_number)
    }

    /// All seats in ascending seat-number order
    pub fn list_seats(&self) -> impl Iterator<Item = &Seat> + '_ {
        self.seats.values()
    }

    pub fn book_seat(&mut self, seat_number: SeatNumber) -> Result<(), SeatError> {
        let seat = self.seat_mut(seat_number)?;

        if seat.booked {
            return Err(SeatError::AlreadyBooked(seat_number));
        }

        seat.booked = true;
        tracing::info!(seat_number, "seat booked");
        Ok(())
    }

    /// Remove a seat whether or not it is booked
    pub fn delete_seat(&mut self, seat_number: SeatNumber) -> Result<Seat, SeatError> {
        let seat = self.seats.remove(&seat_number)
            .ok_or(SeatError::NotFound(seat_number))?;

        tracing::info!(seat_number, was_booked = seat.booked, "seat deleted");
        Ok(seat)
    }

    /// Cancel a booking. The seat is removed from the registry entirely.
    pub fn cancel_booking(&mut self, seat_number: SeatNumber) -> Result<(), SeatError> {
        let seat = self.seat_mut(seat_number)?;

        if !seat.booked {
            return Err(SeatError::NotBooked(seat_number));
        }

        seat.booked = false;
        self.seats.remove(&seat_number);
        tracing::info!(seat_number, "booking cancelled, seat removed");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn booked_count(&self) -> usize {
        self.seats.values().filter(|seat| seat.booked).count()
    }

    pub fn available_count(&self) -> usize {
        self.len() - self.booked_count()
    }

    fn seat_mut(&mut self, seat_number: SeatNumber) -> Result<&mut Seat, SeatError> {
        self.seats.get_mut(&seat_number)
            .ok_or(SeatError::NotFound(seat_number))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("Seat {0} does not exist.")]
    NotFound(SeatNumber),

    #[error("Seat {0} is already booked.")]
    AlreadyBooked(SeatNumber),

    #[error("Seat {0} is not booked.")]
    NotBooked(SeatNumber),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(registry: &SeatRegistry) -> Vec<SeatNumber> {
        registry.list_seats().map(|seat| seat.seat_number).collect()
    }

    #[test]
    fn test_listing_is_ascending() {
        let mut registry = SeatRegistry::new();
        for seat_number in [7, 3, 9, 1, 5, -2, 8] {
            assert!(registry.add_seat(seat_number));
        }

        assert_eq!(numbers(&registry), vec![-2, 1, 3, 5, 7, 8, 9]);
        assert!(registry.list_seats().all(|seat| !seat.booked));
    }

    #[test]
    fn test_duplicate_add_keeps_existing_seat() {
        let mut registry = SeatRegistry::with_seats(1..=3);
        registry.book_seat(2).unwrap();

        assert!(!registry.add_seat(2));
        assert_eq!(registry.len(), 3);
        assert!(registry.seat(2).unwrap().booked);
    }

    #[test]
    fn test_book_twice_fails_without_state_change() {
        let mut registry = SeatRegistry::with_seats(1..=10);

        registry.book_seat(5).unwrap();
        assert_eq!(registry.book_seat(5), Err(SeatError::AlreadyBooked(5)));
        assert!(registry.seat(5).unwrap().booked);
        assert_eq!(registry.booked_count(), 1);
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn test_book_missing_seat() {
        let mut registry = SeatRegistry::with_seats(1..=10);
        assert_eq!(registry.book_seat(11), Err(SeatError::NotFound(11)));
        assert_eq!(registry.book_seat(0), Err(SeatError::NotFound(0)));
    }

    #[test]
    fn test_booking_lifecycle() {
        let mut registry = SeatRegistry::with_seats(1..=10);

        // Book
        registry.book_seat(5).unwrap();
        assert_eq!(registry.book_seat(5), Err(SeatError::AlreadyBooked(5)));

        // Cancel removes the seat
        registry.cancel_booking(5).unwrap();
        assert!(registry.seat(5).is_none());
        assert!(!numbers(&registry).contains(&5));

        // Gone for good
        assert_eq!(registry.book_seat(5), Err(SeatError::NotFound(5)));
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn test_cancel_unbooked_seat() {
        let mut registry = SeatRegistry::with_seats(1..=3);

        assert_eq!(registry.cancel_booking(2), Err(SeatError::NotBooked(2)));
        assert_eq!(registry.cancel_booking(4), Err(SeatError::NotFound(4)));
        assert_eq!(registry.len(), 3);
        assert!(!registry.seat(2).unwrap().booked);
    }

    #[test]
    fn test_delete_ignores_booked_state() {
        let mut registry = SeatRegistry::with_seats(1..=5);
        registry.book_seat(4).unwrap();

        let removed = registry.delete_seat(4).unwrap();
        assert!(removed.booked);
        registry.delete_seat(2).unwrap();

        assert_eq!(numbers(&registry), vec![1, 3, 5]);
        assert_eq!(registry.delete_seat(2), Err(SeatError::NotFound(2)));
    }

    #[test]
    fn test_delete_interior_seat_keeps_order() {
        // 50 has both a smaller and a larger neighbour
        let mut registry = SeatRegistry::new();
        for seat_number in [50, 30, 70, 20, 40, 60, 80, 65] {
            registry.add_seat(seat_number);
        }

        registry.delete_seat(50).unwrap();
        assert_eq!(numbers(&registry), vec![20, 30, 40, 60, 65, 70, 80]);

        registry.delete_seat(60).unwrap();
        assert_eq!(numbers(&registry), vec![20, 30, 40, 65, 70, 80]);
    }

    #[test]
    fn test_readd_after_delete_is_fresh() {
        let mut registry = SeatRegistry::with_seats(1..=3);
        registry.book_seat(1).unwrap();
        registry.cancel_booking(1).unwrap();

        assert!(registry.add_seat(1));
        assert_eq!(registry.seat(1), Some(&Seat { seat_number: 1, booked: false }));
        registry.book_seat(1).unwrap();
    }

    #[test]
    fn test_counts() {
        let mut registry = SeatRegistry::with_seats(1..=4);
        assert!(!registry.is_empty());
        registry.book_seat(1).unwrap();
        registry.book_seat(3).unwrap();

        assert_eq!(registry.booked_count(), 2);
        assert_eq!(registry.available_count(), 2);

        for seat_number in 1..=4 {
            registry.delete_seat(seat_number).unwrap();
        }
        assert!(registry.is_empty());
        assert_eq!(registry.list_seats().count(), 0);
    }
}
