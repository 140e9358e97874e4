use nearcare_core::BookingFlow;

/// Hands bookings off by announcing them on stdout. The booking itself
/// happens outside this program.
pub(crate) struct TerminalBooking;

impl BookingFlow for TerminalBooking {
    fn open(&self, booking_id: &str) {
        println!("Opening booking flow for {booking_id}");
    }
}
