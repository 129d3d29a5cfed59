//! File-backed persistence for print-preview ticket values.

pub mod saved;
pub mod store;

pub use saved::SavedTicket;
pub use store::{StateError, TicketStateStore};
