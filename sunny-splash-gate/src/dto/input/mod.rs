mod book_ticket;
mod verify_ticket;

pub use book_ticket::*;
pub use verify_ticket::*;
