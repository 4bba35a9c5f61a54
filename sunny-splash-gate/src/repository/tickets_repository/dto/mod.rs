mod payment_reference;
mod ticket;
mod ticket_status;
mod visitor;

pub use payment_reference::PaymentReference;
pub use ticket::Ticket;
pub use ticket_status::TicketStatus;
pub use visitor::Visitor;
