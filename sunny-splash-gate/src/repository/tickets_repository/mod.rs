mod dto;
mod entity;
mod tickets_repository;
mod tickets_repository_impl;

pub use dto::{PaymentReference, Ticket, TicketStatus, Visitor};
pub use tickets_repository::*;
pub use tickets_repository_impl::*;
