mod ticket;
mod verification;

pub use ticket::*;
pub use verification::*;
