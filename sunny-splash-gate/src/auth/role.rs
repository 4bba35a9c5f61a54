//!
//! All roles used within application
//!

use strum::AsRefStr;

#[derive(AsRefStr)]
pub enum Role {
    /// Granted to gate scanner accounts. Regular visitors must not
    /// be able to probe which tickets exist or were used.
    #[strum(serialize = "sunny_splash_verify_tickets")]
    VerifyTickets,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_tickets() {
        let role = Role::VerifyTickets.as_ref();
        assert_eq!(role, "sunny_splash_verify_tickets");
    }
}
