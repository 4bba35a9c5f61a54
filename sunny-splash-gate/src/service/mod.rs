pub mod tickets_service;
pub mod verification_service;
