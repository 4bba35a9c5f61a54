mod dto;
mod verification_service;
mod verification_service_impl;

pub use dto::VerificationServiceConfig;
pub use verification_service::*;
pub use verification_service_impl::*;
