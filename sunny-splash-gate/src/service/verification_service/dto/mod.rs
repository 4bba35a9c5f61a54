mod verification_service_config;

pub use verification_service_config::*;
