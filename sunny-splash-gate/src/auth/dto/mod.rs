mod jwt_claims;
mod user;

pub(super) use jwt_claims::JwtClaims;
pub use user::User;
