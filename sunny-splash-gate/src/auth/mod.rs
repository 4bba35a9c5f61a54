mod dto;
mod error;
mod jwt_authorization_validator;
mod role;

pub mod util;

pub use dto::User;
pub use error::MissingRoleError;
pub use jwt_authorization_validator::JwtAuthorizationValidator;
pub use role::Role;

///
/// Validates that user has all required roles.
///
/// ### Errors
/// - [MissingRoleError] when any of the roles is missing
///
pub fn require_all_roles(user: &User, roles: &[Role]) -> Result<(), MissingRoleError> {
    for role in roles {
        let role = role.as_ref();
        if !user.has_role(role) {
            return Err(MissingRoleError {
                missing_role: role.to_string(),
            });
        }
    }

    Ok(())
}
