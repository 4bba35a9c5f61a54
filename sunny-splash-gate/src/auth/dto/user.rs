use std::sync::Arc;
use uuid::Uuid;

///
/// Authenticated caller, extracted from the JWT by the auth
/// middleware and cloned into every request's extensions. Roles
/// sit behind an Arc so the per-request clone stays cheap.
///
#[derive(Clone)]
pub struct User {
    id: Uuid,
    roles: Arc<[String]>,
}

impl User {
    pub fn new(id: Uuid, roles: Vec<String>) -> Self {
        Self {
            id,
            roles: roles.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|user_role| user_role == role)
    }
}
