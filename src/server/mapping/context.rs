use crate::{model::operation::Role, server::middleware::auth::Caller};

/// Per-request information available to every mapper.
#[derive(Debug, Clone, Default)]
pub struct MappingContext {
    caller: Caller,
}

impl MappingContext {
    pub fn new(caller: Caller) -> Self {
        Self { caller }
    }

    pub fn caller(&self) -> &Caller {
        &self.caller
    }

    pub fn is_in_role(&self, role: Role) -> bool {
        self.caller.is_in_role(role)
    }

    /// True when the caller is the given user or a SuperAdmin.
    pub fn is_self_or_admin(&self, user_id: i32) -> bool {
        self.caller.id() == Some(user_id) || self.is_in_role(Role::SuperAdmin)
    }
}
