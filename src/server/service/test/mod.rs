use crate::{
    model::operation::Role,
    server::middleware::auth::{AuthUser, Caller},
};

mod game;

/// Caller signed in as `user` holding `roles`.
fn caller_for(user: &entity::application_user::Model, roles: &[Role]) -> Caller {
    Caller::user(AuthUser {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        roles: roles.to_vec(),
    })
}

/// SuperAdmin caller that does not exist in the user tables.
fn admin() -> Caller {
    Caller::user(AuthUser {
        id: 9000,
        name: "Administrator".to_string(),
        email: "admin@example.com".to_string(),
        roles: vec![Role::User, Role::SuperAdmin],
    })
}

/// User caller that does not exist in the user tables.
fn member() -> Caller {
    Caller::user(AuthUser {
        id: 9001,
        name: "Member".to_string(),
        email: "member@example.com".to_string(),
        roles: vec![Role::User],
    })
}
