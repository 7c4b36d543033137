use super::*;

/// Tests reading a user's roles.
///
/// Expected: User then SuperAdmin
#[tokio::test]
async fn returns_roles_in_grant_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .super_admin()
        .build()
        .await?;

    let roles = UserRepository::new(db).get_roles(user.id).await?;

    assert_eq!(roles, vec![Role::User, Role::SuperAdmin]);

    Ok(())
}

/// Tests that granting a held role again is ignored.
///
/// Expected: role listed once
#[tokio::test]
async fn add_role_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).no_roles().build().await?;
    let repo = UserRepository::new(db);

    repo.add_role(user.id, Role::User).await?;
    repo.add_role(user.id, Role::User).await?;

    assert_eq!(repo.get_roles(user.id).await?, vec![Role::User]);

    Ok(())
}

/// Tests that unknown role names are skipped.
///
/// Expected: only the known role
#[tokio::test]
async fn skips_unknown_roles() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user.id),
        role: ActiveValue::Set("Moderator".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let roles = UserRepository::new(db).get_roles(user.id).await?;

    assert_eq!(roles, vec![Role::User]);

    Ok(())
}
