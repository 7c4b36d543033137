use super::*;

/// Tests detecting a SuperAdmin.
///
/// Expected: false with only regular users, true once a SuperAdmin exists
#[tokio::test]
async fn detects_super_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    factory::create_user(db).await?;
    assert!(!repo.super_admin_exists().await?);

    factory::user::UserFactory::new(db)
        .super_admin()
        .build()
        .await?;
    assert!(repo.super_admin_exists().await?);

    Ok(())
}
