use super::*;

/// Tests filtering ids down to existing tags.
///
/// Expected: only the created tag's id
#[tokio::test]
async fn returns_only_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db).await?;
    let repo = TagRepository::new(db);

    assert_eq!(repo.existing_ids(&[tag.id, tag.id + 100]).await?, vec![tag.id]);
    assert!(repo.existing_ids(&[]).await?.is_empty());

    Ok(())
}
