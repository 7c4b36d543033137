use super::*;

/// Tests that tags are listed by name.
///
/// Expected: alphabetical order
#[tokio::test]
async fn returns_tags_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Solo", "Dice", "Legacy"] {
        factory::tag::TagFactory::new(db).name(name).build().await?;
    }

    let tags = TagRepository::new(db).get_all().await?;

    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Dice", "Legacy", "Solo"]);

    Ok(())
}
