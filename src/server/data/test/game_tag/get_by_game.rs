use super::*;

/// Tests loading a game's links with their tags.
///
/// Expected: links in insertion order, tags loaded
#[tokio::test]
async fn loads_links_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, tags) = factory::helpers::create_tagged_game(db, 3).await?;

    let links = GameTagRepository::new(db)
        .get_by_game(game.id, &IncludeTree::parse("tag"))
        .await?;

    let tag_ids: Vec<_> = links.iter().map(|l| l.tag_id).collect();
    assert_eq!(tag_ids, tags.iter().map(|t| t.id).collect::<Vec<_>>());
    assert!(links.iter().all(|l| l.tag.is_some()));

    Ok(())
}

/// Tests that tags are not loaded unless requested.
///
/// Expected: links without tags
#[tokio::test]
async fn skips_tags_when_not_included() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, _) = factory::helpers::create_tagged_game(db, 1).await?;

    let links = GameTagRepository::new(db)
        .get_by_game(game.id, &IncludeTree::empty())
        .await?;

    assert_eq!(links.len(), 1);
    assert!(links[0].tag.is_none());

    Ok(())
}

/// Tests grouping links across games.
///
/// Expected: one entry per tagged game, untagged games absent
#[tokio::test]
async fn groups_by_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_tagged_game(db, 2).await?;
    let (second, _) = factory::helpers::create_tagged_game(db, 1).await?;
    let untagged = factory::create_game(db).await?;

    let grouped = GameTagRepository::new(db)
        .get_by_games(&[first.id, second.id, untagged.id], &IncludeTree::empty())
        .await?;

    assert_eq!(grouped.get(&first.id).map(Vec::len), Some(2));
    assert_eq!(grouped.get(&second.id).map(Vec::len), Some(1));
    assert!(!grouped.contains_key(&untagged.id));

    Ok(())
}
