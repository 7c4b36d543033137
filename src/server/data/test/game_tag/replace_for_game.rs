use super::*;

/// Tests replacing a game's links.
///
/// Expected: old links removed, new links in the given order
#[tokio::test]
async fn replaces_existing_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, old_tags) = factory::helpers::create_tagged_game(db, 2).await?;
    let new_tag = factory::create_tag(db).await?;
    let repo = GameTagRepository::new(db);

    let links = repo
        .replace_for_game(game.id, &[new_tag.id, old_tags[1].id])
        .await?;

    assert_eq!(links.len(), 2);
    let stored: Vec<_> = repo
        .get_by_game(game.id, &IncludeTree::empty())
        .await?
        .iter()
        .map(|l| l.tag_id)
        .collect();
    assert_eq!(stored, vec![new_tag.id, old_tags[1].id]);

    Ok(())
}

/// Tests clearing a game's links.
///
/// Expected: no links left, other games untouched
#[tokio::test]
async fn clears_links_with_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, _) = factory::helpers::create_tagged_game(db, 2).await?;
    let (other, _) = factory::helpers::create_tagged_game(db, 1).await?;
    let repo = GameTagRepository::new(db);

    repo.replace_for_game(game.id, &[]).await?;

    assert!(repo.get_by_game(game.id, &IncludeTree::empty()).await?.is_empty());
    assert_eq!(repo.get_by_game(other.id, &IncludeTree::empty()).await?.len(), 1);

    Ok(())
}
