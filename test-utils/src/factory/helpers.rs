//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a genre and a game in it.
///
/// # Returns
/// - `Ok((genre, game))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_with_genre(
    db: &DatabaseConnection,
) -> Result<(entity::genre::Model, entity::game::Model), DbErr> {
    let genre = crate::factory::genre::create_genre(db).await?;
    let game = crate::factory::game::create_game_in_genre(db, genre.id).await?;

    Ok((genre, game))
}

/// Creates a game with `count` tags linked to it, tags in creation order.
///
/// # Returns
/// - `Ok((game, tags))` - The game and its linked tags
/// - `Err(DbErr)` - Database error during creation
pub async fn create_tagged_game(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::game::Model, Vec<entity::tag::Model>), DbErr> {
    let (_, game) = create_game_with_genre(db).await?;

    let mut tags = Vec::with_capacity(count);
    for _ in 0..count {
        let tag = crate::factory::tag::create_tag(db).await?;
        crate::factory::game_tag::create_game_tag(db, game.id, tag.id).await?;
        tags.push(tag);
    }

    Ok((game, tags))
}
