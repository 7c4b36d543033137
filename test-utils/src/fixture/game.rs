//! Game fixtures.

use entity::game;
use uuid::Uuid;

pub const DEFAULT_NAME: &str = "Test Game";

/// Fixed id so mocked results and assertions can refer to the same game.
pub const DEFAULT_ID: Uuid = Uuid::from_u128(0x6a1f_0c3e_52d4_4b7e_9a0f_1d2c_3b4a_5968);

/// Creates a game entity model in genre `1`.
///
/// # Default Values
/// - id: `DEFAULT_ID`
/// - name: `"Test Game"`
/// - likes, number_of_ratings, average_rating: zero
/// - players: `1` to `4`
pub fn entity() -> game::Model {
    game::Model {
        id: DEFAULT_ID,
        name: DEFAULT_NAME.to_string(),
        description: Some("A game used in tests".to_string()),
        release_date: None,
        likes: 0,
        number_of_ratings: 0,
        average_rating: 0.0,
        average_duration_in_hours: Some(1.5),
        min_players: 1,
        max_players: 4,
        genre_id: 1,
    }
}
