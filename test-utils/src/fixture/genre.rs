//! Genre fixtures.

use entity::genre;

pub const DEFAULT_NAME: &str = "Strategy";

/// Creates a genre entity model with id `1` and `DEFAULT_NAME`.
pub fn entity() -> genre::Model {
    entity_with(1, DEFAULT_NAME)
}

pub fn entity_with(id: i32, name: &str) -> genre::Model {
    genre::Model {
        id,
        name: name.to_string(),
        description: None,
    }
}
