//! Tag fixtures.

use entity::tag;

pub const DEFAULT_NAME: &str = "Cooperative";

/// Creates a tag entity model with id `1` and `DEFAULT_NAME`.
pub fn entity() -> tag::Model {
    entity_with(1, DEFAULT_NAME)
}

pub fn entity_with(id: i32, name: &str) -> tag::Model {
    tag::Model {
        id,
        name: name.to_string(),
        description: None,
    }
}
