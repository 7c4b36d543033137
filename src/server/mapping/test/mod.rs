use test_utils::fixture;
use uuid::Uuid;

use crate::{
    model::operation::Role,
    server::{
        mapping::{IncludeTree, MappingContext},
        middleware::auth::{AuthUser, Caller},
        model::{game::Game, game_tag::GameTag, genre::Genre, image::Image, review::Review, tag::Tag},
    },
};


fn ctx() -> MappingContext {
    MappingContext::new(Caller::anonymous())
}

fn ctx_for(id: i32, roles: Vec<Role>) -> MappingContext {
    MappingContext::new(Caller::user(AuthUser {
        id,
        name: format!("User {}", id),
        email: format!("user{}@example.com", id),
        roles,
    }))
}

fn game_id() -> Uuid {
    Uuid::from_u128(0x11)
}

/// A game with every relationship loaded: genre 1, two tags and one review.
fn loaded_game() -> Game {
    let mut game = Game::from_entity(fixture::game::entity());
    game.id = game_id();
    game.genre = Some(Genre::from_entity(fixture::genre::entity()));
    game.image = Some(Image {
        id: 1,
        game_id: game_id(),
        base64_image: Some("data:image/png;base64,AAAA".to_string()),
    });
    game.game_tags = Some(
        [(1, "Cooperative"), (2, "Deck building")]
            .into_iter()
            .map(|(id, name)| GameTag {
                id,
                game_id: game_id(),
                tag_id: id,
                tag: Some(Tag::from_entity(fixture::tag::entity_with(id, name))),
            })
            .collect(),
    );
    game.reviews = Some(vec![Review::from_entity(fixture::review::entity(game_id()))]);
    game
}

fn tree(includes: &str) -> IncludeTree {
    IncludeTree::parse(includes)
}
