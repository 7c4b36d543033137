use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::{
        game::GameDto, game_tag::GameTagDto, genre::GenreDto, image::ImageDto, review::ReviewDto,
    },
    server::{
        error::mapping::MappingError,
        mapping::{
            apply_identity, apply_optional, apply_required, map_many, map_reference, IncludeTree,
            MapFrom, MapTo, MappingContext,
        },
        model::{game_tag::GameTag, genre::Genre, image::Image, review::Review},
    },
};

/// A game with optionally loaded relationships.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub likes: i32,
    pub number_of_ratings: i32,
    pub average_rating: f64,
    pub average_duration_in_hours: Option<f64>,
    pub min_players: i32,
    pub max_players: i32,
    pub genre_id: i32,
    pub genre: Option<Genre>,
    pub image: Option<Image>,
    pub game_tags: Option<Vec<GameTag>>,
    /// Non-deleted reviews, newest first.
    pub reviews: Option<Vec<Review>>,
}

impl Game {
    /// Converts the entity with every relationship left unloaded.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            release_date: entity.release_date,
            likes: entity.likes,
            number_of_ratings: entity.number_of_ratings,
            average_rating: entity.average_rating,
            average_duration_in_hours: entity.average_duration_in_hours,
            min_players: entity.min_players,
            max_players: entity.max_players,
            genre_id: entity.genre_id,
            genre: None,
            image: None,
            game_tags: None,
            reviews: None,
        }
    }
}

impl MapFrom<Game> for GameDto {
    fn map_from(&mut self, obj: &Game, ctx: &MappingContext, tree: &IncludeTree) {
        self.id.load(Some(obj.id));
        self.name.load(Some(obj.name.clone()));
        self.description.load(obj.description.clone());
        self.release_date.load(obj.release_date);
        self.likes.load(Some(obj.likes));
        self.number_of_ratings.load(Some(obj.number_of_ratings));
        self.average_rating.load(Some(obj.average_rating));
        self.average_duration_in_hours
            .load(obj.average_duration_in_hours);
        self.min_players.load(Some(obj.min_players));
        self.max_players.load(Some(obj.max_players));
        self.genre_id.load(Some(obj.genre_id));

        self.genre = map_reference::<Genre, GenreDto>("genre", obj.genre.as_ref(), ctx, tree);
        self.image = map_reference::<Image, ImageDto>("image", obj.image.as_ref(), ctx, tree);
        self.game_tags =
            map_many::<GameTag, GameTagDto>("gameTags", obj.game_tags.as_ref(), ctx, tree);
        self.reviews = map_many::<Review, ReviewDto>("reviews", obj.reviews.as_ref(), ctx, tree);
    }
}

/// Rating statistics and likes are maintained by the review and like operations and are
/// never written from a transfer object.
impl MapTo<entity::game::ActiveModel> for GameDto {
    fn map_to(
        &self,
        entity: &mut entity::game::ActiveModel,
        _ctx: &MappingContext,
    ) -> Result<(), MappingError> {
        apply_identity(&self.id, &mut entity.id);
        apply_required(&self.name, "name", &mut entity.name)?;
        apply_optional(&self.description, &mut entity.description);
        apply_optional(&self.release_date, &mut entity.release_date);
        apply_optional(
            &self.average_duration_in_hours,
            &mut entity.average_duration_in_hours,
        );
        apply_required(&self.min_players, "minPlayers", &mut entity.min_players)?;
        apply_required(&self.max_players, "maxPlayers", &mut entity.max_players)?;
        apply_required(&self.genre_id, "genreId", &mut entity.genre_id)?;
        Ok(())
    }
}
