//! Entity endpoints for genres.

use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel};

use crate::{
    model::{
        api::{ItemResult, ListResult},
        genre::GenreDto,
        operation::genre,
        params::ListParams,
    },
    server::{
        data::genre::GenreRepository,
        error::AppError,
        mapping::{current_value, map_collection, map_to_dto, map_to_entity, IncludeTree, MappingContext},
        middleware::auth::Caller,
        model::genre::Genre,
    },
};

const MSG_NOT_FOUND: &str = "Unable to find the genre.";
const MSG_IN_USE: &str = "The genre is still used by one or more games.";
const MSG_NAME_REQUIRED: &str = "The field 'name' is required.";
const MSG_BAD_PAGE: &str = "Page and page size must be at least 1.";

pub struct GenreService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> GenreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, caller: &Caller, id: i32) -> Result<ItemResult<GenreDto>, AppError> {
        genre::GET.authorize(caller)?;

        let genre = GenreRepository::new(self.db).find_by_id(id).await?;

        let ctx = MappingContext::new(caller.clone());
        match map_to_dto::<Genre, GenreDto>(genre.as_ref(), &ctx, &IncludeTree::empty()) {
            Some(dto) => Ok(ItemResult::success(dto)),
            None => Ok(ItemResult::failure(MSG_NOT_FOUND)),
        }
    }

    pub async fn list(
        &self,
        caller: &Caller,
        params: &ListParams,
    ) -> Result<ListResult<GenreDto>, AppError> {
        genre::LIST.authorize(caller)?;

        if params.page < 1 || params.page_size < 1 {
            return Ok(ListResult::failure(MSG_BAD_PAGE));
        }

        let (genres, total) = GenreRepository::new(self.db)
            .get_paginated(params.page - 1, params.page_size)
            .await?;

        let ctx = MappingContext::new(caller.clone());
        Ok(ListResult::page(
            map_collection(&genres, &ctx, &IncludeTree::empty()),
            params.page,
            params.page_size,
            total,
        ))
    }

    /// Creates a genre when the DTO has no id, otherwise applies its changed fields.
    pub async fn save(&self, caller: &Caller, dto: &GenreDto) -> Result<ItemResult<GenreDto>, AppError> {
        genre::SAVE.authorize(caller)?;

        let ctx = MappingContext::new(caller.clone());
        let repo = GenreRepository::new(self.db);

        let saved = match dto.id.get() {
            Some(id) => {
                let Some(model) = repo.find_model(*id).await? else {
                    return Ok(ItemResult::failure(MSG_NOT_FOUND));
                };
                let mut active = model.clone().into_active_model();
                if let Err(e) = map_to_entity(dto, Some(&mut active), &ctx) {
                    return Ok(ItemResult::failure(e.to_string()));
                }
                if active.is_changed() {
                    repo.update(active).await?
                } else {
                    Genre::from_entity(model)
                }
            }
            None => {
                let mut active = entity::genre::ActiveModel {
                    ..Default::default()
                };
                if let Err(e) = map_to_entity(dto, Some(&mut active), &ctx) {
                    return Ok(ItemResult::failure(e.to_string()));
                }
                if current_value(&active.name).is_none() {
                    return Ok(ItemResult::failure(MSG_NAME_REQUIRED));
                }
                let genre = repo.insert(active).await?;
                tracing::info!("Created genre {} ({})", genre.name, genre.id);
                genre
            }
        };

        let dto = map_to_dto::<_, GenreDto>(Some(&saved), &ctx, &IncludeTree::empty());
        Ok(dto.map_or_else(|| ItemResult::failure(MSG_NOT_FOUND), ItemResult::success))
    }

    /// Deletes a genre that no game belongs to.
    pub async fn delete(&self, caller: &Caller, id: i32) -> Result<ItemResult, AppError> {
        genre::DELETE.authorize(caller)?;

        let repo = GenreRepository::new(self.db);
        if repo.in_use(id).await? {
            return Ok(ItemResult::failure(MSG_IN_USE));
        }
        if !repo.delete(id).await? {
            return Ok(ItemResult::failure(MSG_NOT_FOUND));
        }

        tracing::info!("Deleted genre {}", id);

        Ok(ItemResult::ok())
    }
}
