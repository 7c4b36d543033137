//! Entity endpoints for tags.

use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel};

use crate::{
    model::{
        api::{ItemResult, ListResult},
        tag::TagDto,
        operation::tag,
        params::ListParams,
    },
    server::{
        data::tag::TagRepository,
        error::AppError,
        mapping::{current_value, map_collection, map_to_dto, map_to_entity, IncludeTree, MappingContext},
        middleware::auth::Caller,
        model::tag::Tag,
    },
};

const MSG_NOT_FOUND: &str = "Unable to find the tag.";
const MSG_NAME_REQUIRED: &str = "The field 'name' is required.";
const MSG_BAD_PAGE: &str = "Page and page size must be at least 1.";

pub struct TagService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, caller: &Caller, id: i32) -> Result<ItemResult<TagDto>, AppError> {
        tag::GET.authorize(caller)?;

        let tag = TagRepository::new(self.db).find_by_id(id).await?;

        let ctx = MappingContext::new(caller.clone());
        match map_to_dto::<Tag, TagDto>(tag.as_ref(), &ctx, &IncludeTree::empty()) {
            Some(dto) => Ok(ItemResult::success(dto)),
            None => Ok(ItemResult::failure(MSG_NOT_FOUND)),
        }
    }

    pub async fn list(
        &self,
        caller: &Caller,
        params: &ListParams,
    ) -> Result<ListResult<TagDto>, AppError> {
        tag::LIST.authorize(caller)?;

        if params.page < 1 || params.page_size < 1 {
            return Ok(ListResult::failure(MSG_BAD_PAGE));
        }

        let (tags, total) = TagRepository::new(self.db)
            .get_paginated(params.page - 1, params.page_size)
            .await?;

        let ctx = MappingContext::new(caller.clone());
        Ok(ListResult::page(
            map_collection(&tags, &ctx, &IncludeTree::empty()),
            params.page,
            params.page_size,
            total,
        ))
    }

    /// Creates a tag when the DTO has no id, otherwise applies its changed fields.
    pub async fn save(&self, caller: &Caller, dto: &TagDto) -> Result<ItemResult<TagDto>, AppError> {
        tag::SAVE.authorize(caller)?;

        let ctx = MappingContext::new(caller.clone());
        let repo = TagRepository::new(self.db);

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
                    Tag::from_entity(model)
                }
            }
            None => {
                let mut active = entity::tag::ActiveModel {
                    ..Default::default()
                };
                if let Err(e) = map_to_entity(dto, Some(&mut active), &ctx) {
                    return Ok(ItemResult::failure(e.to_string()));
                }
                if current_value(&active.name).is_none() {
                    return Ok(ItemResult::failure(MSG_NAME_REQUIRED));
                }
                let tag = repo.insert(active).await?;
                tracing::info!("Created tag {} ({})", tag.name, tag.id);
                tag
            }
        };

        let dto = map_to_dto::<_, TagDto>(Some(&saved), &ctx, &IncludeTree::empty());
        Ok(dto.map_or_else(|| ItemResult::failure(MSG_NOT_FOUND), ItemResult::success))
    }

    /// Deletes a tag together with its game links.
    pub async fn delete(&self, caller: &Caller, id: i32) -> Result<ItemResult, AppError> {
        tag::DELETE.authorize(caller)?;

        if !TagRepository::new(self.db).delete(id).await? {
            return Ok(ItemResult::failure(MSG_NOT_FOUND));
        }

        tracing::info!("Deleted tag {}", id);

        Ok(ItemResult::ok())
    }
}
