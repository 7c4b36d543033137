//! Entity to transfer object mapping.
//!
//! `MapFrom` projects a loaded domain object onto its DTO, following only the relationship
//! paths named by an `IncludeTree`. Relationship fields that are not included, or were not
//! loaded, stay `None` and are omitted from the JSON body. An included collection is always
//! `Some`, empty or not.
//!
//! `MapTo` writes a DTO back onto a SeaORM `ActiveModel`. Only fields the caller marked as
//! changed are written, identity columns are only written while the row is new, and a
//! changed `null` on a required column is rejected.

pub mod context;
pub mod include_tree;

pub use context::MappingContext;
pub use include_tree::IncludeTree;

use sea_orm::{ActiveValue, Value};

use crate::{model::tracked::Tracked, server::error::mapping::MappingError};

pub trait MapFrom<T>: Default {
    fn map_from(&mut self, obj: &T, ctx: &MappingContext, tree: &IncludeTree);
}

pub trait MapTo<E> {
    fn map_to(&self, entity: &mut E, ctx: &MappingContext) -> Result<(), MappingError>;
}

/// Maps an optional object, `None` maps to `None`.
pub fn map_to_dto<T, D>(obj: Option<&T>, ctx: &MappingContext, tree: &IncludeTree) -> Option<D>
where
    D: MapFrom<T>,
{
    obj.map(|obj| {
        let mut dto = D::default();
        dto.map_from(obj, ctx, tree);
        dto
    })
}

/// Maps every element, preserving order.
pub fn map_collection<T, D>(objs: &[T], ctx: &MappingContext, tree: &IncludeTree) -> Vec<D>
where
    D: MapFrom<T>,
{
    objs.iter()
        .filter_map(|obj| map_to_dto(Some(obj), ctx, tree))
        .collect()
}

/// Applies `dto` to `entity`, rejecting a missing target.
pub fn map_to_entity<D, E>(
    dto: &D,
    entity: Option<&mut E>,
    ctx: &MappingContext,
) -> Result<(), MappingError>
where
    D: MapTo<E>,
{
    let entity = entity.ok_or(MappingError::NullEntity)?;
    dto.map_to(entity, ctx)
}

/// Maps a single relationship when `field` is included and the target was loaded.
pub fn map_reference<T, D>(
    field: &str,
    target: Option<&T>,
    ctx: &MappingContext,
    tree: &IncludeTree,
) -> Option<D>
where
    D: MapFrom<T>,
{
    let subtree = tree.child(field)?;
    map_to_dto(target, ctx, subtree)
}

/// Maps a collection relationship when `field` is included and the rows were loaded.
pub fn map_many<T, D>(
    field: &str,
    targets: Option<&Vec<T>>,
    ctx: &MappingContext,
    tree: &IncludeTree,
) -> Option<Vec<D>>
where
    D: MapFrom<T>,
{
    let subtree = tree.child(field)?;
    targets.map(|targets| map_collection(targets, ctx, subtree))
}

/// Writes a changed value onto a required column.
pub fn apply_required<T>(
    field: &Tracked<T>,
    name: &'static str,
    target: &mut ActiveValue<T>,
) -> Result<(), MappingError>
where
    T: Into<Value> + Clone + PartialEq,
{
    match field.changed_value() {
        None => Ok(()),
        Some(None) => Err(MappingError::RequiredField(name)),
        Some(Some(value)) => {
            target.set_if_not_equals(value.clone());
            Ok(())
        }
    }
}

/// Writes a changed value, including `null`, onto a nullable column.
pub fn apply_optional<T>(field: &Tracked<T>, target: &mut ActiveValue<Option<T>>)
where
    T: Clone + PartialEq,
    Option<T>: Into<Value>,
{
    if let Some(value) = field.changed_value() {
        target.set_if_not_equals(value.clone());
    }
}

/// Writes an identity value only while the row has no identity yet.
pub fn apply_identity<T>(field: &Tracked<T>, target: &mut ActiveValue<T>)
where
    T: Into<Value> + Clone,
{
    if !target.is_not_set() {
        return;
    }
    if let Some(Some(value)) = field.changed_value() {
        *target = ActiveValue::Set(value.clone());
    }
}

/// Value an active model column will hold after saving, `None` while unset.
pub fn current_value<T>(value: &ActiveValue<T>) -> Option<&T>
where
    T: Into<Value>,
{
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

#[cfg(test)]
mod test;
