use crate::error::{StoreError, StoreResult};

pub trait Identifiable {
    fn id(&self) -> Option<i64>;
}

/// CRUD over one kind of entity, keyed by an integer identity.
///
/// `update` and `delete` report success whenever the statement runs, even if
/// no row carried the given id.
pub trait Repository<T: Identifiable> {
    fn get_by_id(&self, id: i64) -> StoreResult<T>;
    fn get_all(&self) -> StoreResult<Vec<T>>;
    /// Persists `entity` and writes the generated id back onto it.
    fn add(&self, entity: &mut T) -> StoreResult<()>;
    fn update(&self, entity: &T) -> StoreResult<()>;
    fn delete(&self, id: i64) -> StoreResult<()>;
    fn find_by_unique_column(&self, value: &str) -> StoreResult<T>;
    fn is_empty(&self) -> bool;

    fn delete_entity(&self, entity: &T) -> StoreResult<()> {
        let id = entity.id().ok_or(StoreError::DeleteFailure)?;
        self.delete(id)
    }
}
