use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::{
    entities::movie,
    error::AppResult,
    models::{CreateMovie, MovieId},
};

/// Data access for the `movies` table.
///
/// Holds the connection pool; each operation checks a connection out for
/// its own duration, so nothing is shared across concurrent requests.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Absence is returned as `None`, never as an error.
    pub async fn get(&self, id: MovieId) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn list_all(&self) -> AppResult<Vec<movie::Model>> {
        // Ascending auto-increment ids equal insertion order.
        Ok(movie::Entity::find()
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Persists the payload and returns the stored row, id populated.
    pub async fn insert(&self, payload: CreateMovie) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            id: Default::default(),
            name: Set(payload.name),
            year: Set(payload.year),
            note: Set(payload.note),
        };
        Ok(model.insert(&self.db).await?)
    }

    /// No existence check here; callers decide how to treat a missing id.
    pub async fn delete(&self, id: MovieId) -> AppResult<()> {
        movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
