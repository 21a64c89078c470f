use serde::{Deserialize, Serialize};

use crate::entities::movie;

/// Key for movie records. Assigned by the store, never chosen by clients.
pub type MovieId = i32;

/// Full movie record as it appears in every response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub year: i32,
    pub note: Option<String>,
}

/// The subset of fields a client supplies to create a record.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateMovie {
    pub name: String,
    pub year: i32,
    pub note: Option<String>,
}

impl From<movie::Model> for Movie {
    fn from(m: movie::Model) -> Self {
        Self { id: m.id, name: m.name, year: m.year, note: m.note }
    }
}
