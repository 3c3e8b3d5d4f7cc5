use contracts::domain::pathologies::aggregate::{Pathology, PathologyInsert, TABLE};

use crate::shared::data::store::{table, Order};

pub async fn fetch_pathologies() -> Result<Vec<Pathology>, String> {
    table(TABLE).list_active(Order::Asc("name")).await
}

/// Reference-only collection: created from forms, never edited in a list.
pub async fn add_pathology(name: String) -> Result<Pathology, String> {
    table(TABLE).insert(&PathologyInsert::new(name)).await
}
