use contracts::domain::employments::aggregate::{Employment, EmploymentInsert, TABLE};

use crate::shared::data::store::{table, Order};

pub async fn fetch_employments() -> Result<Vec<Employment>, String> {
    table(TABLE).list_active(Order::Asc("name")).await
}

/// Reference-only collection: created from forms, never edited in a list.
pub async fn add_employment(name: String) -> Result<Employment, String> {
    table(TABLE).insert(&EmploymentInsert::new(name)).await
}
