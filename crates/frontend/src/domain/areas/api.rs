use contracts::domain::areas::aggregate::{Area, AreaInsert, AreaUpdate, TABLE};

use crate::shared::data::store::{table, Order};

pub async fn fetch_areas() -> Result<Vec<Area>, String> {
    table(TABLE).list_active(Order::Asc("id")).await
}

pub async fn add_area(name: String, description: Option<String>) -> Result<Area, String> {
    table(TABLE).insert(&AreaInsert::new(name, description)).await
}

pub async fn update_area(id: &str, update: AreaUpdate) -> Result<Area, String> {
    table(TABLE).update(id, &update).await
}

pub async fn delete_area(id: &str) -> Result<(), String> {
    table(TABLE).soft_delete(id).await
}
