use contracts::domain::services::aggregate::{Service, ServiceInsert, ServiceUpdate, TABLE};

use crate::shared::data::store::{table, Order};

pub async fn fetch_services() -> Result<Vec<Service>, String> {
    table(TABLE).list_active(Order::Asc("id")).await
}

pub async fn add_service(insert: ServiceInsert) -> Result<Service, String> {
    table(TABLE).insert(&insert).await
}

pub async fn update_service(id: &str, update: ServiceUpdate) -> Result<Service, String> {
    table(TABLE).update(id, &update).await
}

pub async fn delete_service(id: &str) -> Result<(), String> {
    table(TABLE).soft_delete(id).await
}
