use contracts::domain::products::aggregate::{Product, ProductInsert, ProductUpdate, TABLE};

use crate::shared::data::store::{table, Order};

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    table(TABLE).list_active(Order::Asc("name")).await
}

pub async fn add_product(insert: ProductInsert) -> Result<Product, String> {
    table(TABLE).insert(&insert).await
}

pub async fn update_product(id: &str, update: ProductUpdate) -> Result<Product, String> {
    table(TABLE).update(id, &update).await
}

pub async fn delete_product(id: &str) -> Result<(), String> {
    table(TABLE).soft_delete(id).await
}
