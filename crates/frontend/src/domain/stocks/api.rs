use contracts::domain::stocks::aggregate::{StockItem, StockItemInsert, StockItemUpdate, TABLE};

use crate::shared::data::store::{table, Order};

pub async fn fetch_stock() -> Result<Vec<StockItem>, String> {
    table(TABLE).list_active(Order::Asc("id")).await
}

pub async fn add_stock_item(insert: StockItemInsert) -> Result<StockItem, String> {
    table(TABLE).insert(&insert).await
}

pub async fn update_stock_item(id: &str, update: StockItemUpdate) -> Result<StockItem, String> {
    table(TABLE).update(id, &update).await
}

pub async fn delete_stock_item(id: &str) -> Result<(), String> {
    table(TABLE).soft_delete(id).await
}
