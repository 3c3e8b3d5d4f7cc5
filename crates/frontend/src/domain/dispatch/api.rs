use contracts::domain::dispatch::aggregate::{Dispatch, DispatchInsert, DispatchUpdate, TABLE};

use crate::shared::data::store::{table, Order};

pub async fn fetch_dispatches() -> Result<Vec<Dispatch>, String> {
    table(TABLE).list_active(Order::Desc("created_at")).await
}

pub async fn add_dispatch(insert: DispatchInsert) -> Result<Dispatch, String> {
    table(TABLE).insert(&insert).await
}

pub async fn update_dispatch(id: &str, update: DispatchUpdate) -> Result<Dispatch, String> {
    table(TABLE).update(id, &update).await
}

pub async fn delete_dispatch(id: &str) -> Result<(), String> {
    table(TABLE).soft_delete(id).await
}
