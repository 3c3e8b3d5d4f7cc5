use contracts::domain::users::aggregate::{User, UserInsert, UserUpdate, TABLE};

use crate::shared::data::store::{table, Order};

pub async fn fetch_users() -> Result<Vec<User>, String> {
    table(TABLE).list_active(Order::Asc("id")).await
}

pub async fn add_user(insert: UserInsert) -> Result<User, String> {
    table(TABLE).insert(&insert).await
}

pub async fn update_user(id: &str, update: UserUpdate) -> Result<User, String> {
    table(TABLE).update(id, &update).await
}

pub async fn delete_user(id: &str) -> Result<(), String> {
    table(TABLE).soft_delete(id).await
}
