use contracts::domain::menu_expense::aggregate::{
    MenuExpense, MenuExpenseInsert, MenuExpenseUpdate, TABLE,
};

use crate::shared::data::store::{table, Order};

pub async fn fetch_menu_expenses() -> Result<Vec<MenuExpense>, String> {
    table(TABLE).list_active(Order::Desc("created_at")).await
}

pub async fn add_menu_expense(insert: MenuExpenseInsert) -> Result<MenuExpense, String> {
    table(TABLE).insert(&insert).await
}

pub async fn update_menu_expense(id: &str, update: MenuExpenseUpdate) -> Result<MenuExpense, String> {
    table(TABLE).update(id, &update).await
}

pub async fn delete_menu_expense(id: &str) -> Result<(), String> {
    table(TABLE).soft_delete(id).await
}
