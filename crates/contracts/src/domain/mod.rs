pub mod common;

pub mod areas;
pub mod dispatch;
pub mod employments;
pub mod menu_expense;
pub mod pathologies;
pub mod products;
pub mod services;
pub mod stocks;
pub mod users;
