//! Generic REST client for the remote relational store (PostgREST dialect).
//!
//! Every Record Collection talks to its table through the same four
//! operations: list the active rows, insert one, update one, soft-delete
//! one. Reads always filter on `is_active=eq.true`; deletes only flip that
//! flag, rows never leave the store.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config;
use crate::system::auth::storage;

/// Read ordering.
#[derive(Clone, Copy, Debug)]
pub enum Order {
    Asc(&'static str),
    Desc(&'static str),
}

impl Order {
    fn param(&self) -> String {
        match self {
            Order::Asc(column) => format!("{}.asc", column),
            Order::Desc(column) => format!("{}.desc", column),
        }
    }
}

/// One named table of the remote store.
#[derive(Clone, Copy, Debug)]
pub struct TableClient {
    table: &'static str,
}

pub fn table(table: &'static str) -> TableClient {
    TableClient { table }
}

impl TableClient {
    fn url(&self, query: &str) -> String {
        format!("{}?{}", config::rest_url(self.table), query)
    }

    // The session token when signed in, the public key otherwise.
    fn bearer() -> String {
        storage::get_access_token().unwrap_or_else(|| config::store().anon_key.clone())
    }

    /// `listActive`: every row with `is_active = true`, ordered.
    pub async fn list_active<T: DeserializeOwned>(&self, order: Order) -> Result<Vec<T>, String> {
        let url = self.url(&format!(
            "select=*&is_active=eq.true&order={}",
            order.param()
        ));
        let response = Request::get(&url)
            .header("apikey", &config::store().anon_key)
            .header("Authorization", &format!("Bearer {}", Self::bearer()))
            .send()
            .await
            .map_err(|e| format!("{}: {}", self.table, e))?;
        if !response.ok() {
            return Err(format!("{}: HTTP {}", self.table, response.status()));
        }
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| format!("{}: {}", self.table, e))
    }

    /// Insert one row and return the stored representation.
    pub async fn insert<T: DeserializeOwned>(&self, fields: &impl Serialize) -> Result<T, String> {
        let url = self.url("select=*");
        let response = Request::post(&url)
            .header("apikey", &config::store().anon_key)
            .header("Authorization", &format!("Bearer {}", Self::bearer()))
            .header("Prefer", "return=representation")
            .json(fields)
            .map_err(|e| format!("{}: {}", self.table, e))?
            .send()
            .await
            .map_err(|e| format!("{}: {}", self.table, e))?;
        if !response.ok() {
            return Err(format!("{}: HTTP {}", self.table, response.status()));
        }
        let mut rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| format!("{}: {}", self.table, e))?;
        rows.pop()
            .ok_or_else(|| format!("{}: la inserción no devolvió ninguna fila", self.table))
    }

    /// Update one row by id and return the stored representation.
    pub async fn update<T: DeserializeOwned>(
        &self,
        id: &str,
        fields: &impl Serialize,
    ) -> Result<T, String> {
        let url = self.url(&format!("id=eq.{}&select=*", urlencoding::encode(id)));
        let response = Request::patch(&url)
            .header("apikey", &config::store().anon_key)
            .header("Authorization", &format!("Bearer {}", Self::bearer()))
            .header("Prefer", "return=representation")
            .json(fields)
            .map_err(|e| format!("{}: {}", self.table, e))?
            .send()
            .await
            .map_err(|e| format!("{}: {}", self.table, e))?;
        if !response.ok() {
            return Err(format!("{}: HTTP {}", self.table, response.status()));
        }
        let mut rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| format!("{}: {}", self.table, e))?;
        rows.pop()
            .ok_or_else(|| format!("{}: fila no encontrada", self.table))
    }

    /// `softDelete`: flip `is_active`; subsequent reads exclude the row.
    pub async fn soft_delete(&self, id: &str) -> Result<(), String> {
        let url = self.url(&format!("id=eq.{}", urlencoding::encode(id)));
        let response = Request::patch(&url)
            .header("apikey", &config::store().anon_key)
            .header("Authorization", &format!("Bearer {}", Self::bearer()))
            .json(&serde_json::json!({ "is_active": false }))
            .map_err(|e| format!("{}: {}", self.table, e))?
            .send()
            .await
            .map_err(|e| format!("{}: {}", self.table, e))?;
        if !response.ok() {
            return Err(format!("{}: HTTP {}", self.table, response.status()));
        }
        Ok(())
    }
}
