use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Lifecycle, RecordId};

pub const TABLE: &str = "productos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Product catalog entry. Movement tables reference products by name,
/// not by id, so renaming a product does not rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductInsert {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl ProductInsert {
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: ProductId::new_v4(),
            name,
            description,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ProductUpdate {
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            name,
            description,
            updated_at: chrono::Utc::now(),
        }
    }
}
