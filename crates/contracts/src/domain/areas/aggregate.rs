use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Lifecycle, RecordId};

// The remote table kept its historical spelling.
pub const TABLE: &str = "departaments";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AreaId(pub Uuid);

impl AreaId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for AreaId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Organizational area (kitchen, storage, dining hall, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, Serialize)]
pub struct AreaInsert {
    pub id: AreaId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

impl AreaInsert {
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: AreaId::new_v4(),
            name,
            description,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AreaUpdate {
    pub name: String,
    pub description: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl AreaUpdate {
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            name,
            description,
            updated_at: chrono::Utc::now(),
        }
    }
}
