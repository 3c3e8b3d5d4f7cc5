use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Lifecycle, RecordId};

pub const TABLE: &str = "pathologies";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathologyId(pub Uuid);

impl PathologyId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for PathologyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Pathology catalog entry, referenced from user records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pathology {
    pub id: PathologyId,
    pub name: String,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathologyInsert {
    pub id: PathologyId,
    pub name: String,
    pub is_active: bool,
}

impl PathologyInsert {
    pub fn new(name: String) -> Self {
        Self {
            id: PathologyId::new_v4(),
            name,
            is_active: true,
        }
    }
}
