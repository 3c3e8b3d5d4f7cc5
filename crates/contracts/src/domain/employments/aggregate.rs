use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Lifecycle, RecordId};

pub const TABLE: &str = "employments";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmploymentId(pub Uuid);

impl EmploymentId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for EmploymentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Occupation catalog entry, referenced from user records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employment {
    pub id: EmploymentId,
    pub name: String,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmploymentInsert {
    pub id: EmploymentId,
    pub name: String,
    pub is_active: bool,
}

impl EmploymentInsert {
    pub fn new(name: String) -> Self {
        Self {
            id: EmploymentId::new_v4(),
            name,
            is_active: true,
        }
    }
}
