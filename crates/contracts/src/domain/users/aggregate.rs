use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Lifecycle, RecordId};
use crate::domain::employments::aggregate::EmploymentId;
use crate::domain::pathologies::aggregate::PathologyId;

pub const TABLE: &str = "users";

/// Unique identifier of a canteen user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for UserId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Person served by the canteen (beneficiary), as stored in `users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub dni: String,
    pub gender: String,
    pub contact: Option<String>,
    pub age: i32,
    pub employment_id: Option<EmploymentId>,
    pub pathology_id: Option<PathologyId>,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

/// Insert payload. `created_at` is assigned by the store.
#[derive(Debug, Clone, Serialize)]
pub struct UserInsert {
    pub id: UserId,
    pub name: String,
    pub dni: String,
    pub gender: String,
    pub contact: Option<String>,
    pub age: i32,
    pub employment_id: Option<EmploymentId>,
    pub pathology_id: Option<PathologyId>,
    pub is_active: bool,
}

impl UserInsert {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        dni: String,
        gender: String,
        contact: Option<String>,
        age: i32,
        employment_id: Option<EmploymentId>,
        pathology_id: Option<PathologyId>,
    ) -> Self {
        Self {
            id: UserId::new_v4(),
            name,
            dni,
            gender,
            contact,
            age,
            employment_id,
            pathology_id,
            is_active: true,
        }
    }
}

/// Update payload; stamps `updated_at`.
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub dni: String,
    pub gender: String,
    pub contact: Option<String>,
    pub age: i32,
    pub employment_id: Option<EmploymentId>,
    pub pathology_id: Option<PathologyId>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl UserUpdate {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        dni: String,
        gender: String,
        contact: Option<String>,
        age: i32,
        employment_id: Option<EmploymentId>,
        pathology_id: Option<PathologyId>,
    ) -> Self {
        Self {
            name,
            dni,
            gender,
            contact,
            age,
            employment_id,
            pathology_id,
            updated_at: chrono::Utc::now(),
        }
    }
}
