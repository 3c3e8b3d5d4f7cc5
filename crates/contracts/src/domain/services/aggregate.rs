use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::areas::aggregate::AreaId;
use crate::domain::common::{Lifecycle, RecordId};
use crate::domain::users::aggregate::UserId;

pub const TABLE: &str = "services";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub Uuid);

impl ServiceId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for ServiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Service rendered to a user, attributed to an area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub user_id: UserId,
    #[serde(rename = "departament_id")]
    pub area_id: Option<AreaId>,
    pub description: String,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInsert {
    pub id: ServiceId,
    pub user_id: UserId,
    #[serde(rename = "departament_id")]
    pub area_id: AreaId,
    pub description: String,
    pub is_active: bool,
}

impl ServiceInsert {
    pub fn new(user_id: UserId, area_id: AreaId, description: String) -> Self {
        Self {
            id: ServiceId::new_v4(),
            user_id,
            area_id,
            description,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceUpdate {
    pub user_id: UserId,
    #[serde(rename = "departament_id")]
    pub area_id: AreaId,
    pub description: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ServiceUpdate {
    pub fn new(user_id: UserId, area_id: AreaId, description: String) -> Self {
        Self {
            user_id,
            area_id,
            description,
            updated_at: chrono::Utc::now(),
        }
    }
}
