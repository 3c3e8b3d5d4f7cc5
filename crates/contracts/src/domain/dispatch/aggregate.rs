use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::areas::aggregate::AreaId;
use crate::domain::common::{Lifecycle, RecordId};

pub const TABLE: &str = "despacho";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DispatchId(pub Uuid);

impl DispatchId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for DispatchId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Dispatch entry: a quantity of a product handed out to an area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispatch {
    pub id: DispatchId,
    pub product: String,
    pub input_quantity: i32,
    #[serde(rename = "departament_id")]
    pub area_id: Option<AreaId>,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchInsert {
    pub id: DispatchId,
    pub product: String,
    pub input_quantity: i32,
    #[serde(rename = "departament_id")]
    pub area_id: AreaId,
    pub is_active: bool,
}

impl DispatchInsert {
    pub fn new(product: String, input_quantity: i32, area_id: AreaId) -> Self {
        Self {
            id: DispatchId::new_v4(),
            product,
            input_quantity,
            area_id,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchUpdate {
    pub product: String,
    pub input_quantity: i32,
    #[serde(rename = "departament_id")]
    pub area_id: AreaId,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl DispatchUpdate {
    pub fn new(product: String, input_quantity: i32, area_id: AreaId) -> Self {
        Self {
            product,
            input_quantity,
            area_id,
            updated_at: chrono::Utc::now(),
        }
    }
}
