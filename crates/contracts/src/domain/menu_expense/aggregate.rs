use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::areas::aggregate::AreaId;
use crate::domain::common::{Lifecycle, RecordId};

pub const TABLE: &str = "gasto_menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuExpenseId(pub Uuid);

impl MenuExpenseId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl RecordId for MenuExpenseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Product spent preparing the daily menu, charged to an area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuExpense {
    pub id: MenuExpenseId,
    pub product: String,
    pub input_quantity: i32,
    #[serde(rename = "departament_id")]
    pub area_id: Option<AreaId>,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuExpenseInsert {
    pub id: MenuExpenseId,
    pub product: String,
    pub input_quantity: i32,
    #[serde(rename = "departament_id")]
    pub area_id: AreaId,
    pub is_active: bool,
}

impl MenuExpenseInsert {
    pub fn new(product: String, input_quantity: i32, area_id: AreaId) -> Self {
        Self {
            id: MenuExpenseId::new_v4(),
            product,
            input_quantity,
            area_id,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuExpenseUpdate {
    pub product: String,
    pub input_quantity: i32,
    #[serde(rename = "departament_id")]
    pub area_id: AreaId,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl MenuExpenseUpdate {
    pub fn new(product: String, input_quantity: i32, area_id: AreaId) -> Self {
        Self {
            product,
            input_quantity,
            area_id,
            updated_at: chrono::Utc::now(),
        }
    }
}
