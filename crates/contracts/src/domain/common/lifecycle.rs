use serde::{Deserialize, Serialize};

/// Lifecycle columns shared by every table row.
///
/// Deletion is never physical: `is_active` is flipped to `false` and the row
/// stops appearing in reads. `updated_at` is only stamped by updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lifecycle {
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Some(chrono::Utc::now());
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lifecycle_is_active_and_untouched() {
        let lc = Lifecycle::new();
        assert!(lc.is_active);
        assert!(lc.updated_at.is_none());
    }

    #[test]
    fn deactivate_flips_the_flag_only() {
        let mut lc = Lifecycle::new();
        lc.deactivate();
        assert!(!lc.is_active);
        assert!(lc.updated_at.is_none());
    }

    #[test]
    fn touch_stamps_updated_at() {
        let mut lc = Lifecycle::new();
        lc.touch();
        assert!(lc.updated_at.is_some());
    }
}
