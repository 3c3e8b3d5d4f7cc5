pub mod lifecycle;
pub mod record_id;

pub use lifecycle::Lifecycle;
pub use record_id::RecordId;
