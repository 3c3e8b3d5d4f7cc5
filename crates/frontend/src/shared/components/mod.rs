pub mod confirm;
pub mod data_table;
pub mod date_range_filter;
pub mod export_preview;
pub mod form_modal;
pub mod pagination_controls;
pub mod search_input;
