pub mod filter_criteria;
pub mod log_file_name;
pub mod log_view;
