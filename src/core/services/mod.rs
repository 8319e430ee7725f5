pub mod audit_log_service;
pub mod log_filter;
pub mod log_lister;
pub mod rotation_pattern;
pub mod view_assembler;
