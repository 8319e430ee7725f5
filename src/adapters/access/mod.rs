pub mod config_access_policy;
