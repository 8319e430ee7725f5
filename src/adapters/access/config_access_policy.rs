use crate::config::app_config::AccessSection;
use crate::core::traits::access::AccessPolicy;

/// Access policy backed by the `[access]` section of the config file.
///
/// Users listed in `admins` read audit logs unrestricted. Everybody else
/// is restricted to their own records. Without an admin list every user
/// is treated as an admin.
pub struct ConfigAccessPolicy {
    admins: Vec<String>,
}

impl ConfigAccessPolicy {
    pub fn new(admins: Vec<String>) -> Self {
        Self { admins }
    }

    /// Build the policy from an optional `[access]` section.
    pub fn from_config(section: Option<&AccessSection>) -> Self {
        Self::new(section.map(|s| s.admins.clone()).unwrap_or_default())
    }
}

impl AccessPolicy for ConfigAccessPolicy {
    fn user_for_filter(&self, session_user: &str) -> Option<String> {
        if self.admins.is_empty() || self.admins.iter().any(|a| a == session_user) {
            None
        } else {
            Some(session_user.to_string())
        }
    }
}
