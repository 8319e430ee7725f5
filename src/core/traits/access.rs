/// Port for the access-control layer.
///
/// The core never decides who may read audit logs; it only honors
/// what the policy reports.
pub trait AccessPolicy: Send + Sync {
    /// The user whose records `session_user` is restricted to.
    ///
    /// `None` means unrestricted access. `Some(_)` means the caller may
    /// only see a filtered subset, which audit log reads refuse outright.
    fn user_for_filter(&self, session_user: &str) -> Option<String>;
}
