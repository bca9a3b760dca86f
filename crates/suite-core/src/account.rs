//! The account shown in the status panel.

/// Account information available to the status panel.
///
/// A linked account always has both a display name and a user id. Partial
/// information is collapsed into [`Account::Anonymous`] by
/// [`Account::from_parts`], so the connected-account panel can never be
/// rendered with a missing half.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Account {
    /// No connected account.
    #[default]
    Anonymous,
    /// A connected account with its display name and numeric user id.
    Linked { name: String, user_id: String },
}

impl Account {
    /// Build a linked account.
    pub fn linked(name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::Linked {
            name: name.into(),
            user_id: user_id.into(),
        }
    }

    /// Build an account from two optional parts.
    ///
    /// Returns [`Account::Linked`] only when both parts are present and
    /// non-empty; any other combination yields [`Account::Anonymous`].
    pub fn from_parts(name: Option<&str>, user_id: Option<&str>) -> Self {
        match (name, user_id) {
            (Some(name), Some(user_id)) if !name.is_empty() && !user_id.is_empty() => {
                Self::linked(name, user_id)
            }
            _ => Self::Anonymous,
        }
    }

    /// Returns `true` for [`Account::Linked`].
    pub fn is_linked(&self) -> bool {
        matches!(self, Self::Linked { .. })
    }

    /// Profile link for a linked account: `base` followed by the user id.
    pub fn profile_link(&self, base: &str) -> Option<String> {
        match self {
            Self::Anonymous => None,
            Self::Linked { user_id, .. } => Some(format!("{base}{user_id}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn both_parts_link_the_account() {
        let account = Account::from_parts(Some("Budi"), Some("1000123"));
        assert_eq!(account, Account::linked("Budi", "1000123"));
        assert!(account.is_linked());
    }

    #[test]
    fn partial_parts_stay_anonymous() {
        assert_eq!(Account::from_parts(Some("Budi"), None), Account::Anonymous);
        assert_eq!(Account::from_parts(None, Some("1000123")), Account::Anonymous);
        assert_eq!(Account::from_parts(None, None), Account::Anonymous);
    }

    #[test]
    fn empty_parts_count_as_missing() {
        assert_eq!(Account::from_parts(Some(""), Some("1")), Account::Anonymous);
        assert_eq!(Account::from_parts(Some("Budi"), Some("")), Account::Anonymous);
    }

    #[test]
    fn profile_link_appends_user_id() {
        let account = Account::linked("Budi", "1000123");
        assert_eq!(
            account.profile_link("https://web.facebook.com/").as_deref(),
            Some("https://web.facebook.com/1000123")
        );
        assert_eq!(Account::Anonymous.profile_link("https://x/"), None);
    }
}
