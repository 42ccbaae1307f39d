/// File extension carried by every credential file in the store
pub const CREDENTIAL_EXTENSION: &str = ".gpg";

/// A domain directory and the users stored for it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Site {
    /// Directory base name, e.g. "sub.domain.tld"
    pub domain: String,
    /// Credential file names with the extension trimmed, in listing order
    pub users: Vec<String>,
}

impl Site {
    /// Create a new site
    pub fn new(domain: impl Into<String>, users: Vec<String>) -> Self {
        Self {
            domain: domain.into(),
            users,
        }
    }

    /// Create a site with no users
    pub fn from_domain(domain: impl Into<String>) -> Self {
        Self::new(domain, Vec::new())
    }

    /// Store items for this site, formatted as "domain/user"
    pub fn logins(&self) -> impl Iterator<Item = String> + '_ {
        self.users
            .iter()
            .map(move |user| format!("{}/{}", self.domain, user))
    }
}

/// Split a domain into labels, most general label first.
///
/// "sub.domain.tld" becomes ["tld", "domain", "sub"]. Empty labels from
/// malformed input are kept as-is.
pub fn reversed_labels(domain: &str) -> Vec<&str> {
    domain.rsplit('.').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_labels() {
        assert_eq!(reversed_labels("sub.domain.tld"), vec!["tld", "domain", "sub"]);
        assert_eq!(reversed_labels("localhost"), vec!["localhost"]);
        assert_eq!(reversed_labels("a..b"), vec!["b", "", "a"]);
        assert_eq!(reversed_labels(""), vec![""]);
    }

    #[test]
    fn test_logins_keep_user_order() {
        let site = Site::new("foo.bar", vec!["u2".into(), "u1".into()]);
        let logins: Vec<String> = site.logins().collect();
        assert_eq!(logins, vec!["foo.bar/u2", "foo.bar/u1"]);
    }

    #[test]
    fn test_site_without_users_has_no_logins() {
        assert_eq!(Site::from_domain("foo.bar").logins().count(), 0);
    }
}
