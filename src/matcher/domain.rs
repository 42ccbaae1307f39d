use super::SiteMatcher;
use crate::types::{reversed_labels, Site};

/// Number of agreeing labels required before a site is accepted. Keeps a bare
/// TLD like "com" from matching everything.
pub const MIN_MATCHING_LABELS: usize = 2;

/// Domain matcher - accepts stored sites that are the query domain or one of
/// its parent domains.
///
/// Both domains are split into labels and read TLD first:
///
/// ```
/// use browserpass_store::matcher::{DomainMatcher, SiteMatcher};
/// use browserpass_store::Site;
///
/// let matcher = DomainMatcher::new("my.example.org");
/// assert!(matcher.matches(&Site::from_domain("example.org")));
/// assert!(matcher.matches(&Site::from_domain("my.example.org")));
/// assert!(!matcher.matches(&Site::from_domain("other.example.org")));
/// assert!(!matcher.matches(&Site::from_domain("deep.my.example.org")));
/// ```
#[derive(Debug, Clone)]
pub struct DomainMatcher {
    /// Query labels, most general first
    query: Vec<String>,
    min: usize,
}

impl DomainMatcher {
    /// Create a new domain matcher for a query domain
    pub fn new(query: &str) -> Self {
        Self {
            query: reversed_labels(query)
                .into_iter()
                .map(String::from)
                .collect(),
            min: MIN_MATCHING_LABELS,
        }
    }

    /// Check a single stored domain against the query
    pub fn matches_domain(&self, domain: &str) -> bool {
        let candidate = reversed_labels(domain);
        sub_match(&self.query, &candidate, self.min)
    }
}

impl SiteMatcher for DomainMatcher {
    fn matches(&self, site: &Site) -> bool {
        self.matches_domain(&site.domain)
    }
}

/// Check whether `candidate` agrees with `query` on at least `min` labels.
///
/// Positions are compared from the last candidate label back toward the TLD.
/// The first mismatch rejects; reaching `min` matches accepts without looking
/// at the remaining labels.
fn sub_match<Q: AsRef<str>>(query: &[Q], candidate: &[&str], min: usize) -> bool {
    if candidate.len() < min || query.len() < candidate.len() {
        return false;
    }

    let mut matches = 0;
    for i in (0..candidate.len()).rev() {
        if candidate[i] != query[i].as_ref() {
            return false;
        }

        matches += 1;
        if matches >= min {
            return true;
        }
    }

    false
}

/// Select the sites relevant to `query`, most specific first.
///
/// Specificity is the length of the domain string; sites of equal length keep
/// their input order.
pub fn match_sites(query: &str, sites: Vec<Site>) -> Vec<Site> {
    let matcher = DomainMatcher::new(query);
    let mut results: Vec<Site> = sites
        .into_iter()
        .filter(|site| matcher.matches(site))
        .collect();

    results.sort_by(|a, b| b.domain.len().cmp(&a.domain.len()));
    results
}
