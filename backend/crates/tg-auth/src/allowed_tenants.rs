use crate::DEFAULT_ALLOWED_TENANTS;

use std::collections::BTreeSet;

/// Read-only set of tenant domains admitted by the gate
///
/// Membership is an exact, case-sensitive comparison against the domain
/// taken from `userDetails`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedTenants {
    domains: BTreeSet<String>,
}

impl AllowedTenants {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }
}

impl Default for AllowedTenants {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_TENANTS)
    }
}
