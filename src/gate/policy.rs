// src/gate/policy.rs
// Route policy table: path prefix -> required authentication state

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteAccess {
    MustBeAuthenticated,
    MustBeAnonymous,
    Unrestricted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePolicy {
    pub prefix: String,
    pub access: RouteAccess,
}

impl RoutePolicy {
    pub fn new(prefix: impl Into<String>, access: RouteAccess) -> Self {
        Self {
            prefix: prefix.into(),
            access,
        }
    }
}

/// Ordered rules; first prefix match wins, no match is unrestricted.
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct RoutePolicyTable {
    rules: Vec<RoutePolicy>,
}

impl RoutePolicyTable {
    pub fn new(rules: Vec<RoutePolicy>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RoutePolicy] {
        &self.rules
    }

    pub fn classify(&self, path: &str) -> RouteAccess {
        self.rules
            .iter()
            .find(|rule| path.starts_with(rule.prefix.as_str()))
            .map(|rule| rule.access)
            .unwrap_or(RouteAccess::Unrestricted)
    }
}

impl Default for RoutePolicyTable {
    fn default() -> Self {
        Self::new(vec![
            RoutePolicy::new("/upload", RouteAccess::MustBeAuthenticated),
            RoutePolicy::new("/login", RouteAccess::MustBeAnonymous),
            RoutePolicy::new("/register", RouteAccess::MustBeAnonymous),
        ])
    }
}
