// src/gate/mod.rs
//
// Authorization gate. Classifies each inbound request path against the
// route policy table and decides allow/redirect from the session state.
// Stateless: a pure function of (path, token validity).

pub mod middleware;
pub mod policy;

use std::sync::Arc;

use crate::auth::{Identity, SessionVerifier};

pub use middleware::authorization_gate;
pub use policy::{RouteAccess, RoutePolicy, RoutePolicyTable};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// What the gate sees of a request
#[derive(Debug, Clone, Copy)]
pub struct InboundRequest<'a> {
    pub path: &'a str,
    pub token: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Pass through, with the caller's identity when the session was valid
    Allow(Option<Identity>),
    Redirect(String),
}

/// Transition table for one request
pub fn decide(access: RouteAccess, identity: Option<Identity>, path: &str) -> GateDecision {
    match (access, identity) {
        (RouteAccess::MustBeAuthenticated, None) => GateDecision::Redirect(login_redirect(path)),
        (RouteAccess::MustBeAnonymous, Some(_)) => GateDecision::Redirect(HOME_PATH.to_string()),
        (_, identity) => GateDecision::Allow(identity),
    }
}

/// `/login?callbackUrl=<path>`. Slashes stay literal; they are legal in a query.
pub fn login_redirect(path: &str) -> String {
    let callback = urlencoding::encode(path).replace("%2F", "/");
    format!("{}?callbackUrl={}", LOGIN_PATH, callback)
}

#[derive(Clone)]
pub struct AuthorizationGate {
    policies: Arc<RoutePolicyTable>,
    verifier: SessionVerifier,
}

impl AuthorizationGate {
    pub fn new(policies: RoutePolicyTable, verifier: SessionVerifier) -> Self {
        Self {
            policies: Arc::new(policies),
            verifier,
        }
    }

    pub fn policies(&self) -> &RoutePolicyTable {
        &self.policies
    }

    /// Any doubt about the token means anonymous
    pub fn evaluate(&self, request: &InboundRequest<'_>) -> GateDecision {
        let access = self.policies.classify(request.path);
        let identity = self.verifier.verify(request.token);
        decide(access, identity, request.path)
    }
}
