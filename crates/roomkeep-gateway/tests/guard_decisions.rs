#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use roomkeep_core::rbac::{Role, Session};
use roomkeep_gateway::guard::{decide, GuardDecision};
use roomkeep_gateway::session::bearer_token;

#[test]
fn public_paths_need_no_session() {
    assert_eq!(decide(None, "/healthz"), GuardDecision::Allow);
    assert_eq!(decide(None, "/"), GuardDecision::Allow);
}

#[test]
fn protected_paths_without_session() {
    assert_eq!(decide(None, "/rooms"), GuardDecision::Unauthenticated);
    assert_eq!(decide(None, "/admin/metrics"), GuardDecision::Unauthenticated);
}

#[test]
fn role_checks() {
    let user = Session::new("u-1", Role::User);
    let support = Session::new("u-2", Role::Support);
    let admin = Session::new("u-3", Role::Admin);

    assert_eq!(decide(Some(&user), "/rooms/room-1"), GuardDecision::Allow);
    assert_eq!(decide(Some(&user), "/meters/room-1"), GuardDecision::Forbidden);
    assert_eq!(decide(Some(&support), "/meters/room-1"), GuardDecision::Allow);
    assert_eq!(decide(Some(&support), "/admin/users"), GuardDecision::Forbidden);
    assert_eq!(decide(Some(&admin), "/admin/users/u-1/role"), GuardDecision::Allow);
    assert_eq!(decide(Some(&admin), "/nowhere"), GuardDecision::Forbidden);
}

#[test]
fn bearer_token_parsing() {
    let mut h = HeaderMap::new();
    assert_eq!(bearer_token(&h), None);

    h.insert(AUTHORIZATION, HeaderValue::from_static("Bearer admin-dev"));
    assert_eq!(bearer_token(&h), Some("admin-dev"));

    h.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
    assert_eq!(bearer_token(&h), None);

    h.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
    assert_eq!(bearer_token(&h), None);
}

#[test]
fn bearer_scheme_is_case_insensitive() {
    let mut h = HeaderMap::new();
    for value in ["bearer user-dev", "BEARER user-dev", "BeArEr  user-dev"] {
        h.insert(AUTHORIZATION, HeaderValue::from_static(value));
        assert_eq!(bearer_token(&h), Some("user-dev"), "header={value}");
    }

    h.insert(AUTHORIZATION, HeaderValue::from_static("Bearerx user-dev"));
    assert_eq!(bearer_token(&h), None);
}
