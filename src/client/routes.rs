// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Path-based request classification.
//!
//! Both checks look only at the URL path, never at session state, so two
//! requests in flight at once cannot influence each other's credentials.

use crate::models::Namespace;

/// Path segment marking the admin API namespace.
pub const ADMIN_SEGMENT: &str = "admin";

/// Path segments marking authentication endpoints.
pub const AUTH_SEGMENTS: &[&str] = &[
    "auth",
    "login",
    "register",
    "signup",
    "verify",
    "verify-email",
    "verify-otp",
    "forgot-password",
    "reset-password",
];

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Admin if any path segment is `admin`, user otherwise.
pub fn classify_route(path: &str) -> Namespace {
    if segments(path).any(|s| s.eq_ignore_ascii_case(ADMIN_SEGMENT)) {
        Namespace::Admin
    } else {
        Namespace::User
    }
}

/// True if the path targets a login/registration style endpoint.
pub fn is_auth_endpoint(path: &str) -> bool {
    segments(path).any(|s| AUTH_SEGMENTS.iter().any(|a| s.eq_ignore_ascii_case(a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_route() {
        assert_eq!(classify_route("/payments"), Namespace::User);
        assert_eq!(classify_route("/api/v1/payments"), Namespace::User);
        assert_eq!(classify_route("/admin/payments"), Namespace::Admin);
        assert_eq!(classify_route("/api/v1/admin/withdrawals/3"), Namespace::Admin);
        assert_eq!(classify_route("/admin"), Namespace::Admin);
    }

    #[test]
    fn test_classify_matches_whole_segments_only() {
        assert_eq!(classify_route("/administrators"), Namespace::User);
        assert_eq!(classify_route("/tasks/badmin"), Namespace::User);
    }

    #[test]
    fn test_is_auth_endpoint() {
        assert!(is_auth_endpoint("/auth/login"));
        assert!(is_auth_endpoint("/api/v1/auth/register"));
        assert!(is_auth_endpoint("/admin/login"));
        assert!(is_auth_endpoint("/api/v1/auth/verify-email"));
        assert!(!is_auth_endpoint("/payments"));
        assert!(!is_auth_endpoint("/admin/payments"));
        assert!(!is_auth_endpoint("/authors"));
    }
}
