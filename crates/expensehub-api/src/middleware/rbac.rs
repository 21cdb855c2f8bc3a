//! Route → feature registry.
//!
//! Every gated endpoint is listed with the feature its handler checks.
//! The router validates these keys against the permission table at
//! startup, and the admin permissions endpoint publishes them.

use serde::Serialize;

use expensehub_auth::{AuthzError, Feature, RbacPolicies};

/// One gated endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GatedRoute {
    /// HTTP method.
    pub method: &'static str,
    /// Path under `/api`.
    pub path: &'static str,
    /// Feature checked before the handler runs.
    pub feature: Feature,
    /// Whether an ownership check follows the feature check.
    pub ownership: bool,
}

const fn route(method: &'static str, path: &'static str, feature: Feature) -> GatedRoute {
    GatedRoute {
        method,
        path,
        feature,
        ownership: false,
    }
}

const fn owned(method: &'static str, path: &'static str, feature: Feature) -> GatedRoute {
    GatedRoute {
        method,
        path,
        feature,
        ownership: true,
    }
}

/// All feature-gated routes.
pub const GATED_ROUTES: &[GatedRoute] = &[
    route("GET", "/auth/me", Feature::ViewDashboard),
    route("GET", "/dashboard", Feature::ViewDashboard),
    route("GET", "/expenses", Feature::ViewExpenses),
    route("POST", "/expenses", Feature::CreateExpense),
    owned("GET", "/expenses/{id}", Feature::ViewExpenses),
    owned("PUT", "/expenses/{id}", Feature::ViewExpenses),
    owned("DELETE", "/expenses/{id}", Feature::ViewExpenses),
    route("GET", "/categories", Feature::ViewCategories),
    route("POST", "/categories", Feature::CreateCategory),
    owned("GET", "/categories/{id}", Feature::ViewCategories),
    owned("PUT", "/categories/{id}", Feature::ViewCategories),
    owned("DELETE", "/categories/{id}", Feature::ViewCategories),
    route("GET", "/reports/summary", Feature::ViewReports),
    route("GET", "/reports/export", Feature::ExportReports),
    owned("GET", "/users/{id}", Feature::ViewDashboard),
    route("GET", "/admin/users", Feature::ManageUsers),
    route("PUT", "/admin/users/{id}/status", Feature::ManageUsers),
    route("PUT", "/admin/users/{id}/role", Feature::ManageUsers),
    route("DELETE", "/admin/users/{id}", Feature::ManageUsers),
    route("GET", "/admin/permissions", Feature::ManageUsers),
];

/// Fails if any gated route names a feature missing from the table.
pub fn validate_routes(policies: &RbacPolicies) -> Result<(), AuthzError> {
    policies.validate_features(GATED_ROUTES.iter().map(|r| r.feature.as_str()))
}
