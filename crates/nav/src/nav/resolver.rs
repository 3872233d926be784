//! Role-aware navigation resolver.
//!
//! Pure mapping from (account type, admin flag, authentication state) to an
//! ordered list of navigation sections. Every call builds a fresh structure
//! from the inputs alone; nothing is cached or shared across calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::routes;

/// A single navigation entry with a display title and target route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Human-readable title, unique within its section.
    pub title: String,
    /// Target route identifier (opaque here, resolved by the router).
    pub path: String,
}

impl NavItem {
    fn new(title: &str, path: &str) -> Self {
        Self {
            title: title.to_string(),
            path: path.to_string(),
        }
    }
}

/// A titled group of navigation items rendered together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Section heading, unique within the resolved set.
    pub subheader: String,
    /// Ordered items, never empty.
    pub items: Vec<NavItem>,
}

/// Inputs the resolver branches on.
#[derive(Debug, Clone, Deserialize)]
pub struct NavContext {
    /// Account type as reported by the account service. Only "business" and
    /// "organization" are recognized; anything else (or absence) is treated
    /// as an individual account.
    #[serde(default)]
    pub account_type: Option<String>,

    /// Whether the user holds the admin role. Only consulted for
    /// business-like accounts.
    #[serde(default)]
    pub is_admin: bool,

    /// Whether the user is signed in. Guests additionally see the public
    /// landing entry.
    #[serde(default = "default_true")]
    pub authenticated: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NavContext {
    fn default() -> Self {
        Self {
            account_type: None,
            is_admin: false,
            authenticated: true,
        }
    }
}

/// Account classification, resolved once per call.
///
/// Unrecognized or absent account types fall through to
/// [`AccountKind::Individual`]; there is no rejection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// "business" or "organization" accounts; navigation is admin-gated.
    Business,
    /// Everything else. The admin flag has no effect here.
    Individual,
}

impl AccountKind {
    /// Classify an account type string.
    pub fn classify(account_type: Option<&str>) -> Self {
        match account_type {
            Some("business" | "organization") => Self::Business,
            _ => Self::Individual,
        }
    }
}

/// The three entries every account sees, in fixed order.
///
/// Built fresh per call so callers can mutate their copy without corrupting
/// a shared canonical list.
fn base_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Assistant", routes::DASHBOARD_ROOT),
        NavItem::new("Knowledge Base", routes::KNOWLEDGE_BASE),
        NavItem::new("Knowledge Search", routes::KNOWLEDGE_BASE_SEARCH),
    ]
}

/// Resolve the navigation set for a user.
///
/// The first section is always "Overview" with the base items; guests get a
/// "Landing" entry prepended. At most one role section follows:
/// business/organization admins get "Administration", individual accounts get
/// "Settings" (admin flag ignored), and business non-admins see Overview
/// only. Total over the input domain — there is no failure mode.
pub fn resolve(ctx: &NavContext) -> Vec<NavSection> {
    let kind = AccountKind::classify(ctx.account_type.as_deref());

    let mut overview_items = base_items();
    if !ctx.authenticated {
        overview_items.insert(0, NavItem::new("Landing", routes::AGENT_LANDING));
    }

    let mut sections = vec![NavSection {
        subheader: "Overview".to_string(),
        items: overview_items,
    }];

    match kind {
        AccountKind::Business if ctx.is_admin => sections.push(NavSection {
            subheader: "Administration".to_string(),
            items: vec![NavItem::new(
                "Connector Settings",
                routes::CONNECTOR_SETTINGS_COMPANY,
            )],
        }),
        AccountKind::Individual => sections.push(NavSection {
            subheader: "Settings".to_string(),
            items: vec![NavItem::new(
                "Connector Settings",
                routes::CONNECTOR_SETTINGS_INDIVIDUAL,
            )],
        }),
        // Business non-admins see Overview only.
        AccountKind::Business => {}
    }

    debug!(
        sections = sections.len(),
        account_kind = ?kind,
        authenticated = ctx.authenticated,
        "resolved dashboard navigation"
    );

    sections
}

/// Legacy fixed navigation set.
///
/// Frozen snapshot from before role-aware resolution: "Overview" with the
/// base items only, never a role section. Diverges from [`resolve`] on
/// purpose; consumers of the old surface depend on the exact shape. Still
/// constructed fresh per call rather than returned as a shared constant.
pub fn default_navigation() -> Vec<NavSection> {
    vec![NavSection {
        subheader: "Overview".to_string(),
        items: base_items(),
    }]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn classify_recognized_types() {
        assert_eq!(AccountKind::classify(Some("business")), AccountKind::Business);
        assert_eq!(
            AccountKind::classify(Some("organization")),
            AccountKind::Business
        );
    }

    #[test]
    fn classify_falls_through_to_individual() {
        assert_eq!(AccountKind::classify(None), AccountKind::Individual);
        assert_eq!(AccountKind::classify(Some("personal")), AccountKind::Individual);
        assert_eq!(AccountKind::classify(Some("")), AccountKind::Individual);
        // Matching is exact, not case-insensitive.
        assert_eq!(AccountKind::classify(Some("Business")), AccountKind::Individual);
    }

    #[test]
    fn context_default_is_authenticated_individual() {
        let ctx = NavContext::default();
        assert_eq!(ctx.account_type, None);
        assert!(!ctx.is_admin);
        assert!(ctx.authenticated);
    }

    #[test]
    fn context_deserializes_with_defaults() {
        let ctx: NavContext = serde_json::from_str("{}").unwrap();
        assert_eq!(ctx.account_type, None);
        assert!(!ctx.is_admin);
        assert!(ctx.authenticated);

        let ctx: NavContext =
            serde_json::from_str(r#"{"account_type": "business", "is_admin": true}"#).unwrap();
        assert_eq!(ctx.account_type.as_deref(), Some("business"));
        assert!(ctx.is_admin);
        assert!(ctx.authenticated);
    }

    #[test]
    fn default_navigation_is_overview_with_base_items() {
        let nav = default_navigation();
        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].subheader, "Overview");
        let titles: Vec<&str> = nav[0].items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Assistant", "Knowledge Base", "Knowledge Search"]);
    }

    #[test]
    fn default_navigation_never_aliases() {
        let mut first = default_navigation();
        first[0].items.clear();
        first[0].subheader = "Mutated".to_string();

        let second = default_navigation();
        assert_eq!(second[0].subheader, "Overview");
        assert_eq!(second[0].items.len(), 3);
    }
}
