//! Route registry for the dashboard shell and public pages.
//!
//! Stable path identifiers consumed by the navigation resolver and the
//! rendering layer. Paths are opaque strings at this level; matching and
//! dispatch happen in the front-end router.

/// Dashboard root — the assistant workspace.
pub const DASHBOARD_ROOT: &str = "/";

/// Knowledge base overview.
pub const KNOWLEDGE_BASE: &str = "/knowledge-base";

/// Knowledge base search.
pub const KNOWLEDGE_BASE_SEARCH: &str = "/knowledge-base/search";

/// Public landing page, shown to guests from the dashboard shell.
pub const AGENT_LANDING: &str = "/agent/landing";

/// Connector settings for business and organization accounts.
pub const CONNECTOR_SETTINGS_COMPANY: &str = "/account/company-settings/settings/connector";

/// Connector settings for individual accounts.
pub const CONNECTOR_SETTINGS_INDIVIDUAL: &str = "/account/individual/settings/connector";

/// Public marketing pages.
pub const PRICING: &str = "/pricing";
pub const FEATURES: &str = "/features";

/// Sign-up entry point referenced from the public pages.
pub const SIGN_UP: &str = "/auth/jwt/sign-up";
