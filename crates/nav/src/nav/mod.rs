//! Navigation resolution for the dashboard shell.
//!
//! The resolver derives the visible navigation set from three inputs:
//! - Account type ("business"/"organization" vs. everything else)
//! - Admin flag (meaningful only for business-like accounts)
//! - Authentication state (guests additionally see the public landing entry)

mod resolver;

pub use resolver::{AccountKind, NavContext, NavItem, NavSection, default_navigation, resolve};
