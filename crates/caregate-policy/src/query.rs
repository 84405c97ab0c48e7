//! Capability queries and admin gating helpers.
//!
//! Single boolean gates for callers that do not need a full projection.
//! All of them route through the capability table; none re-derives role
//! logic inline.

use caregate_core::{Capability, CapabilityProfile, Role};

/// Whether `role` holds the capability with the given wire name.
///
/// Unknown capability names are false, not an error: callers probe names
/// defined elsewhere in the application, and a typo or an unmigrated
/// name must degrade to minimum disclosure.
pub fn can_access(capability: &str, role: Option<Role>) -> bool {
    match Capability::parse(capability) {
        Some(cap) => CapabilityProfile::for_role(role).grants(cap),
        None => false,
    }
}

/// Typed counterpart of [`can_access`].
pub const fn holds(capability: Capability, role: Option<Role>) -> bool {
    CapabilityProfile::for_role(role).grants(capability)
}

/// Whether the role is the admin role.
pub const fn is_admin(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Admin))
}

/// Whether the role may use admin-only features.
pub const fn can_access_admin_features(role: Option<Role>) -> bool {
    is_admin(role)
}

/// Whether admin links belong in the navigation.
///
/// Shown when nobody is logged in (the admin login entry point must stay
/// reachable) and when the logged-in user is an admin.
pub const fn should_show_admin_links(is_logged_in: bool, role: Option<Role>) -> bool {
    !is_logged_in || is_admin(role)
}

/// Whether the session carries usable admin privileges.
///
/// Requires both the admin role and a present session token; the token
/// itself is resolved by the external session provider and passed in as
/// a plain boolean.
pub const fn has_admin_privileges(role: Option<Role>, has_token: bool) -> bool {
    is_admin(role) && has_token
}
