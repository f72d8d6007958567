//! Side navigation entries and their role gates.
//!
//! Organized the way the menu is shown:
//! 1. Overview (Dashboard, Analytics, Reports, Websites, Simulations)
//! 2. Administration (Users, Tasks)
//! 3. Restricted tools (Secure Files, QA Test)
//! 4. Utilities (Shortcuts, Profile, Help)
//! 5. Platform settings (SuperUser only)
//!
//! Declaration order is display order.

use super::role::Role;
use serde::Serialize;
use utoipa::ToSchema;

const EVERYONE: &[Role] = &Role::ALL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
    pub icon: &'static str,
    pub allowed_roles: &'static [Role],
}

impl NavItem {
    #[must_use]
    pub fn visible_to(&self, role: Option<Role>) -> bool {
        role.is_some_and(|role| self.allowed_roles.contains(&role))
    }

    /// The part of the entry the presentation layer consumes.
    #[must_use]
    pub fn entry(&self) -> NavEntry {
        NavEntry {
            label: self.label,
            target: self.target,
            icon: self.icon,
        }
    }
}

/// A rendered menu entry, without its role gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 13] = [
    NavItem {
        label: "Dashboard",
        target: "/dashboard",
        icon: "layout-dashboard",
        allowed_roles: EVERYONE,
    },
    NavItem {
        label: "Analytics",
        target: "/analytics",
        icon: "bar-chart-3",
        allowed_roles: &[Role::SuperUser, Role::Admin, Role::Manager],
    },
    NavItem {
        label: "Reports",
        target: "/reports",
        icon: "file-text",
        allowed_roles: &[Role::SuperUser, Role::Admin, Role::Manager],
    },
    NavItem {
        label: "Websites",
        target: "/websites",
        icon: "globe",
        allowed_roles: &[
            Role::SuperUser,
            Role::Admin,
            Role::User,
            Role::Manager,
            Role::Operator,
        ],
    },
    NavItem {
        label: "Simulations",
        target: "/simulations",
        icon: "test-tube",
        allowed_roles: &[Role::SuperUser, Role::Admin, Role::Manager, Role::Operator],
    },
    NavItem {
        label: "Users",
        target: "/users",
        icon: "users",
        allowed_roles: &[Role::SuperUser, Role::Admin],
    },
    NavItem {
        label: "Tasks",
        target: "/tasks",
        icon: "check-square",
        allowed_roles: &[Role::SuperUser, Role::Admin],
    },
    NavItem {
        label: "Secure Files",
        target: "/secure-files",
        icon: "shield",
        allowed_roles: &[Role::SuperUser, Role::Itra],
    },
    NavItem {
        label: "QA Test",
        target: "/qa-test",
        icon: "test-tube",
        allowed_roles: &[Role::SuperUser, Role::Admin, Role::Manager],
    },
    NavItem {
        label: "Shortcuts",
        target: "/shortcuts",
        icon: "external-link",
        allowed_roles: &[
            Role::SuperUser,
            Role::Admin,
            Role::User,
            Role::Manager,
            Role::Operator,
            Role::Guest,
        ],
    },
    NavItem {
        label: "Profile",
        target: "/profile",
        icon: "user-circle",
        allowed_roles: EVERYONE,
    },
    NavItem {
        label: "Help",
        target: "/help",
        icon: "help-circle",
        allowed_roles: EVERYONE,
    },
    NavItem {
        label: "Settings",
        target: "/settings",
        icon: "settings",
        allowed_roles: &[Role::SuperUser],
    },
];

/// Menu items visible to `role`, lazily, in table order.
///
/// The iterator is `Clone`, so it can be restarted; an absent role sees nothing.
pub fn project(role: Option<Role>) -> impl Iterator<Item = &'static NavItem> + Clone {
    NAV_ITEMS.iter().filter(move |item| item.visible_to(role))
}
