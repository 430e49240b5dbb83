//! Admin panel navigation: tab strip and logout button

use contracts::system::endpoints;

use crate::shared::transport::Transport;
use crate::shared::Confirm;
use crate::system::auth::api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTab {
    pub name: &'static str,
    pub href: &'static str,
}

pub const TABS: &[NavTab] = &[
    NavTab { name: "Agendas", href: "/admin/agendas" },
    NavTab { name: "Products", href: "/admin/products" },
    NavTab { name: "News", href: "/admin/news" },
    NavTab { name: "Videos", href: "/admin/videos" },
    NavTab { name: "User Management", href: "/admin/users" },
];

/// Tab whose `href` equals `pathname` exactly
pub fn active_tab(pathname: &str) -> Option<&'static NavTab> {
    TABS.iter().find(|tab| tab.href == pathname)
}

pub const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";

#[derive(Debug, Default)]
pub struct LogoutButton {
    busy: bool,
}

impl LogoutButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn label(&self) -> &'static str {
        if self.busy {
            "Logging out…"
        } else {
            "Logout"
        }
    }

    /// Returns the page to navigate to, or `None` when the operator cancels.
    ///
    /// A failed logout call is logged and the redirect still happens.
    pub async fn click(
        &mut self,
        transport: &dyn Transport,
        confirm: &dyn Confirm,
    ) -> Option<&'static str> {
        if self.busy || !confirm.confirm(LOGOUT_PROMPT) {
            return None;
        }
        self.busy = true;
        if let Err(e) = api::logout(transport).await {
            log::error!("Logout error: {}", e);
        }
        self.busy = false;
        Some(endpoints::LOGIN)
    }
}
