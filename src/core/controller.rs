// The page's mutable UI state, owned in one place.
//
// Event handlers in the web layer translate DOM events into calls on
// `UiController` and then reflect the returned state back into the DOM.

use super::fab::{ClickTarget, SubMenu};
use super::pages::{trigger_target, PageSwitcher, PageTransition, SwitchError};

/// Snapshot of everything the controller tracks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub active_page: Option<String>,
    pub sub_menu_open: bool,
    pub ambient_started: bool,
}

#[derive(Debug, Default)]
pub struct UiController {
    pages: PageSwitcher,
    sub_menu: SubMenu,
    ambient_started: bool,
}

impl UiController {
    pub fn new(pages: PageSwitcher) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn pages(&self) -> &PageSwitcher {
        &self.pages
    }

    pub fn state(&self) -> UiState {
        UiState {
            active_page: self.pages.active_key().map(str::to_owned),
            sub_menu_open: self.sub_menu.is_open(),
            ambient_started: self.ambient_started,
        }
    }

    /// Handle a nav trigger. On success the new page is active and the
    /// sub-menu is closed; on error nothing changes.
    pub fn navigate(&mut self, data_section: Option<&str>) -> Result<PageTransition, SwitchError> {
        let key = trigger_target(data_section)?;
        let transition = self.pages.switch_to(key)?;
        self.sub_menu.close();
        Ok(transition)
    }

    /// Route a click; returns whether the sub-menu is open afterwards.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        self.sub_menu.on_click(target)
    }

    /// True exactly once: on the first user gesture after load.
    pub fn take_first_gesture(&mut self) -> bool {
        !std::mem::replace(&mut self.ambient_started, true)
    }
}
