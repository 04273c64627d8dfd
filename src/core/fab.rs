// Floating donate button: scroll-driven visibility and the sub-menu flag.

use super::constants::{FAB_HIDDEN_OFFSET_PX, FAB_SHOW_SCROLL_PX};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FabStyle {
    pub opacity: f32,
    pub pointer_events: bool,
    pub translate_y: f32,
}

impl FabStyle {
    pub const HIDDEN: FabStyle = FabStyle {
        opacity: 0.0,
        pointer_events: false,
        translate_y: FAB_HIDDEN_OFFSET_PX,
    };
    pub const SHOWN: FabStyle = FabStyle {
        opacity: 1.0,
        pointer_events: true,
        translate_y: 0.0,
    };

    /// Presentation for a vertical scroll offset; shown from 300px onwards.
    #[inline]
    pub fn for_scroll(offset: f32) -> FabStyle {
        if offset >= FAB_SHOW_SCROLL_PX {
            Self::SHOWN
        } else {
            Self::HIDDEN
        }
    }

    pub fn is_shown(&self) -> bool {
        self.pointer_events
    }

    pub fn css_pointer_events(&self) -> &'static str {
        if self.pointer_events {
            "all"
        } else {
            "none"
        }
    }

    pub fn css_transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

/// Where a click landed, as far as the sub-menu cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The main floating button. Its handler stops propagation.
    MainButton,
    /// Anywhere else in the document.
    Elsewhere,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubMenu {
    open: bool,
}

impl SubMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Dispatch a click the way the DOM would: the main button toggles and
    /// swallows the event, so the document-level close never sees it.
    pub fn on_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::MainButton => {
                self.toggle();
            }
            ClickTarget::Elsewhere => self.close(),
        }
        self.open
    }
}
