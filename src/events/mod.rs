mod click;
mod scroll;

pub use click::{
    wire_card_hover, wire_click_sounds, wire_fab, wire_first_gesture, wire_nav_triggers,
};
pub use scroll::wire_scroll;
