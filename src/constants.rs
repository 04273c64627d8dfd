//! DOM contract and asset locations.
//!
//! Selectors and class names consumed from the site's markup. Motion tuning
//! lives in `core::constants` so host tests can share it.

// Written on every animated element so lookups skip the DOM scan
pub const MOTION_KEY_ATTR: &str = "data-motion-key";

// Scroll-driven elements
pub const SCROLL_PROGRESS_ID: &str = "scroll-progress";
pub const HERO_IMAGE_SELECTOR: &str = ".hero-bg img";

// Hero entrance timeline
pub const HERO_TEXT_SELECTOR: &str = ".reveal-text";
pub const HERO_FADE_SELECTOR: &str = ".fade-in";

// Reveal on scroll
pub const REVEAL_SELECTOR: &str = ".fade-up, .stat-card, .init-card";
pub const STAT_CARD_CLASS: &str = "stat-card";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";
pub const STAT_TARGET_ATTR: &str = "data-target";
pub const INIT_CARD_SELECTOR: &str = ".init-card";
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Orbit rings
pub const ORB_SELECTOR: &str = ".story-orb";
pub const ORB_RING_SELECTOR: &str = ".orb-ring";

// Page switching
pub const NAV_TRIGGER_SELECTOR: &str = ".nav-trigger";
pub const NAV_SECTION_ATTR: &str = "data-section";
pub const PAGE_SELECTOR: &str = ".page-section";
pub const PAGE_REVEAL_SELECTOR: &str = ".reveal-text, .fade-in, .fade-up, .stat-card";
pub const ACTIVE_CLASS: &str = "active";

// Floating action button
pub const FAB_WRAPPER_SELECTOR: &str = ".donate-fab-wrapper";
pub const FAB_MAIN_SELECTOR: &str = ".floating-donate-pill";

// Interaction sounds
pub const CLICK_SOUND_SELECTOR: &str =
    "button, .nav-links a, .floating-donate-pill, .sub-menu-item, .nav-trigger";
pub const INTERACTION_SOUND_SRC: &str = "assets/Sound/interaction_soft.mp3";
pub const AMBIENT_SOUND_SRC: &str = "assets/Sound/ambient_calm.mp3";

// Icons rendered by the page's Lucide bundle
pub const LUCIDE_GLOBAL: &str = "lucide";
pub const ICON_NAMES: [&str; 11] = [
    "Instagram",
    "Twitter",
    "Facebook",
    "Mail",
    "Users",
    "Heart",
    "BookOpen",
    "MessageCircle",
    "Globe",
    "Calendar",
    "MapPin",
];
