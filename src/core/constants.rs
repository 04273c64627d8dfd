// Motion and layout tuning constants shared by the web frontend and host tests.

// Scroll progress bar
pub const PROGRESS_MAX_PERCENT: f32 = 100.0;

// Hero parallax: background moves at this fraction of scroll speed
pub const PARALLAX_FACTOR: f32 = 0.4;

// Reveal observer
pub const REVEAL_THRESHOLD: f32 = 0.1; // fraction of the element that must be visible
pub const REVEAL_ROOT_FILL: f32 = 0.1; // or the fraction of the root it must cover (tall elements)
// Observer callbacks fire at these ratios so tall elements are re-sampled while they scroll in.
pub const REVEAL_OBSERVER_THRESHOLDS: [f32; 5] = [0.0, 0.025, 0.05, 0.075, REVEAL_THRESHOLD];
pub const REVEAL_BOTTOM_MARGIN_PX: f32 = 50.0; // root rect shrinks by this much at the bottom
pub const REVEAL_OFFSET_Y: f32 = 40.0; // armed elements start this far below their rest position
pub const REVEAL_DURATION_SEC: f32 = 1.0;

// Hero timeline
pub const HERO_TEXT_DURATION_SEC: f32 = 1.2;
pub const HERO_FADE_DURATION_SEC: f32 = 0.8;
pub const HERO_STAGGER_SEC: f32 = 0.2;
pub const HERO_FADE_OVERLAP_SEC: f32 = 0.5; // fade group starts this long before the text group ends

// Stat counter
pub const STAT_CARD_DURATION_SEC: f32 = 0.8;
pub const STAT_COUNT_DURATION_SEC: f32 = 2.0;
pub const STAT_SUFFIX: &str = "+";

// Orbit rings
pub const ORBIT_START_VIEWPORT: f32 = 0.8; // orb top at 80% of viewport
pub const ORBIT_END_VIEWPORT: f32 = 0.4; // orb bottom at 40% of viewport
pub const ORBIT_PHASE_SEC: f32 = 0.5; // timeline length of each keyframe
pub const ORBIT_ENTER_X_PERCENT: f32 = 70.0;
pub const ORBIT_ENTER_ROTATE_DEG: f32 = 10.0;
pub const ORBIT_EXIT_X_PERCENT: f32 = -70.0;
pub const ORBIT_EXIT_ROTATE_DEG: f32 = -8.0;
pub const ORBIT_EXIT_OPACITY: f32 = 0.85;

// Page switching
pub const PAGE_ID_SUFFIX: &str = "-page";
pub const PAGE_REVEAL_OFFSET_Y: f32 = 30.0;
pub const PAGE_REVEAL_DELAY_SEC: f32 = 0.1;

// Floating action button
pub const FAB_SHOW_SCROLL_PX: f32 = 300.0;
pub const FAB_HIDDEN_OFFSET_PX: f32 = 20.0;

// Card hover
pub const CARD_HOVER_SCALE: f32 = 1.03;
pub const CARD_HOVER_DURATION_SEC: f32 = 0.4;

// Audio
pub const AMBIENT_VOLUME: f64 = 0.2;
