// Host-side tests for scroll-driven presentation: progress bar, parallax and
// the floating donate button.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}
mod fab {
    include!("../src/core/fab.rs");
}

use fab::*;
use scroll::*;

#[test]
fn progress_is_zero_at_top_and_full_at_bottom() {
    assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    assert!((progress_percent(1000.0, 3000.0, 1000.0) - 50.0).abs() < 1e-4);
}

#[test]
fn progress_is_monotonic_and_bounded() {
    let (scroll_height, client_height) = (5400.0, 900.0);
    let max_scroll = scroll_height - client_height;
    let mut prev = -1.0;
    let mut s = 0.0;
    while s <= max_scroll {
        let pct = progress_percent(s, scroll_height, client_height);
        assert!((0.0..=100.0).contains(&pct), "offset {s} gave {pct}");
        assert!(pct >= prev, "not monotonic at {s}: {prev} -> {pct}");
        prev = pct;
        s += 37.5;
    }
}

#[test]
fn progress_clamps_overscroll() {
    // Rubber-band scrolling can report offsets outside the scrollable range
    assert_eq!(progress_percent(-40.0, 3000.0, 1000.0), 0.0);
    assert_eq!(progress_percent(2100.0, 3000.0, 1000.0), 100.0);
}

#[test]
fn progress_on_unscrollable_page_is_zero() {
    assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
    assert_eq!(progress_percent(0.0, 600.0, 800.0), 0.0);
    assert_eq!(progress_percent(f32::NAN, 3000.0, 800.0), 0.0);
    assert!(progress_percent(10.0, 800.0, 800.0).is_finite());
}

#[test]
fn parallax_moves_slower_than_scroll() {
    assert_eq!(parallax_offset(0.0), 0.0);
    assert!((parallax_offset(500.0) - 200.0).abs() < 1e-4);
    assert_eq!(parallax_offset(f32::INFINITY), 0.0);
}

#[test]
fn range_progress_clamps_both_ends() {
    assert_eq!(range_progress(50.0, 100.0, 300.0), 0.0);
    assert_eq!(range_progress(200.0, 100.0, 300.0), 0.5);
    assert_eq!(range_progress(900.0, 100.0, 300.0), 1.0);
    // Degenerate range behaves like a step
    assert_eq!(range_progress(99.0, 100.0, 100.0), 0.0);
    assert_eq!(range_progress(100.0, 100.0, 100.0), 1.0);
}

#[test]
fn fab_threshold_is_300px() {
    assert_eq!(FabStyle::for_scroll(0.0), FabStyle::HIDDEN);
    assert_eq!(FabStyle::for_scroll(299.0), FabStyle::HIDDEN);
    assert_eq!(FabStyle::for_scroll(299.9), FabStyle::HIDDEN);
    assert_eq!(FabStyle::for_scroll(300.0), FabStyle::SHOWN);
    assert_eq!(FabStyle::for_scroll(4000.0), FabStyle::SHOWN);
}

#[test]
fn fab_styles_render_to_css() {
    let hidden = FabStyle::HIDDEN;
    assert_eq!(hidden.opacity, 0.0);
    assert_eq!(hidden.css_pointer_events(), "none");
    assert_eq!(hidden.css_transform(), "translateY(20px)");
    assert!(!hidden.is_shown());

    let shown = FabStyle::SHOWN;
    assert_eq!(shown.opacity, 1.0);
    assert_eq!(shown.css_pointer_events(), "all");
    assert_eq!(shown.css_transform(), "translateY(0px)");
    assert!(shown.is_shown());
}

#[test]
fn main_button_click_toggles_without_self_closing() {
    let mut menu = SubMenu::default();
    assert!(!menu.is_open());
    assert!(menu.on_click(ClickTarget::MainButton));
    assert!(menu.is_open());
    assert!(!menu.on_click(ClickTarget::MainButton));
}

#[test]
fn click_elsewhere_closes_sub_menu() {
    let mut menu = SubMenu::default();
    menu.on_click(ClickTarget::MainButton);
    assert!(!menu.on_click(ClickTarget::Elsewhere));
    // Closing an already-closed menu is harmless
    assert!(!menu.on_click(ClickTarget::Elsewhere));
}
