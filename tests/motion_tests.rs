// Host-side tests for tweens, timelines, orbit scrubbing and the reveal
// registry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod easing {
    include!("../src/core/easing.rs");
}
mod stats {
    include!("../src/core/stats.rs");
}
mod tween {
    include!("../src/core/tween.rs");
}
mod timeline {
    include!("../src/core/timeline.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}
mod orbit {
    include!("../src/core/orbit.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}
mod keys {
    include!("../src/core/keys.rs");
}

use easing::Ease;
use keys::*;
use orbit::*;
use reveal::*;
use stats::CountUp;
use timeline::*;
use tween::*;

const EPS: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

fn approx_state(a: &VisualState, b: &VisualState) -> bool {
    approx(a.opacity, b.opacity)
        && approx(a.y, b.y)
        && approx(a.x_percent, b.x_percent)
        && approx(a.rotate, b.rotate)
        && approx(a.scale, b.scale)
}

#[derive(Default)]
struct FakeSource {
    observed: Vec<u32>,
    unobserved: Vec<u32>,
}

impl IntersectionSource<u32> for FakeSource {
    fn observe(&mut self, key: u32) {
        self.observed.push(key);
    }
    fn unobserve(&mut self, key: u32) {
        self.unobserved.push(key);
    }
}

fn hit(key: u32, ratio: f32) -> IntersectionSample<u32> {
    IntersectionSample {
        key,
        is_intersecting: ratio > 0.0,
        ratio,
        root_fill: 0.0,
    }
}

// ---------------- tweens ----------------

#[test]
fn tween_reaches_target_after_duration() {
    let mut tweens: Tweens<u32> = Tweens::new();
    tweens.set(1, armed_target());
    tweens.to(1, revealed_target(), scroll_reveal_spec());

    let mid = tweens.advance(0.5);
    assert_eq!(mid.styles.len(), 1);
    let s = mid.styles[0].state;
    assert!(s.opacity > 0.5 && s.opacity < 1.0, "power3.out front-loads: {s:?}");
    assert!(s.y > 0.0 && s.y < 40.0);

    tweens.advance(0.6);
    assert!(approx_state(&tweens.state(1), &VisualState::default()));
    assert!(tweens.is_idle());
}

#[test]
fn delayed_tween_waits() {
    let mut tweens: Tweens<u32> = Tweens::new();
    tweens.set(1, page_reset_target());
    tweens.to(1, revealed_target(), page_reveal_spec());
    assert!(tweens.advance(0.05).is_empty());
    assert_eq!(tweens.state(1).opacity, 0.0);
    assert_eq!(tweens.state(1).y, 30.0);
    assert!(!tweens.advance(0.1).is_empty());
}

#[test]
fn new_tween_supersedes_same_properties() {
    let mut tweens: Tweens<u32> = Tweens::new();
    tweens.set(1, StyleTarget::default().opacity(0.0));
    tweens.to(1, StyleTarget::default().opacity(1.0), TweenSpec::new(1.0, Ease::Linear));
    tweens.advance(0.5);
    tweens.to(1, StyleTarget::default().opacity(0.0), TweenSpec::new(1.0, Ease::Linear));
    tweens.advance(2.0);
    assert_eq!(tweens.state(1).opacity, 0.0);
}

#[test]
fn tweens_on_disjoint_properties_run_together() {
    let mut tweens: Tweens<u32> = Tweens::new();
    tweens.set(1, armed_target());
    tweens.to(1, revealed_target(), TweenSpec::new(1.0, Ease::Linear));
    tweens.advance(0.2);
    tweens.to(1, StyleTarget::default().scale(1.03), TweenSpec::new(0.4, Ease::Power2Out));
    tweens.advance(2.0);
    let s = tweens.state(1);
    assert!(approx(s.opacity, 1.0));
    assert!(approx(s.y, 0.0));
    assert!(approx(s.scale, 1.03));
}

#[test]
fn set_cancels_running_tween() {
    let mut tweens: Tweens<u32> = Tweens::new();
    tweens.set(1, armed_target());
    tweens.to(1, revealed_target(), scroll_reveal_spec());
    tweens.advance(0.3);
    tweens.set(1, page_reset_target());
    assert!(tweens.is_idle());
    assert_eq!(tweens.state(1).opacity, 0.0);
    assert_eq!(tweens.state(1).y, 30.0);
}

#[test]
fn counter_text_flows_through_frame_updates() {
    let mut tweens: Tweens<u32> = Tweens::new();
    tweens.count(CountUp::new(9, 1250));
    let mut last = None;
    for _ in 0..200 {
        let update = tweens.advance(1.0 / 60.0);
        if let Some((key, text)) = update.texts.last() {
            assert_eq!(*key, 9);
            last = Some(text.clone());
        }
    }
    assert_eq!(last.as_deref(), Some("1,250+"));
    assert!(tweens.is_idle());
}

#[test]
fn css_transform_includes_every_property() {
    let s = VisualState {
        opacity: 0.5,
        y: 12.0,
        x_percent: -70.0,
        rotate: -8.0,
        scale: 1.03,
    };
    assert_eq!(s.css_transform(), "translate(-70%, 12px) rotate(-8deg) scale(1.03)");
}

// ---------------- timelines ----------------

#[test]
fn hero_timeline_staggers_and_overlaps() {
    let tl = hero_timeline(&[1u32, 2], &[3u32]);
    // text: 0.0..1.2 and 0.2..1.4; fade starts 0.5 before 1.4
    assert!(approx(tl.duration(), 0.9 + 0.8));

    let start = tl.sample(0.0);
    assert_eq!(start.len(), 3);
    for (_, s) in &start {
        assert_eq!(s.opacity, 0.0);
    }
    assert_eq!(tl.sample_key(1, 0.0).map(|s| s.y), Some(40.0));

    // Second text element has not started at 0.1
    assert_eq!(tl.sample_key(2, 0.1).map(|s| s.opacity), Some(0.0));
    assert!(tl.sample_key(1, 0.1).map(|s| s.opacity).unwrap_or(0.0) > 0.0);

    // Fade element begins at 0.9
    assert_eq!(tl.sample_key(3, 0.89).map(|s| s.opacity), Some(0.0));
    assert!(tl.sample_key(3, 1.2).map(|s| s.opacity).unwrap_or(0.0) > 0.0);

    for (_, s) in tl.sample(tl.duration()) {
        assert!(approx(s.opacity, 1.0));
        assert!(approx(s.y, 0.0));
    }
}

#[test]
fn hero_timeline_without_text_starts_fades_immediately() {
    let tl = hero_timeline(&[], &[5u32]);
    assert!(approx(tl.duration(), 0.8));
    assert!(tl.sample_key(5, 0.4).map(|s| s.opacity).unwrap_or(0.0) > 0.0);
}

#[test]
fn forgotten_keys_are_not_sampled() {
    let mut tl = hero_timeline(&[1u32, 2], &[]);
    tl.forget(1);
    assert_eq!(tl.keys(), vec![2]);
    assert!(tl.sample_key(1, 0.5).is_none());
}

#[test]
fn timeline_plays_through_runtime() {
    let mut tweens: Tweens<u32> = Tweens::new();
    tweens.play(hero_timeline(&[1u32], &[2u32]));
    for _ in 0..200 {
        tweens.advance(1.0 / 60.0);
    }
    assert!(tweens.is_idle());
    assert!(approx(tweens.state(1).opacity, 1.0));
    assert!(approx(tweens.state(2).opacity, 1.0));
}

#[test]
fn tween_on_timeline_key_takes_over() {
    let mut tweens: Tweens<u32> = Tweens::new();
    tweens.play(hero_timeline(&[1u32, 2], &[]));
    tweens.advance(0.1);
    tweens.set(1, page_reset_target());
    tweens.to(1, revealed_target(), page_reveal_spec());
    for _ in 0..9 {
        let update = tweens.advance(0.01);
        // The timeline no longer writes key 1 before the delayed tween starts
        assert!(update.styles.iter().all(|w| w.key != 1));
    }
}

#[test]
fn fade_only_animation_leaves_transform_alone() {
    let tl = hero_timeline(&[1u32], &[2u32]);
    assert_eq!(
        tl.animated(2).mask(),
        StyleMask {
            opacity: true,
            transform: false
        }
    );
    assert_eq!(tl.animated(1).mask(), StyleMask::ALL);

    let mut tweens: Tweens<u32> = Tweens::new();
    tweens.play(tl);
    let mut fade_writes = 0;
    for _ in 0..200 {
        for w in tweens.advance(1.0 / 60.0).styles {
            if w.key == 2 {
                assert!(!w.mask.transform, "fade wrote a transform: {w:?}");
                fade_writes += 1;
            }
        }
    }
    assert!(fade_writes > 0);
    assert_eq!(
        StyleTarget::default().scale(1.03).mask(),
        StyleMask {
            opacity: false,
            transform: true
        }
    );
}

#[test]
fn hover_scale_does_not_stop_a_playing_timeline() {
    let mut tweens: Tweens<u32> = Tweens::new();
    tweens.play(hero_timeline(&[1u32], &[]));
    tweens.advance(0.1);
    tweens.to(1, StyleTarget::default().scale(1.03), TweenSpec::new(0.4, Ease::Power2Out));

    // Timeline and hover both keep writing key 1
    let update = tweens.advance(0.1);
    assert_eq!(update.styles.iter().filter(|w| w.key == 1).count(), 2);

    for _ in 0..200 {
        tweens.advance(1.0 / 60.0);
    }
    let s = tweens.state(1);
    assert!(approx(s.opacity, 1.0));
    assert!(approx(s.y, 0.0));
    assert!(approx(s.scale, 1.03), "timeline reset the hover: {s:?}");
}

// ---------------- orbit ----------------

#[test]
fn scrub_range_follows_viewport_fractions() {
    let r = ScrubRange::for_orb(1000.0, 200.0, 800.0).unwrap();
    assert!(approx(r.start, 360.0));
    assert!(approx(r.end, 880.0));
    assert_eq!(r.progress(0.0), 0.0);
    assert_eq!(r.progress(5000.0), 1.0);
}

#[test]
fn orbit_keyframes() {
    let orbit = Orbit::new(0u32, Some(ScrubRange { start: 100.0, end: 500.0 }));
    assert_eq!(orbit.sample(0.0), ring_start_state());
    assert_eq!(orbit.sample(100.0), ring_start_state());

    let neutral = orbit.sample(300.0);
    assert!(approx(neutral.x_percent, 0.0));
    assert!(approx(neutral.rotate, 0.0));
    assert!(approx(neutral.opacity, 1.0));

    let exit = orbit.sample(500.0);
    assert!(approx(exit.x_percent, -70.0));
    assert!(approx(exit.rotate, -8.0));
    assert!(approx(exit.opacity, 0.85));
    assert!(approx_state(&orbit.sample(9000.0), &exit));
}

#[test]
fn orbit_scrub_is_direction_independent() {
    let orbit = Orbit::new(0u32, ScrubRange::for_orb(1600.0, 420.0, 900.0));
    let offsets: Vec<f32> = (0..=120).map(|i| 800.0 + i as f32 * 12.5).collect();
    let down: Vec<VisualState> = offsets.iter().map(|&o| orbit.sample(o)).collect();
    let up: Vec<VisualState> = offsets.iter().rev().map(|&o| orbit.sample(o)).collect();
    for (i, s) in down.iter().enumerate() {
        assert_eq!(*s, up[up.len() - 1 - i], "offset {}", offsets[i]);
    }
}

#[test]
fn orbit_phases_move_monotonically() {
    let orbit = Orbit::new(0u32, Some(ScrubRange { start: 0.0, end: 1000.0 }));
    let mut prev = orbit.sample(0.0).x_percent;
    for step in 1..=100 {
        let x = orbit.sample(step as f32 * 10.0).x_percent;
        assert!(x <= prev + EPS, "x went back at step {step}: {prev} -> {x}");
        prev = x;
    }
}

#[test]
fn hidden_orb_rests_until_measured() {
    // A hidden page gives its orbs no height
    assert!(ScrubRange::for_orb(1200.0, 0.0, 800.0).is_none());
    let mut orbit = Orbit::new(0u32, ScrubRange::for_orb(1200.0, 0.0, 800.0));
    for offset in [0.0, 1200.0, 5000.0] {
        assert_eq!(orbit.sample(offset), ring_start_state());
    }

    orbit.range = ScrubRange::for_orb(1200.0, 300.0, 800.0);
    assert_eq!(orbit.sample(0.0), ring_start_state());
    assert!(approx(orbit.sample(5000.0).x_percent, -70.0));
}

// ---------------- reveal registry ----------------

#[test]
fn arming_observes_once() {
    let mut src = FakeSource::default();
    let mut reg = RevealRegistry::new();
    reg.arm(1, RevealKind::Fade, &mut src);
    reg.arm(1, RevealKind::Fade, &mut src);
    reg.arm(2, RevealKind::Stat, &mut src);
    assert_eq!(src.observed, vec![1, 2]);
    assert_eq!(reg.len(), 2);
}

#[test]
fn reveal_fires_once_per_arming() {
    let mut src = FakeSource::default();
    let mut reg = RevealRegistry::new();
    reg.arm(1, RevealKind::Fade, &mut src);

    let fired = reg.on_intersections([hit(1, 0.4)], &mut src);
    assert_eq!(fired.as_slice(), &[Reveal { key: 1, kind: RevealKind::Fade }]);
    assert_eq!(src.unobserved, vec![1]);
    assert!(!reg.is_armed(1));

    // Out and back in again: nothing
    assert!(reg.on_intersections([hit(1, 0.0)], &mut src).is_empty());
    assert!(reg.on_intersections([hit(1, 0.9)], &mut src).is_empty());

    // A page switch re-arms
    reg.arm(1, RevealKind::Fade, &mut src);
    assert_eq!(reg.on_intersections([hit(1, 0.5)], &mut src).len(), 1);
}

#[test]
fn below_threshold_does_not_fire() {
    let mut src = FakeSource::default();
    let mut reg = RevealRegistry::new();
    reg.arm(1, RevealKind::Fade, &mut src);
    assert!(reg.on_intersections([hit(1, 0.05)], &mut src).is_empty());
    assert!(reg.is_armed(1));
    assert!(src.unobserved.is_empty());
    assert_eq!(reg.on_intersections([hit(1, 0.1)], &mut src).len(), 1);
}

#[test]
fn stat_cards_are_reported_as_stats() {
    let mut src = FakeSource::default();
    let mut reg = RevealRegistry::new();
    reg.arm(1, RevealKind::Fade, &mut src);
    reg.arm(2, RevealKind::Stat, &mut src);
    let fired = reg.on_intersections([hit(2, 1.0), hit(1, 1.0), hit(7, 1.0)], &mut src);
    assert_eq!(
        fired.as_slice(),
        &[
            Reveal { key: 2, kind: RevealKind::Stat },
            Reveal { key: 1, kind: RevealKind::Fade },
        ]
    );
    assert!(reg.is_empty());
}

#[test]
fn disarm_stops_watching() {
    let mut src = FakeSource::default();
    let mut reg = RevealRegistry::new();
    reg.arm(3, RevealKind::Fade, &mut src);
    assert!(reg.disarm(3, &mut src));
    assert!(!reg.disarm(3, &mut src));
    assert_eq!(src.unobserved, vec![3]);
    assert!(reg.on_intersections([hit(3, 1.0)], &mut src).is_empty());
}

#[test]
fn visible_ratio_respects_bottom_margin() {
    // Viewport 800, effective root bottom 750
    assert!(approx(visible_ratio(700.0, 100.0, 800.0), 0.5));
    assert!(approx(visible_ratio(745.0, 100.0, 800.0), 0.05));
    assert_eq!(visible_ratio(760.0, 100.0, 800.0), 0.0);
    assert!(approx(visible_ratio(-50.0, 100.0, 800.0), 0.5));
    assert_eq!(visible_ratio(100.0, 0.0, 800.0), 0.0);
    assert!(qualifies(
        true,
        visible_ratio(670.0, 100.0, 800.0),
        visible_fill(670.0, 100.0, 800.0)
    ));
    assert!(!qualifies(
        true,
        visible_ratio(745.0, 100.0, 800.0),
        visible_fill(745.0, 100.0, 800.0)
    ));
}

#[test]
fn fake_scroll_reveals_each_card_once() {
    // Cards every 400px down a long page; viewport scrolls past them twice
    let mut src = FakeSource::default();
    let mut reg = RevealRegistry::new();
    let tops: Vec<f32> = (0..6).map(|i| 900.0 + i as f32 * 400.0).collect();
    for key in 0..tops.len() as u32 {
        reg.arm(key, RevealKind::Fade, &mut src);
    }
    let mut revealed = Vec::new();
    let pass: Vec<f32> = (0..=80).map(|i| i as f32 * 40.0).collect();
    for &scroll in pass.iter().chain(pass.iter().rev()).chain(pass.iter()) {
        let samples: Vec<_> = tops
            .iter()
            .enumerate()
            .map(|(k, &top)| {
                let ratio = visible_ratio(top - scroll, 200.0, 800.0);
                IntersectionSample {
                    key: k as u32,
                    is_intersecting: ratio > 0.0,
                    ratio,
                    root_fill: visible_fill(top - scroll, 200.0, 800.0),
                }
            })
            .collect();
        revealed.extend(reg.on_intersections(samples, &mut src).into_iter().map(|r| r.key));
    }
    assert_eq!(revealed, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn tall_element_reveals_once_by_root_coverage() {
    // 8000px element, 700px viewport: at most 650/8000 of it is ever visible
    let mut src = FakeSource::default();
    let mut reg = RevealRegistry::new();
    reg.arm(1u32, RevealKind::Fade, &mut src);

    let mut fired = 0;
    let mut max_ratio: f32 = 0.0;
    for step in 0..=200 {
        let top = 1000.0 - step as f32 * 50.0;
        let ratio = visible_ratio(top, 8000.0, 700.0);
        max_ratio = max_ratio.max(ratio);
        let sample = IntersectionSample {
            key: 1,
            is_intersecting: ratio > 0.0,
            ratio,
            root_fill: visible_fill(top, 8000.0, 700.0),
        };
        fired += reg.on_intersections([sample], &mut src).len();
    }
    assert!(max_ratio < constants::REVEAL_THRESHOLD);
    assert_eq!(fired, 1);
    assert!(!reg.is_armed(1));
}

#[test]
fn sliver_of_tall_element_does_not_reveal() {
    // 30px of a 8000px element inside a 650px root
    let fill = visible_fill(620.0, 8000.0, 700.0);
    assert!(approx(fill, 30.0 / 650.0));
    assert!(!qualifies(true, visible_ratio(620.0, 8000.0, 700.0), fill));
    assert!(qualifies(true, 0.01, 1.0));
    assert!(!qualifies(false, 1.0, 1.0));
}

#[test]
fn page_replay_consumes_pending_reveal() {
    let mut src = FakeSource::default();
    let mut reg = RevealRegistry::new();
    reg.arm(1, RevealKind::Stat, &mut src);

    let replay = reg.replay(1, RevealKind::Stat, &mut src);
    assert_eq!(replay, Reveal { key: 1, kind: RevealKind::Stat });
    assert_eq!(src.unobserved, vec![1]);
    assert!(!reg.is_armed(1));
    assert!(reg.on_intersections([hit(1, 1.0)], &mut src).is_empty());

    // Never armed (hero text on another page): replays without touching the observer
    let replay = reg.replay(2, RevealKind::Fade, &mut src);
    assert_eq!(replay, Reveal { key: 2, kind: RevealKind::Fade });
    assert_eq!(src.unobserved, vec![1]);
}

#[test]
fn motion_keys_decode_only_issued_indices() {
    assert_eq!(decode_key(Some(encode_key(3).as_str()), 4), Some(3));
    assert_eq!(decode_key(Some(" 2 "), 4), Some(2));
    assert_eq!(decode_key(Some("4"), 4), None);
    assert_eq!(decode_key(Some("-1"), 4), None);
    assert_eq!(decode_key(Some("card"), 4), None);
    assert_eq!(decode_key(None, 4), None);
}
