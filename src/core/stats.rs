// Count-up numbers for stat cards.

use super::constants::{STAT_COUNT_DURATION_SEC, STAT_SUFFIX};
use super::easing::Ease;

/// Parse a `data-target` value the way browsers parse leading integers:
/// optional whitespace and sign, then digits; anything after is ignored.
/// Negative targets clamp to zero. Returns `None` when no digits lead.
pub fn parse_target(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Overlong digit runs saturate rather than fail.
    let value = digits[..end].parse::<u64>().unwrap_or(u64::MAX);
    Some(if negative { 0 } else { value })
}

/// `1250` -> `"1,250"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Text shown on a stat card for `value`, e.g. `"1,250+"`.
pub fn format_count(value: u64) -> String {
    let mut s = group_thousands(value);
    s.push_str(STAT_SUFFIX);
    s
}

/// Number rising from 0 to `target`, rendered into the element `key`.
#[derive(Clone, Debug)]
pub struct CountUp<K> {
    pub key: K,
    target: u64,
    duration: f32,
    ease: Ease,
    elapsed: f32,
    last: Option<u64>,
}

impl<K> CountUp<K> {
    pub fn new(key: K, target: u64) -> Self {
        Self {
            key,
            target,
            duration: STAT_COUNT_DURATION_SEC,
            ease: Ease::Power2Out,
            elapsed: 0.0,
            last: None,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Displayed value after `elapsed` seconds: floored, never above target,
    /// and exactly the target once the duration has passed.
    pub fn value_at(&self, elapsed: f32) -> u64 {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.target;
        }
        let t = self.ease.apply(elapsed.max(0.0) / self.duration) as f64;
        let v = (self.target as f64 * t).floor();
        (v.max(0.0) as u64).min(self.target)
    }

    /// Step the counter; returns new text only when the displayed number changed.
    pub fn advance(&mut self, dt: f32) -> Option<String> {
        self.elapsed += dt.max(0.0);
        let value = self.value_at(self.elapsed);
        if self.last == Some(value) {
            return None;
        }
        self.last = Some(value);
        Some(format_count(value))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
