/// Easing curves used by tweens and timelines.
///
/// The `PowerN` family follows the usual animation naming where `power1` is
/// quadratic, `power2` cubic and so on. All curves map 0 to 0 and 1 to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    #[default]
    Power1Out,
    Power2Out,
    Power3Out,
    Power4Out,
    Power2In,
}

impl Ease {
    #[inline]
    fn exponent(self) -> i32 {
        match self {
            Ease::Linear => 1,
            Ease::Power1Out => 2,
            Ease::Power2Out | Ease::Power2In => 3,
            Ease::Power3Out => 4,
            Ease::Power4Out => 5,
        }
    }

    /// Map linear progress `t` to eased progress. Input is clamped to [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.exponent();
        match self {
            Ease::Linear => t,
            Ease::Power2In => t.powi(n),
            _ => 1.0 - (1.0 - t).powi(n),
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
