//! Hand-drawn renderable generation.
//!
//! Follows the rough.js line algorithm: every segment becomes a bowed cubic whose
//! endpoints and control points are jittered, and is usually drawn twice so the
//! strokes don't quite overlap.

use crate::shapes::ElementKind;
use kurbo::{BezPath, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Parameters for the hand-drawn effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoughOptions {
    /// Overall sloppiness. 0 draws clean geometry.
    pub roughness: f64,
    /// How much a segment curves away from the straight line.
    pub bowing: f64,
    /// Maximum endpoint jitter in canvas units.
    pub max_randomness_offset: f64,
    /// Draw a second, slightly different pass over every segment.
    pub multi_stroke: bool,
    /// Base seed, mixed with the element id.
    pub seed: u32,
}

impl Default for RoughOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            max_randomness_offset: 2.0,
            multi_stroke: true,
            seed: 0,
        }
    }
}

impl RoughOptions {
    /// Options that produce exact, undecorated geometry.
    pub fn clean() -> Self {
        Self {
            roughness: 0.0,
            multi_stroke: false,
            ..Self::default()
        }
    }

    /// Stable seed for an element.
    pub fn seed_for(&self, id: usize) -> u32 {
        // Fold the high half in so ids past u32::MAX don't alias low ones.
        let wide = id as u64;
        let folded = (wide ^ (wide >> 32)) as u32;
        mix_seed(self.seed.wrapping_add(folded).wrapping_add(1))
    }
}

/// Splitmix32-style finalizer.
fn mix_seed(value: u32) -> u32 {
    let mut x = value.wrapping_mul(0x9E37_79B9);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2_AE35);
    x ^= x >> 16;
    x
}

/// Seeded xorshift32 generator.
#[derive(Debug, Clone)]
struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Random float in [0, 1].
    fn unit(&mut self) -> f64 {
        self.next_u32() as f64 / u32::MAX as f64
    }

    /// Random float in [-1, 1].
    fn signed(&mut self) -> f64 {
        self.unit() * 2.0 - 1.0
    }
}

/// Derived drawing instructions for one element.
///
/// Each entry in `strokes` is one full pass over the shape's outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    kind: ElementKind,
    strokes: Vec<BezPath>,
}

impl Drawable {
    /// Kind of shape this was generated for.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Stroke passes, in drawing order.
    pub fn strokes(&self) -> &[BezPath] {
        &self.strokes
    }
}

/// Builds hand-drawn paths for lines and rectangles.
#[derive(Debug, Clone)]
pub struct RoughGenerator {
    options: RoughOptions,
    rng: SimpleRng,
}

impl RoughGenerator {
    pub fn new(options: RoughOptions, seed: u32) -> Self {
        Self {
            options,
            rng: SimpleRng::new(seed),
        }
    }

    /// A single segment from `a` to `b`.
    pub fn line(&mut self, a: Point, b: Point) -> Drawable {
        Drawable {
            kind: ElementKind::Line,
            strokes: self.passes(&[(a, b)]),
        }
    }

    /// An axis-aligned rectangle. Width and height may be negative.
    pub fn rectangle(&mut self, origin: Point, width: f64, height: f64) -> Drawable {
        let corners = [
            origin,
            Point::new(origin.x + width, origin.y),
            Point::new(origin.x + width, origin.y + height),
            Point::new(origin.x, origin.y + height),
        ];
        let edges = [
            (corners[0], corners[1]),
            (corners[1], corners[2]),
            (corners[2], corners[3]),
            (corners[3], corners[0]),
        ];
        Drawable {
            kind: ElementKind::Rectangle,
            strokes: self.passes(&edges),
        }
    }

    fn passes(&mut self, segments: &[(Point, Point)]) -> Vec<BezPath> {
        let mut primary = BezPath::new();
        for &(a, b) in segments {
            self.segment(&mut primary, a, b, false);
        }
        if !self.options.multi_stroke {
            return vec![primary];
        }

        let mut overlay = BezPath::new();
        for &(a, b) in segments {
            self.segment(&mut overlay, a, b, true);
        }
        vec![primary, overlay]
    }

    /// Random value in [-amount, amount], scaled by roughness.
    fn offset(&mut self, amount: f64, gain: f64) -> f64 {
        self.options.roughness * gain * self.rng.signed() * amount
    }

    fn jitter(&mut self, amount: f64, gain: f64) -> Vec2 {
        Vec2::new(self.offset(amount, gain), self.offset(amount, gain))
    }

    fn segment(&mut self, path: &mut BezPath, a: Point, b: Point, overlay: bool) {
        let delta = b - a;
        let len_sq = delta.hypot2();
        let len = len_sq.sqrt();
        let gain = roughness_gain(len);

        let mut max_offset = self.options.max_randomness_offset;
        if max_offset * max_offset * 100.0 > len_sq {
            max_offset = len / 10.0;
        }
        let spread = if overlay { max_offset / 2.0 } else { max_offset };

        let diverge = 0.2 + self.rng.unit() * 0.2;
        let bow_scale = self.options.bowing * self.options.max_randomness_offset / 200.0;
        let bow = Vec2::new(
            self.offset(delta.y * bow_scale, gain),
            self.offset(-delta.x * bow_scale, gain),
        );

        let start = a + self.jitter(spread, gain);
        let c1 = a + bow + delta * diverge + self.jitter(spread, gain);
        let c2 = a + bow + delta * (2.0 * diverge) + self.jitter(spread, gain);
        let end = b + self.jitter(spread, gain);

        path.move_to(start);
        path.curve_to(c1, c2, end);
    }
}

/// Long segments wobble proportionally less.
fn roughness_gain(len: f64) -> f64 {
    if len < 200.0 {
        1.0
    } else if len > 500.0 {
        0.4
    } else {
        -0.0016668 * len + 1.233334
    }
}
