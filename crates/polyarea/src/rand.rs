//! Random star-shaped polygons (radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and keep the vertices in increasing angle order. The result
//!   is simple and star-shaped around the origin, traversed counterclockwise.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Used by tests and benchmarks as a source of realistic inputs.

use crate::types::{Vec2, VertexSeq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random star-shaped polygon, counterclockwise.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> VertexSeq {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    // Jitter stays below half a spacing, so the angles remain strictly increasing.
    let angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            phase + (k as f64) * delta + jitter
        })
        .collect();
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vec2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Same cyclic order, starting at vertex `k` (mod n).
pub fn rotate_start(seq: &VertexSeq, k: usize) -> VertexSeq {
    let mut v = seq.as_slice().to_vec();
    if !v.is_empty() {
        let n = v.len();
        v.rotate_left(k % n);
    }
    VertexSeq::new(v)
}

/// Opposite traversal of the same boundary.
pub fn reversed(seq: &VertexSeq) -> VertexSeq {
    seq.as_slice().iter().rev().copied().collect()
}
