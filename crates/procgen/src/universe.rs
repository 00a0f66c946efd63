//! Galaxy placement across the cryptoverse canvas.

use engine_core::Shape;
use glam::Vec2;
use rand::prelude::*;

/// Candidate positions tried per galaxy before accepting an overlap.
const MAX_ATTEMPTS: usize = 64;

/// Place `count` galaxy centers for footprints of `galaxy_size` on a canvas.
///
/// Every footprint stays inside the canvas. Centers are rejection-sampled to
/// avoid overlapping footprints; when the canvas is too crowded the last
/// candidate is accepted anyway.
pub fn place_galaxies<R: Rng + ?Sized>(count: usize, canvas: Vec2, galaxy_size: Vec2, rng: &mut R) -> Vec<Vec2> {
    let half = (galaxy_size * 0.5).min(canvas * 0.5);
    let lo = half;
    let hi = canvas - half;

    let mut placed: Vec<Shape> = Vec::with_capacity(count);
    for i in 0..count {
        let mut candidate = lo;
        for attempt in 0..MAX_ATTEMPTS {
            candidate = Vec2::new(sample_axis(rng, lo.x, hi.x), sample_axis(rng, lo.y, hi.y));
            let footprint = Shape::rect(candidate, galaxy_size.x, galaxy_size.y);
            if placed.iter().all(|other| !other.bounds_overlap(&footprint)) {
                break;
            }
            if attempt + 1 == MAX_ATTEMPTS {
                log::warn!("Galaxy {} overlaps a neighbour: canvas too crowded", i);
            }
        }
        placed.push(Shape::rect(candidate, galaxy_size.x, galaxy_size.y));
    }

    placed.iter().map(Shape::center).collect()
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}
