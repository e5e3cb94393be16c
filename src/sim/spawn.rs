//! Falling object placement
//!
//! Positions are rejection-sampled so a new object never spawns within
//! `min_spawn_distance` of a live one. The resample budget is bounded: once it
//! runs out the free intervals are computed and sampled directly. Only a
//! playfield with no free x at all falls back to the best-separated candidate.

use rand::Rng;

use super::state::{FallingObject, ObjectKind};
use crate::tuning::Tuning;

/// Where and what to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub kind: ObjectKind,
    pub radius: i32,
    /// True when the distance rule could not be met within the attempt budget
    pub relaxed: bool,
}

/// Horizontal distance to the nearest live object (`i32::MAX` when there is none)
pub fn clearance(x: i32, existing: &[FallingObject]) -> i32 {
    existing
        .iter()
        .map(|obj| (x - obj.x).abs())
        .min()
        .unwrap_or(i32::MAX)
}

/// Inclusive x ranges in `[lo, hi]` farther than `min_distance` from every live object
pub fn free_intervals(existing: &[FallingObject], lo: i32, hi: i32, min_distance: i32) -> Vec<(i32, i32)> {
    let mut xs: Vec<i32> = existing.iter().map(|obj| obj.x).collect();
    xs.sort_unstable();

    let mut free = Vec::new();
    let mut start = lo;
    for x in xs {
        let end = hi.min(x.saturating_sub(min_distance).saturating_sub(1));
        if start <= end {
            free.push((start, end));
        }
        start = start.max(x.saturating_add(min_distance).saturating_add(1));
        if start > hi {
            return free;
        }
    }
    if start <= hi {
        free.push((start, hi));
    }
    free
}

/// Uniform pick across all intervals
fn sample_intervals<R: Rng + ?Sized>(intervals: &[(i32, i32)], rng: &mut R) -> Option<i32> {
    let total: u64 = intervals.iter().map(|&(a, b)| (b - a) as u64 + 1).sum();
    if total == 0 {
        return None;
    }
    let mut offset = rng.random_range(0..total);
    for &(a, b) in intervals {
        let len = (b - a) as u64 + 1;
        if offset < len {
            return Some(a + offset as i32);
        }
        offset -= len;
    }
    None
}

/// Pick a spawn placement relative to the live objects
pub fn place<R: Rng + ?Sized>(existing: &[FallingObject], tuning: &Tuning, rng: &mut R) -> Placement {
    let (lo, hi) = tuning.spawn_range();
    let kind = if rng.random_bool(0.5) {
        ObjectKind::Catch
    } else {
        ObjectKind::Avoid
    };
    let radius = rng.random_range(tuning.object_min_radius..=tuning.object_max_radius);

    // Best fallback so far: (x, clearance)
    let mut best: Option<(i32, i32)> = None;

    for _ in 0..tuning.max_spawn_attempts {
        let x = rng.random_range(lo..=hi);
        let gap = clearance(x, existing);
        if gap > tuning.min_spawn_distance {
            return Placement {
                x,
                kind,
                radius,
                relaxed: false,
            };
        }
        if best.is_none_or(|(_, best_gap)| gap > best_gap) {
            best = Some((x, gap));
        }
    }

    let free = free_intervals(existing, lo, hi, tuning.min_spawn_distance);
    if let Some(x) = sample_intervals(&free, rng) {
        return Placement {
            x,
            kind,
            radius,
            relaxed: false,
        };
    }

    let x = best.map(|(x, _)| x).unwrap_or(lo);
    log::debug!(
        "Spawn crowded: {} live objects, placing at x={} with relaxed spacing",
        existing.len(),
        x
    );
    Placement {
        x,
        kind,
        radius,
        relaxed: true,
    }
}
