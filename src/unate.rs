//! Unate covering support for the minimum-cover fallback
//!
//! The expansion core reduces its residual blocking constraint to a unate
//! cover problem: pick a set of parts hitting every blocking row. Rows are
//! first unravelled so each fixes at most one output part, which makes the
//! per-row hitting semantics exact.

use crate::cover::Cover;
use crate::cube::{Cube, Geometry, PartSet};

/// Split every row with more than one output part into one row per part
///
/// Input-variable parts are copied unchanged; a row with zero or one output
/// parts passes through as is.
pub(crate) fn unravel_output(geom: &Geometry, b: Cover) -> Cover {
    let mut unravelled = Cover::with_capacity(b.len());
    for cube in b.iter() {
        let out_parts: Vec<usize> = cube
            .parts()
            .intersection(geom.output_mask())
            .iter()
            .collect();
        if out_parts.len() <= 1 {
            unravelled.push(cube.clone());
        } else {
            let stem = cube.parts().difference(geom.output_mask());
            for part in out_parts {
                let mut parts = stem.clone();
                parts.insert(part);
                unravelled.push(Cube::new(parts));
            }
        }
    }
    unravelled
}

/// Choose a set of parts hitting every row of `b`
///
/// Greedy: repeatedly take the part covering the most remaining rows
/// (smallest index on ties), then prune until every chosen part is the sole
/// hit for some row. The pruning keeps the result irredundant, which the
/// expansion step relies on to produce primes.
pub(crate) fn minimum_cover(geom: &Geometry, b: &Cover) -> PartSet {
    let nrows = b.len();
    let mut covered = vec![false; nrows];
    let mut chosen: Vec<usize> = Vec::new();

    loop {
        let mut counts = vec![0usize; geom.size()];
        let mut remaining = 0;
        for (row, cube) in b.iter().enumerate() {
            if !covered[row] {
                remaining += 1;
                cube.parts().tally(&mut counts);
            }
        }
        if remaining == 0 {
            break;
        }

        let mut best_part = None;
        let mut best_count = 0;
        for (part, &count) in counts.iter().enumerate() {
            if count > best_count {
                best_part = Some(part);
                best_count = count;
            }
        }
        let part = match best_part {
            Some(part) => part,
            // an uncoverable (empty) row; nothing more can be hit
            None => break,
        };

        chosen.push(part);
        for (row, cube) in b.iter().enumerate() {
            if cube.parts().contains(part) {
                covered[row] = true;
            }
        }
    }

    // Drop parts whose rows are all hit by another chosen part
    let mut kept = chosen.clone();
    for &candidate in chosen.iter().rev() {
        let redundant = b.iter().all(|cube| {
            !cube.parts().contains(candidate)
                || kept
                    .iter()
                    .any(|&other| other != candidate && cube.parts().contains(other))
        });
        if redundant {
            kept.retain(|&part| part != candidate);
        }
    }

    let mut result = PartSet::empty(geom.size());
    for part in kept {
        result.insert(part);
    }
    result
}
