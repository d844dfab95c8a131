//! Feasible-cover selection and the part-frequency heuristic
//!
//! The central loop of a cube expansion: repeatedly absorb one ON cube whose
//! coverage is still compatible with the OFF-set, choosing the candidate
//! that keeps the most other candidates alive. When no candidate survives,
//! the expansion falls back to raising the most frequent free part.

use super::essentials::{essen_parts, essen_raising};
use crate::cover::Cover;
use crate::cube::{Geometry, PartSet};
use crate::error::ExpandError;

/// Absorb feasibly-coverable ON cubes into the raising set, one at a time
///
/// Candidates start as all active ON cubes. Each round raises the unblocked
/// parts, absorbs candidates already inside the raising set, discards
/// candidates no longer feasibly coverable, then commits to the best
/// survivor: the one leaving the most peers feasible, with fewest newly
/// raised parts as the tie-break.
#[allow(clippy::too_many_arguments)]
pub(super) fn select_feasible(
    geom: &Geometry,
    bb: &mut Cover,
    cc: &mut Cover,
    raise: &mut PartSet,
    freeset: &mut PartSet,
    super_cube: &mut PartSet,
    num_covered: &mut usize,
) -> Result<(), ExpandError> {
    let mut feas: Vec<usize> = cc.active_indices().collect();
    let mut new_lower: Vec<PartSet> = vec![PartSet::empty(geom.size()); feas.len()];

    loop {
        essen_raising(geom, bb, raise, freeset);

        // Filter: absorb candidates inside the raising set, keep those still
        // feasibly coverable, drop the rest
        let candidates = std::mem::take(&mut feas);
        for i in candidates {
            if !cc.cube(i).is_active() {
                continue;
            }
            if cc.cube(i).parts().implies(raise) {
                super_cube.union_with(cc.cube(i).parts());
                cc.cube_mut(i).set_covered();
                cc.set_active(i, false);
                *num_covered += 1;
            } else {
                let slot = feas.len();
                if feasibly_covered(geom, bb, cc.cube(i).parts(), raise, &mut new_lower[slot]) {
                    feas.push(i);
                }
            }
        }

        if feas.is_empty() {
            return Ok(());
        }

        // Score the survivors: most peers kept feasible, then fewest new parts
        let mut best = 0;
        let mut best_count = 0;
        let mut best_size = usize::MAX;
        for slot in 0..feas.len() {
            let size = cc.cube(feas[slot]).parts().dist(freeset);
            let count = feas
                .iter()
                .filter(|&&peer| new_lower[slot].is_disjoint(cc.cube(peer).parts()))
                .count();
            if count > best_count || (count == best_count && size < best_size) {
                best = slot;
                best_count = count;
                best_size = size;
            }
        }

        raise.union_with(cc.cube(feas[best]).parts());
        freeset.subtract(raise);
        essen_parts(geom, bb, Some(&mut *cc), raise, freeset)?;
    }
}

/// Test whether raising to cover `c` stays orthogonal to the OFF-set
///
/// On success, `new_lower` holds the parts which would be forced into
/// lowering by committing to `c`.
pub(super) fn feasibly_covered(
    geom: &Geometry,
    bb: &Cover,
    c: &PartSet,
    raise: &PartSet,
    new_lower: &mut PartSet,
) -> bool {
    let r = raise.union(c);
    new_lower.clear();

    for cube in bb.iter().filter(|p| p.is_active()) {
        match geom.cdist01(cube.parts(), &r) {
            0 => return false,
            1 => geom.force_lower(new_lower, cube.parts(), &r),
            _ => {}
        }
    }
    true
}

/// Pick the free part occurring most often in the active cubes of `cc`
///
/// With no covering set the counts are all zero and the smallest free part
/// wins; ties always break toward the smallest index, keeping the heuristic
/// deterministic. Returns `None` only when the free set is empty.
pub(super) fn most_frequent(cc: Option<&Cover>, freeset: &PartSet) -> Option<usize> {
    let mut counts = vec![0usize; freeset.num_parts()];
    if let Some(cc) = cc {
        for cube in cc.iter().filter(|p| p.is_active()) {
            cube.parts().tally(&mut counts);
        }
    }

    let mut best = None;
    let mut best_count = 0;
    for part in freeset.iter() {
        if best.is_none() || counts[part] > best_count {
            best = Some(part);
            best_count = counts[part];
        }
    }
    best
}
