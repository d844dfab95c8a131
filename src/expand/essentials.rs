//! Essential lowering and raising
//!
//! These routines narrow the free set during one cube expansion. Lowering is
//! forced by OFF cubes one variable away from the raising set; raising is
//! free for any part no remaining OFF cube blocks.

use crate::cover::Cover;
use crate::cube::{Geometry, PartSet};
use crate::error::ExpandError;

/// Remove from the free set every part forced into lowering
///
/// An active OFF cube at distance 1 from the raising set pins its separating
/// variable: the OFF cube's parts there can never be raised, and the cube
/// itself can never block again, so it is deactivated. Distance 0 means the
/// ON- and OFF-sets overlap, which is a caller error.
pub(super) fn essen_parts(
    geom: &Geometry,
    bb: &mut Cover,
    cc: Option<&mut Cover>,
    raise: &PartSet,
    freeset: &mut PartSet,
) -> Result<(), ExpandError> {
    let mut xlower = PartSet::empty(geom.size());

    for i in 0..bb.len() {
        if !bb.cube(i).is_active() {
            continue;
        }
        match geom.cdist01(bb.cube(i).parts(), raise) {
            0 => {
                return Err(ExpandError::NotOrthogonal {
                    raise: geom.set_string(raise),
                    off_cube: geom.set_string(bb.cube(i).parts()),
                });
            }
            1 => {
                geom.force_lower(&mut xlower, bb.cube(i).parts(), raise);
                bb.set_active(i, false);
            }
            _ => {}
        }
    }

    if !xlower.is_empty() {
        freeset.subtract(&xlower);
        elim_lowering(geom, bb, cc, raise, freeset);
    }
    Ok(())
}

/// Raise every free part no active OFF cube touches
///
/// Such parts are blocked by nothing; raising them can only enlarge the
/// result, so they move from the free set to the raising set at once.
pub(super) fn essen_raising(
    geom: &Geometry,
    bb: &Cover,
    raise: &mut PartSet,
    freeset: &mut PartSet,
) {
    let mut blocked = PartSet::empty(geom.size());
    for cube in bb.iter().filter(|c| c.is_active()) {
        blocked.union_with(cube.parts());
    }

    let unblocked = freeset.difference(&blocked);
    raise.union_with(&unblocked);
    freeset.subtract(&unblocked);
}

/// Prune the blocking and covering sets against the over-expanded cube
///
/// With `r` the union of raising and free sets, an OFF cube disjoint from
/// `r` can never block a future raise, and an ON cube not contained in `r`
/// can never be absorbed; both drop out of their working selections.
pub(super) fn elim_lowering(
    geom: &Geometry,
    bb: &mut Cover,
    cc: Option<&mut Cover>,
    raise: &PartSet,
    freeset: &PartSet,
) {
    let r = raise.union(freeset);

    for i in 0..bb.len() {
        if bb.cube(i).is_active() && !geom.cdist0(bb.cube(i).parts(), &r) {
            bb.set_active(i, false);
        }
    }

    if let Some(cc) = cc {
        for i in 0..cc.len() {
            if cc.cube(i).is_active() && !cc.cube(i).parts().implies(&r) {
                cc.set_active(i, false);
            }
        }
    }
}
