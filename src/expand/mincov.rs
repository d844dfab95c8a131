//! Minimum-cover fallback
//!
//! When every ON-set absorption is exhausted but OFF cubes still block, the
//! residual constraint becomes a unate cover problem: the parts kept lowered
//! must hit the force-lower image of every remaining blocking cube. Solving
//! it raises everything else in one step. A size guard bails to the
//! part-frequency heuristic when unravelling the blocking rows would blow up.

use super::essentials::essen_parts;
use super::feasible::most_frequent;
use crate::config::ExpandConfig;
use crate::cover::Cover;
#[cfg(not(feature = "random-mincov"))]
use crate::cube::Cube;
use crate::cube::{Geometry, PartSet};
use crate::error::ExpandError;
use tracing::trace;

#[cfg(not(feature = "random-mincov"))]
pub(super) fn mincov(
    geom: &Geometry,
    bb: &mut Cover,
    raise: &mut PartSet,
    freeset: &mut PartSet,
    config: &ExpandConfig,
) -> Result<(), ExpandError> {
    // Rows the lowering set must hit. A row containing a part outside the
    // free set is already satisfied: that part stays lowered no matter what.
    let mut b = Cover::with_capacity(bb.active_count());
    for i in bb.active_indices() {
        let mut row = PartSet::empty(geom.size());
        geom.force_lower(&mut row, bb.cube(i).parts(), raise);
        if row.implies(freeset) {
            b.push(Cube::new(row));
        }
    }

    // Unravelling multiplies each row by its free output parts; refuse to
    // build a problem past the configured limit
    let mut nset = 0usize;
    let mut too_big = false;
    for cube in b.iter() {
        let d = cube.parts().dist(geom.output_mask());
        let expansion = if d > 1 { d } else { 1 };
        nset += expansion;
        if expansion > config.mincov_limit || nset > config.mincov_limit {
            too_big = true;
            break;
        }
    }
    if too_big {
        trace!(rows = b.len(), limit = config.mincov_limit, "mincov size guard: falling back to part frequency");
        return raise_most_frequent(geom, bb, raise, freeset);
    }

    let b = crate::unate::unravel_output(geom, b);
    let xlower = crate::unate::minimum_cover(geom, &b);
    trace!(rows = b.len(), lowered = xlower.count(), "mincov solved");

    let raised = freeset.difference(&xlower);
    raise.union_with(&raised);
    freeset.clear();
    bb.deactivate_all();
    Ok(())
}

#[cfg(feature = "random-mincov")]
pub(super) fn mincov(
    geom: &Geometry,
    bb: &mut Cover,
    raise: &mut PartSet,
    freeset: &mut PartSet,
    _config: &ExpandConfig,
) -> Result<(), ExpandError> {
    use rand::Rng;

    let ord = freeset.count();
    if ord == 0 {
        bb.deactivate_all();
        return Ok(());
    }
    let pick = rand::thread_rng().gen_range(0..ord);
    let part = match freeset.iter().nth(pick) {
        Some(part) => part,
        None => return Ok(()),
    };
    trace!(part, "random mincov pick");
    raise.insert(part);
    freeset.remove(part);
    essen_parts(geom, bb, None, raise, freeset)
}

/// Heuristic branch: raise one most-frequent free part and re-derive the
/// essential lowerings, letting the caller's blocking loop iterate
#[cfg_attr(feature = "random-mincov", allow(dead_code))]
fn raise_most_frequent(
    geom: &Geometry,
    bb: &mut Cover,
    raise: &mut PartSet,
    freeset: &mut PartSet,
) -> Result<(), ExpandError> {
    match most_frequent(None, freeset) {
        Some(part) => {
            raise.insert(part);
            freeset.remove(part);
            essen_parts(geom, bb, None, raise, freeset)
        }
        None => {
            // no free part left; nothing can block an empty expansion
            bb.deactivate_all();
            Ok(())
        }
    }
}
