//! Sparse-variable cleanup
//!
//! [`make_sparse`] lowers the literal count of a minimised cover by
//! alternating two passes until neither improves the cost: [`mv_reduce`]
//! drops output parts that some other cube already provides, then a
//! non-sparse [`expand`](crate::expand()) re-expands the input parts of the
//! cubes the reduction de-primed, with the output variable frozen.

use crate::config::ExpandConfig;
use crate::cover::{cover_cost, Cover};
use crate::cube::{Cube, Geometry};
use crate::error::ExpandError;
use crate::expand::expand_with_config;
use crate::irredundant::mark_irredundant;
use tracing::debug;

/// Alternate output reduction and dense re-expansion to a cost fixed point
///
/// Each pass is accepted only when it strictly lowers the total literal
/// cost; the first non-improving pass ends the loop. The returned cover
/// never costs more than the input.
pub fn make_sparse(
    geom: &Geometry,
    f: Cover,
    d: &Cover,
    r: &mut Cover,
) -> Result<Cover, ExpandError> {
    make_sparse_with_config(geom, f, d, r, &ExpandConfig::default())
}

/// [`make_sparse`] with an explicit configuration
pub fn make_sparse_with_config(
    geom: &Geometry,
    mut f: Cover,
    d: &Cover,
    r: &mut Cover,
    config: &ExpandConfig,
) -> Result<Cover, ExpandError> {
    let mut best_cost = cover_cost(geom, &f);
    debug!(%best_cost, "make_sparse start");

    loop {
        f = mv_reduce(geom, f, d);
        let cost = cover_cost(geom, &f);
        debug!(%cost, "after mv_reduce");
        if cost.total < best_cost.total {
            best_cost = cost;
        } else {
            break;
        }

        f = expand_with_config(geom, f, r, true, config)?;
        let cost = cover_cost(geom, &f);
        debug!(%cost, "after dense expand");
        if cost.total < best_cost.total {
            best_cost = cost;
        } else {
            break;
        }
    }
    Ok(f)
}

/// Lower every output part no cube essentially provides
///
/// For each part of the output variable, the cover and the don't-care set
/// are cofactored by restricting the output to that part alone; cubes the
/// cofactor marks redundant lose the part (and their `PRIME` flag, so a
/// later expansion may regrow their inputs). Cubes whose output variable
/// empties out are dropped.
pub(crate) fn mv_reduce(geom: &Geometry, mut f: Cover, d: &Cover) -> Cover {
    for part in geom.output_mask().iter() {
        let mut f1 = Cover::new();
        let mut origin: Vec<usize> = Vec::new();
        for i in 0..f.len() {
            if f.cube(i).parts().contains(part) {
                let mut parts = f.cube(i).parts().difference(geom.output_mask());
                parts.insert(part);
                f1.push(Cube::new(parts));
                origin.push(i);
            }
        }
        if f1.is_empty() {
            continue;
        }

        let mut d1 = Cover::new();
        for cube in d.iter() {
            if cube.parts().contains(part) {
                let mut parts = cube.parts().difference(geom.output_mask());
                parts.insert(part);
                d1.push(Cube::new(parts));
            }
        }

        mark_irredundant(geom, &mut f1, &d1);

        for (k, &i) in origin.iter().enumerate() {
            if !f1.cube(k).is_active() {
                f.cube_mut(i).parts_mut().remove(part);
                f.cube_mut(i).clear_prime();
            }
        }
    }

    // A cube reduced to an empty output variable covers nothing
    f.activate_all();
    for i in 0..f.len() {
        if f.cube(i).parts().is_disjoint(geom.output_mask()) {
            f.set_active(i, false);
        }
    }
    if f.active_count() < f.len() {
        f.retain_active();
    }
    f
}
