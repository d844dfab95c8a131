//! Cube expansion
//!
//! [`expand`] enlarges every non-prime cube of an ON-set cover into a prime
//! implicant, absorbing other ON cubes along the way, while never
//! intersecting the OFF-set. One cube at a time, [`expand1`] runs a fixed
//! fallback sequence:
//!
//! 1. **Essential lowering** — OFF cubes one variable away pin parts that
//!    can never be raised.
//! 2. **Feasible covering** — greedily absorb whole ON cubes whose coverage
//!    stays orthogonal, with a one-level lookahead over the candidates.
//! 3. **Part frequency** — when no candidate survives, raise toward the
//!    densest remaining ON mass.
//! 4. **Minimum cover** — settle the residual blocking constraint as a unate
//!    cover problem, with a size guard falling back to the part-frequency
//!    heuristic.
//!
//! In non-sparse mode the output variable is frozen before the expansion
//! starts, so only input parts move; the sparse-cleanup pass uses this to
//! re-expand the dense parts of a cover without disturbing its outputs.
//!
//! # Examples
//!
//! ```
//! use espresso_expand::{expand, Cover, Geometry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let geom = Geometry::new(2, 1)?;
//!
//! let mut f = Cover::new();
//! f.push(geom.cube(&[Some(false), Some(true)], &[true])?);  // 01 -> 1
//! f.push(geom.cube(&[Some(true), Some(true)], &[true])?);   // 11 -> 1
//!
//! let mut r = Cover::new();
//! r.push(geom.cube(&[Some(false), Some(false)], &[true])?); // 00 -> 0
//!
//! let primes = expand(&geom, f, &mut r, false)?;
//!
//! // both cubes merge into the single prime -1 -> 1
//! assert_eq!(primes.len(), 1);
//! assert_eq!(geom.cube_string(primes.cube(0)), "-1 1");
//! assert!(primes.cube(0).is_prime());
//! # Ok(())
//! # }
//! ```

mod essentials;
mod feasible;
mod mincov;


use crate::config::ExpandConfig;
use crate::cover::{mini_sort, Cover};
use crate::cube::{Geometry, PartSet};
use crate::error::ExpandError;
use essentials::{elim_lowering, essen_parts};
use feasible::{most_frequent, select_feasible};
use tracing::debug;

/// Expand every non-prime cube of `f` into a prime implicant
///
/// Cubes absorbed along the way are removed; every returned cube carries the
/// `PRIME` flag. `r` is the OFF-set; only its working flags are touched.
/// With `nonsparse` set, the output variable is frozen and only input parts
/// are raised.
///
/// Returns an error when `f` and `r` are found to intersect, which is a
/// precondition violation by the caller.
pub fn expand(
    geom: &Geometry,
    f: Cover,
    r: &mut Cover,
    nonsparse: bool,
) -> Result<Cover, ExpandError> {
    expand_with_config(geom, f, r, nonsparse, &ExpandConfig::default())
}

/// [`expand`] with an explicit configuration
pub fn expand_with_config(
    geom: &Geometry,
    mut f: Cover,
    r: &mut Cover,
    nonsparse: bool,
    config: &ExpandConfig,
) -> Result<Cover, ExpandError> {
    // Small cubes sit at the edges of the cover and have the most room to
    // grow; consider them first
    mini_sort(geom, &mut f);

    let mut init_lower = PartSet::empty(geom.size());
    if nonsparse {
        init_lower.union_with(geom.output_mask());
    }

    for i in 0..f.len() {
        f.cube_mut(i).clear_covered();
        f.cube_mut(i).clear_nonessential();
    }

    for i in 0..f.len() {
        if f.cube(i).is_prime() || f.cube(i).is_covered() {
            continue;
        }
        let absorbed = expand1(geom, r, &mut f, i, &init_lower, config)?;
        debug!(
            cube = %geom.cube_string(f.cube(i)),
            absorbed,
            "expanded to prime"
        );
    }

    // Drop the cubes absorbed during the expansion
    f.activate_all();
    for i in 0..f.len() {
        if f.cube(i).is_covered() {
            f.set_active(i, false);
        }
    }
    if f.active_count() < f.len() {
        f.retain_active();
    }
    Ok(f)
}

/// Expand the single cube `cc[idx]` against the blocking cover `bb`
///
/// Returns the number of ON cubes absorbed. On return the cube holds its
/// expanded parts and is flagged `PRIME`; when it absorbed nothing and fell
/// short of the over-expanded cube it is additionally flagged `NONESSEN`.
fn expand1(
    geom: &Geometry,
    bb: &mut Cover,
    cc: &mut Cover,
    idx: usize,
    init_lower: &PartSet,
    config: &ExpandConfig,
) -> Result<usize, ExpandError> {
    // The cube must not absorb itself
    cc.cube_mut(idx).set_prime();

    bb.activate_all();
    for i in 0..cc.len() {
        let eligible = !(cc.cube(i).is_covered() || cc.cube(i).is_prime());
        cc.set_active(i, eligible);
    }

    let mut num_covered = 0;
    let mut super_cube = cc.cube(idx).parts().clone();
    let mut raise = cc.cube(idx).parts().clone();
    let mut freeset = geom.fullset().difference(&raise);

    if !init_lower.is_empty() {
        freeset.subtract(init_lower);
        elim_lowering(geom, bb, Some(&mut *cc), &raise, &freeset);
    }

    essen_parts(geom, bb, Some(&mut *cc), &raise, &mut freeset)?;
    let overexpanded = raise.union(&freeset);

    if cc.active_count() > 0 {
        select_feasible(
            geom,
            bb,
            cc,
            &mut raise,
            &mut freeset,
            &mut super_cube,
            &mut num_covered,
        )?;
    }

    // No feasible cover remains; greedily raise toward the densest ON mass
    while cc.active_count() > 0 {
        match most_frequent(Some(&*cc), &freeset) {
            Some(part) => {
                raise.insert(part);
                freeset.remove(part);
                essen_parts(geom, bb, Some(&mut *cc), &raise, &mut freeset)?;
            }
            None => break,
        }
    }

    // Settle whatever still blocks
    while bb.active_count() > 0 {
        mincov::mincov(geom, bb, &mut raise, &mut freeset, config)?;
    }

    raise.union_with(&freeset);

    let inessential = num_covered == 0 && raise != overexpanded;
    let cube = cc.cube_mut(idx);
    cube.parts_mut().copy_from(&raise);
    cube.set_prime();
    cube.clear_covered();
    if inessential {
        cube.set_nonessential();
    }
    Ok(num_covered)
}
