//! Redundancy marking for covers
//!
//! [`mark_irredundant`] flags which cubes of a cover are essential to it: a
//! cube is redundant when the remaining active cubes, together with the
//! don't-care set, already contain it. Containment is decided the classic
//! way, by cofactoring the candidate covering set against the cube and
//! testing the cofactor for tautology.

use crate::cover::Cover;
use crate::cube::{Geometry, PartSet};

/// Flag the active cubes of `f` down to an irredundant subset
///
/// Walks the cubes in order; each cube found covered by the union of the
/// other still-active cubes of `f` plus all of `d` is deactivated. The scan
/// order makes the result deterministic.
pub(crate) fn mark_irredundant(geom: &Geometry, f: &mut Cover, d: &Cover) {
    f.activate_all();

    for i in 0..f.len() {
        let target = f.cube(i).parts().clone();
        let others: Vec<&PartSet> = f
            .iter()
            .enumerate()
            .filter(|&(j, cube)| j != i && cube.is_active())
            .map(|(_, cube)| cube.parts())
            .chain(d.iter().map(|cube| cube.parts()))
            .collect();

        if cube_is_covered(geom, &others, &target) {
            f.set_active(i, false);
        }
    }
}

/// True when the union of `cubes` contains every point of `c`
pub(crate) fn cube_is_covered(geom: &Geometry, cubes: &[&PartSet], c: &PartSet) -> bool {
    let complement = geom.fullset().difference(c);
    let cofactor: Vec<PartSet> = cubes
        .iter()
        .filter(|p| geom.cdist0(p, c))
        .map(|p| p.union(&complement))
        .collect();
    tautology(geom, cofactor)
}

/// True when the union of `cubes` is the universe
///
/// Recursive multi-valued tautology check: pick the first variable some cube
/// restricts, cofactor against each of its parts, and require every branch
/// to be a tautology. Each recursion level resolves one variable, so the
/// depth is bounded by the variable count.
pub(crate) fn tautology(geom: &Geometry, cubes: Vec<PartSet>) -> bool {
    if cubes.iter().any(|c| c.is_full()) {
        return true;
    }
    if cubes.is_empty() {
        return false;
    }

    // a part missing from every cube leaves an uncovered point
    let mut union = PartSet::empty(geom.size());
    for cube in &cubes {
        union.union_with(cube);
    }
    if !union.is_full() {
        return false;
    }

    let split_var = (0..geom.num_vars())
        .find(|&var| cubes.iter().any(|c| !geom.var_is_full(c, var)));
    let var = match split_var {
        Some(var) => var,
        // every cube full in every variable, but none full overall: unreachable
        None => return true,
    };

    let mask = geom.var_mask(var);
    for part in mask.iter() {
        let branch: Vec<PartSet> = cubes
            .iter()
            .filter(|c| c.contains(part))
            .map(|c| c.union(mask))
            .collect();
        if !tautology(geom, branch) {
            return false;
        }
    }
    true
}
