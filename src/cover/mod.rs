//! Covers: ordered collections of cubes
//!
//! A **cover** is a disjunction of cubes together with a working selection:
//! each cube carries an `ACTIVE` flag and the cover caches the number of
//! active cubes. The selection lets the algorithms mark a sub-cover without
//! physically removing elements; [`Cover::retain_active`] materialises the
//! compacted cover when the selection becomes permanent.
//!
//! Every change to a cube's `ACTIVE` flag goes through [`Cover::set_active`]
//! (or the bulk helpers) so the cached count and the flags can never drift.
//!
//! # Examples
//!
//! ```
//! use espresso_expand::{Cover, Geometry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let geom = Geometry::new(2, 1)?;
//! let mut cover = Cover::new();
//! cover.push(geom.cube(&[Some(false), Some(true)], &[true])?);
//! cover.push(geom.cube(&[Some(true), Some(false)], &[true])?);
//!
//! assert_eq!(cover.len(), 2);
//! assert_eq!(cover.active_count(), 2);
//! # Ok(())
//! # }
//! ```

mod cost;

pub use cost::{cover_cost, Cost};

use crate::cube::{Cube, Geometry};

/// An ordered collection of cubes with a cached active-cube count
#[derive(Clone, Debug, Default)]
pub struct Cover {
    cubes: Vec<Cube>,
    active_count: usize,
}

impl Cover {
    /// Create an empty cover
    pub fn new() -> Self {
        Cover {
            cubes: Vec::new(),
            active_count: 0,
        }
    }

    /// Create an empty cover with room for `capacity` cubes
    pub fn with_capacity(capacity: usize) -> Self {
        Cover {
            cubes: Vec::with_capacity(capacity),
            active_count: 0,
        }
    }

    /// Number of cubes, active or not
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    /// True when the cover holds no cubes
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Number of cubes currently flagged active
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Append a cube, accounting for its active flag
    pub fn push(&mut self, cube: Cube) {
        if cube.is_active() {
            self.active_count += 1;
        }
        self.cubes.push(cube);
    }

    /// Borrow cube `index`
    pub fn cube(&self, index: usize) -> &Cube {
        &self.cubes[index]
    }

    // Mutable access is crate-internal; ACTIVE changes must still go through
    // set_active so the cached count stays correct.
    pub(crate) fn cube_mut(&mut self, index: usize) -> &mut Cube {
        &mut self.cubes[index]
    }

    /// Flip the active flag of cube `index`, keeping the cached count in step
    pub(crate) fn set_active(&mut self, index: usize, active: bool) {
        let cube = &mut self.cubes[index];
        if cube.is_active() != active {
            cube.set_active_flag(active);
            if active {
                self.active_count += 1;
            } else {
                self.active_count -= 1;
            }
        }
    }

    /// Flag every cube active
    pub(crate) fn activate_all(&mut self) {
        for cube in &mut self.cubes {
            cube.set_active_flag(true);
        }
        self.active_count = self.cubes.len();
    }

    /// Flag every cube inactive
    pub(crate) fn deactivate_all(&mut self) {
        for cube in &mut self.cubes {
            cube.set_active_flag(false);
        }
        self.active_count = 0;
    }

    /// Recompute the cached count from the per-cube flags
    pub(crate) fn recount_active(&mut self) {
        self.active_count = self.cubes.iter().filter(|c| c.is_active()).count();
    }

    /// Physically remove every inactive cube
    pub fn retain_active(&mut self) {
        self.cubes.retain(|c| c.is_active());
        self.active_count = self.cubes.len();
    }

    /// Iterate over all cubes
    pub fn iter(&self) -> impl Iterator<Item = &Cube> {
        self.cubes.iter()
    }

    /// Iterate over the indices of currently active cubes
    pub(crate) fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cubes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_active())
            .map(|(i, _)| i)
    }

    pub(crate) fn take_cubes(&mut self) -> Vec<Cube> {
        self.active_count = 0;
        std::mem::take(&mut self.cubes)
    }

    pub(crate) fn replace_cubes(&mut self, cubes: Vec<Cube>) {
        self.cubes = cubes;
        self.recount_active();
    }
}

impl FromIterator<Cube> for Cover {
    fn from_iter<T: IntoIterator<Item = Cube>>(iter: T) -> Self {
        let mut cover = Cover::new();
        for cube in iter {
            cover.push(cube);
        }
        cover
    }
}

/// Reorder `f` so cubes made of rare parts come first
///
/// Each part is weighted by how often it occurs across the cover; a cube's
/// weight is the sum over its parts. Sorting by ascending weight considers
/// the cubes "at the edges" of the cover first, where expansion has the most
/// room. The sort is stable, so equal weights keep their input order.
pub(crate) fn mini_sort(geom: &Geometry, f: &mut Cover) {
    let mut counts = vec![0usize; geom.size()];
    for cube in f.iter() {
        cube.parts().tally(&mut counts);
    }

    let mut keyed: Vec<(usize, Cube)> = f
        .take_cubes()
        .into_iter()
        .map(|cube| {
            let weight = cube.parts().iter().map(|part| counts[part]).sum();
            (weight, cube)
        })
        .collect();
    keyed.sort_by_key(|&(weight, _)| weight);

    f.replace_cubes(keyed.into_iter().map(|(_, cube)| cube).collect());
}
