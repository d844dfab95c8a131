//! Cube geometry and cube types
//!
//! A **cube** is a product term over a set of multi-valued variables: a bit
//! vector with one bit per *part*, where bit `i` set means "part `i`
//! permitted". Input variables are binary and own two consecutive parts each
//! (part `2v` is the complemented literal, part `2v + 1` the true literal);
//! the single **output variable** is the last variable and owns one part per
//! output function.
//!
//! All part-layout knowledge lives in [`Geometry`], a context object built
//! once per problem and passed by reference into every operation. Several
//! geometries may coexist in one process; nothing here is global.
//!
//! # Examples
//!
//! ```
//! use espresso_expand::Geometry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Two binary inputs, one output: parts 0..4 are inputs, part 4 the output
//! let geom = Geometry::new(2, 1)?;
//! assert_eq!(geom.size(), 5);
//!
//! // x0 = 1, x1 = don't care, output asserted
//! let cube = geom.cube(&[Some(true), None], &[true])?;
//! assert_eq!(geom.cube_string(&cube), "1- 1");
//! # Ok(())
//! # }
//! ```

mod sets;

pub use sets::{PartIter, PartSet};

use crate::error::{CubeError, GeometryError};

// Cube flag bits, kept apart from the semantic part bits
const PRIME: u8 = 0x01;
const NONESSEN: u8 = 0x02;
const ACTIVE: u8 = 0x04;
const COVERED: u8 = 0x08;

/// A cube: a part set plus per-cube status flags
///
/// The flags (`PRIME`, `NONESSEN`, `ACTIVE`, `COVERED`) are working state for
/// the minimisation passes; they never influence the semantic part bits.
#[derive(Clone, Debug)]
pub struct Cube {
    parts: PartSet,
    flags: u8,
}

impl Cube {
    /// Create a cube from a part set; the cube starts out active
    pub fn new(parts: PartSet) -> Self {
        Cube {
            parts,
            flags: ACTIVE,
        }
    }

    /// The parts permitted by this cube
    pub fn parts(&self) -> &PartSet {
        &self.parts
    }

    pub(crate) fn parts_mut(&mut self) -> &mut PartSet {
        &mut self.parts
    }

    /// True when this cube has been expanded to a prime implicant
    pub fn is_prime(&self) -> bool {
        self.flags & PRIME != 0
    }

    /// True when this cube was absorbed by the expansion of another cube
    pub fn is_covered(&self) -> bool {
        self.flags & COVERED != 0
    }

    /// True when this cube is part of the current working selection
    pub fn is_active(&self) -> bool {
        self.flags & ACTIVE != 0
    }

    /// True when this prime absorbed nothing and fell short of the
    /// over-expanded cube
    pub fn is_nonessential(&self) -> bool {
        self.flags & NONESSEN != 0
    }

    pub(crate) fn set_prime(&mut self) {
        self.flags |= PRIME;
    }

    pub(crate) fn clear_prime(&mut self) {
        self.flags &= !PRIME;
    }

    pub(crate) fn set_covered(&mut self) {
        self.flags |= COVERED;
    }

    pub(crate) fn clear_covered(&mut self) {
        self.flags &= !COVERED;
    }

    pub(crate) fn set_nonessential(&mut self) {
        self.flags |= NONESSEN;
    }

    pub(crate) fn clear_nonessential(&mut self) {
        self.flags &= !NONESSEN;
    }

    // ACTIVE changes must go through Cover::set_active so the cover's cached
    // count stays coherent.
    pub(crate) fn set_active_flag(&mut self, active: bool) {
        if active {
            self.flags |= ACTIVE;
        } else {
            self.flags &= !ACTIVE;
        }
    }
}

/// Part layout of a minimisation problem
///
/// `Geometry` carries everything the algorithms need to know about the
/// variable structure: total part count, per-variable part ranges and masks,
/// which variable is the output, and the canonical full and empty sets.
///
/// Build one with [`Geometry::new`] and thread it through every call; it is
/// never mutated after construction.
#[derive(Clone, Debug)]
pub struct Geometry {
    num_inputs: usize,
    num_outputs: usize,
    num_vars: usize,
    size: usize,
    first_part: Vec<usize>,
    last_part: Vec<usize>,
    var_mask: Vec<PartSet>,
    fullset: PartSet,
    emptyset: PartSet,
}

impl Geometry {
    /// Create the geometry for `num_inputs` binary inputs and `num_outputs`
    /// output functions
    ///
    /// The output variable is the last variable and owns one part per output.
    pub fn new(num_inputs: usize, num_outputs: usize) -> Result<Self, GeometryError> {
        if num_outputs == 0 {
            return Err(GeometryError::NoOutputParts);
        }

        let num_vars = num_inputs + 1;
        let size = 2 * num_inputs + num_outputs;

        let mut first_part = Vec::with_capacity(num_vars);
        let mut last_part = Vec::with_capacity(num_vars);
        let mut var_mask = Vec::with_capacity(num_vars);
        for var in 0..num_inputs {
            first_part.push(2 * var);
            last_part.push(2 * var + 1);
        }
        first_part.push(2 * num_inputs);
        last_part.push(size - 1);

        for var in 0..num_vars {
            let mut mask = PartSet::empty(size);
            for part in first_part[var]..=last_part[var] {
                mask.insert(part);
            }
            var_mask.push(mask);
        }

        Ok(Geometry {
            num_inputs,
            num_outputs,
            num_vars,
            size,
            first_part,
            last_part,
            var_mask,
            fullset: PartSet::full(size),
            emptyset: PartSet::empty(size),
        })
    }

    /// Total number of parts
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of binary input variables
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Number of output functions (parts of the output variable)
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Number of variables, output variable included
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Index of the output variable
    pub fn output_var(&self) -> usize {
        self.num_vars - 1
    }

    /// First part index of variable `var`
    pub fn first_part(&self, var: usize) -> usize {
        self.first_part[var]
    }

    /// Last part index of variable `var`
    pub fn last_part(&self, var: usize) -> usize {
        self.last_part[var]
    }

    /// Mask of all parts belonging to variable `var`
    pub fn var_mask(&self, var: usize) -> &PartSet {
        &self.var_mask[var]
    }

    /// Mask of all parts of the output variable
    pub fn output_mask(&self) -> &PartSet {
        &self.var_mask[self.num_vars - 1]
    }

    /// The all-ones part set
    pub fn fullset(&self) -> &PartSet {
        &self.fullset
    }

    /// The all-zeros part set
    pub fn emptyset(&self) -> &PartSet {
        &self.emptyset
    }

    /// True when `set` contains every part of variable `var`
    pub fn var_is_full(&self, set: &PartSet, var: usize) -> bool {
        self.var_mask[var].implies(set)
    }

    /// True when `set` contains no part of variable `var`
    pub fn var_is_empty(&self, set: &PartSet, var: usize) -> bool {
        set.is_disjoint(&self.var_mask[var])
    }

    /// Distance-0 test: true iff `a` and `b` intersect in every variable,
    /// i.e. the cubes they denote have a common point
    pub fn cdist0(&self, a: &PartSet, b: &PartSet) -> bool {
        self.var_mask
            .iter()
            .all(|mask| a.intersects_masked(b, mask))
    }

    /// Count the variables in which `a` and `b` are disjoint, saturating at 2
    ///
    /// Returns 0 when the cubes intersect, 1 when exactly one variable
    /// separates them, 2 when two or more do.
    pub fn cdist01(&self, a: &PartSet, b: &PartSet) -> usize {
        let mut dist = 0;
        for mask in &self.var_mask {
            if !a.intersects_masked(b, mask) {
                dist += 1;
                if dist == 2 {
                    break;
                }
            }
        }
        dist
    }

    /// Accumulate into `dst` the parts of `off` in every variable where `off`
    /// and `raise` are disjoint
    ///
    /// These are the parts which must stay lowered: raising any of them would
    /// re-establish an intersection with `off` in its separating variable.
    pub fn force_lower(&self, dst: &mut PartSet, off: &PartSet, raise: &PartSet) {
        for mask in &self.var_mask {
            if !off.intersects_masked(raise, mask) {
                dst.union_with_masked(off, mask);
            }
        }
    }

    /// Build a cube from PLA-style input and output patterns
    ///
    /// `inputs[v]` is `Some(false)` for the literal `~xv`, `Some(true)` for
    /// `xv`, `None` for don't-care. `outputs[o]` sets part `o` of the output
    /// variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use espresso_expand::Geometry;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let geom = Geometry::new(3, 2)?;
    /// let cube = geom.cube(&[Some(false), None, Some(true)], &[true, false])?;
    /// assert_eq!(geom.cube_string(&cube), "0-1 10");
    /// # Ok(())
    /// # }
    /// ```
    pub fn cube(&self, inputs: &[Option<bool>], outputs: &[bool]) -> Result<Cube, CubeError> {
        if inputs.len() != self.num_inputs {
            return Err(CubeError::InputLengthMismatch {
                expected: self.num_inputs,
                found: inputs.len(),
            });
        }
        if outputs.len() != self.num_outputs {
            return Err(CubeError::OutputLengthMismatch {
                expected: self.num_outputs,
                found: outputs.len(),
            });
        }

        let mut parts = PartSet::empty(self.size);
        for (var, &value) in inputs.iter().enumerate() {
            match value {
                Some(false) => parts.insert(2 * var),
                Some(true) => parts.insert(2 * var + 1),
                None => {
                    parts.insert(2 * var);
                    parts.insert(2 * var + 1);
                }
            }
        }
        let base = 2 * self.num_inputs;
        for (out, &asserted) in outputs.iter().enumerate() {
            if asserted {
                parts.insert(base + out);
            }
        }
        Ok(Cube::new(parts))
    }

    /// Build a cube directly from a list of part indices (mainly for tests)
    pub fn cube_from_parts(&self, parts: &[usize]) -> Cube {
        let mut set = PartSet::empty(self.size);
        for &part in parts {
            set.insert(part);
        }
        Cube::new(set)
    }

    /// Render a part set in PLA style: one character per input variable
    /// (`0`, `1`, `-`, or `~` for an empty variable), a space, then one
    /// character per output part
    pub fn set_string(&self, set: &PartSet) -> String {
        let mut text = String::with_capacity(self.num_inputs + 1 + self.num_outputs);
        for var in 0..self.num_inputs {
            let lo = set.contains(2 * var);
            let hi = set.contains(2 * var + 1);
            text.push(match (lo, hi) {
                (true, true) => '-',
                (false, true) => '1',
                (true, false) => '0',
                (false, false) => '~',
            });
        }
        text.push(' ');
        let base = 2 * self.num_inputs;
        for out in 0..self.num_outputs {
            text.push(if set.contains(base + out) { '1' } else { '0' });
        }
        text
    }

    /// Render a cube in PLA style
    pub fn cube_string(&self, cube: &Cube) -> String {
        self.set_string(cube.parts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> Geometry {
        Geometry::new(2, 1).unwrap()
    }

    #[test]
    fn test_geometry_layout() {
        let g = Geometry::new(3, 2).unwrap();
        assert_eq!(g.size(), 8);
        assert_eq!(g.num_vars(), 4);
        assert_eq!(g.output_var(), 3);
        assert_eq!(g.first_part(3), 6);
        assert_eq!(g.last_part(3), 7);
        assert_eq!(g.output_mask().count(), 2);
    }

    #[test]
    fn test_geometry_requires_outputs() {
        assert!(Geometry::new(2, 0).is_err());
    }

    #[test]
    fn test_cdist0() {
        let g = geom();
        let a = g.cube(&[Some(true), Some(true)], &[true]).unwrap();
        let b = g.cube(&[Some(true), None], &[true]).unwrap();
        let c = g.cube(&[Some(false), None], &[true]).unwrap();

        assert!(g.cdist0(a.parts(), b.parts()));
        assert!(!g.cdist0(a.parts(), c.parts()));
    }

    #[test]
    fn test_cdist01() {
        let g = geom();
        let a = g.cube(&[Some(true), Some(true)], &[true]).unwrap();
        let b = g.cube(&[Some(true), Some(true)], &[true]).unwrap();
        let c = g.cube(&[Some(false), Some(true)], &[true]).unwrap();
        let d = g.cube(&[Some(false), Some(false)], &[true]).unwrap();

        assert_eq!(g.cdist01(a.parts(), b.parts()), 0);
        assert_eq!(g.cdist01(a.parts(), c.parts()), 1);
        assert_eq!(g.cdist01(a.parts(), d.parts()), 2);
    }

    #[test]
    fn test_force_lower_collects_separating_parts() {
        let g = geom();
        // off = 0-, raise = 11: variable x0 separates them
        let off = g.cube(&[Some(false), None], &[true]).unwrap();
        let raise = g.cube(&[Some(true), Some(true)], &[true]).unwrap();

        let mut lower = PartSet::empty(g.size());
        g.force_lower(&mut lower, off.parts(), raise.parts());

        // only part 0 (the ~x0 literal) must stay lowered
        let parts: Vec<usize> = lower.iter().collect();
        assert_eq!(parts, vec![0]);
    }

    #[test]
    fn test_cube_string() {
        let g = geom();
        let cube = g.cube(&[Some(true), None], &[true]).unwrap();
        assert_eq!(g.cube_string(&cube), "1- 1");
    }

    #[test]
    fn test_cube_flags_are_independent() {
        let g = geom();
        let mut cube = g.cube(&[None, None], &[true]).unwrap();
        assert!(cube.is_active());
        assert!(!cube.is_prime());

        cube.set_prime();
        cube.set_covered();
        assert!(cube.is_prime());
        assert!(cube.is_covered());
        cube.clear_covered();
        assert!(!cube.is_covered());
        assert!(cube.is_prime());
    }

    #[test]
    fn test_cube_rejects_wrong_dimensions() {
        let g = geom();
        assert!(g.cube(&[Some(true)], &[true]).is_err());
        assert!(g.cube(&[Some(true), None], &[true, false]).is_err());
    }
}
