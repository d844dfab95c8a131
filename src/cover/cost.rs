//! Literal-count accounting for covers

use super::Cover;
use crate::cube::Geometry;
use std::fmt;

/// Literal-count summary of a cover
///
/// `total` is the figure the sparse-cleanup loop minimises: input literals
/// plus output literals. The cube count is carried alongside for reporting
/// but does not enter `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cost {
    /// Number of cubes in the cover
    pub cubes: usize,
    /// Set parts of every input variable that is not full
    pub input_literals: usize,
    /// Set parts of the output variable, over all cubes
    pub output_literals: usize,
    /// `input_literals + output_literals`
    pub total: usize,
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cubes, {} in, {} out, {} total",
            self.cubes, self.input_literals, self.output_literals, self.total
        )
    }
}

/// Compute the literal cost of `f`
///
/// An input variable with every part set is a don't-care and contributes
/// nothing; a restricted variable contributes one literal per set part.
/// The output variable always contributes its set parts.
pub fn cover_cost(geom: &Geometry, f: &Cover) -> Cost {
    let mut input_literals = 0;
    let mut output_literals = 0;

    for cube in f.iter() {
        for var in 0..geom.num_inputs() {
            if !geom.var_is_full(cube.parts(), var) {
                input_literals += cube.parts().dist(geom.var_mask(var));
            }
        }
        output_literals += cube.parts().dist(geom.output_mask());
    }

    Cost {
        cubes: f.len(),
        input_literals,
        output_literals,
        total: input_literals + output_literals,
    }
}
