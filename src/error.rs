//! Error types for the expansion core
//!
//! Each error source has its own enum with specific variants. Algorithmic
//! fallbacks (no feasible cover, minimum-cover size guard) are not errors;
//! the only runtime failure the core can report is a violated precondition.

use std::fmt;
use std::io;

/// Errors constructing a [`Geometry`](crate::Geometry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The output variable must own at least one part
    NoOutputParts,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NoOutputParts => write!(
                f,
                "Cannot build a geometry with zero output parts. \
                 Every problem needs at least one output function."
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

impl From<GeometryError> for io::Error {
    fn from(err: GeometryError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors constructing a [`Cube`](crate::Cube) from PLA-style patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// The input pattern does not match the geometry's input count
    InputLengthMismatch {
        /// Number of inputs the geometry declares
        expected: usize,
        /// Number of inputs provided
        found: usize,
    },
    /// The output pattern does not match the geometry's output count
    OutputLengthMismatch {
        /// Number of outputs the geometry declares
        expected: usize,
        /// Number of outputs provided
        found: usize,
    },
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeError::InputLengthMismatch { expected, found } => write!(
                f,
                "Input pattern has {} entries but the geometry declares {} inputs.",
                found, expected
            ),
            CubeError::OutputLengthMismatch { expected, found } => write!(
                f,
                "Output pattern has {} entries but the geometry declares {} outputs.",
                found, expected
            ),
        }
    }
}

impl std::error::Error for CubeError {}

impl From<CubeError> for io::Error {
    fn from(err: CubeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised while expanding a cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// The ON-set and OFF-set intersect
    ///
    /// Expansion requires that no ON cube shares a point with any OFF cube;
    /// a distance-0 pair means the problem instance is malformed and no
    /// recovery is meaningful.
    NotOrthogonal {
        /// The raising set at the moment the overlap was detected, PLA style
        raise: String,
        /// The intersecting OFF-set cube, PLA style
        off_cube: String,
    },
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::NotOrthogonal { raise, off_cube } => write!(
                f,
                "ON-set and OFF-set are not orthogonal: raising set {:?} \
                 intersects OFF-set cube {:?}. The caller must supply \
                 disjoint ON and OFF covers.",
                raise, off_cube
            ),
        }
    }
}

impl std::error::Error for ExpandError {}

impl From<ExpandError> for io::Error {
    fn from(err: ExpandError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ExpandError::NotOrthogonal {
            raise: "11 1".to_string(),
            off_cube: "1- 1".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("not orthogonal"));
        assert!(text.contains("11 1"));

        let err = CubeError::InputLengthMismatch {
            expected: 3,
            found: 2,
        };
        assert!(err.to_string().contains("2 entries"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: io::Error = GeometryError::NoOutputParts.into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
