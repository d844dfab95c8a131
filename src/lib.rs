//! # Espresso Expand
//!
//! Pure-Rust expansion core of an Espresso-II–style two-level logic
//! minimizer.
//!
//! ## Overview
//!
//! Given a Boolean function as an ON-set cover `F` (cubes that must be
//! covered) and an OFF-set cover `R` (cubes that must be avoided), the
//! [`expand()`] pass enlarges every non-prime cube of `F` into a **prime
//! implicant** — a cube no single part can be added to without touching the
//! OFF-set — and absorbs other ON cubes along the way. The companion
//! [`make_sparse()`] pass then lowers the literal count by alternating a
//! per-output-part reduction with a restricted re-expansion of the input
//! parts.
//!
//! ## Data model
//!
//! - A **part** is one coordinate of the problem: two per binary input
//!   variable, one per output function.
//! - A [`Cube`] is a bit vector over parts ([`PartSet`]) plus working flags;
//!   it denotes the product of, per variable, the parts it permits.
//! - A [`Cover`] is an ordered collection of cubes with a working selection
//!   (per-cube `ACTIVE` flag and a cached active count).
//! - A [`Geometry`] describes the part layout and provides the cube-level
//!   operations; build one per problem and pass it by reference everywhere.
//!   There is no global state, so geometries of different shapes can be used
//!   side by side.
//!
//! ## Example
//!
//! ```
//! use espresso_expand::{expand, Cover, Geometry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let geom = Geometry::new(2, 1)?;
//!
//! // ON-set: 01 -> 1 and 11 -> 1
//! let mut f = Cover::new();
//! f.push(geom.cube(&[Some(false), Some(true)], &[true])?);
//! f.push(geom.cube(&[Some(true), Some(true)], &[true])?);
//!
//! // OFF-set: 00 -> 0
//! let mut r = Cover::new();
//! r.push(geom.cube(&[Some(false), Some(false)], &[true])?);
//!
//! let primes = expand(&geom, f, &mut r, false)?;
//!
//! // both cubes merge into the single prime "x1"
//! assert_eq!(primes.len(), 1);
//! assert_eq!(geom.cube_string(primes.cube(0)), "-1 1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Preconditions
//!
//! The ON-set and OFF-set must be **orthogonal**: no cube of `F` may share a
//! point with a cube of `R`. A violation is reported as
//! [`ExpandError::NotOrthogonal`]; it is a caller error, not a recoverable
//! condition.
//!
//! ## Determinism
//!
//! With default features, identical inputs produce identical covers: cube
//! ordering, candidate scoring and every tie-break are deterministic. The
//! opt-in `random-mincov` feature replaces the minimum-cover fallback with a
//! random free-part pick for benchmarking experiments, trading determinism
//! away.
//!
//! ## Diagnostics
//!
//! The passes emit [`tracing`] events (`debug` for per-cube results and cost
//! accounting, `trace` for fallback decisions); install a subscriber to see
//! them.

// Public modules
pub mod config;
pub mod cover;
pub mod cube;
pub mod error;
pub mod expand;
pub mod sparse;

// Internal collaborators
mod irredundant;
mod unate;

// Re-export the public API at the crate root
pub use config::ExpandConfig;
pub use cover::{cover_cost, Cost, Cover};
pub use cube::{Cube, Geometry, PartIter, PartSet};
pub use error::{CubeError, ExpandError, GeometryError};
pub use expand::{expand, expand_with_config};
pub use sparse::{make_sparse, make_sparse_with_config};
