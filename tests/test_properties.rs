//! Property-based tests for the expansion and sparse-cleanup passes
//!
//! Covers are generated from random truth tables: every input assignment is
//! independently ON, OFF or don't-care per output, and the ON/OFF minterm
//! covers are orthogonal by construction.

use espresso_expand::{
    cover_cost, expand, make_sparse, Cover, Geometry,
};
use proptest::prelude::*;

const ON: u8 = 1;
const OFF: u8 = 0;

/// Random truth table: inputs, outputs, one cell per (minterm, output)
fn table() -> impl Strategy<Value = (usize, usize, Vec<u8>)> {
    (2usize..=3, 1usize..=2).prop_flat_map(|(n, m)| {
        let cells = (1usize << n) * m;
        (Just(n), Just(m), prop::collection::vec(0u8..3, cells))
    })
}

/// Like [`table`] but fully specified: every cell is ON or OFF
fn complete_table() -> impl Strategy<Value = (usize, usize, Vec<u8>)> {
    (2usize..=3, 1usize..=2).prop_flat_map(|(n, m)| {
        let cells = (1usize << n) * m;
        (Just(n), Just(m), prop::collection::vec(0u8..2, cells))
    })
}

fn minterm_inputs(n: usize, minterm: usize) -> Vec<Option<bool>> {
    (0..n).map(|v| Some((minterm >> v) & 1 == 1)).collect()
}

/// Build the ON-set and OFF-set minterm covers of a truth table
fn build_covers(geom: &Geometry, n: usize, m: usize, cells: &[u8]) -> (Cover, Cover) {
    let mut f = Cover::new();
    let mut r = Cover::new();
    for minterm in 0..(1usize << n) {
        let inputs = minterm_inputs(n, minterm);
        let on: Vec<bool> = (0..m).map(|o| cells[minterm * m + o] == ON).collect();
        let off: Vec<bool> = (0..m).map(|o| cells[minterm * m + o] == OFF).collect();
        if on.contains(&true) {
            f.push(geom.cube(&inputs, &on).unwrap());
        }
        if off.contains(&true) {
            r.push(geom.cube(&inputs, &off).unwrap());
        }
    }
    (f, r)
}

/// Whether `cover` asserts output `out` at input assignment `minterm`
fn covers_point(geom: &Geometry, cover: &Cover, minterm: usize, out: usize) -> bool {
    cover.iter().any(|cube| {
        (0..geom.num_inputs()).all(|v| {
            let part = 2 * v + ((minterm >> v) & 1);
            cube.parts().contains(part)
        }) && cube.parts().contains(2 * geom.num_inputs() + out)
    })
}

fn sorted_strings(geom: &Geometry, f: &Cover) -> Vec<String> {
    let mut rows: Vec<String> = f.iter().map(|c| geom.cube_string(c)).collect();
    rows.sort();
    rows
}

proptest! {
    /// No expanded cube may intersect any OFF cube
    #[test]
    fn prop_orthogonality_preserved((n, m, cells) in table()) {
        let geom = Geometry::new(n, m).unwrap();
        let (f, r) = build_covers(&geom, n, m, &cells);
        let off = r.clone();

        let primes = expand(&geom, f, &mut r.clone(), false).unwrap();

        for cube in primes.iter() {
            for blocker in off.iter() {
                prop_assert!(!geom.cdist0(cube.parts(), blocker.parts()));
            }
        }
    }

    /// Every returned cube is prime: flagged, and unable to take one more part
    #[test]
    fn prop_primality((n, m, cells) in table()) {
        let geom = Geometry::new(n, m).unwrap();
        let (f, r) = build_covers(&geom, n, m, &cells);
        let off = r.clone();

        let primes = expand(&geom, f, &mut r.clone(), false).unwrap();

        for cube in primes.iter() {
            prop_assert!(cube.is_prime());
            for part in 0..geom.size() {
                if cube.parts().contains(part) {
                    continue;
                }
                let mut enlarged = cube.parts().clone();
                enlarged.insert(part);
                let blocked = off.iter().any(|b| geom.cdist0(&enlarged, b.parts()));
                prop_assert!(
                    blocked,
                    "part {} could be added to {}",
                    part,
                    geom.cube_string(cube)
                );
            }
        }
    }

    /// Expansion only ever grows the covered region
    #[test]
    fn prop_coverage_grows((n, m, cells) in table()) {
        let geom = Geometry::new(n, m).unwrap();
        let (f, r) = build_covers(&geom, n, m, &cells);
        let before = f.clone();

        let primes = expand(&geom, f, &mut r.clone(), false).unwrap();

        for minterm in 0..(1usize << n) {
            for out in 0..m {
                if covers_point(&geom, &before, minterm, out) {
                    prop_assert!(covers_point(&geom, &primes, minterm, out));
                }
            }
        }
    }

    /// On a fully specified function the covered region is exactly preserved
    #[test]
    fn prop_coverage_exact_without_dont_cares((n, m, cells) in complete_table()) {
        let geom = Geometry::new(n, m).unwrap();
        let (f, r) = build_covers(&geom, n, m, &cells);
        let before = f.clone();

        let primes = expand(&geom, f, &mut r.clone(), false).unwrap();

        for minterm in 0..(1usize << n) {
            for out in 0..m {
                prop_assert_eq!(
                    covers_point(&geom, &before, minterm, out),
                    covers_point(&geom, &primes, minterm, out)
                );
            }
        }
    }

    /// Expanding an expanded cover changes nothing
    #[test]
    fn prop_expand_is_idempotent((n, m, cells) in table()) {
        let geom = Geometry::new(n, m).unwrap();
        let (f, r) = build_covers(&geom, n, m, &cells);

        let once = expand(&geom, f, &mut r.clone(), false).unwrap();
        let twice = expand(&geom, once.clone(), &mut r.clone(), false).unwrap();

        prop_assert_eq!(sorted_strings(&geom, &once), sorted_strings(&geom, &twice));
    }

    /// Non-sparse expansion never touches the output projection
    #[test]
    fn prop_nonsparse_output_invariant((n, m, cells) in table()) {
        let geom = Geometry::new(n, m).unwrap();
        let (f, r) = build_covers(&geom, n, m, &cells);
        let input_outputs: Vec<String> = f
            .iter()
            .map(|c| geom.set_string(&c.parts().intersection(geom.output_mask())))
            .collect();

        let primes = expand(&geom, f, &mut r.clone(), true).unwrap();

        for cube in primes.iter() {
            let projection =
                geom.set_string(&cube.parts().intersection(geom.output_mask()));
            prop_assert!(
                input_outputs.contains(&projection),
                "output projection {} appeared from nowhere",
                projection
            );
        }
    }

    /// Sparse cleanup never increases the literal cost and keeps the function
    #[test]
    fn prop_make_sparse_monotone((n, m, cells) in table()) {
        let geom = Geometry::new(n, m).unwrap();
        let (f, r) = build_covers(&geom, n, m, &cells);
        let on_set = f.clone();
        let off_set = r.clone();
        let d = Cover::new();

        let primes = expand(&geom, f, &mut r.clone(), false).unwrap();
        let before = cover_cost(&geom, &primes);

        let sparse = make_sparse(&geom, primes, &d, &mut r.clone()).unwrap();
        let after = cover_cost(&geom, &sparse);

        prop_assert!(after.total <= before.total);

        // the care set is untouched
        for minterm in 0..(1usize << n) {
            for out in 0..m {
                if covers_point(&geom, &on_set, minterm, out) {
                    prop_assert!(covers_point(&geom, &sparse, minterm, out));
                }
                if covers_point(&geom, &off_set, minterm, out) {
                    prop_assert!(!covers_point(&geom, &sparse, minterm, out));
                }
            }
        }
    }

    /// Identical inputs give byte-identical covers, order included
    #[test]
    fn prop_deterministic((n, m, cells) in table()) {
        let geom = Geometry::new(n, m).unwrap();

        let run = || {
            let (f, r) = build_covers(&geom, n, m, &cells);
            let primes = expand(&geom, f, &mut r.clone(), false).unwrap();
            primes
                .iter()
                .map(|c| geom.cube_string(c))
                .collect::<Vec<_>>()
        };

        prop_assert_eq!(run(), run());
    }
}
