// Property-based tests for the adjacency module.
use nalgebra::DMatrix;
use btf_order::adjacency::csc_pattern;
use proptest::prelude::*;

/// Generate random matrix with given dimensions.
fn arbitrary_matrix(
    max_rows: usize,
    max_cols: usize,
) -> impl Strategy<Value = (usize, usize, DMatrix<u8>)> {
    (1..=max_rows, 1..=max_cols).prop_flat_map(|(nrows, ncols)| {
        let total = nrows * ncols;
        (
            Just(nrows),
            Just(ncols),
            prop::collection::vec(any::<u8>(), total).prop_map(move |bits| {
                let data: Vec<u8> = bits.into_iter().map(|b| b % 2).collect();
                DMatrix::from_row_slice(nrows, ncols, &data)
            }),
        )
    })
}

proptest! {
    /// Property: Ap has the right length, starts at 0, and is nondecreasing.
    #[test]
    fn ap_is_well_formed((_nrows, ncols, m) in arbitrary_matrix(30, 30)) {
        let (ap, ai) = csc_pattern(&m);

        prop_assert_eq!(ap.len(), ncols + 1, "Ap has wrong length");
        prop_assert_eq!(ap[0], 0, "Ap[0] must be 0");
        prop_assert_eq!(*ap.last().unwrap(), ai.len(), "Ap[ncols] must equal nnz");

        for w in ap.windows(2) {
            prop_assert!(w[0] <= w[1], "Ap is not nondecreasing: {:?}", ap);
        }
    }

    /// Property: every row index in Ai is in range and every column's rows
    /// appear in ascending order (no duplicates, since the source matrix
    /// has at most one entry per cell).
    #[test]
    fn ai_rows_sorted_in_range((nrows, ncols, m) in arbitrary_matrix(30, 30)) {
        let (ap, ai) = csc_pattern(&m);

        for j in 0..ncols {
            let col = &ai[ap[j]..ap[j + 1]];
            for &i in col {
                prop_assert!(i < nrows, "Row index {} out of range for {} rows", i, nrows);
            }
            for w in col.windows(2) {
                prop_assert!(w[0] < w[1], "Column {} rows not strictly ascending: {:?}", j, col);
            }
        }
    }

    /// Property: CSC pattern represents exactly the matrix nonzeros (no
    /// false positives or negatives).
    #[test]
    fn csc_pattern_matches_nonzeros((nrows, ncols, m) in arbitrary_matrix(20, 20)) {
        let (ap, ai) = csc_pattern(&m);

        for j in 0..ncols {
            let col: std::collections::HashSet<usize> = ai[ap[j]..ap[j + 1]].iter().copied().collect();
            for i in 0..nrows {
                prop_assert_eq!(m[(i, j)] != 0, col.contains(&i), "mismatch at ({}, {})", i, j);
            }
        }
    }

    /// Property: total nonzero count matches the matrix's nonzero count.
    #[test]
    fn nnz_matches_matrix((nrows, ncols, m) in arbitrary_matrix(20, 20)) {
        let (_, ai) = csc_pattern(&m);
        let expected = (0..nrows).flat_map(|i| (0..ncols).map(move |j| (i, j)))
            .filter(|&(i, j)| m[(i, j)] != 0)
            .count();
        prop_assert_eq!(ai.len(), expected);
    }
}
