pub mod adjacency;
pub mod complete;
pub mod flip;
pub mod maxtrans;
pub mod order;
pub mod permutation;
pub mod strongcomp;

use nalgebra::{Dyn, Matrix, PermutationSequence, Scalar, Storage};

use adjacency::csc_pattern;
use flip::unflip;
use permutation::permutation_sequence_from_order;

/// Return row/column permutations P, Q (as `PermutationSequence`) such that:
///     U = P * mat * Q
/// is upper block triangular, with a zero-free diagonal whenever `mat` has
/// structural full rank and each diagonal block irreducible.
///
/// Notes:
/// - This is purely structural: it uses `mat[(i,j)] != Default::default()` as "nonzero".
/// - `mat` must be square; see [`upper_block_triangular_structure`] for the
///   full diagnostic (matching deficiency, block sizes, work spent).
///
/// You apply these like:
///   let (pr, pc) = upper_triangular_permutations(&mat);
///   let mut u = mat.clone();
///   pr.permute_rows(&mut u);
///   pc.permute_columns(&mut u);
pub fn upper_triangular_permutations<T, R, C, S>(
    mat: &Matrix<T, R, C, S>,
) -> (PermutationSequence<Dyn>, PermutationSequence<Dyn>)
where
    T: Scalar + PartialEq + Default,
    R: nalgebra::Dim,
    C: nalgebra::Dim,
    S: Storage<T, R, C>,
{
    let structure = upper_block_triangular_structure(mat);

    let prow = permutation_sequence_from_order(&structure.row_order);
    let pcol = permutation_sequence_from_order(&structure.col_order);

    (prow, pcol)
}

/// Extra structure you can print for diagnostics.
#[derive(Debug, Clone)]
pub struct BtfStructure {
    /// New position -> old row index.
    pub row_order: Vec<usize>,
    /// New position -> old col index (flip tags already resolved away).
    pub col_order: Vec<usize>,
    /// Sizes of diagonal SCC blocks, in emission order (block 0 first).
    pub block_sizes: Vec<usize>,
    /// Number of structurally nonzero diagonal entries.
    pub nmatch: usize,
    /// Work units spent by the augmenting-path search (unlimited here: this
    /// entry point always runs with `maxwork = 0.0`).
    pub work: f64,
}

/// Compute the ordering + block sizes (useful for printing block separators).
///
/// Panics if `mat` is not square: `strongcomp`'s SCC decomposition operates
/// on a single index set shared by rows and matched columns, so a
/// rectangular pattern has no well-defined block structure here (spec
/// Non-goal: rectangular matrices are only meaningful to the matching
/// step, not the SCC step).
pub fn upper_block_triangular_structure<T, R, C, S>(mat: &Matrix<T, R, C, S>) -> BtfStructure
where
    T: Scalar + PartialEq + Default,
    R: nalgebra::Dim,
    C: nalgebra::Dim,
    S: Storage<T, R, C>,
{
    let n = mat.nrows();
    assert_eq!(
        n,
        mat.ncols(),
        "upper_block_triangular_structure requires a square matrix"
    );

    if n == 0 {
        return BtfStructure {
            row_order: Vec::new(),
            col_order: Vec::new(),
            block_sizes: Vec::new(),
            nmatch: 0,
            work: 0.0,
        };
    }

    let (ap, ai) = csc_pattern(mat);
    let result = order::order(n, &ap, &ai, 0.0);

    let col_order: Vec<usize> = result.q.iter().map(|&j| unflip(j) as usize).collect();

    let block_sizes = (0..result.nblocks)
        .map(|b| result.r[b + 1] - result.r[b])
        .collect();

    BtfStructure {
        row_order: result.p,
        col_order,
        block_sizes,
        nmatch: result.nmatch,
        work: result.work,
    }
}

// Keep the flip-aware permutation helper reachable from the crate root for
// callers who only need the column side (e.g. to preserve the distinction
// between a real match and a fill entry before converting to a sequence).
pub use permutation::permutation_sequence_from_flipped_order as column_permutation_sequence;
