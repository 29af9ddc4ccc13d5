/// Build the column-oriented sparsity pattern (CSC: `Ap`, `Ai`) of a square
/// matrix, treating `mat[(i, j)] != Default::default()` as "nonzero".
///
/// `Ap` has length `ncols + 1` and is nondecreasing with `Ap[0] == 0`; `Ai`
/// holds the row index of each nonzero, grouped by column in row-ascending
/// order within each column. This is the CSC encoding [`crate::order::order`]
/// operates on; it generalizes row-adjacency-list construction to the
/// column-oriented form the matching/SCC core expects.
pub fn csc_pattern<T, R, C, S>(mat: &nalgebra::Matrix<T, R, C, S>) -> (Vec<usize>, Vec<usize>)
where
    T: nalgebra::Scalar + PartialEq + Default,
    R: nalgebra::Dim,
    C: nalgebra::Dim,
    S: nalgebra::Storage<T, R, C>,
{
    let nrows = mat.nrows();
    let ncols = mat.ncols();
    let zero = T::default();

    let mut ap = Vec::with_capacity(ncols + 1);
    let mut ai = Vec::new();
    ap.push(0);

    for j in 0..ncols {
        for i in 0..nrows {
            if mat[(i, j)] != zero {
                ai.push(i);
            }
        }
        ap.push(ai.len());
    }

    (ap, ai)
}
