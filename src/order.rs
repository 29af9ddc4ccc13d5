//! Top-level orchestration (spec §4.5): `maxtrans` → completion → `strongcomp`.

use crate::complete::complete;
use crate::maxtrans::maxtrans;
use crate::strongcomp::strongcomp;

/// Block triangular form ordering of an n×n sparse pattern.
#[derive(Debug, Clone)]
pub struct OrderResult {
    /// Row permutation: row `i` sits at position `k` iff `p[k] == i`.
    pub p: Vec<usize>,
    /// Column permutation, flip-tagged where the matching entry is
    /// structurally zero. `unflip(q[k])` is the real column at position `k`.
    pub q: Vec<isize>,
    /// Block boundaries, length `nblocks + 1`.
    pub r: Vec<usize>,
    /// Number of structurally nonzero diagonal entries.
    pub nmatch: usize,
    /// Number of blocks (SCCs).
    pub nblocks: usize,
    /// Work units spent in the augmenting-path search, or `-1.0` if the
    /// `maxwork` cap was struck.
    pub work: f64,
}

/// Compute a block-triangular-form ordering for the n×n pattern `(ap, ai)`
/// in CSC form.
///
/// `maxwork <= 0.0` means the matching search runs to completion; otherwise
/// it is capped at `maxwork * ap[n]` work units (see [`crate::maxtrans`]).
pub fn order(n: usize, ap: &[usize], ai: &[usize], maxwork: f64) -> OrderResult {
    let matching = maxtrans(n, ap, ai, maxwork);
    let mut q = matching.match_row;

    if matching.nmatch < n {
        complete(n, &mut q);
    }

    let scc = strongcomp(n, ap, ai, Some(&mut q));

    OrderResult {
        p: scc.p,
        q,
        r: scc.r,
        nmatch: matching.nmatch,
        nblocks: scc.nblocks,
        work: matching.work,
    }
}

/// Caller-allocated-buffers form of [`order`], mirroring the conceptual
/// external signature of spec §6. `p`/`q` must have length `n`, `r` length
/// `n + 1`; only `r[0..=nblocks]` is written. Returns `nblocks`.
pub fn order_into(
    n: usize,
    ap: &[usize],
    ai: &[usize],
    maxwork: f64,
    work: &mut f64,
    p: &mut [usize],
    q: &mut [isize],
    r: &mut [usize],
    nmatch: &mut usize,
) -> usize {
    let result = order(n, ap, ai, maxwork);

    p[..n].copy_from_slice(&result.p);
    q[..n].copy_from_slice(&result.q);
    r[..=result.nblocks].copy_from_slice(&result.r);
    *nmatch = result.nmatch;
    *work = result.work;

    result.nblocks
}
