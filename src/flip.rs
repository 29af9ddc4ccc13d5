//! Sign-flip encoding used to tag structurally-zero matches without a
//! parallel boolean array.
//!
//! A signed column index `j` is either a real match (`j >= 0`), the empty
//! sentinel (`j == EMPTY`), or a flipped index (`j < -1`) meaning "matched
//! to this column, but the entry is structurally zero". `flip` is its own
//! inverse and fixes `EMPTY`.

/// Sentinel meaning "no row/column assigned".
pub const EMPTY: isize = -1;

/// `flip(j) = -j - 2`. Involution; `flip(EMPTY) == EMPTY`.
#[inline]
pub fn flip(j: isize) -> isize {
    -j - 2
}

/// True iff `j` is a flip-tagged column index (structurally zero match).
#[inline]
pub fn is_flipped(j: isize) -> bool {
    j < -1
}

/// Unwrap a possibly flip-tagged value back to a plain index in `[-1, n)`.
#[inline]
pub fn unflip(j: isize) -> isize {
    if is_flipped(j) { flip(j) } else { j }
}
