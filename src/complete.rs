//! Completion of a deficient matching (spec §4.3): pair unmatched rows with
//! unmatched columns and flip-tag those pairs as structurally zero.

use crate::flip::{flip, EMPTY};

/// Extend `match_row` (row -> column, possibly `EMPTY`) into a full
/// assignment by pairing every unmatched row with a distinct unmatched
/// ("bad") column, flip-tagging the pairing so callers can tell a
/// structurally-zero fill entry from a real match.
///
/// After this call `{unflip(match_row[i])}` is a permutation of `0..n`.
pub fn complete(n: usize, match_row: &mut [isize]) {
    let mut col_used = vec![false; n];
    for &m in match_row.iter() {
        if m >= 0 {
            col_used[m as usize] = true;
        }
    }

    // Reference order: bad columns enumerated descending, consumed as a
    // stack, so the smallest bad column pairs with the first unmatched row.
    let mut bad: Vec<usize> = (0..n).rev().filter(|&j| !col_used[j]).collect();

    for m in match_row.iter_mut() {
        if *m == EMPTY {
            let j = bad
                .pop()
                .expect("unmatched rows and unmatched columns must be equinumerous");
            *m = flip(j as isize);
        }
    }

    debug_assert!(bad.is_empty());
}
