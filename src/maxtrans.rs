//! Bipartite maximum matching between rows and columns of a CSC pattern
//! (Duff MC21-style: cheap greedy pass, then augmenting-path search).

use crate::flip::EMPTY;

/// Result of a [`maxtrans`] call.
#[derive(Debug, Clone)]
pub struct MaxtransResult {
    /// `match_row[i]` is the column matched to row `i`, or `EMPTY`.
    pub match_row: Vec<isize>,
    /// Number of matched rows (== number of matched columns).
    pub nmatch: usize,
    /// Work units consumed by the augmenting-path pass, or `-1.0` if
    /// `maxwork` was exceeded and the search was aborted early.
    pub work: f64,
}

/// Compute a maximum (or work-capped) matching of rows to columns for the
/// n×n pattern given in CSC form (`ap`, length `n+1`; `ai`, length `ap[n]`).
///
/// `maxwork <= 0.0` means unlimited; otherwise the augmenting-path pass
/// aborts once it has examined more than `maxwork * ap[n]` row entries,
/// returning whatever matching had been built so far.
pub fn maxtrans(n: usize, ap: &[usize], ai: &[usize], maxwork: f64) -> MaxtransResult {
    if n == 0 {
        return MaxtransResult {
            match_row: Vec::new(),
            nmatch: 0,
            work: 0.0,
        };
    }

    let nnz = ap[n] as f64;
    let has_limit = maxwork > 0.0;
    let work_limit = maxwork * nnz;

    let mut match_row = vec![EMPTY; n];
    let mut col_matched = vec![false; n];

    // Stage 1: cheap greedy assignment, O(nnz), not counted against maxwork.
    for j in 0..n {
        for p in ap[j]..ap[j + 1] {
            let i = ai[p];
            if match_row[i] == EMPTY {
                match_row[i] = j as isize;
                col_matched[j] = true;
                break;
            }
        }
    }

    // Stage 2: augmenting-path search for columns left unmatched.
    //
    // Non-recursive DFS over (column, scan-position) frames. `flag[j2]`
    // records the root column whose search last visited `j2`, so a single
    // `usize` per column suffices to detect "already visited this
    // augmentation" without resetting an array between searches.
    let mut flag = vec![usize::MAX; n];
    let mut jstack: Vec<usize> = Vec::new();
    let mut pstack: Vec<usize> = Vec::new();
    let mut via: Vec<Option<usize>> = Vec::new();

    let mut work = 0.0f64;
    let mut capped = false;

    'columns: for j0 in 0..n {
        if col_matched[j0] {
            continue;
        }

        jstack.clear();
        pstack.clear();
        via.clear();
        jstack.push(j0);
        pstack.push(ap[j0]);
        via.push(None);
        flag[j0] = j0;

        let mut found_row: Option<usize> = None;

        'dfs: while let Some(&j) = jstack.last() {
            let pend = ap[j + 1];
            let mut p = *pstack.last().unwrap();
            let mut pushed_child = false;

            while p < pend {
                work += 1.0;
                if has_limit && work > work_limit {
                    capped = true;
                    break 'dfs;
                }
                let i = ai[p];
                p += 1;
                let m = match_row[i];
                if m == EMPTY {
                    found_row = Some(i);
                    break;
                }
                let j2 = m as usize;
                if flag[j2] != j0 {
                    flag[j2] = j0;
                    *pstack.last_mut().unwrap() = p;
                    jstack.push(j2);
                    pstack.push(ap[j2]);
                    via.push(Some(i));
                    pushed_child = true;
                    break;
                }
            }

            if found_row.is_some() {
                break 'dfs;
            }
            if pushed_child {
                continue 'dfs;
            }

            // Adjacency of j exhausted with no augmenting path through it.
            *pstack.last_mut().unwrap() = p;
            jstack.pop();
            pstack.pop();
            via.pop();
        }

        if capped {
            break 'columns;
        }

        if let Some(mut i) = found_row {
            // Rewind the path, rewriting Match from the free row back to j0.
            loop {
                let j = jstack.pop().unwrap();
                pstack.pop();
                let entry = via.pop().unwrap();
                match_row[i] = j as isize;
                match entry {
                    Some(r) => i = r,
                    None => break,
                }
            }
            col_matched[j0] = true;
        }
    }

    let nmatch = match_row.iter().filter(|&&m| m != EMPTY).count();
    let work = if capped { -1.0 } else { work };

    MaxtransResult {
        match_row,
        nmatch,
        work,
    }
}
