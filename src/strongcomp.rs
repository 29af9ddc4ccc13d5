//! Non-recursive Tarjan strongly-connected-component decomposition of the
//! directed graph induced by a column permutation Q (spec §4.4).
//!
//! Node `k` stands for row `k` *and*, via `Q[k]`, for the column placed at
//! position `k`; an edge `k -> i` means `A[i, unflip(Q[k])] != 0`. Collapsing
//! row and matched-column into one node is what turns SCCs of this graph
//! into the diagonal blocks of `P·A·Q`.

use crate::flip::unflip;

const UNVISITED: isize = -2;
const UNASSIGNED: isize = -1;

/// Result of a [`strongcomp`] call.
#[derive(Debug, Clone)]
pub struct StrongcompResult {
    /// Row permutation: row `i` sits at position `k` iff `p[k] == i`.
    pub p: Vec<usize>,
    /// Block boundaries, length `nblocks + 1`; block `b` spans
    /// `r[b]..r[b + 1]`.
    pub r: Vec<usize>,
    /// Number of blocks (SCCs) found.
    pub nblocks: usize,
}

/// Run Tarjan SCC over the graph described above and emit `P`/`R`.
///
/// `ap`/`ai` is the CSC pattern of the n×n matrix `A`. `q`, if given, is
/// mutated in place: on return it is recomposed so that `q'[k] = q[p[k]]`,
/// i.e. it becomes the column permutation paired with the returned row
/// permutation; flip tags on its entries are preserved. If `q` is `None`
/// the graph's adjacency is read directly off `ap`/`ai` (node `j` ==
/// column `j`).
pub fn strongcomp(n: usize, ap: &[usize], ai: &[usize], mut q: Option<&mut [isize]>) -> StrongcompResult {
    if n == 0 {
        return StrongcompResult {
            p: Vec::new(),
            r: vec![0],
            nblocks: 0,
        };
    }

    let mut time = vec![0usize; n];
    let mut low = vec![0usize; n];
    let mut flag = vec![UNVISITED; n];
    let mut cstack: Vec<usize> = Vec::with_capacity(n);
    let mut jstack: Vec<usize> = Vec::with_capacity(n);
    let mut pstack: Vec<usize> = Vec::with_capacity(n);

    let mut timestamp = 0usize;
    let mut nblocks = 0usize;

    for j0 in 0..n {
        if flag[j0] != UNVISITED {
            continue;
        }

        jstack.push(j0);
        pstack.push(0);

        while let Some(&j) = jstack.last() {
            let jhead = jstack.len() - 1;
            let jj = match &q {
                Some(qq) => unflip(qq[j]) as usize,
                None => j,
            };
            let pend = ap[jj + 1];

            if flag[j] == UNVISITED {
                cstack.push(j);
                timestamp += 1;
                time[j] = timestamp;
                low[j] = timestamp;
                flag[j] = UNASSIGNED;
                pstack[jhead] = ap[jj];
            }

            let mut p = pstack[jhead];
            let mut pushed_child = false;

            while p < pend {
                let i = ai[p];
                p += 1;
                if flag[i] == UNVISITED {
                    pstack[jhead] = p;
                    jstack.push(i);
                    pstack.push(0);
                    pushed_child = true;
                    break;
                } else if flag[i] == UNASSIGNED && time[i] < low[j] {
                    low[j] = time[i];
                }
                // flag[i] >= 0: edge into an already-closed block, ignore.
            }

            if pushed_child {
                continue;
            }

            // Postwork: adjacency of j exhausted.
            pstack[jhead] = p;
            jstack.pop();
            pstack.pop();

            if low[j] == time[j] {
                loop {
                    let i = cstack.pop().expect("scc stack underflow");
                    flag[i] = nblocks as isize;
                    if i == j {
                        break;
                    }
                }
                nblocks += 1;
            }

            if let Some(&parent) = jstack.last() {
                if low[j] < low[parent] {
                    low[parent] = low[j];
                }
            }
        }
    }

    // R construction: count per block, exclusive prefix sum, then place.
    let mut r = vec![0usize; nblocks + 1];
    for &b in &flag {
        r[b as usize] += 1;
    }
    let mut cursor = vec![0usize; nblocks];
    let mut sum = 0usize;
    for b in 0..nblocks {
        let count = r[b];
        r[b] = sum;
        cursor[b] = sum;
        sum += count;
    }
    r[nblocks] = n;

    let mut p = vec![0usize; n];
    for j in 0..n {
        let b = flag[j] as usize;
        p[cursor[b]] = j;
        cursor[b] += 1;
    }

    if let Some(qq) = q.as_deref_mut() {
        let old_q = qq.to_vec();
        for k in 0..n {
            qq[k] = old_q[p[k]];
        }
    }

    StrongcompResult { p, r, nblocks }
}
