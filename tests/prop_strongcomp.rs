use nalgebra::DMatrix;
use btf_order::adjacency::csc_pattern;
use btf_order::strongcomp::strongcomp;
use proptest::prelude::*;

fn arbitrary_square_pattern(max_n: usize) -> impl Strategy<Value = (usize, Vec<usize>, Vec<usize>)> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec(any::<u8>(), n * n).prop_map(move |bits| {
            let data: Vec<u8> = bits.into_iter().map(|b| b % 2).collect();
            let m = DMatrix::from_row_slice(n, n, &data);
            let (ap, ai) = csc_pattern(&m);
            (n, ap, ai)
        })
    })
}

proptest! {
    /// P is always a permutation of 0..n.
    #[test]
    fn p_is_a_permutation((n, ap, ai) in arbitrary_square_pattern(20)) {
        let result = strongcomp(n, &ap, &ai, None);
        let mut sorted = result.p.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
    }

    /// R is nondecreasing, starts at 0, ends at n, and has nblocks+1 entries.
    #[test]
    fn r_is_well_formed((n, ap, ai) in arbitrary_square_pattern(20)) {
        let result = strongcomp(n, &ap, &ai, None);
        prop_assert_eq!(result.r.len(), result.nblocks + 1);
        prop_assert_eq!(result.r[0], 0);
        prop_assert_eq!(*result.r.last().unwrap(), n);
        for w in result.r.windows(2) {
            prop_assert!(w[0] <= w[1]);
        }
    }

    /// P is sorted ascending within each block's range.
    #[test]
    fn p_is_ascending_within_each_block((n, ap, ai) in arbitrary_square_pattern(20)) {
        let result = strongcomp(n, &ap, &ai, None);
        for w in result.r.windows(2) {
            let block = &result.p[w[0]..w[1]];
            prop_assert!(block.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    /// Block count never exceeds n and is at least 1 for n > 0.
    #[test]
    fn block_count_is_bounded((n, ap, ai) in arbitrary_square_pattern(20)) {
        let result = strongcomp(n, &ap, &ai, None);
        prop_assert!(result.nblocks >= 1);
        prop_assert!(result.nblocks <= n);
    }
}
