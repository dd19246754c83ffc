//! Order-preserving batch mapping, parallel above a size threshold.

/// Batches at least this long are split across the rayon pool.
pub(crate) const PARALLEL_THRESHOLD: usize = 4096;

/// Maps `f` over `items`; output is index-aligned with input.
pub(crate) fn map_batch<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    if items.len() >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        return items.par_iter().map(f).collect();
    }
    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserved_above_threshold() {
        let items: Vec<usize> = (0..PARALLEL_THRESHOLD * 3 + 17).collect();
        let out = map_batch(&items, |i| i * 2);
        assert_eq!(out.len(), items.len());
        assert!(out.iter().enumerate().all(|(i, v)| *v == i * 2));
    }

    #[test]
    fn test_small_batch() {
        assert_eq!(map_batch(&[1, 2, 3], |v| v + 1), vec![2, 3, 4]);
        assert!(map_batch(&[] as &[u8], |v| *v).is_empty());
    }
}
