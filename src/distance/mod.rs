pub mod table;
pub use table::*;

use std::mem::swap;

/// Computes the Levenshtein distance between two strings, symbol by symbol
/// over their `char`s.
pub fn distance_str(src: &str, tgt: &str) -> usize {
    let src: Vec<char> = src.chars().collect();
    let tgt: Vec<char> = tgt.chars().collect();
    distance(&src, &tgt)
}

/// Computes the Levenshtein distance between two sequences.
///
/// Inserting, deleting and replacing a symbol each cost 1. This is the
/// linear-space variant, see [`rolling`].
///
/// # Examples
///
/// ```
/// use editscript::distance::distance;
///
/// let src: Vec<char> = "kitten".chars().collect();
/// let tgt: Vec<char> = "sitting".chars().collect();
/// assert_eq!(distance(&src, &tgt), 3);
/// ```
pub fn distance<T: Eq>(src: &[T], tgt: &[T]) -> usize {
    rolling(src, tgt)
}

/// Builds the whole `(m + 1) × (n + 1)` table of suffix distances.
///
/// Besides its cost every cell records the step that achieves it. On a
/// mismatch the candidates are tried as delete, insert, replace and the first
/// cheapest one is kept.
pub fn tabulate<'a, T: Eq>(src: &'a [T], tgt: &'a [T]) -> Table<'a, T> {
    let m = src.len();
    let n = tgt.len();
    let mut d = Table::new(src, tgt);

    for i in 0..m {
        d.set(i, n, m - i, Some(Step::Delete));
    }
    for j in 0..n {
        d.set(m, j, n - j, Some(Step::Insert));
    }

    for i in (0..m).rev() {
        for j in (0..n).rev() {
            if src[i] == tgt[j] {
                d.set(i, j, d.cost(i + 1, j + 1), Some(Step::Skip));
                continue;
            }
            let candidates = [
                (d.cost(i + 1, j), Step::Delete),
                (d.cost(i, j + 1), Step::Insert),
                (d.cost(i + 1, j + 1), Step::Replace),
            ];
            let (cost, step) = candidates
                .into_iter()
                .fold(candidates[0], |best, c| if c.0 < best.0 { c } else { best });
            d.set(i, j, cost + 1, Some(step));
        }
    }

    tracing::debug!(src_len = m, tgt_len = n, distance = d.distance(), "tabulated distances");
    d
}

/// Quadratic-space variant: reads the distance off the full table.
pub fn full<T: Eq>(src: &[T], tgt: &[T]) -> usize {
    tabulate(src, tgt).distance()
}

/// Linear-space variant keeping only two rows of the table.
///
/// `prev` holds row `i + 1` while `curr` is filled with row `i`; the two are
/// swapped after every row.
pub fn rolling<T: Eq>(src: &[T], tgt: &[T]) -> usize {
    let m = src.len();
    let n = tgt.len();
    let mut prev: Vec<usize> = (0..=n).map(|j| n - j).collect();
    let mut curr = vec![0; n + 1];

    for i in (0..m).rev() {
        curr[n] = m - i;
        for j in (0..n).rev() {
            curr[j] = if src[i] == tgt[j] {
                prev[j + 1]
            } else {
                1 + curr[j + 1].min(prev[j]).min(prev[j + 1])
            };
        }
        swap(&mut prev, &mut curr);
    }

    tracing::debug!(src_len = m, tgt_len = n, distance = prev[0], "rolling distance");
    prev[0]
}

/// The recurrence evaluated directly, peeling the first symbol off each side.
///
/// Nothing is memoized, so the number of calls grows like `3^min(m, n)`. Only
/// meant as a reference for small inputs.
pub fn naive<T: Eq>(src: &[T], tgt: &[T]) -> usize {
    match (src.split_first(), tgt.split_first()) {
        (None, _) => tgt.len(),
        (_, None) => src.len(),
        (Some((a, src_tail)), Some((b, tgt_tail))) => {
            if a == b {
                return naive(src_tail, tgt_tail);
            }
            1 + naive(src, tgt_tail)
                .min(naive(src_tail, tgt))
                .min(naive(src_tail, tgt_tail))
        }
    }
}
