pub mod types;
pub use types::*;

use crate::distance::tabulate;

/// Generates the edit script between two strings after breaking them into
/// `char`s and running `generate_tabulated`.
pub fn generate_str(src: &str, tgt: &str) -> EditScript<char> {
    let src: Vec<char> = src.chars().collect();
    let tgt: Vec<char> = tgt.chars().collect();
    generate_tabulated(&src, &tgt)
}

/// Computes a minimal edit script turning `src` into `tgt`.
///
/// Whenever the first symbols differ, the insert, delete and replace
/// continuations are all solved and the one with the fewest non-`Skip`
/// operations wins. Ties go to insert, then delete, then replace.
///
/// The search is not memoized and takes exponential time, see
/// [`generate_tabulated`] for the polynomial version.
///
/// # Examples
///
/// ```
/// use editscript::script::{generate, Edit};
///
/// let src: Vec<char> = "alpha".chars().collect();
/// let tgt: Vec<char> = "aleph".chars().collect();
/// assert_eq!(generate(&src, &tgt), vec![
///     Edit::Skip,
///     Edit::Skip,
///     Edit::Insert('e'),
///     Edit::Skip,
///     Edit::Skip,
///     Edit::Delete('a'),
/// ]);
/// ```
///
/// # Arguments
///
/// * `src` - The source sequence
/// * `tgt` - The target sequence
pub fn generate<T: Eq + Clone>(src: &[T], tgt: &[T]) -> EditScript<T> {
    let mut script = search(src, tgt);
    script.reverse();
    tracing::debug!(
        src_len = src.len(),
        tgt_len = tgt.len(),
        cost = cost(&script),
        "generated edit script"
    );
    script
}

// Builds the script back to front so every step is a push.
fn search<T: Eq + Clone>(src: &[T], tgt: &[T]) -> EditScript<T> {
    let (a, src_tail, b, tgt_tail) = match (src.split_first(), tgt.split_first()) {
        (None, _) => return tgt.iter().rev().map(|e| Edit::Insert(e.clone())).collect(),
        (_, None) => return src.iter().rev().map(|e| Edit::Delete(e.clone())).collect(),
        (Some((a, src_tail)), Some((b, tgt_tail))) => (a, src_tail, b, tgt_tail),
    };

    if a == b {
        let mut script = search(src_tail, tgt_tail);
        script.push(Edit::Skip);
        return script;
    }

    let insert_b = search(src, tgt_tail);
    let delete_a = search(src_tail, tgt);
    let replace_ab = search(src_tail, tgt_tail);

    let (insert_cost, delete_cost, replace_cost) =
        (cost(&insert_b), cost(&delete_a), cost(&replace_ab));
    let (mut script, edit) = if insert_cost <= delete_cost && insert_cost <= replace_cost {
        (insert_b, Edit::Insert(b.clone()))
    } else if delete_cost <= replace_cost {
        (delete_a, Edit::Delete(a.clone()))
    } else {
        (replace_ab, Edit::Replace(a.clone(), b.clone()))
    };
    script.push(edit);
    script
}

/// Computes the same script as [`generate`] in `O(m·n)` time and space.
///
/// The cost of every sub-problem is read from the full distance table, then
/// the table is walked front to back with the tie-breaking order of
/// [`generate`].
pub fn generate_tabulated<T: Eq + Clone>(src: &[T], tgt: &[T]) -> EditScript<T> {
    let table = tabulate(src, tgt);
    let (m, n) = (src.len(), tgt.len());
    let mut script = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (0, 0);

    loop {
        if i == m {
            script.extend(tgt[j..].iter().map(|e| Edit::Insert(e.clone())));
            break;
        }
        if j == n {
            script.extend(src[i..].iter().map(|e| Edit::Delete(e.clone())));
            break;
        }
        if src[i] == tgt[j] {
            script.push(Edit::Skip);
            i += 1;
            j += 1;
            continue;
        }

        let insert_cost = table.cost(i, j + 1);
        let delete_cost = table.cost(i + 1, j);
        let replace_cost = table.cost(i + 1, j + 1);
        if insert_cost <= delete_cost && insert_cost <= replace_cost {
            script.push(Edit::Insert(tgt[j].clone()));
            j += 1;
        } else if delete_cost <= replace_cost {
            script.push(Edit::Delete(src[i].clone()));
            i += 1;
        } else {
            script.push(Edit::Replace(src[i].clone(), tgt[j].clone()));
            i += 1;
            j += 1;
        }
    }

    tracing::debug!(src_len = m, tgt_len = n, cost = cost(&script), "generated edit script");
    script
}
