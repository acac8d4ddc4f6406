use serde::Serialize;
use std::fmt;

/// Label of an edge in the call tree.
///
/// Once one side is empty the whole remainder of the other side is inserted
/// or deleted in a single move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Move<T> {
    Insert(Vec<T>),
    Delete(Vec<T>),
    Skip(T),
    Replace(T, T),
}

fn quoted<T: fmt::Display>(f: &mut fmt::Formatter<'_>, els: &[T]) -> fmt::Result {
    write!(f, "\"")?;
    for el in els {
        write!(f, "{}", el)?;
    }
    write!(f, "\"")
}

impl<T: fmt::Display> fmt::Display for Move<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Insert(els) => {
                write!(f, "insert(")?;
                quoted(f, els)?;
                write!(f, ")")
            }
            Move::Delete(els) => {
                write!(f, "delete(")?;
                quoted(f, els)?;
                write!(f, ")")
            }
            Move::Skip(a) => write!(f, "skip(\"{}\")", a),
            Move::Replace(a, b) => write!(f, "replace(\"{}\"->\"{}\")", a, b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition<T> {
    pub op: Move<T>,
    pub call: Call<T>,
}

/// One call of the recursive distance, on the suffixes starting at `src` and
/// `tgt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Call<T> {
    pub src: usize,
    pub tgt: usize,
    pub cost: usize,
    pub transitions: Vec<Transition<T>>,
}

impl<T> Call<T> {
    /// Number of calls in the tree rooted here.
    pub fn size(&self) -> usize {
        1 + self.transitions.iter().map(|t| t.call.size()).sum::<usize>()
    }
}

/// The full call tree of the recursive distance between two sequences.
#[derive(Debug, Clone, Serialize)]
pub struct Trace<'a, T> {
    pub src: &'a [T],
    pub tgt: &'a [T],
    pub root: Call<T>,
}

impl<T: fmt::Display> Trace<'_, T> {
    /// Node label of `call`, e.g. `dist("ab", "b")`.
    pub fn label(&self, call: &Call<T>) -> String {
        let mut label = String::from("dist(\"");
        for el in &self.src[call.src..] {
            label.push_str(&el.to_string());
        }
        label.push_str("\", \"");
        for el in &self.tgt[call.tgt..] {
            label.push_str(&el.to_string());
        }
        label.push_str("\")");
        label
    }
}

impl<T> Trace<'_, T> {
    pub fn distance(&self) -> usize {
        self.root.cost
    }
}

/// Records every call the unmemoized recursive distance makes.
///
/// Each mismatch fans out into insert, delete and replace calls, in that
/// order, so the tree grows exponentially with the inputs.
pub fn trace<'a, T: Eq + Clone>(src: &'a [T], tgt: &'a [T]) -> Trace<'a, T> {
    let root = visit(src, tgt, 0, 0);
    tracing::debug!(
        src_len = src.len(),
        tgt_len = tgt.len(),
        calls = root.size(),
        "traced recursive distance"
    );
    Trace { src, tgt, root }
}

fn visit<T: Eq + Clone>(src: &[T], tgt: &[T], i: usize, j: usize) -> Call<T> {
    let leaf = |i, j| Call {
        src: i,
        tgt: j,
        cost: 0,
        transitions: vec![],
    };

    if i == src.len() {
        if j == tgt.len() {
            return leaf(i, j);
        }
        return Call {
            src: i,
            tgt: j,
            cost: tgt.len() - j,
            transitions: vec![Transition {
                op: Move::Insert(tgt[j..].to_vec()),
                call: leaf(i, tgt.len()),
            }],
        };
    }
    if j == tgt.len() {
        return Call {
            src: i,
            tgt: j,
            cost: src.len() - i,
            transitions: vec![Transition {
                op: Move::Delete(src[i..].to_vec()),
                call: leaf(src.len(), j),
            }],
        };
    }

    let (a, b) = (&src[i], &tgt[j]);
    if a == b {
        let call = visit(src, tgt, i + 1, j + 1);
        return Call {
            src: i,
            tgt: j,
            cost: call.cost,
            transitions: vec![Transition {
                op: Move::Skip(a.clone()),
                call,
            }],
        };
    }

    let transitions = vec![
        Transition {
            op: Move::Insert(vec![b.clone()]),
            call: visit(src, tgt, i, j + 1),
        },
        Transition {
            op: Move::Delete(vec![a.clone()]),
            call: visit(src, tgt, i + 1, j),
        },
        Transition {
            op: Move::Replace(a.clone(), b.clone()),
            call: visit(src, tgt, i + 1, j + 1),
        },
    ];
    let cost = 1 + transitions.iter().map(|t| t.call.cost).min().unwrap_or(0);
    Call {
        src: i,
        tgt: j,
        cost,
        transitions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::naive;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    proptest! {
        #[test]
        fn test_root_cost_is_distance(
            src in prop::collection::vec(0u8..4, 0..6),
            tgt in prop::collection::vec(0u8..4, 0..6),
        ) {
            prop_assert_eq!(trace(&src, &tgt).distance(), naive(&src, &tgt));
        }
    }

    #[test]
    fn test_empty() {
        let empty: Vec<char> = vec![];
        let t = trace(&empty, &empty);
        assert_eq!(t.distance(), 0);
        assert_eq!(t.root.size(), 1);
        assert_eq!(t.label(&t.root), "dist(\"\", \"\")");
    }

    #[test]
    fn test_bulk_insert() {
        let src = chars("");
        let tgt = chars("ab");
        let t = trace(&src, &tgt);
        assert_eq!(t.distance(), 2);
        assert_eq!(t.root.transitions.len(), 1);
        assert_eq!(t.root.transitions[0].op.to_string(), "insert(\"ab\")");
        assert_eq!(t.label(&t.root.transitions[0].call), "dist(\"\", \"\")");
    }

    #[test]
    fn test_skip_then_delete() {
        let src = chars("ab");
        let tgt = chars("a");
        let t = trace(&src, &tgt);
        assert_eq!(t.distance(), 1);
        assert_eq!(t.root.size(), 3);
        let skip = &t.root.transitions[0];
        assert_eq!(skip.op, Move::Skip('a'));
        assert_eq!(t.label(&skip.call), "dist(\"b\", \"\")");
        assert_eq!(skip.call.transitions[0].op.to_string(), "delete(\"b\")");
    }

    #[test]
    fn test_mismatch_fans_out() {
        let src = chars("a");
        let tgt = chars("b");
        let t = trace(&src, &tgt);
        let ops: Vec<String> = t.root.transitions.iter().map(|t| t.op.to_string()).collect();
        assert_eq!(ops, ["insert(\"b\")", "delete(\"a\")", "replace(\"a\"->\"b\")"]);
        assert_eq!(t.distance(), 1);
        // root, three children, one bulk move below each of insert and delete
        assert_eq!(t.root.size(), 6);
    }
}
