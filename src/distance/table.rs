use serde::Serialize;
use std::fmt;

/// Which operation achieves the cost of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Step {
    Skip,
    Delete,
    Insert,
    Replace,
}

/// A `Step` resolved against the symbols of the cell it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<T> {
    Skip(T),
    Delete(T),
    Insert(T),
    Replace(T, T),
}

impl<T: fmt::Display> fmt::Display for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Skip(a) => write!(f, "Skip {}", a),
            Action::Delete(a) => write!(f, "Delete {}", a),
            Action::Insert(b) => write!(f, "Insert {}", b),
            Action::Replace(a, b) => write!(f, "Replace {} with {}", a, b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub cost: usize,
    pub step: Option<Step>,
}

/// The full distance table between `src` and `tgt`.
///
/// Cell `(i, j)` holds the distance between the suffixes `src[i..]` and
/// `tgt[j..]`, so the table has `src.len() + 1` rows of `tgt.len() + 1`
/// cells and the overall distance sits at `(0, 0)`.
#[derive(Debug, Clone, Serialize)]
pub struct Table<'a, T> {
    src: &'a [T],
    tgt: &'a [T],
    width: usize,
    cells: Vec<Cell>,
}

impl<'a, T> Table<'a, T> {
    pub(crate) fn new(src: &'a [T], tgt: &'a [T]) -> Self {
        let width = tgt.len() + 1;
        Table {
            src,
            tgt,
            width,
            cells: vec![Cell { cost: 0, step: None }; (src.len() + 1) * width],
        }
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, cost: usize, step: Option<Step>) {
        self.cells[i * self.width + j] = Cell { cost, step };
    }

    pub fn distance(&self) -> usize {
        self.cost(0, 0)
    }

    pub fn cost(&self, i: usize, j: usize) -> usize {
        self.cell(i, j).cost
    }

    /// # Panics
    ///
    /// Panics if `i > src.len()` or `j > tgt.len()`.
    pub fn cell(&self, i: usize, j: usize) -> Cell {
        assert!(j < self.width, "column {} out of range", j);
        self.cells[i * self.width + j]
    }

    /// Resolves the winning step of cell `(i, j)` to the symbols involved.
    /// The terminal cell `(m, n)` has no action.
    pub fn action(&self, i: usize, j: usize) -> Option<Action<&'a T>> {
        let src = self.src;
        let tgt = self.tgt;
        self.cell(i, j).step.map(|step| match step {
            Step::Skip => Action::Skip(&src[i]),
            Step::Delete => Action::Delete(&src[i]),
            Step::Insert => Action::Insert(&tgt[j]),
            Step::Replace => Action::Replace(&src[i], &tgt[j]),
        })
    }

    /// Rows in source order, the last one being the empty-source row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn source(&self) -> &'a [T] {
        self.src
    }

    pub fn target(&self) -> &'a [T] {
        self.tgt
    }
}
