use serde::{Deserialize, Serialize};

/// Alias for a vector of Edit
/// Result of the script generators, read front to back
pub type EditScript<T> = Vec<Edit<T>>;

/// Each operation in a script either
/// adds a symbol to the output (Insert)
/// consumes an expected source symbol (Delete)
/// consumes an expected source symbol and emits another one (Replace)
/// copies the next source symbol through (Skip)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edit<T> {
    Insert(T),
    Delete(T),
    Replace(T, T),
    Skip,
}

impl<T> Edit<T> {
    pub fn is_skip(&self) -> bool {
        matches!(self, Edit::Skip)
    }
}

/// Number of operations in `script` that are not a `Skip`.
pub fn cost<T>(script: &[Edit<T>]) -> usize {
    script.iter().filter(|e| !e.is_skip()).count()
}
