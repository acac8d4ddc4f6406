use crate::script::Edit;
use std::fmt;
use thiserror::Error;

/// Raised when a script does not fit the source it is replayed against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError<T: fmt::Debug> {
    #[error("mismatch at source position {position}: expected {expected:?}, found {found:?}")]
    Mismatch {
        position: usize,
        expected: T,
        found: T,
    },
    #[error("{operation} at source position {position} runs past the end of the source")]
    Exhausted {
        position: usize,
        operation: &'static str,
    },
}

struct Machine<'a, T> {
    src: &'a [T],
    cursor: usize,
    output: Vec<T>,
}

impl<'a, T: Eq + Clone + fmt::Debug> Machine<'a, T> {
    fn new(src: &'a [T], capacity: usize) -> Self {
        Machine {
            src,
            cursor: 0,
            output: Vec::with_capacity(capacity),
        }
    }

    fn step(&mut self, edit: &Edit<T>) -> Result<(), ReplayError<T>> {
        match edit {
            Edit::Insert(x) => self.output.push(x.clone()),
            Edit::Delete(x) => {
                self.consume("DELETE", Some(x))?;
            }
            Edit::Replace(x, y) => {
                self.consume("REPLACE", Some(x))?;
                self.output.push(y.clone());
            }
            // trusted: the symbol under the cursor is copied without a check
            Edit::Skip => {
                let el = self.consume("SKIP", None)?.clone();
                self.output.push(el);
            }
        }
        Ok(())
    }

    fn consume(&mut self, operation: &'static str, expected: Option<&T>) -> Result<&'a T, ReplayError<T>> {
        let position = self.cursor;
        let found = self
            .src
            .get(position)
            .ok_or(ReplayError::Exhausted { position, operation })?;
        if let Some(expected) = expected {
            if found != expected {
                return Err(ReplayError::Mismatch {
                    position,
                    expected: expected.clone(),
                    found: found.clone(),
                });
            }
        }
        self.cursor += 1;
        Ok(found)
    }

    fn finish(self) -> Vec<T> {
        self.output
    }
}

/// Replays `script` against `src` and returns the sequence it produces.
///
/// `Delete` and `Replace` check that the source holds the symbol they expect
/// and the replay stops at the first one that does not. Source symbols left
/// over once the script is exhausted are dropped.
///
/// # Examples
///
/// ```
/// use editscript::machine::run;
/// use editscript::script::Edit;
///
/// let src = vec!['z', 'a'];
/// let script = vec![Edit::Replace('z', 'y'), Edit::Skip];
/// assert_eq!(run(&src, &script), Ok(vec!['y', 'a']));
/// ```
pub fn run<T: Eq + Clone + fmt::Debug>(src: &[T], script: &[Edit<T>]) -> Result<Vec<T>, ReplayError<T>> {
    let mut machine = Machine::new(src, script.len());
    for edit in script {
        if let Err(err) = machine.step(edit) {
            tracing::debug!(error = %err, "replay aborted");
            return Err(err);
        }
    }
    let output = machine.finish();
    tracing::debug!(src_len = src.len(), output_len = output.len(), "replayed edit script");
    Ok(output)
}

/// Replays `script` against the `char`s of `src`.
pub fn run_str(src: &str, script: &[Edit<char>]) -> Result<String, ReplayError<char>> {
    let src: Vec<char> = src.chars().collect();
    run(&src, script).map(|out| out.into_iter().collect())
}
