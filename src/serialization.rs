use crate::script::Edit;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

pub trait ToScript {
    fn to_script(&self) -> String;
}

pub trait FromScript: Sized {
    fn from_script(s: &str) -> Result<Self, ScriptError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),
    #[error("invalid symbol: {0}")]
    InvalidSymbol(String),
}

impl<T: Display> ToScript for Edit<T> {
    fn to_script(&self) -> String {
        match self {
            Edit::Insert(el) => format!("INSERT {}", el),
            Edit::Delete(el) => format!("DELETE {}", el),
            Edit::Replace(from, to) => format!("REPLACE {} WITH {}", from, to),
            Edit::Skip => "SKIP".to_string(),
        }
    }
}

fn symbol<T: FromStr>(s: &str, line: &str) -> Result<T, ScriptError> {
    s.parse::<T>()
        .map_err(|_| ScriptError::InvalidSymbol(line.to_string()))
}

impl<T: FromStr> FromScript for Edit<T> {
    fn from_script(s: &str) -> Result<Self, ScriptError> {
        if s == "SKIP" {
            return Ok(Edit::Skip);
        }
        if let Some(rest) = s.strip_prefix("INSERT ") {
            return Ok(Edit::Insert(symbol(rest, s)?));
        }
        if let Some(rest) = s.strip_prefix("DELETE ") {
            return Ok(Edit::Delete(symbol(rest, s)?));
        }
        if let Some(rest) = s.strip_prefix("REPLACE ") {
            // the first " WITH " separates the two symbols
            let (from, to) = rest
                .split_once(" WITH ")
                .ok_or_else(|| ScriptError::UnexpectedToken(s.to_string()))?;
            return Ok(Edit::Replace(symbol(from, s)?, symbol(to, s)?));
        }
        Err(ScriptError::UnexpectedToken(s.to_string()))
    }
}

impl<T: Display> ToScript for Vec<Edit<T>> {
    fn to_script(&self) -> String {
        self.iter()
            .map(ToScript::to_script)
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl<T: FromStr> FromScript for Vec<Edit<T>> {
    fn from_script(s: &str) -> Result<Self, ScriptError> {
        if s.is_empty() {
            return Ok(vec![]);
        }

        // split on '\n' only, a '\r' belongs to the symbol
        s.split('\n').map(Edit::<T>::from_script).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::run;
    use crate::script::{generate_str, generate_tabulated, EditScript};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_serialization_roundtrip(
            src in prop::collection::vec("[a-z0-9]{1,3}", 0..12usize),
            tgt in prop::collection::vec("[a-z0-9]{1,3}", 0..12usize),
        ) {
            let script = generate_tabulated(&src, &tgt);
            let text = script.to_script();
            let parsed = EditScript::<String>::from_script(&text).unwrap();

            prop_assert_eq!(&parsed, &script);
            prop_assert_eq!(run(&src, &parsed), Ok(tgt));
        }
    }

    #[test]
    fn test_render() {
        let script = generate_str("alpha", "aleph");
        assert_eq!(
            script.to_script(),
            "SKIP\nSKIP\nINSERT e\nSKIP\nSKIP\nDELETE a"
        );
        assert_eq!(Edit::Replace('a', 'b').to_script(), "REPLACE a WITH b");
    }

    #[test]
    fn test_parse_chars() {
        let parsed = EditScript::<char>::from_script("REPLACE k WITH s\nSKIP\nINSERT g");
        assert_eq!(
            parsed,
            Ok(vec![Edit::Replace('k', 's'), Edit::Skip, Edit::Insert('g')])
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(EditScript::<char>::from_script(""), Ok(vec![]));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            EditScript::<char>::from_script("SKIP\nMOVE a"),
            Err(ScriptError::UnexpectedToken("MOVE a".to_string()))
        );
        assert_eq!(
            Edit::<char>::from_script("INSERT ab"),
            Err(ScriptError::InvalidSymbol("INSERT ab".to_string()))
        );
        assert_eq!(
            Edit::<char>::from_script("REPLACE a b"),
            Err(ScriptError::UnexpectedToken("REPLACE a b".to_string()))
        );
        assert_eq!(
            Edit::<u8>::from_script("DELETE 300"),
            Err(ScriptError::InvalidSymbol("DELETE 300".to_string()))
        );
    }
}
