//! YAML dictionary helpers for named configuration entries.
//!
//! An entry is a single-key mapping whose key is the entry name and whose
//! value is the entry body:
//!
//! ```yaml
//! N2:
//!   specie:
//!     nMoles: 1
//!     molWeight: 28.0134
//! ```

use serde_yaml::{Mapping, Value};

use crate::error::{SpecieError, SpecieResult};

/// Body of a named configuration entry.
pub type Dict = Mapping;

/// Parses a YAML document holding exactly one named entry.
///
/// Returns the entry name and its body. A null body reads as an empty
/// dictionary so missing keys are reported by the specie parser.
pub fn parse_single_entry(text: &str) -> SpecieResult<(String, Dict)> {
    let root: Value = serde_yaml::from_str(text)?;
    let Value::Mapping(root) = root else {
        return Err(SpecieError::Shape {
            what: "document is not a mapping",
        });
    };

    if root.len() != 1 {
        return Err(SpecieError::EntryCount { found: root.len() });
    }

    let Some((key, body)) = root.into_iter().next() else {
        return Err(SpecieError::EntryCount { found: 0 });
    };

    let name = match key {
        Value::String(name) => name,
        Value::Null => String::new(),
        _ => {
            return Err(SpecieError::Shape {
                what: "entry name is not a string",
            });
        }
    };

    let body = match body {
        Value::Mapping(body) => body,
        Value::Null => Dict::new(),
        _ => {
            return Err(SpecieError::Shape {
                what: "entry body is not a mapping",
            });
        }
    };

    Ok((name, body))
}

/// Renders one named entry as a YAML document.
pub fn write_single_entry(name: &str, body: Dict) -> SpecieResult<String> {
    let mut root = Mapping::new();
    root.insert(Value::from(name), Value::Mapping(body));
    Ok(serde_yaml::to_string(&root)?)
}

/// Looks up a sub-dictionary by key.
pub(crate) fn sub_dict<'a>(dict: &'a Dict, key: &'static str) -> SpecieResult<&'a Dict> {
    match dict.get(key) {
        Some(Value::Mapping(sub)) => Ok(sub),
        Some(_) => Err(SpecieError::Shape {
            what: "sub-dictionary is not a mapping",
        }),
        None => Err(SpecieError::MissingKey { key }),
    }
}
