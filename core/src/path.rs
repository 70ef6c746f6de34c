//! Output paths inside a structured-data document
//!
//! A field's binding names where its value lands, e.g. `brand.name` or
//! `mainEntity.interactionStatistic[0].userInteractionCount`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::PathError;

/// Segment of a property path
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum PathSegment {
    /// Object property access: .fieldName
    Property(String),
    /// Array index access: [0], [1], etc.
    Index(usize),
}

/// Property path for nested access (e.g., "brand.name" or "image[0]")
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PropertyPath {
    segments: Vec<PathSegment>,
}

impl PropertyPath {
    /// True for the empty path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parse a path string. The empty string is the root path.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = s.chars();

        while let Some(ch) = chars.next() {
            match ch {
                '.' => {
                    if current.is_empty() && !matches!(segments.last(), Some(PathSegment::Index(_))) {
                        return Err(PathError::EmptyProperty(s.to_string()));
                    }
                    if !current.is_empty() {
                        segments.push(PathSegment::Property(std::mem::take(&mut current)));
                    }
                }
                '[' => {
                    if !current.is_empty() {
                        segments.push(PathSegment::Property(std::mem::take(&mut current)));
                    }
                    let mut index_str = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == ']' {
                            closed = true;
                            break;
                        }
                        index_str.push(c);
                    }
                    if !closed {
                        return Err(PathError::Unclosed(s.to_string()));
                    }
                    let idx = index_str.trim().parse::<usize>().map_err(|_| PathError::BadIndex {
                        path: s.to_string(),
                        index: index_str.clone(),
                    })?;
                    segments.push(PathSegment::Index(idx));
                }
                _ => current.push(ch),
            }
        }

        if !current.is_empty() {
            segments.push(PathSegment::Property(current));
        } else if s.ends_with('.') {
            return Err(PathError::EmptyProperty(s.to_string()));
        }

        Ok(Self { segments })
    }

    /// Read the value at this path, if every segment resolves.
    pub fn get<'a>(&self, target: &'a Value) -> Option<&'a Value> {
        self.segments.iter().try_fold(target, |node, seg| match seg {
            PathSegment::Property(name) => node.as_object()?.get(name),
            PathSegment::Index(idx) => node.as_array()?.get(*idx),
        })
    }

    /// Write `value` at this path.
    ///
    /// Existing keys keep their position, missing keys are appended, arrays
    /// are padded with `null` up to the index. A scalar standing where a
    /// container is needed gets replaced. Writing at the root replaces the
    /// whole target.
    pub fn set(&self, target: &mut Value, value: Value) {
        let mut node = target;
        for seg in &self.segments {
            node = match seg {
                PathSegment::Property(name) => {
                    if !node.is_object() {
                        *node = Value::Object(Map::new());
                    }
                    match node {
                        Value::Object(map) => map.entry(name.clone()).or_insert(Value::Null),
                        _ => unreachable!("node was just made an object"),
                    }
                }
                PathSegment::Index(idx) => {
                    if !node.is_array() {
                        *node = Value::Array(Vec::new());
                    }
                    match node {
                        Value::Array(items) => {
                            if items.len() <= *idx {
                                items.resize(idx + 1, Value::Null);
                            }
                            &mut items[*idx]
                        }
                        _ => unreachable!("node was just made an array"),
                    }
                }
            };
        }
        *node = value;
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            match seg {
                PathSegment::Property(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Property(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

impl TryFrom<String> for PropertyPath {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PropertyPath> for String {
    fn from(path: PropertyPath) -> Self {
        path.to_string()
    }
}
