//! Placeholder parsing and substitution.
//! Folder names and conditions reference row variables with `$(kind=name)`,
//! where `kind` is `foldername` or `condition`.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

use crate::error::{Error, Result};
use crate::rows::Row;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\(([^)]*)\)").expect("placeholder regex is valid"));

/// The role a variable plays at the place it is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableKind {
    /// Substituted into a folder name
    FolderName,
    /// Substituted into a condition and tested for truthiness
    Condition,
}

impl VariableKind {
    /// Maps a placeholder tag to its kind. Tags are matched exactly.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "foldername" => Some(Self::FolderName),
            "condition" => Some(Self::Condition),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::FolderName => "foldername",
            Self::Condition => "condition",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A single `(name, kind)` reference extracted from a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableRef {
    pub name: String,
    pub kind: VariableKind,
}

impl VariableRef {
    pub fn new<S: Into<String>>(name: S, kind: VariableKind) -> Self {
        Self { name: name.into(), kind }
    }
}

impl fmt::Display for VariableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$({}={})", self.kind, self.name)
    }
}

enum ReferenceError {
    Malformed(String),
    UnknownKind(String),
}

fn is_variable_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Splits the inside of `$(...)` into a reference.
fn parse_reference(contents: &str) -> std::result::Result<VariableRef, ReferenceError> {
    let Some((kind, name)) = contents.split_once('=') else {
        return Err(ReferenceError::Malformed("expected 'kind=name'".to_string()));
    };
    let (kind, name) = (kind.trim(), name.trim());

    if !is_variable_name(name) {
        return Err(ReferenceError::Malformed(format!("'{name}' is not a valid variable name")));
    }

    match VariableKind::from_tag(kind) {
        Some(kind) => Ok(VariableRef::new(name, kind)),
        None => Err(ReferenceError::UnknownKind(kind.to_string())),
    }
}

/// Returns every distinct well-formed reference found in `text`, in order of
/// first occurrence.
///
/// Never fails: malformed placeholders and unknown kinds are ignored, and text
/// without placeholders yields an empty set. Use [`Pattern::parse`] when
/// malformed placeholders must be rejected.
pub fn scan_references(text: &str) -> IndexSet<VariableRef> {
    PLACEHOLDER
        .captures_iter(text)
        .filter_map(|caps| parse_reference(&caps[1]).ok())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(VariableRef),
}

/// A validated name or condition pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses `text`, rejecting placeholders that are not `kind=name` with a
    /// known kind. A `$(` that is never closed is kept as literal text.
    ///
    /// # Errors
    /// * `Error::MalformedPlaceholder` if a placeholder cannot be split into kind and name
    /// * `Error::UnknownPlaceholderKind` if the kind is not `foldername` or `condition`
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > last {
                segments.push(Segment::Literal(text[last..whole.start()].to_string()));
            }

            let contents = &caps[1];
            let reference = parse_reference(contents).map_err(|e| match e {
                ReferenceError::Malformed(reason) => Error::MalformedPlaceholder {
                    placeholder: contents.to_string(),
                    pattern: text.to_string(),
                    reason,
                },
                ReferenceError::UnknownKind(kind) => {
                    Error::UnknownPlaceholderKind { kind, pattern: text.to_string() }
                }
            })?;
            segments.push(Segment::Placeholder(reference));
            last = whole.end();
        }

        if last < text.len() {
            segments.push(Segment::Literal(text[last..].to_string()));
        }

        Ok(Self { source: text.to_string(), segments })
    }

    /// A pattern made of literal text only, with no placeholder recognition.
    pub fn literal<S: Into<String>>(text: S) -> Self {
        let source = text.into();
        let segments = if source.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Literal(source.clone())]
        };
        Self { source, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Distinct references of this pattern, in order of first occurrence.
    pub fn references(&self) -> IndexSet<VariableRef> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(reference) => Some(reference.clone()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Names referenced by this pattern that `row` has no value for.
    pub fn missing(&self, row: &Row) -> Vec<String> {
        let missing: IndexSet<&str> = self
            .segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(reference) if !row.contains_key(&reference.name) => {
                    Some(reference.name.as_str())
                }
                _ => None,
            })
            .collect();
        missing.into_iter().map(str::to_string).collect()
    }

    /// Replaces every placeholder with its value from `row`.
    ///
    /// # Errors
    /// * `Error::UnresolvedReference` naming the first variable `row` lacks
    pub fn substitute(&self, row: &Row) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(reference) => match row.get(&reference.name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(Error::UnresolvedReference {
                            name: reference.name.clone(),
                            pattern: self.source.clone(),
                        })
                    }
                },
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
