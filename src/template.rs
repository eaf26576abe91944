//! Folder template parsing.
//! A template is a YAML mapping whose `folder*` entries describe directories.
//! It is parsed once into a tree of [`TemplateNode`]s and then walked once per row.

use std::fs;
use std::path::Path;

use indexmap::IndexSet;
use log::{debug, info};
use serde_yaml::{Mapping, Value};

use crate::constants::{CONDITION_FIELD, DEFAULT_TEMPLATE, FOLDER_PREFIX, NAME_FIELD};
use crate::error::{Error, Result};
use crate::placeholder::{scan_references, Pattern, VariableRef};

/// One directory of the template and the directories nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateNode {
    /// Key of the entry in the template (`folder1`, `folder2`, ...)
    pub key: String,
    /// Folder name, possibly containing `$(foldername=...)` placeholders
    pub name: Pattern,
    /// Optional inclusion condition, usually `$(condition=...)`
    pub condition: Option<Pattern>,
    /// Nested folders in declaration order
    pub children: Vec<TemplateNode>,
}

impl TemplateNode {
    fn collect_variables(&self, out: &mut IndexSet<VariableRef>) {
        out.extend(self.name.references());
        if let Some(condition) = &self.condition {
            out.extend(condition.references());
        }
        for child in &self.children {
            child.collect_variables(out);
        }
    }
}

/// A parsed folder template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pub nodes: Vec<TemplateNode>,
}

/// Renders a YAML scalar as text; mappings and sequences have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn field_text(key: &str, field: &str, value: &Value) -> Result<String> {
    scalar_text(value).ok_or_else(|| {
        Error::TemplateError(format!("'{field}' of '{key}' must be a string, number or boolean"))
    })
}

fn parse_node(key: &str, fields: &Mapping) -> Result<TemplateNode> {
    let name = match fields.get(NAME_FIELD) {
        None | Some(Value::Null) => Pattern::literal(key),
        Some(value) => Pattern::parse(&field_text(key, NAME_FIELD, value)?)?,
    };

    // An empty condition behaves like no condition at all.
    let condition = match fields.get(CONDITION_FIELD) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let text = field_text(key, CONDITION_FIELD, value)?;
            if text.is_empty() {
                None
            } else {
                Some(Pattern::parse(&text)?)
            }
        }
    };

    Ok(TemplateNode { key: key.to_string(), name, condition, children: parse_nodes(fields)? })
}

fn parse_nodes(mapping: &Mapping) -> Result<Vec<TemplateNode>> {
    let mut nodes = Vec::new();
    for (key, value) in mapping {
        let Some(key) = key.as_str() else { continue };
        if !key.starts_with(FOLDER_PREFIX) {
            continue;
        }
        match value {
            Value::Mapping(fields) => nodes.push(parse_node(key, fields)?),
            _ => debug!("Ignoring '{key}': not a folder mapping"),
        }
    }
    Ok(nodes)
}

impl Template {
    /// Parses a template from YAML text.
    ///
    /// # Errors
    /// * `Error::YamlError` if the text is not valid YAML
    /// * `Error::TemplateError` if the document is not a mapping or a field has the wrong shape
    /// * Placeholder errors from [`Pattern::parse`]
    pub fn parse(content: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(content)?;
        let template = Self::from_value(&value)?;

        let unused = template.unused_references(content);
        if !unused.is_empty() {
            let unused: Vec<String> = unused.iter().map(ToString::to_string).collect();
            debug!("Placeholders outside folder entries are ignored: {}", unused.join(", "));
        }
        Ok(template)
    }

    /// Well-formed references that occur in `text` but in none of the
    /// template's folder nodes, such as placeholders under non-`folder` keys.
    pub fn unused_references(&self, text: &str) -> IndexSet<VariableRef> {
        let used = self.variables();
        scan_references(text).into_iter().filter(|reference| !used.contains(reference)).collect()
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Mapping(mapping) => Ok(Self { nodes: parse_nodes(mapping)? }),
            Value::Null => Ok(Self::default()),
            _ => Err(Error::TemplateError("template root must be a mapping".to_string())),
        }
    }

    /// Reads the template at `path`, first writing the default template there
    /// if the file does not exist.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, DEFAULT_TEMPLATE)?;
            info!("Created default template at '{}'.", path.display());
        }

        let content = fs::read_to_string(path)?;
        let template = Self::parse(&content)?;
        info!("Read template from '{}'.", path.display());
        Ok(template)
    }

    /// Every distinct reference in the template, in order of first occurrence.
    pub fn variables(&self) -> IndexSet<VariableRef> {
        let mut out = IndexSet::new();
        for node in &self.nodes {
            node.collect_variables(&mut out);
        }
        out
    }

    /// Distinct variable names, regardless of the kind they are used with.
    pub fn variable_names(&self) -> IndexSet<String> {
        self.variables().into_iter().map(|reference| reference.name).collect()
    }
}
