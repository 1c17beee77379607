//! Template engine for blueprint bodies.
//!
//! Blueprint files and paths are written with Go-style field interpolation so
//! that the generated Go sources read naturally to their authors:
//!
//! ```text
//! module {{.ProjectName}}
//!
//! go {{ .GoVersion }}
//! ```
//!
//! # Syntax
//!
//! - `{{.Field}}` - Substitutes the scalar value of `Field` from the context
//! - Whitespace inside the braces is ignored (`{{ .Field }}`)
//! - A lone `}}` outside an action is literal text
//!
//! Only field references are supported. Loops, conditionals, pipelines and
//! partials are rejected as syntax errors.
//!
//! # Error Handling
//!
//! A template is parsed completely before it is executed, so malformed
//! markers are reported as [`ScaffoldError::TemplateSyntax`] regardless of the
//! context. Fields the context does not provide are reported as
//! [`ScaffoldError::TemplateExecution`] rather than rendered as empty text.

use crate::error::{Result, ScaffoldError};
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::LazyLock;


static FIELD_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid field name regex")
});

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Field { name: &'a str, position: usize },
}

/// A parsed template, ready to execute against any serializable context.
#[derive(Debug, Clone)]
pub struct Template<'a> {
    name: String,
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    /// Parse `body` into a template named `name`.
    ///
    /// The name only appears in error messages; callers pass the relative
    /// output path so failures point at the file being generated.
    pub fn parse(name: &str, body: &'a str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = body;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Text(&rest[..start]));
            }

            let position = offset + start;
            let after_open = &rest[start + OPEN.len()..];
            let end = after_open
                .find(CLOSE)
                .ok_or_else(|| syntax_error(name, position, "unterminated action"))?;

            let action = after_open[..end].trim();
            segments.push(Segment::Field {
                name: parse_field(name, position, action)?,
                position,
            });

            let consumed = start + OPEN.len() + end + CLOSE.len();
            rest = &rest[consumed..];
            offset += consumed;
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest));
        }

        Ok(Self {
            name: name.to_string(),
            segments,
        })
    }

    /// Field names referenced by this template, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field { name, .. } => Some(*name),
            Segment::Text(_) => None,
        })
    }

    /// Execute the template against `context`.
    ///
    /// The context must serialize to a map (a struct or a map type). Field
    /// lookups are exact and case-sensitive.
    pub fn execute<C: Serialize + ?Sized>(&self, context: &C) -> Result<String> {
        let fields = if self.fields().next().is_some() {
            context_fields(&self.name, context)?
        } else {
            Map::new()
        };
        let mut rendered = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Text(text) => rendered.push_str(text),
                Segment::Field { name, position } => {
                    let value = fields.get(*name).ok_or_else(|| {
                        execution_error(
                            &self.name,
                            format!(
                                "context has no field '.{}' (referenced at offset {})",
                                name, position
                            ),
                        )
                    })?;
                    rendered.push_str(&scalar_text(&self.name, name, value)?);
                }
            }
        }

        Ok(rendered)
    }
}

/// Parse and execute a template in one step.
///
/// # Examples
///
/// ```ignore
/// use std::collections::BTreeMap;
///
/// let mut context = BTreeMap::new();
/// context.insert("ProjectName", "acme");
///
/// let out = render("go.mod", "module {{.ProjectName}}\n", &context)?;
/// assert_eq!(out, "module acme\n");
/// ```
pub fn render<C: Serialize + ?Sized>(name: &str, body: &str, context: &C) -> Result<String> {
    Template::parse(name, body)?.execute(context)
}

fn parse_field<'a>(template: &str, position: usize, action: &'a str) -> Result<&'a str> {
    if action.is_empty() {
        return Err(syntax_error(template, position, "empty action"));
    }

    let Some(field) = action.strip_prefix('.') else {
        return Err(syntax_error(
            template,
            position,
            &format!("unsupported action '{}': only '.Field' references are allowed", action),
        ));
    };

    if !FIELD_NAME_REGEX.is_match(field) {
        return Err(syntax_error(
            template,
            position,
            &format!("invalid field reference '{}'", action),
        ));
    }

    Ok(field)
}

fn context_fields<C: Serialize + ?Sized>(template: &str, context: &C) -> Result<Map<String, Value>> {
    let value = serde_json::to_value(context).map_err(|e| {
        execution_error(template, format!("context could not be serialized: {}", e))
    })?;

    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(execution_error(
            template,
            format!("context '.' must be a map of fields, got {}", kind_of(&other)),
        )),
    }
}

fn scalar_text(template: &str, field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(execution_error(
            template,
            format!("field '.{}' is {}, not a scalar value", field, kind_of(other)),
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}

fn syntax_error(template: &str, position: usize, reason: &str) -> ScaffoldError {
    ScaffoldError::TemplateSyntax {
        template: template.to_string(),
        position,
        reason: reason.to_string(),
    }
}

fn execution_error(template: &str, reason: String) -> ScaffoldError {
    ScaffoldError::TemplateExecution {
        template: template.to_string(),
        reason,
    }
}
