//! Token substitution for scaffold templates.
//!
//! Templates use `${TOKEN}` placeholders.
//!
//! # Syntax
//!
//! - `${TOKEN}` - replaced with the token's value
//! - `$${escaped}` - produces literal `${escaped}` in output
//! - any other `$` (Makefile `$(VAR)`, `$@`) is kept as is

use crate::error::{PystrapError, Result};
use std::collections::HashMap;

/// A segment of a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Token reference: ${NAME}
    Token(String),
}

/// Parse a template into literal and token segments.
pub fn parse_template(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut current_literal = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            current_literal.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                if chars.peek() == Some(&'{') {
                    // $${...} -> literal ${...}
                    chars.next();
                    current_literal.push_str("${");
                    for c in chars.by_ref() {
                        current_literal.push(c);
                        if c == '}' {
                            break;
                        }
                    }
                } else {
                    current_literal.push_str("$$");
                }
            }
            Some('{') => {
                chars.next();

                if !current_literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut current_literal)));
                }

                let mut name = String::new();
                for c in chars.by_ref() {
                    if c == '}' {
                        break;
                    }
                    name.push(c);
                }

                segments.push(Segment::Token(name));
            }
            _ => current_literal.push(c),
        }
    }

    if !current_literal.is_empty() {
        segments.push(Segment::Literal(current_literal));
    }

    segments
}

/// Token values for rendering.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    values: HashMap<String, String>,
}

impl TemplateContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token value, builder style.
    pub fn with(mut self, token: &str, value: impl Into<String>) -> Self {
        self.values.insert(token.to_string(), value.into());
        self
    }

    /// Value of a token, if set.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }
}

/// Render `input`, substituting every `${TOKEN}`.
///
/// # Errors
///
/// Returns [`PystrapError::TemplateRender`] naming `template` if a token has
/// no value in the context.
pub fn render(template: &str, input: &str, context: &TemplateContext) -> Result<String> {
    let mut result = String::with_capacity(input.len());

    for segment in parse_template(input) {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Token(name) => {
                let value = context
                    .get(&name)
                    .ok_or_else(|| PystrapError::TemplateRender {
                        name: template.to_string(),
                        message: format!("Unresolved token: ${{{}}}", name),
                    })?;
                result.push_str(value);
            }
        }
    }

    Ok(result)
}
