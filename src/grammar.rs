//! Grammar lines have the shape
//!
//! ```text
//! Name : Type field, Type field, ...
//! ```
//!
//! The variant name and every field entry are trimmed. Anything else that
//! does not fit this shape is rejected, there is no recovery.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    pub ty: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec<'a> {
    pub name: &'a str,
    /// In declaration order.
    pub fields: Vec<FieldSpec<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line_no}: {kind}\n  {line:?}")]
pub struct ParseError {
    /// 1-based.
    pub line_no: usize,
    pub line: String,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("missing `:` between variant name and fields")]
    MissingColon,
    #[error("unexpected second `:`")]
    ExtraColon,
    #[error("empty variant name")]
    EmptyVariantName,
    #[error("variant name {0:?} contains whitespace")]
    InvalidVariantName(String),
    #[error("empty field entry")]
    EmptyField,
    #[error("field {0:?} is missing a type or a name")]
    MissingFieldName(String),
    #[error("field {0:?} must be exactly `Type name`")]
    ExtraFieldToken(String),
}

/// Parses a single grammar line.
///
/// A blank field list (`Nil :`) is a variant without fields.
pub fn parse_line(line: &str) -> Result<VariantSpec<'_>, ParseError> {
    let error = |kind| ParseError {
        line_no: 1,
        line: line.to_owned(),
        kind,
    };

    let Some((name, fields_desc)) = line.split_once(':') else {
        return Err(error(ParseErrorKind::MissingColon));
    };
    if fields_desc.contains(':') {
        return Err(error(ParseErrorKind::ExtraColon));
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(error(ParseErrorKind::EmptyVariantName));
    }
    if name.contains(char::is_whitespace) {
        return Err(error(ParseErrorKind::InvalidVariantName(name.to_owned())));
    }

    let fields_desc = fields_desc.trim();
    let mut fields = Vec::new();
    if !fields_desc.is_empty() {
        for field_desc in fields_desc.split(',') {
            fields.push(parse_field(field_desc).map_err(error)?);
        }
    }

    debug!(variant = name, fields = fields.len(), "parsed variant");

    Ok(VariantSpec { name, fields })
}

fn parse_field(field_desc: &str) -> Result<FieldSpec<'_>, ParseErrorKind> {
    let field_desc = field_desc.trim();
    if field_desc.is_empty() {
        return Err(ParseErrorKind::EmptyField);
    }

    let Some((ty, name)) = field_desc.split_once(' ') else {
        return Err(ParseErrorKind::MissingFieldName(field_desc.to_owned()));
    };
    if ty.contains(char::is_whitespace) || name.is_empty() || name.contains(char::is_whitespace) {
        return Err(ParseErrorKind::ExtraFieldToken(field_desc.to_owned()));
    }

    Ok(FieldSpec { ty, name })
}

/// Parses every line in order, stopping at the first malformed one.
pub fn parse_lines<'a, I>(lines: I) -> Result<Vec<VariantSpec<'a>>, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            parse_line(line).map_err(|err| ParseError {
                line_no: i + 1,
                ..err
            })
        })
        .collect()
}

/// One variant per line. A trailing newline does not start another line.
pub fn parse_grammar(source: &str) -> Result<Vec<VariantSpec<'_>>, ParseError> {
    parse_lines(source.lines())
}
