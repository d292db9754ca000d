/// parse a task document with structure
///
/// ```text
/// integral
/// function: sin(x) * x
/// lower: 0
/// upper: pi
/// methods: trapezoid, simpson
/// solver_settings
/// parallel: true
/// ```
///
/// which has titles on their own lines, then `key: value, value` pairs one per line.
/// A value runs to the next comma, semicolon or line end, so it may contain spaces
/// ("x * sin(x)"). Lines starting with //, #, % or ; are comments.
/// The result is HashMap<title, HashMap<key, Option<Vec<Value>>>>; with a template, keys
/// missing from the document are present as None and keys absent from the template are rejected.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, map_res, opt, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::path::Path;

pub type DocumentMap = HashMap<String, SectionMap>;
pub type SectionMap = HashMap<String, Option<Vec<Value>>>;
/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn as_string(&self) -> Option<&String> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Float or Integer as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }
    // Try to convert to string representation
    pub fn to_string_value(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Float(f) => f.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Boolean(b) => b.to_string(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_value())
    }
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

/// Parses a title (word characters without spaces)
pub(crate) fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, result) = map(identifier, String::from).parse(input)?;
    // trailing whitespace and newlines belong to the title line
    let (input, _) = multispace0(input)?;
    Ok((input, result))
}

/// Parses a key (word characters without spaces)
pub(crate) fn parse_key(input: &str) -> IResult<&str, String> {
    map(identifier, String::from).parse(input)
}

pub(crate) fn parse_value(input: &str) -> IResult<&str, Value> {
    // a single value runs up to a comma, a semicolon or the end of the line
    let value_parser = take_while1(|c: char| !matches!(c, ',' | ';' | '\n' | '\r'));
    let mut value_parser = map_res(value_parser, |s: &str| -> Result<Value, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty value".to_string());
        }
        // Try parsing as different types in order
        if let Ok(val) = s.parse::<i64>() {
            Ok(Value::Integer(val))
        } else if let Ok(val) = s.parse::<f64>() {
            Ok(Value::Float(val))
        } else if let Ok(val) = s.parse::<bool>() {
            Ok(Value::Boolean(val))
        } else {
            Ok(Value::String(s.to_string()))
        }
    });
    value_parser.parse(input)
}

pub(crate) fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    // only spaces: an empty list must not swallow the next line
    let (input, _) = space0(input)?;
    let separator_coma = delimited(space0, tag(","), space0);
    separated_list0(separator_coma, parse_value).parse(input)
}

/// Parses a key-value pair where value is a list
pub(crate) fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    separated_pair(parse_key, colon_separator, parse_value_list).parse(input)
}

/// Parses a section with a title and multiple key-value pairs
pub(crate) fn parse_section(input: &str) -> IResult<&str, (String, HashMap<String, Vec<Value>>)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let pair_terminator = (space0, opt(tag(";")), multispace0);
    let mut parser = many1(terminated(
        delimited(space0, parse_key_value_pair, space0),
        pair_terminator,
    ));
    let (input, pairs) = parser.parse(input)?;

    let section_map = pairs.into_iter().collect();
    Ok((input, (title, section_map)))
}

/// Filters out comment lines (starting with //, #, %, or ;) and empty lines
pub(crate) fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the entire document into a HashMap
pub fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let mut parser = many1(delimited(multispace0, parse_section, multispace0));
    let (input, sections) = parser.parse(input)?;

    let mut result = HashMap::new();
    for (title, section_map) in sections.into_iter() {
        let title_map: &mut SectionMap = result.entry(title).or_default();
        for (key, values) in section_map {
            title_map.insert(key, Some(values));
        }
    }

    Ok((input, result))
}

fn parse_complete_document(input: &str) -> Result<DocumentMap, String> {
    let filtered = filter_comments(input);
    match parse_document(&filtered) {
        Ok((remaining, parsed)) => {
            if !remaining.trim().is_empty() {
                return Err(format!(
                    "Failed to parse entire document. Remaining: '{}'",
                    remaining
                ));
            }
            Ok(parsed)
        }
        Err(e) => Err(format!("Parsing error: {:?}", e)),
    }
}

/// Parses a document and merges with a template HashMap, ensuring all expected keys exist
pub(crate) fn parse_document_with_template(
    input: &str,
    template: &DocumentMap,
) -> Result<DocumentMap, String> {
    let mut parsed = parse_complete_document(input)?;

    for (title, section_map) in parsed.iter() {
        let Some(expected_keys) = template.get(title) else {
            return Err(format!("Unknown section '{}'", title));
        };
        if let Some(key) = section_map.keys().find(|k| !expected_keys.contains_key(*k)) {
            return Err(format!("Unknown key '{}' in section '{}'", key, title));
        }
    }
    // Ensure all expected titles and keys exist
    for (title, keys_map) in template {
        let section_map = parsed.entry(title.clone()).or_default();
        for key in keys_map.keys() {
            section_map.entry(key.clone()).or_insert(None);
        }
    }
    Ok(parsed)
}

/// Helper function to parse a document
pub fn parse_document_as(input: &str, template: Option<DocumentMap>) -> Result<DocumentMap, String> {
    match template {
        Some(template) => parse_document_with_template(input, &template),
        None => parse_complete_document(input),
    }
}

/// read a task file and parse it against a template
pub fn parse_file_as(path: &Path, template: Option<DocumentMap>) -> Result<DocumentMap, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("cannot read task file {}: {}", path.display(), e))?;
    parse_document_as(&contents, template)
}

/// Build a template from titles and their keys
pub fn template_from(sections: &[(&str, &[&str])]) -> DocumentMap {
    sections
        .iter()
        .map(|(title, keys)| {
            let section: SectionMap = keys.iter().map(|k| (k.to_string(), None)).collect();
            (title.to_string(), section)
        })
        .collect()
}
