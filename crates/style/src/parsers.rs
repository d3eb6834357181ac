//! Low-level nom parser functions for the style and transform grammars.
//!
//! This module provides the composable pieces; the public entry points on
//! [`crate::Style`] and [`crate::TransformList`] run them against a full
//! input and convert leftovers into the value types' own error kinds.

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::map,
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, separated_pair, terminated},
};

// --- Helper Parsers ---

fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}

fn ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_').parse(input)
}

fn argument_separator(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_whitespace() || c == ',').parse(input)
}

// --- Style Declarations ---

/// Parses one `property: value` declaration. The value is raw text up to
/// the declaration separator, surrounding whitespace trimmed.
fn declaration(input: &str) -> IResult<&str, (String, String)> {
    map(
        separated_pair(
            ws(ident),
            char(':'),
            take_while1(|c: char| c != ';'),
        ),
        |(property, value): (&str, &str)| (property.to_string(), value.trim().to_string()),
    )
    .parse(input)
}

/// Runs the declaration parser over a full input slice.
pub fn run_declaration(input: &str) -> Result<(String, String), String> {
    match declaration(input) {
        Ok(("", (property, value))) => {
            if value.is_empty() {
                Err(format!("declaration '{}' has an empty value", input.trim()))
            } else {
                Ok((property, value))
            }
        }
        Ok((remainder, _)) => Err(format!("unexpected trailing input '{remainder}'")),
        Err(e) => Err(format!("invalid declaration '{}': {e}", input.trim())),
    }
}

// --- Transform Functions ---

/// Parses one `function(arg, ...)` application. Argument arity is not
/// checked here; the list types stay permissive round-trippable values.
fn transform_function(input: &str) -> IResult<&str, (String, Vec<f64>)> {
    map(
        separated_pair(
            ws(ident),
            char('('),
            terminated(
                ws(separated_list0(argument_separator, double)),
                char(')'),
            ),
        ),
        |(name, arguments): (&str, Vec<f64>)| (name.to_string(), arguments),
    )
    .parse(input)
}

fn transform_functions(input: &str) -> IResult<&str, Vec<(String, Vec<f64>)>> {
    terminated(
        separated_list0(argument_separator, transform_function),
        take_while(|c: char| c.is_ascii_whitespace() || c == ','),
    )
    .parse(input)
}

/// Runs the transform-list parser over a full input slice.
pub fn run_transform_list(input: &str) -> Result<Vec<(String, Vec<f64>)>, String> {
    match transform_functions(input.trim()) {
        Ok(("", functions)) => Ok(functions),
        Ok((remainder, _)) => Err(format!("unexpected trailing input '{remainder}'")),
        Err(e) => Err(format!("invalid transform list: {e}")),
    }
}
