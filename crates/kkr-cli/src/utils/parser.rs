use kkredit::core::models::position::Coordinates;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid assignment '{0}'. Expected 'KEY=LABEL' (e.g., 'Ba_2t_0=Fe_new').")]
    MissingEquals(String),

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },

    #[error("Invalid position index '{0}'. Expected a non-negative integer.")]
    InvalidIndex(String),

    #[error("Invalid site '{0}'. Expected three comma-separated coordinates (e.g., '0.5a,0.5b,0.5c').")]
    InvalidSite(String),
}

fn split_assignment<'a>(input: &'a str, key_name: &'static str) -> Result<(&'a str, &'a str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::MissingEquals(input.to_string()))?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: key_name,
            input: input.to_string(),
        });
    }
    if value.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "label",
            input: input.to_string(),
        });
    }
    Ok((key, value))
}

/// Parses `OLD=NEW`.
pub fn parse_relabel(input: &str) -> Result<(String, String), ParseError> {
    let (old, new) = split_assignment(input, "old label")?;
    Ok((old.to_string(), new.to_string()))
}

pub fn parse_index(input: &str) -> Result<usize, ParseError> {
    input
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidIndex(input.to_string()))
}

/// Parses `INDEX=LABEL`.
pub fn parse_index_assignment(input: &str) -> Result<(usize, String), ParseError> {
    let (index, label) = split_assignment(input, "index")?;
    Ok((parse_index(index)?, label.to_string()))
}

/// Parses `X,Y,Z=LABEL`. Coordinate text is kept as written.
pub fn parse_site_assignment(input: &str) -> Result<(Coordinates, String), ParseError> {
    let (site, label) = split_assignment(input, "site")?;
    let parts: Vec<&str> = site.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [x, y, z] if !x.is_empty() && !y.is_empty() && !z.is_empty() => {
            Ok((Coordinates::new(*x, *y, *z), label.to_string()))
        }
        _ => Err(ParseError::InvalidSite(site.to_string())),
    }
}
