//! Text representation of colors, `(c0, c1, c2, c3)`.
//!
//! Any format spec given to `format!` is applied to each of the four
//! components, so `format!("{:.3}", color)` prints every component with three
//! decimals.

use std::{
    fmt::{self, Write},
    str::FromStr,
};

use crate::{error::ParseError, Color, ColorF, Component, Oklab};

fn write_components<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    components: [T; 4],
) -> fmt::Result {
    f.write_char('(')?;
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(component, f)?;
    }
    f.write_char(')')
}

fn parse_components<T: FromStr>(s: &str) -> Result<[T; 4], ParseError> {
    let result = split_components(s);
    if let Err(ref err) = result {
        tracing::debug!(text = s, error = %err, "rejected color text");
    }
    result
}

fn split_components<T: FromStr>(s: &str) -> Result<[T; 4], ParseError> {
    let inner = s
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ParseError::MissingParentheses)?;

    let parts = inner.split(',').map(str::trim).collect::<Vec<_>>();
    let &[c0, c1, c2, c3] = parts.as_slice() else {
        return Err(ParseError::ComponentCount(parts.len()));
    };

    let parse = |index: usize, text: &str| {
        text.parse::<T>().map_err(|_| ParseError::InvalidComponent {
            index,
            text: text.to_string(),
        })
    };

    Ok([parse(0, c0)?, parse(1, c1)?, parse(2, c2)?, parse(3, c3)?])
}

impl fmt::Display for Oklab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.to_array())
    }
}

impl FromStr for Oklab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<Component>(s).map(Self::from)
    }
}

impl fmt::Display for ColorF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.to_array())
    }
}

impl FromStr for ColorF {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<Component>(s).map(Self::from)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.to_array())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<u8>(s).map(Self::from)
    }
}
