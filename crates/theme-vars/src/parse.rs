//! CSS color parsing.
//!
//! The normalizer never parses colors itself. It asks a [`ColorParser`] to
//! break a string into components, and treats `None` as "leave the string
//! alone". [`CssColorParser`] is the default implementation; tests and
//! callers with their own color model can supply another.
//!
//! # Recognised syntax
//!
//! | Input | Kind | Components | Alpha |
//! |-------|------|------------|-------|
//! | `#f00`, `#ff0000` | `rgb` | numbers | none |
//! | `#f008`, `#ff000080` | `rgb` | numbers | number, two decimals |
//! | `rebeccapurple` | `rgb` | `102 51 153` | `1` |
//! | `rgb(255, 0, 0)`, `hsla(0, 100%, 50%, .5)` | function name | source text | 4th value, required for `rgba`/`hsla` |
//! | `rgb(255 0 0 / 50%)`, `oklch(70% 0.1 200)` | function name | source text | after `/` |
//! | `color(display-p3 1 0 0)` | color space | source text | after `/` |
//!
//! The keyword match is case-sensitive. Other keywords (`red`,
//! `transparent`, ...) are not resolved.
//!
//! The tokenizer is `cssparser`, so comments and whitespace inside a value
//! are handled the way a browser would handle them.

use cssparser::{ParseError, Parser, ParserInput, Token};

use crate::component::Component;

/// Functions whose arguments use the comma-separated legacy syntax.
const COMMA_FUNCTIONS: &[&str] = &["rgb", "rgba", "hsl", "hsla"];

/// Functions whose arguments use the space-separated syntax.
const SPACE_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch",
];

/// A color broken into components.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedColor {
    /// Lowercase function name (`rgb`, `hsl`, ...) or `color()` space.
    pub kind: String,
    /// Color components in source order, alpha excluded.
    pub components: Vec<Component>,
    /// Alpha, when the color carries one.
    pub alpha: Option<Component>,
}

impl ParsedColor {
    /// Creates an RGB color without alpha.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            kind: "rgb".to_string(),
            components: vec![r.into(), g.into(), b.into()],
            alpha: None,
        }
    }

    /// Sets the alpha component.
    pub fn with_alpha(mut self, alpha: impl Into<Component>) -> Self {
        self.alpha = Some(alpha.into());
        self
    }
}

/// Breaks CSS color strings into components.
pub trait ColorParser: Send + Sync {
    /// Parses `color`, returning `None` when it is not a recognised color.
    fn parse(&self, color: &str) -> Option<ParsedColor>;
}

impl<F> ColorParser for F
where
    F: Fn(&str) -> Option<ParsedColor> + Send + Sync,
{
    fn parse(&self, color: &str) -> Option<ParsedColor> {
        self(color)
    }
}

/// The default [`ColorParser`], built on the `cssparser` tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorParser;

impl ColorParser for CssColorParser {
    fn parse(&self, color: &str) -> Option<ParsedColor> {
        let mut input = ParserInput::new(color);
        let mut parser = Parser::new(&mut input);
        parse_color(&mut parser).ok()
    }
}

fn parse_color<'i>(input: &mut Parser<'i, '_>) -> Result<ParsedColor, ParseError<'i, ()>> {
    let token = input.next()?.clone();

    let color = match token {
        Token::Hash(ref value) | Token::IDHash(ref value) => parse_hex(value),
        Token::Ident(ref name) if &**name == "rebeccapurple" => {
            Some(ParsedColor::rgb(102, 51, 153).with_alpha(1u8))
        }
        Token::Function(ref name) => {
            let name = name.to_ascii_lowercase();
            let args = input.parse_nested_block(|block| parse_arguments(block))?;
            parse_function(&name, &args)
        }
        _ => None,
    };

    let color = color.ok_or_else(|| input.new_custom_error::<(), ()>(()))?;
    input.expect_exhausted()?;
    Ok(color)
}

/// Parses the body of a hash token (without the `#`).
fn parse_hex(hex: &str) -> Option<ParsedColor> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let digits: Vec<u8> = match hex.len() {
        // #rgb / #rgba: each digit doubled
        3 | 4 => hex
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|d| (d as u8) * 17)
            .collect(),
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
            .collect::<Result<_, _>>()
            .ok()?,
        _ => return None,
    };

    let color = ParsedColor::rgb(digits[0], digits[1], digits[2]);
    Some(match digits.get(3) {
        Some(&a) => color.with_alpha((f64::from(a) / 255.0 * 100.0).round() / 100.0),
        None => color,
    })
}

/// A lexical item inside a color function.
#[derive(Debug, PartialEq)]
enum Arg<'i> {
    Value(&'i str),
    Comma,
    Slash,
}

fn parse_arguments<'i>(input: &mut Parser<'i, '_>) -> Result<Vec<Arg<'i>>, ParseError<'i, ()>> {
    let mut args = Vec::new();
    loop {
        input.skip_whitespace();
        let start = input.position();
        let token = match input.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::Comma => args.push(Arg::Comma),
            Token::Delim('/') => args.push(Arg::Slash),
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                // keep nested blocks such as `calc(...)` or `var(...)` whole
                input.parse_nested_block(|nested| {
                    while nested.next().is_ok() {}
                    Ok::<_, ParseError<'i, ()>>(())
                })?;
                args.push(Arg::Value(input.slice_from(start)));
            }
            _ => args.push(Arg::Value(input.slice_from(start))),
        }
    }
    Ok(args)
}

fn parse_function(name: &str, args: &[Arg<'_>]) -> Option<ParsedColor> {
    let (kind, components, alpha) = if args.contains(&Arg::Comma) {
        parse_comma_arguments(name, args)?
    } else if name == "color" {
        let (values, alpha) = split_alpha(args)?;
        let (space, components) = values.split_first()?;
        (space.to_ascii_lowercase(), components.to_vec(), alpha)
    } else if SPACE_FUNCTIONS.contains(&name) {
        let (values, alpha) = split_alpha(args)?;
        (name.to_string(), values, alpha)
    } else {
        return None;
    };

    if components.is_empty() {
        return None;
    }
    if SPACE_FUNCTIONS.contains(&kind.as_str()) && ![1, 3].contains(&components.len()) {
        return None;
    }

    Some(ParsedColor {
        kind,
        components: components.into_iter().map(Component::from).collect(),
        alpha: alpha.map(Component::from),
    })
}

type Arguments<'i> = (String, Vec<&'i str>, Option<&'i str>);

/// `rgb(255, 0, 0)` / `rgba(255, 0, 0, 0.5)`: values alternate with commas.
fn parse_comma_arguments<'i>(name: &str, args: &[Arg<'i>]) -> Option<Arguments<'i>> {
    if !COMMA_FUNCTIONS.contains(&name) {
        return None;
    }

    let mut values = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        match (i % 2, arg) {
            (0, Arg::Value(v)) => values.push(*v),
            (1, Arg::Comma) => {}
            _ => return None,
        }
    }
    if args.len() % 2 == 0 {
        // trailing comma
        return None;
    }

    match values.len() {
        3 if matches!(name, "rgba" | "hsla") => None,
        3 => Some((name.to_string(), values, None)),
        4 => {
            let alpha = values.pop();
            Some((name.to_string(), values, alpha))
        }
        _ => None,
    }
}

/// Splits `c1 c2 c3 / alpha` into components and alpha.
fn split_alpha<'i>(args: &[Arg<'i>]) -> Option<(Vec<&'i str>, Option<&'i str>)> {
    let values = |args: &[Arg<'i>]| -> Option<Vec<&'i str>> {
        args.iter()
            .map(|arg| match arg {
                Arg::Value(v) => Some(*v),
                _ => None,
            })
            .collect()
    };

    match args.iter().position(|arg| *arg == Arg::Slash) {
        None => Some((values(args)?, None)),
        Some(slash) => match values(&args[slash + 1..])?.as_slice() {
            [alpha] => Some((values(&args[..slash])?, Some(*alpha))),
            _ => None,
        },
    }
}
