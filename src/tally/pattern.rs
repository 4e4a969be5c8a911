use nom::{
    branch::alt,
    character::complete::{alpha0, anychar, char, none_of},
    combinator::map,
    multi::many0,
    sequence::{delimited, preceded, tuple},
    IResult,
};

type Result<T> = std::result::Result<T, PatternError>;

/// Malformed lookup pattern: unterminated `/…/` matcher or an unknown flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Char(char),
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    tokens: Vec<Token>,
    case_insensitive: bool,
}

/// Lookup pattern for element text. A plain string is matched exactly; a
/// slash-delimited matcher (`/count is ./`, `/Vite \+ React/i`) is matched as
/// a substring search, with `\x` escaping any character, `.` matching any
/// single character and the `i` flag folding case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPattern {
    Literal(String),
    Matcher(Matcher),
}

fn parse_escaped(input: &str) -> IResult<&str, Token> {
    map(preceded(char('\\'), anychar), Token::Char)(input)
}

fn parse_wildcard(input: &str) -> IResult<&str, Token> {
    map(char('.'), |_| Token::Any)(input)
}

fn parse_plain(input: &str) -> IResult<&str, Token> {
    map(none_of("/\\"), Token::Char)(input)
}

fn parse_token(input: &str) -> IResult<&str, Token> {
    alt((parse_escaped, parse_wildcard, parse_plain))(input)
}

fn parse_matcher(input: &str) -> IResult<&str, (Vec<Token>, &str)> {
    tuple((delimited(char('/'), many0(parse_token), char('/')), alpha0))(input)
}

pub fn parse(input: &str) -> Result<TextPattern> {
    if !input.starts_with('/') {
        return Ok(TextPattern::Literal(input.to_string()));
    }
    let Ok(("", (tokens, flags))) = parse_matcher(input) else {
        return Err(PatternError);
    };
    let mut case_insensitive = false;
    for flag in flags.chars() {
        match flag {
            'i' => case_insensitive = true,
            _ => return Err(PatternError),
        }
    }
    Ok(TextPattern::Matcher(Matcher {
        tokens,
        case_insensitive,
    }))
}

impl TextPattern {
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            TextPattern::Literal(expected) => text == expected,
            TextPattern::Matcher(matcher) => matcher.is_match(text),
        }
    }
}

impl Matcher {
    fn is_match(&self, text: &str) -> bool {
        let hay: Vec<char> = if self.case_insensitive {
            text.chars().flat_map(char::to_lowercase).collect()
        } else {
            text.chars().collect()
        };
        let needle: Vec<Token> = self
            .tokens
            .iter()
            .flat_map(|token| -> Vec<Token> {
                match token {
                    Token::Any => vec![Token::Any],
                    Token::Char(c) if self.case_insensitive => {
                        c.to_lowercase().map(Token::Char).collect()
                    }
                    Token::Char(c) => vec![Token::Char(*c)],
                }
            })
            .collect();
        if needle.is_empty() {
            return true;
        }
        if needle.len() > hay.len() {
            return false;
        }
        (0..=hay.len() - needle.len()).any(|start| {
            needle.iter().enumerate().all(|(i, token)| match token {
                Token::Any => true,
                Token::Char(c) => hay[start + i] == *c,
            })
        })
    }
}
