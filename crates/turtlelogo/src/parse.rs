use nom::{
    branch::alt,
    bytes::complete::{take_till1, take_while},
    character::complete::{digit1, one_of},
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::{pair, preceded, terminated},
    IResult,
};

/// A single word of a script.
///
/// Tokens don't know where they came from: the executor addresses them only by their index in
/// the token sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_bracket(&self) -> bool {
        self.0 == "[" || self.0 == "]"
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token(s.to_owned())
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Only spaces and newlines separate words. Tabs and carriage returns are ordinary characters.
fn is_space(c: char) -> bool {
    c == ' ' || c == '\n'
}

fn is_delimiter(c: char) -> bool {
    is_space(c) || c == '[' || c == ']'
}

fn ws(input: &str) -> IResult<&str, &str> {
    take_while(is_space)(input)
}

fn bracket(input: &str) -> IResult<&str, Token> {
    map(recognize(one_of("[]")), Token::from)(input)
}

fn word(input: &str) -> IResult<&str, Token> {
    map(take_till1(is_delimiter), Token::from)(input)
}

pub fn token(input: &str) -> IResult<&str, Token> {
    alt((bracket, word))(input)
}

pub fn tokens(input: &str) -> IResult<&str, Vec<Token>> {
    preceded(ws, many0(terminated(token, ws)))(input)
}

/// Split a script into tokens.
///
/// Spaces and newlines separate words, and `[` and `]` are always tokens of their own, even when
/// nothing separates them from their neighbours. There's no quoting and no comment syntax, so
/// this never fails.
pub fn tokenize(input: &str) -> Vec<Token> {
    match tokens(input) {
        Ok((_, tokens)) => tokens,
        // `tokens` accepts every input; every char other than a space starts a bracket or a word.
        Err(_) => Vec::new(),
    }
}

/// Read a repeat count the way the old editor did: an optional sign and some digits at the
/// start of the token, ignoring whatever follows. So `4` and `4.5` both count 4, but `x` and
/// `.5` don't count at all.
pub fn count(input: &str) -> Option<i64> {
    let res: IResult<&str, &str> = recognize(pair(opt(one_of("+-")), digit1))(input);
    let (_, digits) = res.ok()?;
    digits.parse().ok()
}

/// Read a numeric command argument. Only finite numbers are accepted.
pub fn num(token: &Token) -> Option<f64> {
    token
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
}
