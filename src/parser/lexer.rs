//! Logos-based lexer for a single physical line of script text
//!
//! The lexer only distinguishes what the line normalizer needs to know:
//! where string literals and comments start and end, and where statement
//! separators sit. Keywords are left to the construct recognizer.

use logos::Logos;
use text_size::TextSize;

/// Coarse token classification for one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Ident,
    Number,
    /// A complete `"..."` literal, `""` being an escaped quote
    String,
    /// A quote with no closing partner on this line
    UnterminatedString,
    /// `'` through end of line
    Comment,
    Colon,
    Punct,
    /// Anything logos could not classify (non-ASCII text, stray bytes)
    Error,
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Byte length of the token text.
    pub fn len(&self) -> TextSize {
        TextSize::of(self.text)
    }

    /// Whether this token could start a `Rem` comment.
    pub fn is_rem(&self) -> bool {
        self.kind == TokenKind::Ident && self.text.eq_ignore_ascii_case("rem")
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire line into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// The closing quote is optional so an unterminated literal still lexes
    /// as one token; the flag records whether it was closed.
    #[regex(r#""([^"\r\n]|"")*"?"#, |lex| is_terminated(lex.slice()))]
    String(bool),

    #[regex(r"'[^\r\n]*")]
    Comment,

    #[token(":")]
    Colon,

    #[regex(r#"[^ \t\r\nA-Za-z0-9_"':]"#)]
    Punct,
}

/// Whether a string token ends in a closing quote rather than an escaped one.
///
/// After the opening quote, a trailing run of quotes of odd length ends
/// with the closing quote, `""` pairs being escapes.
fn is_terminated(slice: &str) -> bool {
    let body = &slice[1..];
    let trailing = body.len() - body.trim_end_matches('"').len();
    trailing % 2 == 1
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => TokenKind::Whitespace,
            LogosToken::Ident => TokenKind::Ident,
            LogosToken::Number => TokenKind::Number,
            LogosToken::String(true) => TokenKind::String,
            LogosToken::String(false) => TokenKind::UnterminatedString,
            LogosToken::Comment => TokenKind::Comment,
            LogosToken::Colon => TokenKind::Colon,
            LogosToken::Punct => TokenKind::Punct,
        }
    }
}
