//! Hand-written lexer for the pseudo-code in generated fixtures.
//!
//! The language is tiny:
//! ```text
//! a = 12
//! msg = "hi" * 3
//! result = a + ( b / 2 )
//! // comment until end of line
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Integer,
    Quote,
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    LBracket,
    RBracket,
}

/// Byte range `start..end` of a token in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span(pub usize, pub usize);

impl Span {
    pub fn width(self) -> usize {
        self.1 - self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unclosed string starting at byte {offset}")]
    UnclosedQuote { offset: usize },

    #[error("unexpected character {found:?} at byte {offset}")]
    UnexpectedChar { offset: usize, found: char },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnclosedQuote { offset } | LexError::UnexpectedChar { offset, .. } => *offset,
        }
    }
}

pub struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
        }
    }

    pub fn lex(&self) -> Result<Vec<Token<'a>>, LexError> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < self.bytes.len() {
            match self.bytes[pos] {
                b' ' | b'\n' | b'\t' | b'\r' => pos += 1,
                b'/' if self.bytes.get(pos + 1) == Some(&b'/') => {
                    pos = self.line_end(pos);
                }
                b'"' => {
                    let end = self.quote_end(pos)?;
                    tokens.push(self.token(TokenKind::Quote, pos, end));
                    pos = end;
                }
                c if c.is_ascii_alphabetic() => {
                    let end = self.scan_while(pos, |b| b.is_ascii_alphabetic());
                    tokens.push(self.token(TokenKind::Ident, pos, end));
                    pos = end;
                }
                c if c.is_ascii_digit() => {
                    let end = self.scan_while(pos, |b| b.is_ascii_digit());
                    tokens.push(self.token(TokenKind::Integer, pos, end));
                    pos = end;
                }
                c => match operator(c) {
                    Some(kind) => {
                        tokens.push(self.token(kind, pos, pos + 1));
                        pos += 1;
                    }
                    None => {
                        let found = self.src[pos..].chars().next().unwrap_or('\u{fffd}');
                        return Err(LexError::UnexpectedChar { offset: pos, found });
                    }
                },
            }
        }

        Ok(tokens)
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> Token<'a> {
        Token {
            kind,
            text: &self.src[start..end],
            span: Span(start, end),
        }
    }

    fn scan_while(&self, start: usize, accept: impl Fn(u8) -> bool) -> usize {
        let mut end = start;
        while end < self.bytes.len() && accept(self.bytes[end]) {
            end += 1;
        }
        end
    }

    fn line_end(&self, start: usize) -> usize {
        self.scan_while(start, |b| b != b'\n')
    }

    /// Offset just past the closing quote. Strings never span lines.
    fn quote_end(&self, start: usize) -> Result<usize, LexError> {
        let mut pos = start + 1;
        while pos < self.bytes.len() {
            match self.bytes[pos] {
                b'"' => return Ok(pos + 1),
                b'\n' => break,
                _ => pos += 1,
            }
        }
        Err(LexError::UnclosedQuote { offset: start })
    }
}

fn operator(c: u8) -> Option<TokenKind> {
    match c {
        b'+' => Some(TokenKind::Plus),
        b'-' => Some(TokenKind::Minus),
        b'*' => Some(TokenKind::Multiply),
        b'/' => Some(TokenKind::Divide),
        b'=' => Some(TokenKind::Equal),
        b'(' => Some(TokenKind::LBracket),
        b')' => Some(TokenKind::RBracket),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::line::{Template, TemplateKind};

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src)
            .lex()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn simple_src() {
        let src = "person = (head + body) * \"mind\" + 42";
        let tokens = Lexer::new(src).lex().unwrap();

        let expected = [
            (TokenKind::Ident, "person", Span(0, 6)),
            (TokenKind::Equal, "=", Span(7, 8)),
            (TokenKind::LBracket, "(", Span(9, 10)),
            (TokenKind::Ident, "head", Span(10, 14)),
            (TokenKind::Plus, "+", Span(15, 16)),
            (TokenKind::Ident, "body", Span(17, 21)),
            (TokenKind::RBracket, ")", Span(21, 22)),
            (TokenKind::Multiply, "*", Span(23, 24)),
            (TokenKind::Quote, "\"mind\"", Span(25, 31)),
            (TokenKind::Plus, "+", Span(32, 33)),
            (TokenKind::Integer, "42", Span(34, 36)),
        ];
        let actual: Vec<_> = tokens.iter().map(|t| (t.kind, t.text, t.span)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn comments_are_skipped_up_to_newline() {
        assert_eq!(
            kinds("// a = \"b\n x - 1"),
            vec![TokenKind::Ident, TokenKind::Minus, TokenKind::Integer]
        );
        assert_eq!(kinds("a / b"), vec![TokenKind::Ident, TokenKind::Divide, TokenKind::Ident]);
    }

    #[test]
    fn quote_must_close_on_its_line() {
        assert_eq!(
            Lexer::new("a = \"open\nb = 1").lex(),
            Err(LexError::UnclosedQuote { offset: 4 })
        );
        assert_eq!(
            Lexer::new("a = \"open").lex(),
            Err(LexError::UnclosedQuote { offset: 4 })
        );
    }

    #[test]
    fn unknown_character_is_reported() {
        assert_eq!(
            Lexer::new("a = 1 ; b").lex(),
            Err(LexError::UnexpectedChar { offset: 6, found: ';' })
        );
    }

    #[test]
    fn generated_templates_have_expected_token_sequence() {
        use TokenKind::*;

        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..2_000 {
            let template = Template::random(&mut rng);
            let line = template.to_string();
            let expected = match template.kind() {
                TemplateKind::Arithmetic => vec![
                    Ident, Equal, Ident, Plus, Quote, Multiply, LBracket, Integer, Divide,
                    Integer, RBracket,
                ],
                TemplateKind::Assign => vec![Ident, Equal, Integer],
                TemplateKind::Comment => vec![],
                TemplateKind::Repeat => vec![Ident, Equal, Quote, Multiply, Integer],
            };

            assert_eq!(kinds(&line), expected, "line: {line:?}");
        }
    }
}
