//! Argument-list tokens and tokenizer.
//!
//! The resolver consumes an already-delimited argument list: an ordered
//! sequence of argument token groups separated by top-level commas. This
//! module turns a single argument-list string into that sequence. It is
//! input plumbing for callers holding the list as text (the CLI does); it
//! does not parse arbitrary source files.

use logos::Logos;
use thiserror::Error;

use crate::diagnostics::Diagnostic;
use crate::span::Span;

/// Token kinds recognized inside an argument list.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// An identifier or keyword-shaped word.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    /// An integer or float literal.
    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?")]
    Number,
    /// A string literal. May contain commas; they never split arguments.
    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,
    /// A character literal.
    #[regex(r"'([^'\\]|\\.)'")]
    Char,
    /// Opening parenthesis `(`.
    #[token("(")]
    OpenParen,
    /// Closing parenthesis `)`.
    #[token(")")]
    CloseParen,
    /// Opening bracket `[`.
    #[token("[")]
    OpenBracket,
    /// Closing bracket `]`.
    #[token("]")]
    CloseBracket,
    /// Opening brace `{`.
    #[token("{")]
    OpenBrace,
    /// Closing brace `}`.
    #[token("}")]
    CloseBrace,
    /// Comma `,`. At nesting depth zero this separates arguments.
    #[token(",")]
    Comma,
    /// A run of operator characters (`+`, `-`, `::`, `->`, ...).
    #[regex(r"[-+*/%&|^!<>=.:;@#?~]+")]
    Operator,
}

/// A token in an argument list.
#[derive(Debug, Clone)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The token text.
    pub text: String,
    /// Location in the input string.
    pub span: Span,
}

/// One argument of a call: a non-empty run of tokens between top-level
/// commas.
#[derive(Debug, Clone)]
pub struct Argument {
    /// The tokens making up this argument.
    pub tokens: Vec<Token>,
    /// The argument text, exactly as written (outer whitespace trimmed).
    pub text: String,
    /// Location in the input string.
    pub span: Span,
}

/// Errors produced while tokenizing an argument list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unrecognized character in argument list")]
    InvalidToken { span: Span },

    #[error("unterminated `{open}` group")]
    UnterminatedGroup { open: char, span: Span },

    #[error("unmatched closing `{close}`")]
    UnmatchedClose { close: char, span: Span },

    #[error("mismatched delimiter: expected `{expected}`, found `{found}`")]
    MismatchedClose {
        expected: char,
        found: char,
        span: Span,
    },

    #[error("empty argument")]
    EmptyArgument { span: Span },
}

impl TokenizeError {
    /// The location the error points at.
    pub fn span(&self) -> Span {
        match self {
            TokenizeError::InvalidToken { span }
            | TokenizeError::UnterminatedGroup { span, .. }
            | TokenizeError::UnmatchedClose { span, .. }
            | TokenizeError::MismatchedClose { span, .. }
            | TokenizeError::EmptyArgument { span } => *span,
        }
    }

    /// Converts the error into a reportable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        let code = match self {
            TokenizeError::InvalidToken { .. } => "invalid-token",
            TokenizeError::UnterminatedGroup { .. } => "unterminated-group",
            TokenizeError::UnmatchedClose { .. } => "unmatched-delimiter",
            TokenizeError::MismatchedClose { .. } => "mismatched-delimiter",
            TokenizeError::EmptyArgument { .. } => "empty-argument",
        };
        Diagnostic::error(self.to_string(), self.span()).with_code(code)
    }
}

/// Tokenizes an argument-list string.
pub fn tokenize(src: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut lexer = TokenKind::lexer(src);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                text: lexer.slice().to_string(),
                span,
            }),
            Err(()) => return Err(TokenizeError::InvalidToken { span }),
        }
    }

    Ok(tokens)
}

/// Splits an argument-list string into arguments at top-level commas.
///
/// Commas nested inside `()`, `[]`, or `{}` groups, and commas inside
/// string literals, do not split. An all-whitespace input is the
/// zero-argument list.
pub fn split_arguments(src: &str) -> Result<Vec<Argument>, TokenizeError> {
    let tokens = tokenize(src)?;

    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    let mut arguments = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut open_stack: Vec<(char, Span)> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::OpenParen | TokenKind::OpenBracket | TokenKind::OpenBrace => {
                let open = opening_char(token.kind);
                open_stack.push((open, token.span));
                current.push(token);
            }
            TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseBrace => {
                let found = closing_char(token.kind);
                match open_stack.pop() {
                    None => {
                        return Err(TokenizeError::UnmatchedClose {
                            close: found,
                            span: token.span,
                        });
                    }
                    Some((open, _)) => {
                        let expected = matching_close(open);
                        if expected != found {
                            return Err(TokenizeError::MismatchedClose {
                                expected,
                                found,
                                span: token.span,
                            });
                        }
                    }
                }
                current.push(token);
            }
            TokenKind::Comma if open_stack.is_empty() => {
                arguments.push(finish_argument(src, &mut current, token.span)?);
            }
            _ => current.push(token),
        }
    }

    if let Some((open, span)) = open_stack.pop() {
        return Err(TokenizeError::UnterminatedGroup { open, span });
    }

    // The tokens after the last comma form the final argument.
    let end = Span::new(src.len(), src.len());
    arguments.push(finish_argument(src, &mut current, end)?);

    Ok(arguments)
}

/// Closes out the argument accumulated in `current`.
fn finish_argument(
    src: &str,
    current: &mut Vec<Token>,
    boundary: Span,
) -> Result<Argument, TokenizeError> {
    if current.is_empty() {
        return Err(TokenizeError::EmptyArgument { span: boundary });
    }

    let tokens = std::mem::take(current);
    let span = tokens
        .first()
        .map(|t| t.span)
        .unwrap_or(boundary)
        .to(tokens.last().map(|t| t.span).unwrap_or(boundary));
    let text = src[span.range()].trim().to_string();

    Ok(Argument { tokens, text, span })
}

fn opening_char(kind: TokenKind) -> char {
    match kind {
        TokenKind::OpenParen => '(',
        TokenKind::OpenBracket => '[',
        TokenKind::OpenBrace => '{',
        _ => unreachable!("not an opening delimiter"),
    }
}

fn closing_char(kind: TokenKind) -> char {
    match kind {
        TokenKind::CloseParen => ')',
        TokenKind::CloseBracket => ']',
        TokenKind::CloseBrace => '}',
        _ => unreachable!("not a closing delimiter"),
    }
}

fn matching_close(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => unreachable!("not an opening delimiter"),
    }
}
