//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the text it was built from, the
//! character count of that text, and the line the lexeme started on.

use serde::Serialize;
use std::fmt;

use crate::keywords;

/// The closed set of token kinds produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // ===== Keywords =====
    /// `create`
    Create,
    /// `as`
    As,
    /// `start`
    StartScope,
    /// `end`
    EndScope,
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `repeat`
    Repeat,
    /// `repeat on`
    RepeatOn,
    /// `stop`
    Stop,
    /// `skip`
    Skip,
    /// `say`
    Say,
    /// `input`
    Input,
    /// `with`
    With,
    /// `return`
    Return,
    /// `true`
    True,
    /// `false`
    False,

    // ===== Type names =====
    /// `int`
    Int,
    /// `float`
    Float,
    /// `char`
    Char,
    /// `list`
    List,
    /// `string`
    String,

    // ===== Comparison operators =====
    /// `is`
    Is,
    /// `is not`
    IsNot,
    /// `more than`
    MoreThan,
    /// `less than`
    LessThan,
    /// `not more than`
    NotMoreThan,
    /// `not less than`
    NotLessThan,

    // ===== Logical operators =====
    /// `and`
    And,
    /// `or`
    Or,

    // ===== Arithmetic operators =====
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `+=`
    AddTo,
    /// `-=`
    SubTo,
    /// `*=`
    MultTo,
    /// `/=`
    DivideTo,
    /// `%=`
    ModTo,

    // ===== Assignment =====
    /// `=`
    Assign,

    // ===== Punctuation =====
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `,` - ends a statement
    Terminator,
    /// `:`
    Colon,

    // ===== Literals =====
    /// Digits without a decimal point
    IntegerLiteral,
    /// Digits with exactly one decimal point
    FloatLiteral,
    /// Quoted literal with zero or one character
    CharLiteral,
    /// Quoted literal with two or more characters
    StringLiteral,
    /// Boolean constant; the lexer itself spells these as [`TokenKind::True`]
    /// and [`TokenKind::False`]
    BooleanLiteral,

    // ===== Other =====
    /// Variable or function name
    Identifier,
    /// End of input
    Eof,
    /// Lexeme that matches nothing; only ever carried by errors
    Unknown,
}

impl TokenKind {
    /// Upper-case name used in token dumps, e.g. `NOT_LESS_THAN`.
    pub const fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Create => "CREATE",
            As => "AS",
            StartScope => "START_SCOPE",
            EndScope => "END_SCOPE",
            If => "IF",
            Else => "ELSE",
            While => "WHILE",
            Repeat => "REPEAT",
            RepeatOn => "REPEAT_ON",
            Stop => "STOP",
            Skip => "SKIP",
            Say => "SAY",
            Input => "INPUT",
            With => "WITH",
            Return => "RETURN",
            True => "TRUE",
            False => "FALSE",
            Int => "INT",
            Float => "FLOAT",
            Char => "CHAR",
            List => "LIST",
            String => "STRING",
            Is => "IS",
            IsNot => "IS_NOT",
            MoreThan => "MORE_THAN",
            LessThan => "LESS_THAN",
            NotMoreThan => "NOT_MORE_THAN",
            NotLessThan => "NOT_LESS_THAN",
            And => "AND",
            Or => "OR",
            Plus => "PLUS",
            Minus => "MINUS",
            Mult => "MULT",
            Divide => "DIVIDE",
            Modulo => "MODULO",
            Increment => "INCREMENT",
            Decrement => "DECREMENT",
            AddTo => "ADD_TO",
            SubTo => "SUB_TO",
            MultTo => "MULT_TO",
            DivideTo => "DIVIDE_TO",
            ModTo => "MOD_TO",
            Assign => "ASSIGN",
            OpenParen => "OPEN_PAREN",
            CloseParen => "CLOSE_PAREN",
            OpenBracket => "OPEN_BRACKET",
            CloseBracket => "CLOSE_BRACKET",
            Terminator => "TERMINATOR",
            Colon => "COLON",
            IntegerLiteral => "INTEGER_LITERAL",
            FloatLiteral => "FLOAT_LITERAL",
            CharLiteral => "CHAR_LITERAL",
            StringLiteral => "STRING_LITERAL",
            BooleanLiteral => "BOOLEAN_LITERAL",
            Identifier => "IDENTIFIER",
            Eof => "EOF",
            Unknown => "UNKNOWN",
        }
    }

    /// The fixed source spelling of this kind, if it has one.
    ///
    /// Literals, identifiers, `Eof` and `Unknown` take their text from the
    /// source and return `None`.
    ///
    /// ```
    /// use sayc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::NotLessThan.canonical(), Some("not less than"));
    /// assert_eq!(TokenKind::ModTo.canonical(), Some("%="));
    /// assert_eq!(TokenKind::Identifier.canonical(), None);
    /// ```
    pub fn canonical(self) -> Option<&'static str> {
        keywords::spelling(self)
    }

    /// Returns true for statement and control keywords, including
    /// `repeat on` and the boolean keywords.
    pub const fn is_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Create
                | As
                | StartScope
                | EndScope
                | If
                | Else
                | While
                | Repeat
                | RepeatOn
                | Stop
                | Skip
                | Say
                | Input
                | With
                | Return
                | True
                | False
        )
    }

    /// Returns true for the built-in type names.
    pub const fn is_type_name(self) -> bool {
        use TokenKind::*;
        matches!(self, Int | Float | Char | List | String)
    }

    /// Returns true for the word-spelled comparison operators.
    pub const fn is_comparison(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Is | IsNot | MoreThan | LessThan | NotMoreThan | NotLessThan
        )
    }

    /// Returns true for `and` / `or`.
    pub const fn is_logical(self) -> bool {
        matches!(self, TokenKind::And | TokenKind::Or)
    }

    /// Returns true for arithmetic operators and their compound forms.
    pub const fn is_arithmetic(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Plus | Minus
                | Mult
                | Divide
                | Modulo
                | Increment
                | Decrement
                | AddTo
                | SubTo
                | MultTo
                | DivideTo
                | ModTo
        )
    }

    /// Returns true for brackets, the statement terminator and the colon.
    pub const fn is_punctuation(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            OpenParen | CloseParen | OpenBracket | CloseBracket | Terminator | Colon
        )
    }

    /// Returns true for literal kinds whose text comes from the source.
    pub const fn is_literal(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            IntegerLiteral | FloatLiteral | CharLiteral | StringLiteral | BooleanLiteral
        )
    }

    /// Returns true for kinds that span more than one source word.
    pub const fn is_multiword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            RepeatOn | IsNot | MoreThan | LessThan | NotMoreThan | NotLessThan
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// Tokens are immutable once built. `text` holds the inner content for
/// quoted literals and the canonical spelling for everything else;
/// `length` is its character count.
///
/// ```
/// use sayc_lex::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::StringLiteral, "héllo".to_string(), 3);
/// assert_eq!(token.length(), 5);
/// assert_eq!(token.line(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: std::string::String,
    length: usize,
    line: u32,
}

impl Token {
    /// Creates a token; `length` is derived from `text`.
    pub fn new(kind: TokenKind, text: std::string::String, line: u32) -> Self {
        let length = text.chars().count();
        Self {
            kind,
            text,
            length,
            line,
        }
    }

    /// Creates the end-of-stream sentinel.
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, std::string::String::new(), line)
    }

    /// The token kind.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in [`Token::text`].
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Line on which the lexeme started (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns true for the end-of-stream sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Consumes the token and returns its text.
    pub fn into_text(self) -> std::string::String {
        self.text
    }

    /// Source spelling that re-lexes to this token.
    ///
    /// Quoted literals get their delimiters back (double quotes unless the
    /// content itself contains one).
    pub fn spelling(&self) -> std::string::String {
        match self.kind {
            TokenKind::CharLiteral | TokenKind::StringLiteral => {
                let quote = if self.text.contains('"') { '\'' } else { '"' };
                format!("{quote}{}{quote}", self.text)
            },
            _ => self.text.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` (line {})", self.kind, self.text, self.line)
    }
}

static_assertions::assert_impl_all!(Token: Send, Sync, Clone);
static_assertions::assert_impl_all!(TokenKind: Copy, Send, Sync);
