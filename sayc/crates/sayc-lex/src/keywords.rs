//! Fixed spellings: keywords, type names, operators and punctuation.
//!
//! [`KEYWORDS`] is the single source of truth for every lexeme that maps
//! directly to a kind. Lookups go through a hash index built on first use.
//! The words that only make sense as the first word of a longer operator
//! (`repeat`, `is`, `not`, `less`, `more`) are deliberately absent and are
//! described by [`MultiwordRoot`] instead.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use crate::token::TokenKind;

/// Every single-lexeme spelling and the kind it produces.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    // keywords
    ("create", TokenKind::Create),
    ("as", TokenKind::As),
    ("start", TokenKind::StartScope),
    ("end", TokenKind::EndScope),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("stop", TokenKind::Stop),
    ("skip", TokenKind::Skip),
    ("say", TokenKind::Say),
    ("input", TokenKind::Input),
    ("with", TokenKind::With),
    ("return", TokenKind::Return),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    // type names
    ("int", TokenKind::Int),
    ("float", TokenKind::Float),
    ("char", TokenKind::Char),
    ("list", TokenKind::List),
    ("string", TokenKind::String),
    // operators
    ("=", TokenKind::Assign),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Mult),
    ("/", TokenKind::Divide),
    ("%", TokenKind::Modulo),
    ("++", TokenKind::Increment),
    ("--", TokenKind::Decrement),
    ("+=", TokenKind::AddTo),
    ("-=", TokenKind::SubTo),
    ("*=", TokenKind::MultTo),
    ("/=", TokenKind::DivideTo),
    ("%=", TokenKind::ModTo),
    // punctuation
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
    (",", TokenKind::Terminator),
    (":", TokenKind::Colon),
];

static_assertions::const_assert_eq!(KEYWORDS.len(), 41);

/// Canonical spellings of the kinds produced by multiword resolution.
pub const MULTIWORD_SPELLINGS: &[(&str, TokenKind)] = &[
    ("repeat", TokenKind::Repeat),
    ("repeat on", TokenKind::RepeatOn),
    ("is", TokenKind::Is),
    ("is not", TokenKind::IsNot),
    ("more than", TokenKind::MoreThan),
    ("less than", TokenKind::LessThan),
    ("not more than", TokenKind::NotMoreThan),
    ("not less than", TokenKind::NotLessThan),
];

static INDEX: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();

fn index() -> &'static FxHashMap<&'static str, TokenKind> {
    INDEX.get_or_init(|| KEYWORDS.iter().copied().collect())
}

/// Looks up an exact, case-sensitive spelling in [`KEYWORDS`].
///
/// ```
/// use sayc_lex::keywords::lookup;
/// use sayc_lex::TokenKind;
///
/// assert_eq!(lookup("start"), Some(TokenKind::StartScope));
/// assert_eq!(lookup("%="), Some(TokenKind::ModTo));
/// assert_eq!(lookup("Start"), None);
/// assert_eq!(lookup("repeat"), None);
/// ```
pub fn lookup(text: &str) -> Option<TokenKind> {
    index().get(text).copied()
}

/// Returns the fixed spelling of `kind`, if it has one.
pub fn spelling(kind: TokenKind) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .chain(MULTIWORD_SPELLINGS)
        .find(|(_, k)| *k == kind)
        .map(|(text, _)| *text)
}

/// First word of a multiword operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MultiwordRoot {
    /// `repeat`, optionally followed by `on`
    Repeat,
    /// `is`, optionally followed by `not`
    Is,
    /// `not`, which must be followed by `less than` or `more than`
    Not,
    /// `less`, which must be followed by `than`
    Less,
    /// `more`, which must be followed by `than`
    More,
}

impl MultiwordRoot {
    /// Recognizes a root word.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "repeat" => Some(Self::Repeat),
            "is" => Some(Self::Is),
            "not" => Some(Self::Not),
            "less" => Some(Self::Less),
            "more" => Some(Self::More),
            _ => None,
        }
    }

    /// The root word as written in source.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repeat => "repeat",
            Self::Is => "is",
            Self::Not => "not",
            Self::Less => "less",
            Self::More => "more",
        }
    }

    /// Returns true if the root is a complete token on its own.
    pub const fn stands_alone(self) -> bool {
        matches!(self, Self::Repeat | Self::Is)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spellings_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (text, _) in KEYWORDS {
            assert!(seen.insert(*text), "duplicate spelling {text}");
        }
        assert_eq!(index().len(), KEYWORDS.len());
    }

    #[test]
    fn test_roots_not_in_table() {
        for root in ["repeat", "is", "not", "less", "more", "on", "than"] {
            assert_eq!(lookup(root), None, "{root} should not be a table entry");
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("say"), Some(TokenKind::Say));
        assert_eq!(lookup("SAY"), None);
        assert_eq!(lookup("Say"), None);
    }

    #[test]
    fn test_spelling_covers_multiword() {
        assert_eq!(spelling(TokenKind::RepeatOn), Some("repeat on"));
        assert_eq!(spelling(TokenKind::NotMoreThan), Some("not more than"));
        assert_eq!(spelling(TokenKind::Terminator), Some(","));
        assert_eq!(spelling(TokenKind::StringLiteral), None);
        assert_eq!(spelling(TokenKind::BooleanLiteral), None);
    }

    #[test]
    fn test_table_entries_round_trip() {
        for (text, kind) in KEYWORDS {
            assert_eq!(lookup(text), Some(*kind));
            assert_eq!(spelling(*kind), Some(*text));
        }
    }

    #[test]
    fn test_roots() {
        assert_eq!(MultiwordRoot::from_word("not"), Some(MultiwordRoot::Not));
        assert_eq!(MultiwordRoot::from_word("than"), None);
        assert!(MultiwordRoot::Repeat.stands_alone());
        assert!(!MultiwordRoot::Less.stands_alone());
        assert_eq!(MultiwordRoot::More.as_str(), "more");
    }
}
