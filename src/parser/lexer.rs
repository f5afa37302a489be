//! Logos-based lexer for Go
//!
//! Fast, lossless tokenization using the logos crate. Whitespace and
//! comments are kept as trivia tokens; unknown input becomes `ERROR`.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Trivia that spans a line break (relevant for semicolon insertion).
    pub fn has_line_break(&self) -> bool {
        self.kind.is_trivia() && self.text.contains('\n')
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
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("break")]
    Break,
    #[token("case")]
    Case,
    #[token("chan")]
    Chan,
    #[token("const")]
    Const,
    #[token("continue")]
    Continue,
    #[token("default")]
    Default,
    #[token("defer")]
    Defer,
    #[token("else")]
    Else,
    #[token("fallthrough")]
    Fallthrough,
    #[token("for")]
    For,
    #[token("func")]
    Func,
    #[token("go")]
    Go,
    #[token("goto")]
    Goto,
    #[token("if")]
    If,
    #[token("import")]
    Import,
    #[token("interface")]
    Interface,
    #[token("map")]
    Map,
    #[token("package")]
    Package,
    #[token("range")]
    Range,
    #[token("return")]
    Return,
    #[token("select")]
    Select,
    #[token("struct")]
    Struct,
    #[token("switch")]
    Switch,
    #[token("type")]
    Type,
    #[token("var")]
    Var,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[_\p{L}][_\p{L}\p{Nd}]*")]
    Ident,

    #[regex(r"[0-9][0-9a-zA-Z_]*(\.[0-9a-zA-Z_]*)?")]
    #[regex(r"\.[0-9][0-9a-zA-Z_]*")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"`[^`]*`")]
    RawString,

    #[regex(r"'([^'\\\n]|\\.)+'")]
    Rune,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("...")]
    Ellipsis,
    #[token(":=")]
    ColonEq,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBrack,
    #[token("]")]
    RBrack,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("*")]
    Star,
    #[token("=")]
    Eq,

    #[token("<<=")]
    #[token(">>=")]
    #[token("&^=")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("<<")]
    #[token(">>")]
    #[token("&^")]
    #[token("&&")]
    #[token("||")]
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("<-")]
    #[token("+")]
    #[token("-")]
    #[token("/")]
    #[token("%")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("~")]
    #[token("!")]
    #[token("<")]
    #[token(">")]
    Operator,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::BlockComment => SyntaxKind::BLOCK_COMMENT,

            LogosToken::Break => SyntaxKind::BREAK_KW,
            LogosToken::Case => SyntaxKind::CASE_KW,
            LogosToken::Chan => SyntaxKind::CHAN_KW,
            LogosToken::Const => SyntaxKind::CONST_KW,
            LogosToken::Continue => SyntaxKind::CONTINUE_KW,
            LogosToken::Default => SyntaxKind::DEFAULT_KW,
            LogosToken::Defer => SyntaxKind::DEFER_KW,
            LogosToken::Else => SyntaxKind::ELSE_KW,
            LogosToken::Fallthrough => SyntaxKind::FALLTHROUGH_KW,
            LogosToken::For => SyntaxKind::FOR_KW,
            LogosToken::Func => SyntaxKind::FUNC_KW,
            LogosToken::Go => SyntaxKind::GO_KW,
            LogosToken::Goto => SyntaxKind::GOTO_KW,
            LogosToken::If => SyntaxKind::IF_KW,
            LogosToken::Import => SyntaxKind::IMPORT_KW,
            LogosToken::Interface => SyntaxKind::INTERFACE_KW,
            LogosToken::Map => SyntaxKind::MAP_KW,
            LogosToken::Package => SyntaxKind::PACKAGE_KW,
            LogosToken::Range => SyntaxKind::RANGE_KW,
            LogosToken::Return => SyntaxKind::RETURN_KW,
            LogosToken::Select => SyntaxKind::SELECT_KW,
            LogosToken::Struct => SyntaxKind::STRUCT_KW,
            LogosToken::Switch => SyntaxKind::SWITCH_KW,
            LogosToken::Type => SyntaxKind::TYPE_KW,
            LogosToken::Var => SyntaxKind::VAR_KW,

            LogosToken::Ident => SyntaxKind::IDENT,
            LogosToken::Number => SyntaxKind::NUMBER,
            LogosToken::String => SyntaxKind::STRING,
            LogosToken::RawString => SyntaxKind::RAW_STRING,
            LogosToken::Rune => SyntaxKind::RUNE,

            LogosToken::Ellipsis => SyntaxKind::ELLIPSIS,
            LogosToken::ColonEq => SyntaxKind::COLON_EQ,
            LogosToken::PlusPlus => SyntaxKind::PLUS_PLUS,
            LogosToken::MinusMinus => SyntaxKind::MINUS_MINUS,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::LBrack => SyntaxKind::L_BRACK,
            LogosToken::RBrack => SyntaxKind::R_BRACK,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::Semicolon => SyntaxKind::SEMICOLON,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Star => SyntaxKind::STAR,
            LogosToken::Eq => SyntaxKind::EQ,
            LogosToken::Operator => SyntaxKind::OPERATOR,
        }
    }
}
