//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all node and token kinds in the Go syntax tree.
//! Only the structural layer of the language has dedicated node kinds;
//! bodies and expressions are kept as flat token runs.

/// All syntax kinds (tokens and nodes) of the Go tree.
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (declarations, specs, groups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,       // identifier
    NUMBER,      // 42, 0x1F, 3.14, 1i
    STRING,      // "hello"
    RAW_STRING,  // `hello`
    RUNE,        // 'a'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_BRACK,     // [
    R_BRACK,     // ]
    L_PAREN,     // (
    R_PAREN,     // )
    SEMICOLON,   // ;
    COLON,       // :
    COMMA,       // ,
    DOT,         // .
    ELLIPSIS,    // ...
    STAR,        // *
    EQ,          // =
    COLON_EQ,    // :=
    PLUS_PLUS,   // ++
    MINUS_MINUS, // --
    OPERATOR,    // every other operator

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    BREAK_KW,
    CASE_KW,
    CHAN_KW,
    CONST_KW,
    CONTINUE_KW,
    DEFAULT_KW,
    DEFER_KW,
    ELSE_KW,
    FALLTHROUGH_KW,
    FOR_KW,
    FUNC_KW,
    GO_KW,
    GOTO_KW,
    IF_KW,
    IMPORT_KW,
    INTERFACE_KW,
    MAP_KW,
    PACKAGE_KW,
    RANGE_KW,
    RETURN_KW,
    SELECT_KW,
    STRUCT_KW,
    SWITCH_KW,
    TYPE_KW,
    VAR_KW,

    // =========================================================================
    // COMPOSITE NODES (non-terminals in the grammar)
    // =========================================================================
    SOURCE_FILE,
    PACKAGE_CLAUSE,

    // Imports
    IMPORT_LIST,
    IMPORT_DECLARATION,
    IMPORT_SPEC,
    IMPORT_STRING,

    // Functions and methods
    FUNCTION_DECLARATION,
    METHOD_DECLARATION,
    RECEIVER,
    TYPE_PARAMETERS,
    SIGNATURE,
    BLOCK,

    // Types
    TYPE_DECLARATION,
    TYPE_SPEC,

    // Variables
    VAR_DECLARATION,
    VAR_SPEC,
    VAR_DEFINITION,

    // Constants
    CONST_DECLARATION,
    CONST_SPEC,
    CONST_DEFINITION,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    ERROR,
    /// Error-recovery wrapper; transparent to every structural query.
    DUMMY_BLOCK,
    /// End of input marker returned by parser lookahead; never in a tree.
    EOF,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::BREAK_KW as u16) && (self as u16) <= (Self::VAR_KW as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(self, Self::NUMBER | Self::STRING | Self::RAW_STRING | Self::RUNE)
    }

    /// Error-recovery placeholder nodes, flattened by every traversal.
    pub fn is_placeholder(self) -> bool {
        self == Self::DUMMY_BLOCK
    }

    /// Keywords that start a top-level declaration.
    pub fn starts_top_level_declaration(self) -> bool {
        matches!(
            self,
            Self::FUNC_KW | Self::TYPE_KW | Self::VAR_KW | Self::CONST_KW | Self::IMPORT_KW
        )
    }

    /// Group nodes that only wrap specs or nested groups.
    pub fn is_declaration_group(self) -> bool {
        matches!(
            self,
            Self::IMPORT_LIST
                | Self::IMPORT_DECLARATION
                | Self::TYPE_DECLARATION
                | Self::VAR_DECLARATION
                | Self::CONST_DECLARATION
        )
    }

    /// Node kinds that are mirrored into a file stub.
    pub fn is_stubbed(self) -> bool {
        matches!(
            self,
            Self::PACKAGE_CLAUSE
                | Self::IMPORT_SPEC
                | Self::FUNCTION_DECLARATION
                | Self::METHOD_DECLARATION
                | Self::TYPE_SPEC
                | Self::VAR_SPEC
                | Self::VAR_DEFINITION
                | Self::CONST_SPEC
                | Self::CONST_DEFINITION
        ) || self.is_declaration_group()
    }

    /// Tokens after which a line break terminates the current spec
    /// (Go's automatic semicolon rule).
    pub fn ends_statement(self) -> bool {
        matches!(
            self,
            Self::IDENT
                | Self::R_PAREN
                | Self::R_BRACK
                | Self::R_BRACE
                | Self::BREAK_KW
                | Self::CONTINUE_KW
                | Self::FALLTHROUGH_KW
                | Self::RETURN_KW
                | Self::PLUS_PLUS
                | Self::MINUS_MINUS
        ) || self.is_literal()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GoLanguage {}

impl rowan::Language for GoLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<GoLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<GoLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<GoLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<GoLanguage>;
