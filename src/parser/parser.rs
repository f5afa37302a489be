//! Recursive descent parser for the structural layer of Go
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST: junk at the top
//! level is wrapped in an `ERROR` node inside a `DUMMY_BLOCK` placeholder
//! together with the declaration the parser recovers to.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    pub fn new(green: GreenNode, errors: Vec<SyntaxError>) -> Self {
        Self { green, errors }
    }

    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse Go source code into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

const TOP_LEVEL_RECOVERY: &[SyntaxKind] = &[
    SyntaxKind::FUNC_KW,
    SyntaxKind::TYPE_KW,
    SyntaxKind::VAR_KW,
    SyntaxKind::CONST_KW,
    SyntaxKind::IMPORT_KW,
];

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    /// Kind of the last significant (non-trivia) token consumed.
    last: SyntaxKind,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            last: SyntaxKind::EOF,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection (lookahead always skips trivia)
    // =========================================================================

    fn nth_index(&self, n: usize) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(self.pos)
            .filter(|(_, t)| !t.kind.is_trivia())
            .nth(n)
            .map(|(idx, _)| idx)
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        self.nth_index(n)
            .map(|idx| self.tokens[idx].kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.at(SyntaxKind::EOF)
    }

    /// A line break separates the last consumed token from the next one.
    fn at_line_break(&self) -> bool {
        self.tokens[self.pos..]
            .iter()
            .take_while(|t| t.kind.is_trivia())
            .any(Token::has_line_break)
    }

    /// End of an ungrouped spec, per Go's semicolon insertion.
    fn at_spec_end(&self) -> bool {
        self.at_any(&[
            SyntaxKind::EOF,
            SyntaxKind::SEMICOLON,
            SyntaxKind::R_PAREN,
            SyntaxKind::R_BRACE,
        ]) || (self.at_line_break() && self.last.ends_statement())
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Attach pending trivia to the currently open node.
    fn skip_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume the next significant token (and the trivia before it).
    fn bump(&mut self) {
        self.skip_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.last = token.kind;
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {:?}", kind));
            false
        }
    }

    fn eat_semicolons(&mut self) {
        while self.eat(SyntaxKind::SEMICOLON) {}
    }

    /// Consume a bracketed run, including nested brackets of any kind.
    fn bump_balanced(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current_kind() {
                SyntaxKind::EOF => {
                    self.error("unclosed delimiter");
                    return;
                }
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACK | SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACK | SyntaxKind::R_BRACE => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            self.bump();
            if depth == 0 {
                return;
            }
        }
    }

    /// Consume the tail of a spec (type, value expressions) up to its end.
    fn bump_until_spec_end(&mut self) {
        while !self.at_spec_end() {
            if self.at_any(&[SyntaxKind::L_PAREN, SyntaxKind::L_BRACK, SyntaxKind::L_BRACE]) {
                self.bump_balanced();
            } else {
                self.bump();
            }
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .nth_index(0)
            .map(|idx| {
                let t = &self.tokens[idx];
                TextRange::at(t.offset, TextSize::of(t.text))
            })
            .unwrap_or_else(|| {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            });
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.start_node(SyntaxKind::ERROR);
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !(consumed && self.at_any(recovery)) {
            if self.at_any(&[SyntaxKind::L_PAREN, SyntaxKind::L_BRACK, SyntaxKind::L_BRACE]) {
                self.bump_balanced();
            } else {
                self.bump();
            }
            consumed = true;
        }
        self.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    /// Leading trivia stays with the parent node.
    fn start_node(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());

        if self.at(SyntaxKind::PACKAGE_KW) {
            self.parse_package_clause();
            self.eat_semicolons();
            self.parse_import_list();
        } else {
            self.error("expected package clause");
            if self.at(SyntaxKind::IMPORT_KW) {
                self.parse_import_list();
            }
        }

        loop {
            self.eat_semicolons();
            if self.at_eof() {
                break;
            }
            if !self.parse_top_level_declaration() {
                self.recover_top_level();
            }
        }

        self.skip_trivia();
        self.finish_node();
    }

    fn parse_package_clause(&mut self) {
        self.start_node(SyntaxKind::PACKAGE_CLAUSE);
        self.bump(); // package
        if !self.eat(SyntaxKind::IDENT) {
            self.error("expected package name");
        }
        self.finish_node();
    }

    fn parse_import_list(&mut self) {
        self.start_node(SyntaxKind::IMPORT_LIST);
        while self.at(SyntaxKind::IMPORT_KW) {
            self.parse_import_declaration();
            if self.nth_non_semicolon() != SyntaxKind::IMPORT_KW {
                break;
            }
            self.eat_semicolons();
        }
        self.finish_node();
    }

    fn nth_non_semicolon(&self) -> SyntaxKind {
        (0..)
            .map(|n| self.nth(n))
            .find(|k| *k != SyntaxKind::SEMICOLON)
            .unwrap_or(SyntaxKind::EOF)
    }

    fn parse_import_declaration(&mut self) {
        self.start_node(SyntaxKind::IMPORT_DECLARATION);
        self.bump(); // import
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_group(
                &[
                    SyntaxKind::IDENT,
                    SyntaxKind::DOT,
                    SyntaxKind::STRING,
                    SyntaxKind::RAW_STRING,
                ],
                Self::parse_import_spec,
            );
        } else {
            self.parse_import_spec();
        }
        self.finish_node();
    }

    fn parse_import_spec(&mut self) {
        self.start_node(SyntaxKind::IMPORT_SPEC);
        if self.at_any(&[SyntaxKind::IDENT, SyntaxKind::DOT]) {
            self.bump();
        }
        if self.at_any(&[SyntaxKind::STRING, SyntaxKind::RAW_STRING]) {
            self.start_node(SyntaxKind::IMPORT_STRING);
            self.bump();
            self.finish_node();
        } else {
            self.error("expected import path");
        }
        self.finish_node();
    }

    /// Parse `( spec; spec; ... )`, recovering inside the parentheses.
    fn parse_group(&mut self, spec_start: &[SyntaxKind], parse_spec: fn(&mut Self)) {
        self.bump(); // (
        loop {
            self.eat_semicolons();
            if self.eat(SyntaxKind::R_PAREN) {
                break;
            }
            if self.at_eof() {
                self.error("expected ')'");
                break;
            }
            if self.at_any(spec_start) {
                parse_spec(self);
                if !self.at_spec_end() {
                    let mut recovery = vec![SyntaxKind::R_PAREN, SyntaxKind::SEMICOLON];
                    recovery.extend_from_slice(spec_start);
                    self.error_recover("expected end of spec", &recovery);
                }
            } else {
                let mut recovery = vec![SyntaxKind::R_PAREN, SyntaxKind::SEMICOLON];
                recovery.extend_from_slice(spec_start);
                self.error_recover("unexpected token in declaration group", &recovery);
            }
        }
    }

    /// Returns false if the current token does not start a declaration.
    fn parse_top_level_declaration(&mut self) -> bool {
        match self.current_kind() {
            SyntaxKind::FUNC_KW => self.parse_function_or_method(),
            SyntaxKind::TYPE_KW => {
                self.parse_declaration(SyntaxKind::TYPE_DECLARATION, Self::parse_type_spec)
            }
            SyntaxKind::VAR_KW => self.parse_declaration(SyntaxKind::VAR_DECLARATION, |p| {
                p.parse_value_spec(SyntaxKind::VAR_SPEC, SyntaxKind::VAR_DEFINITION)
            }),
            SyntaxKind::CONST_KW => self.parse_declaration(SyntaxKind::CONST_DECLARATION, |p| {
                p.parse_value_spec(SyntaxKind::CONST_SPEC, SyntaxKind::CONST_DEFINITION)
            }),
            _ => return false,
        }
        true
    }

    /// Wrap unexpected top-level input and the declaration that follows it
    /// in a placeholder node.
    fn recover_top_level(&mut self) {
        self.start_node(SyntaxKind::DUMMY_BLOCK);
        let message = if self.at(SyntaxKind::IMPORT_KW) {
            "imports must appear before other declarations"
        } else {
            "expected declaration"
        };
        self.error_recover(message, TOP_LEVEL_RECOVERY);
        self.eat_semicolons();
        if !self.at(SyntaxKind::IMPORT_KW) {
            self.parse_top_level_declaration();
        }
        self.finish_node();
    }

    fn parse_declaration(&mut self, kind: SyntaxKind, parse_spec: fn(&mut Self)) {
        self.start_node(kind);
        self.bump(); // type / var / const
        if self.at(SyntaxKind::L_PAREN) {
            self.parse_group(&[SyntaxKind::IDENT], parse_spec);
        } else if self.at(SyntaxKind::IDENT) {
            parse_spec(self);
        } else {
            self.error("expected identifier");
        }
        self.finish_node();
    }

    fn parse_type_spec(&mut self) {
        self.start_node(SyntaxKind::TYPE_SPEC);
        self.expect(SyntaxKind::IDENT);
        self.bump_until_spec_end();
        self.finish_node();
    }

    fn parse_value_spec(&mut self, spec: SyntaxKind, definition: SyntaxKind) {
        self.start_node(spec);
        loop {
            if !self.at(SyntaxKind::IDENT) {
                self.error("expected identifier");
                break;
            }
            self.start_node(definition);
            self.bump();
            self.finish_node();
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        self.bump_until_spec_end();
        self.finish_node();
    }

    fn parse_function_or_method(&mut self) {
        let is_method = self.nth(1) == SyntaxKind::L_PAREN;
        let kind = if is_method {
            SyntaxKind::METHOD_DECLARATION
        } else {
            SyntaxKind::FUNCTION_DECLARATION
        };
        self.start_node(kind);
        self.bump(); // func

        if is_method {
            self.start_node(SyntaxKind::RECEIVER);
            self.bump_balanced();
            self.finish_node();
        }

        self.expect(SyntaxKind::IDENT);

        if self.at(SyntaxKind::L_BRACK) {
            self.start_node(SyntaxKind::TYPE_PARAMETERS);
            self.bump_balanced();
            self.finish_node();
        }

        self.start_node(SyntaxKind::SIGNATURE);
        if self.at(SyntaxKind::L_PAREN) {
            self.bump_balanced();
        } else {
            self.error("expected parameter list");
        }
        self.parse_result_type();
        self.finish_node();

        if self.at(SyntaxKind::L_BRACE) {
            self.start_node(SyntaxKind::BLOCK);
            self.bump_balanced();
            self.finish_node();
        }
        self.finish_node();
    }

    /// Result types end at the body brace; `struct{}` and `interface{}`
    /// literals in the result are consumed whole.
    fn parse_result_type(&mut self) {
        while !self.at(SyntaxKind::L_BRACE) && !self.at_spec_end() {
            match self.current_kind() {
                SyntaxKind::STRUCT_KW | SyntaxKind::INTERFACE_KW => {
                    self.bump();
                    if self.at(SyntaxKind::L_BRACE) {
                        self.bump_balanced();
                    }
                }
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACK => self.bump_balanced(),
                _ => self.bump(),
            }
        }
    }
}
