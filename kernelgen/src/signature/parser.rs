use rowan::GreenNodeBuilder;

use super::{
    ParseError,
    cst::SyntaxNode,
    info::KernelSignature,
    lexer::{Lexer, Token},
    token::SyntaxKind,
};

/// Recursive-descent parser for one line of normalized kernel source.
pub struct SignatureParser<'a> {
    tokens: Vec<Token<'a>>,
    token_position: usize,
    line: usize,
    builder: GreenNodeBuilder<'static>,
}

impl<'a> SignatureParser<'a> {
    fn new(
        input: &'a str,
        line: usize,
    ) -> Self {
        Self {
            tokens: Lexer::new(input).collect(),
            token_position: 0,
            line,
            builder: GreenNodeBuilder::new(),
        }
    }

    /// Parses the kernel declaration on `input`, if the line has one.
    ///
    /// Returns `Ok(None)` for lines without a `kernel` keyword. A line
    /// with the keyword that does not form a declaration is an error.
    pub fn parse_line(
        input: &'a str,
        line: usize,
    ) -> Result<Option<KernelSignature>, ParseError> {
        let mut parser = Self::new(input, line);

        let Some(kernel_position) = parser
            .tokens
            .iter()
            .position(|token| token.kind == SyntaxKind::KwKernel)
        else {
            return Ok(None);
        };
        parser.token_position = kernel_position;

        let column = parser.tokens[kernel_position].offset + 1;
        let green = parser.parse()?;
        let root = SyntaxNode::new_root(green);
        let declaration = root
            .children()
            .find(|node| node.kind() == SyntaxKind::KernelDecl)
            .ok_or_else(|| {
                ParseError::new(line, column, "no kernel declaration node")
            })?;

        KernelSignature::from_cst(&declaration, line, column).map(Some)
    }

    fn parse(mut self) -> Result<rowan::GreenNode, ParseError> {
        self.start_node(SyntaxKind::Root);
        self.parse_kernel_declaration()?;
        self.finish_node();
        Ok(self.builder.finish())
    }

    fn start_node(
        &mut self,
        kind: SyntaxKind,
    ) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn peek(&self) -> Option<SyntaxKind> {
        self.tokens.get(self.token_position).map(|token| token.kind)
    }

    fn peek_nth(
        &self,
        n: usize,
    ) -> Option<SyntaxKind> {
        self.tokens.get(self.token_position + n).map(|token| token.kind)
    }

    fn is_at_kind(
        &self,
        kind: SyntaxKind,
    ) -> bool {
        self.peek() == Some(kind)
    }

    fn bump(&mut self) {
        if let Some(token) = self.tokens.get(self.token_position) {
            self.builder.token(token.kind.into(), token.text);
            self.token_position += 1;
        }
    }

    fn error(
        &self,
        message: impl Into<String>,
    ) -> ParseError {
        let (column, found) = match self.tokens.get(self.token_position) {
            Some(token) => (token.offset + 1, format!("`{}`", token.text)),
            None => (
                self.tokens.last().map_or(1, |t| t.offset + t.text.len() + 1),
                "end of line".to_string(),
            ),
        };
        ParseError::new(
            self.line,
            column,
            format!("{}, found {found}", message.into()),
        )
    }

    fn expect(
        &mut self,
        kind: SyntaxKind,
        what: &str,
    ) -> Result<(), ParseError> {
        if self.is_at_kind(kind) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(format!("expected {what}")))
        }
    }

    fn parse_kernel_declaration(&mut self) -> Result<(), ParseError> {
        self.start_node(SyntaxKind::KernelDecl);
        self.expect(SyntaxKind::KwKernel, "`kernel`")?;
        self.expect(SyntaxKind::KwVoid, "`void` return type after `kernel`")?;

        self.start_node(SyntaxKind::Name);
        self.expect(SyntaxKind::Ident, "kernel name")?;
        self.finish_node();

        self.parse_parameter_list()?;
        self.finish_node();
        Ok(())
    }

    fn parse_parameter_list(&mut self) -> Result<(), ParseError> {
        self.start_node(SyntaxKind::ParamList);
        self.expect(SyntaxKind::LParen, "`(`")?;

        if self.is_at_kind(SyntaxKind::KwVoid)
            && self.peek_nth(1) == Some(SyntaxKind::RParen)
        {
            self.bump();
        } else if !self.is_at_kind(SyntaxKind::RParen) {
            loop {
                self.parse_parameter()?;
                if self.is_at_kind(SyntaxKind::Comma) {
                    self.bump();
                } else {
                    break;
                }
            }
        }

        self.expect(SyntaxKind::RParen, "`,` or `)`")?;
        self.finish_node();
        Ok(())
    }

    fn parse_parameter(&mut self) -> Result<(), ParseError> {
        self.start_node(SyntaxKind::Param);
        self.parse_qualifiers()?;

        self.start_node(SyntaxKind::TypeRef);
        self.parse_base_type()?;
        while self.peek().is_some_and(SyntaxKind::is_type_qualifier) {
            self.bump();
        }
        self.parse_declarator()?;
        self.finish_node();

        self.start_node(SyntaxKind::Name);
        self.expect(SyntaxKind::Ident, "parameter name")?;
        self.finish_node();

        self.finish_node();
        Ok(())
    }

    fn parse_qualifiers(&mut self) -> Result<(), ParseError> {
        self.start_node(SyntaxKind::QualifierList);

        let mut seen_address_space = false;
        while let Some(kind) = self.peek() {
            if kind.is_type_qualifier() {
                self.bump();
            } else if kind.is_address_space() {
                if seen_address_space {
                    return Err(
                        self.error("conflicting address space qualifiers")
                    );
                }
                seen_address_space = true;
                self.bump();
            } else {
                break;
            }
        }

        self.finish_node();
        Ok(())
    }

    fn parse_base_type(&mut self) -> Result<(), ParseError> {
        self.start_node(SyntaxKind::BaseType);

        match self.peek() {
            Some(SyntaxKind::KwUnsigned) => {
                self.bump();
                if let Some(token) = self.tokens.get(self.token_position)
                    && token.kind == SyntaxKind::Ident
                    && matches!(token.text, "char" | "short" | "int" | "long")
                    && self.peek_nth(1) != Some(SyntaxKind::Comma)
                    && self.peek_nth(1) != Some(SyntaxKind::RParen)
                {
                    self.bump();
                }
            },
            Some(SyntaxKind::Ident) | Some(SyntaxKind::KwVoid) => self.bump(),
            _ => return Err(self.error("expected parameter type")),
        }

        self.finish_node();
        Ok(())
    }

    fn parse_declarator(&mut self) -> Result<(), ParseError> {
        if !self.is_at_kind(SyntaxKind::Star) {
            return Ok(());
        }

        self.start_node(SyntaxKind::PointerDeclarator);
        self.bump();
        while self.peek().is_some_and(SyntaxKind::is_type_qualifier) {
            self.bump();
        }
        self.finish_node();

        if self.is_at_kind(SyntaxKind::Star) {
            return Err(
                self.error("pointer-to-pointer parameters are not supported")
            );
        }

        Ok(())
    }
}
