use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(error = ())]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[token("kernel")]
    #[token("__kernel")]
    KwKernel,
    #[token("void")]
    KwVoid,

    #[token("global")]
    #[token("__global")]
    KwGlobal,
    #[token("local")]
    #[token("__local")]
    KwLocal,
    #[token("constant")]
    #[token("__constant")]
    KwConstant,
    #[token("private")]
    #[token("__private")]
    KwPrivate,
    #[token("read_only")]
    #[token("__read_only")]
    KwReadOnly,
    #[token("write_only")]
    #[token("__write_only")]
    KwWriteOnly,
    #[token("read_write")]
    #[token("__read_write")]
    KwReadWrite,

    #[token("const")]
    KwConst,
    #[token("volatile")]
    KwVolatile,
    #[token("restrict")]
    #[token("__restrict")]
    KwRestrict,
    #[token("unsigned")]
    KwUnsigned,

    #[token("*")]
    Star,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("{")]
    LBrace,
    #[token(";")]
    Semicolon,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    IntLiteral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    Error = 0,
    KwKernel,
    KwVoid,
    KwGlobal,
    KwLocal,
    KwConstant,
    KwPrivate,
    KwReadOnly,
    KwWriteOnly,
    KwReadWrite,
    KwConst,
    KwVolatile,
    KwRestrict,
    KwUnsigned,
    Star,
    LParen,
    RParen,
    Comma,
    LBrace,
    Semicolon,
    Ident,
    IntLiteral,

    Root,
    KernelDecl,
    Name,
    ParamList,
    Param,
    QualifierList,
    TypeRef,
    BaseType,
    PointerDeclarator,
}

impl SyntaxKind {
    pub fn is_address_space(self) -> bool {
        matches!(
            self,
            SyntaxKind::KwGlobal
                | SyntaxKind::KwLocal
                | SyntaxKind::KwConstant
                | SyntaxKind::KwPrivate
                | SyntaxKind::KwReadOnly
                | SyntaxKind::KwWriteOnly
                | SyntaxKind::KwReadWrite
        )
    }

    pub fn is_type_qualifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::KwConst | SyntaxKind::KwVolatile | SyntaxKind::KwRestrict
        )
    }
}

impl From<TokenKind> for SyntaxKind {
    fn from(token: TokenKind) -> Self {
        match token {
            TokenKind::KwKernel => SyntaxKind::KwKernel,
            TokenKind::KwVoid => SyntaxKind::KwVoid,
            TokenKind::KwGlobal => SyntaxKind::KwGlobal,
            TokenKind::KwLocal => SyntaxKind::KwLocal,
            TokenKind::KwConstant => SyntaxKind::KwConstant,
            TokenKind::KwPrivate => SyntaxKind::KwPrivate,
            TokenKind::KwReadOnly => SyntaxKind::KwReadOnly,
            TokenKind::KwWriteOnly => SyntaxKind::KwWriteOnly,
            TokenKind::KwReadWrite => SyntaxKind::KwReadWrite,
            TokenKind::KwConst => SyntaxKind::KwConst,
            TokenKind::KwVolatile => SyntaxKind::KwVolatile,
            TokenKind::KwRestrict => SyntaxKind::KwRestrict,
            TokenKind::KwUnsigned => SyntaxKind::KwUnsigned,
            TokenKind::Star => SyntaxKind::Star,
            TokenKind::LParen => SyntaxKind::LParen,
            TokenKind::RParen => SyntaxKind::RParen,
            TokenKind::Comma => SyntaxKind::Comma,
            TokenKind::LBrace => SyntaxKind::LBrace,
            TokenKind::Semicolon => SyntaxKind::Semicolon,
            TokenKind::Ident => SyntaxKind::Ident,
            TokenKind::IntLiteral => SyntaxKind::IntLiteral,
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}
