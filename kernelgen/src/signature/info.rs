use serde::Serialize;

use super::{
    ParseError,
    cst::{SyntaxNode, SyntaxToken},
    token::SyntaxKind,
};

/// Numeric base types that accept a vector width suffix.
///
/// `half` is left out: `half4` has no host counterpart and stays whole.
pub const VECTOR_BASE_TYPES: &[&str] = &[
    "char", "uchar", "short", "ushort", "int", "uint", "long", "ulong", "float",
    "double",
];

pub const VECTOR_WIDTHS: &[u8] = &[2, 3, 4, 8, 16];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterQualifier {
    Global,
    Local,
    Constant,
    Private,
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl ParameterQualifier {
    fn from_kind(kind: SyntaxKind) -> Option<Self> {
        Some(match kind {
            SyntaxKind::KwGlobal => Self::Global,
            SyntaxKind::KwLocal => Self::Local,
            SyntaxKind::KwConstant => Self::Constant,
            SyntaxKind::KwPrivate => Self::Private,
            SyntaxKind::KwReadOnly => Self::ReadOnly,
            SyntaxKind::KwWriteOnly => Self::WriteOnly,
            SyntaxKind::KwReadWrite => Self::ReadWrite,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSignature {
    pub name: String,
    pub qualifier: Option<ParameterQualifier>,
    pub is_const: bool,
    pub is_volatile: bool,
    pub data_type: String,
    pub vector_width: u8,
    pub is_pointer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KernelSignature {
    pub name: String,
    pub line: usize,
    pub parameters: Vec<ParameterSignature>,
}

/// Splits a trailing vector width off a numeric base type name.
///
/// `float4` becomes `("float", 4)`. Names whose prefix is not a numeric base
/// type are returned whole with width 0, so `int32_t` and `widget4` stay
/// intact.
pub fn split_vector_width(type_name: &str) -> (&str, u8) {
    for width in VECTOR_WIDTHS.iter().rev() {
        if let Some(base) = type_name.strip_suffix(width.to_string().as_str())
            && VECTOR_BASE_TYPES.contains(&base)
        {
            return (base, *width);
        }
    }
    (type_name, 0)
}

fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> {
    node.descendants_with_tokens()
        .filter_map(|element| element.into_token())
}

fn child(
    node: &SyntaxNode,
    kind: SyntaxKind,
) -> Option<SyntaxNode> {
    node.children().find(|child| child.kind() == kind)
}

fn name_of(node: &SyntaxNode) -> Option<String> {
    child(node, SyntaxKind::Name)
        .and_then(|name| {
            tokens(&name).find(|token| token.kind() == SyntaxKind::Ident)
        })
        .map(|token| token.text().to_string())
}

fn base_type_name(base: &SyntaxNode) -> Option<String> {
    let words = tokens(base).collect::<Vec<_>>();
    match words.as_slice() {
        [unsigned] if unsigned.kind() == SyntaxKind::KwUnsigned => {
            Some("uint".to_string())
        },
        [unsigned, word] if unsigned.kind() == SyntaxKind::KwUnsigned => {
            Some(format!("u{}", word.text()))
        },
        [word] => Some(word.text().to_string()),
        _ => None,
    }
}

impl ParameterSignature {
    fn from_cst(
        node: &SyntaxNode,
        line: usize,
        column: usize,
    ) -> Result<Self, ParseError> {
        let name = name_of(node).ok_or_else(|| {
            ParseError::new(line, column, "parameter without a name")
        })?;

        let type_ref = child(node, SyntaxKind::TypeRef).ok_or_else(|| {
            ParseError::new(line, column, format!("parameter `{name}` has no type"))
        })?;
        let full_type_name = child(&type_ref, SyntaxKind::BaseType)
            .as_ref()
            .and_then(base_type_name)
            .ok_or_else(|| {
                ParseError::new(
                    line,
                    column,
                    format!("parameter `{name}` has no base type"),
                )
            })?;
        let (data_type, vector_width) = split_vector_width(&full_type_name);

        let mut qualifier = None;
        let mut is_const = false;
        let mut is_volatile = false;
        for token in tokens(node) {
            match token.kind() {
                SyntaxKind::KwConst => is_const = true,
                SyntaxKind::KwVolatile => is_volatile = true,
                kind => {
                    if let Some(q) = ParameterQualifier::from_kind(kind) {
                        qualifier = Some(q);
                    }
                },
            }
        }

        Ok(Self {
            name,
            qualifier,
            is_const,
            is_volatile,
            data_type: data_type.to_string(),
            vector_width,
            is_pointer: child(&type_ref, SyntaxKind::PointerDeclarator)
                .is_some(),
        })
    }
}

impl KernelSignature {
    pub fn from_cst(
        node: &SyntaxNode,
        line: usize,
        column: usize,
    ) -> Result<Self, ParseError> {
        if node.kind() != SyntaxKind::KernelDecl {
            return Err(ParseError::new(
                line,
                column,
                format!("expected KernelDecl node, got {:?}", node.kind()),
            ));
        }

        let name = name_of(node).ok_or_else(|| {
            ParseError::new(line, column, "kernel declaration without a name")
        })?;

        let parameters = child(node, SyntaxKind::ParamList)
            .map(|list| {
                list.children()
                    .filter(|child| child.kind() == SyntaxKind::Param)
                    .map(|param| ParameterSignature::from_cst(&param, line, column))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            name,
            line,
            parameters,
        })
    }
}
