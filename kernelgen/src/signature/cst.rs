use rowan::Language;

use super::token::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KernelSignatureLanguage {}

impl Language for KernelSignatureLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        let raw_value = raw.0;
        assert!(raw_value <= SyntaxKind::PointerDeclarator as u16);
        // SAFETY: SyntaxKind is repr(u16) with contiguous discriminants and
        // the bound was checked above.
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw_value) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<KernelSignatureLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<KernelSignatureLanguage>;
