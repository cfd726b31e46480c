//! Bridge to the source-text emission layer.
//!
//! Expressions themselves are never serialized; the only text surface this
//! core exposes is the literal keyword for a declaration modifier, consumed
//! when generated source is rendered.

use std::fmt;

///
/// Modifier
///
/// Declaration modifier keywords recognized by the generated-source layer.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Strictfp,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Default,
}

impl Modifier {
    pub const ALL: [Self; 12] = [
        Self::Public,
        Self::Protected,
        Self::Private,
        Self::Static,
        Self::Final,
        Self::Abstract,
        Self::Strictfp,
        Self::Transient,
        Self::Volatile,
        Self::Synchronized,
        Self::Native,
        Self::Default,
    ];

    /// The literal keyword emitted into generated source.
    #[must_use]
    pub const fn render(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Static => "static",
            Self::Final => "final",
            Self::Abstract => "abstract",
            Self::Strictfp => "strictfp",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::Modifier;

    #[test]
    fn renders_literal_keywords() {
        assert_eq!(Modifier::Public.render(), "public");
        assert_eq!(Modifier::Synchronized.render(), "synchronized");
        assert_eq!(Modifier::Default.to_string(), "default");
    }

    #[test]
    fn keywords_are_distinct() {
        let mut keywords: Vec<_> = Modifier::ALL.iter().map(|m| m.render()).collect();
        keywords.sort_unstable();
        keywords.dedup();
        assert_eq!(keywords.len(), Modifier::ALL.len());
    }
}
