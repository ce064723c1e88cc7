//! Conventional Commit components.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::parser::{BREAKING_ARROW, BREAKING_PHRASE};
use crate::{Error, ErrorKind};

/// The longest header line, in characters, that is accepted.
pub const MAX_HEADER_LEN: usize = 72;

/// The type of a commit.
///
/// The vocabulary is closed: a header whose type is not listed here is
/// rejected with [`ErrorKind::UnknownType`]. Matching is case-sensitive.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Type {
    /// Changes to the build system or external dependencies.
    Build,
    /// Other changes that don't touch source or tests.
    Chore,
    /// Changes to CI configuration.
    Ci,
    /// Documentation only changes.
    Docs,
    /// A new feature (correlates with `minor` in semver).
    Feat,
    /// A bug fix (correlates with `patch` in semver).
    Fix,
    /// A performance improvement.
    Perf,
    /// A code change that neither fixes a bug nor adds a feature.
    Refactor,
    /// Reverts a previous commit.
    Revert,
    /// Formatting changes that do not affect meaning.
    Style,
    /// Adding or correcting tests.
    Test,
}

impl Type {
    /// Every accepted type, in the order they are reported.
    pub const ALL: [Type; 11] = [
        Type::Build,
        Type::Chore,
        Type::Ci,
        Type::Docs,
        Type::Feat,
        Type::Fix,
        Type::Perf,
        Type::Refactor,
        Type::Revert,
        Type::Style,
        Type::Test,
    ];

    /// Access `str` representation of Type
    pub const fn as_str(self) -> &'static str {
        match self {
            Type::Build => "build",
            Type::Chore => "chore",
            Type::Ci => "ci",
            Type::Docs => "docs",
            Type::Feat => "feat",
            Type::Fix => "fix",
            Type::Perf => "perf",
            Type::Refactor => "refactor",
            Type::Revert => "revert",
            Type::Style => "style",
            Type::Test => "test",
        }
    }
}

impl Deref for Type {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<&'_ str> for Type {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(ty: &str) -> Result<Self, Self::Err> {
        Type::ALL
            .into_iter()
            .find(|known| known.as_str() == ty)
            .ok_or_else(|| Error::new(ErrorKind::UnknownType).with_context(ty))
    }
}

macro_rules! components {
    ($($ty:ident),+) => (
        $(
            /// A component of the conventional commit.
            #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $ty<'a>(&'a str);

            impl<'a> $ty<'a> {
                /// Wrap a value the grammar has already matched.
                pub(crate) const fn new_unchecked(value: &'a str) -> Self {
                    $ty(value)
                }

                /// Access `str` representation
                pub const fn as_str(&self) -> &'a str {
                    self.0
                }
            }

            impl Deref for $ty<'_> {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    self.0
                }
            }

            impl PartialEq<&'_ str> for $ty<'_> {
                fn eq(&self, other: &&str) -> bool {
                    self.0 == *other
                }
            }

            impl fmt::Display for $ty<'_> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.0)
                }
            }

            #[cfg(feature = "serde")]
            impl serde::Serialize for $ty<'_> {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self.0)
                }
            }
        )+
    )
}

components![Scope, FooterToken];

impl FooterToken<'_> {
    /// A flag to signal that the footer describes a breaking change.
    pub fn breaking(&self) -> bool {
        self == &BREAKING_PHRASE || self == &BREAKING_ARROW
    }
}

/// A single footer.
///
/// A footer is a `<token>: <value>` line, similar to a Git trailer.
///
/// See: <https://git-scm.com/docs/git-interpret-trailers>
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Footer<'a> {
    token: FooterToken<'a>,
    value: &'a str,
}

impl<'a> Footer<'a> {
    pub(crate) const fn new(token: FooterToken<'a>, value: &'a str) -> Self {
        Self { token, value }
    }

    /// The token of the footer.
    pub const fn token(&self) -> FooterToken<'a> {
        self.token
    }

    /// The value of the footer.
    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// A flag to signal that the footer describes a breaking change.
    pub fn breaking(&self) -> bool {
        self.token.breaking()
    }
}

impl fmt::Display for Footer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.token, self.value)
    }
}
