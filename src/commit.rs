//! The conventional commit record and the rules that produce it.

use std::fmt;

use crate::component::{Footer, FooterToken, Scope, Type, MAX_HEADER_LEN};
use crate::parser;
use crate::{Error, ErrorKind};

/// A conventional commit.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit<'a> {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    ty: Type,
    scope: Option<Scope<'a>>,
    breaking: bool,
    description: &'a str,
    body: Option<&'a str>,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_footers"))]
    #[cfg_attr(
        feature = "schemars",
        schemars(with = "std::collections::BTreeMap<String, String>")
    )]
    footers: Vec<Footer<'a>>,
}

impl<'a> Commit<'a> {
    /// Create a new Conventional Commit based on the provided commit message
    /// string.
    ///
    /// The first line is the header; every following line belongs to the
    /// body, and the lines forming the trailing footer block are additionally
    /// collected as footers.
    ///
    /// # Errors
    ///
    /// This function returns an error if the commit does not conform to the
    /// Conventional Commit specification. See [`ErrorKind`] for the order in
    /// which the rules are checked.
    pub fn parse(message: &'a str) -> Result<Self, Error> {
        let (header, rest) = match message.split_once('\n') {
            Some((header, rest)) => (header, Some(rest)),
            None => (message, None),
        };

        let summary = parser::header(header)
            .ok_or_else(|| Error::new(ErrorKind::InvalidHeader).with_context(header))?;

        if MAX_HEADER_LEN < header.chars().count() {
            return Err(Error::new(ErrorKind::HeaderTooLong).with_context(header));
        }

        let ty = summary.ty.parse::<Type>()?;

        let (body, footers) = match rest {
            Some(body) => (Some(body), scan_footers(body)?),
            None if summary.breaking => {
                return Err(Error::new(ErrorKind::BreakingChangeUndocumented).with_context(header));
            }
            None => (None, Vec::new()),
        };

        Ok(Self {
            ty,
            scope: summary.scope.map(Scope::new_unchecked),
            breaking: summary.breaking,
            description: summary.description,
            body,
            footers,
        })
    }

    /// The type of the commit.
    pub fn type_(&self) -> Type {
        self.ty
    }

    /// The optional scope of the commit.
    pub fn scope(&self) -> Option<Scope<'a>> {
        self.scope
    }

    /// A flag to signal that the header carried the breaking change marker,
    /// e.g.:
    /// ```text
    /// feat(scope)!: this is a breaking change
    /// ```
    ///
    /// A `BREAKING CHANGE` footer alone does not set this flag; see
    /// [`Footer::breaking`].
    pub fn breaking(&self) -> bool {
        self.breaking
    }

    /// The commit description.
    pub fn description(&self) -> &'a str {
        self.description
    }

    /// Everything after the header line, or `None` if the message is a single
    /// line.
    ///
    /// Footer lines are part of the body as well as being available through
    /// [`Commit::footers`].
    pub fn body(&self) -> Option<&'a str> {
        self.body
    }

    /// Any footer, one entry per token.
    ///
    /// When a token repeats, the later value replaces the earlier one.
    pub fn footers(&self) -> &[Footer<'a>] {
        &self.footers
    }

    /// Look up the value of a footer by its exact token.
    pub fn footer(&self, token: &str) -> Option<&'a str> {
        self.footers
            .iter()
            .find(|footer| footer.token() == token)
            .map(Footer::value)
    }
}

impl fmt::Display for Commit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_().as_str())?;

        if let Some(scope) = &self.scope() {
            write!(f, "({scope})")?;
        }

        if self.breaking() {
            f.write_str("!")?;
        }

        write!(f, ": {}", self.description())?;

        if let Some(body) = &self.body() {
            write!(f, "\n{body}")?;
        }

        Ok(())
    }
}

// Walk the lines after the header once, carrying whether the previous line
// was a footer.
fn scan_footers(body: &str) -> Result<Vec<Footer<'_>>, Error> {
    let mut footers: Vec<Footer<'_>> = Vec::new();
    let mut prev: Option<&str> = None;
    let mut was_footer = false;

    for line in body.split('\n') {
        let footer = parser::footer_line(line);
        match footer {
            None if was_footer => {
                return Err(Error::new(ErrorKind::MalformedFooterBlock).with_context(line));
            }
            Some(_) if prev != Some("") => {
                return Err(Error::new(ErrorKind::FooterNotPrecededByBlankLine).with_context(line));
            }
            Some((token, value)) => {
                insert_footer(
                    &mut footers,
                    Footer::new(FooterToken::new_unchecked(token), value),
                );
            }
            None => {}
        }
        was_footer = footer.is_some();
        prev = Some(line);
    }

    Ok(footers)
}

fn insert_footer<'a>(footers: &mut Vec<Footer<'a>>, footer: Footer<'a>) {
    match footers.iter_mut().find(|f| f.token() == footer.token()) {
        Some(existing) => *existing = footer,
        None => footers.push(footer),
    }
}

#[cfg(feature = "serde")]
fn serialize_footers<S>(footers: &[Footer<'_>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(
        footers
            .iter()
            .map(|footer| (footer.token().as_str(), footer.value())),
    )
}
