use winnow::combinator::{alt, delimited, eof, opt, preceded, separated_pair, terminated};
use winnow::error::StrContext;
use winnow::prelude::*;
use winnow::token::take_while;

pub(crate) const BREAKING_PHRASE: &str = "BREAKING CHANGE";
pub(crate) const BREAKING_ARROW: &str = "BREAKING-CHANGE";

/// The destructured first line of a commit message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Summary<'a> {
    pub(crate) ty: &'a str,
    pub(crate) scope: Option<&'a str>,
    pub(crate) breaking: bool,
    pub(crate) description: &'a str,
}

/// Match a header line, returning `None` when it does not have the shape of a
/// conventional commit summary.
///
/// Only the prefix needs to match: anything following a stray `\r` is left
/// unconsumed.
pub(crate) fn header(line: &str) -> Option<Summary<'_>> {
    let mut input = line;
    summary.parse_next(&mut input).ok()
}

/// Match a complete footer line, returning its token and value.
pub(crate) fn footer_line(line: &str) -> Option<(&str, &str)> {
    let mut input = line;
    footer.parse_next(&mut input).ok()
}

// <CR>              ::= "0x000D"
// <LF>              ::= "0x000A"
fn is_line_ending(c: char) -> bool {
    c == '\n' || c == '\r'
}

// <word>            ::= [A-Za-z0-9_]
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word_or_hyphen(c: char) -> bool {
    is_word(c) || c == '-'
}

// <summary>         ::= <type>, ["(", <scope>, ")"], ["!"], ": ", <description>
fn summary<'i>(i: &mut &'i str) -> ModalResult<Summary<'i>> {
    (
        type_,
        opt(delimited('(', scope, ')')),
        opt('!'),
        preceded(": ", description),
    )
        .map(|(ty, scope, bang, description)| Summary {
            ty,
            scope,
            breaking: bang.is_some(),
            description,
        })
        .context(StrContext::Label("summary"))
        .parse_next(i)
}

// <type>            ::= <word>+
fn type_<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_word)
        .context(StrContext::Label("type"))
        .parse_next(i)
}

// <scope>           ::= (<word> | "-")+
fn scope<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_word_or_hyphen)
        .context(StrContext::Label("scope"))
        .parse_next(i)
}

// <description>     ::= <any UTF8-octets except newline>+
fn description<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !is_line_ending(c))
        .context(StrContext::Label("description"))
        .parse_next(i)
}

// <footer>          ::= <token>, ": ", <value>, <eof>
fn footer<'i>(i: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    terminated(separated_pair(token, ": ", value), eof)
        .context(StrContext::Label("footer"))
        .parse_next(i)
}

// <token>           ::= "BREAKING CHANGE"
//                    |  (<word> | "-")+
fn token<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    alt((BREAKING_PHRASE, take_while(1.., is_word_or_hyphen)))
        .context(StrContext::Label("token"))
        .parse_next(i)
}

// <value>           ::= <any UTF8-octets except newline>+
fn value<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !is_line_ending(c))
        .context(StrContext::Label("value"))
        .parse_next(i)
}
