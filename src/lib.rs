//! Validate and decompose commit messages against the [Conventional Commit]
//! grammar.
//!
//! [conventional commit]: https://www.conventionalcommits.org
//!
//! A message is either turned into a [`Commit`] or rejected with an [`Error`]
//! whose [`ErrorKind`] says which rule it broke. Each message is parsed on its
//! own; batching, retrieving commits, and reporting are left to the caller.
//!
//! # Example
//!
//! ```rust
//! use conventional_lint::{Commit, ErrorKind, Type};
//! use indoc::indoc;
//!
//! let message = indoc! {"
//!     docs(example)!: add tested usage example
//!
//!     This example is tested using Rust's doctest capabilities. Having this
//!     example helps people understand how to use the parser.
//!
//!     BREAKING CHANGE: the example module moved"};
//!
//! let commit = Commit::parse(message).unwrap();
//!
//! // You can access all components of the header.
//! assert_eq!(commit.type_(), Type::Docs);
//! assert_eq!(commit.scope().unwrap(), "example");
//! assert_eq!(commit.description(), "add tested usage example");
//!
//! // The `!` marker flags a breaking change.
//! assert!(commit.breaking());
//!
//! // The body is everything after the header, footer lines included.
//! assert!(commit.body().unwrap().contains("helps people understand"));
//! assert!(commit.body().unwrap().ends_with("BREAKING CHANGE: the example module moved"));
//!
//! // Footers are also available by token.
//! assert_eq!(commit.footer("BREAKING CHANGE"), Some("the example module moved"));
//!
//! // Rejections carry the rule that was broken.
//! let err = Commit::parse("weird: oops").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnknownType);
//! assert!(err.to_string().starts_with("type \"weird\" is not valid"));
//! ```

#![warn(missing_docs)]

mod commit;
mod component;
mod error;
mod parser;

pub use commit::Commit;
pub use component::{Footer, FooterToken, Scope, Type, MAX_HEADER_LEN};
pub use error::{Error, ErrorKind};
