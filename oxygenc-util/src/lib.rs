//! oxygenc-util - Shared foundation types for the OxygenC front end.
//!
//! This crate holds the pieces every other `oxygenc-*` crate needs but that
//! belong to none of them in particular: interned identifiers (`Symbol`),
//! source locations (`Span`), and diagnostic reporting (`Diagnostic`,
//! `Level`, `Handler`). None of it is specific to lexing or parsing.
//!
//! The front end is single-threaded per compilation unit (one `Lexer`/
//! `Parser` pair per source file, never shared across threads), so the
//! types here favor simplicity over lock-free concurrency.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::{SourceMapError, SymbolError};
pub use span::{FileId, Span};
pub use symbol::Symbol;
