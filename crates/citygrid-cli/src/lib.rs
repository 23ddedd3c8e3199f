//! citygrid-cli
//! ============
//!
//! Command-line interface for the `citygrid-core` city table.
//!
//! This crate primarily provides a binary (`citygrid`). The library target
//! exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! citygrid stats
//! citygrid search berl
//! citygrid search --sort country,population:desc --page-size 5 --page 2
//! citygrid query india --offset 1 --limit 2
//! ```
//!
//! For programmatic access use the [`citygrid-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
