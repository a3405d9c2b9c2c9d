//! HAR (HTTP Archive) cataloging: parse archive JSON into an ordered entry list.
//!
//! The parser is deliberately lenient about everything except the structure it
//! needs: `log.entries[]` with a request URL per entry. Missing metadata fields
//! default; a missing `content.text` stays `None` so extraction can tell "no
//! body captured" from "empty body".

mod catalog;
mod parse;

pub use catalog::{load_catalog, Entry};
