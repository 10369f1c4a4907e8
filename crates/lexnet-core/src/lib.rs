//! Lexnet Core - Taxonomy records and their text formats
//!
//! This crate turns the line-oriented WordNet exports into plain records
//! that the graph crate consumes:
//!
//! - [`SynsetRecord`]: `id,members,gloss`
//! - [`HypernymRecord`]: `id,parent,parent,...`
//! - [`DigraphRecord`]: the `V`, `E`, `v w`... edge-list format
//!
//! # Example
//!
//! ```
//! use lexnet_core::{parse_hypernyms, parse_synsets, ParseOptions};
//!
//! let synsets = "0,entity,that which exists\n1,dog domestic_dog,a canine\n";
//! let hypernyms = "1,0\n";
//!
//! let options = ParseOptions::default();
//! let synsets = parse_synsets(synsets.as_bytes(), &options).unwrap();
//! let hypernyms = parse_hypernyms(hypernyms.as_bytes(), &options).unwrap();
//!
//! assert_eq!(synsets[1].words().collect::<Vec<_>>(), ["dog", "domestic_dog"]);
//! assert_eq!(hypernyms[0].parents, vec![0]);
//! ```

mod error;
mod parser;
mod record;

pub use error::{ParseError, Result};
pub use parser::{
    parse_digraph, parse_hypernyms, parse_synsets, read_digraph, read_hypernyms, read_synsets,
    ParseOptions,
};
pub use record::{DigraphRecord, HypernymRecord, SynsetRecord, Vertex};
