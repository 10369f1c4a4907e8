//! Line parsers for the taxonomy text formats.
//!
//! All parsers accept any [`BufRead`] so they can run over files, in-memory
//! buffers, or stdin. Line numbers in errors are 1-based. Blank lines are
//! skipped everywhere.

use crate::error::{ParseError, Result};
use crate::record::{DigraphRecord, HypernymRecord, SynsetRecord, Vertex};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

/// Separators used by the synset and hypernym formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Separates the fields of a line (`id,members,gloss`).
    pub field_separator: char,
    /// Separates words inside the members field.
    pub member_separator: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            field_separator: ',',
            member_separator: ' ',
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Synsets
// ─────────────────────────────────────────────────────────────────────────────

/// Parses `id,members,gloss` lines.
///
/// Only the first two separators split fields, so glosses may contain the
/// separator themselves. A missing gloss is accepted and left empty.
pub fn parse_synsets<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Vec<SynsetRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, options.field_separator);
        let id = parse_vertex(fields.next().unwrap_or_default(), line_no)?;
        let members = fields
            .next()
            .ok_or_else(|| ParseError::malformed(line_no, "missing synset members"))?
            .trim();
        let gloss = fields.next().unwrap_or_default().trim();

        records.push(
            SynsetRecord::new(id, members, gloss).with_member_separator(options.member_separator),
        );
    }

    debug!("Parsed {} synset records", records.len());
    Ok(records)
}

/// Opens `path` and parses it with [`parse_synsets`].
pub fn read_synsets<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Vec<SynsetRecord>> {
    let file = File::open(path.as_ref())?;
    parse_synsets(BufReader::new(file), options)
}

// ─────────────────────────────────────────────────────────────────────────────
// Hypernyms
// ─────────────────────────────────────────────────────────────────────────────

/// Parses `id,parent,parent,...` lines.
///
/// A line holding only an id is a record without parents.
pub fn parse_hypernyms<R: BufRead>(
    reader: R,
    options: &ParseOptions,
) -> Result<Vec<HypernymRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        // Trailing separators carry no parent
        let line = line.trim_end().trim_end_matches(options.field_separator);
        let mut fields = line.split(options.field_separator);
        let id = parse_vertex(fields.next().unwrap_or_default(), line_no)?;
        let parents = fields
            .map(|field| parse_vertex(field, line_no))
            .collect::<Result<Vec<_>>>()?;

        records.push(HypernymRecord::new(id, parents));
    }

    debug!("Parsed {} hypernym records", records.len());
    Ok(records)
}

/// Opens `path` and parses it with [`parse_hypernyms`].
pub fn read_hypernyms<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<Vec<HypernymRecord>> {
    let file = File::open(path.as_ref())?;
    parse_hypernyms(BufReader::new(file), options)
}

// ─────────────────────────────────────────────────────────────────────────────
// Digraph edge lists
// ─────────────────────────────────────────────────────────────────────────────

/// Parses the edge-list digraph format: vertex count, edge count, then one
/// `v w` pair per edge. Tokens may be split across lines arbitrarily.
///
/// Edge endpoints are not range-checked here; `Digraph::add_edge` does that.
pub fn parse_digraph<R: BufRead>(reader: R) -> Result<DigraphRecord> {
    let mut tokens = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            tokens.push((index + 1, token.to_string()));
        }
    }

    let mut tokens = tokens.into_iter();
    let mut next = |what: &str| -> Result<Vertex> {
        let (line_no, token) = tokens
            .next()
            .ok_or_else(|| ParseError::UnexpectedEof(format!("expected {}", what)))?;
        parse_vertex(&token, line_no)
    };

    let vertex_count = next("vertex count")?;
    let edge_count = next("edge count")?;

    let mut edges = Vec::new();
    for _ in 0..edge_count {
        let from = next("edge source")?;
        let to = next("edge target")?;
        edges.push((from, to));
    }

    debug!(
        "Parsed digraph with {} vertices and {} edges",
        vertex_count,
        edges.len()
    );
    Ok(DigraphRecord {
        vertex_count,
        edges,
    })
}

/// Opens `path` and parses it with [`parse_digraph`].
pub fn read_digraph<P: AsRef<Path>>(path: P) -> Result<DigraphRecord> {
    let file = File::open(path.as_ref())?;
    parse_digraph(BufReader::new(file))
}

fn parse_vertex(field: &str, line: usize) -> Result<Vertex> {
    let field = field.trim();
    field
        .parse::<Vertex>()
        .map_err(|_| ParseError::malformed(line, format!("invalid vertex id {:?}", field)))
}
