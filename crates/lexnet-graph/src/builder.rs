//! Taxonomy builder.
//!
//! Collects synset and hypernym records, then validates and assembles them
//! in a single `build` step. A taxonomy only exists once every invariant
//! holds:
//!
//! 1. synset ids are unique and dense in `[0, V)`, each with member words
//! 2. every hypernym id refers to a synset
//! 3. the hypernym graph is acyclic
//! 4. exactly one synset has no hypernym record (the root)
//! 5. no other synset is a sink, so every synset reaches the root

use crate::cycle::CycleDetector;
use crate::digraph::{Digraph, Vertex};
use crate::error::{GraphResult, InvalidTaxonomy};
use crate::taxonomy::Taxonomy;
use crate::word_index::WordIndex;
use lexnet_core::{HypernymRecord, SynsetRecord};
use tracing::{debug, info, warn};

/// Builds a [`Taxonomy`] from parsed records.
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    synsets: Vec<SynsetRecord>,
    hypernyms: Vec<HypernymRecord>,
}

impl TaxonomyBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds synset records. Order does not matter.
    pub fn add_synsets<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = SynsetRecord>,
    {
        self.synsets.extend(records);
        self
    }

    /// Adds hypernym records. Parents become edges in the order given.
    pub fn add_hypernyms<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = HypernymRecord>,
    {
        self.hypernyms.extend(records);
        self
    }

    /// Validates the records and returns the finished taxonomy.
    pub fn build(self) -> GraphResult<Taxonomy> {
        let result = self.assemble();
        if let Err(e) = &result {
            warn!("Rejected taxonomy: {}", e);
        }
        result
    }

    fn assemble(self) -> GraphResult<Taxonomy> {
        let synsets = order_synsets(self.synsets)?;
        let count = synsets.len();

        // Edges, plus which synsets are the subject of some hypernym record
        let mut graph = Digraph::new(count);
        let mut has_record = vec![false; count];
        for record in &self.hypernyms {
            if let Some(&id) = std::iter::once(&record.id)
                .chain(&record.parents)
                .find(|&&id| id >= count)
            {
                return Err(InvalidTaxonomy::HypernymOutOfRange { id, count }.into());
            }
            has_record[record.id] = true;
            for &parent in &record.parents {
                graph.add_edge(record.id, parent)?;
            }
        }
        debug!(
            "Hypernym graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        if let Some(cycle) = CycleDetector::new(&graph).into_cycle() {
            return Err(InvalidTaxonomy::Cyclic { cycle }.into());
        }

        let roots: Vec<Vertex> = (0..count).filter(|&v| !has_record[v]).collect();
        let root = match roots.as_slice() {
            [root] => *root,
            _ => return Err(InvalidTaxonomy::NotRooted { roots }.into()),
        };

        if let Some(vertex) = (0..count).find(|&v| v != root && graph.neighbors(v).is_empty()) {
            return Err(InvalidTaxonomy::UnreachableRoot { vertex }.into());
        }

        let mut words = WordIndex::new();
        for record in &synsets {
            for word in record.words() {
                words.insert(word, record.id);
            }
        }

        info!(
            "Built taxonomy: {} synsets, {} hypernym edges, {} nouns, root {}",
            count,
            graph.edge_count(),
            words.len(),
            root
        );

        let (members, glosses) = synsets
            .into_iter()
            .map(|record| (record.members, record.gloss))
            .unzip();

        Ok(Taxonomy::from_parts(graph, words, members, glosses, root))
    }
}

/// Places every synset at its id, checking ids are dense and unique.
fn order_synsets(records: Vec<SynsetRecord>) -> GraphResult<Vec<SynsetRecord>> {
    let count = records.len();
    let mut slots: Vec<Option<SynsetRecord>> = vec![None; count];

    for record in records {
        if record.id >= count {
            return Err(InvalidTaxonomy::SynsetOutOfRange {
                id: record.id,
                count,
            }
            .into());
        }
        if record.words().next().is_none() {
            return Err(InvalidTaxonomy::EmptySynset(record.id).into());
        }
        let id = record.id;
        let slot = &mut slots[id];
        if slot.is_some() {
            return Err(InvalidTaxonomy::DuplicateSynset(id).into());
        }
        *slot = Some(record);
    }

    // `count` unique ids below `count` fill every slot
    Ok(slots.into_iter().flatten().collect())
}
