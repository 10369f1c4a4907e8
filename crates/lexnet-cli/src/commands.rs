//! CLI command implementations.

use crate::config::{LexnetConfig, DEFAULT_CONFIG_FILE};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use lexnet_core::{read_digraph, read_hypernyms, read_synsets, ParseOptions};
use lexnet_graph::{Digraph, Outcast, ShortestAncestralPath, Taxonomy, Vertex};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::debug;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Write a default config file.
pub fn init(path: &Path) -> Result<()> {
    let config_path = path.join(DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::create_dir_all(path)?;
    fs::write(&config_path, LexnetConfig::default().to_json()?)?;

    println!("{} Wrote {}", "✓".green(), config_path.display());
    println!(
        "  Point {} and {} at your WordNet exports",
        "synsets".cyan(),
        "hypernyms".cyan()
    );

    Ok(())
}

/// Reads and validates the taxonomy named by `config`.
fn load_taxonomy(config: &LexnetConfig) -> Result<Taxonomy> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let load = || -> Result<Taxonomy> {
        let options = ParseOptions::default();

        spinner.set_message(format!("Reading {}...", config.synsets.display()));
        let synsets = read_synsets(&config.synsets, &options)?;

        spinner.set_message(format!("Reading {}...", config.hypernyms.display()));
        let hypernyms = read_hypernyms(&config.hypernyms, &options)?;

        spinner.set_message("Validating taxonomy...");
        Ok(Taxonomy::build(synsets, hypernyms)?)
    };
    let result = load();
    spinner.finish_and_clear();

    let taxonomy = result?;
    debug!(
        "Loaded {} synsets in {}ms",
        taxonomy.synset_count(),
        start.elapsed().as_millis()
    );
    Ok(taxonomy)
}

/// Show taxonomy statistics.
pub fn status(config: &LexnetConfig, json: bool) -> Result<()> {
    let taxonomy = load_taxonomy(config)?;
    let stats = taxonomy.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Lexnet Status".cyan().bold());
    println!();
    println!("  {} {}", "Synsets:".dimmed(), stats.synsets);
    println!("  {} {}", "Hypernym edges:".dimmed(), stats.hypernym_edges);
    println!("  {} {}", "Nouns:".dimmed(), stats.nouns);
    println!(
        "  {} {} ({})",
        "Root:".dimmed(),
        stats.root_synset.cyan(),
        stats.root
    );

    Ok(())
}

/// Print the distance between two nouns.
pub fn distance(config: &LexnetConfig, a: &str, b: &str) -> Result<()> {
    let taxonomy = load_taxonomy(config)?;
    let d = taxonomy.distance(a, b)?;
    debug!("distance({}, {}) = {}", a, b, d);

    println!("{}", d);
    Ok(())
}

/// Print the shortest-ancestral-path synset of two nouns.
pub fn ancestor(config: &LexnetConfig, a: &str, b: &str, show_path: bool, json: bool) -> Result<()> {
    let taxonomy = load_taxonomy(config)?;
    let found = taxonomy.ancestral_path(a, b)?;
    debug!("ancestor({}, {}) = {:?}", a, b, found);

    let label = |id: Vertex| taxonomy.synset(id).unwrap_or_default();

    if json {
        let path: Vec<_> = found
            .path
            .iter()
            .map(|&id| serde_json::json!({ "id": id, "synset": label(id) }))
            .collect();
        let output = serde_json::json!({
            "a": a,
            "b": b,
            "distance": found.length,
            "ancestor": {
                "id": found.ancestor,
                "synset": label(found.ancestor),
                "gloss": taxonomy.gloss(found.ancestor).unwrap_or_default(),
            },
            "path": path,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} {}",
        "length =".dimmed(),
        found.length,
        format!("ancestor = {}", label(found.ancestor)).cyan()
    );

    if show_path {
        println!();
        for &id in &found.path {
            let marker = if id == found.ancestor { "▲" } else { "·" };
            println!("  {} {} {}", marker.yellow(), label(id), format!("({})", id).dimmed());
        }
    }

    Ok(())
}

/// Print the outcast of every noun list file.
pub fn outcast(config: &LexnetConfig, files: &[PathBuf]) -> Result<()> {
    let taxonomy = load_taxonomy(config)?;
    let finder = Outcast::new(&taxonomy);

    for file in files {
        let text = fs::read_to_string(file)?;
        let nouns: Vec<&str> = text.split_whitespace().collect();

        match finder.outcast(&nouns)? {
            Some(noun) => println!("{}: {}", file.display(), noun.cyan()),
            None => println!("{}: {}", file.display(), "(empty)".dimmed()),
        }
    }

    Ok(())
}

/// Run raw SAP queries over a digraph file.
pub fn sap(digraph: &Path, pairs: &[String]) -> Result<()> {
    let graph = Digraph::from_record(&read_digraph(digraph)?)?;
    debug!(
        "Loaded digraph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let queries = if pairs.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        parse_stdin_pairs(&input)?
    } else {
        pairs
            .iter()
            .map(|pair| parse_pair(pair))
            .collect::<Result<Vec<_>>>()?
    };

    let engine = ShortestAncestralPath::new(&graph);
    for (v, w) in queries {
        let (length, ancestor) = match engine.shortest_path([v], [w])? {
            Some(found) => (found.length as i64, found.ancestor as i64),
            None => (-1, -1),
        };
        println!("length = {}, ancestor = {}", length, ancestor);
    }

    Ok(())
}

/// Print a digraph file as Graphviz DOT.
pub fn dot(digraph: &Path) -> Result<()> {
    print!("{}", render_dot(digraph)?);
    Ok(())
}

fn render_dot(digraph: &Path) -> Result<String> {
    let graph = Digraph::from_record(&read_digraph(digraph)?)?;
    debug!(
        "Rendering digraph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph.to_dot())
}

/// List nouns, or check a single word.
pub fn nouns(config: &LexnetConfig, limit: usize, check: Option<&str>) -> Result<()> {
    let taxonomy = load_taxonomy(config)?;

    if let Some(word) = check {
        if taxonomy.is_noun(word) {
            let ids = taxonomy.synsets_of(word)?;
            println!("{} {} is a noun ({} synsets)", "✓".green(), word.cyan(), ids.len());
            for &id in ids {
                println!(
                    "  {} {}",
                    taxonomy.synset(id).unwrap_or_default(),
                    format!("- {}", taxonomy.gloss(id).unwrap_or_default()).dimmed()
                );
            }
        } else {
            println!("{} {} is not a noun", "✗".red(), word.cyan());
        }
        return Ok(());
    }

    let mut all: Vec<&str> = taxonomy.nouns().collect();
    all.sort_unstable();

    println!("{} nouns, showing {}:\n", all.len(), limit.min(all.len()));
    for noun in all.iter().take(limit) {
        println!("  {}", noun);
    }

    Ok(())
}

/// Parses `v:w`.
fn parse_pair(pair: &str) -> Result<(Vertex, Vertex)> {
    let (v, w) = pair
        .split_once(':')
        .ok_or_else(|| format!("expected v:w, got {:?}", pair))?;
    Ok((v.trim().parse::<Vertex>()?, w.trim().parse::<Vertex>()?))
}

/// Parses whitespace-separated `v w` pairs.
fn parse_stdin_pairs(input: &str) -> Result<Vec<(Vertex, Vertex)>> {
    let numbers = input
        .split_whitespace()
        .map(|token| token.parse::<Vertex>())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if numbers.len() % 2 != 0 {
        return Err("odd number of vertex ids on stdin".into());
    }
    Ok(numbers.chunks(2).map(|pair| (pair[0], pair[1])).collect())
}
