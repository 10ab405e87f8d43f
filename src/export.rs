//! Lexicon export — TSV and JSON.
//!
//! ```text
//! Lexicon → export_tsv()  → "# polarity-rs lexicon" header + item<TAB>score lines
//!         → export_json() → {"generated_at": .., "stats": {..}, "scores": {..}}
//! ```

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::*;
use crate::Result;

/// Write the lexicon as tab-separated `item<TAB>score` lines, strongest
/// positive first, preceded by a commented header with run statistics.
pub fn export_tsv(lexicon: &Lexicon, writer: &mut dyn Write) -> Result<()> {
    let stats = &lexicon.stats;

    // Header
    writeln!(writer, "# polarity-rs lexicon")?;
    writeln!(writer, "# Generated: {}", Utc::now().to_rfc3339())?;
    writeln!(
        writer,
        "# Seeds: {} positive, {} negative",
        stats.positive_results, stats.negative_results
    )?;
    writeln!(writer, "# Beta: {}", stats.beta)?;
    writeln!(
        writer,
        "# Entries: {} of {} ({} below threshold)",
        lexicon.len(),
        stats.vocabulary_size,
        stats.omitted
    )?;

    for (item, score) in lexicon.ranked() {
        writeln!(writer, "{}\t{}", escape_item(item), score)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    generated_at: DateTime<Utc>,
    stats: &'a LexiconStats,
    scores: &'a hashbrown::HashMap<String, f64>,
}

/// Write the lexicon and its statistics as a JSON document.
pub fn export_json(lexicon: &Lexicon, writer: &mut dyn Write) -> Result<()> {
    let doc = JsonDocument {
        generated_at: Utc::now(),
        stats: &lexicon.stats,
        scores: &lexicon.scores,
    };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

/// Tabs and newlines inside an item would break the line format.
fn escape_item(item: &str) -> String {
    let escaped = item.replace('\\', "\\\\").replace('\t', "\\t").replace('\n', "\\n");
    // A leading '#' would read back as a header comment.
    if escaped.starts_with('#') {
        format!("\\{escaped}")
    } else {
        escaped
    }
}
