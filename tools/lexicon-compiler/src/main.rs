use anyhow::{ensure, Context};
use clap::Parser;
use genus_protocol::NounLexicon;
use log::warn;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Compiles a JSON noun-pair list to an rkyv lexicon")]
struct Cli {
    /// JSON file of the form {"version": 1, "pairs": [{"masculine": ..., "feminine": ...}]}
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    println!("📖 Reading JSON from {:?}...", cli.input);
    let input_data =
        fs::read_to_string(&cli.input).with_context(|| format!("cannot read {}", cli.input.display()))?;

    let lexicon = parse_lexicon(&input_data)?;
    for lemma in duplicate_lemmas(&lexicon) {
        warn!("duplicate masculine lemma '{}', first pair wins", lemma);
    }

    println!("⚙️  Compiling lexicon version {} with {} pairs...", lexicon.version, lexicon.pairs.len());

    // Serialize to rkyv
    let bytes = lexicon.to_bytes()?;

    // Write binary
    fs::write(&cli.output, &bytes).with_context(|| format!("cannot write {}", cli.output.display()))?;

    println!("✅ Success! Binary written to {:?}", cli.output);
    Ok(())
}

/// Deserializes the JSON list and rejects unsupported versions and empty lemmas.
fn parse_lexicon(json: &str) -> anyhow::Result<NounLexicon> {
    let lexicon: NounLexicon = serde_json::from_str(json).context("invalid lexicon JSON")?;
    ensure!(
        lexicon.version == NounLexicon::VERSION,
        "lexicon version {} is not supported (expected {})",
        lexicon.version,
        NounLexicon::VERSION
    );
    for pair in &lexicon.pairs {
        ensure!(
            !pair.masculine.trim().is_empty() && !pair.feminine.trim().is_empty(),
            "empty lemma in pair {:?}",
            pair
        );
    }
    Ok(lexicon)
}

/// Masculine lemmas already seen earlier in the list. Later duplicates are
/// dead entries at lookup time.
fn duplicate_lemmas(lexicon: &NounLexicon) -> Vec<&str> {
    let mut seen = HashSet::new();
    lexicon
        .pairs
        .iter()
        .filter(|pair| !seen.insert(pair.masculine.to_lowercase()))
        .map(|pair| pair.masculine.as_str())
        .collect()
}
