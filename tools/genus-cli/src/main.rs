use anyhow::Context;
use clap::Parser;
use genus_engine::{adjust_gender, ConlluAnnotator};
use genus_morph::Transformer;
use genus_protocol::{NounLexicon, TargetGender};
use log::info;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Adjusts Russian text to the speaker's and addressee's gender")]
struct Cli {
    /// Dependency parse of the text in CoNLL-U
    #[arg(short, long, value_name = "FILE")]
    conllu: PathBuf,

    /// Text to rewrite; read from stdin when absent
    #[arg(short, long, value_name = "FILE", conflicts_with = "text_from_conllu")]
    input: Option<PathBuf>,

    /// Take the text from the `# text` comments of the CoNLL-U file
    #[arg(long)]
    text_from_conllu: bool,

    /// Make the speaker masculine (feminine otherwise)
    #[arg(long)]
    speaker_is_male: bool,

    /// Make the addressee masculine (feminine otherwise)
    #[arg(long)]
    addressee_is_male: bool,

    /// Compiled noun lexicon appended to the built-in pairs
    #[arg(short, long, value_name = "FILE")]
    lexicon: Option<PathBuf>,
}

fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    for line in io::stdin().lock().lines() {
        text.push_str(&line.context("cannot read stdin")?);
        text.push('\n');
    }
    Ok(text)
}

fn load_transformer(lexicon: Option<&Path>) -> anyhow::Result<Transformer> {
    let Some(path) = lexicon else {
        return Ok(Transformer::default());
    };
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let lexicon = NounLexicon::from_bytes(&bytes).with_context(|| format!("cannot load {}", path.display()))?;
    info!("loaded {} noun pairs from {}", lexicon.pairs.len(), path.display());
    Ok(Transformer::with_lexicon(&lexicon))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let conllu =
        fs::read_to_string(&cli.conllu).with_context(|| format!("cannot read {}", cli.conllu.display()))?;

    let text = if cli.text_from_conllu {
        genus_parser::document_text(&conllu)?.context("a sentence has no `# text` comment")?
    } else if let Some(path) = &cli.input {
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?
    } else {
        read_stdin()?
    };

    let transformer = load_transformer(cli.lexicon.as_deref())?;
    let annotator = ConlluAnnotator::new(conllu);

    let output = adjust_gender(
        &text,
        &annotator,
        &transformer,
        TargetGender::from_flag(cli.speaker_is_male),
        TargetGender::from_flag(cli.addressee_is_male),
    )?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    stdout.flush()?;
    Ok(())
}
