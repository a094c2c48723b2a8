use std::collections::HashSet;
use std::fs;
use std::io::{self, Read as _};
use std::path::PathBuf;

use clap::Parser;
use csmt::Csmt;
use csmt_types::{Key, Sha2Policy};
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Replays a whitespace-separated stream of `insert KEY`, `erase KEY`,
/// and `contains KEY` operations against the tree, cross-checking every
/// verdict and size against a reference set. Prints `PASSED` on a clean
/// run and fails loudly on the first divergence.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the operation script; read from stdin when omitted.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Replay operations verbatim instead of filtering duplicate
    /// inserts and absent-key erases before they reach the tree.
    #[arg(short, long)]
    raw: bool,
}

fn value_gen(key: Key) -> String {
    format!("VALUE{key}")
}

fn main() -> anyhow::Result<()> {
    let Cli { script, raw } = Cli::parse();

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let input = match script {
        Some(path) => {
            tracing::info!("replaying script `{}`...", path.display());

            fs::read_to_string(&path)?
        }
        None => {
            tracing::info!("replaying operations from stdin...");

            let mut buf = String::new();

            io::stdin().read_to_string(&mut buf)?;

            buf
        }
    };

    let mut tree = Csmt::<Sha2Policy>::new();
    let mut reference = HashSet::new();

    let mut tokens = input.split_whitespace();
    let mut op_index = 0usize;

    while let Some(op) = tokens.next() {
        let key: Key = tokens
            .next()
            .ok_or_else(|| anyhow::anyhow!("operation `{op}` at index {op_index} is missing its key"))?
            .parse()?;

        match op {
            "insert" => {
                if raw || !reference.contains(&key) {
                    tree.insert(key, value_gen(key).as_bytes());
                    reference.insert(key);
                }
            }
            "erase" => {
                if raw || reference.contains(&key) {
                    tree.erase(key);
                    reference.remove(&key);
                }
            }
            "contains" => {
                let tree_verdict = tree.contains(key);
                let reference_verdict = reference.contains(&key);

                if tree_verdict != reference_verdict {
                    tracing::error!(
                        "contains {key} diverged at index {op_index}: tree {tree_verdict}, reference {reference_verdict}",
                    );

                    anyhow::bail!("verdict divergence at operation {op_index}");
                }
            }
            other => anyhow::bail!("unknown operation `{other}` at index {op_index}"),
        }

        if tree.len() != reference.len() {
            tracing::error!(
                "size diverged at index {op_index}: tree {}, reference {}",
                tree.len(),
                reference.len(),
            );

            anyhow::bail!("size divergence at operation {op_index}");
        }

        op_index += 1;
    }

    if let Some(root) = tree.root_digest() {
        tracing::info!("final root `{}`...", hex::encode(root));
    }

    tracing::info!("replayed {op_index} operations over {} live keys", tree.len());

    println!("PASSED");

    Ok(())
}
