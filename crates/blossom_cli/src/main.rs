use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use blossom_core::{
    optimal_bit_vector_size, optimal_num_hash, BloomFilter, Hash128, Hash64, Murmur128,
    Murmur64, DEFAULT_FALSE_POS_PROB,
};

#[derive(Parser)]
#[command(name = "blossom", about = "Blossom CLI — Bloom filter & murmur3 ops")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the murmur3 digest of a string as hex
    Hash {
        input: String,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// 64-bit digest instead of the full 128 bits
        #[arg(long)]
        x64: bool,
        /// Treat INPUT as a path and hash the file contents
        #[arg(long)]
        file: bool,
    },

    /// Optimal bit-vector size and hash count for an expected load
    Sizing {
        #[arg(long)]
        items: u64,
        #[arg(long, default_value_t = DEFAULT_FALSE_POS_PROB)]
        fp: f64,
        #[arg(long)]
        json: bool,
    },

    /// Build a filter from a newline-delimited item file and probe it
    Probe {
        #[arg(long)]
        items_file: PathBuf,
        #[arg(long, default_value_t = DEFAULT_FALSE_POS_PROB)]
        fp: f64,
        probes: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Hash { input, seed, x64, file } => {
            let data = if file {
                fs::read(&input).with_context(|| format!("reading {input}"))?
            } else {
                input.into_bytes()
            };
            if x64 {
                let mut h = Murmur64::with_seed(seed);
                h.write(&data)?;
                println!("{}", hex::encode(h.sum_bytes()));
            } else {
                let mut h = Murmur128::with_seed(seed);
                h.write(&data)?;
                println!("{}", hex::encode(h.sum_bytes()));
            }
        }

        Cmd::Sizing { items, fp, json } => {
            let m = optimal_bit_vector_size(items, fp)?;
            let k = optimal_num_hash(m, items)?;
            if json {
                let report = serde_json::json!({
                    "items": items,
                    "fp": fp,
                    "m": m,
                    "k": k,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("m = {m} bits, k = {k} hashes");
            }
        }

        Cmd::Probe { items_file, fp, probes } => {
            let content = fs::read_to_string(&items_file)
                .with_context(|| format!("reading {}", items_file.display()))?;
            let items: Vec<&str> = content.lines().filter(|l| !l.is_empty()).collect();
            ensure!(!items.is_empty(), "no items in {}", items_file.display());

            let mut bf = BloomFilter::new(items.len() as u64, fp)?;
            for item in &items {
                bf.set(item.as_bytes())?;
            }
            tracing::info!(items = items.len(), "filter built");

            println!("{bf}");
            println!("approx cardinality: {:.1}", bf.approximate_cardinality());
            for probe in &probes {
                let verdict = if bf.includes(probe.as_bytes())? {
                    "probably present"
                } else {
                    "definitely absent"
                };
                println!("{probe}: {verdict}");
            }
        }
    }

    Ok(())
}
