/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Encode a raw posting-list collection with binary interpolative coding.
//!
//! See `SPEC_FULL.md` §6.2 for the CLI surface and §4.7 for the on-disk
//! formats consumed and produced here.

use anyhow::{Context, Result};
use bic::container::{EncodedFile, RawCollection};
use bic::codes::{Binary, CenteredMinimal, Code, LeftmostMinimal, MinimalBinaryCode};
use bic::Encoder;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Encode a raw posting-list collection with binary interpolative coding.
#[derive(Parser)]
struct Args {
    /// Minimal binary code to use.
    #[arg(long, default_value_t = Code::CenteredMinimal)]
    code: Code,

    /// Raw collection file (SPEC_FULL.md §4.7).
    input: PathBuf,

    /// Where to write the encoded file; if omitted, only statistics are printed.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    match args.code {
        Code::Binary => run::<Binary>(&args),
        Code::LeftmostMinimal => run::<LeftmostMinimal>(&args),
        Code::CenteredMinimal => run::<CenteredMinimal>(&args),
    }
}

fn run<C: MinimalBinaryCode>(args: &Args) -> Result<()> {
    let collection = RawCollection::open(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    info!("encoding with code '{}'", args.code);
    let mut encoder: Encoder<C> = Encoder::new();
    let mut num_sequences = 0u32;
    let mut encoded_ints = 0usize;
    for seq in collection.sequences() {
        encoder.encode(seq);
        encoded_ints += seq.len();
        num_sequences += 1;
        if num_sequences % 100_000 == 0 {
            debug!("encoded {num_sequences} sequences");
        }
    }

    info!("encoded {num_sequences} sequences, {encoded_ints} integers");
    if encoded_ints > 0 {
        let bits_per_int = encoder.num_bits() as f64 / encoded_ints as f64;
        info!("{bits_per_int:.3} bits x int");
    }

    if let Some(output) = &args.output {
        EncodedFile::write(output, collection.universe(), num_sequences, encoder.words())
            .with_context(|| format!("writing {}", output.display()))?;
        info!("wrote {}", output.display());
    }

    Ok(())
}
