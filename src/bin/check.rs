/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Decode an encoded file and verify it matches the original collection.
//!
//! See `SPEC_FULL.md` §6.2 for the CLI surface.

use anyhow::{bail, Context, Result};
use bic::container::{EncodedFile, RawCollection};
use bic::codes::{Binary, CenteredMinimal, Code, LeftmostMinimal, MinimalBinaryCode};
use bic::Decoder;
use clap::Parser;
use log::{debug, error, info};
use std::path::PathBuf;

/// Decode an encoded file and verify it matches the original collection.
#[derive(Parser)]
struct Args {
    /// Minimal binary code the file was encoded with.
    #[arg(long, default_value_t = Code::CenteredMinimal)]
    code: Code,

    /// Encoded file (SPEC_FULL.md §4.7).
    encoded: PathBuf,

    /// Raw collection file the encoded file was produced from.
    collection: PathBuf,
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
    let encoded = EncodedFile::open(&args.encoded)
        .with_context(|| format!("reading {}", args.encoded.display()))?;
    let collection = RawCollection::open(&args.collection)
        .with_context(|| format!("reading {}", args.collection.display()))?;

    info!(
        "checking {} sequences with code '{}'",
        encoded.num_sequences, args.code
    );
    let mut decoder: Decoder<C> = Decoder::new(&encoded.words);
    let mut out = vec![0u32; encoded.universe as usize + 1];

    let mut mismatches = 0u32;
    for (i, expected) in collection.sequences().enumerate() {
        let n = decoder.decode(&mut out);
        if n != expected.len() {
            error!(
                "sequence {i}: decoded {n} integers but expected {}",
                expected.len()
            );
            mismatches += 1;
            continue;
        }
        if out[..n] != *expected {
            error!("sequence {i}: decoded values differ from the collection");
            mismatches += 1;
        }
        if i != 0 && i % 100_000 == 0 {
            debug!("checked {i} sequences");
        }
    }

    if mismatches > 0 {
        bail!("{mismatches} sequence(s) failed to check out");
    }
    info!(
        "everything good: {} sequences match",
        encoded.num_sequences
    );
    Ok(())
}
