/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Decode every sequence in an encoded file and report throughput.
//!
//! See `SPEC_FULL.md` §6.2 for the CLI surface.

use anyhow::{Context, Result};
use bic::container::EncodedFile;
use bic::codes::{Binary, CenteredMinimal, Code, LeftmostMinimal, MinimalBinaryCode};
use bic::Decoder;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Decode every sequence in an encoded file and report throughput.
#[derive(Parser)]
struct Args {
    /// Minimal binary code the file was encoded with.
    #[arg(long, default_value_t = Code::CenteredMinimal)]
    code: Code,

    /// Encoded file (SPEC_FULL.md §4.7).
    input: PathBuf,
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
    let file = EncodedFile::open(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    info!(
        "decoding {} sequences with code '{}'",
        file.num_sequences, args.code
    );
    let mut decoder: Decoder<C> = Decoder::new(&file.words);
    let mut out = vec![0u32; file.universe as usize + 1];

    let start = Instant::now();
    let mut decoded_ints = 0usize;
    for i in 0..file.num_sequences {
        let n = decoder.decode(&mut out);
        decoded_ints += n;
        if i != 0 && i % 100_000 == 0 {
            debug!("decoded {i} sequences");
        }
    }
    let elapsed = start.elapsed();

    info!(
        "decoded {decoded_ints} integers in {:.3}s",
        elapsed.as_secs_f64()
    );
    if decoded_ints > 0 {
        info!(
            "{:.1} ns/int, {:.3} bits x int",
            elapsed.as_nanos() as f64 / decoded_ints as f64,
            file.words.len() as f64 * 32.0 / decoded_ints as f64
        );
    }
    Ok(())
}
