/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! On-disk container formats used by the `encode`/`decode`/`check` driver
//! tools (`spec.md` §6). Not part of the compression core: the core only
//! ever sees in-memory `&[u32]` slices, produced and consumed here.
//!
//! Both formats are sequences of 32-bit **little-endian** words; words are
//! always converted explicitly with `from_le_bytes`/`to_le_bytes` rather
//! than reinterpreted in place, so behavior stays correct on big-endian
//! hosts too (`spec.md` §9, "Alignment & endianness"). Reading is done
//! through a memory map, grounded on `original_source`'s `mm_file.hpp`.

use anyhow::{bail, Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn words_from_le_bytes(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        bail!("file length {} is not a multiple of 4 bytes", bytes.len());
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes(chunk.try_into().unwrap()))
        .collect())
}

fn mmap_words(path: &Path) -> Result<Vec<u32>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    // SAFETY: the file is only read for the lifetime of this call and is
    // not concurrently modified by this process.
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("memory-mapping {}", path.display()))?;
    words_from_le_bytes(&mmap)
}

fn write_words(path: &Path, words: impl Iterator<Item = u32>) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for word in words {
        out.write_all(&word.to_le_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// The raw, uncompressed collection format: `[1, universe, (n, v_0..v_n-1)*]`.
///
/// The leading `1` is a format tag (`spec.md` §6); `universe` is the global
/// maximum over all sequences.
pub struct RawCollection {
    words: Vec<u32>,
}

impl RawCollection {
    const TAG: u32 = 1;

    /// Memory-maps and validates `path` as a raw collection file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let words = mmap_words(path.as_ref())?;
        if words.len() < 2 {
            bail!("{} is too short to contain a header", path.as_ref().display());
        }
        if words[0] != Self::TAG {
            bail!(
                "{} has tag {}, expected {}",
                path.as_ref().display(),
                words[0],
                Self::TAG
            );
        }
        Ok(Self { words })
    }

    /// Writes a raw collection file from explicit sequences. Used by test
    /// fixtures and by tools that produce the raw format in the first
    /// place (not part of the `encode`/`decode`/`check` CLI surface).
    pub fn write<'a>(
        path: impl AsRef<Path>,
        universe: u32,
        sequences: impl IntoIterator<Item = &'a [u32]>,
    ) -> Result<()> {
        let mut words = vec![Self::TAG, universe];
        for seq in sequences {
            words.push(seq.len() as u32);
            words.extend_from_slice(seq);
        }
        write_words(path.as_ref(), words.into_iter())
    }

    /// The global maximum over all contained sequences.
    #[must_use]
    pub fn universe(&self) -> u32 {
        self.words[1]
    }

    /// The sequences, in file order.
    #[must_use]
    pub fn sequences(&self) -> RawSequences<'_> {
        RawSequences {
            words: &self.words[2..],
        }
    }
}

/// Iterator over the sequences in a [`RawCollection`].
pub struct RawSequences<'a> {
    words: &'a [u32],
}

impl<'a> Iterator for RawSequences<'a> {
    type Item = &'a [u32];

    fn next(&mut self) -> Option<&'a [u32]> {
        let (&n, rest) = self.words.split_first()?;
        let (seq, rest) = rest.split_at(n as usize);
        self.words = rest;
        Some(seq)
    }
}

/// The encoded-file format: `[universe, num_sequences, <encoder word
/// buffer, concatenated>]`. There is no per-sequence framing beyond what
/// each sequence's own `universe`/`n` header (written by [`crate::Encoder`])
/// already provides; a [`crate::Decoder`] re-derives boundaries purely by
/// reading those headers, in order.
pub struct EncodedFile {
    pub universe: u32,
    pub num_sequences: u32,
    pub words: Vec<u32>,
}

impl EncodedFile {
    /// Memory-maps `path` and splits off the two-word header.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut words = mmap_words(path.as_ref())?;
        if words.len() < 2 {
            bail!("{} is too short to contain a header", path.as_ref().display());
        }
        let universe = words[0];
        let num_sequences = words[1];
        words.drain(..2);
        Ok(Self {
            universe,
            num_sequences,
            words,
        })
    }

    /// Writes `universe`, `num_sequences` and the raw encoder word buffer.
    pub fn write(path: impl AsRef<Path>, universe: u32, num_sequences: u32, words: &[u32]) -> Result<()> {
        let header = [universe, num_sequences].into_iter();
        write_words(path.as_ref(), header.chain(words.iter().copied()))
    }
}
