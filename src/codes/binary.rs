/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{b_of, MinimalBinaryCode};
use crate::bits::{BitSink, BitSource};

/// Fixed-width minimal binary code: always writes `⌊log₂ r⌋ + 1` bits.
///
/// No branching, no savings over a plain binary encoding of `r`. Used as
/// the baseline the two other codes are expected to beat on non-uniform
/// ranges.
pub struct Binary;

impl MinimalBinaryCode for Binary {
    #[inline]
    fn write(sink: &mut BitSink, x: u32, r: u32) {
        if r == 0 {
            debug_assert_eq!(x, 0);
            return;
        }
        debug_assert!(x <= r, "x = {x} exceeds r = {r}");
        sink.append(x, b_of(r) + 1);
    }

    #[inline]
    fn read(source: &mut BitSource, r: u32) -> u32 {
        if r == 0 {
            return 0;
        }
        let x = source.take(b_of(r) + 1);
        debug_assert!(x <= r, "decoded x = {x} exceeds r = {r}");
        x
    }
}

/// Number of bits [`Binary`] spends encoding any `x` in `[0, r]`.
#[must_use]
pub fn len_binary(r: u32) -> u32 {
    if r == 0 {
        0
    } else {
        b_of(r) + 1
    }
}
