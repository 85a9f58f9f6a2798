/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{b_of, short_codeword_count, MinimalBinaryCode};
use crate::bits::{BitSink, BitSource};

/// Minimal binary code with short codewords assigned to the first `c`
/// values `[0, c)` and long codewords to the rest.
///
/// `c = 2^(b+1) - r - 1` values get the `b`-bit short codeword; the
/// remaining `r + 1 - c` values get the `b + 1`-bit long codeword, formed by
/// writing `x + c` split across a `b`-bit prefix and a final disambiguating
/// bit.
pub struct LeftmostMinimal;

impl MinimalBinaryCode for LeftmostMinimal {
    #[inline]
    fn write(sink: &mut BitSink, x: u32, r: u32) {
        if r == 0 {
            debug_assert_eq!(x, 0);
            return;
        }
        debug_assert!(x <= r, "x = {x} exceeds r = {r}");
        let b = b_of(r);
        let c = short_codeword_count(r, b);
        if x < c {
            sink.append(x, b);
        } else {
            let y = x + c;
            sink.append(y >> 1, b);
            sink.append(y & 1, 1);
        }
    }

    #[inline]
    fn read(source: &mut BitSource, r: u32) -> u32 {
        if r == 0 {
            return 0;
        }
        let b = b_of(r);
        let c = short_codeword_count(r, b);
        let mut x = source.take(b);
        if x >= c {
            x = ((x << 1) | source.take(1)) - c;
        }
        debug_assert!(x <= r, "decoded x = {x} exceeds r = {r}");
        x
    }
}

/// Number of bits [`LeftmostMinimal`] spends encoding `x` in `[0, r]`.
#[must_use]
pub fn len_leftmost_minimal(x: u32, r: u32) -> u32 {
    if r == 0 {
        return 0;
    }
    let b = b_of(r);
    let c = short_codeword_count(r, b);
    if x < c {
        b
    } else {
        b + 1
    }
}
