/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{b_of, short_codeword_count, MinimalBinaryCode};
use crate::bits::{BitSink, BitSource};

/// Minimal binary code with short codewords assigned to a centered interval
/// around `r / 2`, and long codewords to the two tails.
///
/// Favors sequences whose values cluster near the middle of `[0, r]`
/// (the typical shape of an interpolative-coding subproblem over a
/// roughly uniform ordered set) by spending the shorter codewords where
/// the mass actually is, rather than at the low end as
/// [`super::LeftmostMinimal`] does.
pub struct CenteredMinimal;

/// Returns `(b, lo, hi)`: the short-codeword bit width and the open
/// interval `(lo, hi)` of values that get it. Requires `r >= 1`.
#[inline]
fn bounds(r: u32) -> (u32, i64, i64) {
    let b = b_of(r);
    let c = i64::from(short_codeword_count(r, b));
    let half_c = c / 2;
    let half_r = i64::from(r) / 2;
    let mut lo = half_r - half_c;
    let hi = half_r + half_c + 1;
    if r % 2 == 0 {
        lo -= 1;
    }
    (b, lo, hi)
}

impl MinimalBinaryCode for CenteredMinimal {
    #[inline]
    fn write(sink: &mut BitSink, x: u32, r: u32) {
        if r == 0 {
            debug_assert_eq!(x, 0);
            return;
        }
        debug_assert!(x <= r, "x = {x} exceeds r = {r}");
        let (b, lo, hi) = bounds(r);
        let xi = i64::from(x);
        if lo < xi && xi < hi {
            sink.append(x, b);
        } else {
            sink.append(x, b + 1);
        }
    }

    #[inline]
    fn read(source: &mut BitSource, r: u32) -> u32 {
        if r == 0 {
            return 0;
        }
        let (b, lo, _hi) = bounds(r);
        let mut x = source.take(b);
        if i64::from(x) <= lo {
            x += source.take(1) << b;
        }
        debug_assert!(x <= r, "decoded x = {x} exceeds r = {r}");
        x
    }
}

/// Number of bits [`CenteredMinimal`] spends encoding `x` in `[0, r]`.
#[must_use]
pub fn len_centered_minimal(x: u32, r: u32) -> u32 {
    if r == 0 {
        return 0;
    }
    let (b, lo, hi) = bounds(r);
    let xi = i64::from(x);
    if lo < xi && xi < hi {
        b
    } else {
        b + 1
    }
}
