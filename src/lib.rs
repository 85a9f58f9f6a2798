/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]

//! Binary interpolative coding of strictly increasing `u32` sequences.
//!
//! The core is [`Encoder`]/[`Decoder`], generic over one of three
//! interchangeable [`codes::MinimalBinaryCode`] back-ends
//! ([`codes::Binary`], [`codes::LeftmostMinimal`],
//! [`codes::CenteredMinimal`]). [`bits::BitSink`]/[`bits::BitSource`] are
//! the in-memory bit streams they read and write. [`container`] holds the
//! on-disk formats used by the `encode`/`decode`/`check` binaries; it is
//! driver support, not part of the codec itself.

pub mod bits;
pub mod codes;
pub mod container;
pub mod interpolative;

pub use interpolative::{Decoder, Encoder};

/// Re-exports the whole public surface for glob-importing.
pub mod prelude {
    pub use crate::bits::*;
    pub use crate::codes::*;
    pub use crate::container::*;
    pub use crate::{Decoder, Encoder};
}
