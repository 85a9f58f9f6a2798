/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Bit-level I/O: an append-only [`BitSink`] and a forward-only [`BitSource`].
//!
//! Both operate purely on in-memory 32-bit word buffers: no I/O, no
//! fallible paths. File- or mmap-backed persistence lives outside this
//! module, in [`crate::container`].

mod sink;
mod source;

pub use sink::BitSink;
pub use source::BitSource;
