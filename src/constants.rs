/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub const QOI_OP_INDEX: u8 = 0x00;
// 00xxxxxx
pub const QOI_OP_DIFF: u8 = 0x40;
// 01xxxxxx
pub const QOI_OP_LUMA: u8 = 0x80;
// 10xxxxxx
pub const QOI_OP_RUN: u8 = 0xc0;
// 11xxxxxx
pub const QOI_OP_RGB: u8 = 0xfe;
// 11111110
pub const QOI_OP_RGBA: u8 = 0xff; // 11111111

pub const QOI_MASK_2: u8 = 0xc0; // (11)000000

pub const QOI_MAGIC: u32 = u32::from_be_bytes(*b"qoif");
pub const QOI_HEADER_SIZE: usize = 14;
pub const QOI_PADDING: usize = 8;

/// The stream trailer, seven zero bytes followed by a single one.
pub const QOI_END_MARKER: [u8; QOI_PADDING] = [0, 0, 0, 0, 0, 0, 0, 1];

/// Longest run a single RUN op can carry.
///
/// The run payload has 6 bits but `0b11111110` and `0b11111111`
/// are taken by the RGB and RGBA ops, so the largest usable
/// payload is 61, i.e. a run of 62 pixels.
pub const QOI_MAX_RUN: u8 = 62;
