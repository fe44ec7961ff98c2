/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::marker::PhantomData;

/// Byte positions of the r,g,b,a components inside a stored pixel.
///
/// Implemented by zero sized marker types so the codec loops are
/// monomorphized per layout and carry no per-pixel branching.
pub trait ChannelOrder: Copy + Eq + core::fmt::Debug {
    const R: usize;
    const G: usize;
    const B: usize;
    const A: usize;
}

/// Red, green, blue, alpha layout.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RGBA;

/// Alpha first layout.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ARGB;

/// Blue, green, red, alpha layout.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BGRA;

/// Alpha, blue, green, red layout.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ABGR;

impl ChannelOrder for RGBA {
    const R: usize = 0;
    const G: usize = 1;
    const B: usize = 2;
    const A: usize = 3;
}

impl ChannelOrder for ARGB {
    const R: usize = 1;
    const G: usize = 2;
    const B: usize = 3;
    const A: usize = 0;
}

impl ChannelOrder for BGRA {
    const R: usize = 2;
    const G: usize = 1;
    const B: usize = 0;
    const A: usize = 3;
}

impl ChannelOrder for ABGR {
    const R: usize = 3;
    const G: usize = 2;
    const B: usize = 1;
    const A: usize = 0;
}

/// A four byte pixel stored under the channel order `O`,
/// semantically always r,g,b,a.
///
/// Equality is exact 32 bit identity of the stored bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel<O: ChannelOrder> {
    bytes:    [u8; 4],
    ordering: PhantomData<O>
}

impl<O: ChannelOrder> Pixel<O> {
    /// Create a pixel from its semantic r,g,b,a values,
    /// storing them under the layout `O`.
    #[allow(clippy::redundant_field_names)]
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Pixel<O> {
        let mut bytes = [0; 4];
        bytes[O::R] = r;
        bytes[O::G] = g;
        bytes[O::B] = b;
        bytes[O::A] = a;

        Pixel {
            bytes:    bytes,
            ordering: PhantomData
        }
    }

    /// The all zero pixel used to fill the codec cache table.
    ///
    /// This is a table sentinel, never a valid decoded default.
    #[inline]
    pub const fn zero() -> Pixel<O> {
        Pixel {
            bytes:    [0; 4],
            ordering: PhantomData
        }
    }

    #[inline]
    pub const fn r(&self) -> u8 {
        self.bytes[O::R]
    }

    #[inline]
    pub const fn g(&self) -> u8 {
        self.bytes[O::G]
    }

    #[inline]
    pub const fn b(&self) -> u8 {
        self.bytes[O::B]
    }

    #[inline]
    pub const fn a(&self) -> u8 {
        self.bytes[O::A]
    }

    /// Components in r,g,b,a order, whatever the storage layout.
    #[inline]
    pub const fn to_rgba(&self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Components in r,g,b order, alpha dropped.
    #[inline]
    pub const fn to_rgb(&self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    /// Slot this pixel hashes to in the 64 entry codec cache.
    ///
    /// `(r*3 + g*5 + b*7 + a*11) % 64` in wrapping 8 bit arithmetic,
    /// shared verbatim by the encoder and the decoder, round tripping
    /// breaks if the two sides ever disagree here.
    #[inline]
    pub const fn cache_index(&self) -> usize {
        let hash = self
            .r()
            .wrapping_mul(3)
            .wrapping_add(self.g().wrapping_mul(5))
            .wrapping_add(self.b().wrapping_mul(7))
            .wrapping_add(self.a().wrapping_mul(11));

        (hash % 64) as usize
    }
}

#[cfg(test)]
mod tests {
    use crate::pixel::{Pixel, ABGR, ARGB, BGRA, RGBA};

    #[test]
    fn test_layouts_agree_on_semantic_channels() {
        let rgba = Pixel::<RGBA>::new(1, 2, 3, 4);
        let argb = Pixel::<ARGB>::new(1, 2, 3, 4);
        let bgra = Pixel::<BGRA>::new(1, 2, 3, 4);
        let abgr = Pixel::<ABGR>::new(1, 2, 3, 4);

        assert_eq!(rgba.to_rgba(), [1, 2, 3, 4]);
        assert_eq!(argb.to_rgba(), [1, 2, 3, 4]);
        assert_eq!(bgra.to_rgba(), [1, 2, 3, 4]);
        assert_eq!(abgr.to_rgba(), [1, 2, 3, 4]);

        assert_eq!(bgra.to_rgb(), [1, 2, 3]);
    }

    #[test]
    fn test_cache_index_is_layout_independent() {
        let rgba = Pixel::<RGBA>::new(0x12, 0x34, 0x56, 0xFF);
        let abgr = Pixel::<ABGR>::new(0x12, 0x34, 0x56, 0xFF);

        assert_eq!(rgba.cache_index(), abgr.cache_index());
        assert!(rgba.cache_index() < 64);
    }

    #[test]
    fn test_cache_index_wraps_in_u8() {
        // 255*(3+5+7+11) = 6630, must be reduced mod 256 before mod 64
        let px = Pixel::<RGBA>::new(255, 255, 255, 255);
        assert_eq!(px.cache_index(), usize::from(6630_u16 as u8 % 64));
    }
}
