/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Decoder limits.
///
/// A hostile header can declare absurd dimensions and drive the
/// decoder into a huge allocation before a single op is read, these
/// limits bound what the decoder will accept.
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    max_width:  usize,
    max_height: usize
}

impl Default for DecoderOptions {
    fn default() -> DecoderOptions {
        DecoderOptions {
            max_width:  1 << 14,
            max_height: 1 << 14
        }
    }
}

impl DecoderOptions {
    /// Largest image width the decoder will accept.
    ///
    /// Default is 16384.
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Largest image height the decoder will accept.
    ///
    /// Default is 16384.
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
}
