/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::colorspace::{ColorCharacteristics, ColorChannels};
use crate::pixel::{ChannelOrder, Pixel};

/// An uncompressed image, the encoder's input and the decoder's output.
///
/// The pixel buffer length must equal `width * height`, the encoder
/// refuses anything else. The channel and colorspace tags are carried
/// into the header unchanged, the codec does not interpret them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QoiImage<O: ChannelOrder> {
    pub width:      u32,
    pub height:     u32,
    pub channels:   ColorChannels,
    pub colorspace: ColorCharacteristics,
    pub pixels:     Vec<Pixel<O>>
}

impl<O: ChannelOrder> QoiImage<O> {
    /// Number of pixels the dimensions promise.
    ///
    /// # Panics
    /// In case `width * height` overflows a usize, possible on
    /// 32 bit targets
    pub fn pixel_count(&self) -> usize {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .unwrap()
    }
}
