/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Number of channels the header declares for an image.
///
/// The codec itself always works on 4 byte pixels, this tag is
/// carried through so a caller knows whether alpha is meaningful.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorChannels {
    RGB,
    RGBA
}

impl ColorChannels {
    pub const fn num_components(self) -> usize {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4
        }
    }

    /// The byte written at header offset 12.
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4
        }
    }
}

/// Transfer characteristics flag carried in the header.
///
/// Not interpreted by the codec, only round tripped.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorCharacteristics {
    /// sRGB channels with linear alpha
    sRGB,
    /// All channels linear
    Linear
}

impl ColorCharacteristics {
    /// The byte written at header offset 13.
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::sRGB => 0,
            Self::Linear => 1
        }
    }
}
