/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

/// Possible errors that may occur during decoding
///
/// Every variant is terminal, a failed decode leaves no usable
/// partial output behind.
pub enum QoiErrors {
    /// The stream does not start with the magic bytes `qoif`
    ///
    /// Indicates the input is not a qoi file at all
    InvalidQoiHeader,
    /// The header carries a field the format does not allow
    ///
    /// Channels must be 3 or 4, colorspace 0 or 1, and the
    /// dimensions must fit the configured decoder limits
    InvalidValueInHeader(String),
    /// An op would produce more pixels than `width * height`
    ///
    /// The stream is corrupt or lies about its dimensions
    ReadingMorePixels,
    /// The stream ended, or failed to end with the mandatory
    /// trailer of seven zero bytes and a single one
    MissingEndBytes
}

impl Debug for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QoiErrors::InvalidQoiHeader => {
                writeln!(f, "Wrong magic bytes, expected `qoif` as image start")
            }
            QoiErrors::InvalidValueInHeader(reason) => {
                writeln!(f, "Invalid value in header: {reason}")
            }
            QoiErrors::ReadingMorePixels => {
                writeln!(
                    f,
                    "Op would write past the pixel count declared in the header"
                )
            }
            QoiErrors::MissingEndBytes => {
                writeln!(f, "Stream end marker is missing or corrupt")
            }
        }
    }
}

impl Display for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for QoiErrors {}

/// Errors encountered during encoding
pub enum QoiEncodeErrors {
    /// The pixel buffer length does not equal `width * height`
    ///
    /// # Arguments
    /// - 1st argument is the pixel count the dimensions promise
    /// - 2nd argument is the length of the buffer actually given
    DimensionsMismatchPixelsLength(usize, usize),

    /// The output sink failed
    IoError(std::io::Error)
}

impl Debug for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QoiEncodeErrors::DimensionsMismatchPixelsLength(expected, found) => {
                writeln!(
                    f,
                    "Dimensions promise {expected} pixels but the buffer holds {found}"
                )
            }
            QoiEncodeErrors::IoError(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for QoiEncodeErrors {}

impl From<std::io::Error> for QoiEncodeErrors {
    fn from(err: std::io::Error) -> Self {
        QoiEncodeErrors::IoError(err)
    }
}
