/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding Quite Ok Images
//!
//! [Format Specification](https://qoiformat.org/qoi-specification.pdf)
//!
//! Pixels are handled through the channel-order generic [`Pixel`]
//! type, so images stored as RGBA, ARGB, BGRA or ABGR in memory all
//! go through the same monomorphized codec loops.
//!
//! # Features
//! - Decoding and encoding
//! - Streaming encode into any [`std::io::Write`] sink
//! - Strict stream validation, corrupt or truncated input never
//!   yields a partial image
pub use colorspace::*;
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use image::*;
pub use options::*;
pub use pixel::*;

mod bytestream;
mod colorspace;
mod constants;
mod decoder;
mod encoder;
mod errors;
mod image;
mod options;
mod pixel;
