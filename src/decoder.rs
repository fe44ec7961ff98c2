/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::marker::PhantomData;

use log::trace;

use crate::bytestream::ByteReader;
use crate::colorspace::{ColorCharacteristics, ColorChannels};
use crate::constants::{QOI_END_MARKER, QOI_MASK_2, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA};
use crate::errors::QoiErrors;
use crate::image::QoiImage;
use crate::options::DecoderOptions;
use crate::pixel::{ChannelOrder, Pixel};

/// A Quite OK Image decoder
///
/// The decoder is initialized by calling `new` and either of
/// [`decode_headers`] to decode headers or [`decode`] to return
/// the uncompressed image.
///
/// Additional methods give details of the compressed image, width,
/// height and the header tags are accessible after decoding headers.
///
/// [`decode_headers`]:QoiDecoder::decode_headers
/// [`decode`]:QoiDecoder::decode
pub struct QoiDecoder<'a, O: ChannelOrder> {
    width:           usize,
    height:          usize,
    channels:        ColorChannels,
    colorspace:      ColorCharacteristics,
    decoded_headers: bool,
    stream:          ByteReader<'a>,
    options:         DecoderOptions,
    ordering:        PhantomData<O>
}

impl<'a, O: ChannelOrder> QoiDecoder<'a, O> {
    /// Create a new QOI format decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The compressed qoi data
    ///
    /// # Example
    ///
    /// ```no_run
    /// use qoix::{QoiDecoder, RGBA};
    /// let mut decoder = QoiDecoder::<RGBA>::new(&[]);
    /// // additional code
    /// ```
    pub fn new(data: &'a [u8]) -> QoiDecoder<'a, O> {
        QoiDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new QOI format decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Example
    /// ```
    /// use qoix::{DecoderOptions, QoiDecoder, RGBA};
    /// // only decode images less than 10 in both width and height
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = QoiDecoder::<RGBA>::new_with_options(&[], options);
    /// ```
    #[allow(clippy::redundant_field_names)]
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> QoiDecoder<'a, O> {
        QoiDecoder {
            width:           0,
            height:          0,
            channels:        ColorChannels::RGBA,
            colorspace:      ColorCharacteristics::sRGB,
            decoded_headers: false,
            stream:          ByteReader::new(data),
            options:         options,
            ordering:        PhantomData
        }
    }

    /// Decode a QOI header storing needed information into
    /// the decoder instance
    ///
    /// Idempotent, a second call is a no-op.
    ///
    /// # Returns
    ///
    /// - On success: Nothing
    /// - On error: The error encountered when decoding headers,
    ///     an instance of [QoiErrors]
    ///
    /// [QoiErrors]:crate::errors::QoiErrors
    pub fn decode_headers(&mut self) -> Result<(), QoiErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        // match magic bytes.
        if !self.stream.has(4) {
            return Err(QoiErrors::InvalidQoiHeader);
        }
        let magic = self.stream.get_fixed_bytes_or_zero::<4>();

        if &magic != b"qoif" {
            return Err(QoiErrors::InvalidQoiHeader);
        }

        if !self.stream.has(10) {
            return Err(QoiErrors::InvalidValueInHeader(
                "header truncated before dimensions and tags".to_string()
            ));
        }
        // confirmed to be in bounds above, use the non failing routines
        let width = self.stream.get_u32_be() as usize;
        let height = self.stream.get_u32_be() as usize;
        let channels = self.stream.get_u8();
        let colorspace = self.stream.get_u8();

        if width > self.options.max_width() {
            let msg = format!(
                "width {} greater than max configured width {}",
                width,
                self.options.max_width()
            );
            return Err(QoiErrors::InvalidValueInHeader(msg));
        }

        if height > self.options.max_height() {
            let msg = format!(
                "height {} greater than max configured height {}",
                height,
                self.options.max_height()
            );
            return Err(QoiErrors::InvalidValueInHeader(msg));
        }

        self.channels = match channels {
            3 => ColorChannels::RGB,
            4 => ColorChannels::RGBA,
            _ => {
                let msg = format!("unknown channel number {channels}, expected either 3 or 4");
                return Err(QoiErrors::InvalidValueInHeader(msg));
            }
        };
        self.colorspace = match colorspace {
            0 => ColorCharacteristics::sRGB,
            1 => ColorCharacteristics::Linear,
            _ => {
                let msg = format!("unknown colorspace value {colorspace}, expected either 0 or 1");
                return Err(QoiErrors::InvalidValueInHeader(msg));
            }
        };
        self.width = width;
        self.height = height;

        trace!("Image width: {:?}", self.width);
        trace!("Image height: {:?}", self.height);
        trace!("Image channels: {:?}", self.channels);
        self.decoded_headers = true;

        Ok(())
    }

    /// Decode the bytes of a QOI image, returning the uncompressed
    /// image or the error encountered during decoding
    ///
    /// # Returns
    /// - On success: The decoded image, its pixel buffer holds exactly
    ///   `width * height` pixels under the channel order `O`
    /// - On error: An instance of [QoiErrors] which gives a reason why
    ///   the image could not be decoded
    ///
    /// [QoiErrors]:crate::errors::QoiErrors
    #[allow(clippy::redundant_field_names)]
    pub fn decode(&mut self) -> Result<QoiImage<O>, QoiErrors> {
        self.decode_headers()?;

        let target = self.width * self.height;
        // pre-size the output, the loop below only ever pushes
        let mut pixels: Vec<Pixel<O>> = Vec::with_capacity(target);

        let mut index = [Pixel::<O>::zero(); 64];
        // starting pixel
        let mut px_prev = Pixel::<O>::new(0, 0, 0, 255);

        loop {
            if !self.stream.has(1) {
                return Err(QoiErrors::MissingEndBytes);
            }
            let chunk = self.stream.get_u8();

            if chunk == QOI_OP_RGB {
                if pixels.len() == target {
                    return Err(QoiErrors::ReadingMorePixels);
                }
                if !self.stream.has(3) {
                    return Err(QoiErrors::MissingEndBytes);
                }
                let [r, g, b] = self.stream.get_fixed_bytes_or_zero::<3>();
                let px = Pixel::new(r, g, b, px_prev.a());

                pixels.push(px);
                index[px.cache_index()] = px;
                px_prev = px;
            } else if chunk == QOI_OP_RGBA {
                if pixels.len() == target {
                    return Err(QoiErrors::ReadingMorePixels);
                }
                if !self.stream.has(4) {
                    return Err(QoiErrors::MissingEndBytes);
                }
                let [r, g, b, a] = self.stream.get_fixed_bytes_or_zero::<4>();
                let px = Pixel::new(r, g, b, a);

                pixels.push(px);
                index[px.cache_index()] = px;
                px_prev = px;
            } else if (chunk & QOI_MASK_2) == QOI_OP_INDEX {
                if pixels.len() == target {
                    // a 00 tagged byte once all pixels are out must open the
                    // end marker exactly, anything else is a corrupt stream
                    if chunk != QOI_END_MARKER[0] || !self.stream.has(7) {
                        return Err(QoiErrors::MissingEndBytes);
                    }
                    let rest = self.stream.get_fixed_bytes_or_zero::<7>();

                    if rest != QOI_END_MARKER[1..] {
                        return Err(QoiErrors::MissingEndBytes);
                    }
                    break;
                }
                // slot already holds this value, no cache write
                let px = index[usize::from(chunk & 0x3f)];

                pixels.push(px);
                px_prev = px;
            } else if (chunk & QOI_MASK_2) == QOI_OP_DIFF {
                if pixels.len() == target {
                    return Err(QoiErrors::ReadingMorePixels);
                }
                let px = Pixel::new(
                    px_prev.r().wrapping_add(((chunk >> 4) & 0x03).wrapping_sub(2)),
                    px_prev.g().wrapping_add(((chunk >> 2) & 0x03).wrapping_sub(2)),
                    px_prev.b().wrapping_add((chunk & 0x03).wrapping_sub(2)),
                    px_prev.a()
                );

                pixels.push(px);
                index[px.cache_index()] = px;
                px_prev = px;
            } else if (chunk & QOI_MASK_2) == QOI_OP_LUMA {
                if pixels.len() == target {
                    return Err(QoiErrors::ReadingMorePixels);
                }
                if !self.stream.has(1) {
                    return Err(QoiErrors::MissingEndBytes);
                }
                let b2 = self.stream.get_u8();
                let vg = (chunk & 0x3f).wrapping_sub(32);

                let px = Pixel::new(
                    px_prev
                        .r()
                        .wrapping_add(vg.wrapping_sub(8).wrapping_add((b2 >> 4) & 0x0f)),
                    px_prev.g().wrapping_add(vg),
                    px_prev
                        .b()
                        .wrapping_add(vg.wrapping_sub(8).wrapping_add(b2 & 0x0f)),
                    px_prev.a()
                );

                pixels.push(px);
                index[px.cache_index()] = px;
                px_prev = px;
            } else {
                // QOI_OP_RUN
                let run = usize::from(chunk & 0x3f) + 1;

                if pixels.len() + run > target {
                    return Err(QoiErrors::ReadingMorePixels);
                }
                for _ in 0..run {
                    pixels.push(px_prev);
                }
            }
        }

        trace!("Finished decoding image");

        Ok(QoiImage {
            width:      self.width as u32,
            height:     self.height as u32,
            channels:   self.channels,
            colorspace: self.colorspace,
            pixels:     pixels
        })
    }

    /// Return the channel count tag or none if the headers
    /// haven't been decoded
    pub const fn channels(&self) -> Option<ColorChannels> {
        if self.decoded_headers {
            Some(self.channels)
        } else {
            None
        }
    }

    /// Return the colorspace tag or none if the headers
    /// haven't been decoded
    pub const fn colorspace(&self) -> Option<ColorCharacteristics> {
        if self.decoded_headers {
            Some(self.colorspace)
        } else {
            None
        }
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    ///
    /// # Example
    ///
    /// ```no_run
    /// use qoix::{QoiDecoder, RGBA};
    /// let mut decoder = QoiDecoder::<RGBA>::new(&[]);
    ///
    /// decoder.decode_headers().unwrap();
    /// // get dimensions now.
    /// let (w, h) = decoder.dimensions().unwrap();
    /// ```
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::colorspace::{ColorCharacteristics, ColorChannels};
    use crate::decoder::QoiDecoder;
    use crate::errors::QoiErrors;
    use crate::options::DecoderOptions;
    use crate::pixel::{Pixel, RGBA};

    #[rustfmt::skip]
    const ONE_PIXEL: [u8; 26] = [
        0x71, 0x6F, 0x69, 0x66,
        0x00, 0x00, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x01,
        0x04, 0x01,
        0xFE, 0x12, 0x34, 0x56,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01
    ];

    #[test]
    fn test_single_pixel_golden_bytes() {
        let image = QoiDecoder::<RGBA>::new(&ONE_PIXEL).decode().unwrap();

        assert_eq!(image.width, 1);
        assert_eq!(image.height, 1);
        assert_eq!(image.channels, ColorChannels::RGBA);
        assert_eq!(image.colorspace, ColorCharacteristics::Linear);
        assert_eq!(image.pixels, vec![Pixel::new(0x12, 0x34, 0x56, 0xFF)]);
    }

    #[test]
    fn test_wrong_magic() {
        let mut data = ONE_PIXEL;
        data[3] = b'x';

        let err = QoiDecoder::<RGBA>::new(&data).decode().unwrap_err();
        assert!(matches!(err, QoiErrors::InvalidQoiHeader));
    }

    #[test]
    fn test_bad_channel_count() {
        let mut data = ONE_PIXEL;
        data[12] = 5;

        let err = QoiDecoder::<RGBA>::new(&data).decode().unwrap_err();
        assert!(matches!(err, QoiErrors::InvalidValueInHeader(_)));
    }

    #[test]
    fn test_bad_colorspace() {
        let mut data = ONE_PIXEL;
        data[13] = 2;

        let err = QoiDecoder::<RGBA>::new(&data).decode().unwrap_err();
        assert!(matches!(err, QoiErrors::InvalidValueInHeader(_)));
    }

    #[test]
    fn test_truncated_last_byte() {
        let data = &ONE_PIXEL[..ONE_PIXEL.len() - 1];

        let err = QoiDecoder::<RGBA>::new(data).decode().unwrap_err();
        assert!(matches!(err, QoiErrors::MissingEndBytes));
    }

    #[test]
    fn test_truncated_end_marker() {
        let data = &ONE_PIXEL[..ONE_PIXEL.len() - 8];

        let err = QoiDecoder::<RGBA>::new(data).decode().unwrap_err();
        assert!(matches!(err, QoiErrors::MissingEndBytes));
    }

    #[test]
    fn test_nonzero_index_tag_at_end_is_rejected() {
        // 0x3F carries the INDEX tag but is not the end marker opener
        let mut data = ONE_PIXEL;
        data[18] = 0x3F;

        let err = QoiDecoder::<RGBA>::new(&data).decode().unwrap_err();
        assert!(matches!(err, QoiErrors::MissingEndBytes));
    }

    #[test]
    fn test_run_past_declared_pixels() {
        // RUN of 2 into a 1 pixel image
        let mut data = ONE_PIXEL.to_vec();
        data[14] = 0xC1;
        data.truncate(15);
        data.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 1]);

        let err = QoiDecoder::<RGBA>::new(&data).decode().unwrap_err();
        assert!(matches!(err, QoiErrors::ReadingMorePixels));
    }

    #[test]
    fn test_op_after_target_reached() {
        // a second RGB op in a 1 pixel image
        let mut data = ONE_PIXEL.to_vec();
        data.splice(18..18, [0xFE, 1, 2, 3]);

        let err = QoiDecoder::<RGBA>::new(&data).decode().unwrap_err();
        assert!(matches!(err, QoiErrors::ReadingMorePixels));
    }

    #[test]
    fn test_dimension_limits() {
        let options = DecoderOptions::default().set_max_width(0);

        let err = QoiDecoder::<RGBA>::new_with_options(&ONE_PIXEL, options)
            .decode()
            .unwrap_err();
        assert!(matches!(err, QoiErrors::InvalidValueInHeader(_)));
    }

    #[test]
    fn test_header_accessors() {
        let mut decoder = QoiDecoder::<RGBA>::new(&ONE_PIXEL);

        assert!(decoder.dimensions().is_none());
        decoder.decode_headers().unwrap();

        assert_eq!(decoder.dimensions(), Some((1, 1)));
        assert_eq!(decoder.channels(), Some(ColorChannels::RGBA));
        assert_eq!(decoder.colorspace(), Some(ColorCharacteristics::Linear));
    }
}
