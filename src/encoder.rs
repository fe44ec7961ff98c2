/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use crate::bytestream::ByteWriter;
use crate::constants::{
    QOI_END_MARKER, QOI_HEADER_SIZE, QOI_MAGIC, QOI_MAX_RUN, QOI_OP_DIFF, QOI_OP_INDEX,
    QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA, QOI_OP_RUN, QOI_PADDING
};
use crate::errors::QoiEncodeErrors;
use crate::image::QoiImage;
use crate::pixel::{ChannelOrder, Pixel};

/// Quite Ok Image encoder
///
/// Streams one image through the run/index/diff/luma heuristics in a
/// single pass, writing ops straight into the given sink.
///
/// # Example
/// - Encode a 100 by 100 RGB image
///
/// ```
/// use qoix::{ColorCharacteristics, ColorChannels, Pixel, QoiEncoder, QoiImage, RGBA};
///
/// const W: u32 = 100;
/// const H: u32 = 100;
///
/// fn main() -> Result<(), qoix::QoiEncodeErrors> {
///     let pixels: Vec<Pixel<RGBA>> = (0..W * H)
///         .map(|i| Pixel::new((i % 256) as u8, 0, 0, 255))
///         .collect();
///     let image = QoiImage {
///         width:      W,
///         height:     H,
///         channels:   ColorChannels::RGB,
///         colorspace: ColorCharacteristics::sRGB,
///         pixels:     pixels
///     };
///     let mut sink = vec![];
///     QoiEncoder::new(&image).encode(&mut sink)?;
///     Ok(())
/// }
/// ```
pub struct QoiEncoder<'a, O: ChannelOrder> {
    image: &'a QoiImage<O>
}

impl<'a, O: ChannelOrder> QoiEncoder<'a, O> {
    /// Create a new encoder which will encode the given image
    #[allow(clippy::redundant_field_names)]
    pub const fn new(image: &'a QoiImage<O>) -> QoiEncoder<'a, O> {
        QoiEncoder { image: image }
    }

    /// Return the maximum size for which the encoder can safely
    /// encode the image without fearing for an out of space error
    ///
    /// Useful for pre-sizing a sink before calling [`encode`](Self::encode)
    pub fn max_size(&self) -> usize {
        // the channels tag is carried as metadata only, every pixel can
        // still change alpha and cost a full 5 byte RGBA op
        self.image.pixel_count() * 5 + QOI_HEADER_SIZE + QOI_PADDING
    }

    fn encode_headers<W: Write>(&self, writer: &mut ByteWriter<W>) -> Result<(), QoiEncodeErrors> {
        let expected_len = self.image.pixel_count();

        if self.image.pixels.len() != expected_len {
            return Err(QoiEncodeErrors::DimensionsMismatchPixelsLength(
                expected_len,
                self.image.pixels.len()
            ));
        }

        // qoif
        writer.write_all(&QOI_MAGIC.to_be_bytes())?;
        writer.write_u32_be(self.image.width)?;
        writer.write_u32_be(self.image.height)?;
        writer.write_u8(self.image.channels.to_u8())?;
        writer.write_u8(self.image.colorspace.to_u8())?;

        Ok(())
    }

    /// Compress the image into `sink`
    ///
    /// # Returns
    /// - `Ok(size)`: Actual bytes written to the sink
    /// - `Err`: The precondition or I/O error encountered
    #[allow(clippy::manual_range_contains)]
    pub fn encode<W: Write>(&self, sink: W) -> Result<usize, QoiEncodeErrors> {
        let mut stream = ByteWriter::new(sink);

        self.encode_headers(&mut stream)?;

        let mut index = [Pixel::<O>::zero(); 64];
        // starting pixel
        let mut px_prev = Pixel::<O>::new(0, 0, 0, 255);

        let mut run: u8 = 0;

        for &px in &self.image.pixels {
            if px == px_prev {
                run += 1;

                if run == QOI_MAX_RUN {
                    stream.write_u8(QOI_OP_RUN | (run - 1))?;
                    run = 0;
                }
            } else {
                if run > 0 {
                    stream.write_u8(QOI_OP_RUN | (run - 1))?;
                    run = 0;
                }

                let index_pos = px.cache_index();

                if index[index_pos] == px {
                    stream.write_u8(QOI_OP_INDEX | (index_pos as u8))?;
                } else {
                    index[index_pos] = px;

                    if px.a() == px_prev.a() {
                        let vr = px.r().wrapping_sub(px_prev.r());
                        let vg = px.g().wrapping_sub(px_prev.g());
                        let vb = px.b().wrapping_sub(px_prev.b());

                        let vg_r = vr.wrapping_sub(vg);
                        let vg_b = vb.wrapping_sub(vg);

                        if !(2..=253).contains(&vr)
                            && !(2..=253).contains(&vg)
                            && !(2..=253).contains(&vb)
                        {
                            stream.write_u8(
                                QOI_OP_DIFF
                                    | vr.wrapping_add(2) << 4
                                    | vg.wrapping_add(2) << 2
                                    | vb.wrapping_add(2)
                            )?;
                        } else if !(8..=247).contains(&vg_r)
                            && !(32..=223).contains(&vg)
                            && !(8..=247).contains(&vg_b)
                        {
                            stream.write_u8(QOI_OP_LUMA | vg.wrapping_add(32))?;
                            stream.write_u8(vg_r.wrapping_add(8) << 4 | vg_b.wrapping_add(8))?;
                        } else {
                            stream.write_u8(QOI_OP_RGB)?;
                            stream.write_all(&px.to_rgb())?;
                        }
                    } else {
                        stream.write_u8(QOI_OP_RGBA)?;
                        stream.write_all(&px.to_rgba())?;
                    }
                }
            }

            px_prev = px;
        }
        if run > 0 {
            stream.write_u8(QOI_OP_RUN | (run - 1))?;
        }
        // write trailing bytes
        stream.write_all(&QOI_END_MARKER)?;
        // done
        Ok(stream.bytes_written())
    }
}
