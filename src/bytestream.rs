/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

/// A positioned reader over an in memory byte slice.
///
/// Reads past the end return zero, callers are expected to guard
/// with [`has`](ByteReader::has) first and map a failed guard to the
/// right decode error.
pub(crate) struct ByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    #[allow(clippy::redundant_field_names)]
    pub const fn new(stream: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream:   stream,
            position: 0
        }
    }

    /// True if at least `num` more bytes can be read.
    pub const fn has(&self, num: usize) -> bool {
        self.remaining() >= num
    }

    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    pub fn get_u32_be(&mut self) -> u32 {
        u32::from_be_bytes(self.get_fixed_bytes_or_zero::<4>())
    }

    pub fn get_fixed_bytes_or_zero<const N: usize>(&mut self) -> [u8; N] {
        let mut bytes = [0; N];

        match self.stream.get(self.position..self.position + N) {
            Some(range) => {
                bytes.copy_from_slice(range);
                self.position += N;
            }
            None => self.position = self.stream.len()
        }
        bytes
    }
}

/// A byte counting writer over any [`Write`] sink.
///
/// Encoded output streams through the sink directly, the whole
/// compressed image is never buffered here.
pub(crate) struct ByteWriter<W: Write> {
    sink:          W,
    bytes_written: usize
}

impl<W: Write> ByteWriter<W> {
    #[allow(clippy::redundant_field_names)]
    pub fn new(sink: W) -> ByteWriter<W> {
        ByteWriter {
            sink:          sink,
            bytes_written: 0
        }
    }

    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), std::io::Error> {
        self.sink.write_all(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    pub fn write_u8(&mut self, byte: u8) -> Result<(), std::io::Error> {
        self.write_all(&[byte])
    }

    pub fn write_u32_be(&mut self, value: u32) -> Result<(), std::io::Error> {
        self.write_all(&value.to_be_bytes())
    }

    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
}
