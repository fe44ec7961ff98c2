/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nanorand::{Rng, WyRand};
use qoix::{ColorCharacteristics, ColorChannels, Pixel, QoiDecoder, QoiEncoder, QoiImage, RGBA};

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 1024;

/// Photographic-ish content, smooth regions with occasional noise,
/// so every op kind shows up in the stream.
fn synthetic_image() -> QoiImage<RGBA> {
    let mut rng = WyRand::new_seed(0xDEADBEEF);

    let pixels = (0..WIDTH * HEIGHT)
        .map(|i| {
            let x = (i % WIDTH) as u8;
            let y = (i / WIDTH) as u8;

            if rng.generate::<u8>() < 16 {
                Pixel::new(rng.generate(), rng.generate(), rng.generate(), 255)
            } else {
                Pixel::new(x, y, x.wrapping_add(y), 255)
            }
        })
        .collect();

    QoiImage {
        width:      WIDTH,
        height:     HEIGHT,
        channels:   ColorChannels::RGB,
        colorspace: ColorCharacteristics::sRGB,
        pixels
    }
}

fn bench_roundtrip(c: &mut Criterion) {
    let image = synthetic_image();

    let mut encoded = Vec::with_capacity(QoiEncoder::new(&image).max_size());
    QoiEncoder::new(&image).encode(&mut encoded).unwrap();

    let mut group = c.benchmark_group("qoi: synthetic roundtrip");
    group.throughput(Throughput::Bytes(u64::from(WIDTH * HEIGHT * 4)));

    group.bench_function("encode", |b| {
        b.iter(|| {
            let mut sink = Vec::with_capacity(QoiEncoder::new(&image).max_size());
            QoiEncoder::new(&image).encode(&mut sink).unwrap();
            black_box(sink)
        })
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(QoiDecoder::<RGBA>::new(&encoded).decode().unwrap()))
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_roundtrip);

criterion_main!(benches);
