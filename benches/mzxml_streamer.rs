use std::io::{BufReader, Cursor};
use std::sync::Arc;

use base64::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use mzconvert::binary::zlib_compress;
use mzconvert::mzxml::MzXmlStreamer;
use mzconvert::writer::{ScanFileWriter, ScanWriter, WriterConfig};

/// Network-order interleaved (m/z, intensity) payload
fn encode_peaks(scan: usize, peaks: usize, precision64: bool, zlib: bool) -> String {
    let mut bytes = Vec::new();
    for j in 0..peaks {
        let mz = 100.0 + (j as f64) * 10.0 + (scan as f64) * 0.1;
        let intensity = 1000.0 + (j as f64) * 50.0;
        if precision64 {
            bytes.extend_from_slice(&mz.to_be_bytes());
            bytes.extend_from_slice(&intensity.to_be_bytes());
        } else {
            bytes.extend_from_slice(&(mz as f32).to_be_bytes());
            bytes.extend_from_slice(&(intensity as f32).to_be_bytes());
        }
    }
    if zlib {
        bytes = zlib_compress(&bytes).unwrap();
    }
    BASE64_STANDARD.encode(&bytes)
}

fn generate_test_mzxml(num_scans: usize, peaks_per_scan: usize, zlib: bool) -> Vec<u8> {
    let mut mzxml = format!(
        r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<mzXML xmlns="http://sashimi.sourceforge.net/schema_revision/mzXML_3.2">
  <msRun scanCount="{}">
    <parentFile fileName="bench.raw" fileType="RAWData"/>
    <msInstrument>
      <msManufacturer category="msManufacturer" value="Thermo Scientific"/>
      <msModel category="msModel" value="Orbitrap Exploris 480"/>
      <msMassAnalyzer category="msMassAnalyzer" value="orbitrap"/>
    </msInstrument>"#,
        num_scans
    );

    let (compression, precision) = if zlib { ("zlib", "64") } else { ("none", "32") };
    for i in 0..num_scans {
        let ms_level = if i % 5 == 0 { 1 } else { 2 };
        let precursor = if ms_level == 2 {
            format!(
                r#"<precursorMz windowWideness="2.0">{:.4}</precursorMz>"#,
                400.0 + (i % 50) as f64
            )
        } else {
            String::new()
        };
        mzxml.push_str(&format!(
            r#"
    <scan num="{}" msLevel="{}" centroided="1" peaksCount="{}" retentionTime="PT{:.3}S">
      {}
      <peaks compressionType="{}" precision="{}" byteOrder="network" contentType="m/z-int">{}</peaks>
    </scan>"#,
            i + 1,
            ms_level,
            peaks_per_scan,
            (i as f64) * 0.5,
            precursor,
            compression,
            precision,
            encode_peaks(i, peaks_per_scan, zlib, zlib)
        ));
    }

    mzxml.push_str(
        r#"
  </msRun>
</mzXML>"#,
    );
    mzxml.into_bytes()
}

fn bench_scans(c: &mut Criterion, name: &str, zlib: bool) {
    let mut group = c.benchmark_group(name);

    for num_scans in [100, 500, 1000] {
        let peaks_per_scan = 50;
        let total_peaks = num_scans * peaks_per_scan;
        let mzxml_bytes = Arc::new(generate_test_mzxml(num_scans, peaks_per_scan, zlib));

        group.throughput(Throughput::Elements(total_peaks as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_scans),
            &mzxml_bytes,
            |b, bytes| {
                b.iter_batched(
                    || {
                        let reader = BufReader::new(Cursor::new(bytes.as_ref().clone()));
                        MzXmlStreamer::new(reader).unwrap()
                    },
                    |mut streamer| {
                        let mut count = 0usize;
                        while let Some(scan) = streamer.next_scan().unwrap() {
                            count += scan.peaks().len();
                        }
                        black_box(count);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_next_scan(c: &mut Criterion) {
    bench_scans(c, "mzxml_streamer_next_scan", false);
}

fn bench_next_scan_zlib(c: &mut Criterion) {
    bench_scans(c, "mzxml_streamer_next_scan_zlib64", true);
}

fn bench_convert_to_scan_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("mzxml_to_scan_file");
    let num_scans = 500;
    let peaks_per_scan = 50;
    let mzxml_bytes = Arc::new(generate_test_mzxml(num_scans, peaks_per_scan, false));
    group.throughput(Throughput::Elements((num_scans * peaks_per_scan) as u64));

    for compress in [false, true] {
        let config = WriterConfig {
            compress_scans: compress,
        };
        group.bench_with_input(
            BenchmarkId::new("compress_scans", compress),
            &mzxml_bytes,
            |b, bytes| {
                b.iter_batched(
                    || {
                        let reader = BufReader::new(Cursor::new(bytes.as_ref().clone()));
                        MzXmlStreamer::new(reader).unwrap()
                    },
                    |mut streamer| {
                        let mut writer = Box::new(
                            ScanFileWriter::new(Vec::new(), streamer.metadata(), config.clone())
                                .unwrap(),
                        );
                        while let Some(scan) = streamer.next_scan().unwrap() {
                            writer.add_scan(&scan).unwrap();
                        }
                        black_box(writer.finalize().unwrap());
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_next_scan, bench_next_scan_zlib, bench_convert_to_scan_file);
criterion_main!(benches);
