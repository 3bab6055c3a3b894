#![allow(unused)]
extern crate tinymap;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::{
    fmt::Write as _,
    hint::black_box,
    io::{Cursor, Write},
};
use tinymap::{decoder::decode, EntityKind, MappingService, NamespacePair};
use zip::{write::SimpleFileOptions, ZipWriter};

const CLASSES: usize = 5_000;
const MEMBERS_PER_CLASS: usize = 8;

/// Generates a Tiny v2 table roughly the shape of a game's SRG -> named mappings
fn generate_table() -> String {
    let mut table = String::from("tiny\t2\t0\tofficial\tsrg\tnamed\n");
    let mut member = 0;
    for class in 0..CLASSES {
        writeln!(
            table,
            "c\tc{class}\tnet/minecraft/pkg{}/C_{class}_\tnet/minecraft/pkg{}/Named{class}",
            class % 64,
            class % 64
        )
        .unwrap();
        for _ in 0..MEMBERS_PER_CLASS / 2 {
            writeln!(table, "\tm\t()V\tm{member}\tm_{member}_\tmethod{member}").unwrap();
            writeln!(table, "\tf\tI\tf{member}\tf_{member}_\tfield{member}").unwrap();
            member += 1;
        }
    }
    table
}

fn generate_archive(table: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("mappings/mappings.tiny", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(table.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Benchmark decoding a complete archive, the one-time cost paid by the first lookup
fn bench_decode(c: &mut Criterion) {
    let table = generate_table();
    let archive = generate_archive(&table);
    let namespaces = NamespacePair::new("srg", "named");

    println!(
        "Benchmarking mapping table: {} bytes ({:.2} KB compressed)",
        table.len(),
        archive.len() as f64 / 1024.0
    );

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(table.len() as u64));
    group.bench_function("decode_archive", |b| {
        b.iter(|| {
            let decoded = decode(
                Some(black_box(archive.as_slice())),
                "mappings/mappings.tiny",
                &namespaces,
            )
            .unwrap();
            black_box(decoded)
        });
    });
    group.finish();
}

/// Benchmark lookups against an initialized service, hits and misses
fn bench_lookup(c: &mut Criterion) {
    let service = MappingService::from_mem(generate_archive(&generate_table()));
    service.table().unwrap();

    let mut group = c.benchmark_group("lookup");
    group.bench_function("class_hit", |b| {
        b.iter(|| {
            black_box(
                service
                    .lookup(EntityKind::Class, black_box("net/minecraft/pkg7/C_1031_"))
                    .unwrap(),
            )
        });
    });
    group.bench_function("method_hit", |b| {
        b.iter(|| black_box(service.lookup(EntityKind::Method, black_box("m_1234_")).unwrap()));
    });
    group.bench_function("field_miss", |b| {
        b.iter(|| black_box(service.lookup(EntityKind::Field, black_box("f_unknown_")).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_decode, bench_lookup);
criterion_main!(benches);
