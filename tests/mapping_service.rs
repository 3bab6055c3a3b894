//! End-to-end tests of the mapping service against archives built on the fly.

use std::{
    io::{Cursor, Write},
    sync::{Arc, Barrier},
    thread,
};

use tinymap::prelude::*;
use zip::{write::SimpleFileOptions, ZipWriter};

const SCENARIO_TABLE: &str = "tiny\t2\t0\tsource\ttarget
c\tnet/foo/Bar\tnet/foo/Baz
\tm\t()V\tm_1\tdoThing
\tf\tI\tf_1\tcounter
";

fn archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, text) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(text.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn scenario_service() -> MappingService {
    let config = ServiceConfig::default().with_namespaces("source", "target");
    let data = archive(&[
        ("META-INF/MANIFEST.MF", "Manifest-Version: 1.0\n"),
        ("mappings/mappings.tiny", SCENARIO_TABLE),
    ]);
    MappingService::new(config, Resource::memory(data))
}

#[test]
fn scenario() {
    let service = scenario_service();

    assert_eq!(service.namespace_pair().as_tuple(), ("source", "target"));
    assert!(!service.is_initialized());

    assert_eq!(
        service.translate(EntityKind::Class, "net/foo/Bar").unwrap(),
        "net.foo.Baz"
    );
    assert_eq!(
        service.translate(EntityKind::Method, "m_1").unwrap(),
        "doThing"
    );
    assert_eq!(
        service.translate(EntityKind::Method, "m_unknown").unwrap(),
        "m_unknown"
    );
    assert_eq!(
        service.translate(EntityKind::Field, "f_1").unwrap(),
        "counter"
    );
    assert_eq!(
        service.translate(EntityKind::Other, "net/foo/Bar").unwrap(),
        "net/foo/Bar"
    );
    assert_eq!(service.decode_count(), 1);
}

#[test]
fn class_normalization() {
    let data = archive(&[(
        "mappings/mappings.tiny",
        "v1\tsrg\tnamed\nCLASS\ta/b/C\ta/b/D\nMETHOD\ta/b/C\t()V\tm_1_\tdo/it\n",
    )]);
    let service = MappingService::from_mem(data);

    assert_eq!(service.lookup(EntityKind::Class, "a/b/C").unwrap(), "a.b.D");
    assert_eq!(service.lookup(EntityKind::Class, "a.b.C").unwrap(), "a.b.D");
    assert_eq!(service.lookup(EntityKind::Method, "m_1_").unwrap(), "do/it");
}

#[test]
fn identity_without_mapping_entry() {
    let services = [
        MappingService::empty(),
        MappingService::from_mem(archive(&[("readme.txt", "nothing here")])),
        MappingService::from_file("/nonexistent/path/to/mappings.zip"),
    ];

    for service in &services {
        for kind in [
            EntityKind::Class,
            EntityKind::Method,
            EntityKind::Field,
            EntityKind::Other,
        ] {
            assert_eq!(service.lookup(kind, "x/y/Z").unwrap(), "x/y/Z");
            assert_eq!(service.lookup(kind, "m_1_").unwrap(), "m_1_");
        }
        assert!(service.table().unwrap().is_empty());
    }
}

#[test]
fn malformed_header_is_a_content_error() {
    let data = archive(&[("mappings/mappings.tiny", "tiny\t9\t0\tsrg\tnamed\n")]);
    let service = MappingService::from_mem(data);

    let error = service.lookup(EntityKind::Class, "a/b/C").unwrap_err();
    assert!(error.is_content_error());
    assert!(matches!(error, Error::Unavailable(_)));

    // Still failing, still decoded only once
    assert!(service.lookup(EntityKind::Method, "m_1_").is_err());
    assert_eq!(service.decode_count(), 1);

    // Other never needs the table
    assert_eq!(service.lookup(EntityKind::Other, "m_1_").unwrap(), "m_1_");
}

#[test]
fn archive_on_disk() {
    let path = std::env::temp_dir().join("tinymap_archive_on_disk.zip");
    std::fs::write(&path, scenario_archive()).unwrap();

    let config = ServiceConfig::default().with_namespaces("source", "target");
    let service = MappingService::new(config, Resource::file(&path));
    assert_eq!(
        service.lookup(EntityKind::Method, "m_1").unwrap(),
        "doThing"
    );

    // The mapping is released after decoding, so the file can go away
    std::fs::remove_file(&path).unwrap();
    assert_eq!(
        service.lookup(EntityKind::Class, "net.foo.Bar").unwrap(),
        "net.foo.Baz"
    );
}

fn scenario_archive() -> Vec<u8> {
    archive(&[("mappings/mappings.tiny", SCENARIO_TABLE)])
}

#[test]
fn concurrent_first_lookups() {
    const THREADS: usize = 8;

    let service = Arc::new(scenario_service());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                if i % 2 == 0 {
                    service
                        .translate(EntityKind::Class, "net/foo/Bar")
                        .unwrap()
                        .to_string()
                } else {
                    service
                        .translate(EntityKind::Method, "m_1")
                        .unwrap()
                        .to_string()
                }
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(result, "net.foo.Baz");
        } else {
            assert_eq!(result, "doThing");
        }
    }

    assert_eq!(service.decode_count(), 1);
}

#[test]
fn host_contract_through_trait_object() {
    let host: Box<dyn NameMappingService> = Box::new(scenario_service());

    assert_eq!(host.provider_name(), "tinymap");
    assert_eq!(host.provider_version(), "1");
    assert_eq!(host.namespace_pair().as_tuple(), ("source", "target"));
    assert_eq!(host.translate_domain("CLASS", "net/foo/Bar").unwrap(), "net.foo.Baz");
    assert!(matches!(
        host.translate_domain("PACKAGE", "net/foo"),
        Err(Error::UnsupportedKind(_))
    ));
}
