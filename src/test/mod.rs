//! Builders for mapping archives and sample tables used by the unit tests.

use std::io::{Cursor, Write};

use zip::{write::SimpleFileOptions, ZipWriter};

/// Tiny v1 table with one class, one method and one field in `official`/`srg`/`named`
pub const V1_TABLE: &str = "v1\tofficial\tsrg\tnamed
CLASS\tdnq\tnet/minecraft/world/level/Level\tnet/minecraft/world/level/World
METHOD\tdnq\t()V\ta\tm_46463_\ttick
FIELD\tdnq\tI\tb\tf_46441_\tseaLevel
";

/// The same mappings as [`V1_TABLE`] in Tiny v2
pub const V2_TABLE: &str = "tiny\t2\t0\tofficial\tsrg\tnamed
c\tdnq\tnet/minecraft/world/level/Level\tnet/minecraft/world/level/World
\tm\t()V\ta\tm_46463_\ttick
\tf\tI\tb\tf_46441_\tseaLevel
";

/// Builds a zip archive holding the given text files, in order.
pub fn archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let entries: Vec<(&str, &[u8])> = entries
        .iter()
        .map(|(name, text)| (*name, text.as_bytes()))
        .collect();
    archive_bytes(&entries)
}

/// Builds a zip archive holding the given binary files, in order.
pub fn archive_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Builds a zip archive that starts with a directory entry, followed by text files.
pub fn archive_with_directory(directory: &str, entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .add_directory(directory, SimpleFileOptions::default())
        .unwrap();
    for (name, text) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(text.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

#[test]
fn sample_tables_agree() {
    use crate::{mappings::tiny::parse, NamespacePair};

    let pair = NamespacePair::new("srg", "named");
    assert_eq!(
        parse(V1_TABLE, &pair).unwrap(),
        parse(V2_TABLE, &pair).unwrap()
    );
}
