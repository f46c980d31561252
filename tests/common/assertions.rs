//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

/// Decode an 8-bit grayscale PNG into rows
pub fn read_gray_png(path: &Path) -> Vec<Vec<u8>> {
    let file = std::fs::File::open(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder.read_info().unwrap();
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).unwrap();

    assert_eq!(
        info.color_type,
        png::ColorType::Grayscale,
        "Expected grayscale PNG at {}",
        path.display()
    );
    assert_eq!(info.bit_depth, png::BitDepth::Eight);

    data.truncate(info.buffer_size());
    data.chunks(info.width as usize).map(<[u8]>::to_vec).collect()
}

/// Parse a comma-separated matrix dump into rows
pub fn read_dump(path: &Path) -> Vec<Vec<u8>> {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    assert!(text.ends_with('\n'), "Dump must end with a newline");
    text.lines()
        .map(|line| line.split(',').map(|v| v.parse().unwrap()).collect())
        .collect()
}

/// Assert a PNG artifact and its dump both hold `expected`
pub fn assert_artifact<const W: usize>(dir: &Path, name: &str, expected: &[[u8; W]]) {
    let expected: Vec<Vec<u8>> = expected.iter().map(|row| row.to_vec()).collect();
    assert_eq!(
        read_gray_png(&dir.join(format!("{name}.png"))),
        expected,
        "PNG contents of {name}"
    );
    assert_eq!(
        read_dump(&dir.join(format!("{name}.txt"))),
        expected,
        "Dump contents of {name}"
    );
}

/// Sorted file names in `dir`
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
