//! Scans and reads SEG-Y seismic data: parses the fixed-format headers, indexes trace
//! positions in a single forward pass, and extracts 1D traces, 2D inline slices, and header
//! fields out of the resulting volume.
//!
//! The library is read/access-only: there is no facility here for writing or editing SEG-Y
//! files, and no per-file settings beyond an inline/crossline bounding box (see
//! [`SegySettings`]) — header byte layout is fixed by the standard, not configurable.
extern crate encoding8;
extern crate memmap2;
extern crate num;

pub mod extract;
pub mod header_codec;
pub mod memory_map;
pub mod reader;
pub mod scanner;

pub use segy_core::enums;
pub use segy_core::errors::*;
pub use segy_core::header_structs::*;
pub use segy_core::{Catalog, Catalog2D, SegyMetadata, SegySettings};

pub use extract::{ensure_superset, extract_inline_3d, extract_trace, extract_trace_header_field_3d, Grid2D, Selector};
pub use header_codec::{HeaderFromBytes, TraceHeaderFromBytes};
pub use memory_map::MappedSegY;
pub use reader::{SegyReader, SegyReader3D};
pub use scanner::ScanResult;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_trace(buf: &mut Vec<u8>, ensemble_no: i32, inline: i32, crossline: i32, samples: &[f32]) {
        let mut header = vec![0u8; segy_core::TRACE_HEADER_LEN];
        header[20..24].copy_from_slice(&ensemble_no.to_be_bytes());
        header[188..192].copy_from_slice(&inline.to_be_bytes());
        header[192..196].copy_from_slice(&crossline.to_be_bytes());
        header[114..116].copy_from_slice(&(samples.len() as u16).to_be_bytes());
        buf.extend_from_slice(&header);
        for s in samples {
            buf.extend_from_slice(&s.to_be_bytes());
        }
    }

    fn build_file(path: &std::path::Path) {
        use segy_core::{BIN_HEADER_LEN, TEXT_HEADER_LEN};

        let mut bytes = vec![0x20u8; TEXT_HEADER_LEN];
        let mut bin = vec![0u8; BIN_HEADER_LEN];
        bin[24..26].copy_from_slice(&5u16.to_be_bytes()); // Float32
        bin[20..22].copy_from_slice(&2u16.to_be_bytes());
        bytes.extend(bin);

        write_trace(&mut bytes, 1, 100, 200, &[1.0, 2.0]);
        write_trace(&mut bytes, 2, 100, 201, &[3.0, 4.0]);

        std::fs::File::create(path).unwrap().write_all(&bytes).unwrap();
    }

    /// End-to-end: open a synthetic file, scan it, and pull a whole inline back out.
    #[test]
    fn open_scan_and_extract_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.sgy");
        build_file(&path);

        let reader = SegyReader::open(path.to_str().unwrap(), SegySettings::default(), None).unwrap();
        assert_eq!(reader.trace_count(), 2);

        let grid = extract_inline_3d(&reader, 100, &Selector::All, &Selector::All, None).unwrap();
        assert_eq!(grid.get(0, 0), Some(1.0));
        assert_eq!(grid.get(0, 1), Some(2.0));
        assert_eq!(grid.get(1, 0), Some(3.0));
        assert_eq!(grid.get(1, 1), Some(4.0));
    }
}
