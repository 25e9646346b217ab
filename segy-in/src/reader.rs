//! The reader façade: opens a SEG-Y file, scans it once, and answers the narrow set of
//! questions the volume extractor needs without ever materializing a `Vec<Trace>`.
use segy_core::bitconverter::converter_chooser;
use segy_core::catalog::{Catalog, Catalog2D};
use segy_core::enums::SampleFormatCode;
use segy_core::errors::SegyError;
use segy_core::{BinHeader, SegyMetadata, SegySettings, TraceHeader, TRACE_HEADER_LEN};

use crate::header_codec::TraceHeaderFromBytes;
use crate::memory_map::MappedSegY;
use crate::scanner::{scan, ScanResult};

/// The capability set the volume extractor needs from a reader. Kept as a trait, rather than
/// baked directly into [`SegyReader`], so the extractor can be exercised against anything
/// that can answer these questions (a fixture in tests, say) without touching a real file.
pub trait SegyReader3D {
    fn num_inlines(&self) -> usize;
    fn num_xlines(&self) -> usize;
    fn inline_numbers(&self) -> &[i32];
    fn xline_numbers(&self) -> &[i32];
    fn inline_xline_numbers(&self) -> Box<dyn Iterator<Item = (i32, i32)> + '_>;
    fn trace_index(&self, key: (i32, i32)) -> Option<usize>;
    fn has_trace_index(&self, key: (i32, i32)) -> bool {
        self.trace_index(key).is_some()
    }
    /// Whether this reader built a usable inline/crossline index. `false` when the file's
    /// inline/crossline keys were not unique, in which case every 3D-shaped operation
    /// (inline extraction, per-cell header fields) has nothing to index by.
    fn has_line_catalog(&self) -> bool {
        true
    }
    fn trace_header(&self, idx: usize) -> Result<TraceHeader, SegyError>;
    fn num_trace_samples(&self, idx: usize) -> Result<usize, SegyError>;
    fn max_num_trace_samples(&self) -> usize;
    fn trace_samples(&self, idx: usize, start: usize, stop: usize) -> Result<Vec<f32>, SegyError>;
    fn data_sample_format(&self) -> SampleFormatCode;
}

/// A memory-mapped SEG-Y file plus the catalogs built by a single scan.
pub struct SegyReader {
    map: MappedSegY,
    metadata: SegyMetadata<SegySettings>,
    data_start: usize,
    offset_catalog: Catalog,
    length_catalog: Catalog,
    #[allow(dead_code)]
    cdp_catalog: Option<Catalog>,
    line_catalog: Option<Catalog2D>,
    inline_numbers: Vec<i32>,
    xline_numbers: Vec<i32>,
}

impl SegyReader {
    /// Opens `file_name`, parses its headers, and runs the single-pass scan described in
    /// the indexer. `progress`, if given, receives the scan's progress callbacks.
    pub fn open(
        file_name: &str,
        settings: SegySettings,
        progress: Option<&mut dyn FnMut(f32)>,
    ) -> Result<Self, SegyError> {
        let map = MappedSegY::new(file_name)?;
        let text_header = map.get_text_header()?;
        let bin_header = map.get_bin_header()?;
        let extended_headers = map.get_extended_text_headers(bin_header.extended_header_count)?;
        let data_start = MappedSegY::trace_data_start(extended_headers.len());

        tracing::info!(file_name, data_start, "opening SEG-Y file");

        let ScanResult {
            offset_catalog,
            length_catalog,
            cdp_catalog,
            line_catalog,
        } = scan(&map, &bin_header, data_start, &settings, progress)?;

        let (inline_numbers, xline_numbers) = match &line_catalog {
            Some(cat) => {
                let mut inlines: Vec<i32> = cat.iter().map(|(i, _)| i).collect();
                let mut xlines: Vec<i32> = cat.iter().map(|(_, j)| j).collect();
                inlines.sort_unstable();
                inlines.dedup();
                xlines.sort_unstable();
                xlines.dedup();
                (inlines, xlines)
            }
            None => (Vec::new(), Vec::new()),
        };

        let metadata = SegyMetadata::new(text_header, extended_headers, bin_header, settings);

        Ok(SegyReader {
            map,
            metadata,
            data_start,
            offset_catalog,
            length_catalog,
            cdp_catalog,
            line_catalog,
            inline_numbers,
            xline_numbers,
        })
    }

    pub fn get_bin_header(&self) -> &BinHeader {
        self.metadata.get_bin_header()
    }

    pub fn get_settings(&self) -> &SegySettings {
        self.metadata.get_settings()
    }

    pub fn get_text_header(&self) -> &str {
        self.metadata.get_text_header()
    }

    pub fn get_extended_headers(&self) -> &[String] {
        self.metadata.get_extended_headers()
    }

    pub fn trace_count(&self) -> usize {
        self.offset_catalog.len()
    }

    /// Byte offset in the map where trace data begins (i.e. right after the reel and extended
    /// text headers).
    pub fn data_start(&self) -> usize {
        self.data_start
    }

    fn trace_offset(&self, idx: usize) -> Result<usize, SegyError> {
        self.offset_catalog
            .get(idx as i64)
            .map(|v| v as usize)
            .ok_or(SegyError::KeyNotFound {
                msg: format!("trace index {} not present in offset catalog", idx),
            })
    }
}

impl SegyReader3D for SegyReader {
    fn num_inlines(&self) -> usize {
        self.inline_numbers.len()
    }

    fn num_xlines(&self) -> usize {
        self.xline_numbers.len()
    }

    fn inline_numbers(&self) -> &[i32] {
        &self.inline_numbers
    }

    fn xline_numbers(&self) -> &[i32] {
        &self.xline_numbers
    }

    fn inline_xline_numbers(&self) -> Box<dyn Iterator<Item = (i32, i32)> + '_> {
        match &self.line_catalog {
            Some(cat) => cat.iter(),
            None => Box::new(std::iter::empty()),
        }
    }

    fn trace_index(&self, key: (i32, i32)) -> Option<usize> {
        self.line_catalog.as_ref()?.get(key).map(|v| v as usize)
    }

    fn has_line_catalog(&self) -> bool {
        self.line_catalog.is_some()
    }

    fn trace_header(&self, idx: usize) -> Result<TraceHeader, SegyError> {
        let start = self.trace_offset(idx)?;
        let bin_header = self.get_bin_header();
        TraceHeader::from_bytes(
            &self.map.as_slice()[start..start + TRACE_HEADER_LEN],
            bin_header,
        )
    }

    fn num_trace_samples(&self, idx: usize) -> Result<usize, SegyError> {
        self.length_catalog
            .get(idx as i64)
            .map(|v| v as usize)
            .ok_or(SegyError::KeyNotFound {
                msg: format!("trace index {} not present in length catalog", idx),
            })
    }

    fn max_num_trace_samples(&self) -> usize {
        self.get_bin_header().no_samples as usize
    }

    fn trace_samples(&self, idx: usize, start: usize, stop: usize) -> Result<Vec<f32>, SegyError> {
        let bin_header = self.get_bin_header();
        let datum_size = bin_header.sample_format_code.datum_byte_length();
        let trace_start = self.trace_offset(idx)? + TRACE_HEADER_LEN;
        let byte_start = trace_start + start * datum_size;
        let byte_stop = trace_start + stop * datum_size;

        let bytes = self.map.as_slice();
        if byte_stop > bytes.len() {
            return Err(SegyError::Underflow {
                expected: byte_stop,
                got: bytes.len(),
            });
        }

        let converter = converter_chooser(
            bin_header.sample_format_code,
            bin_header.binary_flag_direction_is_le,
        )?;
        bytes[byte_start..byte_stop]
            .chunks(datum_size)
            .map(|chunk| converter(chunk).map_err(SegyError::from))
            .collect()
    }

    fn data_sample_format(&self) -> SampleFormatCode {
        self.get_bin_header().sample_format_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_trace(buf: &mut Vec<u8>, ensemble_no: i32, inline: i32, crossline: i32, samples: &[f32]) {
        let mut header = vec![0u8; TRACE_HEADER_LEN];
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
        bin[20..22].copy_from_slice(&3u16.to_be_bytes()); // no_samples (declared)
        bytes.extend(bin);

        write_trace(&mut bytes, 1, 10, 20, &[1.0, 2.0, 3.0]);
        write_trace(&mut bytes, 2, 10, 21, &[4.0, 5.0, 6.0]);
        write_trace(&mut bytes, 3, 11, 20, &[7.0, 8.0, 9.0]);

        std::fs::File::create(path).unwrap().write_all(&bytes).unwrap();
    }

    #[test]
    fn reader_answers_extractor_questions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reader.sgy");
        build_file(&path);

        let reader = SegyReader::open(path.to_str().unwrap(), SegySettings::default(), None).unwrap();
        assert_eq!(reader.trace_count(), 3);
        assert_eq!(reader.num_inlines(), 2);
        assert_eq!(reader.num_xlines(), 2);
        assert!(reader.has_trace_index((10, 20)));
        assert!(!reader.has_trace_index((99, 99)));

        let idx = reader.trace_index((11, 20)).unwrap();
        let samples = reader.trace_samples(idx, 0, 3).unwrap();
        assert_eq!(samples, vec![7.0, 8.0, 9.0]);

        let header = reader.trace_header(idx).unwrap();
        assert_eq!(header.ensemble_no, 3);
    }
}
