//! Single forward pass over a mapped SEG-Y file that builds the four catalogs the reader
//! indexes traces by, without retaining a `Vec` of parsed headers.
use segy_core::catalog::{Catalog, Catalog2D, CatalogBuilder, CatalogBuilder2D};
use segy_core::errors::SegyError;
use segy_core::{BinHeader, SegySettings, TraceHeader, TRACE_HEADER_LEN};

use crate::header_codec::TraceHeaderFromBytes;
use crate::memory_map::MappedSegY;

/// The four catalogs produced by one scan: trace offset, trace length, CDP index, and
/// inline/crossline index. The last two are `None` when their keys were not unique.
pub struct ScanResult {
    pub offset_catalog: Catalog,
    pub length_catalog: Catalog,
    pub cdp_catalog: Option<Catalog>,
    pub line_catalog: Option<Catalog2D>,
}

/// Scans trace headers from `data_start` to the end of `map`, feeding four catalog builders.
///
/// `progress`, if given, is called with monotonically increasing values in `[0, 1]`; 75% of
/// the range covers the forward pass itself and the remaining 25% is split equally across the
/// four catalog builds. The final call is always `1.0`.
pub fn scan(
    map: &MappedSegY,
    bin_header: &BinHeader,
    data_start: usize,
    settings: &SegySettings,
    mut progress: Option<&mut dyn FnMut(f32)>,
) -> Result<ScanResult, SegyError> {
    let datum_size = bin_header.sample_format_code.datum_byte_length();
    let file_len = map.len();
    let scan_span = (file_len - data_start).max(1) as f32;

    let mut offset_builder = CatalogBuilder::new();
    let mut length_builder = CatalogBuilder::new();
    let mut cdp_builder = CatalogBuilder::new();
    let mut line_builder = CatalogBuilder2D::new();

    let mut pos = data_start;
    let mut trace_number: i64 = 0;
    let bytes = map.as_slice();

    while pos + TRACE_HEADER_LEN <= file_len {
        let header_bytes = &bytes[pos..pos + TRACE_HEADER_LEN];
        let th = TraceHeader::from_bytes(header_bytes, bin_header)?;
        let ns = th.no_samples_in_trace as usize;
        let trace_byte_len = ns * datum_size;

        // A header that claims more sample data than the file actually has is end-of-file,
        // not a corrupt trace: nothing past this point is indexed.
        if pos + TRACE_HEADER_LEN + trace_byte_len > file_len {
            break;
        }

        if settings.trace_in_bounds(th.inline_no, th.crossline_no) {
            offset_builder.add(trace_number, pos as i64);
            length_builder.add(trace_number, ns as i64);
            cdp_builder.add(th.ensemble_no as i64, trace_number);
            line_builder.add((th.inline_no, th.crossline_no), trace_number);
            trace_number += 1;
        }

        pos += TRACE_HEADER_LEN + trace_byte_len;

        if let Some(cb) = progress.as_deref_mut() {
            let frac = ((pos - data_start) as f32 / scan_span) * 0.75;
            cb(frac.min(0.75));
        }
    }

    tracing::debug!(traces = trace_number, "file scan complete");

    // Offsets are keyed by the sequential trace_number, which can never collide; a `None`
    // here would mean the scan loop above is broken, not that the input data is bad.
    let offset_catalog = offset_builder.build()?.ok_or_else(|| SegyError::Inconsistency {
        msg: "trace offset catalog keys are not unique".to_string(),
    })?;
    if let Some(cb) = progress.as_deref_mut() {
        cb(0.8125);
    }
    let length_catalog = length_builder.build()?.ok_or_else(|| SegyError::Inconsistency {
        msg: "trace length catalog keys are not unique".to_string(),
    })?;
    if let Some(cb) = progress.as_deref_mut() {
        cb(0.875);
    }
    // CDP/line keys come straight from trace headers and are not guaranteed unique; `None`
    // here just means those catalogs aren't usable, not that the scan failed.
    let cdp_catalog = cdp_builder.build()?;
    if let Some(cb) = progress.as_deref_mut() {
        cb(0.9375);
    }
    let line_catalog = line_builder.build()?;
    if let Some(cb) = progress.as_deref_mut() {
        cb(1.0);
    }

    Ok(ScanResult {
        offset_catalog,
        length_catalog,
        cdp_catalog,
        line_catalog,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_trace(buf: &mut Vec<u8>, ensemble_no: i32, inline: i32, crossline: i32, ns: u16, samples: &[u8]) {
        let mut header = vec![0u8; TRACE_HEADER_LEN];
        header[20..24].copy_from_slice(&ensemble_no.to_be_bytes());
        header[188..192].copy_from_slice(&inline.to_be_bytes());
        header[192..196].copy_from_slice(&crossline.to_be_bytes());
        header[114..116].copy_from_slice(&ns.to_be_bytes());
        buf.extend_from_slice(&header);
        buf.extend_from_slice(samples);
    }

    fn build_file(path: &std::path::Path) {
        use segy_core::{BIN_HEADER_LEN, TEXT_HEADER_LEN};

        let mut bytes = vec![0x20u8; TEXT_HEADER_LEN];
        let mut bin = vec![0u8; BIN_HEADER_LEN];
        bin[24..26].copy_from_slice(&2u16.to_be_bytes()); // Int32, 4 bytes/sample, big-endian
        bytes.extend(bin);

        // Three traces: ns = [100, 100, 50], distinct (inline, crossline) and cdp per trace.
        write_trace(&mut bytes, 1, 10, 20, 100, &vec![0u8; 100 * 4]);
        write_trace(&mut bytes, 2, 10, 21, 100, &vec![0u8; 100 * 4]);
        write_trace(&mut bytes, 3, 11, 20, 50, &vec![0u8; 50 * 4]);

        std::fs::File::create(path).unwrap().write_all(&bytes).unwrap();
    }

    #[test]
    fn scans_three_traces_into_catalogs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("three_traces.sgy");
        build_file(&path);

        let mapped = MappedSegY::new(path.to_str().unwrap()).unwrap();
        let bin_header = mapped.get_bin_header().unwrap();
        let data_start = MappedSegY::trace_data_start(0);
        let settings = SegySettings::default();

        let mut calls = Vec::new();
        let mut progress = |f: f32| calls.push(f);
        let result = scan(&mapped, &bin_header, data_start, &settings, Some(&mut progress)).unwrap();

        assert_eq!(result.offset_catalog.len(), 3);
        assert_eq!(result.offset_catalog.get(0), Some(data_start as i64));
        assert_eq!(
            result.offset_catalog.get(1),
            Some((data_start + TRACE_HEADER_LEN + 400) as i64)
        );

        assert_eq!(result.length_catalog.get(0), Some(100));
        assert_eq!(result.length_catalog.get(2), Some(50));

        let cdp = result.cdp_catalog.unwrap();
        assert_eq!(cdp.get(2), Some(1));

        let line = result.line_catalog.unwrap();
        assert_eq!(line.get((11, 20)), Some(2));
        assert_eq!(line.get((99, 99)), None);

        assert_eq!(*calls.last().unwrap(), 1.0);
        assert!(calls.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn bounding_box_excludes_out_of_range_traces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("three_traces_bounded.sgy");
        build_file(&path);

        let mapped = MappedSegY::new(path.to_str().unwrap()).unwrap();
        let bin_header = mapped.get_bin_header().unwrap();
        let data_start = MappedSegY::trace_data_start(0);

        let mut settings = SegySettings::default();
        settings.set_inline_min_max([10, 10]);

        let result = scan(&mapped, &bin_header, data_start, &settings, None).unwrap();
        assert_eq!(result.offset_catalog.len(), 2);
    }
}
