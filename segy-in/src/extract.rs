//! Pulls 1D traces, 2D inline slices, and header fields out of a reader and into a small
//! dense grid type, with null-fill or presence-mask semantics for cells the volume doesn't
//! actually have a trace for.
use std::collections::HashSet;
use std::hash::Hash;

use segy_core::errors::SegyError;
use segy_core::header_structs::TraceHeader;

use crate::reader::SegyReader3D;

/// How a caller narrows a domain (sample numbers within a trace, or crossline numbers within
/// an inline) down to the subset they actually want.
#[derive(Debug, Clone)]
pub enum Selector<T> {
    /// Keep the whole domain.
    All,
    /// Keep exactly these values, in the order the domain presents them, deduplicated.
    Values(Vec<T>),
    /// Positional slice over the domain: `domain[start..stop]` stepped by `step`.
    Slice { start: usize, stop: usize, step: usize },
}

/// Normalizes a [`Selector`] against `domain`, returning a concrete ordered, deduplicated
/// subsequence of it.
///
/// `All` returns the domain untouched. `Values` keeps domain order and drops anything the
/// caller named that isn't actually in the domain. `Slice` is applied positionally, as in
/// `domain[start..stop].step_by(step)`.
pub fn ensure_superset<T: Copy + Eq + Hash>(
    domain: &[T],
    selector: &Selector<T>,
) -> Result<Vec<T>, SegyError> {
    match selector {
        Selector::All => Ok(domain.to_vec()),
        Selector::Values(wanted) => {
            let wanted: HashSet<&T> = wanted.iter().collect();
            let mut seen = HashSet::new();
            Ok(domain
                .iter()
                .filter(|v| wanted.contains(v) && seen.insert(**v))
                .copied()
                .collect())
        }
        Selector::Slice { start, stop, step } => {
            if *step == 0 {
                return Err(SegyError::SettingsError {
                    msg: "slice step must be non-zero".to_string(),
                });
            }
            let stop = (*stop).min(domain.len());
            if *start >= stop {
                return Ok(Vec::new());
            }
            Ok(domain[*start..stop].iter().step_by(*step).copied().collect())
        }
    }
}

/// A dense `rows x cols` grid that remembers which cells were actually written.
///
/// Built in one of two modes, selected by the extraction function's `null` parameter:
/// - masked (`null: None`): cells never written (no trace present at that inline/crossline,
///   or a sample index past a short trace) read back as `None` through [`Grid2D::get`].
/// - filled (`null: Some(v)`): every cell reads back as `Some`, with unwritten ones holding
///   `v`; [`Grid2D::is_present`] still distinguishes a written cell from a filled one.
#[derive(Debug, Clone)]
pub struct Grid2D<T> {
    rows: usize,
    cols: usize,
    values: Vec<T>,
    present: Vec<bool>,
    masked: bool,
}

impl<T: Copy> Grid2D<T> {
    fn filled(rows: usize, cols: usize, fill: T, masked: bool) -> Self {
        Grid2D {
            rows,
            cols,
            values: vec![fill; rows * cols],
            present: vec![false; rows * cols],
            masked,
        }
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = row * self.cols + col;
        self.values[idx] = value;
        self.present[idx] = true;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell's value. In masked mode, `None` if nothing was ever extracted into it; in
    /// filled mode, always `Some`, with the fill value for unwritten cells.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        let idx = row * self.cols + col;
        if !self.masked {
            return self.values.get(idx).copied();
        }
        self.present.get(idx).copied().unwrap_or(false).then(|| self.values[idx])
    }

    /// The underlying row-major buffer, fill values included, for a caller that wants a
    /// plain dense array and will consult [`Grid2D::is_present`] itself.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn is_present(&self, row: usize, col: usize) -> bool {
        self.present[row * self.cols + col]
    }
}

/// Extracts one trace as a 1D array, honoring `sample_numbers`.
pub fn extract_trace<R: SegyReader3D + ?Sized>(
    reader: &R,
    trace_index: usize,
    sample_numbers: &Selector<usize>,
) -> Result<Vec<f32>, SegyError> {
    let domain: Vec<usize> = (0..reader.max_num_trace_samples()).collect();
    let samples = ensure_superset(&domain, sample_numbers)?;
    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let num_trace_samples = reader.num_trace_samples(trace_index)?;
    let start = samples[0];
    let stop = (samples[samples.len() - 1] + 1).min(num_trace_samples);
    let trace_samples = reader.trace_samples(trace_index, start, stop)?;

    Ok(samples
        .iter()
        .map(|&n| trace_samples.get(n - start).copied().unwrap_or(0.0))
        .collect())
}

/// Extracts an inline as a 2D grid of `xline x sample`, honoring `xline_numbers` and
/// `sample_numbers`.
///
/// `null` selects how positions with no trace at `(inline_number, xline)`, or samples past a
/// short trace, come back: `Some(v)` fills them with `v` in a plain dense array; `None` leaves
/// them unset, so a caller builds a masked array via [`Grid2D::get`]/[`Grid2D::is_present`].
pub fn extract_inline_3d<R: SegyReader3D + ?Sized>(
    reader: &R,
    inline_number: i32,
    xline_numbers: &Selector<i32>,
    sample_numbers: &Selector<usize>,
    null: Option<f32>,
) -> Result<Grid2D<f32>, SegyError> {
    if !reader.has_line_catalog() {
        return Err(SegyError::OperationNotSupported {
            msg: "inline extraction needs an inline/crossline index, which this file's keys \
                  were not unique enough to build"
                .to_string(),
        });
    }
    if !reader.inline_numbers().contains(&inline_number) {
        return Err(SegyError::KeyNotFound {
            msg: format!("inline number {} not present", inline_number),
        });
    }

    let xlines = ensure_superset(reader.xline_numbers(), xline_numbers)?;
    let sample_domain: Vec<usize> = (0..reader.max_num_trace_samples()).collect();
    let samples = ensure_superset(&sample_domain, sample_numbers)?;

    let mut grid = Grid2D::filled(xlines.len(), samples.len(), null.unwrap_or(0.0), null.is_none());
    if samples.is_empty() {
        return Ok(grid);
    }
    let sample_start = samples[0];

    for (xline_index, &xline) in xlines.iter().enumerate() {
        let Some(trace_index) = reader.trace_index((inline_number, xline)) else {
            continue;
        };
        let num_trace_samples = reader.num_trace_samples(trace_index)?;
        let stop = (samples[samples.len() - 1] + 1).min(num_trace_samples);
        if sample_start >= stop {
            continue;
        }
        let trace_samples = reader.trace_samples(trace_index, sample_start, stop)?;
        for (sample_index, &sample_number) in samples.iter().enumerate() {
            if sample_number < stop {
                grid.set(xline_index, sample_index, trace_samples[sample_number - sample_start]);
            }
        }
    }

    Ok(grid)
}

/// Fills a 2D grid with one trace-header field value per `(inline, xline)` position present
/// in the line catalog. `field` pulls the value out of an already-parsed [`TraceHeader`].
///
/// `null` has the same masked-vs-filled meaning as in [`extract_inline_3d`].
pub fn extract_trace_header_field_3d<R, F>(
    reader: &R,
    field: F,
    null: Option<i64>,
) -> Result<Grid2D<i64>, SegyError>
where
    R: SegyReader3D + ?Sized,
    F: Fn(&TraceHeader) -> i64,
{
    if !reader.has_line_catalog() {
        return Err(SegyError::OperationNotSupported {
            msg: "per-cell header extraction needs an inline/crossline index, which this \
                  file's keys were not unique enough to build"
                .to_string(),
        });
    }

    let inlines = reader.inline_numbers();
    let xlines = reader.xline_numbers();
    let mut grid = Grid2D::filled(inlines.len(), xlines.len(), null.unwrap_or(0), null.is_none());

    for (inline_number, xline_number) in reader.inline_xline_numbers() {
        let trace_index = reader
            .trace_index((inline_number, xline_number))
            .ok_or_else(|| SegyError::KeyNotFound {
                msg: format!("({}, {}) missing from its own catalog", inline_number, xline_number),
            })?;
        let header = reader.trace_header(trace_index)?;
        let inline_index = inlines.iter().position(|&i| i == inline_number).unwrap();
        let xline_index = xlines.iter().position(|&x| x == xline_number).unwrap();
        grid.set(inline_index, xline_index, field(&header));
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_superset_all_returns_domain() {
        let domain = vec![10, 20, 30];
        let result = ensure_superset(&domain, &Selector::All).unwrap();
        assert_eq!(result, domain);
    }

    #[test]
    fn ensure_superset_values_preserves_domain_order_and_dedups() {
        let domain = vec![10, 20, 30, 40];
        let selector = Selector::Values(vec![40, 10, 10, 99]);
        let result = ensure_superset(&domain, &selector).unwrap();
        assert_eq!(result, vec![10, 40]);
    }

    #[test]
    fn ensure_superset_slice_is_positional() {
        let domain: Vec<usize> = (0..10).collect();
        let selector = Selector::Slice { start: 2, stop: 8, step: 2 };
        let result = ensure_superset(&domain, &selector).unwrap();
        assert_eq!(result, vec![2, 4, 6]);
    }

    #[test]
    fn ensure_superset_rejects_zero_step() {
        let domain = vec![1, 2, 3];
        let selector = Selector::Slice { start: 0, stop: 3, step: 0 };
        assert!(ensure_superset(&domain, &selector).is_err());
    }

    #[test]
    fn masked_grid_reports_absence_for_unwritten_cells() {
        let mut grid = Grid2D::filled(2, 2, -1.0f32, true);
        grid.set(0, 1, 9.0);
        assert_eq!(grid.get(0, 1), Some(9.0));
        assert_eq!(grid.get(1, 0), None);
        assert_eq!(grid.as_slice()[1 * 2 + 0], -1.0);
    }

    #[test]
    fn filled_grid_reports_fill_value_for_unwritten_cells() {
        let mut grid = Grid2D::filled(2, 2, -1.0f32, false);
        grid.set(0, 1, 9.0);
        assert_eq!(grid.get(0, 1), Some(9.0));
        assert_eq!(grid.get(1, 0), Some(-1.0));
        assert!(!grid.is_present(1, 0));
    }

    struct FakeReader {
        inlines: Vec<i32>,
        xlines: Vec<i32>,
        traces: Vec<((i32, i32), usize)>,
        samples: Vec<Vec<f32>>,
    }

    impl SegyReader3D for FakeReader {
        fn num_inlines(&self) -> usize {
            self.inlines.len()
        }
        fn num_xlines(&self) -> usize {
            self.xlines.len()
        }
        fn inline_numbers(&self) -> &[i32] {
            &self.inlines
        }
        fn xline_numbers(&self) -> &[i32] {
            &self.xlines
        }
        fn inline_xline_numbers(&self) -> Box<dyn Iterator<Item = (i32, i32)> + '_> {
            Box::new(self.traces.iter().map(|(k, _)| *k))
        }
        fn trace_index(&self, key: (i32, i32)) -> Option<usize> {
            self.traces.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
        }
        fn trace_header(&self, _idx: usize) -> Result<TraceHeader, SegyError> {
            unimplemented!("not exercised by extract tests")
        }
        fn num_trace_samples(&self, idx: usize) -> Result<usize, SegyError> {
            Ok(self.samples[idx].len())
        }
        fn max_num_trace_samples(&self) -> usize {
            self.samples.iter().map(|s| s.len()).max().unwrap_or(0)
        }
        fn trace_samples(&self, idx: usize, start: usize, stop: usize) -> Result<Vec<f32>, SegyError> {
            Ok(self.samples[idx][start..stop].to_vec())
        }
        fn data_sample_format(&self) -> segy_core::enums::SampleFormatCode {
            segy_core::enums::SampleFormatCode::Float32
        }
    }

    fn fake_reader() -> FakeReader {
        FakeReader {
            inlines: vec![10, 11],
            xlines: vec![20, 21],
            traces: vec![((10, 20), 0), ((10, 21), 1), ((11, 20), 2)],
            samples: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]],
        }
    }

    #[test]
    fn extract_trace_selects_all_samples_by_default() {
        let reader = fake_reader();
        let samples = extract_trace(&reader, 1, &Selector::All).unwrap();
        assert_eq!(samples, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn extract_inline_3d_leaves_missing_traces_unset_in_masked_mode() {
        let reader = fake_reader();
        let grid = extract_inline_3d(&reader, 11, &Selector::All, &Selector::All, None).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.get(0, 0), Some(7.0));
        assert!(!reader.has_trace_index((11, 21)));
        assert_eq!(grid.get(1, 0), None);
    }

    #[test]
    fn extract_inline_3d_fills_missing_traces_with_null() {
        let reader = fake_reader();
        let grid = extract_inline_3d(&reader, 11, &Selector::All, &Selector::All, Some(-9.0)).unwrap();
        assert_eq!(grid.get(0, 0), Some(7.0));
        assert_eq!(grid.get(1, 0), Some(-9.0));
    }

    #[test]
    fn extract_inline_3d_rejects_unknown_inline() {
        let reader = fake_reader();
        let err = extract_inline_3d(&reader, 999, &Selector::All, &Selector::All, None).unwrap_err();
        assert!(matches!(err, SegyError::KeyNotFound { .. }));
    }

    struct NoLineCatalogReader(FakeReader);

    impl SegyReader3D for NoLineCatalogReader {
        fn num_inlines(&self) -> usize {
            self.0.num_inlines()
        }
        fn num_xlines(&self) -> usize {
            self.0.num_xlines()
        }
        fn inline_numbers(&self) -> &[i32] {
            self.0.inline_numbers()
        }
        fn xline_numbers(&self) -> &[i32] {
            self.0.xline_numbers()
        }
        fn inline_xline_numbers(&self) -> Box<dyn Iterator<Item = (i32, i32)> + '_> {
            self.0.inline_xline_numbers()
        }
        fn trace_index(&self, key: (i32, i32)) -> Option<usize> {
            self.0.trace_index(key)
        }
        fn trace_header(&self, idx: usize) -> Result<TraceHeader, SegyError> {
            self.0.trace_header(idx)
        }
        fn num_trace_samples(&self, idx: usize) -> Result<usize, SegyError> {
            self.0.num_trace_samples(idx)
        }
        fn max_num_trace_samples(&self) -> usize {
            self.0.max_num_trace_samples()
        }
        fn trace_samples(&self, idx: usize, start: usize, stop: usize) -> Result<Vec<f32>, SegyError> {
            self.0.trace_samples(idx, start, stop)
        }
        fn data_sample_format(&self) -> segy_core::enums::SampleFormatCode {
            self.0.data_sample_format()
        }
        fn has_line_catalog(&self) -> bool {
            false
        }
    }

    #[test]
    fn extract_inline_3d_reports_operation_not_supported_without_line_catalog() {
        let reader = NoLineCatalogReader(fake_reader());
        let err = extract_inline_3d(&reader, 11, &Selector::All, &Selector::All, None).unwrap_err();
        assert!(matches!(err, SegyError::OperationNotSupported { .. }));
    }

    #[test]
    fn extract_trace_header_field_3d_reports_operation_not_supported_without_line_catalog() {
        let reader = NoLineCatalogReader(fake_reader());
        let err = extract_trace_header_field_3d(&reader, |h| h.ensemble_no as i64, None).unwrap_err();
        assert!(matches!(err, SegyError::OperationNotSupported { .. }));
    }
}
