//! Immutable mappings used to index traces without retaining a header per trace.
//!
//! A scan accumulates raw `(key, value)` pairs into a [`CatalogBuilder`] (or
//! [`CatalogBuilder2D`] for the inline/crossline index) and then calls `build`, which picks
//! the most compact representation the data actually supports: a run of traces on a
//! contiguous CDP range all the same length collapses to a few integers instead of one entry
//! per trace.
//!
//! Keys and values are kept as plain `i64` (and `(i32, i32)` for the 2D case) rather than
//! generic parameters; callers cast to the domain type (`usize` trace index, `i32`
//! inline/crossline number) at the edges.
use crate::errors::SegyError;

/// A one-dimensional immutable mapping from an integer key to an integer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catalog {
    /// Arbitrary keys and values, kept as sorted pairs.
    Dictionary(Vec<(i64, i64)>),
    /// Keys spaced at a constant stride, all mapping to the same value.
    RegularConstant {
        key_min: i64,
        key_max: i64,
        key_stride: i64,
        value: i64,
    },
    /// Arbitrary keys, all mapping to the same value.
    Constant { keys: Vec<i64>, value: i64 },
    /// Keys spaced at a constant stride, values arbitrary.
    Regular {
        key_min: i64,
        key_max: i64,
        key_stride: i64,
        values: Vec<i64>,
    },
    /// Keys and values both regularly spaced, related by an exact linear function.
    LinearRegular {
        key_min: i64,
        key_max: i64,
        key_stride: i64,
        value_start: i64,
        value_stop: i64,
        value_stride: i64,
    },
}

impl Catalog {
    /// Look up a value by key.
    pub fn get(&self, key: i64) -> Option<i64> {
        match self {
            Catalog::Dictionary(items) => items
                .binary_search_by_key(&key, |(k, _)| *k)
                .ok()
                .map(|i| items[i].1),
            Catalog::RegularConstant {
                key_min,
                key_max,
                key_stride,
                value,
            } => contains_regular(*key_min, *key_max, *key_stride, key).then_some(*value),
            Catalog::Constant { keys, value } => {
                keys.binary_search(&key).ok().map(|_| *value)
            }
            Catalog::Regular {
                key_min,
                key_max,
                key_stride,
                values,
            } => {
                if !contains_regular(*key_min, *key_max, *key_stride, key) {
                    return None;
                }
                let index = ((key - key_min) / key_stride) as usize;
                values.get(index).copied()
            }
            Catalog::LinearRegular {
                key_min,
                key_max,
                key_stride,
                value_start,
                value_stop,
                ..
            } => {
                if !contains_regular(*key_min, *key_max, *key_stride, key) {
                    return None;
                }
                // m = (value_stop - value_start) / (key_max - key_min), kept exact by
                // construction (build() rejects non-integral results).
                let num = (value_stop - value_start) * (key - key_min);
                let den = key_max - key_min;
                Some(num / den + value_start)
            }
        }
    }

    /// Does this catalog contain `key`?
    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries the catalog covers.
    pub fn len(&self) -> usize {
        match self {
            Catalog::Dictionary(items) => items.len(),
            Catalog::RegularConstant {
                key_min,
                key_max,
                key_stride,
                ..
            } => 1 + ((key_max - key_min) / key_stride) as usize,
            Catalog::Constant { keys, .. } => keys.len(),
            Catalog::Regular { values, .. } => values.len(),
            Catalog::LinearRegular {
                key_min,
                key_max,
                key_stride,
                ..
            } => 1 + ((key_max - key_min) / key_stride) as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the catalog's keys in ascending order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        match self {
            Catalog::Dictionary(items) => Box::new(items.iter().map(|(k, _)| *k)),
            Catalog::Constant { keys, .. } => Box::new(keys.iter().copied()),
            Catalog::RegularConstant {
                key_min,
                key_max,
                key_stride,
                ..
            }
            | Catalog::Regular {
                key_min,
                key_max,
                key_stride,
                ..
            }
            | Catalog::LinearRegular {
                key_min,
                key_max,
                key_stride,
                ..
            } => Box::new(stride_range(*key_min, *key_max, *key_stride)),
        }
    }
}

fn stride_range(key_min: i64, key_max: i64, key_stride: i64) -> impl Iterator<Item = i64> {
    std::iter::successors(Some(key_min), move |&k| {
        let next = k + key_stride;
        (next <= key_max).then_some(next)
    })
}

fn contains_regular(key_min: i64, key_max: i64, key_stride: i64, key: i64) -> bool {
    key_min <= key && key <= key_max && (key - key_min) % key_stride == 0
}

/// Accumulates `(key, value)` pairs and picks the most compact [`Catalog`] representation
/// that is consistent with them.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    items: Vec<(i64, i64)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an entry. Indices must be unique for `build` to succeed, though duplicates are
    /// accepted here without complaint.
    pub fn add(&mut self, key: i64, value: i64) {
        self.items.push((key, value));
    }

    /// Analyze the accumulated entries and produce a [`Catalog`].
    ///
    /// Returns `Ok(None)` if two entries share a key — this is not an inconsistency in the
    /// input so much as a sign the key isn't suited for indexing at all (e.g. non-unique
    /// trace ensemble numbers), distinct from a genuine stride/range inconsistency, which
    /// remains an `Err`.
    pub fn build(mut self) -> Result<Option<Catalog>, SegyError> {
        if self.items.len() < 2 {
            return Ok(Some(Catalog::Dictionary(self.items)));
        }

        self.items.sort_by_key(|(k, _)| *k);
        if has_duplicate_keys(&self.items) {
            return Ok(None);
        }

        let key_min = self.items[0].0;
        let key_max = self.items[self.items.len() - 1].0;
        let key_stride = measure_stride(self.items.iter().map(|(k, _)| *k));

        let value_start = self.items[0].1;
        let value_stop = self.items[self.items.len() - 1].1;
        let value_stride = measure_stride(self.items.iter().map(|(_, v)| *v));

        let catalog = match (key_stride, value_stride) {
            (None, None) => Catalog::Dictionary(self.items),
            (Some(ks), Some(0)) => Catalog::RegularConstant {
                key_min,
                key_max,
                key_stride: ks,
                value: value_start,
            },
            (None, Some(0)) => Catalog::Constant {
                keys: self.items.into_iter().map(|(k, _)| k).collect(),
                value: value_start,
            },
            (None, Some(_)) => Catalog::Dictionary(self.items),
            (Some(ks), None) => Catalog::Regular {
                key_min,
                key_max,
                key_stride: ks,
                values: self.items.into_iter().map(|(_, v)| v).collect(),
            },
            (Some(ks), Some(vs)) => Catalog::LinearRegular {
                key_min,
                key_max,
                key_stride: ks,
                value_start,
                value_stop,
                value_stride: vs,
            },
        };
        Ok(Some(catalog))
    }
}

fn has_duplicate_keys(sorted_items: &[(i64, i64)]) -> bool {
    sorted_items.windows(2).any(|w| w[0].0 == w[1].0)
}

/// Returns `Some(0)` if every item is equal, `Some(d)` if successive differences are all
/// the same non-zero `d`, otherwise `None`. An empty or single-item sequence yields `Some(0)`.
pub fn measure_stride<I: IntoIterator<Item = i64>>(iter: I) -> Option<i64> {
    let mut it = iter.into_iter();
    let first = it.next()?;
    let mut prev = first;
    let mut stride = None;
    for next in it {
        let d = next - prev;
        match stride {
            None => stride = Some(d),
            Some(s) if s != d => return None,
            _ => {}
        }
        prev = next;
    }
    Some(stride.unwrap_or(0))
}

/// A two-dimensional immutable mapping from an `(i32, i32)` key to an `i64` value, as used
/// for the inline/crossline index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catalog2D {
    /// Arbitrary keys and values, kept as sorted pairs.
    Dictionary(Vec<((i32, i32), i64)>),
    /// A row-major matrix: value is predicted from `(i, j)` by a constant-offset affine
    /// formula, so no data needs to be stored beyond the bounds and offset.
    RowMajor {
        i_min: i32,
        i_max: i32,
        j_min: i32,
        j_max: i32,
        c: i64,
    },
}

impl Catalog2D {
    pub fn get(&self, key: (i32, i32)) -> Option<i64> {
        match self {
            Catalog2D::Dictionary(items) => items
                .binary_search_by_key(&key, |(k, _)| *k)
                .ok()
                .map(|i| items[i].1),
            Catalog2D::RowMajor {
                i_min,
                i_max,
                j_min,
                j_max,
                c,
            } => {
                let (i, j) = key;
                if !(*i_min <= i && i <= *i_max && *j_min <= j && j <= *j_max) {
                    return None;
                }
                let value = (i as i64 - *i_min as i64) * (*j_max as i64 - *j_min as i64 + 1)
                    + (j as i64 - *j_min as i64)
                    + c;
                Some(value)
            }
        }
    }

    pub fn contains_key(&self, key: (i32, i32)) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        match self {
            Catalog2D::Dictionary(items) => items.len(),
            Catalog2D::RowMajor {
                i_min,
                i_max,
                j_min,
                j_max,
                ..
            } => {
                ((i_max - i_min + 1) as i64 * (j_max - j_min + 1) as i64) as usize
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the catalog's `(i, j)` keys, row-major order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (i32, i32)> + '_> {
        match self {
            Catalog2D::Dictionary(items) => Box::new(items.iter().map(|(k, _)| *k)),
            Catalog2D::RowMajor {
                i_min,
                i_max,
                j_min,
                j_max,
                ..
            } => {
                let (i_min, i_max, j_min, j_max) = (*i_min, *i_max, *j_min, *j_max);
                Box::new((i_min..=i_max).flat_map(move |i| (j_min..=j_max).map(move |j| (i, j))))
            }
        }
    }
}

/// Accumulates `((i32,i32), i64)` pairs and picks between a row-major prediction and a
/// plain dictionary.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder2D {
    items: Vec<((i32, i32), i64)>,
}

impl CatalogBuilder2D {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, key: (i32, i32), value: i64) {
        self.items.push((key, value));
    }

    /// Returns `Ok(None)` for duplicate `(i, j)` keys, matching [`CatalogBuilder::build`]'s
    /// two-tier error model.
    pub fn build(mut self) -> Result<Option<Catalog2D>, SegyError> {
        if self.items.len() < 2 {
            return Ok(Some(Catalog2D::Dictionary(self.items)));
        }

        self.items.sort_by_key(|(k, _)| *k);
        if self.items.windows(2).any(|w| w[0].0 == w[1].0) {
            return Ok(None);
        }

        let i_min = self.items.iter().map(|((i, _), _)| *i).min().unwrap();
        let i_max = self.items.iter().map(|((i, _), _)| *i).max().unwrap();
        let j_min = self.items.iter().map(|((_, j), _)| *j).min().unwrap();
        let j_max = self.items.iter().map(|((_, j), _)| *j).max().unwrap();

        let mut offset = None;
        let mut is_row_major = true;
        for ((i, j), actual) in &self.items {
            let predicted =
                (*i as i64 - i_min as i64) * (j_max as i64 - j_min as i64 + 1) + (*j as i64 - j_min as i64);
            let diff = actual - predicted;
            match offset {
                None => offset = Some(diff),
                Some(c) if c != diff => {
                    is_row_major = false;
                    break;
                }
                _ => {}
            }
        }

        if is_row_major {
            Ok(Some(Catalog2D::RowMajor {
                i_min,
                i_max,
                j_min,
                j_max,
                c: offset.unwrap_or(0),
            }))
        } else {
            Ok(Some(Catalog2D::Dictionary(self.items)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_stride_single() {
        assert_eq!(measure_stride([5i64]), Some(0));
    }

    #[test]
    fn measure_stride_all_equal() {
        assert_eq!(measure_stride([5i64, 5, 5]), Some(0));
    }

    #[test]
    fn measure_stride_arithmetic() {
        assert_eq!(measure_stride([0i64, 5, 10, 15]), Some(5));
    }

    #[test]
    fn measure_stride_irregular() {
        assert_eq!(measure_stride([0i64, 5, 11]), None);
    }

    #[test]
    fn regular_constant_catalog() {
        let mut b = CatalogBuilder::new();
        for k in [10, 20, 30, 40] {
            b.add(k, 100);
        }
        let c = b.build().unwrap().unwrap();
        assert_eq!(
            c,
            Catalog::RegularConstant {
                key_min: 10,
                key_max: 40,
                key_stride: 10,
                value: 100,
            }
        );
        assert_eq!(c.get(30), Some(100));
        assert_eq!(c.get(25), None);
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn linear_regular_catalog() {
        let mut b = CatalogBuilder::new();
        for (k, v) in [(0, 1000), (5, 1010), (10, 1020), (15, 1030)] {
            b.add(k, v);
        }
        let c = b.build().unwrap().unwrap();
        assert_eq!(c.get(10), Some(1020));
        assert_eq!(c.get(7), None);
    }

    #[test]
    fn dictionary_catalog_for_arbitrary_data() {
        let mut b = CatalogBuilder::new();
        b.add(3, 9);
        b.add(1, 1);
        b.add(2, 17);
        let c = b.build().unwrap().unwrap();
        assert!(matches!(c, Catalog::Dictionary(_)));
        assert_eq!(c.get(2), Some(17));
        assert_eq!(c.get(42), None);
    }

    #[test]
    fn duplicate_keys_yield_no_catalog() {
        let mut b = CatalogBuilder::new();
        b.add(1, 1);
        b.add(1, 2);
        assert_eq!(b.build().unwrap(), None);
    }

    #[test]
    fn row_major_catalog_2d() {
        let mut b = CatalogBuilder2D::new();
        let pairs = [
            ((1, 1), 1i64),
            ((1, 2), 2),
            ((1, 3), 3),
            ((2, 1), 4),
            ((2, 2), 5),
            ((2, 3), 6),
        ];
        for (k, v) in pairs {
            b.add(k, v);
        }
        let c = b.build().unwrap().unwrap();
        assert_eq!(
            c,
            Catalog2D::RowMajor {
                i_min: 1,
                i_max: 2,
                j_min: 1,
                j_max: 3,
                c: 1,
            }
        );
        assert_eq!(c.get((2, 1)), Some(4));
        assert_eq!(c.get((3, 1)), None);
        assert_eq!(c.len(), 6);
    }

    #[test]
    fn iter_matches_len_for_every_variant() {
        let mut b = CatalogBuilder::new();
        for k in [10, 20, 30, 40] {
            b.add(k, 100);
        }
        let c = b.build().unwrap().unwrap();
        assert_eq!(c.iter().count(), c.len());
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![10, 20, 30, 40]);

        let mut b2 = CatalogBuilder2D::new();
        for (k, v) in [((1, 1), 1i64), ((1, 2), 2), ((2, 1), 4), ((2, 2), 5)] {
            b2.add(k, v);
        }
        let c2 = b2.build().unwrap().unwrap();
        assert_eq!(c2.iter().count(), c2.len());
        for k in c2.iter() {
            assert!(c2.contains_key(k));
        }
    }

    #[test]
    fn non_row_major_falls_back_to_dictionary() {
        let mut b = CatalogBuilder2D::new();
        b.add((1, 1), 1);
        b.add((1, 2), 99);
        b.add((2, 1), 4);
        let c = b.build().unwrap().unwrap();
        assert!(matches!(c, Catalog2D::Dictionary(_)));
    }
}
