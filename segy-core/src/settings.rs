//! This module contains the [`SegySettings`] structure, which narrows a scan down to a
//! region of interest.
//!
//! Header byte layout is fixed by the standard and is not configurable here: this is a
//! read/access library, not a tool for coping with non-conformant files.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
/// Settings that bound which traces a scan keeps in its catalogs.
///
/// A trace whose inline or crossline number falls outside the configured bounds is skipped
/// during the scan, as though it were never in the file. Leaving both bounds unset keeps
/// every trace.
pub struct SegySettings {
    /// Minimum and maximum inline number to keep, inclusive. `None` keeps every inline.
    pub(crate) inline_min_max: Option<[i32; 2]>,
    /// Minimum and maximum crossline number to keep, inclusive. `None` keeps every crossline.
    pub(crate) crossline_min_max: Option<[i32; 2]>,
}

impl SegySettings {
    #[cfg(feature = "to_json")]
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(&self).map_err(|e| e.to_string())
    }

    /// Sets the mininum and maximum inline value to the input values.
    pub fn set_inline_min_max(&mut self, min_max: [i32; 2]) {
        self.inline_min_max = Some(min_max);
    }

    /// Sets the minimum and maximum crossline value to the input value.
    pub fn set_crossline_min_max(&mut self, min_max: [i32; 2]) {
        self.crossline_min_max = Some(min_max);
    }

    /// Get the minimum and maximum inline value, if any.
    pub fn get_inline_min_max(&self) -> Option<[i32; 2]> {
        self.inline_min_max
    }

    /// Get the minimum and maximum crossline value, if any.
    pub fn get_crossline_min_max(&self) -> Option<[i32; 2]> {
        self.crossline_min_max
    }

    /// Check whether a given inline and crossline number will be in bounds
    /// according to the options. If no inline/crossline min-max is set, the
    /// return is [`true`].
    /// ```
    /// # use segy_core::settings::SegySettings;
    /// let mut settings = SegySettings::default();
    /// assert!(settings.trace_in_bounds(99999, -99999));
    ///
    /// settings.set_inline_min_max([50, 2000]);
    /// assert_ne!(settings.trace_in_bounds(99999, -99999), true);
    /// assert!(settings.trace_in_bounds(100, -99999));
    ///
    /// settings.set_crossline_min_max([50, 2000]);
    /// assert_ne!(settings.trace_in_bounds(100, -99999), true);
    /// assert!(settings.trace_in_bounds(100, 100));
    /// ```
    pub fn trace_in_bounds(&self, inline: i32, crossline: i32) -> bool {
        let inline_ok = if let Some([min, max]) = self.inline_min_max {
            inline <= max && inline >= min
        } else {
            true
        };
        let crossline_ok = if let Some([min, max]) = self.crossline_min_max {
            crossline <= max && crossline >= min
        } else {
            true
        };
        inline_ok && crossline_ok
    }
}
