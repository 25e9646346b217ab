//! Core structures and primitives shared by the scanner and reader: parsed headers, the
//! catalog family used to index traces without holding a `Vec` per header, enums, and the
//! error type. Can be built either with serialization support, or in a slightly more
//! lightweight manner without it (see features).
#![allow(clippy::derive_partial_eq_without_eq)]
extern crate num;
#[macro_use]
extern crate num_derive;
extern crate ibmfloat;

#[cfg(any(feature = "to_json", feature = "serde"))]
extern crate serde;
#[cfg(feature = "to_json")]
extern crate serde_json;

pub mod bitconverter;
pub mod catalog;
pub mod enums;
pub mod errors;
pub mod header_structs;
pub mod settings;
#[cfg(test)]
mod tests;

pub use errors::SegyError;

pub use catalog::{Catalog, Catalog2D, CatalogBuilder, CatalogBuilder2D};
pub use enums::*;
pub use header_structs::*;
pub use settings::SegySettings;

pub const TEXT_HEADER_LEN: usize = 3200;
pub const BIN_HEADER_LEN: usize = 400;
pub const TRACE_HEADER_LEN: usize = 240;
pub const INLINE_BYTE_LOCATION: usize = 188;
pub const CROSSLINE_BYTE_LOCATION: usize = 192;
pub const CDP_BYTE_LOCATION: usize = 20;
pub const CDPX_BYTE_LOCATION: usize = 180;
pub const CDPY_BYTE_LOCATION: usize = 184;
pub const NS_BYTE_LOCATION: usize = 114;

/// All of the metadata needed to make sense of a SEG-Y file: textual header, extended text
/// headers, reel header, and the settings a scan was run with.
pub struct SegyMetadata<S> {
    pub text_header: String,
    pub extended_headers: Vec<String>,
    pub bin_header: BinHeader,
    pub settings: S,
}

impl<S> SegyMetadata<S> {
    pub fn new(
        text_header: String,
        extended_headers: Vec<String>,
        bin_header: BinHeader,
        settings: S,
    ) -> Self {
        Self {
            text_header,
            extended_headers,
            bin_header,
            settings,
        }
    }

    /// Get the SEG-Y Settings.
    pub fn get_settings(&self) -> &S {
        &self.settings
    }

    /// Get the text header.
    pub fn get_text_header(&self) -> &str {
        &self.text_header
    }

    /// Get the extended headers.
    pub fn extended_headers_iter(&self) -> std::slice::Iter<String> {
        self.extended_headers.iter()
    }

    /// Get the extended headers.
    pub fn get_extended_headers(&self) -> &[String] {
        &self.extended_headers
    }

    /// Get the text header as collection of short substrings. This function
    /// clones the content of the text header.
    pub fn get_text_header_lines(&self) -> Vec<String> {
        self.text_header
            .chars()
            .collect::<Vec<char>>()
            .as_slice()
            .chunks(80)
            .map(|c| c.iter().collect::<String>())
            .collect::<Vec<String>>()
    }

    /// Get the binary header.
    pub fn get_bin_header(&self) -> &BinHeader {
        &self.bin_header
    }

    /// This function gets all the fields of [`SegyMetadata`] and discards the instance. Used to get all
    /// data in an efficient manner.
    pub fn deconstruct(self) -> (String, Vec<String>, BinHeader, S) {
        let SegyMetadata {
            text_header,
            extended_headers,
            bin_header,
            settings,
        } = self;
        (text_header, extended_headers, bin_header, settings)
    }
}
