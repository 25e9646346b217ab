//! Memory-maps a SEG-Y file and exposes byte-range accessors for its fixed headers.
use segy_core::errors::*;
use segy_core::{BinHeader, BIN_HEADER_LEN, TEXT_HEADER_LEN, TRACE_HEADER_LEN};

use crate::header_codec::HeaderFromBytes;

use encoding8::ebcdic::to_ascii;
use memmap2::{Mmap, MmapOptions};

/// A memory map of a SEG-Y file together with the file handle that backs it.
#[derive(Debug)]
pub struct MappedSegY {
    pub(crate) map: Mmap,
    _file: std::fs::File,
}

impl MappedSegY {
    /// Map a file and perform the minimum sanity check: is it even big enough to hold a
    /// textual header, a binary header, and one trace header?
    pub fn new(file_name: &str) -> Result<MappedSegY, SegyError> {
        let (map, file) = map_file_to_memory(file_name)?;
        if map.len() <= TEXT_HEADER_LEN + BIN_HEADER_LEN + TRACE_HEADER_LEN {
            return Err(SegyError::FileTooShort);
        }
        Ok(MappedSegY { map, _file: file })
    }

    /// Length of the mapped file in bytes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Raw access to the whole map, for the scanner and extractor.
    pub fn as_slice(&self) -> &[u8] {
        &self.map[..]
    }

    /// Reads the 3200-byte textual header and decodes it from EBCDIC if it isn't already
    /// printable ASCII.
    pub fn get_text_header(&self) -> Result<String, SegyError> {
        let header_bytes = convert_bytes_to_ascii(&self.map, 0, TEXT_HEADER_LEN);
        Ok(String::from_utf8_lossy(&header_bytes).to_string())
    }

    /// Parses the 400-byte reel header at bytes 3200..3600.
    pub fn get_bin_header(&self) -> Result<BinHeader, SegyError> {
        let start = TEXT_HEADER_LEN;
        BinHeader::from_bytes(&self.map[start..(start + BIN_HEADER_LEN)])
    }

    /// Reads `count` 3200-byte extended text headers following the reel header.
    pub fn get_extended_text_headers(&self, count: u32) -> Result<Vec<String>, SegyError> {
        if count == 0 {
            return Ok(Vec::with_capacity(0));
        }

        let start_byte = TEXT_HEADER_LEN + BIN_HEADER_LEN;
        let count = count as usize;
        if self.map.len() < start_byte + count * TEXT_HEADER_LEN {
            return Err(SegyError::SegyTooShort);
        }

        let mut extra_headers = Vec::with_capacity(count);
        for i in 0..count {
            let start = start_byte + i * TEXT_HEADER_LEN;
            let header_bytes = convert_bytes_to_ascii(&self.map, start, TEXT_HEADER_LEN);
            extra_headers.push(String::from_utf8_lossy(&header_bytes).to_string());
        }
        Ok(extra_headers)
    }

    /// Byte offset at which trace data begins, given how many extended text headers precede it.
    pub fn trace_data_start(extended_header_count: usize) -> usize {
        TEXT_HEADER_LEN * (extended_header_count + 1) + BIN_HEADER_LEN
    }
}

pub(crate) fn map_file_to_memory(file_name: &str) -> Result<(Mmap, std::fs::File), SegyError> {
    let file = std::fs::File::open(file_name).map_err(SegyError::MapFile)?;
    let map = unsafe { MmapOptions::new().map(&file).map_err(SegyError::MapFile)? };
    Ok((map, file))
}

fn is_ascii(map: &Mmap, start: usize, len: usize) -> bool {
    map[start..(start + len)]
        .iter()
        .all(|c| c.is_ascii() && !c.is_ascii_control())
}

fn convert_bytes_to_ascii(map: &Mmap, start: usize, len: usize) -> Vec<u8> {
    if is_ascii(map, start, len) {
        map[start..(start + len)].to_vec()
    } else {
        map[start..(start + len)].iter().map(|c| to_ascii(*c)).collect()
    }
}
