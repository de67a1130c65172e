//! Open Packaging Conventions container: a plain ZIP archive holding the
//! XML parts of the document. Entries are deflate-compressed; checksums
//! and compression both come from flate2. The reader half exists so the
//! engine can verify its own packages and so tests can inspect parts.

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::{Compression, Crc};
use pardoc_render_core::RenderError;
use std::io::{Read, Write};

const LOCAL_HEADER_SIG: u32 = 0x0403_4b50;
const CENTRAL_DIR_SIG: u32 = 0x0201_4b50;
const END_OF_CENTRAL_DIR_SIG: u32 = 0x0605_4b50;

const METHOD_STORED: u16 = 0;
const METHOD_DEFLATE: u16 = 8;

/// One named part of the package, e.g. `word/document.xml`.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub data: Vec<u8>,
}

impl Part {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self { name: name.into(), data }
    }
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn crc32(data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(data);
    crc.sum()
}

/// Serializes the parts into a ZIP package. Entries are deflated unless
/// that would grow them (tiny fixed parts), in which case they are stored.
pub fn write_package(parts: &[Part]) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::new();
    let mut central = Vec::new();
    let entries = parts.len() as u16;

    for part in parts {
        let name = part.name.as_bytes();
        if name.len() > u16::MAX as usize {
            return Err(RenderError::Container(format!("part name too long: {}", part.name)));
        }
        let offset = out.len() as u32;
        let crc = crc32(&part.data);
        let compressed = deflate(&part.data)?;
        let (method, payload) = if compressed.len() < part.data.len() {
            (METHOD_DEFLATE, compressed)
        } else {
            (METHOD_STORED, part.data.clone())
        };

        push_u32(&mut out, LOCAL_HEADER_SIG);
        push_u16(&mut out, 20); // version needed
        push_u16(&mut out, 0); // flags
        push_u16(&mut out, method);
        push_u16(&mut out, 0); // mod time
        push_u16(&mut out, 0); // mod date
        push_u32(&mut out, crc);
        push_u32(&mut out, payload.len() as u32);
        push_u32(&mut out, part.data.len() as u32);
        push_u16(&mut out, name.len() as u16);
        push_u16(&mut out, 0); // extra length
        out.extend_from_slice(name);
        out.extend_from_slice(&payload);

        push_u32(&mut central, CENTRAL_DIR_SIG);
        push_u16(&mut central, 20); // version made by
        push_u16(&mut central, 20); // version needed
        push_u16(&mut central, 0); // flags
        push_u16(&mut central, method);
        push_u16(&mut central, 0); // mod time
        push_u16(&mut central, 0); // mod date
        push_u32(&mut central, crc);
        push_u32(&mut central, payload.len() as u32);
        push_u32(&mut central, part.data.len() as u32);
        push_u16(&mut central, name.len() as u16);
        push_u16(&mut central, 0); // extra length
        push_u16(&mut central, 0); // comment length
        push_u16(&mut central, 0); // disk number
        push_u16(&mut central, 0); // internal attributes
        push_u32(&mut central, 0); // external attributes
        push_u32(&mut central, offset);
        central.extend_from_slice(name);
    }

    let central_offset = out.len() as u32;
    let central_size = central.len() as u32;
    out.extend_from_slice(&central);

    push_u32(&mut out, END_OF_CENTRAL_DIR_SIG);
    push_u16(&mut out, 0); // this disk
    push_u16(&mut out, 0); // central directory disk
    push_u16(&mut out, entries);
    push_u16(&mut out, entries);
    push_u32(&mut out, central_size);
    push_u32(&mut out, central_offset);
    push_u16(&mut out, 0); // comment length

    Ok(out)
}

fn read_u16(data: &[u8], at: usize) -> Result<u16, RenderError> {
    let bytes: [u8; 2] = data
        .get(at..at + 2)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| RenderError::Container("truncated package".into()))?;
    Ok(u16::from_le_bytes(bytes))
}

fn read_u32(data: &[u8], at: usize) -> Result<u32, RenderError> {
    let bytes: [u8; 4] = data
        .get(at..at + 4)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| RenderError::Container("truncated package".into()))?;
    Ok(u32::from_le_bytes(bytes))
}

/// Extracts one part by name, walking the local entries in order.
/// Returns `Ok(None)` when the package is well-formed but the part is
/// missing.
pub fn read_part(package: &[u8], name: &str) -> Result<Option<Vec<u8>>, RenderError> {
    let mut at = 0usize;
    loop {
        let sig = read_u32(package, at)?;
        if sig != LOCAL_HEADER_SIG {
            // Reached the central directory without a match.
            return Ok(None);
        }
        let method = read_u16(package, at + 8)?;
        let compressed_size = read_u32(package, at + 18)? as usize;
        let uncompressed_size = read_u32(package, at + 22)? as usize;
        let name_len = read_u16(package, at + 26)? as usize;
        let extra_len = read_u16(package, at + 28)? as usize;

        let name_start = at + 30;
        let data_start = name_start + name_len + extra_len;
        let entry_name = package
            .get(name_start..name_start + name_len)
            .ok_or_else(|| RenderError::Container("truncated entry name".into()))?;
        let payload = package
            .get(data_start..data_start + compressed_size)
            .ok_or_else(|| RenderError::Container("truncated entry data".into()))?;

        if entry_name == name.as_bytes() {
            let data = match method {
                METHOD_STORED => payload.to_vec(),
                METHOD_DEFLATE => {
                    let mut decoder = DeflateDecoder::new(payload);
                    let mut data = Vec::with_capacity(uncompressed_size);
                    decoder
                        .read_to_end(&mut data)
                        .map_err(|e| RenderError::Container(format!("inflate failed: {e}")))?;
                    data
                }
                other => {
                    return Err(RenderError::Container(format!(
                        "unsupported compression method {other}"
                    )))
                }
            };
            return Ok(Some(data));
        }
        at = data_start + compressed_size;
    }
}

/// Lists the part names of a package, in storage order.
pub fn part_names(package: &[u8]) -> Result<Vec<String>, RenderError> {
    let mut names = Vec::new();
    let mut at = 0usize;
    loop {
        let sig = read_u32(package, at)?;
        if sig != LOCAL_HEADER_SIG {
            return Ok(names);
        }
        let compressed_size = read_u32(package, at + 18)? as usize;
        let name_len = read_u16(package, at + 26)? as usize;
        let extra_len = read_u16(package, at + 28)? as usize;
        let name_start = at + 30;
        let entry_name = package
            .get(name_start..name_start + name_len)
            .ok_or_else(|| RenderError::Container("truncated entry name".into()))?;
        names.push(String::from_utf8_lossy(entry_name).into_owned());
        at = name_start + name_len + extra_len + compressed_size;
    }
}
