use std::borrow::Cow;

use base64::{engine::general_purpose, Engine as _};

use crate::error::{Error, Result};

pub const HEADER: &[u8] = b"[AutoProxy ";

/// Strips the base64 envelope if the whole input decodes cleanly, otherwise
/// hands the input back untouched. Line breaks between encoded blocks are
/// ignored, published lists wrap at 64 columns.
pub fn unwrap_envelope(raw: &[u8]) -> Cow<'_, [u8]> {
    let compact: Vec<u8> = raw
        .iter()
        .copied()
        .filter(|b| !matches!(b, b'\r' | b'\n'))
        .collect();

    match general_purpose::STANDARD.decode(&compact) {
        Ok(decoded) => {
            log::debug!("base64 envelope detected, {} bytes decoded", decoded.len());
            Cow::Owned(decoded)
        }
        Err(error) => {
            log::debug!("input is not base64 ({}), using it as plain text", error);
            Cow::Borrowed(raw)
        }
    }
}

pub fn check_header(text: &[u8]) -> Result<()> {
    if text.starts_with(HEADER) {
        Ok(())
    } else {
        Err(Error::InvalidHeader)
    }
}
