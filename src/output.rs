use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Writes one domain per line, LF terminated. The file is truncated first and
/// is left as is if a write fails half way.
pub fn write_domains(path: &Path, domains: &[String]) -> Result<()> {
    let to_error = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut output = BufWriter::new(File::create(path).map_err(to_error)?);
    for domain in domains {
        writeln!(output, "{}", domain).map_err(to_error)?;
    }
    output.flush().map_err(to_error)
}
