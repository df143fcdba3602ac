pub mod decode;
pub mod error;
pub mod output;
pub mod rule;
pub mod source;

use std::path::Path;

pub use error::{Error, Result};
pub use rule::Outcome;
pub use source::Source;

pub const GFWLIST_URL: &str = "https://github.com/gfwlist/gfwlist/raw/master/gfwlist.txt";
pub const OUTPUT_FILE: &str = "domain.conf";

pub struct TransformResult {
    /// Sorted, deduplicated.
    pub domains: Vec<String>,
    /// Lines that looked like domain rules but were rejected.
    pub unhandled: Vec<String>,
    pub dup_count: usize,
}

/// Turns a raw AutoProxy list, base64 wrapped or not, into its domains.
pub fn transform(raw: &[u8]) -> Result<TransformResult> {
    let text = decode::unwrap_envelope(raw);
    decode::check_header(&text)?;

    let text = String::from_utf8_lossy(&text);
    let mut domains = Vec::new();
    let mut unhandled = Vec::new();

    for line in text.lines().map(str::trim) {
        match rule::parse_line(line) {
            Outcome::Domain(domain) => domains.push(domain),
            Outcome::Unsupported(reason) => {
                log::warn!("unsupported line: {} ({})", line, reason);
                unhandled.push(line.to_owned());
            }
            Outcome::Ignored => {}
        }
    }

    let dup_count = finalize(&mut domains);

    Ok(TransformResult {
        domains,
        unhandled,
        dup_count,
    })
}

/// Byte-wise sort followed by adjacent dedup. Returns how many entries were dropped.
pub fn finalize(domains: &mut Vec<String>) -> usize {
    let before_dedup = domains.len();
    domains.sort();
    domains.dedup();
    before_dedup - domains.len()
}

/// Fetches, transforms and writes in one go.
pub fn run(source: &Source, dest: &Path) -> Result<TransformResult> {
    let raw = source.fetch()?;
    let result = transform(&raw)?;
    output::write_domains(dest, &result.domains)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine as _};

    const LIST: &str = "\
[AutoProxy 0.2.9]
! Checksum: abcdef
! Expires: 6h
||example.com
.example.com
|http://example.com/path
|http://blocked.example.org:8080/path
||example.net/sub/path
||127.0.0.1
@@||allowed.example.com
/^https?:\\/\\/[^\\/]+blogspot\\.(.*)/
  ||zzz.example.io
||Aaa.example.io
keyword
";

    #[test]
    fn extracts_sorted_unique_domains() {
        let result = transform(LIST.as_bytes()).unwrap();
        assert_eq!(
            result.domains,
            vec!["Aaa.example.io", "example.com", "zzz.example.io"]
        );
        assert_eq!(result.dup_count, 2);
        assert_eq!(
            result.unhandled,
            vec!["|http://blocked.example.org:8080/path", "||example.net/sub/path"]
        );
    }

    #[test]
    fn output_is_ordered_without_adjacent_duplicates() {
        let result = transform(LIST.as_bytes()).unwrap();
        for pair in result.domains.windows(2) {
            assert!(pair[0] < pair[1], "{:?}", pair);
        }
    }

    #[test]
    fn base64_is_transparent() {
        let encoded = general_purpose::STANDARD.encode(LIST);
        let plain = transform(LIST.as_bytes()).unwrap();
        let wrapped = transform(encoded.as_bytes()).unwrap();
        assert_eq!(plain.domains, wrapped.domains);
        assert_eq!(plain.unhandled, wrapped.unhandled);
    }

    #[test]
    fn missing_header_is_fatal() {
        assert!(matches!(
            transform(b"||example.com\n"),
            Err(Error::InvalidHeader)
        ));
        let encoded = general_purpose::STANDARD.encode("||example.com\n");
        assert!(matches!(
            transform(encoded.as_bytes()),
            Err(Error::InvalidHeader)
        ));
    }

    #[test]
    fn finalize_is_bytewise() {
        let mut domains: Vec<String> = ["b.com", "B.com", "a.com", "b.com", "a.com"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(finalize(&mut domains), 2);
        assert_eq!(domains, vec!["B.com", "a.com", "b.com"]);
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("gfwlist.txt");
        let output = dir.path().join(OUTPUT_FILE);
        std::fs::write(&input, LIST).unwrap();

        let result = run(&Source::File(input), &output).unwrap();
        assert_eq!(result.domains.len(), 3);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Aaa.example.io\nexample.com\nzzz.example.io\n"
        );
    }

    #[test]
    fn run_without_header_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("gfwlist.txt");
        let output = dir.path().join(OUTPUT_FILE);
        std::fs::write(&input, "not a list\n").unwrap();

        assert!(run(&Source::File(input), &output).is_err());
        assert!(!output.exists());
    }
}
