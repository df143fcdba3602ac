//! Extraction of bare domains from AutoProxy rule lines.
//!
//! Only the anchored shapes carry a domain we can use:
//!
//! * `.example.com`: domain anchor, handled exactly like `||example.com`
//! * `||example.com`: full domain anchor, trailing slashes allowed
//! * `|http://example.com/path`: URL prefix, the host is taken
//!
//! Comments, exceptions, keyword and regex rules are ignored.

use std::net::IpAddr;

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Domain(String),
    /// Not a domain bearing rule, dropped without a word.
    Ignored,
    /// Looks like a domain rule but uses something we can't express.
    Unsupported(String),
}

/// Expects a line already trimmed of surrounding whitespace.
pub fn parse_line(line: &str) -> Outcome {
    if !line.contains('.') {
        return Outcome::Ignored;
    }

    let candidate = if let Some(rest) = line.strip_prefix('.') {
        anchored_domain(rest)
    } else if let Some(rest) = line.strip_prefix("||") {
        anchored_domain(rest)
    } else if let Some(rest) = line.strip_prefix('|') {
        url_host(rest)
    } else {
        return Outcome::Ignored;
    };

    match candidate {
        Ok(domain) if is_dots(&domain) || is_ip(&domain) => Outcome::Ignored,
        Ok(domain) => Outcome::Domain(domain),
        Err(reason) => Outcome::Unsupported(reason),
    }
}

fn anchored_domain(rest: &str) -> Result<String, String> {
    let domain = rest.trim_end_matches('/');
    if domain.contains('/') {
        return Err(format!("{} has a path", domain));
    }
    Ok(domain.to_owned())
}

/// `Url` only validates; the host is cut from the text as written, since
/// `Url` folds case, punycodes and drops default ports.
fn url_host(rest: &str) -> Result<String, String> {
    let rest = rest.replace('*', "/");
    Url::parse(&rest).map_err(|error| format!("{} in {}", error, rest))?;

    let host = authority(&rest).ok_or_else(|| format!("{} has no host", rest))?;
    if !host.contains('.') {
        return Err(format!("{} is not a domain", host));
    }
    if host.contains(':') {
        return Err(format!("{} specifies a port", rest));
    }
    Ok(host.to_owned())
}

/// Host and port between `://` and the path, userinfo removed.
fn authority(url: &str) -> Option<&str> {
    let (_, after) = url.split_once("://")?;
    let end = after.find(['/', '?', '#']).unwrap_or(after.len());
    let authority = &after[..end];
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Empty, or nothing but dots.
fn is_dots(candidate: &str) -> bool {
    candidate.chars().all(|c| c == '.')
}

fn is_ip(candidate: &str) -> bool {
    candidate.parse::<IpAddr>().is_ok()
}
