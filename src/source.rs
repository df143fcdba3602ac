use std::fs;
use std::path::PathBuf;

use reqwest::StatusCode;

use crate::error::{Error, Result};
use crate::GFWLIST_URL;

/// Where the raw list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    File(PathBuf),
}

impl Source {
    /// A path on the command line means file mode, otherwise the published list.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Source::File(path),
            None => Source::Remote(GFWLIST_URL.to_owned()),
        }
    }

    pub fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Source::Remote(url) => {
                log::info!("Fetching gfwlist from {}", url);
                let response = reqwest::blocking::get(url)?;
                if response.status() != StatusCode::OK {
                    return Err(Error::Status(response.status()));
                }
                Ok(response.bytes()?.to_vec())
            }
            Source::File(path) => {
                log::info!("Reading gfwlist from {}", path.display());
                fs::read(path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}
