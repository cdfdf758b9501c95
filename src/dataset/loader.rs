// src/dataset/loader.rs
use crate::dataset::listing::Listing;
use base64::Engine;
use sha2::{Digest, Sha256};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum LoadError {
    Io { source: String, msg: String },
    Parse { line: Option<u64>, msg: String },
    Empty { source: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { source, msg } => write!(f, "cannot read {source}: {msg}"),
            LoadError::Parse {
                line: Some(line),
                msg,
            } => write!(f, "line {line}: {msg}"),
            LoadError::Parse { line: None, msg } => write!(f, "{msg}"),
            LoadError::Empty { source } => write!(f, "{source} contains no listings"),
        }
    }
}

impl Error for LoadError {}

/// Immutable snapshot of the sales file. Loaded once, then shared read-only
/// by every request.
#[derive(Debug)]
pub struct Dataset {
    source: String,
    fingerprint: String,
    listings: Vec<Listing>,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let bytes = fs::read(path).map_err(|e| LoadError::Io {
            source: source.clone(),
            msg: e.to_string(),
        })?;

        Self::from_bytes(&bytes, source)
    }

    /// Parse CSV bytes (with a header row) into a snapshot.
    pub fn from_bytes(bytes: &[u8], source: impl Into<String>) -> Result<Self, LoadError> {
        let source = source.into();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let mut listings = Vec::new();
        for result in reader.deserialize::<Listing>() {
            let listing = result.map_err(|e| LoadError::Parse {
                line: e.position().map(|p| p.line()),
                msg: e.to_string(),
            })?;
            listings.push(listing);
        }

        if listings.is_empty() {
            return Err(LoadError::Empty { source });
        }

        Ok(Self {
            source,
            fingerprint: fingerprint(bytes),
            listings,
        })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// URL-safe SHA-256 of the raw file, used as the response ETag.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }
}

fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
}
