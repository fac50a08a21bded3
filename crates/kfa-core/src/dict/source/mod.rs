mod ipadict;

use std::fs;
use std::path::PathBuf;

use super::DictError;

pub use ipadict::parse_ipadict_txt;

/// Where the JSON dictionary resource comes from.
pub trait DictSource: Send + Sync {
    /// Fetch the raw JSON text.
    fn fetch(&self) -> Result<String, DictError>;

    /// Human-readable location, for logs and error messages.
    fn describe(&self) -> String;
}

/// A JSON file on the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DictSource for FileSource {
    fn fetch(&self) -> Result<String, DictError> {
        Ok(fs::read_to_string(&self.path)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Upper bound on a downloaded dictionary body.
const MAX_DOWNLOAD_BYTES: u64 = 64 * 1024 * 1024;

/// A JSON resource served over HTTP(S).
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DictSource for HttpSource {
    fn fetch(&self) -> Result<String, DictError> {
        let url = &self.url;
        ureq::get(url.as_str())
            .call()
            .map_err(|e| DictError::Http(format!("{url}: {e}")))?
            .into_body()
            .with_config()
            .limit(MAX_DOWNLOAD_BYTES)
            .read_to_string()
            .map_err(|e| DictError::Http(format!("{url}: {e}")))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// JSON text already in memory.
pub struct InlineSource {
    json: String,
}

impl InlineSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl DictSource for InlineSource {
    fn fetch(&self) -> Result<String, DictError> {
        Ok(self.json.clone())
    }

    fn describe(&self) -> String {
        format!("inline ({} bytes)", self.json.len())
    }
}

/// Pick a source from a location string: `http://` / `https://` URLs are
/// fetched, anything else is read as a file path.
pub fn from_location(location: &str) -> Box<dyn DictSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}
