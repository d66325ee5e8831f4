//! Site resource files
//!
//! Parses the `<configuration><property>...</property></configuration>`
//! documents found in a cluster conf directory.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use url::Url;

use crate::common::{ConfError, Result};

/// Required name of the top-level element
const ROOT_ELEMENT: &str = "configuration";

// Other elements (`xi:include`, comments) may sit between properties
#[derive(Debug, Default, Deserialize)]
struct SiteFile {
    #[serde(rename = "property", default)]
    properties: Vec<SiteProperty>,
}

// `description`, `final` and `source` children are accepted and ignored
#[derive(Debug, Deserialize)]
struct SiteProperty {
    name: Option<String>,
    value: Option<String>,
}

/// Express a resource path as a `file://` URL
///
/// Relative paths are resolved against the current directory first.
pub fn resource_url(path: &Path) -> Result<Url> {
    let absolute: PathBuf = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    Url::from_file_path(&absolute).map_err(|()| ConfError::InvalidResource {
        path: path.to_path_buf(),
        reason: "path cannot be expressed as a file URL".to_string(),
    })
}

/// Parse the contents of a site file into ordered `(name, value)` pairs
///
/// `path` is only used for diagnostics. A property without a name is skipped;
/// one without a value maps to the empty string.
pub fn parse_site(path: &Path, contents: &str) -> Result<Vec<(String, String)>> {
    check_root(path, contents)?;

    let site: SiteFile = quick_xml::de::from_str(contents).map_err(|e| ConfError::ResourceParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut pairs = Vec::with_capacity(site.properties.len());
    for property in site.properties {
        let name = match property.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                warn!("Skipping property without a name in {}", path.display());
                continue;
            }
        };
        let value = property.value.unwrap_or_default().trim().to_string();
        pairs.push((name, value));
    }

    debug!("Parsed {} properties from {}", pairs.len(), path.display());
    Ok(pairs)
}

/// Reject documents whose top-level element is not `<configuration>`
fn check_root(path: &Path, contents: &str) -> Result<()> {
    let parse_error = |message: String| ConfError::ResourceParse {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = Reader::from_str(contents);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == ROOT_ELEMENT {
                    return Ok(());
                }
                return Err(parse_error(format!(
                    "bad root element <{}>, expected <{}>",
                    name, ROOT_ELEMENT
                )));
            }
            Ok(Event::Eof) => return Err(parse_error("no root element".to_string())),
            Ok(_) => continue,
            Err(e) => return Err(parse_error(e.to_string())),
        }
    }
}
