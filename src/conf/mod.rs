//! Layered client configuration
//!
//! [`Configuration`] is an ordered key/value store of strings. Layers are
//! applied in load order: the runtime defaults, then each resource added with
//! [`Configuration::add_resource`], with programmatic [`Configuration::set`]
//! calls interleaved. A later write to a key wins; a layer never erases keys
//! it does not mention.

pub mod defaults;
pub mod resource;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

use log::debug;
use url::Url;

use crate::common::fs::read_resource;
use crate::common::{ConfError, Result};

pub use self::defaults::{
    FS_DEFAULT_NAME_DEFAULT, FS_DEFAULT_NAME_KEY, FS_DEFAULT_NAME_LEGACY_KEY,
    IO_COMPRESSION_CODECS_KEY,
};

/// Layer that last wrote a property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertySource {
    /// Built-in runtime defaults
    Default,
    /// A site resource, by location
    Resource(Url),
    /// Set directly through [`Configuration::set`]
    Programmatic,
}

impl fmt::Display for PropertySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Resource(url) => write!(f, "{}", url),
            Self::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// Client configuration
///
/// Cloning produces a fully independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    properties: BTreeMap<String, String>,
    sources: HashMap<String, PropertySource>,
    resources: Vec<Url>,
}

impl Configuration {
    /// Create a configuration holding the runtime defaults
    pub fn new() -> Self {
        let mut conf = Self::empty();
        for (&key, &value) in defaults::RUNTIME_DEFAULTS.iter() {
            conf.insert(key, value, PropertySource::Default);
        }
        conf
    }

    /// Create a configuration with no properties at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get a property value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Get a property value, or `default` when it is unset
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Get a boolean property
    ///
    /// Accepts `true`/`false` in any case, surrounded by whitespace. Any other
    /// value, or an unset key, yields `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key).map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "true" => true,
            Some(v) if v == "false" => false,
            _ => default,
        }
    }

    /// Get an integer property, or `default` when it is unset
    pub fn get_i64(&self, key: &str, default: i64) -> Result<i64> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| ConfError::InvalidProperty {
                key: key.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Get a comma-separated property as trimmed, non-empty entries
    pub fn get_trimmed_strings(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Set a property
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, value, PropertySource::Programmatic);
    }

    /// Remove a property, returning its previous value
    pub fn unset(&mut self, key: &str) -> Option<String> {
        self.sources.remove(key);
        self.properties.remove(key)
    }

    /// Whether a property is set
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over all properties, sorted by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Layer that last wrote `key`
    pub fn property_source(&self, key: &str) -> Option<&PropertySource> {
        self.sources.get(key)
    }

    /// Locations of the resources added so far, in load order
    pub fn resources(&self) -> &[Url] {
        &self.resources
    }

    /// Overlay a site resource onto this configuration
    ///
    /// The file is read and parsed completely before any property is applied,
    /// so a failing resource leaves the configuration untouched.
    pub fn add_resource(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let url = resource::resource_url(path)?;
        let contents = read_resource(path)?;
        let pairs = resource::parse_site(path, &contents)?;

        debug!("Overlaying {} properties from {}", pairs.len(), url);
        for (key, value) in pairs {
            self.insert(key, value, PropertySource::Resource(url.clone()));
        }
        self.resources.push(url);

        Ok(())
    }

    fn insert(&mut self, key: impl Into<String>, value: impl Into<String>, source: PropertySource) {
        let key = key.into();
        self.sources.insert(key.clone(), source);
        self.properties.insert(key, value.into());
    }
}
