//! Site resource overlay

use std::path::{Path, PathBuf};

use log::info;

use crate::common::Result;
use crate::conf::Configuration;

/// Site files overlaid from the conf directory, in load order
pub const SITE_FILES: [&str; 4] = ["core-site.xml", "hdfs-site.xml", "mapred-site.xml", "yarn-site.xml"];

/// Overlay every site file present in `conf_dir` onto `conf`
///
/// Missing files are skipped; partial deployments are normal. Returns the
/// paths that were loaded.
pub fn load_resources(conf_dir: &Path, conf: &mut Configuration) -> Result<Vec<PathBuf>> {
    let mut loaded = Vec::with_capacity(SITE_FILES.len());

    for name in SITE_FILES {
        let file = conf_dir.join(name);
        if !file.exists() {
            info!("Cluster config file not found: {}", file.display());
            continue;
        }
        conf.add_resource(&file)?;
        loaded.push(file);
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfError;
    use std::fs;

    fn site(props: &[(&str, &str)]) -> String {
        let body: String = props
            .iter()
            .map(|(k, v)| format!("<property><name>{}</name><value>{}</value></property>", k, v))
            .collect();
        format!("<configuration>{}</configuration>", body)
    }

    #[test]
    fn test_loads_only_present_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("yarn-site.xml"), site(&[("k", "yarn")])).unwrap();
        fs::write(dir.path().join("core-site.xml"), site(&[("k", "core"), ("only.core", "1")])).unwrap();

        let mut conf = Configuration::new();
        let loaded = load_resources(dir.path(), &mut conf).unwrap();

        assert_eq!(
            loaded,
            vec![dir.path().join("core-site.xml"), dir.path().join("yarn-site.xml")]
        );
        assert_eq!(conf.get("k"), Some("yarn"));
        assert_eq!(conf.get("only.core"), Some("1"));
    }

    #[test]
    fn test_empty_dir_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut conf = Configuration::new();
        let before = conf.clone();

        assert!(load_resources(dir.path(), &mut conf).unwrap().is_empty());
        assert_eq!(conf, before);
    }

    #[test]
    fn test_broken_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hdfs-site.xml"), "<configuration><property>").unwrap();

        let mut conf = Configuration::new();
        assert!(matches!(
            load_resources(dir.path(), &mut conf),
            Err(ConfError::ResourceParse { .. })
        ));
    }
}
