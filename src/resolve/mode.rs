//! Local vs distributed mode

use log::warn;
use once_cell::sync::OnceCell;

use crate::common::{ConfError, Result};
use crate::settings::{SettingsProvider, LOCAL_COMPUTATION_DEPRECATED_KEY, LOCAL_COMPUTATION_KEY};

static DEPRECATION_WARNED: OnceCell<()> = OnceCell::new();

/// Decide whether computation is local
///
/// The deprecated `model.local` setting, when present, overrides
/// `model.local-computation` whatever its value. With neither present there
/// is no default and resolution fails.
pub fn is_local(settings: &dyn SettingsProvider) -> Result<bool> {
    if let Some(local) = settings.get_bool(LOCAL_COMPUTATION_DEPRECATED_KEY)? {
        DEPRECATION_WARNED.get_or_init(|| {
            warn!(
                "{} is deprecated; use {}",
                LOCAL_COMPUTATION_DEPRECATED_KEY, LOCAL_COMPUTATION_KEY
            );
        });
        return Ok(local);
    }

    settings
        .get_bool(LOCAL_COMPUTATION_KEY)?
        .ok_or_else(|| ConfError::MissingSetting(LOCAL_COMPUTATION_KEY.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MockSettingsProvider;
    use mockall::predicate::eq;

    fn settings(canonical: Option<bool>, deprecated: Option<bool>) -> config::Config {
        let mut builder = config::Config::builder();
        if let Some(v) = canonical {
            builder = builder.set_override(LOCAL_COMPUTATION_KEY, v).unwrap();
        }
        if let Some(v) = deprecated {
            builder = builder.set_override(LOCAL_COMPUTATION_DEPRECATED_KEY, v).unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_deprecated_overrides_canonical() {
        for canonical in [true, false] {
            for deprecated in [true, false] {
                let s = settings(Some(canonical), Some(deprecated));
                assert_eq!(is_local(&s).unwrap(), deprecated);
            }
        }
    }

    #[test]
    fn test_canonical_alone() {
        assert!(is_local(&settings(Some(true), None)).unwrap());
        assert!(!is_local(&settings(Some(false), None)).unwrap());
    }

    #[test]
    fn test_deprecated_alone() {
        assert!(is_local(&settings(None, Some(true))).unwrap());
        assert!(!is_local(&settings(None, Some(false))).unwrap());
    }

    #[test]
    fn test_missing_setting_is_fatal() {
        match is_local(&settings(None, None)) {
            Err(ConfError::MissingSetting(key)) => assert_eq!(key, LOCAL_COMPUTATION_KEY),
            other => panic!("Expected MissingSetting, got {:?}", other),
        }
    }

    #[test]
    fn test_canonical_not_consulted_when_deprecated_present() {
        let mut mock = MockSettingsProvider::new();
        mock.expect_get_bool()
            .with(eq(LOCAL_COMPUTATION_DEPRECATED_KEY))
            .times(1)
            .returning(|_| Ok(Some(false)));
        mock.expect_get_bool()
            .with(eq(LOCAL_COMPUTATION_KEY))
            .times(0);

        assert!(!is_local(&mock).unwrap());
    }

    #[test]
    fn test_invalid_setting_propagates() {
        let mut mock = MockSettingsProvider::new();
        mock.expect_get_bool()
            .with(eq(LOCAL_COMPUTATION_DEPRECATED_KEY))
            .times(1)
            .returning(|_| Ok(None));
        mock.expect_get_bool()
            .with(eq(LOCAL_COMPUTATION_KEY))
            .times(1)
            .returning(|key| {
                Err(ConfError::InvalidSetting {
                    key: key.to_string(),
                    message: "not a boolean".to_string(),
                })
            });

        assert!(matches!(
            is_local(&mock),
            Err(ConfError::InvalidSetting { .. })
        ));
    }
}
