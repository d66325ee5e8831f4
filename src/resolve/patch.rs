//! Corrective patches applied after the site overlays
//!
//! Both patches only make sense on the fully overlaid configuration.

use log::{debug, info};

use crate::conf::{
    Configuration, FS_DEFAULT_NAME_DEFAULT, FS_DEFAULT_NAME_KEY, FS_DEFAULT_NAME_LEGACY_KEY,
    IO_COMPRESSION_CODECS_KEY,
};

/// Class-name fragment shared by the LZO codecs (`LzoCodec`, `LzopCodec`)
pub const LZO_CODEC_FRAGMENT: &str = ".lzo.Lzo";

/// Copy the legacy `fs.default.name` into `fs.defaultFS` when the latter is
/// unset or still at its built-in default
///
/// Some generated cluster configs only carry the legacy key.
///
/// When the legacy key is unset too, `fs.defaultFS` is left as it is rather
/// than being assigned an absent value, which the runtime would reject.
pub fn reconcile_default_fs(conf: &mut Configuration) {
    let needs_fix = match conf.get(FS_DEFAULT_NAME_KEY) {
        None => true,
        Some(current) => current == FS_DEFAULT_NAME_DEFAULT,
    };
    if !needs_fix {
        return;
    }

    match conf.get(FS_DEFAULT_NAME_LEGACY_KEY).map(str::to_string) {
        Some(legacy) => {
            info!(
                "{} unset; using {}={}",
                FS_DEFAULT_NAME_KEY, FS_DEFAULT_NAME_LEGACY_KEY, legacy
            );
            conf.set(FS_DEFAULT_NAME_KEY, legacy);
        }
        None => debug!(
            "Neither {} nor {} configured; leaving default filesystem as is",
            FS_DEFAULT_NAME_KEY, FS_DEFAULT_NAME_LEGACY_KEY
        ),
    }
}

/// Remove LZO codecs from `io.compression.codecs`
///
/// LZO implementations are not shipped with the runtime but can be
/// instantiated eagerly from this list, failing at load time even when unused.
pub fn sanitize_codecs(conf: &mut Configuration) {
    let sanitized = match conf.get(IO_COMPRESSION_CODECS_KEY) {
        Some(codecs) if codecs.contains(LZO_CODEC_FRAGMENT) => codecs
            .split(',')
            .filter(|codec| !codec.contains(LZO_CODEC_FRAGMENT))
            .collect::<Vec<_>>()
            .join(","),
        _ => return,
    };

    info!("Removing LZO codecs from {}", IO_COMPRESSION_CODECS_KEY);
    conf.set(IO_COMPRESSION_CODECS_KEY, sanitized);
}
