//! Node offset resolution and one-time generation.
//!
//! Precedence: `NODE_OFFSET` override, then the `offset` field of the node
//! config, then 0 ("unconfigured"). A non-zero value in the config is never
//! regenerated.

use rand::Rng;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::document::ConfigDocument;
use crate::error::{Result, SetupError};

/// Smallest freshly generated offset (8 digits)
pub const OFFSET_MIN: u64 = 10_000_000;

/// Largest freshly generated offset (10 digits)
pub const OFFSET_MAX: u64 = 9_999_999_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetSource {
    Environment,
    ConfigFile,
    Unconfigured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedOffset {
    pub value: u64,
    pub source: OffsetSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// Override is set; config left untouched. Holds the raw override value.
    OverrideSet(String),
    /// Config already has a non-zero offset
    AlreadyConfigured(u64),
    /// Offset was 0 and has been replaced with a new value
    Generated(u64),
}

impl EnsureOutcome {
    /// Offset now in effect, when it is a number
    pub fn offset(&self) -> Option<u64> {
        match self {
            EnsureOutcome::OverrideSet(raw) => parse_override(raw),
            EnsureOutcome::AlreadyConfigured(v) | EnsureOutcome::Generated(v) => Some(*v),
        }
    }
}

/// Parse an override value: non-empty, ASCII digits only, fits in u64.
pub fn parse_override(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Draw a uniformly random offset from [OFFSET_MIN, OFFSET_MAX].
pub fn random_offset<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.gen_range(OFFSET_MIN..=OFFSET_MAX)
}

/// Read the offset stored in the config, ignoring any override.
///
/// A missing file or a file without an offset line reads as 0.
pub fn read_config_offset(config_path: &Path) -> Result<u64> {
    let text = match fs::read_to_string(config_path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(SetupError::io(config_path, e)),
    };
    Ok(ConfigDocument::parse(&text).offset().unwrap_or(0))
}

/// Resolve the offset in effect.
///
/// A numeric override wins without touching the file, even when the file is
/// absent or unreadable. A non-numeric override is ignored here.
pub fn resolve(config_path: &Path, offset_override: Option<&str>) -> Result<ResolvedOffset> {
    if let Some(value) = offset_override.and_then(parse_override) {
        return Ok(ResolvedOffset {
            value,
            source: OffsetSource::Environment,
        });
    }

    let value = read_config_offset(config_path)?;
    let source = if value == 0 {
        OffsetSource::Unconfigured
    } else {
        OffsetSource::ConfigFile
    };
    Ok(ResolvedOffset { value, source })
}

/// Make sure the config carries a non-zero offset, generating one if needed.
///
/// Any non-empty override skips generation, numeric or not. A config without
/// an offset line is an error rather than a silent no-op.
pub fn ensure_generated<R: Rng + ?Sized>(
    config_path: &Path,
    offset_override: Option<&str>,
    rng: &mut R,
) -> Result<EnsureOutcome> {
    if !config_path.exists() {
        return Err(SetupError::ConfigNotFound(config_path.to_path_buf()));
    }

    if let Some(raw) = offset_override.filter(|v| !v.is_empty()) {
        tracing::info!(value = raw, "offset override set; skipping generation");
        return Ok(EnsureOutcome::OverrideSet(raw.to_string()));
    }

    let text = fs::read_to_string(config_path).map_err(|e| SetupError::io(config_path, e))?;
    let mut doc = ConfigDocument::parse(&text);

    match doc.offset() {
        None => Err(SetupError::OffsetFieldMissing(config_path.to_path_buf())),
        Some(current) if current != 0 => {
            tracing::info!(offset = current, "offset already configured");
            Ok(EnsureOutcome::AlreadyConfigured(current))
        }
        Some(_) => {
            let offset = random_offset(rng);
            doc.set_offset(offset);
            fs::write(config_path, doc.render()).map_err(|e| SetupError::io(config_path, e))?;
            tracing::info!(offset, path = %config_path.display(), "generated node offset");
            Ok(EnsureOutcome::Generated(offset))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    #[test]
    fn test_parse_override() {
        assert_eq!(parse_override("12345"), Some(12345));
        assert_eq!(parse_override("0"), Some(0));
        assert_eq!(parse_override(""), None);
        assert_eq!(parse_override(" 1"), None);
        assert_eq!(parse_override("-1"), None);
        assert_eq!(parse_override("abc"), None);
        assert_eq!(parse_override("99999999999999999999999"), None);
    }

    #[test]
    fn test_random_offset_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let v = random_offset(&mut rng);
            assert!((OFFSET_MIN..=OFFSET_MAX).contains(&v));
        }
    }

    #[test]
    fn test_resolve_missing_file_is_unconfigured() {
        let td = tempdir().unwrap();
        let resolved = resolve(&td.path().join("absent.toml"), None).unwrap();
        assert_eq!(resolved.value, 0);
        assert_eq!(resolved.source, OffsetSource::Unconfigured);
    }

    #[test]
    fn test_resolve_ignores_non_numeric_override() {
        let td = tempdir().unwrap();
        let path = td.path().join("node-config.toml");
        fs::write(&path, "offset = 77\n").unwrap();
        let resolved = resolve(&path, Some("seventy")).unwrap();
        assert_eq!(resolved.value, 77);
        assert_eq!(resolved.source, OffsetSource::ConfigFile);
    }

    #[test]
    fn test_ensure_missing_config_fails() {
        let td = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = ensure_generated(&td.path().join("absent.toml"), Some("5"), &mut rng).unwrap_err();
        assert!(matches!(err, SetupError::ConfigNotFound(_)));
    }

    #[test]
    fn test_ensure_without_offset_line_fails_and_keeps_file() {
        let td = tempdir().unwrap();
        let path = td.path().join("node-config.toml");
        fs::write(&path, "port = 8\n").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = ensure_generated(&path, None, &mut rng).unwrap_err();
        assert!(matches!(err, SetupError::OffsetFieldMissing(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "port = 8\n");
    }

    #[test]
    fn test_outcome_offset() {
        assert_eq!(EnsureOutcome::OverrideSet("42".into()).offset(), Some(42));
        assert_eq!(EnsureOutcome::OverrideSet("x".into()).offset(), None);
        assert_eq!(EnsureOutcome::Generated(10_000_000).offset(), Some(10_000_000));
    }
}
