use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, info, warn};

use crate::cache::constants::CACHE_VERSION;
use crate::cache::errors::CacheError;
use crate::cache::record::{CacheFile, CacheRecord, VersionProbe};
use crate::generator::{BaseSet, BlockGenerator, Digits};

/// Read a cached base set built for `digits`.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, is not valid JSON,
/// carries another version or digit sequence, or holds a malformed record.
pub fn try_load(path: &Path, digits: Digits) -> Result<BaseSet, CacheError> {
    let contents = fs::read_to_string(path)?;

    let probe: VersionProbe = serde_json::from_str(&contents)?;
    if probe.version != CACHE_VERSION {
        return Err(CacheError::VersionMismatch {
            found: probe.version,
            expected: CACHE_VERSION,
        });
    }

    let file: CacheFile = serde_json::from_str(&contents)?;
    let expected = digits.to_string();
    if file.digits != expected {
        return Err(CacheError::DigitMismatch {
            found: file.digits,
            expected,
        });
    }

    let entries = file
        .entries
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_node(index))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Loaded {} cached entries from {}", entries.len(), path.display());
    Ok(BaseSet::from_nodes(entries))
}

/// Read a cached base set, treating every failure as a miss
pub fn load(path: &Path, digits: Digits) -> Option<BaseSet> {
    match try_load(path, digits) {
        Ok(base) => Some(base),
        Err(CacheError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            debug!("No cache at {}", path.display());
            None
        }
        Err(err) => {
            warn!("Ignoring cache at {}: {}", path.display(), err);
            None
        }
    }
}

/// Write `base` to `path`, replacing whatever was there.
///
/// # Errors
///
/// Returns an error if the file cannot be written or an entry is not exact.
pub fn store(path: &Path, digits: Digits, base: &BaseSet) -> Result<(), CacheError> {
    let entries = base
        .iter()
        .enumerate()
        .map(|(index, node)| {
            CacheRecord::from_node(node).ok_or_else(|| CacheError::Malformed {
                index,
                reason: format!("{} has no exact value", node),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let file = CacheFile {
        version: CACHE_VERSION,
        digits: digits.to_string(),
        entries,
    };
    fs::write(path, serde_json::to_string(&file)?)?;

    info!("Stored {} entries in {}", base.len(), path.display());
    Ok(())
}

/// Load the base set for the generator's digits, regenerating and rewriting
/// the cache on a miss. A failed rewrite is logged and otherwise ignored.
pub fn load_or_generate(path: &Path, generator: &BlockGenerator) -> BaseSet {
    if let Some(base) = load(path, generator.digits()) {
        info!("Using {} cached block values", base.len());
        return base;
    }

    let base = generator.generate();
    if let Err(err) = store(path, generator.digits(), &base) {
        warn!("Could not write cache to {}: {}", path.display(), err);
    }
    base
}
