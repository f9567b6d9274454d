use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::model::RadarSnapshot;
use super::parse::{ParseError, parse_radar_yaml};

/// The radar data file could not be turned into a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum DataUnavailable {
    #[error("failed to read radar data from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse radar data in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// Reads the full current state of the data file.
pub fn fetch_snapshot(path: &Path) -> Result<RadarSnapshot, DataUnavailable> {
    let raw = fs::read_to_string(path).map_err(|source| DataUnavailable::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (snapshot, skipped) = parse_radar_yaml(&raw).map_err(|source| DataUnavailable::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if skipped > 0 {
        log::warn!(
            "skipped {skipped} malformed entries under Items in {}",
            path.display()
        );
    }
    log::info!(
        "loaded {} radar items ({} placeable) from {}, last modified {:?}",
        snapshot.item_count(),
        snapshot.placeable_count(),
        path.display(),
        snapshot.last_modified
    );

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_snapshot_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "LastModified: March 2024\nItems:\n  - Label: Postgres\n    Quadrant: Platforms\n    Ring: Adopted\n  - Label: Perl\n    Quadrant: Languages & Frameworks\n    Ring: Retired"
        )
        .unwrap();

        let snapshot = fetch_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.last_modified, "March 2024");
        assert_eq!(snapshot.item_count(), 2);
        assert_eq!(snapshot.placeable_count(), 1);
        assert_eq!(snapshot.items[1].ring, "Retired");
    }

    #[test]
    fn missing_file_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radar.yaml");

        let error = fetch_snapshot(&path).unwrap_err();
        assert!(matches!(error, DataUnavailable::Read { .. }));
        assert!(error.to_string().contains("radar.yaml"));
    }

    #[test]
    fn invalid_yaml_is_a_parse_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Items: [\n  - {{").unwrap();

        assert!(matches!(
            fetch_snapshot(file.path()),
            Err(DataUnavailable::Parse { .. })
        ));
    }
}
