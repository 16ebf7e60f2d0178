// File-level glue around the selector. Kept apart from the selection pass
// so the pass itself stays a pure function over in-memory lines.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read playlist '{path}': {source}")]
    UnreadableInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write playlist '{path}': {source}")]
    UnwritableOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reads a playlist into lines. IPTV lists arrive with broken encodings
/// often enough that decoding is lossy rather than fatal.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::UnreadableInput {
        path: path.display().to_string(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    info!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Writes the reduced playlist newline-joined. Returns the byte size of
/// what was written, for the summary report.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<u64, SourceError> {
    let content = lines.join("\n");
    fs::write(path, &content).map_err(|source| SourceError::UnwritableOutput {
        path: path.display().to_string(),
        source,
    })?;
    info!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(content.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.m3u8");
        let lines = vec![
            "#EXTM3U".to_string(),
            "#EXTINF:-1,Globo HD".to_string(),
            "http://a".to_string(),
        ];

        let bytes = write_lines(&path, &lines).unwrap();
        assert_eq!(bytes, lines.join("\n").len() as u64);

        assert_eq!(read_lines(&path).unwrap(), lines);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.m3u8");
        std::fs::write(&path, b"#EXTM3U\n#EXTINF:-1,Glo\xffbo HD\nhttp://a").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("#EXTINF"));
    }

    #[test]
    fn test_missing_input_is_a_source_error() {
        let dir = tempdir().unwrap();
        let err = read_lines(&dir.path().join("nope.m3u8")).unwrap_err();
        assert!(matches!(err, SourceError::UnreadableInput { .. }));
    }
}
