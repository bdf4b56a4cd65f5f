use crate::error::AppError;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Reads a names file, one name per line.
///
/// Lines are trimmed and blank lines dropped; order is preserved.
/// Invalid UTF-8 is replaced with U+FFFD so one bad line doesn't lose the rest.
///
/// # Errors
/// * `AppError::Io` - The file cannot be read
pub async fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, AppError> {
    let path = path.as_ref();
    let bytes = fs::read(path).await?;
    let content = String::from_utf8_lossy(&bytes);

    let lines: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!("Read {} names from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_lines_trims_and_skips_blanks() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("names.txt");
        tokio::fs::write(&path, "  John Doe  \n\n\t\nadmin\r\nJane Smith")
            .await
            .unwrap();

        let lines = read_lines(&path).await.unwrap();
        assert_eq!(lines, vec!["John Doe", "admin", "Jane Smith"]);
    }

    #[tokio::test]
    async fn test_read_lines_latin1_line_keeps_others() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("latin1.txt");
        tokio::fs::write(&path, b"John Doe\nJos\xe9 Garc\xeda\nadmin\n")
            .await
            .unwrap();

        let lines = read_lines(&path).await.unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "John Doe");
        assert_eq!(lines[1], "Jos\u{FFFD} Garc\u{FFFD}a");
        assert_eq!(lines[2], "admin");
    }

    #[tokio::test]
    async fn test_read_lines_empty_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("empty.txt");
        tokio::fs::write(&path, "").await.unwrap();

        assert!(read_lines(&path).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_lines_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = read_lines(temp_dir.path().join("missing.txt")).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[tokio::test]
    async fn test_read_lines_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let result = read_lines(temp_dir.path()).await;
        assert!(result.is_err());
    }
}
