/*!
 * Tests for file utilities
 */

use std::fs;
use std::path::PathBuf;

use subconv::file_utils::FileManager;

use crate::common::{create_temp_dir, create_test_file};

#[test]
fn test_read_to_string_lossy_withInvalidUtf8_shouldReplaceNotFail() {
    let temp_dir = create_temp_dir().unwrap();
    let file_path = temp_dir.path().join("latin1.srt");

    // "café" in Latin-1: 0xE9 is not valid UTF-8.
    fs::write(&file_path, b"caf\xe9 subtitle").unwrap();

    let content = FileManager::read_to_string_lossy(&file_path).unwrap();
    assert!(content.starts_with("caf"));
    assert!(content.contains('\u{FFFD}'));
    assert!(content.ends_with(" subtitle"));
}

#[test]
fn test_read_to_string_lossy_withMissingFile_shouldFail() {
    let result = FileManager::read_to_string_lossy("/nonexistent/path/file.srt");
    assert!(result.is_err());
}

#[test]
fn test_write_to_file_withMissingParentDirs_shouldCreateThem() {
    let temp_dir = create_temp_dir().unwrap();
    let nested = temp_dir.path().join("a").join("b").join("out.srt");

    FileManager::write_to_file(&nested, "content").unwrap();

    assert!(nested.exists());
    assert_eq!(fs::read_to_string(&nested).unwrap(), "content");
}

#[test]
fn test_write_to_file_withExistingFile_shouldOverwrite() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let file_path = create_test_file(&dir, "out.srt", "old").unwrap();

    FileManager::write_to_file(&file_path, "new").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
}

#[test]
fn test_file_exists_shouldDistinguishFilesFromDirectories() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let file_path = create_test_file(&dir, "a.srt", "x").unwrap();

    assert!(FileManager::file_exists(&file_path));
    assert!(!FileManager::file_exists(temp_dir.path()));
    assert!(!FileManager::file_exists(dir.join("missing.srt")));
}

#[test]
fn test_generate_output_path_shouldUseStemLanguageAndExtension() {
    let output = FileManager::generate_output_path("/videos/movie.srt", "fr", "vtt");
    assert_eq!(output, PathBuf::from("/videos/movie.fr.vtt"));
}

#[test]
fn test_generate_output_path_withBareFilename_shouldStayRelative() {
    let output = FileManager::generate_output_path("movie.srt", "de", "srt");
    assert_eq!(output, PathBuf::from("movie.de.srt"));
}
