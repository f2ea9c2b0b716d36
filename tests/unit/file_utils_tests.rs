/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use pagegen::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParents_shouldCreateThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("a").join("b").join("page.tsx");

    FileManager::write_to_file(&target, "content")?;

    assert_eq!(FileManager::read_to_string(&target)?, "content");

    Ok(())
}

/// Test that read_to_string fails with context for missing files
#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    let result = FileManager::read_to_string("./does/not/exist.tsx");

    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("Failed to read file"));
}

/// Test finding files by name in nested folders
#[test]
fn test_find_files_named_withNestedPages_shouldFindAll() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    FileManager::write_to_file(temp_dir.path().join("One").join("page.tsx"), "1")?;
    FileManager::write_to_file(temp_dir.path().join("Two").join("page.tsx"), "2")?;
    FileManager::write_to_file(temp_dir.path().join("Two").join("notes.md"), "x")?;

    let found = FileManager::find_files_named(temp_dir.path(), "page.tsx")?;

    assert_eq!(found.len(), 2);
    assert!(found[0].ends_with("One/page.tsx"));
    assert!(found[1].ends_with("Two/page.tsx"));

    Ok(())
}

/// Test finding files in a directory that does not exist
#[test]
fn test_find_files_named_withMissingDir_shouldReturnEmpty() -> Result<()> {
    let found = FileManager::find_files_named("./non_existent_directory_12345", "page.tsx")?;
    assert!(found.is_empty());
    Ok(())
}
