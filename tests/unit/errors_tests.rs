/*!
 * Tests for error types and conversions
 */

use pagegen::errors::PageError;

#[test]
fn test_pageError_invalidConfig_shouldDisplayCorrectly() {
    let error = PageError::InvalidConfig("output_dir must not be empty".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Invalid configuration"));
    assert!(display.contains("output_dir"));
}

#[test]
fn test_pageError_invalidRecipe_shouldDisplayCorrectly() {
    let error = PageError::InvalidRecipe("recipe file not found".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Invalid recipe"));
    assert!(display.contains("not found"));
}

#[test]
fn test_pageError_bannerOutOfRange_shouldDisplayBounds() {
    let error = PageError::BannerOutOfRange { index: 12, min: 2, max: 10 };
    assert_eq!(format!("{}", error), "Banner index 12 is outside 2..=10");
}

#[test]
fn test_pageError_intoAnyhow_shouldDowncast() {
    let error: anyhow::Error = PageError::BannerOutOfRange { index: 1, min: 2, max: 10 }.into();
    assert!(matches!(
        error.downcast_ref::<PageError>(),
        Some(PageError::BannerOutOfRange { index: 1, .. })
    ));
}
