/*!
 * Integration tests for page generation
 */

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use pagegen::app_controller::{Controller, GenerateOutcome};
use pagegen::renderer::{extract_page_name, PageMeta, TemplateEscaping};
use pagegen::section::ContentType;
use pagegen::session::Session;
use crate::common;

/// Test the about page scenario end to end
#[test]
fn test_generate_aboutPage_withPinnedBanner_shouldWriteExpectedPage() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;

    let session = common::add(Session::new(), ContentType::Subheading, "Our Story");
    let meta = PageMeta::new("AboutPage", "Welcome", "Learn more");

    let outcome = controller.generate_with_banner(&session, &meta, 5)?;

    let expected_path = temp_dir
        .path()
        .join("generated_pages")
        .join("AboutPage")
        .join("page.tsx");
    assert_eq!(
        outcome,
        GenerateOutcome::Written { path: expected_path.clone(), banner_index: 5 }
    );

    let document = std::fs::read_to_string(&expected_path)?;
    assert!(document.contains("/images/banners/Banner-5.webp"));
    assert_eq!(extract_page_name(&document).as_deref(), Some("AboutPage"));
    assert!(document.contains("export default AboutPage;"));
    assert_eq!(document.matches(session.fragments()[0].as_str()).count(), 1);

    let container_start = document.find("<div className=\"container mx-auto p-4\">").unwrap();
    let container_end = document.find("</div>").unwrap();
    let heading = document.find("Our Story").unwrap();
    assert!(container_start < heading && heading < container_end);

    Ok(())
}

/// Test the empty-session guard writes nothing
#[test]
fn test_generate_withEmptySession_shouldSkipWithoutWriting() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;

    // Empty headings advance the counter but add nothing
    let session = common::add(Session::new(), ContentType::Subheading, "");
    let meta = PageMeta::new("Nothing", "a", "b");

    let outcome = controller.generate(&session, &meta, &mut StdRng::seed_from_u64(3))?;

    assert_eq!(outcome, GenerateOutcome::Skipped);
    assert!(!controller.output_path("Nothing").exists());
    assert!(controller.list_generated_pages()?.is_empty());

    Ok(())
}

/// Test random generation reports the banner written into the page
#[test]
fn test_generate_withRandomBanner_shouldReportIndexUsed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;
    let session = common::add(Session::new(), ContentType::Paragraph, "Body");
    let meta = PageMeta::new("RandomPage", "a", "b");

    let outcome = controller.generate(&session, &meta, &mut StdRng::seed_from_u64(77))?;

    let GenerateOutcome::Written { path, banner_index } = outcome else {
        panic!("page should have been written");
    };
    assert!((2..=10).contains(&banner_index));
    let document = std::fs::read_to_string(path)?;
    assert!(document.contains(&format!("/images/banners/Banner-{}.webp", banner_index)));

    Ok(())
}

/// Test pinned banners outside the configured range are rejected
#[test]
fn test_generateWithBanner_outOfRange_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;
    let session = common::add(Session::new(), ContentType::Paragraph, "Body");

    let result = controller.generate_with_banner(&session, &PageMeta::new("P", "", ""), 11);

    assert!(result.is_err());
    assert!(controller.list_generated_pages()?.is_empty());

    Ok(())
}

/// Test regeneration overwrites the previous page
#[test]
fn test_generate_twice_shouldOverwritePage() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;
    let meta = PageMeta::new("Twice", "a", "b");

    let session = common::add(Session::new(), ContentType::Paragraph, "First");
    controller.generate_with_banner(&session, &meta, 2)?;
    let session = common::add(session, ContentType::Paragraph, "Second");
    controller.generate_with_banner(&session, &meta, 3)?;

    let document = std::fs::read_to_string(controller.output_path("Twice"))?;
    assert!(document.contains("First"));
    assert!(document.contains("Second"));
    assert!(document.contains("Banner-3.webp"));
    assert_eq!(controller.list_generated_pages()?.len(), 1);

    Ok(())
}

/// Test a write failure is reported and leaves the session intact
#[test]
fn test_generate_whenOutputBlocked_shouldFailAndKeepSession() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    // A file where the output directory should be
    common::create_test_file(temp_dir.path(), "generated_pages", "not a directory")?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;

    let session = common::add(Session::new(), ContentType::Paragraph, "Body");
    let before = session.clone();

    let result = controller.generate_with_banner(&session, &PageMeta::new("Blocked", "", ""), 2);

    assert!(result.is_err());
    assert_eq!(session, before);

    Ok(())
}

/// Test escaped mode sanitizes the folder and component name
#[test]
fn test_generate_escaped_shouldSanitizeFolderName() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::config_in(temp_dir.path());
    config.template_escaping = TemplateEscaping::Escaped;
    let controller = Controller::with_config(config)?;

    let session = common::add(Session::new(), ContentType::Paragraph, "Body");
    let outcome = controller.generate_with_banner(&session, &PageMeta::new("../Escape Me", "\"", ""), 2)?;

    let GenerateOutcome::Written { path, .. } = outcome else {
        panic!("page should have been written");
    };
    assert_eq!(path, controller.output_path("___Escape_Me"));
    let document = std::fs::read_to_string(path)?;
    assert_eq!(extract_page_name(&document).as_deref(), Some("___Escape_Me"));
    assert!(document.contains("header1=\"&quot;\""));

    Ok(())
}

/// Test previews check the banner, skip empty sessions and never write
#[test]
fn test_preview_shouldValidateSkipAndNotWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::config_in(temp_dir.path()))?;
    let session = common::add(Session::new(), ContentType::Paragraph, "Body");
    let meta = PageMeta::new("Preview", "a", "b");
    let mut rng = StdRng::seed_from_u64(5);

    let out_of_range = controller.preview(&session, &meta, Some(11), &mut rng);
    assert!(out_of_range.is_err());

    let empty = controller.preview(&Session::new(), &meta, Some(3), &mut rng)?;
    assert!(empty.is_none());

    let page = controller.preview(&session, &meta, Some(3), &mut rng)?.unwrap();
    assert_eq!(page.banner.index, 3);
    assert!(page.document.contains("Body"));

    let random = controller.preview(&session, &meta, None, &mut rng)?.unwrap();
    assert!((2..=10).contains(&random.banner.index));

    assert!(!controller.output_path("Preview").exists());
    assert!(controller.list_generated_pages()?.is_empty());

    Ok(())
}

/// Test invalid configs are refused by the controller
#[test]
fn test_controller_withInvalidConfig_shouldFail() {
    let mut config = pagegen::Config::default();
    config.banner.min_index = 20;

    assert!(Controller::with_config(config).is_err());
}
