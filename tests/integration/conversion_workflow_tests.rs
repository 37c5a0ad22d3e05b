/*!
 * End-to-end conversion workflow tests.
 *
 * The controller paths run in conversion-only mode (no target language)
 * so no network provider is ever contacted; translated workflows drive
 * the converter directly with a mock provider.
 */

use std::fs;

use subconv::app_config::Config;
use subconv::app_controller::Controller;
use subconv::converter::Converter;
use subconv::file_utils::FileManager;
use subconv::subtitles::SubtitleFormat;

use crate::common::{SAMPLE_SRT, create_temp_dir, create_test_file, working_service};

#[tokio::test]
async fn test_controller_run_withFormatConversion_shouldWriteVttFile() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_file(&dir, "movie.srt", SAMPLE_SRT).unwrap();
    let output = dir.join("movie.vtt");

    let controller = Controller::with_config(Config::default()).unwrap();
    controller
        .run(&input, Some(output.clone()), Some(SubtitleFormat::Vtt), false)
        .await
        .unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("WEBVTT\n\n"));
    assert!(written.contains("00:00:01.000 --> 00:00:04.000"));
}

#[tokio::test]
async fn test_controller_run_withDefaultOutputPath_shouldDeriveFromInput() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_file(&dir, "movie.srt", SAMPLE_SRT).unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();
    controller
        .run(&input, None, Some(SubtitleFormat::Sbv), false)
        .await
        .unwrap();

    // No target language: the generated name uses the "converted" tag.
    let expected = dir.join("movie.converted.sbv");
    assert!(expected.exists());
}

#[tokio::test]
async fn test_controller_run_withExistingOutput_shouldRefuseWithoutForce() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_file(&dir, "movie.srt", SAMPLE_SRT).unwrap();
    let output = create_test_file(&dir, "movie.vtt", "existing").unwrap();

    let controller = Controller::with_config(Config::default()).unwrap();

    let refused = controller
        .run(&input, Some(output.clone()), Some(SubtitleFormat::Vtt), false)
        .await;
    assert!(refused.is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "existing");

    controller
        .run(&input, Some(output.clone()), Some(SubtitleFormat::Vtt), true)
        .await
        .unwrap();
    assert!(fs::read_to_string(&output).unwrap().starts_with("WEBVTT"));
}

#[tokio::test]
async fn test_controller_run_withMissingInput_shouldFail() {
    let temp_dir = create_temp_dir().unwrap();
    let missing = temp_dir.path().join("missing.srt");

    let controller = Controller::with_config(Config::default()).unwrap();
    let result = controller.run(&missing, None, None, false).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_controller_run_withUnsupportedPair_shouldFailAndWriteNothing() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_file(&dir, "movie.srt", SAMPLE_SRT).unwrap();
    let output = dir.join("movie.ssa");

    let controller = Controller::with_config(Config::default()).unwrap();
    let result = controller
        .run(&input, Some(output.clone()), Some(SubtitleFormat::Ssa), false)
        .await;

    assert!(result.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_converter_workflow_withMockTranslation_shouldRoundTripThroughFiles() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input = create_test_file(&dir, "movie.srt", SAMPLE_SRT).unwrap();
    let output = dir.join("out").join("movie.fr.sbv");

    let content = FileManager::read_to_string_lossy(&input).unwrap();
    let converter = Converter::new(working_service(), 4);
    let converted = converter
        .convert(
            &content,
            SubtitleFormat::from_path(&input),
            SubtitleFormat::Sbv,
            "en",
            Some("fr"),
            |_, _| {},
        )
        .await
        .unwrap();

    FileManager::write_to_file(&output, &converted).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("00:00:01.000 --> 00:00:04.000\n[fr] This is a test subtitle.\n"));
    assert_eq!(written.matches("[fr] ").count(), 3);
}
