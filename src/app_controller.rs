use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app_config::Config;
use crate::converter::Converter;
use crate::file_utils::FileManager;
use crate::language_utils::{self, AUTO_LANGUAGE};
use crate::providers::google::GoogleTranslate;
use crate::subtitles::SubtitleFormat;
use crate::translation::TranslationService;

// @module: Application controller for subtitle conversion

/// Main application controller for subtitle conversion and translation
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Translation front-end shared with the converter
    service: TranslationService,

    // @field: Conversion pipeline
    converter: Converter,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let provider = GoogleTranslate::new(
            config.provider.endpoint.clone(),
            config.provider.timeout_secs,
        );
        let service = TranslationService::new(Arc::new(provider));
        let converter = Converter::new(service.clone(), config.provider.concurrent_requests);

        Ok(Self {
            config,
            service,
            converter,
        })
    }

    /// Run a single conversion from `input_file` to `output_path`.
    ///
    /// When `output_path` is `None`, the output lands next to the input
    /// as `<stem>.<target-language>.<ext>`. `output_format: None` keeps
    /// the input format.
    pub async fn run(
        &self,
        input_file: &Path,
        output_path: Option<PathBuf>,
        output_format: Option<SubtitleFormat>,
        force_overwrite: bool,
    ) -> Result<()> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        info!("Reading input file: {:?}", input_file);
        let content = FileManager::read_to_string_lossy(input_file)?;

        let source_format = SubtitleFormat::from_path(input_file);
        let target_format = output_format.unwrap_or(source_format);
        info!("Converting from {} to {}", source_format, target_format);

        let target_language = self.config.target_language.as_deref();
        let source_language = self
            .resolve_source_language(&content, target_language.is_some())
            .await;

        let output_file = output_path.unwrap_or_else(|| {
            FileManager::generate_output_path(
                input_file,
                target_language.unwrap_or("converted"),
                target_format.extension(),
            )
        });

        if output_file.exists() && !force_overwrite {
            return Err(anyhow!(
                "Output file already exists: {:?}. Use -f to force overwrite.",
                output_file
            ));
        }

        let progress_bar = Self::build_progress_bar();
        let bar = progress_bar.clone();
        let translated = self
            .converter
            .convert(
                &content,
                source_format,
                target_format,
                &source_language,
                target_language,
                move |done, total| {
                    bar.set_length(total as u64);
                    bar.set_position(done as u64);
                },
            )
            .await
            .map_err(|e| anyhow!("Conversion failed: {}", e))?;
        progress_bar.finish_and_clear();

        debug!(
            "Translated {} distinct texts via {}",
            self.service.cached_translations(),
            self.service.provider_name()
        );

        info!("Saving output to: {:?}", output_file);
        FileManager::write_to_file(&output_file, &translated)
            .with_context(|| format!("Failed to write output file: {:?}", output_file))?;

        info!("Conversion completed successfully");
        Ok(())
    }

    /// Resolve the source language, detecting it from a bounded sample of
    /// the document when configured as "auto". Detection is skipped for
    /// pure format conversion since no provider is involved.
    async fn resolve_source_language(&self, content: &str, translating: bool) -> String {
        if self.config.source_language != AUTO_LANGUAGE {
            return self.config.source_language.clone();
        }

        if !translating {
            return AUTO_LANGUAGE.to_string();
        }

        info!("Detecting source language...");
        let sample = language_utils::detection_sample(content);
        if sample.is_empty() {
            warn!("Document has no word content to sample; assuming \"en\"");
            return "en".to_string();
        }

        let detected = self.service.detect_language(&sample).await;
        match language_utils::get_language_name(&detected) {
            Ok(name) => info!("Detected source language: {} ({})", detected, name),
            Err(_) => info!("Detected source language: {}", detected),
        }
        detected
    }

    fn build_progress_bar() -> ProgressBar {
        let progress_bar = ProgressBar::new(0);
        let style = ProgressStyle::default_bar()
            .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style);
        progress_bar
    }
}
