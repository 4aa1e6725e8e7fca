use std::borrow::Cow;
use std::path::Path;

use tone_engine::{Lab, Rgb8, ShadeGuide, SharpnessVerdict, ToneAnalyzer};

use crate::error::AppError;
use crate::models::{
    AnalysisReport, AppConfig, ColorReport, MatchReport, RegionConfig, ShadeEntryReport,
    StepsReport,
};
use crate::services::image_loader::{load_png, DecodedImage};

/// Per-call overrides on top of the configuration
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Replaces the configured region
    pub region: Option<RegionConfig>,
    /// Enables bleached exclusion; the config can also enable it
    pub exclude_bleached: bool,
    /// Replaces the configured guide name
    pub guide: Option<String>,
}

/// Runs the engine with configuration-driven defaults and shapes the output
/// into serializable reports.
pub struct AnalysisService {
    config: AppConfig,
    minimum_verdict: SharpnessVerdict,
}

impl AnalysisService {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let minimum_verdict = config.minimum_verdict()?;
        Ok(Self {
            config,
            minimum_verdict,
        })
    }

    /// Resolve a guide by name, falling back to the configured one.
    pub fn guide(&self, name: Option<&str>) -> Result<Cow<'static, ShadeGuide>, AppError> {
        let name = name.unwrap_or(&self.config.matching.guide);
        Ok(match self.config.custom_guide(name)? {
            Some(guide) => Cow::Owned(guide),
            None => Cow::Borrowed(ShadeGuide::vita()),
        })
    }

    /// Build an analyzer for one request.
    pub fn analyzer(&self, options: &AnalysisOptions) -> Result<ToneAnalyzer, AppError> {
        let mut analyzer = ToneAnalyzer::new()
            .minimum_verdict(self.minimum_verdict)
            .exclude_bleached(options.exclude_bleached || self.config.matching.exclude_bleached);

        if let Some(region) = self.region(options) {
            analyzer = analyzer.region(region.into());
        }
        if let Cow::Owned(guide) = self.guide(options.guide.as_deref())? {
            analyzer = analyzer.guide(guide);
        }
        Ok(analyzer)
    }

    fn region(&self, options: &AnalysisOptions) -> Option<RegionConfig> {
        options.region.or(self.config.region)
    }

    /// Load a PNG and analyze it.
    pub fn analyze_file(
        &self,
        path: &Path,
        options: &AnalysisOptions,
    ) -> Result<AnalysisReport, AppError> {
        let image = load_png(path)?;
        let mut report = self.analyze_image(&image, options)?;
        report.source = Some(path.display().to_string());
        Ok(report)
    }

    pub fn analyze_image(
        &self,
        image: &DecodedImage,
        options: &AnalysisOptions,
    ) -> Result<AnalysisReport, AppError> {
        let analyzer = self.analyzer(options)?;
        let tone = analyzer.analyze(&image.view()?)?;

        tracing::info!(
            score = tone.sharpness.score,
            verdict = %tone.sharpness.verdict.as_str(),
            quality_passed = tone.quality_passed,
            shade = tone.shade.as_ref().map(|s| s.shade_match.id.as_str()),
            "Analyzed image"
        );
        if !tone.quality_passed {
            tracing::warn!(
                variance = tone.sharpness.laplacian_variance,
                "Image below focus threshold, shade interpretation skipped"
            );
        }

        Ok(AnalysisReport::new(
            &tone,
            analyzer.shade_guide(),
            image.width,
            image.height,
            self.region(options),
        ))
    }

    /// Match a Lab color directly, skipping image analysis.
    pub fn match_lab(&self, lab: Lab, options: &AnalysisOptions) -> Result<MatchReport, AppError> {
        let analyzer = self.analyzer(options)?;
        let reading = analyzer.interpret(lab);
        tracing::debug!(
            shade = %reading.shade_match.id,
            delta_e = reading.shade_match.delta_e,
            "Matched Lab color"
        );
        Ok(MatchReport::new(&reading, analyzer.shade_guide()))
    }

    /// Steps between two shades; unknown ids are an error here.
    pub fn shade_steps(
        &self,
        from: &str,
        to: &str,
        guide: Option<&str>,
    ) -> Result<StepsReport, AppError> {
        let guide = self.guide(guide)?;
        let from_entry = guide
            .get(from)
            .ok_or_else(|| AppError::UnknownShade(from.to_string()))?;
        let to_entry = guide
            .get(to)
            .ok_or_else(|| AppError::UnknownShade(to.to_string()))?;
        let steps = guide.shade_steps(from, to);
        Ok(StepsReport::new(from_entry, to_entry, steps))
    }

    /// Guide entries, brightest first.
    pub fn list_shades(&self, guide: Option<&str>) -> Result<Vec<ShadeEntryReport>, AppError> {
        let guide = self.guide(guide)?;
        Ok(guide
            .brightness_order()
            .map(|entry| ShadeEntryReport::new(entry, &guide))
            .collect())
    }

    /// Color features of a `#RRGGBB` value.
    pub fn convert(hex: &str) -> Result<ColorReport, AppError> {
        let color: Rgb8 = hex.parse()?;
        Ok(ColorReport::from_rgb(color))
    }
}
