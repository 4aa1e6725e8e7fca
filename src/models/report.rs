//! JSON report shapes printed by the CLI.

use serde::Serialize;

use tone_engine::{
    estimate_cct, normalize_rgb, rgb_to_lab, rgb_to_xyz, rgb_to_ycbcr, xyz_to_chromaticity,
    xyz_to_lms, LinearRgb, Rgb8, ShadeGuide, ShadeReading, ShadeReference, SharpnessResult,
    ToneReport,
};

use super::config::RegionConfig;

/// Color-space features of one device color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub rgb: [u8; 3],
    pub normalized: [f32; 3],
    pub linear: [f32; 3],
    pub xyz: [f32; 3],
    pub lab: [f32; 3],
    pub lms: [f32; 3],
    pub chromaticity: [f32; 2],
    pub cct_kelvin: f32,
    pub ycbcr: [f32; 3],
}

impl ColorReport {
    pub fn from_rgb(c: Rgb8) -> Self {
        let normalized = normalize_rgb(c);
        let linear = LinearRgb::from(c);
        let xyz = rgb_to_xyz(c);
        let lab = rgb_to_lab(c);
        let lms = xyz_to_lms(xyz);
        let xy = xyz_to_chromaticity(xyz);
        let ycbcr = rgb_to_ycbcr(c);
        Self {
            hex: c.to_hex(),
            rgb: c.to_bytes(),
            normalized: [normalized.r, normalized.g, normalized.b],
            linear: [linear.r, linear.g, linear.b],
            xyz: [xyz.x, xyz.y, xyz.z],
            lab: [lab.l, lab.a, lab.b],
            lms: [lms.l, lms.m, lms.s],
            chromaticity: [xy.x, xy.y],
            cct_kelvin: estimate_cct(xy),
            ycbcr: [ycbcr.y, ycbcr.cb, ycbcr.cr],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharpnessReport {
    pub score: u8,
    pub laplacian_variance: f64,
    pub verdict: &'static str,
    pub feedback: &'static str,
}

impl From<&SharpnessResult> for SharpnessReport {
    fn from(r: &SharpnessResult) -> Self {
        Self {
            score: r.score,
            laplacian_variance: r.laplacian_variance,
            verdict: r.verdict.as_str(),
            feedback: r.feedback,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateReport {
    pub shade: String,
    pub delta_e: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelReport {
    pub level: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UndertoneReport {
    pub undertone: &'static str,
    pub confidence: f32,
}

/// Shade match with its interpretations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub shade: String,
    pub series: String,
    pub delta_e: f32,
    pub alternatives: Vec<CandidateReport>,
    pub brightness: LevelReport,
    pub yellowness: LevelReport,
    pub undertone: UndertoneReport,
}

impl MatchReport {
    pub fn new(reading: &ShadeReading, guide: &ShadeGuide) -> Self {
        let m = &reading.shade_match;
        Self {
            shade: m.id.clone(),
            series: guide
                .get(&m.id)
                .map(|e| e.series.to_string())
                .unwrap_or_default(),
            delta_e: m.delta_e,
            alternatives: m
                .alternative_matches
                .iter()
                .map(|c| CandidateReport {
                    shade: c.id.clone(),
                    delta_e: c.delta_e,
                })
                .collect(),
            brightness: LevelReport {
                level: reading.brightness.level.as_str(),
                description: reading.brightness.description,
            },
            yellowness: LevelReport {
                level: reading.yellowness.level.as_str(),
                description: reading.yellowness.description,
            },
            undertone: UndertoneReport {
                undertone: reading.undertone.undertone.as_str(),
                confidence: reading.undertone.confidence,
            },
        }
    }
}

/// Full result of `shadescope analyze`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub width: usize,
    pub height: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionConfig>,
    pub sharpness: SharpnessReport,
    pub quality_passed: bool,
    pub color: ColorReport,
    pub shade: Option<MatchReport>,
}

impl AnalysisReport {
    pub fn new(
        report: &ToneReport,
        guide: &ShadeGuide,
        width: usize,
        height: usize,
        region: Option<RegionConfig>,
    ) -> Self {
        Self {
            source: None,
            width,
            height,
            region,
            sharpness: SharpnessReport::from(&report.sharpness),
            quality_passed: report.quality_passed,
            color: ColorReport::from_rgb(report.average_rgb),
            shade: report.shade.as_ref().map(|r| MatchReport::new(r, guide)),
        }
    }
}

/// Result of `shadescope steps`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepsReport {
    pub from: String,
    pub to: String,
    /// Positive when `to` is brighter
    pub steps: i32,
    pub direction: &'static str,
}

impl StepsReport {
    pub fn new(from: &ShadeReference, to: &ShadeReference, steps: i32) -> Self {
        Self {
            from: from.id.to_string(),
            to: to.id.to_string(),
            steps,
            direction: match steps {
                s if s > 0 => "brighter",
                s if s < 0 => "darker",
                _ => "same",
            },
        }
    }
}

/// One row of `shadescope shades`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadeEntryReport {
    pub id: String,
    pub series: String,
    pub lab: [f32; 3],
    pub rank: u32,
    pub brightness: &'static str,
}

impl ShadeEntryReport {
    pub fn new(entry: &ShadeReference, guide: &ShadeGuide) -> Self {
        Self {
            id: entry.id.to_string(),
            series: entry.series.to_string(),
            lab: [entry.lab.l, entry.lab.a, entry.lab.b],
            rank: entry.brightness_rank,
            brightness: guide.interpret_brightness(&entry.id).level.as_str(),
        }
    }
}
