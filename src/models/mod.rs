pub mod config;
pub mod report;

pub use config::{
    AppConfig, MatchingConfig, QualityConfig, RegionConfig, ShadeEntryConfig, BUILTIN_GUIDE,
    CONFIG_ENV,
};
pub use report::{
    AnalysisReport, CandidateReport, ColorReport, LevelReport, MatchReport, ShadeEntryReport,
    SharpnessReport, StepsReport, UndertoneReport,
};
