use thiserror::Error;

/// Chat export read when no input path is given.
pub const DEFAULT_INPUT_PATH: &str = "chat_messages.json";

/// Emotes counted when no `--pattern` is given.
pub const DEFAULT_PATTERNS: &[&str] = &[r"\bLUL\b", r"\bKEKW\b", r"\bOMEGALUL\b"];

pub const DEFAULT_BUCKET_SECONDS: u32 = 15;
pub const DEFAULT_TOP: usize = 8;

const SECONDS_PER_DAY: u32 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("bucket width must be at least one second")]
    ZeroBucketWidth,
    #[error("bucket width of {0}s does not divide a day evenly")]
    UnevenBucketWidth(u32),
}

/// Tunables for a single analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOpts {
    /// Width of a time bucket in seconds.
    pub bucket_seconds: u32,
    /// How many of the densest buckets to report.
    pub top: usize,
}

impl Default for AnalysisOpts {
    fn default() -> Self {
        Self { bucket_seconds: DEFAULT_BUCKET_SECONDS, top: DEFAULT_TOP }
    }
}

impl AnalysisOpts {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket_seconds == 0 {
            return Err(ConfigError::ZeroBucketWidth);
        }
        // buckets restart at local midnight; a remainder would leave a short last bucket
        if SECONDS_PER_DAY % self.bucket_seconds != 0 {
            return Err(ConfigError::UnevenBucketWidth(self.bucket_seconds));
        }
        Ok(())
    }

    pub fn bucket_width(&self) -> chrono::Duration {
        chrono::Duration::seconds(i64::from(self.bucket_seconds))
    }
}

pub fn default_patterns() -> Vec<String> {
    DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect()
}
