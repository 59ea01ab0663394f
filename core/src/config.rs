use crate::{
    error::{AnalysisError, AnalysisResult},
    types::Depth,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::{collections::BTreeMap, path::Path, str::FromStr};

pub const HIERARCHY_DEPTH_KEY:  &str = "app.hierarchy.depth";
pub const LOW_SALARY_RATIO_KEY: &str = "app.salary.ration.low";
pub const HIGH_SALARY_RATIO_KEY: &str = "app.salary.ration.high";
pub const REPORT_PATH_KEY:      &str = "app.report.path";

// ── Properties source ──────────────────────────────────────────────

/// A flat `key=value` property set.
///
/// Accepts `=` or `:` as the separator. Lines starting with `#` or `!`
/// are comments. Later keys overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    pub fn parse(content: &str) -> Self {
        let mut props = Self::default();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some(split) = line.find(['=', ':']) else {
                props.set(line, "");
                continue;
            };
            let (key, value) = line.split_at(split);
            props.set(key.trim(), value[1..].trim());
        }
        props
    }

    pub fn load(path: impl AsRef<Path>) -> AnalysisResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AnalysisError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let props = Self::parse(&content);
        log::debug!("config: loaded {} properties from {}", props.len(), path.display());
        Ok(props)
    }

    /// Collect `--key=value` overrides from command-line arguments.
    /// Anything else is ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut props = Self::default();
        for arg in args {
            let Some(rest) = arg.as_ref().strip_prefix("--") else {
                continue;
            };
            if let Some((key, value)) = rest.split_once('=') {
                props.set(key, value);
            }
        }
        props
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Overlay `other` on top of `self`.
    pub fn merge(&mut self, other: Properties) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Analysis tunables ──────────────────────────────────────────────

/// The three tunables the analysis runs with. Loaded once, immutable
/// afterwards, passed explicitly to the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerConfig {
    /// Reporting lines longer than this are flagged.
    pub hierarchy_depth_threshold: Depth,
    pub low_salary_ratio:          Decimal,
    pub high_salary_ratio:         Decimal,
}

impl AnalyzerConfig {
    /// Build and validate.
    pub fn new(
        hierarchy_depth_threshold: Depth,
        low_salary_ratio:          Decimal,
        high_salary_ratio:         Decimal,
    ) -> AnalysisResult<Self> {
        let config = Self {
            hierarchy_depth_threshold,
            low_salary_ratio,
            high_salary_ratio,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read the tunables from a property set. Every key is required.
    pub fn from_properties(props: &Properties) -> AnalysisResult<Self> {
        let threshold = required(props, HIERARCHY_DEPTH_KEY)?;
        let hierarchy_depth_threshold =
            threshold.parse::<Depth>().map_err(|e| AnalysisError::InvalidProperty {
                key:    HIERARCHY_DEPTH_KEY.to_string(),
                value:  threshold.to_string(),
                reason: e.to_string(),
            })?;

        let low_salary_ratio = parse_ratio(props, LOW_SALARY_RATIO_KEY)?;
        let high_salary_ratio = parse_ratio(props, HIGH_SALARY_RATIO_KEY)?;

        Self::new(hierarchy_depth_threshold, low_salary_ratio, high_salary_ratio)
    }

    /// Load from a properties file.
    pub fn load(path: impl AsRef<Path>) -> AnalysisResult<Self> {
        Self::from_properties(&Properties::load(path)?)
    }

    pub fn validate(&self) -> AnalysisResult<()> {
        check_positive(LOW_SALARY_RATIO_KEY, self.low_salary_ratio)?;
        check_positive(HIGH_SALARY_RATIO_KEY, self.high_salary_ratio)?;
        if self.low_salary_ratio > self.high_salary_ratio {
            return Err(AnalysisError::InvertedSalaryBand {
                low:  self.low_salary_ratio.to_string(),
                high: self.high_salary_ratio.to_string(),
            });
        }
        Ok(())
    }

    /// Depth 4, band [1.2, 1.5]. For tests.
    pub fn default_test() -> Self {
        Self {
            hierarchy_depth_threshold: 4,
            low_salary_ratio:          Decimal::new(12, 1),
            high_salary_ratio:         Decimal::new(15, 1),
        }
    }
}

fn required<'p>(props: &'p Properties, key: &str) -> AnalysisResult<&'p str> {
    match props.get(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AnalysisError::MissingProperty { key: key.to_string() }),
    }
}

fn parse_ratio(props: &Properties, key: &str) -> AnalysisResult<Decimal> {
    let raw = required(props, key)?;
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|e| AnalysisError::InvalidProperty {
            key:    key.to_string(),
            value:  raw.to_string(),
            reason: e.to_string(),
        })
}

fn check_positive(key: &str, ratio: Decimal) -> AnalysisResult<()> {
    if ratio <= Decimal::ZERO {
        return Err(AnalysisError::InvalidProperty {
            key:    key.to_string(),
            value:  ratio.to_string(),
            reason: "ratio must be positive".to_string(),
        });
    }
    Ok(())
}
