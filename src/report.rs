//! Command output: comparison, LAB and reference-verification reports
//!
//! Every report renders either as aligned text or as pretty-printed JSON.

use crate::config::Thresholds;
use ciede2000::{ciede2000, distance, Lab, ReferencePair, Srgb8};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// How visible a ΔE00 value is to a typical observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Perception {
    /// Not perceptible to the human eye
    Imperceptible,
    /// Perceptible through close observation
    CloseObservation,
    /// Perceptible at a glance
    AtAGlance,
    /// Colors are more similar than opposite
    Distinct,
    /// Colors are nearly opposite
    Opposite,
}

impl fmt::Display for Perception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Perception::Imperceptible => "imperceptible",
            Perception::CloseObservation => "perceptible through close observation",
            Perception::AtAGlance => "perceptible at a glance",
            Perception::Distinct => "distinct",
            Perception::Opposite => "nearly opposite",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabValue {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl From<Lab> for LabValue {
    fn from(lab: Lab) -> Self {
        Self {
            l: lab.l,
            a: lab.a,
            b: lab.b,
        }
    }
}

/// One sRGB input together with its CIELAB value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorReport {
    pub rgb: [u8; 3],
    pub lab: LabValue,
}

impl ColorReport {
    pub fn new(color: Srgb8) -> Self {
        Self {
            rgb: color.to_bytes(),
            lab: Lab::from(color).into(),
        }
    }

    fn render_text(&self, precision: usize) -> String {
        let [r, g, b] = self.rgb;
        format!(
            "rgb({r}, {g}, {b})  L={:.p$} a={:.p$} b={:.p$}",
            self.lab.l,
            self.lab.a,
            self.lab.b,
            p = precision
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub first: ColorReport,
    pub second: ColorReport,
    pub delta_e: f64,
    pub perception: Perception,
}

impl Comparison {
    pub fn new(first: Srgb8, second: Srgb8, thresholds: &Thresholds) -> Self {
        let delta_e = distance(&first, &second);
        Self {
            first: ColorReport::new(first),
            second: ColorReport::new(second),
            delta_e,
            perception: thresholds.classify(delta_e),
        }
    }

    pub fn render(&self, format: OutputFormat, precision: usize) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(format!(
                "first:  {}\nsecond: {}\nΔE00:   {:.p$} ({})",
                self.first.render_text(precision),
                self.second.render_text(precision),
                self.delta_e,
                self.perception,
                p = precision
            )),
        }
    }
}

/// Output of the `lab` command
pub fn render_color(
    color: Srgb8,
    format: OutputFormat,
    precision: usize,
) -> serde_json::Result<String> {
    let report = ColorReport::new(color);
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report),
        OutputFormat::Text => Ok(report.render_text(precision)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairResult {
    /// 1-based row number in the published table
    pub pair: usize,
    pub expected: f64,
    pub actual: f64,
    pub error: f64,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyReport {
    pub tolerance: f64,
    pub max_error: f64,
    pub failures: usize,
    pub pairs: Vec<PairResult>,
}

impl VerifyReport {
    /// Run every reference pair through the formula and record its error.
    pub fn run(table: &[ReferencePair], tolerance: f64) -> Self {
        let pairs: Vec<PairResult> = table
            .iter()
            .enumerate()
            .map(|(i, reference)| {
                let actual = ciede2000(reference.lab1, reference.lab2);
                let error = (actual - reference.delta_e).abs();
                PairResult {
                    pair: i + 1,
                    expected: reference.delta_e,
                    actual,
                    error,
                    passed: error <= tolerance,
                }
            })
            .collect();

        let max_error = pairs.iter().map(|p| p.error).fold(0.0, f64::max);
        let failures = pairs.iter().filter(|p| !p.passed).count();

        Self {
            tolerance,
            max_error,
            failures,
            pairs,
        }
    }

    pub fn passed(&self) -> bool {
        self.failures == 0
    }

    /// Turn a failed run into an error so the command exits non-zero.
    pub fn into_result(self) -> anyhow::Result<Self> {
        if !self.passed() {
            tracing::warn!(
                failures = self.failures,
                max_error = self.max_error,
                "Reference verification failed"
            );
            anyhow::bail!(
                "{} of {} reference pairs exceed tolerance {:e}",
                self.failures,
                self.pairs.len(),
                self.tolerance
            );
        }

        tracing::info!(max_error = self.max_error, "Reference verification passed");
        Ok(self)
    }

    pub fn render(&self, format: OutputFormat, precision: usize) -> serde_json::Result<String> {
        if format == OutputFormat::Json {
            return serde_json::to_string_pretty(self);
        }

        let mut out = String::from("pair  expected    actual      error\n");
        for p in &self.pairs {
            out.push_str(&format!(
                "{:>4}  {:<10.4}  {:<10.p$}  {:.2e}{}\n",
                p.pair,
                p.expected,
                p.actual,
                p.error,
                if p.passed { "" } else { "  FAIL" },
                p = precision
            ));
        }
        out.push_str(&format!(
            "{} of {} pairs within {:e} (max error {:.2e})",
            self.pairs.len() - self.failures,
            self.pairs.len(),
            self.tolerance,
            self.max_error
        ));
        Ok(out)
    }
}
