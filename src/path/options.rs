use std::str::FromStr;

use crate::errors::{Error, Result};

/// How elliptical arc commands (`A`/`a`) are drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "json", derive(serde_derive::Deserialize, serde_derive::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum ArcMode {
    /// Straight line to the arc's endpoint.
    #[default]
    Line,
    /// Approximate the true elliptical arc with cubic Béziers.
    Curve,
}

/// How the first control point of `S`/`s` is derived.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "json", derive(serde_derive::Deserialize, serde_derive::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum SmoothCurves {
    /// Always reflect the last recorded control point through the current
    /// point, whatever the previous command was.
    #[default]
    Reflect,
    /// Reflect only when the previous command was a cubic curve;
    /// otherwise use the current point.
    Strict,
}

/// What to do with command letters outside the supported set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "json", derive(serde_derive::Deserialize, serde_derive::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum UnknownCommands {
    /// Skip only the letter.
    #[default]
    Skip,
    /// Skip the letter and any numbers up to the next command letter.
    SkipOperands,
}

/// Settings for a single parse. The defaults read region outlines exactly
/// as the map data expects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde_derive::Deserialize, serde_derive::Serialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct ParseOptions {
    pub arc_mode: ArcMode,
    pub smooth_curves: SmoothCurves,
    pub unknown_commands: UnknownCommands,
}

impl FromStr for ArcMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "line" => Ok(Self::Line),
            "curve" => Ok(Self::Curve),
            _ => Err(Error::InvalidData(format!(
                "unknown arc mode '{s}' (expected line or curve)"
            ))),
        }
    }
}

impl FromStr for SmoothCurves {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "reflect" => Ok(Self::Reflect),
            "strict" => Ok(Self::Strict),
            _ => Err(Error::InvalidData(format!(
                "unknown smooth curve mode '{s}' (expected reflect or strict)"
            ))),
        }
    }
}

impl FromStr for UnknownCommands {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "skip" => Ok(Self::Skip),
            "skip-operands" => Ok(Self::SkipOperands),
            _ => Err(Error::InvalidData(format!(
                "unknown command policy '{s}' (expected skip or skip-operands)"
            ))),
        }
    }
}
