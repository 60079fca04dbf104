//! Deployment state and description resolution

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Value of `set_specific_status` that defers to the build result
pub const AUTO: &str = "auto";

/// Accepted `set_specific_status` values, in documentation order
pub const ALLOWED_PRESETS: [&str; 5] = [AUTO, "pending", "success", "error", "failure"];

/// State reported on a deployment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentState {
    /// Deployment in progress
    Pending,
    /// Deployment succeeded
    Success,
    /// Deployment could not run
    Error,
    /// Deployment ran and failed
    Failure,
}

impl DeploymentState {
    /// Wire representation
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
            Self::Failure => "failure",
        }
    }

    /// Title-cased form used as the default description
    #[inline]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Failure => "Failure",
        }
    }
}

impl fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured state: a fixed value or `auto`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatePreset {
    /// Derive from the build status signal
    #[default]
    Auto,
    /// Report this state unchanged
    Fixed(DeploymentState),
}

impl StatePreset {
    /// Input representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => AUTO,
            Self::Fixed(state) => state.as_str(),
        }
    }
}

impl std::str::FromStr for StatePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            AUTO => Ok(Self::Auto),
            "pending" => Ok(Self::Fixed(DeploymentState::Pending)),
            "success" => Ok(Self::Fixed(DeploymentState::Success)),
            "error" => Ok(Self::Fixed(DeploymentState::Error)),
            "failure" => Ok(Self::Fixed(DeploymentState::Failure)),
            other => Err(Error::Config(format!(
                "set_specific_status: invalid value {:?}, allowed values: {}",
                other,
                ALLOWED_PRESETS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for StatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exit-code-like build result exported by the CI runner (`"0"` = success)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStatus(Option<String>);

impl BuildStatus {
    /// Wrap the raw signal; `None` when the runner did not export one
    pub fn new(signal: Option<&str>) -> Self {
        Self(signal.map(str::to_owned))
    }

    /// Only the exact value `"0"` counts as success
    #[inline]
    pub fn is_success(&self) -> bool {
        self.0.as_deref() == Some("0")
    }

    /// Raw signal value
    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Resolve the state to report.
///
/// A fixed preset passes through. `auto` maps a successful build to
/// `success` and anything else, including a missing signal, to `failure`.
pub fn resolve_state(preset: StatePreset, build: &BuildStatus) -> DeploymentState {
    match preset {
        StatePreset::Fixed(state) => state,
        StatePreset::Auto if build.is_success() => DeploymentState::Success,
        StatePreset::Auto => DeploymentState::Failure,
    }
}

/// Resolve the description to report.
///
/// A non-empty description wins; otherwise the title-cased resolved state.
pub fn resolve_description(description: &str, preset: StatePreset, build: &BuildStatus) -> String {
    if description.is_empty() {
        resolve_state(preset, build).title().to_string()
    } else {
        description.to_string()
    }
}
