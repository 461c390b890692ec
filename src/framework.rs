//! Registry of preview frameworks.
//!
//! Frameworks only affect how the authored document is previewed and
//! exported; they never style the editor itself. The set is closed, so the
//! catalogue keys its support and snippet maps by [`Framework`] and anything
//! that needs a framework name (CLI flags, stored preferences) goes through
//! [`Framework::try_from`] instead of comparing strings.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    #[serde(rename = "poshui")]
    PoshUi,
    Oat,
    Spectre,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        self.spec().key
    }

    /// Human-facing name used in menus and "not supported by" hints.
    pub fn label(&self) -> &'static str {
        self.spec().label
    }

    pub fn stylesheet_url(&self) -> Option<&'static str> {
        self.spec().stylesheet
    }

    pub fn script_url(&self) -> Option<&'static str> {
        self.spec().script
    }

    /// Every known framework in menu order.
    pub fn all() -> impl Iterator<Item = Framework> {
        FRAMEWORK_SPECS.iter().map(|spec| spec.framework)
    }

    /// Restore a framework from a previously stored key.
    ///
    /// Stored preferences can outlive a framework being renamed or removed,
    /// so unknown or missing keys select the default rather than erroring.
    pub fn from_stored(stored: Option<&str>) -> Framework {
        stored
            .and_then(|raw| Framework::try_from(raw.trim()).ok())
            .unwrap_or_default()
    }

    fn spec(&self) -> &'static FrameworkSpec {
        FRAMEWORK_SPECS
            .iter()
            .find(|spec| spec.framework == *self)
            .unwrap_or(&FRAMEWORK_SPECS[0])
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Framework {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match FRAMEWORK_SPECS.iter().find(|spec| spec.key == value) {
            Some(spec) => Ok(spec.framework),
            None => bail!(
                "Unknown framework: {value} (expected one of {})",
                allowed_framework_names().join(", ")
            ),
        }
    }
}

impl std::str::FromStr for Framework {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Framework::try_from(s)
    }
}

pub fn allowed_framework_names() -> Vec<&'static str> {
    FRAMEWORK_SPECS.iter().map(|spec| spec.key).collect()
}

struct FrameworkSpec {
    framework: Framework,
    key: &'static str,
    label: &'static str,
    stylesheet: Option<&'static str>,
    script: Option<&'static str>,
}

const FRAMEWORK_SPECS: &[FrameworkSpec] = &[
    FrameworkSpec {
        framework: Framework::PoshUi,
        key: "poshui",
        label: "PoshUI",
        stylesheet: Some("https://poshui-components.netlify.app/css/main.css"),
        script: Some("https://poshui-components.netlify.app/js/main.js"),
    },
    FrameworkSpec {
        framework: Framework::Oat,
        key: "oat",
        label: "Oat",
        stylesheet: Some("https://unpkg.com/@knadh/oat/oat.min.css"),
        script: Some("https://unpkg.com/@knadh/oat/oat.min.js"),
    },
    FrameworkSpec {
        framework: Framework::Spectre,
        key: "spectre",
        label: "Spectre.css",
        stylesheet: Some("https://unpkg.com/spectre.css/dist/spectre.min.css"),
        script: None,
    },
];
