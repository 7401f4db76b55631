//! Image generation domain: enumerated choices and multi-flag options.

pub mod client;

use crate::error::UsageError;
use crate::shared::{Omissible, Params};
use serde::{Deserialize, Serialize};

// ─── Orientation ─────────────────────────────────────────────────────────────

/// Mirror axis for the `symmetry` generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    #[serde(rename = "left-right")]
    LeftRight,
    #[serde(rename = "right-left")]
    RightLeft,
    #[serde(rename = "top-bottom")]
    TopBottom,
    #[serde(rename = "bottom-top")]
    BottomTop,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftRight => "left-right",
            Self::RightLeft => "right-left",
            Self::TopBottom => "top-bottom",
            Self::BottomTop => "bottom-top",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── TrinityType ─────────────────────────────────────────────────────────────

/// Variant of the `trinity` generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrinityType {
    #[default]
    Normal,
    Reverse,
}

impl TrinityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Reverse => "reverse",
        }
    }
}

impl std::fmt::Display for TrinityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── HypesquadHouse ──────────────────────────────────────────────────────────

/// Badge for the `discord_house` generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HypesquadHouse {
    Balance,
    Bravery,
    Brilliance,
}

impl HypesquadHouse {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Bravery => "bravery",
            Self::Brilliance => "brilliance",
        }
    }
}

impl std::fmt::Display for HypesquadHouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── VersusColor ─────────────────────────────────────────────────────────────

/// Colour scheme for the `versus` generator. Sent as its numeric code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersusColor {
    #[default]
    #[serde(rename = "1")]
    Scheme1,
    #[serde(rename = "2")]
    Scheme2,
    #[serde(rename = "3")]
    Scheme3,
}

impl VersusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheme1 => "1",
            Self::Scheme2 => "2",
            Self::Scheme3 => "3",
        }
    }
}

impl std::fmt::Display for VersusColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── TriggeredOptions ────────────────────────────────────────────────────────

/// Flags for the `triggered` generator. Every flag defaults to omitted.
///
/// `grayscale` is an alternate spelling of `greyscale`; setting both to
/// different values is rejected before any request is made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggeredOptions {
    pub blur: Omissible<bool>,
    pub greyscale: Omissible<bool>,
    pub grayscale: Omissible<bool>,
    pub horizontal: Omissible<bool>,
    pub invert: Omissible<bool>,
    pub sepia: Omissible<bool>,
    pub vertical: Omissible<bool>,
}

impl TriggeredOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blur(mut self, value: bool) -> Self {
        self.blur = value.into();
        self
    }

    pub fn greyscale(mut self, value: bool) -> Self {
        self.greyscale = value.into();
        self
    }

    pub fn grayscale(mut self, value: bool) -> Self {
        self.grayscale = value.into();
        self
    }

    pub fn horizontal(mut self, value: bool) -> Self {
        self.horizontal = value.into();
        self
    }

    pub fn invert(mut self, value: bool) -> Self {
        self.invert = value.into();
        self
    }

    pub fn sepia(mut self, value: bool) -> Self {
        self.sepia = value.into();
        self
    }

    pub fn vertical(mut self, value: bool) -> Self {
        self.vertical = value.into();
        self
    }

    /// The effective `greyscale` flag after merging the two spellings.
    ///
    /// # Errors
    ///
    /// [`UsageError::ConflictingAlias`] if both spellings are provided with
    /// different values.
    pub fn resolved_greyscale(&self) -> Result<Omissible<bool>, UsageError> {
        match (self.greyscale, self.grayscale) {
            (Omissible::Provided(a), Omissible::Provided(b)) if a != b => {
                Err(UsageError::ConflictingAlias {
                    canonical: "greyscale",
                    alias: "grayscale",
                })
            }
            (canonical, alias) => Ok(canonical.or(alias)),
        }
    }

    pub(crate) fn to_params(self, image_url: &str) -> Result<Params, UsageError> {
        Ok(Params::new()
            .with("url", image_url)
            .with_opt("blur", self.blur)
            .with_opt("greyscale", self.resolved_greyscale()?)
            .with_opt("horizontal", self.horizontal)
            .with_opt("invert", self.invert)
            .with_opt("sepia", self.sepia)
            .with_opt("vertical", self.vertical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_enum_wire_values_match_serde() {
        assert_eq!(serde_json::to_value(Orientation::TopBottom).unwrap(), "top-bottom");
        assert_eq!(serde_json::to_value(TrinityType::Reverse).unwrap(), "reverse");
        assert_eq!(serde_json::to_value(HypesquadHouse::Brilliance).unwrap(), "brilliance");
        assert_eq!(serde_json::to_value(VersusColor::Scheme2).unwrap(), "2");
        assert_eq!(Orientation::TopBottom.to_string(), "top-bottom");
    }

    #[test]
    fn test_triggered_default_sends_only_url() {
        let params = TriggeredOptions::new().to_params("http://x/a.png").unwrap();
        assert_eq!(Value::Object(params.to_body().unwrap()), json!({"url": "http://x/a.png"}));
    }

    #[test]
    fn test_triggered_keeps_false_flags() {
        let params = TriggeredOptions::new()
            .blur(false)
            .sepia(true)
            .to_params("u")
            .unwrap();
        assert_eq!(
            Value::Object(params.to_body().unwrap()),
            json!({"url": "u", "blur": false, "sepia": true})
        );
    }

    #[test]
    fn test_grayscale_spelling_sent_as_greyscale() {
        let params = TriggeredOptions::new().grayscale(true).to_params("u").unwrap();
        let body = params.to_body().unwrap();
        assert_eq!(body.get("greyscale"), Some(&Value::Bool(true)));
        assert!(body.get("grayscale").is_none());
    }

    #[test]
    fn test_conflicting_spellings_rejected() {
        let err = TriggeredOptions::new()
            .greyscale(true)
            .grayscale(false)
            .to_params("u")
            .unwrap_err();
        assert_eq!(
            err,
            UsageError::ConflictingAlias {
                canonical: "greyscale",
                alias: "grayscale"
            }
        );
    }

    #[test]
    fn test_matching_spellings_accepted() {
        let opts = TriggeredOptions::new().greyscale(false).grayscale(false);
        assert_eq!(opts.resolved_greyscale().unwrap(), Omissible::Provided(false));
    }
}
