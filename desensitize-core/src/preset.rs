//! Named masking presets for common kinds of sensitive data.
//!
//! A preset is shorthand for a [`MaskingConfig`]. The derive macro resolves
//! `#[desensitize(mobile)]` and friends through [`Preset::from_name`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::model::MaskingConfig;

/// Built-in masking presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// National identity card numbers: keeps 6 leading and 4 trailing characters.
    IdCardNo,
    /// Mobile phone numbers: keeps 3 leading and 4 trailing characters.
    Mobile,
    /// Bank card numbers: keeps 4 leading and 4 trailing characters.
    BankCardNo,
    /// Personal names: keeps the first character.
    Name,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 4] = [
        Preset::IdCardNo,
        Preset::Mobile,
        Preset::BankCardNo,
        Preset::Name,
    ];

    /// Returns the masking configuration for this preset.
    #[must_use]
    pub fn config(self) -> MaskingConfig {
        match self {
            Preset::IdCardNo => MaskingConfig::new(6, 4),
            Preset::Mobile => MaskingConfig::new(3, 4),
            Preset::BankCardNo => MaskingConfig::new(4, 4),
            Preset::Name => MaskingConfig::new(1, 0),
        }
    }

    /// The snake_case name used in attributes.
    pub fn name(self) -> &'static str {
        match self {
            Preset::IdCardNo => "id_card_no",
            Preset::Mobile => "mobile",
            Preset::BankCardNo => "bank_card_no",
            Preset::Name => "name",
        }
    }

    /// Looks a preset up by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown preset name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown masking preset `{0}`; expected one of id_card_no, mobile, bank_card_no, name")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}

impl From<Preset> for MaskingConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}

#[cfg(test)]
mod tests {
    use super::Preset;

    #[test]
    fn presets_use_expected_lengths() {
        assert_eq!(Preset::IdCardNo.config().apply("110101199003074512"), "110101********4512");
        assert_eq!(Preset::Mobile.config().apply("13812345678"), "138****5678");
        assert_eq!(Preset::BankCardNo.config().apply("6222020200112233"), "6222********2233");
        assert_eq!(Preset::Name.config().apply("Smith"), "S****");
    }

    #[test]
    fn names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "passport".parse::<Preset>().unwrap_err();
        assert!(err.to_string().contains("unknown masking preset `passport`"));
    }
}
