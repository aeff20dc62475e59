use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Wire representation is the lowercase string used by the service API.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Sex {
    Male => "male",
    Female => "female",
    Other => "other",
});

str_enum!(ActivityLevel {
    Sedentary => "sedentary",
    Light => "light",
    Moderate => "moderate",
    High => "high",
});

// Defaults match what a blank questionnaire form starts with.

impl Default for Sex {
    fn default() -> Self {
        Self::Other
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        Self::Moderate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn sex_round_trip() {
        assert_eq!(Sex::from_str("male").unwrap(), Sex::Male);
        assert_eq!(Sex::from_str("female").unwrap(), Sex::Female);
        assert_eq!(Sex::from_str("other").unwrap(), Sex::Other);
        assert_eq!(Sex::Male.as_str(), "male");
        assert!(Sex::from_str("unknown").is_err());
    }

    #[test]
    fn activity_level_round_trip() {
        for (s, level) in [
            ("sedentary", ActivityLevel::Sedentary),
            ("light", ActivityLevel::Light),
            ("moderate", ActivityLevel::Moderate),
            ("high", ActivityLevel::High),
        ] {
            assert_eq!(ActivityLevel::from_str(s).unwrap(), level);
            assert_eq!(level.as_str(), s);
        }
    }

    #[test]
    fn serde_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"female\"");
        let parsed: ActivityLevel = serde_json::from_str("\"sedentary\"").unwrap();
        assert_eq!(parsed, ActivityLevel::Sedentary);
    }

    #[test]
    fn defaults_match_blank_form() {
        assert_eq!(Sex::default(), Sex::Other);
        assert_eq!(ActivityLevel::default(), ActivityLevel::Moderate);
    }
}
