//! Serde utility helpers for case-insensitive deserialization

/// Macro to implement case-insensitive deserialization for unit-only enums
///
/// Hosts serialize symbol metadata with whatever casing their object model
/// uses (`"Public"`, `"public"`, `"PUBLIC"`), so enum values are matched on
/// their lowercase form.
///
/// Usage:
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     MyEnum,
///     Variant1 => "variant1",
///     Variant2 => "variant2"
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:expr),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <::std::string::String as serde::Deserialize>::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    #[derive(Debug, PartialEq, Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Mode {
        Inherit,
        Copy,
    }

    impl_case_insensitive_deserialize!(
        Mode,
        Inherit => "inherit",
        Copy => "copy",
    );

    #[test]
    fn test_deserialize_ignores_case() {
        let upper: Mode = serde_json::from_str("\"COPY\"").unwrap();
        let mixed: Mode = serde_json::from_str("\"Inherit\"").unwrap();
        assert_eq!(upper, Mode::Copy);
        assert_eq!(mixed, Mode::Inherit);
    }

    #[test]
    fn test_deserialize_unknown_variant_lists_choices() {
        let err = serde_json::from_str::<Mode>("\"merge\"").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown variant 'merge'"));
        assert!(message.contains("inherit, copy"));
    }
}
