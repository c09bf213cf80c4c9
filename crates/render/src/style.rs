use indexmap::IndexMap;
use paperkit_document::{Color, RunStyles};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A value a style map can carry for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Color(Color),
}

impl StyleValue {
    /// Try to get the value as a boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as an integer
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            StyleValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get the value as text
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a color. Accepts a hex string as well.
    #[must_use]
    pub fn as_color(&self) -> Option<Color> {
        match self {
            StyleValue::Color(c) => Some(*c),
            StyleValue::Text(s) => Color::from_hex(s).ok(),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            StyleValue::Bool(_) => "bool",
            StyleValue::Int(_) => "integer",
            StyleValue::Text(_) => "text",
            StyleValue::Color(_) => "color",
        }
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Int(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Int(i64::from(value))
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Int(i64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        StyleValue::Color(value)
    }
}

/// Errors from applying one named style property
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Unknown style property: {name}")]
    UnknownProperty { name: String },

    #[error("Invalid value for '{property}': expected {expected}, got {found}")]
    InvalidValue {
        property: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Named style properties and their values, in insertion order.
pub type StyleMap = IndexMap<String, StyleValue>;

type Applier =
    Box<dyn Fn(&mut dyn RunStyles, &StyleValue) -> Result<(), StyleError> + Send + Sync>;

/// Registry of named style-applier functions.
///
/// Each entry maps a property name to a closure that validates the
/// value and calls the matching [`RunStyles`] setter. Looking up a
/// name that was never registered yields
/// [`StyleError::UnknownProperty`] instead of a reflective miss.
///
/// # Examples
///
/// ```
/// use paperkit_render::{StyleRegistry, StyleValue};
/// use paperkit_document::{Alignment, Document, MemoryDocument};
///
/// let registry = StyleRegistry::default();
/// let mut doc = MemoryDocument::new();
/// let run = doc.append_run(Alignment::Left);
///
/// let styles = doc.run_styles(run).unwrap();
/// registry.apply(styles, "bold", &StyleValue::Bool(true)).unwrap();
///
/// assert_eq!(doc.run(run).unwrap().properties().bold, Some(true));
/// ```
pub struct StyleRegistry {
    appliers: IndexMap<String, Applier>,
}

impl StyleRegistry {
    /// Create a registry with no registered properties.
    #[must_use]
    pub fn empty() -> Self {
        StyleRegistry {
            appliers: IndexMap::new(),
        }
    }

    /// Register an applier for a property name, replacing any previous one.
    pub fn register<F>(&mut self, name: impl Into<String>, applier: F)
    where
        F: Fn(&mut dyn RunStyles, &StyleValue) -> Result<(), StyleError> + Send + Sync + 'static,
    {
        self.appliers.insert(name.into(), Box::new(applier));
    }

    /// Check whether a property name is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.appliers.contains_key(name)
    }

    /// Registered property names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.appliers.keys().map(String::as_str)
    }

    /// Apply one named property to a run.
    pub fn apply(
        &self,
        styles: &mut dyn RunStyles,
        name: &str,
        value: &StyleValue,
    ) -> Result<(), StyleError> {
        let applier = self
            .appliers
            .get(name)
            .ok_or_else(|| StyleError::UnknownProperty {
                name: name.to_string(),
            })?;
        applier(styles, value)
    }

    /// Apply every property in a style map to a run, best effort.
    ///
    /// A property that fails is skipped and recorded; the remaining
    /// properties are still applied.
    pub fn apply_all(
        &self,
        styles: &mut dyn RunStyles,
        map: &StyleMap,
    ) -> Vec<(String, StyleError)> {
        let mut failures = Vec::new();
        for (name, value) in map {
            if let Err(error) = self.apply(styles, name, value) {
                tracing::warn!("Skipping style property '{}': {}", name, error);
                failures.push((name.clone(), error));
            }
        }
        failures
    }
}

impl Default for StyleRegistry {
    /// Registry populated with every property the run style surface supports.
    fn default() -> Self {
        let mut registry = StyleRegistry::empty();
        registry.register("bold", |run, value| {
            run.set_bold(expect_bool("bold", value)?);
            Ok(())
        });
        registry.register("italic", |run, value| {
            run.set_italic(expect_bool("italic", value)?);
            Ok(())
        });
        registry.register("underline", |run, value| {
            run.set_underline(expect_bool("underline", value)?);
            Ok(())
        });
        registry.register("strike_through", |run, value| {
            run.set_strike_through(expect_bool("strike_through", value)?);
            Ok(())
        });
        registry.register("small_caps", |run, value| {
            run.set_small_caps(expect_bool("small_caps", value)?);
            Ok(())
        });
        registry.register("font_size", |run, value| {
            let size = expect_int("font_size", value)?;
            let size = u32::try_from(size).map_err(|_| StyleError::InvalidValue {
                property: "font_size".to_string(),
                expected: "integer in u32 range",
                found: value.type_name(),
            })?;
            run.set_font_size(size);
            Ok(())
        });
        registry.register("font_family", |run, value| {
            run.set_font_family(expect_text("font_family", value)?);
            Ok(())
        });
        registry.register("color", |run, value| {
            run.set_color(expect_color("color", value)?);
            Ok(())
        });
        registry.register("highlight", |run, value| {
            run.set_highlight(expect_color("highlight", value)?);
            Ok(())
        });
        registry.register("character_spacing", |run, value| {
            let spacing = expect_int("character_spacing", value)?;
            let spacing = i32::try_from(spacing).map_err(|_| StyleError::InvalidValue {
                property: "character_spacing".to_string(),
                expected: "integer in i32 range",
                found: value.type_name(),
            })?;
            run.set_character_spacing(spacing);
            Ok(())
        });
        registry
    }
}

impl std::fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("properties", &self.appliers.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn expect_bool(property: &str, value: &StyleValue) -> Result<bool, StyleError> {
    value.as_bool().ok_or_else(|| StyleError::InvalidValue {
        property: property.to_string(),
        expected: "bool",
        found: value.type_name(),
    })
}

fn expect_int(property: &str, value: &StyleValue) -> Result<i64, StyleError> {
    value.as_int().ok_or_else(|| StyleError::InvalidValue {
        property: property.to_string(),
        expected: "integer",
        found: value.type_name(),
    })
}

fn expect_text<'a>(property: &str, value: &'a StyleValue) -> Result<&'a str, StyleError> {
    value.as_text().ok_or_else(|| StyleError::InvalidValue {
        property: property.to_string(),
        expected: "text",
        found: value.type_name(),
    })
}

fn expect_color(property: &str, value: &StyleValue) -> Result<Color, StyleError> {
    value.as_color().ok_or_else(|| StyleError::InvalidValue {
        property: property.to_string(),
        expected: "color or hex string",
        found: value.type_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperkit_document::RunProperties;

    #[test]
    fn test_default_registry_covers_run_surface() {
        let registry = StyleRegistry::default();
        for name in [
            "bold",
            "italic",
            "underline",
            "strike_through",
            "small_caps",
            "font_size",
            "font_family",
            "color",
            "highlight",
            "character_spacing",
        ] {
            assert!(registry.contains(name), "missing applier for {name}");
        }
    }

    #[test]
    fn test_apply_sets_property() {
        let registry = StyleRegistry::default();
        let mut properties = RunProperties::default();

        registry
            .apply(&mut properties, "font_size", &StyleValue::Int(28))
            .unwrap();
        registry
            .apply(&mut properties, "font_family", &StyleValue::from("Courier"))
            .unwrap();

        assert_eq!(properties.font_size, Some(28));
        assert_eq!(properties.font_family.as_deref(), Some("Courier"));
    }

    #[test]
    fn test_unknown_property() {
        let registry = StyleRegistry::default();
        let mut properties = RunProperties::default();

        let err = registry
            .apply(&mut properties, "shadow", &StyleValue::Bool(true))
            .unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownProperty {
                name: "shadow".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_value_type() {
        let registry = StyleRegistry::default();
        let mut properties = RunProperties::default();

        let err = registry
            .apply(&mut properties, "bold", &StyleValue::Int(1))
            .unwrap_err();
        assert!(matches!(err, StyleError::InvalidValue { expected: "bool", .. }));
        assert_eq!(properties.bold, None);
    }

    #[test]
    fn test_font_size_range_check() {
        let registry = StyleRegistry::default();
        let mut properties = RunProperties::default();

        let err = registry
            .apply(&mut properties, "font_size", &StyleValue::Int(-4))
            .unwrap_err();
        assert!(matches!(err, StyleError::InvalidValue { .. }));
        assert_eq!(properties.font_size, None);
    }

    #[test]
    fn test_color_accepts_hex_text() {
        let registry = StyleRegistry::default();
        let mut properties = RunProperties::default();

        registry
            .apply(&mut properties, "color", &StyleValue::from("#336699"))
            .unwrap();
        assert_eq!(properties.color, Some(Color::new(0x33, 0x66, 0x99)));
    }

    #[test]
    fn test_apply_all_continues_past_failures() {
        let registry = StyleRegistry::default();
        let mut properties = RunProperties::default();

        let mut map = StyleMap::new();
        map.insert("bold".to_string(), StyleValue::Bool(true));
        map.insert("unknown_prop".to_string(), StyleValue::Int(5));
        map.insert("italic".to_string(), StyleValue::Bool(true));

        let failures = registry.apply_all(&mut properties, &map);

        assert_eq!(properties.bold, Some(true));
        assert_eq!(properties.italic, Some(true));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "unknown_prop");
    }

    #[test]
    fn test_custom_registration_overrides() {
        let mut registry = StyleRegistry::empty();
        registry.register("bold", |run, _value| {
            run.set_bold(true);
            Ok(())
        });

        let mut properties = RunProperties::default();
        registry
            .apply(&mut properties, "bold", &StyleValue::from("anything"))
            .unwrap();
        assert_eq!(properties.bold, Some(true));
    }

    #[test]
    fn test_style_value_json_shapes() {
        let map: StyleMap = serde_json::from_str(
            r#"{"bold": true, "font_size": 24, "font_family": "Arial"}"#,
        )
        .unwrap();
        assert_eq!(map["bold"], StyleValue::Bool(true));
        assert_eq!(map["font_size"], StyleValue::Int(24));
        assert_eq!(map["font_family"], StyleValue::Text("Arial".to_string()));
    }
}
