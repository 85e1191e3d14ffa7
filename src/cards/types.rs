//! Shared card enums, `Fallback`, `ColumnWidth` and the [`CardObject`] trait.

use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{json_kind, CardError};

/// A card type with a fixed `type` discriminator.
///
/// `from_value` builds an instance from a plain JSON object, `with_options`
/// shallow-merges one over an existing instance. A `type` key in the input
/// must equal [`CardObject::TYPE`].
///
/// # Example
///
/// ```ignore
/// use graph_cards::cards::{CardObject, SubmitAction};
/// use serde_json::json;
///
/// let action = SubmitAction::from_value(json!({"title": "Send", "isEnabled": false}))?;
/// let action = action.with_options(json!({"title": "Send now"}))?;
/// ```
pub trait CardObject: Serialize + DeserializeOwned {
    /// The `type` discriminator.
    const TYPE: &'static str;

    /// Builds an instance from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `CardError::NotAnObject` for non-object input,
    /// `CardError::TypeMismatch` for a foreign `type`, and
    /// `CardError::Serialization` when a field has the wrong shape.
    fn from_value(value: Value) -> Result<Self, CardError> {
        let mut map = object_for(Self::TYPE, value)?;
        map.remove("type");
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// Serializes to JSON, including the `type` key.
    ///
    /// # Errors
    ///
    /// Returns `CardError::Serialization` if serialization fails.
    fn to_value(&self) -> Result<Value, CardError> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut value {
            map.insert("type".to_string(), Value::String(Self::TYPE.to_string()));
        }
        Ok(value)
    }

    /// Overwrites the top-level fields present in `options`.
    ///
    /// # Errors
    ///
    /// Same as [`CardObject::from_value`].
    fn with_options(self, options: Value) -> Result<Self, CardError> {
        let options = object_for(Self::TYPE, options)?;
        let mut current = object_for(Self::TYPE, self.to_value()?)?;
        current.extend(options);
        Self::from_value(Value::Object(current))
    }
}

/// Unwraps a JSON object and checks its `type` key against `expected`.
fn object_for(expected: &'static str, value: Value) -> Result<Map<String, Value>, CardError> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(CardError::NotAnObject {
                expected,
                found: json_kind(&other),
            })
        }
    };

    match map.get("type") {
        None | Some(Value::Null) => {}
        Some(Value::String(found)) if found == expected => {}
        Some(Value::String(found)) => {
            return Err(CardError::TypeMismatch {
                expected,
                found: found.clone(),
            })
        }
        Some(other) => {
            return Err(CardError::TypeMismatch {
                expected,
                found: other.to_string(),
            })
        }
    }

    Ok(map)
}

/// What a host renders when it does not support an element or action.
///
/// Serializes as the string `"drop"` or as the replacement object.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback<T> {
    /// Drop the unsupported item silently.
    Drop,
    /// Render this instead.
    Content(Box<T>),
}

impl<T> Fallback<T> {
    /// Replacement content.
    pub fn content(value: impl Into<T>) -> Self {
        Fallback::Content(Box::new(value.into()))
    }
}

impl<T: Serialize> Serialize for Fallback<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Fallback::Drop => serializer.serialize_str("drop"),
            Fallback::Content(content) => content.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Fallback<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) if s == "drop" => Ok(Fallback::Drop),
            other => serde_json::from_value(other)
                .map(|content| Fallback::Content(Box::new(content)))
                .map_err(de::Error::custom),
        }
    }
}

/// Width of a column: `"auto"`, `"stretch"`, a relative weight, or pixels.
///
/// Weights keep the JSON number they were parsed from, so `1.5` stays `1.5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fit the content.
    Auto,
    /// Take the remaining space.
    Stretch,
    /// Relative weight, serialized as a number.
    Weight(Number),
    /// Fixed width, serialized as `"<n>px"`.
    Pixels(u32),
}

impl ColumnWidth {
    /// An integer weight.
    pub fn weight(value: u32) -> Self {
        ColumnWidth::Weight(Number::from(value))
    }

    /// A fractional weight. `None` for negative or non-finite values.
    pub fn fractional(value: f64) -> Option<Self> {
        Number::from_f64(value).filter(|_| value >= 0.0).map(ColumnWidth::Weight)
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnWidth::Auto => f.write_str("auto"),
            ColumnWidth::Stretch => f.write_str("stretch"),
            ColumnWidth::Weight(n) => write!(f, "{n}"),
            ColumnWidth::Pixels(n) => write!(f, "{n}px"),
        }
    }
}

impl Serialize for ColumnWidth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColumnWidth::Weight(n) => n.serialize(serializer),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ColumnWidth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) if n.as_f64().is_some_and(|w| w >= 0.0) => Ok(ColumnWidth::Weight(n)),
            Value::Number(n) => Err(de::Error::custom(format!("invalid column weight {n}"))),
            Value::String(s) => parse_width(&s).ok_or_else(|| de::Error::custom(format!("invalid column width {s:?}"))),
            other => Err(de::Error::custom(format!(
                "column width must be a string or number, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn parse_width(s: &str) -> Option<ColumnWidth> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("auto") {
        Some(ColumnWidth::Auto)
    } else if s.eq_ignore_ascii_case("stretch") {
        Some(ColumnWidth::Stretch)
    } else if let Some(px) = s.strip_suffix("px") {
        px.trim().parse().ok().map(ColumnWidth::Pixels)
    } else {
        s.parse::<Number>()
            .ok()
            .filter(|n| n.as_f64().is_some_and(|w| w >= 0.0))
            .map(ColumnWidth::Weight)
    }
}

/// Spacing above an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum Spacing {
    None,
    Small,
    Default,
    Medium,
    Large,
    ExtraLarge,
    Padding,
}

/// Text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum TextSize {
    Small,
    Default,
    Medium,
    Large,
    ExtraLarge,
}

/// Text weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum TextWeight {
    Lighter,
    Default,
    Bolder,
}

/// Text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum TextColor {
    Default,
    Dark,
    Light,
    Accent,
    Good,
    Warning,
    Attention,
}

/// Font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum FontType {
    Default,
    Monospace,
}

/// `TextBlock` style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum TextBlockStyle {
    Default,
    Heading,
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

/// Vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

/// Container style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum ContainerStyle {
    Default,
    Emphasis,
    Good,
    Attention,
    Warning,
    Accent,
}

/// Element height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum BlockElementHeight {
    Auto,
    Stretch,
}

/// Action style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum ActionStyle {
    Default,
    Positive,
    Destructive,
}

/// Whether an action is shown directly or in the overflow menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum ActionMode {
    Primary,
    Secondary,
}

/// Which inputs a submit gathers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum AssociatedInputs {
    Auto,
    None,
}

/// Image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum ImageSize {
    Auto,
    Stretch,
    Small,
    Medium,
    Large,
}

/// Image style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum ImageStyle {
    Default,
    Person,
    RoundedCorners,
}

/// Background image fill mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum FillMode {
    Cover,
    RepeatHorizontally,
    RepeatVertically,
    Repeat,
}

/// Text input keyboard style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum TextInputStyle {
    Text,
    Tel,
    Url,
    Email,
    Password,
}

/// Choice set presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum ChoiceInputStyle {
    Compact,
    Expanded,
    Filtered,
}

/// Semantic color for badges, progress bars and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum Emphasis {
    Default,
    Subtle,
    Informative,
    Accent,
    Good,
    Warning,
    Attention,
}

/// Size scale used by badges, icons, progress rings and ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum Size {
    XxSmall,
    XSmall,
    Tiny,
    Small,
    Standard,
    Medium,
    Large,
    XLarge,
    ExtraLarge,
    XxLarge,
}

/// Position of an icon or label relative to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum Position {
    Before,
    After,
    Above,
    Below,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_column_width_serialization() {
        assert_eq!(serde_json::to_value(ColumnWidth::Auto).unwrap(), json!("auto"));
        assert_eq!(serde_json::to_value(ColumnWidth::Stretch).unwrap(), json!("stretch"));
        assert_eq!(serde_json::to_value(ColumnWidth::weight(2)).unwrap(), json!(2));
        assert_eq!(serde_json::to_value(ColumnWidth::Pixels(50)).unwrap(), json!("50px"));
    }

    #[test]
    fn test_column_width_deserialization() {
        let widths: Vec<ColumnWidth> = serde_json::from_value(json!(["auto", "Stretch", 3, "120px", "1"])).unwrap();
        assert_eq!(
            widths,
            vec![
                ColumnWidth::Auto,
                ColumnWidth::Stretch,
                ColumnWidth::weight(3),
                ColumnWidth::Pixels(120),
                ColumnWidth::weight(1),
            ]
        );
        assert!(serde_json::from_value::<ColumnWidth>(json!("wide")).is_err());
        assert!(serde_json::from_value::<ColumnWidth>(json!(true)).is_err());
        assert!(serde_json::from_value::<ColumnWidth>(json!(-1)).is_err());
    }

    #[test]
    fn test_fractional_weight_keeps_its_value() {
        let width: ColumnWidth = serde_json::from_value(json!(1.5)).unwrap();
        assert_eq!(Some(width.clone()), ColumnWidth::fractional(1.5));
        assert_eq!(serde_json::to_value(&width).unwrap(), json!(1.5));
        assert_eq!(width.to_string(), "1.5");

        let from_string: ColumnWidth = serde_json::from_value(json!("0.25")).unwrap();
        assert_eq!(serde_json::to_value(&from_string).unwrap(), json!(0.25));

        assert_eq!(ColumnWidth::fractional(-0.5), None);
        assert_eq!(ColumnWidth::fractional(f64::NAN), None);
    }

    #[test]
    fn test_fallback_drop() {
        let fallback: Fallback<Value> = serde_json::from_value(json!("drop")).unwrap();
        assert_eq!(fallback, Fallback::Drop);
        assert_eq!(serde_json::to_value(&fallback).unwrap(), json!("drop"));
    }

    #[test]
    fn test_fallback_content() {
        let fallback: Fallback<Value> = serde_json::from_value(json!({"text": "x"})).unwrap();
        assert_eq!(fallback, Fallback::Content(Box::new(json!({"text": "x"}))));
    }

    #[test]
    fn test_size_names() {
        assert_eq!(serde_json::to_value(Size::XxSmall).unwrap(), json!("xxSmall"));
        assert_eq!(serde_json::to_value(Size::ExtraLarge).unwrap(), json!("extraLarge"));
        assert_eq!(serde_json::to_value(Spacing::ExtraLarge).unwrap(), json!("extraLarge"));
    }

    #[test]
    fn test_object_for_checks_type() {
        assert!(object_for("TextBlock", json!({"type": "TextBlock"})).is_ok());
        assert!(object_for("TextBlock", json!({})).is_ok());
        assert!(matches!(
            object_for("TextBlock", json!({"type": "Image"})),
            Err(CardError::TypeMismatch { found, .. }) if found == "Image"
        ));
        assert!(matches!(
            object_for("TextBlock", json!([1])),
            Err(CardError::NotAnObject { found: "array", .. })
        ));
    }
}
