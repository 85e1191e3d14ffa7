//! Input elements.
//!
//! Every input carries an id (taken by `new`) plus the [`InputBase`] fields.
//! Values are free-form; nothing checks a toggle's `value_on` against its
//! `value_off` or a number against its bounds.

use serde::{Deserialize, Serialize};

use super::element::{impl_element_builder, RatingColor};
use super::macros::{card_object, discriminator, flag_setters, option_setters, value_setters, vec_adders};
use super::types::{AssociatedInputs, ChoiceInputStyle, Size, TextInputStyle};
use super::{Action, ElementBase};

impl_element_builder!(TextInput, NumberInput, DateInput, TimeInput, ToggleInput, ChoiceSetInput, RatingInput);

card_object!(ChoicesData => "Data.Query");

/// Fields every input carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBase {
    /// Label shown above the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Block submission while empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,

    /// Shown when validation fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Setters for [`InputBase`] fields.
pub trait InputBuilder: Sized {
    /// The shared input fields, mutably.
    fn input_base_mut(&mut self) -> &mut InputBase;

    /// Sets the label.
    fn with_label(mut self, label: impl Into<String>) -> Self {
        self.input_base_mut().label = Some(label.into());
        self
    }

    /// Sets whether the input is required.
    fn with_required(mut self, required: bool) -> Self {
        self.input_base_mut().is_required = Some(required);
        self
    }

    /// Marks the input required.
    fn required(self) -> Self {
        self.with_required(true)
    }

    /// Sets the validation message.
    fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.input_base_mut().error_message = Some(message.into());
        self
    }
}

macro_rules! impl_input_builder {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl InputBuilder for $ty {
                fn input_base_mut(&mut self) -> &mut InputBase {
                    &mut self.input
                }
            }
        )*
    };
}

impl_input_builder!(TextInput, NumberInput, DateInput, TimeInput, ToggleInput, ChoiceSetInput, RatingInput);

fn base_with_id(id: impl Into<String>) -> ElementBase {
    ElementBase {
        id: Some(id.into()),
        ..Default::default()
    }
}

/// A single- or multi-line text field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Shared input fields.
    #[serde(flatten)]
    pub input: InputBase,

    /// Placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Initial value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Maximum length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Multi-line field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_multiline: Option<bool>,

    /// Keyboard style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextInputStyle>,

    /// Button rendered next to the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_action: Option<Box<Action>>,

    /// Validation pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl TextInput {
    /// Creates a text input.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: base_with_id(id),
            ..Default::default()
        }
    }

    option_setters! {
        with_placeholder => placeholder: String,
        with_value => value: String,
        with_style => style: TextInputStyle,
        with_inline_action => inline_action: Box<Action>,
        with_regex => regex: String,
    }

    value_setters! {
        with_max_length => max_length: u32,
    }

    flag_setters! {
        multiline / with_multiline => is_multiline,
    }
}

/// A numeric field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInput {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Shared input fields.
    #[serde(flatten)]
    pub input: InputBase,

    /// Placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Initial value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NumberInput {
    /// Creates a number input.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: base_with_id(id),
            ..Default::default()
        }
    }

    option_setters! {
        with_placeholder => placeholder: String,
        with_value => value: f64,
        with_min => min: f64,
        with_max => max: f64,
    }
}

/// A date picker. Values are `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInput {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Shared input fields.
    #[serde(flatten)]
    pub input: InputBase,

    /// Placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Initial value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Earliest date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,

    /// Latest date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl DateInput {
    /// Creates a date input.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: base_with_id(id),
            ..Default::default()
        }
    }

    option_setters! {
        with_placeholder => placeholder: String,
        with_value => value: String,
        with_min => min: String,
        with_max => max: String,
    }
}

/// A time picker. Values are `HH:MM` strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInput {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Shared input fields.
    #[serde(flatten)]
    pub input: InputBase,

    /// Placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Initial value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Earliest time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,

    /// Latest time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl TimeInput {
    /// Creates a time input.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: base_with_id(id),
            ..Default::default()
        }
    }

    option_setters! {
        with_placeholder => placeholder: String,
        with_value => value: String,
        with_min => min: String,
        with_max => max: String,
    }
}

/// A checkbox.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleInput {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Shared input fields.
    #[serde(flatten)]
    pub input: InputBase,

    /// Text next to the checkbox.
    #[serde(default)]
    pub title: String,

    /// Initial value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Submitted when checked. Hosts default to `"true"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_on: Option<String>,

    /// Submitted when unchecked. Hosts default to `"false"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_off: Option<String>,

    /// Wrap the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

impl ToggleInput {
    /// Creates a toggle.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            base: base_with_id(id),
            title: title.into(),
            ..Default::default()
        }
    }

    option_setters! {
        with_value => value: String,
        with_value_on => value_on: String,
        with_value_off => value_off: String,
    }

    flag_setters! {
        wrap / with_wrap => wrap,
    }
}

/// An option of a [`ChoiceSetInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown.
    pub title: String,
    /// Value submitted.
    pub value: String,
}

impl Choice {
    /// Creates a choice.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

discriminator!(ChoicesDataType = "Data.Query");

/// Dynamic choices fetched from the bot (`type: "Data.Query"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoicesData {
    #[serde(rename = "type", default)]
    kind: ChoicesDataType,

    /// Dataset name sent to the bot.
    #[serde(default)]
    pub dataset: String,

    /// Which inputs accompany the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_inputs: Option<AssociatedInputs>,

    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    /// Page offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

impl ChoicesData {
    /// Creates a query against `dataset`.
    pub fn new(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            ..Default::default()
        }
    }

    option_setters! {
        with_associated_inputs => associated_inputs: AssociatedInputs,
    }

    value_setters! {
        with_count => count: u32,
        with_skip => skip: u32,
    }
}

/// A drop-down, radio group or checkbox list.
///
/// For multi-select the value is a comma-separated list of choice values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceSetInput {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Shared input fields.
    #[serde(flatten)]
    pub input: InputBase,

    /// Static choices.
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Dynamic choices.
    #[serde(rename = "choices.data", default, skip_serializing_if = "Option::is_none")]
    pub choices_data: Option<ChoicesData>,

    /// Allow several selections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_multi_select: Option<bool>,

    /// Presentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ChoiceInputStyle>,

    /// Initial value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Wrap choice titles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

impl ChoiceSetInput {
    /// Creates a choice set with no choices.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: base_with_id(id),
            ..Default::default()
        }
    }

    vec_adders! {
        add_choices => choices: Choice,
    }

    option_setters! {
        with_choices_data => choices_data: ChoicesData,
        with_style => style: ChoiceInputStyle,
        with_value => value: String,
        with_placeholder => placeholder: String,
    }

    flag_setters! {
        multi_select / with_multi_select => is_multi_select,
        wrap / with_wrap => wrap,
    }
}

/// A star rating the user can set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingInput {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Shared input fields.
    #[serde(flatten)]
    pub input: InputBase,

    /// Number of stars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,

    /// Initial value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Allow half stars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_half_steps: Option<bool>,

    /// Size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    /// Star color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<RatingColor>,
}

impl RatingInput {
    /// Creates a rating input.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: base_with_id(id),
            ..Default::default()
        }
    }

    option_setters! {
        with_value => value: f64,
        with_size => size: Size,
        with_color => color: RatingColor,
    }

    value_setters! {
        with_max => max: u32,
    }

    flag_setters! {
        allow_half_steps / with_allow_half_steps => allow_half_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionBuilder, CardObject, Element, ElementBuilder, SubmitAction};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_text_input_json() {
        let input = TextInput::new("comment")
            .with_label("Comment")
            .required()
            .with_error_message("Say something")
            .with_placeholder("Type here")
            .multiline()
            .with_inline_action(Action::from(SubmitAction::new().with_title("Send")));
        assert_eq!(
            serde_json::to_value(Element::from(input)).unwrap(),
            json!({
                "type": "Input.Text",
                "id": "comment",
                "label": "Comment",
                "isRequired": true,
                "errorMessage": "Say something",
                "placeholder": "Type here",
                "isMultiline": true,
                "inlineAction": {"type": "Action.Submit", "title": "Send"}
            })
        );
    }

    #[test]
    fn test_toggle_accepts_equal_on_off() {
        let toggle = ToggleInput::new("agree", "I agree").with_value_on("x").with_value_off("x");
        assert_eq!(toggle.value_on, toggle.value_off);
        let json = toggle.to_value().unwrap();
        assert_eq!(json["type"], "Input.Toggle");
        assert_eq!(json["title"], "I agree");
    }

    #[test]
    fn test_choice_set_round_trip() {
        let input = ChoiceSetInput::new("color")
            .add_choices([Choice::new("Red", "red")])
            .add_choices([Choice::new("Blue", "blue")])
            .with_choices_data(ChoicesData::new("colors").with_count(10))
            .with_style(ChoiceInputStyle::Filtered)
            .multi_select()
            .with_required(false);

        let json = serde_json::to_value(Element::from(input.clone())).unwrap();
        assert_eq!(json["choices"][1], json!({"title": "Blue", "value": "blue"}));
        assert_eq!(json["choices.data"], json!({"type": "Data.Query", "dataset": "colors", "count": 10}));
        assert_eq!(json["isRequired"], false);

        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, Element::ChoiceSetInput(input));
    }

    #[test]
    fn test_number_input_from_value() {
        let input = NumberInput::from_value(json!({"id": "qty", "min": 1, "max": 10.5, "label": "Quantity"})).unwrap();
        assert_eq!(input.base.id.as_deref(), Some("qty"));
        assert_eq!(input.min, Some(1.0));
        assert_eq!(input.max, Some(10.5));
        assert_eq!(input.input.label.as_deref(), Some("Quantity"));
    }

    #[test]
    fn test_rating_input_flags() {
        let input = RatingInput::new("stars").with_max(5).allow_half_steps();
        assert_eq!(input.allow_half_steps, Some(true));
        assert_eq!(input.with_allow_half_steps(false).allow_half_steps, Some(false));
    }

    #[test]
    fn test_input_shares_element_setters() {
        let input = DateInput::new("due").with_min("2024-01-01").separator().with_visible(false);
        assert_eq!(input.base.separator, Some(true));
        assert_eq!(input.base.is_visible, Some(false));
        assert_eq!(TimeInput::new("at").with_value("09:30").value.as_deref(), Some("09:30"));
    }
}
