//! The `Element` family, the shared element base, and the text elements.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::container::{ActionSet, ColumnSet, Container, Table};
use super::input::{ChoiceSetInput, DateInput, NumberInput, RatingInput, TextInput, TimeInput, ToggleInput};
use super::macros::{card_object, discriminator, flag_setters, option_setters, value_setters, vec_adders};
use super::media::{Badge, Icon, Image, ImageSet, Media};
use super::types::{
    BlockElementHeight, Emphasis, Fallback, FontType, HorizontalAlignment, Position, Size, Spacing, TextBlockStyle,
    TextColor, TextSize, TextWeight,
};
use super::{Action, CardObject};

/// Any element that can appear in a card body or container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[allow(missing_docs)]
pub enum Element {
    TextBlock(TextBlock),
    RichTextBlock(RichTextBlock),
    FactSet(FactSet),
    CodeBlock(CodeBlock),
    ProgressBar(ProgressBar),
    ProgressRing(ProgressRing),
    #[serde(rename = "Rating")]
    RatingDisplay(RatingDisplay),
    Image(Image),
    ImageSet(ImageSet),
    Media(Media),
    Badge(Badge),
    Icon(Icon),
    Container(Container),
    ColumnSet(ColumnSet),
    ActionSet(ActionSet),
    Table(Table),
    #[serde(rename = "Input.Text")]
    TextInput(TextInput),
    #[serde(rename = "Input.Number")]
    NumberInput(NumberInput),
    #[serde(rename = "Input.Date")]
    DateInput(DateInput),
    #[serde(rename = "Input.Time")]
    TimeInput(TimeInput),
    #[serde(rename = "Input.Toggle")]
    ToggleInput(ToggleInput),
    #[serde(rename = "Input.ChoiceSet")]
    ChoiceSetInput(ChoiceSetInput),
    #[serde(rename = "Input.Rating")]
    RatingInput(RatingInput),
}

card_object!(Element {
    TextBlock => "TextBlock",
    RichTextBlock => "RichTextBlock",
    FactSet => "FactSet",
    CodeBlock => "CodeBlock",
    ProgressBar => "ProgressBar",
    ProgressRing => "ProgressRing",
    RatingDisplay => "Rating",
    Image => "Image",
    ImageSet => "ImageSet",
    Media => "Media",
    Badge => "Badge",
    Icon => "Icon",
    Container => "Container",
    ColumnSet => "ColumnSet",
    ActionSet => "ActionSet",
    Table => "Table",
    TextInput => "Input.Text",
    NumberInput => "Input.Number",
    DateInput => "Input.Date",
    TimeInput => "Input.Time",
    ToggleInput => "Input.Toggle",
    ChoiceSetInput => "Input.ChoiceSet",
    RatingInput => "Input.Rating",
});

impl Element {
    /// The `type` discriminator.
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::TextBlock(_) => TextBlock::TYPE,
            Element::RichTextBlock(_) => RichTextBlock::TYPE,
            Element::FactSet(_) => FactSet::TYPE,
            Element::CodeBlock(_) => CodeBlock::TYPE,
            Element::ProgressBar(_) => ProgressBar::TYPE,
            Element::ProgressRing(_) => ProgressRing::TYPE,
            Element::RatingDisplay(_) => RatingDisplay::TYPE,
            Element::Image(_) => Image::TYPE,
            Element::ImageSet(_) => ImageSet::TYPE,
            Element::Media(_) => Media::TYPE,
            Element::Badge(_) => Badge::TYPE,
            Element::Icon(_) => Icon::TYPE,
            Element::Container(_) => Container::TYPE,
            Element::ColumnSet(_) => ColumnSet::TYPE,
            Element::ActionSet(_) => ActionSet::TYPE,
            Element::Table(_) => Table::TYPE,
            Element::TextInput(_) => TextInput::TYPE,
            Element::NumberInput(_) => NumberInput::TYPE,
            Element::DateInput(_) => DateInput::TYPE,
            Element::TimeInput(_) => TimeInput::TYPE,
            Element::ToggleInput(_) => ToggleInput::TYPE,
            Element::ChoiceSetInput(_) => ChoiceSetInput::TYPE,
            Element::RatingInput(_) => RatingInput::TYPE,
        }
    }

    /// The shared element fields.
    pub fn base(&self) -> &ElementBase {
        match self {
            Element::TextBlock(e) => e.element_base(),
            Element::RichTextBlock(e) => e.element_base(),
            Element::FactSet(e) => e.element_base(),
            Element::CodeBlock(e) => e.element_base(),
            Element::ProgressBar(e) => e.element_base(),
            Element::ProgressRing(e) => e.element_base(),
            Element::RatingDisplay(e) => e.element_base(),
            Element::Image(e) => e.element_base(),
            Element::ImageSet(e) => e.element_base(),
            Element::Media(e) => e.element_base(),
            Element::Badge(e) => e.element_base(),
            Element::Icon(e) => e.element_base(),
            Element::Container(e) => e.element_base(),
            Element::ColumnSet(e) => e.element_base(),
            Element::ActionSet(e) => e.element_base(),
            Element::Table(e) => e.element_base(),
            Element::TextInput(e) => e.element_base(),
            Element::NumberInput(e) => e.element_base(),
            Element::DateInput(e) => e.element_base(),
            Element::TimeInput(e) => e.element_base(),
            Element::ToggleInput(e) => e.element_base(),
            Element::ChoiceSetInput(e) => e.element_base(),
            Element::RatingInput(e) => e.element_base(),
        }
    }

    /// The element id, if set.
    pub fn id(&self) -> Option<&str> {
        self.base().id.as_deref()
    }
}

/// Fields every element carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBase {
    /// Unique id, referenced by inputs and `Action.ToggleVisibility`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Initial visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    /// Draw a separator line above the element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,

    /// Spacing above the element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,

    /// Height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<BlockElementHeight>,

    /// Host features required to render the element, name to version.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub requires: BTreeMap<String, String>,

    /// Rendered when the element or a requirement is unsupported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback<Element>>,

    /// Locale for date and number formatting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Card widths at which the element is shown, e.g. `atLeast:narrow`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_width: Option<String>,

    /// Named area in an `AreaGridLayout`.
    #[serde(rename = "grid.area", default, skip_serializing_if = "Option::is_none")]
    pub grid_area: Option<String>,
}

/// Setters for [`ElementBase`] fields, implemented by every element.
pub trait ElementBuilder: Sized {
    /// The shared fields.
    fn element_base(&self) -> &ElementBase;

    /// The shared fields, mutably.
    fn element_base_mut(&mut self) -> &mut ElementBase;

    /// Sets the id.
    fn with_id(mut self, id: impl Into<String>) -> Self {
        self.element_base_mut().id = Some(id.into());
        self
    }

    /// Sets initial visibility.
    fn with_visible(mut self, visible: bool) -> Self {
        self.element_base_mut().is_visible = Some(visible);
        self
    }

    /// Makes the element visible.
    fn visible(self) -> Self {
        self.with_visible(true)
    }

    /// Sets the separator flag.
    fn with_separator(mut self, separator: bool) -> Self {
        self.element_base_mut().separator = Some(separator);
        self
    }

    /// Draws a separator above the element.
    fn separator(self) -> Self {
        self.with_separator(true)
    }

    /// Sets the spacing.
    fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.element_base_mut().spacing = Some(spacing);
        self
    }

    /// Sets the height.
    fn with_height(mut self, height: BlockElementHeight) -> Self {
        self.element_base_mut().height = Some(height);
        self
    }

    /// Adds a host requirement.
    fn with_requires(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.element_base_mut().requires.insert(name.into(), version.into());
        self
    }

    /// Sets the fallback.
    fn with_fallback(mut self, fallback: Fallback<Element>) -> Self {
        self.element_base_mut().fallback = Some(fallback);
        self
    }

    /// Sets the locale.
    fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.element_base_mut().lang = Some(lang.into());
        self
    }

    /// Sets the target width.
    fn with_target_width(mut self, target_width: impl Into<String>) -> Self {
        self.element_base_mut().target_width = Some(target_width.into());
        self
    }

    /// Places the element in a named grid area.
    fn with_grid_area(mut self, area: impl Into<String>) -> Self {
        self.element_base_mut().grid_area = Some(area.into());
        self
    }
}

/// Implements [`ElementBuilder`] for types with a `base: ElementBase` field.
macro_rules! impl_element_builder {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl $crate::cards::ElementBuilder for $ty {
                fn element_base(&self) -> &$crate::cards::ElementBase {
                    &self.base
                }

                fn element_base_mut(&mut self) -> &mut $crate::cards::ElementBase {
                    &mut self.base
                }
            }
        )*
    };
}

pub(crate) use impl_element_builder;

impl_element_builder!(TextBlock, RichTextBlock, FactSet, CodeBlock, ProgressBar, ProgressRing, RatingDisplay);

/// A block of text.
///
/// ```ignore
/// let title = TextBlock::new("Build ").add_text(["#1234", " passed"]).wrap();
/// assert_eq!(title.text, "Build #1234 passed");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// The text. Supports a subset of Markdown.
    #[serde(default)]
    pub text: String,

    /// Color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,

    /// Font family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_type: Option<FontType>,

    /// Horizontal alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,

    /// Dimmed text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subtle: Option<bool>,

    /// Line limit when wrapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,

    /// Size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,

    /// Weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<TextWeight>,

    /// Wrap long text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,

    /// Style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextBlockStyle>,
}

impl TextBlock {
    /// Creates a text block.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Replaces the text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends to the text with no delimiter.
    pub fn add_text<I, S>(mut self, text: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for part in text {
            self.text.push_str(part.as_ref());
        }
        self
    }

    option_setters! {
        with_color => color: TextColor,
        with_font_type => font_type: FontType,
        with_horizontal_alignment => horizontal_alignment: HorizontalAlignment,
        with_size => size: TextSize,
        with_weight => weight: TextWeight,
        with_style => style: TextBlockStyle,
    }

    value_setters! {
        with_max_lines => max_lines: u32,
    }

    flag_setters! {
        subtle / with_subtle => is_subtle,
        wrap / with_wrap => wrap,
    }
}

impl fmt::Display for TextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

discriminator!(TextRunType = "TextRun");

/// A run of formatted text inside a [`RichTextBlock`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    #[serde(rename = "type", default)]
    kind: TextRunType,

    /// The text.
    #[serde(default)]
    pub text: String,

    /// Color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,

    /// Font family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_type: Option<FontType>,

    /// Highlighted text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,

    /// Dimmed text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subtle: Option<bool>,

    /// Italic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    /// Action invoked when the run is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,

    /// Size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,

    /// Struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,

    /// Underlined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,

    /// Weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<TextWeight>,
}

impl TextRun {
    /// Creates a text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Replaces the text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends to the text with no delimiter.
    pub fn add_text<I, S>(mut self, text: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for part in text {
            self.text.push_str(part.as_ref());
        }
        self
    }

    option_setters! {
        with_color => color: TextColor,
        with_font_type => font_type: FontType,
        with_select_action => select_action: Box<Action>,
        with_size => size: TextSize,
        with_weight => weight: TextWeight,
    }

    flag_setters! {
        highlight / with_highlight => highlight,
        subtle / with_subtle => is_subtle,
        italic / with_italic => italic,
        strikethrough / with_strikethrough => strikethrough,
        underline / with_underline => underline,
    }
}

impl fmt::Display for TextRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An inline of a [`RichTextBlock`]: a bare string or a [`TextRun`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Inline {
    /// Plain text.
    Text(String),
    /// Formatted text.
    TextRun(TextRun),
}

impl Inline {
    /// The inline's text.
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text) => text,
            Inline::TextRun(run) => &run.text,
        }
    }
}

impl From<&str> for Inline {
    fn from(text: &str) -> Self {
        Inline::Text(text.to_string())
    }
}

impl From<String> for Inline {
    fn from(text: String) -> Self {
        Inline::Text(text)
    }
}

impl From<TextRun> for Inline {
    fn from(run: TextRun) -> Self {
        Inline::TextRun(run)
    }
}

/// Text made of individually formatted inlines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextBlock {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// The inlines.
    #[serde(default)]
    pub inlines: Vec<Inline>,

    /// Horizontal alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
}

impl RichTextBlock {
    /// Creates an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends inlines.
    pub fn add_inlines<I, T>(mut self, inlines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Inline>,
    {
        self.inlines.extend(inlines.into_iter().map(Into::into));
        self
    }

    option_setters! {
        with_horizontal_alignment => horizontal_alignment: HorizontalAlignment,
    }

    /// Joins the text of every inline with `delimiter`.
    pub fn to_text(&self, delimiter: &str) -> String {
        self.inlines
            .iter()
            .map(Inline::text)
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

impl fmt::Display for RichTextBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(""))
    }
}

/// A title/value pair in a [`FactSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Title.
    pub title: String,
    /// Value.
    pub value: String,
}

impl Fact {
    /// Creates a fact.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// A list of facts shown as a two-column table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSet {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// The facts.
    #[serde(default)]
    pub facts: Vec<Fact>,
}

impl FactSet {
    /// Creates an empty fact set.
    pub fn new() -> Self {
        Self::default()
    }

    vec_adders! {
        add_facts => facts: Fact,
    }
}

/// A code snippet with syntax highlighting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// The code.
    #[serde(default)]
    pub code_snippet: String,

    /// Language, e.g. `Rust`, `Json`, `PlainText`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Number of the first line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line_number: Option<u32>,
}

impl CodeBlock {
    /// Creates a code block.
    pub fn new(code_snippet: impl Into<String>) -> Self {
        Self {
            code_snippet: code_snippet.into(),
            ..Default::default()
        }
    }

    option_setters! {
        with_language => language: String,
    }

    value_setters! {
        with_start_line_number => start_line_number: u32,
    }
}

/// A horizontal progress bar. Without a value it is indeterminate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBar {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Current value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Maximum value. Hosts default to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Bar color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Emphasis>,
}

impl ProgressBar {
    /// Creates an indeterminate bar.
    pub fn new() -> Self {
        Self::default()
    }

    option_setters! {
        with_value => value: f64,
        with_max => max: f64,
        with_color => color: Emphasis,
    }
}

/// A spinner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRing {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Label position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_position: Option<Position>,

    /// Size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

impl ProgressRing {
    /// Creates a spinner.
    pub fn new() -> Self {
        Self::default()
    }

    option_setters! {
        with_label => label: String,
        with_label_position => label_position: Position,
        with_size => size: Size,
    }
}

/// Star color of a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum RatingColor {
    Neutral,
    Marigold,
}

/// Rating presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum RatingStyle {
    Default,
    Compact,
}

/// A read-only star rating (`type: "Rating"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDisplay {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Rating value.
    #[serde(default)]
    pub value: f64,

    /// Number of stars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,

    /// Number of ratings, shown next to the stars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    /// Star color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<RatingColor>,

    /// Size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    /// Style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<RatingStyle>,
}

impl RatingDisplay {
    /// Creates a rating.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    option_setters! {
        with_color => color: RatingColor,
        with_size => size: Size,
        with_style => style: RatingStyle,
    }

    value_setters! {
        with_max => max: u32,
        with_count => count: u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{SubmitAction, TextInput};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_text_block_json() {
        let block = TextBlock::new("Hello")
            .with_size(TextSize::Large)
            .with_weight(TextWeight::Bolder)
            .wrap()
            .with_id("title")
            .separator();
        assert_eq!(
            serde_json::to_value(Element::from(block)).unwrap(),
            json!({
                "type": "TextBlock",
                "id": "title",
                "separator": true,
                "text": "Hello",
                "size": "large",
                "weight": "bolder",
                "wrap": true
            })
        );
    }

    #[test]
    fn test_add_text_concatenates() {
        let block = TextBlock::new("a").add_text(["b", "c"]).add_text(["d"]);
        assert_eq!(block.text, "abcd");
        assert_eq!(block.to_string(), "abcd");
    }

    #[test]
    fn test_rich_text_to_text() {
        let block = RichTextBlock::new()
            .add_inlines(["Hello"])
            .add_inlines([TextRun::new("big").add_text([" ", "world"]).italic()]);
        assert_eq!(block.to_text(", "), "Hello, big world");
        assert_eq!(block.to_text(""), "Hellobig world");
        assert_eq!(block.to_string(), "Hellobig world");
    }

    #[test]
    fn test_rich_text_json_keeps_run_type() {
        let block = RichTextBlock::new()
            .add_inlines(["plain "])
            .add_inlines([TextRun::new("bold").with_weight(TextWeight::Bolder)]);
        let json = serde_json::to_value(Element::from(block.clone())).unwrap();
        assert_eq!(json["inlines"][0], json!("plain "));
        assert_eq!(json["inlines"][1], json!({"type": "TextRun", "text": "bold", "weight": "bolder"}));

        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, Element::RichTextBlock(block));
    }

    #[test]
    fn test_flag_shorthands() {
        let block = TextBlock::new("x").wrap().subtle();
        assert_eq!(block.wrap, Some(true));
        assert_eq!(block.is_subtle, Some(true));

        let block = block.with_wrap(false).with_subtle(false);
        assert_eq!(block.wrap, Some(false));
        assert_eq!(block.is_subtle, Some(false));

        let run = TextRun::new("x").highlight().strikethrough().underline().italic();
        assert_eq!(
            (run.highlight, run.strikethrough, run.underline, run.italic),
            (Some(true), Some(true), Some(true), Some(true))
        );
        let run = run.with_highlight(false).with_italic(false);
        assert_eq!((run.highlight, run.italic), (Some(false), Some(false)));

        let block = TextBlock::new("x").visible().with_visible(false);
        assert_eq!(block.base.is_visible, Some(false));
    }

    #[test]
    fn test_last_write_wins() {
        let block = TextBlock::new("x")
            .with_size(TextSize::Small)
            .with_size(TextSize::ExtraLarge)
            .with_text("y");
        assert_eq!(block.size, Some(TextSize::ExtraLarge));
        assert_eq!(block.text, "y");
    }

    #[test]
    fn test_fallback_drop_and_content() {
        let block = TextBlock::new("new").with_fallback(Fallback::Drop);
        let json = serde_json::to_value(Element::from(block)).unwrap();
        assert_eq!(json["fallback"], "drop");

        let input = TextInput::new("name").with_fallback(Fallback::content(TextBlock::new("Upgrade your client")));
        let json = serde_json::to_value(Element::from(input.clone())).unwrap();
        assert_eq!(json["fallback"]["type"], "TextBlock");
        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, Element::TextInput(input));
    }

    #[test]
    fn test_requires_and_grid_area() {
        let block = TextBlock::new("x")
            .with_requires("adaptiveCards", "1.5")
            .with_grid_area("header");
        let json = serde_json::to_value(Element::from(block)).unwrap();
        assert_eq!(json["requires"], json!({"adaptiveCards": "1.5"}));
        assert_eq!(json["grid.area"], "header");
    }

    #[test]
    fn test_from_value_and_type_check() {
        let block = TextBlock::from_value(json!({"type": "TextBlock", "text": "hi", "wrap": true})).unwrap();
        assert_eq!(block, TextBlock::new("hi").wrap());

        let err = TextBlock::from_value(json!({"type": "Image", "url": "x"})).unwrap_err();
        assert!(matches!(err, crate::error::CardError::TypeMismatch { expected: "TextBlock", .. }));
    }

    #[test]
    fn test_with_options_merges() {
        let block = TextBlock::new("hi")
            .wrap()
            .with_options(json!({"text": "bye", "maxLines": 2}))
            .unwrap();
        assert_eq!(block.text, "bye");
        assert_eq!(block.wrap, Some(true));
        assert_eq!(block.max_lines, Some(2));
    }

    #[test]
    fn test_rating_display_type_name() {
        let element = Element::from(RatingDisplay::new(4.5).with_max(5));
        assert_eq!(element.type_name(), "Rating");
        assert_eq!(serde_json::to_value(&element).unwrap()["type"], "Rating");
    }

    #[test]
    fn test_text_run_select_action() {
        let run = TextRun::new("click").with_select_action(Box::new(Action::from(SubmitAction::new())));
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["selectAction"]["type"], "Action.Submit");
    }

    #[test]
    fn test_element_id() {
        let element = Element::from(FactSet::new().add_facts([Fact::new("Status", "Done")]).with_id("facts"));
        assert_eq!(element.id(), Some("facts"));
    }
}
