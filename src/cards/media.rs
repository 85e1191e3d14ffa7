//! Images, media players, badges and icons.

use serde::{Deserialize, Serialize};

use super::element::impl_element_builder;
use super::macros::{flag_setters, option_setters, vec_adders};
use super::types::{Emphasis, HorizontalAlignment, ImageSize, ImageStyle, Position, Size};
use super::{Action, ElementBase};

impl_element_builder!(Image, ImageSet, Media, Badge, Icon);

/// An image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Image URL or data URI.
    #[serde(default)]
    pub url: String,

    /// Accessible description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,

    /// Background color behind transparent pixels, `#RRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Horizontal alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,

    /// Action invoked on click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,

    /// Size when no explicit width is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,

    /// Style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,

    /// Explicit width, e.g. `50px`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    /// Open a full-size view on click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_expand: Option<bool>,

    /// Teams-only properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msteams: Option<serde_json::Value>,
}

impl Image {
    /// Creates an image.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    option_setters! {
        with_alt_text => alt_text: String,
        with_background_color => background_color: String,
        with_horizontal_alignment => horizontal_alignment: HorizontalAlignment,
        with_select_action => select_action: Box<Action>,
        with_size => size: ImageSize,
        with_style => style: ImageStyle,
        with_width => width: String,
        with_msteams => msteams: serde_json::Value,
    }

    flag_setters! {
        allow_expand / with_allow_expand => allow_expand,
    }
}

/// A gallery of images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSet {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// The images.
    #[serde(default)]
    pub images: Vec<Image>,

    /// Size applied to every image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
}

impl ImageSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    vec_adders! {
        add_images => images: Image,
    }

    option_setters! {
        with_image_size => image_size: ImageSize,
    }
}

/// A media file for [`Media`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    /// URL of the file.
    pub url: String,

    /// MIME type, e.g. `video/mp4`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl MediaSource {
    /// Creates a source.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: None,
        }
    }

    option_setters! {
        with_mime_type => mime_type: String,
    }
}

/// A caption track for [`Media`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSource {
    /// URL of the caption file.
    pub url: String,

    /// MIME type, e.g. `vtt`.
    pub mime_type: String,

    /// Label shown in the track picker.
    pub label: String,
}

impl CaptionSource {
    /// Creates a caption source.
    pub fn new(url: impl Into<String>, mime_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: mime_type.into(),
            label: label.into(),
        }
    }
}

/// An audio or video player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Alternative sources of the same clip.
    #[serde(default)]
    pub sources: Vec<MediaSource>,

    /// Caption tracks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption_sources: Vec<CaptionSource>,

    /// Poster image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,

    /// Accessible description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl Media {
    /// Creates a player with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    vec_adders! {
        add_sources => sources: MediaSource,
        add_caption_sources => caption_sources: CaptionSource,
    }

    option_setters! {
        with_poster => poster: String,
        with_alt_text => alt_text: String,
    }
}

/// Badge shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum BadgeShape {
    Square,
    Rounded,
    Circular,
}

/// Badge fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum BadgeAppearance {
    Filled,
    Tint,
}

/// A small status pill with optional icon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Fluent icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Icon position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_position: Option<Position>,

    /// Fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<BadgeAppearance>,

    /// Size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    /// Shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<BadgeShape>,

    /// Color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Emphasis>,

    /// Tooltip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Horizontal alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
}

impl Badge {
    /// Creates an empty badge.
    pub fn new() -> Self {
        Self::default()
    }

    option_setters! {
        with_text => text: String,
        with_icon => icon: String,
        with_icon_position => icon_position: Position,
        with_appearance => appearance: BadgeAppearance,
        with_size => size: Size,
        with_shape => shape: BadgeShape,
        with_style => style: Emphasis,
        with_tooltip => tooltip: String,
        with_horizontal_alignment => horizontal_alignment: HorizontalAlignment,
    }
}

/// Icon glyph style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum IconStyle {
    Regular,
    Filled,
}

/// A Fluent UI icon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Icon name, e.g. `Calendar`.
    #[serde(default)]
    pub name: String,

    /// Size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    /// Glyph style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<IconStyle>,

    /// Color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Emphasis>,

    /// Action invoked on click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,

    /// Horizontal alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
}

impl Icon {
    /// Creates an icon.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    option_setters! {
        with_size => size: Size,
        with_style => style: IconStyle,
        with_color => color: Emphasis,
        with_select_action => select_action: Box<Action>,
        with_horizontal_alignment => horizontal_alignment: HorizontalAlignment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardObject, Element, ElementBuilder, OpenUrlAction};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_image_json() {
        let image = Image::new("https://example.com/a.png")
            .with_alt_text("logo")
            .with_size(ImageSize::Small)
            .with_style(ImageStyle::Person)
            .allow_expand()
            .with_select_action(Action::from(OpenUrlAction::new("https://example.com")));
        assert_eq!(
            serde_json::to_value(Element::from(image)).unwrap(),
            json!({
                "type": "Image",
                "url": "https://example.com/a.png",
                "altText": "logo",
                "size": "small",
                "style": "person",
                "allowExpand": true,
                "selectAction": {"type": "Action.OpenUrl", "url": "https://example.com"}
            })
        );
    }

    #[test]
    fn test_image_set_appends() {
        let set = ImageSet::new()
            .add_images([Image::new("a")])
            .add_images([Image::new("b"), Image::new("c")]);
        let urls: Vec<_> = set.images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, ["a", "b", "c"]);
    }

    #[test]
    fn test_media_sources() {
        let media = Media::new()
            .add_sources([MediaSource::new("https://example.com/v.mp4").with_mime_type("video/mp4")])
            .add_caption_sources([CaptionSource::new("https://example.com/en.vtt", "vtt", "English")])
            .with_poster("https://example.com/poster.png");
        let json = media.to_value().unwrap();
        assert_eq!(json["type"], "Media");
        assert_eq!(json["sources"][0]["mimeType"], "video/mp4");
        assert_eq!(json["captionSources"][0]["label"], "English");
    }

    #[test]
    fn test_badge_round_trip() {
        let badge = Badge::new()
            .with_text("New")
            .with_icon("Sparkle")
            .with_appearance(BadgeAppearance::Tint)
            .with_shape(BadgeShape::Circular)
            .with_style(Emphasis::Accent)
            .with_id("badge");
        let json = serde_json::to_value(Element::from(badge.clone())).unwrap();
        assert_eq!(json["type"], "Badge");
        assert_eq!(json["appearance"], "tint");
        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, Element::Badge(badge));
    }

    #[test]
    fn test_icon_from_value() {
        let icon = Icon::from_value(json!({"type": "Icon", "name": "Calendar", "size": "xSmall", "style": "filled"}))
            .unwrap();
        assert_eq!(icon, Icon::new("Calendar").with_size(Size::XSmall).with_style(IconStyle::Filled));
    }
}
