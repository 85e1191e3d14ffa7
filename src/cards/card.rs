//! The top-level [`AdaptiveCard`] and its attachment wrapper.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::macros::{card_object, discriminator, flag_setters, option_setters, vec_adders};
use super::types::{FillMode, HorizontalAlignment, VerticalAlignment};
use super::{Action, Element, Layout};

/// Schema version written by [`AdaptiveCard::new`].
pub const DEFAULT_CARD_VERSION: &str = "1.5";

card_object!(AdaptiveCard => "AdaptiveCard");

discriminator!(AdaptiveCardType = "AdaptiveCard");

fn default_version() -> String {
    DEFAULT_CARD_VERSION.to_string()
}

/// An Adaptive Card.
///
/// # Example
///
/// ```ignore
/// use graph_cards::cards::{AdaptiveCard, SubmitAction, TextBlock, ActionBuilder};
///
/// let card = AdaptiveCard::new()
///     .add_body([TextBlock::new("Deploy to production?").wrap().into()])
///     .add_actions([SubmitAction::new().with_title("Approve").into()]);
/// let json = serde_json::to_string(&card)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveCard {
    #[serde(rename = "type", default)]
    kind: AdaptiveCardType,

    /// Schema URL.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Schema version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Body elements.
    #[serde(default)]
    pub body: Vec<Element>,

    /// Buttons below the body.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,

    /// Action invoked when the card is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,

    /// Text shown by hosts that cannot render the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_text: Option<String>,

    /// Background image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,

    /// Minimum height, e.g. `200px`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,

    /// Right-to-left content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtl: Option<bool>,

    /// Text read aloud by speech hosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speak: Option<String>,

    /// Locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Vertical alignment of the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,

    /// Auto-refresh behaviour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<Refresh>,

    /// Card metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CardMetadata>,

    /// Teams-only properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msteams: Option<TeamsCardProperties>,

    /// Body layouts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layouts: Vec<Layout>,
}

impl Default for AdaptiveCard {
    fn default() -> Self {
        Self {
            kind: AdaptiveCardType::default(),
            schema: None,
            version: default_version(),
            body: Vec::new(),
            actions: Vec::new(),
            select_action: None,
            fallback_text: None,
            background_image: None,
            min_height: None,
            rtl: None,
            speak: None,
            lang: None,
            vertical_content_alignment: None,
            refresh: None,
            metadata: None,
            msteams: None,
            layouts: Vec::new(),
        }
    }
}

impl AdaptiveCard {
    /// Schema URL accepted by card designers.
    pub const SCHEMA: &'static str = "http://adaptivecards.io/schemas/adaptive-card.json";

    /// Creates an empty card at [`DEFAULT_CARD_VERSION`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schema version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets `$schema` to [`AdaptiveCard::SCHEMA`].
    pub fn with_default_schema(self) -> Self {
        self.with_schema(Self::SCHEMA)
    }

    vec_adders! {
        add_body => body: Element,
        add_actions => actions: Action,
        add_layouts => layouts: Layout,
    }

    option_setters! {
        with_schema => schema: String,
        with_select_action => select_action: Box<Action>,
        with_fallback_text => fallback_text: String,
        with_background_image => background_image: BackgroundImage,
        with_min_height => min_height: String,
        with_speak => speak: String,
        with_lang => lang: String,
        with_vertical_content_alignment => vertical_content_alignment: VerticalAlignment,
        with_refresh => refresh: Refresh,
        with_metadata => metadata: CardMetadata,
        with_msteams => msteams: TeamsCardProperties,
    }

    flag_setters! {
        rtl / with_rtl => rtl,
    }
}

/// A background image for a card, container, column or cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    /// Image URL or data URI.
    pub url: String,

    /// Fill mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<FillMode>,

    /// Horizontal alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,

    /// Vertical alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<VerticalAlignment>,
}

impl BackgroundImage {
    /// Creates a background image.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    option_setters! {
        with_fill_mode => fill_mode: FillMode,
        with_horizontal_alignment => horizontal_alignment: HorizontalAlignment,
        with_vertical_alignment => vertical_alignment: VerticalAlignment,
    }
}

/// Asks the host to re-fetch the card with an `Action.Execute`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refresh {
    /// The action invoked to refresh. Must be `Action.Execute`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Box<Action>>,

    /// Users for whom the refresh runs automatically.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,

    /// Timestamp after which the card is stale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

impl Refresh {
    /// Creates a refresh with the given action.
    pub fn new(action: impl Into<Action>) -> Self {
        Self {
            action: Some(Box::new(action.into())),
            ..Default::default()
        }
    }

    vec_adders! {
        add_user_ids => user_ids: String,
    }

    option_setters! {
        with_expires => expires: String,
    }
}

/// Card metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMetadata {
    /// URL of the card's web equivalent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

impl CardMetadata {
    /// Metadata pointing at `web_url`.
    pub fn new(web_url: impl Into<String>) -> Self {
        Self {
            web_url: Some(web_url.into()),
        }
    }
}

/// Teams-specific card properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsCardProperties {
    /// `"Full"` stretches the card to the message width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    /// Mention entities referenced from the card text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Value>,
}

impl TeamsCardProperties {
    /// Creates empty properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stretches the card to the full message width.
    pub fn full_width(mut self) -> Self {
        self.width = Some("Full".to_string());
        self
    }

    vec_adders! {
        add_entities => entities: Value,
    }
}

/// A card wrapped as a Bot Framework / Graph attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAttachment {
    /// Always [`CardAttachment::CONTENT_TYPE`] when built here.
    pub content_type: String,

    /// The card.
    pub content: AdaptiveCard,
}

impl CardAttachment {
    /// MIME type of an Adaptive Card attachment.
    pub const CONTENT_TYPE: &'static str = "application/vnd.microsoft.card.adaptive";

    /// Wraps a card.
    pub fn new(card: AdaptiveCard) -> Self {
        Self {
            content_type: Self::CONTENT_TYPE.to_string(),
            content: card,
        }
    }
}

impl From<AdaptiveCard> for CardAttachment {
    fn from(card: AdaptiveCard) -> Self {
        CardAttachment::new(card)
    }
}
