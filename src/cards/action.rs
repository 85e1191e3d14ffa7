//! The `Action` family and the Teams-flavoured submit actions.
//!
//! Teams reads an `msteams` object inside `Action.Submit` data to decide
//! whether a click posts a message, invokes the bot or opens a dialog.
//! [`ImBackAction`], [`MessageBackAction`], [`SignInAction`],
//! [`InvokeAction`] and [`TaskFetchAction`] build those payloads and convert
//! into a plain [`SubmitAction`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::macros::{card_object, flag_setters, option_setters, vec_adders};
use super::types::{ActionMode, ActionStyle, AssociatedInputs, Fallback};
use super::{AdaptiveCard, CardObject};

/// Any action: a card-level button, a `selectAction`, or an inline action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[allow(missing_docs)]
pub enum Action {
    #[serde(rename = "Action.OpenUrl")]
    OpenUrlAction(OpenUrlAction),
    #[serde(rename = "Action.Submit")]
    SubmitAction(SubmitAction),
    #[serde(rename = "Action.ShowCard")]
    ShowCardAction(ShowCardAction),
    #[serde(rename = "Action.ToggleVisibility")]
    ToggleVisibilityAction(ToggleVisibilityAction),
    #[serde(rename = "Action.Execute")]
    ExecuteAction(ExecuteAction),
    #[serde(rename = "Action.ResetInputs")]
    ResetInputsAction(ResetInputsAction),
}

card_object!(Action {
    OpenUrlAction => "Action.OpenUrl",
    SubmitAction => "Action.Submit",
    ShowCardAction => "Action.ShowCard",
    ToggleVisibilityAction => "Action.ToggleVisibility",
    ExecuteAction => "Action.Execute",
    ResetInputsAction => "Action.ResetInputs",
});

impl Action {
    /// The `type` discriminator.
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::OpenUrlAction(_) => OpenUrlAction::TYPE,
            Action::SubmitAction(_) => SubmitAction::TYPE,
            Action::ShowCardAction(_) => ShowCardAction::TYPE,
            Action::ToggleVisibilityAction(_) => ToggleVisibilityAction::TYPE,
            Action::ExecuteAction(_) => ExecuteAction::TYPE,
            Action::ResetInputsAction(_) => ResetInputsAction::TYPE,
        }
    }

    /// The shared action fields.
    pub fn base(&self) -> &ActionBase {
        match self {
            Action::OpenUrlAction(a) => &a.base,
            Action::SubmitAction(a) => &a.base,
            Action::ShowCardAction(a) => &a.base,
            Action::ToggleVisibilityAction(a) => &a.base,
            Action::ExecuteAction(a) => &a.base,
            Action::ResetInputsAction(a) => &a.base,
        }
    }

    /// The button title, if set.
    pub fn title(&self) -> Option<&str> {
        self.base().title.as_deref()
    }
}

/// Fields every action carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionBase {
    /// Unique id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Button label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Icon URL or `icon:<FluentName>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// Style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ActionStyle>,

    /// Rendered when the action is unsupported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback<Action>>,

    /// Tooltip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Clickable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,

    /// Primary or overflow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ActionMode>,

    /// Host features required, name to version.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub requires: BTreeMap<String, String>,
}

/// Setters for [`ActionBase`] fields, implemented by every action.
pub trait ActionBuilder: Sized {
    /// The shared fields, mutably.
    fn action_base_mut(&mut self) -> &mut ActionBase;

    /// Sets the id.
    fn with_id(mut self, id: impl Into<String>) -> Self {
        self.action_base_mut().id = Some(id.into());
        self
    }

    /// Sets the title.
    fn with_title(mut self, title: impl Into<String>) -> Self {
        self.action_base_mut().title = Some(title.into());
        self
    }

    /// Sets the icon.
    fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.action_base_mut().icon_url = Some(icon_url.into());
        self
    }

    /// Sets the style.
    fn with_style(mut self, style: ActionStyle) -> Self {
        self.action_base_mut().style = Some(style);
        self
    }

    /// Sets the fallback.
    fn with_fallback(mut self, fallback: Fallback<Action>) -> Self {
        self.action_base_mut().fallback = Some(fallback);
        self
    }

    /// Sets the tooltip.
    fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.action_base_mut().tooltip = Some(tooltip.into());
        self
    }

    /// Sets whether the action is clickable.
    fn with_enabled(mut self, enabled: bool) -> Self {
        self.action_base_mut().is_enabled = Some(enabled);
        self
    }

    /// Makes the action clickable.
    fn enabled(self) -> Self {
        self.with_enabled(true)
    }

    /// Sets the mode.
    fn with_mode(mut self, mode: ActionMode) -> Self {
        self.action_base_mut().mode = Some(mode);
        self
    }

    /// Adds a host requirement.
    fn with_requires(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.action_base_mut().requires.insert(name.into(), version.into());
        self
    }
}

macro_rules! impl_action_builder {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl ActionBuilder for $ty {
                fn action_base_mut(&mut self) -> &mut ActionBase {
                    &mut self.base
                }
            }
        )*
    };
}

impl_action_builder!(
    OpenUrlAction,
    SubmitAction,
    ShowCardAction,
    ToggleVisibilityAction,
    ExecuteAction,
    ResetInputsAction,
);

/// Opens a URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenUrlAction {
    /// Shared action fields.
    #[serde(flatten)]
    pub base: ActionBase,

    /// Target URL.
    #[serde(default)]
    pub url: String,
}

impl OpenUrlAction {
    /// Creates the action.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Replaces the URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// Kind of Teams submit behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamsSubmitKind {
    /// Posts `value` into the chat as the user.
    #[serde(rename = "imBack")]
    ImBack,
    /// Sends `value` to the bot, optionally echoing `display_text`.
    #[serde(rename = "messageBack")]
    MessageBack,
    /// Opens a sign-in URL.
    #[serde(rename = "signin")]
    SignIn,
    /// Sends an invoke activity carrying `value`.
    #[serde(rename = "invoke")]
    Invoke,
    /// Opens a task module (dialog).
    #[serde(rename = "task/fetch")]
    TaskFetch,
}

/// The `msteams` object of submit data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsSubmitData {
    /// Behaviour.
    #[serde(rename = "type")]
    pub kind: TeamsSubmitKind,

    /// Payload; a string for `imBack` and `signin`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Text sent to the bot for `messageBack`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Text echoed in the chat for `messageBack`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

impl TeamsSubmitData {
    /// Creates data of the given kind.
    pub fn new(kind: TeamsSubmitKind) -> Self {
        Self {
            kind,
            value: None,
            text: None,
            display_text: None,
        }
    }

    option_setters! {
        with_value => value: Value,
        with_text => text: String,
        with_display_text => display_text: String,
    }
}

/// Data sent with a submit: the optional `msteams` object plus any other
/// keys, which hosts merge with the input values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitData {
    /// Teams behaviour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msteams: Option<TeamsSubmitData>,

    /// Everything else.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SubmitData {
    /// Creates empty data.
    pub fn new() -> Self {
        Self::default()
    }

    option_setters! {
        with_msteams => msteams: TeamsSubmitData,
    }

    /// Sets an extra key.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Merges extra keys; later keys overwrite earlier ones.
    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        self.extra.extend(fields);
        self
    }
}

/// Gathers the card's inputs and sends them to the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAction {
    /// Shared action fields.
    #[serde(flatten)]
    pub base: ActionBase,

    /// Data merged with the input values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SubmitData>,

    /// Which inputs to gather.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_inputs: Option<AssociatedInputs>,

    /// Disabled until a required input is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditionally_enabled: Option<bool>,
}

impl SubmitAction {
    /// Creates the action.
    pub fn new() -> Self {
        Self::default()
    }

    option_setters! {
        with_data => data: SubmitData,
        with_associated_inputs => associated_inputs: AssociatedInputs,
    }

    flag_setters! {
        conditionally_enabled / with_conditionally_enabled => conditionally_enabled,
    }

    fn with_teams(kind: TeamsSubmitKind) -> Self {
        Self::new().with_data(SubmitData::new().with_msteams(TeamsSubmitData::new(kind)))
    }

    fn teams_mut(&mut self) -> Option<&mut TeamsSubmitData> {
        self.data.as_mut().and_then(|data| data.msteams.as_mut())
    }
}

/// Reveals a nested card below the action row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowCardAction {
    /// Shared action fields.
    #[serde(flatten)]
    pub base: ActionBase,

    /// The card shown.
    #[serde(default)]
    pub card: Box<AdaptiveCard>,
}

impl ShowCardAction {
    /// Creates the action.
    pub fn new(card: AdaptiveCard) -> Self {
        Self {
            base: ActionBase::default(),
            card: Box::new(card),
        }
    }

    /// Replaces the card.
    pub fn with_card(mut self, card: AdaptiveCard) -> Self {
        self.card = Box::new(card);
        self
    }
}

/// An element whose visibility an [`ToggleVisibilityAction`] changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetElement {
    /// Toggle the element with this id.
    Id(String),
    /// Set the element's visibility, or toggle when `is_visible` is unset.
    Target {
        /// Element id.
        #[serde(rename = "elementId")]
        element_id: String,
        /// Visibility to set.
        #[serde(rename = "isVisible", default, skip_serializing_if = "Option::is_none")]
        is_visible: Option<bool>,
    },
}

impl TargetElement {
    /// Shows the element.
    pub fn show(element_id: impl Into<String>) -> Self {
        TargetElement::Target {
            element_id: element_id.into(),
            is_visible: Some(true),
        }
    }

    /// Hides the element.
    pub fn hide(element_id: impl Into<String>) -> Self {
        TargetElement::Target {
            element_id: element_id.into(),
            is_visible: Some(false),
        }
    }

    /// The element id.
    pub fn element_id(&self) -> &str {
        match self {
            TargetElement::Id(id) => id,
            TargetElement::Target { element_id, .. } => element_id,
        }
    }
}

impl From<&str> for TargetElement {
    fn from(id: &str) -> Self {
        TargetElement::Id(id.to_string())
    }
}

impl From<String> for TargetElement {
    fn from(id: String) -> Self {
        TargetElement::Id(id)
    }
}

/// Shows, hides or toggles elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleVisibilityAction {
    /// Shared action fields.
    #[serde(flatten)]
    pub base: ActionBase,

    /// Targets, in order.
    #[serde(default)]
    pub target_elements: Vec<TargetElement>,
}

impl ToggleVisibilityAction {
    /// Creates the action with no targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends targets.
    pub fn add_targets<I, T>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TargetElement>,
    {
        self.target_elements.extend(targets.into_iter().map(Into::into));
        self
    }
}

/// Universal action: sends a verb and the inputs to the bot, which may
/// answer with a replacement card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteAction {
    /// Shared action fields.
    #[serde(flatten)]
    pub base: ActionBase,

    /// Verb the bot dispatches on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,

    /// Data merged with the input values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SubmitData>,

    /// Which inputs to gather.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_inputs: Option<AssociatedInputs>,

    /// Disabled until a required input is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditionally_enabled: Option<bool>,
}

impl ExecuteAction {
    /// Creates the action.
    pub fn new() -> Self {
        Self::default()
    }

    option_setters! {
        with_verb => verb: String,
        with_data => data: SubmitData,
        with_associated_inputs => associated_inputs: AssociatedInputs,
    }

    flag_setters! {
        conditionally_enabled / with_conditionally_enabled => conditionally_enabled,
    }
}

/// Resets inputs to their initial values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetInputsAction {
    /// Shared action fields.
    #[serde(flatten)]
    pub base: ActionBase,

    /// Inputs to reset. Empty resets all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_input_ids: Vec<String>,
}

impl ResetInputsAction {
    /// Creates the action.
    pub fn new() -> Self {
        Self::default()
    }

    vec_adders! {
        add_target_input_ids => target_input_ids: String,
    }
}

/// Conversions shared by the Teams submit wrappers.
macro_rules! teams_submit {
    ( $( $ty:ident ),* $(,)? ) => {
        $(
            impl $ty {
                /// The underlying submit action.
                pub fn as_submit(&self) -> &SubmitAction {
                    &self.0
                }

                /// Unwraps into the submit action.
                pub fn into_submit(self) -> SubmitAction {
                    self.0
                }
            }

            impl ActionBuilder for $ty {
                fn action_base_mut(&mut self) -> &mut ActionBase {
                    &mut self.0.base
                }
            }

            impl From<$ty> for SubmitAction {
                fn from(action: $ty) -> Self {
                    action.0
                }
            }

            impl From<$ty> for Action {
                fn from(action: $ty) -> Self {
                    Action::SubmitAction(action.0)
                }
            }
        )*
    };
}

teams_submit!(ImBackAction, MessageBackAction, SignInAction, InvokeAction, TaskFetchAction);

/// Posts `value` into the conversation as if the user typed it.
#[derive(Debug, Clone, PartialEq)]
pub struct ImBackAction(SubmitAction);

impl ImBackAction {
    /// Creates the action.
    pub fn new(value: impl Into<String>) -> Self {
        let mut action = SubmitAction::with_teams(TeamsSubmitKind::ImBack);
        if let Some(teams) = action.teams_mut() {
            teams.value = Some(Value::String(value.into()));
        }
        Self(action)
    }
}

/// Sends a message to the bot, optionally echoing text in the chat.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageBackAction(SubmitAction);

impl MessageBackAction {
    /// Creates the action with the text sent to the bot.
    pub fn new(text: impl Into<String>) -> Self {
        let mut action = SubmitAction::with_teams(TeamsSubmitKind::MessageBack);
        if let Some(teams) = action.teams_mut() {
            teams.text = Some(text.into());
        }
        Self(action)
    }

    /// Sets the text shown in the chat.
    pub fn with_display_text(mut self, display_text: impl Into<String>) -> Self {
        if let Some(teams) = self.0.teams_mut() {
            teams.display_text = Some(display_text.into());
        }
        self
    }

    /// Sets the value sent to the bot.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        if let Some(teams) = self.0.teams_mut() {
            teams.value = Some(value.into());
        }
        self
    }
}

/// Starts an OAuth sign-in at `url`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignInAction(SubmitAction);

impl SignInAction {
    /// Creates the action.
    pub fn new(url: impl Into<String>) -> Self {
        let mut action = SubmitAction::with_teams(TeamsSubmitKind::SignIn);
        if let Some(teams) = action.teams_mut() {
            teams.value = Some(Value::String(url.into()));
        }
        Self(action)
    }
}

/// Sends an invoke activity with `value` to the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeAction(SubmitAction);

impl InvokeAction {
    /// Creates the action.
    pub fn new(value: impl Into<Value>) -> Self {
        let mut action = SubmitAction::with_teams(TeamsSubmitKind::Invoke);
        if let Some(teams) = action.teams_mut() {
            teams.value = Some(value.into());
        }
        Self(action)
    }
}

/// Opens a task module. Extra data keys are sent with the fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFetchAction(SubmitAction);

impl Default for TaskFetchAction {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFetchAction {
    /// Creates the action.
    pub fn new() -> Self {
        Self(SubmitAction::with_teams(TeamsSubmitKind::TaskFetch))
    }

    /// Merges keys into the submit data next to `msteams`.
    pub fn with_value(mut self, value: Map<String, Value>) -> Self {
        let data = self.0.data.take().unwrap_or_default();
        self.0.data = Some(data.with_fields(value));
        self
    }
}
