//! Typed Adaptive Cards model with fluent builders.
//!
//! Elements, actions and layouts are closed enums tagged by `type`
//! ([`Element`], [`Action`], [`Layout`]). Each concrete type is a plain
//! struct with public fields and chainable setters:
//!
//! - `with_x(value)` overwrites an optional field;
//! - `x()` / `with_x(bool)` set a flag;
//! - `add_x(iter)` appends to an array.
//!
//! Fields shared by every element, action or input live in
//! [`ElementBase`], [`ActionBase`] and [`InputBase`] and are set through the
//! [`ElementBuilder`], [`ActionBuilder`] and [`InputBuilder`] traits.
//!
//! ```ignore
//! use graph_cards::cards::*;
//!
//! let card = AdaptiveCard::new()
//!     .add_body([
//!         TextBlock::new("Leave request").with_size(TextSize::Large).wrap().into(),
//!         FactSet::new()
//!             .add_facts([Fact::new("From", "Mon"), Fact::new("To", "Fri")])
//!             .into(),
//!         TextInput::new("comment").with_label("Comment").multiline().into(),
//!     ])
//!     .add_actions([
//!         SubmitAction::new().with_title("Approve").with_style(ActionStyle::Positive).into(),
//!         ImBackAction::new("reject").with_title("Reject").into(),
//!     ]);
//! ```
//!
//! No validation happens here; the host renderer decides what is valid.

mod action;
mod card;
mod container;
mod element;
mod input;
mod layout;
mod macros;
mod media;
mod types;

pub use action::{
    Action, ActionBase, ActionBuilder, ExecuteAction, ImBackAction, InvokeAction, MessageBackAction, OpenUrlAction,
    ResetInputsAction, ShowCardAction, SignInAction, SubmitAction, SubmitData, TargetElement, TaskFetchAction,
    TeamsSubmitData, TeamsSubmitKind, ToggleVisibilityAction,
};
pub use card::{
    AdaptiveCard, BackgroundImage, CardAttachment, CardMetadata, Refresh, TeamsCardProperties, DEFAULT_CARD_VERSION,
};
pub use container::{ActionSet, Column, ColumnSet, Container, Table, TableCell, TableColumn, TableRow};
pub use element::{
    CodeBlock, Element, ElementBase, ElementBuilder, Fact, FactSet, Inline, ProgressBar, ProgressRing, RatingColor,
    RatingDisplay, RatingStyle, RichTextBlock, TextBlock, TextRun,
};
pub use input::{
    Choice, ChoiceSetInput, ChoicesData, DateInput, InputBase, InputBuilder, NumberInput, RatingInput, TextInput,
    TimeInput, ToggleInput,
};
pub use layout::{AreaGridLayout, FlowLayout, GridArea, ItemFit, Layout, StackLayout};
pub use media::{
    Badge, BadgeAppearance, BadgeShape, CaptionSource, Icon, IconStyle, Image, ImageSet, Media, MediaSource,
};
pub use types::{
    ActionMode, ActionStyle, AssociatedInputs, BlockElementHeight, CardObject, ChoiceInputStyle, ColumnWidth,
    ContainerStyle, Emphasis, Fallback, FillMode, FontType, HorizontalAlignment, ImageSize, ImageStyle, Position,
    Size, Spacing, TextBlockStyle, TextColor, TextInputStyle, TextSize, TextWeight, VerticalAlignment,
};
