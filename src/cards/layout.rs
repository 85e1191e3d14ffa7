//! Container layouts. A container may list several; the host picks the
//! first whose `target_width` matches.

use serde::{Deserialize, Serialize};

use super::macros::{card_object, option_setters, value_setters, vec_adders};
use super::types::{ColumnWidth, HorizontalAlignment, Spacing, VerticalAlignment};

/// A container layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[allow(missing_docs)]
pub enum Layout {
    #[serde(rename = "Layout.Stack")]
    StackLayout(StackLayout),
    #[serde(rename = "Layout.Flow")]
    FlowLayout(FlowLayout),
    #[serde(rename = "Layout.AreaGrid")]
    AreaGridLayout(AreaGridLayout),
}

card_object!(Layout {
    StackLayout => "Layout.Stack",
    FlowLayout => "Layout.Flow",
    AreaGridLayout => "Layout.AreaGrid",
});

/// Items stacked vertically. The default when no layout is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackLayout {
    /// Card widths at which this layout applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_width: Option<String>,
}

impl StackLayout {
    /// Creates a stack layout.
    pub fn new() -> Self {
        Self::default()
    }

    option_setters! {
        with_target_width => target_width: String,
    }
}

/// How flow items fill their slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum ItemFit {
    Fit,
    Fill,
}

/// Items laid out in rows, wrapping as needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowLayout {
    /// Card widths at which this layout applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_width: Option<String>,

    /// Horizontal alignment of the items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_items_alignment: Option<HorizontalAlignment>,

    /// Vertical alignment of the items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_items_alignment: Option<VerticalAlignment>,

    /// How items fill their slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_fit: Option<ItemFit>,

    /// Minimum item width, e.g. `100px`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_item_width: Option<String>,

    /// Maximum item width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_item_width: Option<String>,

    /// Fixed item width. Overrides min and max.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_width: Option<String>,

    /// Gap between columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_spacing: Option<Spacing>,

    /// Gap between rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_spacing: Option<Spacing>,
}

impl FlowLayout {
    /// Creates a flow layout.
    pub fn new() -> Self {
        Self::default()
    }

    option_setters! {
        with_target_width => target_width: String,
        with_horizontal_items_alignment => horizontal_items_alignment: HorizontalAlignment,
        with_vertical_items_alignment => vertical_items_alignment: VerticalAlignment,
        with_item_fit => item_fit: ItemFit,
        with_min_item_width => min_item_width: String,
        with_max_item_width => max_item_width: String,
        with_item_width => item_width: String,
        with_column_spacing => column_spacing: Spacing,
        with_row_spacing => row_spacing: Spacing,
    }
}

/// A named cell range of an [`AreaGridLayout`]. Rows and columns are
/// 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridArea {
    /// Name referenced by an element's `grid.area`.
    pub name: String,

    /// Start column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,

    /// Columns spanned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_span: Option<u32>,

    /// Start row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u32>,

    /// Rows spanned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<u32>,
}

impl GridArea {
    /// Creates an area.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    value_setters! {
        with_column => column: u32,
        with_column_span => column_span: u32,
        with_row => row: u32,
        with_row_span => row_span: u32,
    }
}

/// Items placed into named grid areas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaGridLayout {
    /// Card widths at which this layout applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_width: Option<String>,

    /// Column widths. Numbers are percentages.
    #[serde(default)]
    pub columns: Vec<ColumnWidth>,

    /// Named areas.
    #[serde(default)]
    pub areas: Vec<GridArea>,

    /// Gap between columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_spacing: Option<Spacing>,

    /// Gap between rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_spacing: Option<Spacing>,
}

impl AreaGridLayout {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    vec_adders! {
        add_columns => columns: ColumnWidth,
        add_areas => areas: GridArea,
    }

    option_setters! {
        with_target_width => target_width: String,
        with_column_spacing => column_spacing: Spacing,
        with_row_spacing => row_spacing: Spacing,
    }
}
