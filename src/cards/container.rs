//! Elements that hold other elements: containers, columns, action sets and
//! tables.

use serde::{Deserialize, Serialize};

use super::element::impl_element_builder;
use super::macros::{card_object, discriminator, flag_setters, option_setters, vec_adders};
use super::types::{ColumnWidth, ContainerStyle, HorizontalAlignment, VerticalAlignment};
use super::{Action, BackgroundImage, Element, ElementBase, Layout};

impl_element_builder!(Container, ColumnSet, Column, ActionSet, Table);

card_object!(Column => "Column", TableRow => "TableRow", TableCell => "TableCell");

/// A vertical group of elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Child elements.
    #[serde(default)]
    pub items: Vec<Element>,

    /// Action invoked on click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,

    /// Style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,

    /// Vertical alignment of the items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,

    /// Bleed through the parent's padding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,

    /// Background image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,

    /// Minimum height, e.g. `80px`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,

    /// Right-to-left content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtl: Option<bool>,

    /// Draw a border.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_border: Option<bool>,

    /// Round the corners.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded_corners: Option<bool>,

    /// Layouts the host picks from by width.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layouts: Vec<Layout>,
}

impl Container {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    vec_adders! {
        add_items => items: Element,
        add_layouts => layouts: Layout,
    }

    option_setters! {
        with_select_action => select_action: Box<Action>,
        with_style => style: ContainerStyle,
        with_vertical_content_alignment => vertical_content_alignment: VerticalAlignment,
        with_background_image => background_image: BackgroundImage,
        with_min_height => min_height: String,
    }

    flag_setters! {
        bleed / with_bleed => bleed,
        rtl / with_rtl => rtl,
        show_border / with_show_border => show_border,
        rounded_corners / with_rounded_corners => rounded_corners,
    }
}

discriminator!(ColumnType = "Column");

/// A column of a [`ColumnSet`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(rename = "type", default)]
    kind: ColumnType,

    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Child elements.
    #[serde(default)]
    pub items: Vec<Element>,

    /// Width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<ColumnWidth>,

    /// Action invoked on click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,

    /// Style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,

    /// Vertical alignment of the items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,

    /// Bleed through the parent's padding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,

    /// Background image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,

    /// Minimum height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,

    /// Right-to-left content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtl: Option<bool>,

    /// Draw a border.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_border: Option<bool>,

    /// Round the corners.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded_corners: Option<bool>,

    /// Layouts the host picks from by width.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layouts: Vec<Layout>,
}

impl Column {
    /// Creates an empty column.
    pub fn new() -> Self {
        Self::default()
    }

    vec_adders! {
        add_items => items: Element,
        add_layouts => layouts: Layout,
    }

    option_setters! {
        with_width => width: ColumnWidth,
        with_select_action => select_action: Box<Action>,
        with_style => style: ContainerStyle,
        with_vertical_content_alignment => vertical_content_alignment: VerticalAlignment,
        with_background_image => background_image: BackgroundImage,
        with_min_height => min_height: String,
    }

    flag_setters! {
        bleed / with_bleed => bleed,
        rtl / with_rtl => rtl,
        show_border / with_show_border => show_border,
        rounded_corners / with_rounded_corners => rounded_corners,
    }
}

/// A horizontal row of [`Column`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSet {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// The columns.
    #[serde(default)]
    pub columns: Vec<Column>,

    /// Action invoked on click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,

    /// Style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,

    /// Bleed through the parent's padding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,

    /// Minimum height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,

    /// Horizontal alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,

    /// Draw a border.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_border: Option<bool>,

    /// Round the corners.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded_corners: Option<bool>,
}

impl ColumnSet {
    /// Creates an empty column set.
    pub fn new() -> Self {
        Self::default()
    }

    vec_adders! {
        add_columns => columns: Column,
    }

    option_setters! {
        with_select_action => select_action: Box<Action>,
        with_style => style: ContainerStyle,
        with_min_height => min_height: String,
        with_horizontal_alignment => horizontal_alignment: HorizontalAlignment,
    }

    flag_setters! {
        bleed / with_bleed => bleed,
        show_border / with_show_border => show_border,
        rounded_corners / with_rounded_corners => rounded_corners,
    }
}

/// A row of buttons inside the card body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSet {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// The actions.
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl ActionSet {
    /// Creates an empty action set.
    pub fn new() -> Self {
        Self::default()
    }

    vec_adders! {
        add_actions => actions: Action,
    }
}

/// Column definition of a [`Table`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    /// Width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<ColumnWidth>,

    /// Horizontal alignment of the column's cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_cell_content_alignment: Option<HorizontalAlignment>,

    /// Vertical alignment of the column's cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_cell_content_alignment: Option<VerticalAlignment>,
}

impl TableColumn {
    /// Creates a column definition with the given width.
    pub fn new(width: ColumnWidth) -> Self {
        Self {
            width: Some(width),
            ..Default::default()
        }
    }

    option_setters! {
        with_horizontal_cell_content_alignment => horizontal_cell_content_alignment: HorizontalAlignment,
        with_vertical_cell_content_alignment => vertical_cell_content_alignment: VerticalAlignment,
    }
}

discriminator!(TableCellType = "TableCell");

/// A cell of a [`TableRow`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    #[serde(rename = "type", default)]
    kind: TableCellType,

    /// Child elements.
    #[serde(default)]
    pub items: Vec<Element>,

    /// Action invoked on click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,

    /// Style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,

    /// Vertical alignment of the items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,

    /// Bleed through the table's padding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,

    /// Background image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,

    /// Minimum height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,

    /// Right-to-left content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtl: Option<bool>,
}

impl TableCell {
    /// Creates a cell.
    pub fn new(items: impl IntoIterator<Item = Element>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Default::default()
        }
    }

    vec_adders! {
        add_items => items: Element,
    }

    option_setters! {
        with_select_action => select_action: Box<Action>,
        with_style => style: ContainerStyle,
        with_vertical_content_alignment => vertical_content_alignment: VerticalAlignment,
        with_background_image => background_image: BackgroundImage,
        with_min_height => min_height: String,
    }

    flag_setters! {
        bleed / with_bleed => bleed,
        rtl / with_rtl => rtl,
    }
}

discriminator!(TableRowType = "TableRow");

/// A row of a [`Table`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    #[serde(rename = "type", default)]
    kind: TableRowType,

    /// The cells, one per column.
    #[serde(default)]
    pub cells: Vec<TableCell>,

    /// Style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,

    /// Horizontal alignment of the row's cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_cell_content_alignment: Option<HorizontalAlignment>,

    /// Vertical alignment of the row's cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_cell_content_alignment: Option<VerticalAlignment>,
}

impl TableRow {
    /// Creates a row.
    pub fn new(cells: impl IntoIterator<Item = TableCell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            ..Default::default()
        }
    }

    vec_adders! {
        add_cells => cells: TableCell,
    }

    option_setters! {
        with_style => style: ContainerStyle,
        with_horizontal_cell_content_alignment => horizontal_cell_content_alignment: HorizontalAlignment,
        with_vertical_cell_content_alignment => vertical_cell_content_alignment: VerticalAlignment,
    }
}

/// A grid of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Shared element fields.
    #[serde(flatten)]
    pub base: ElementBase,

    /// Column definitions.
    #[serde(default)]
    pub columns: Vec<TableColumn>,

    /// Rows.
    #[serde(default)]
    pub rows: Vec<TableRow>,

    /// Style the first row as a header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_row_as_header: Option<bool>,

    /// Draw grid lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_grid_lines: Option<bool>,

    /// Style of the grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_style: Option<ContainerStyle>,

    /// Default horizontal alignment of every cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_cell_content_alignment: Option<HorizontalAlignment>,

    /// Default vertical alignment of every cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_cell_content_alignment: Option<VerticalAlignment>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    vec_adders! {
        add_columns => columns: TableColumn,
        add_rows => rows: TableRow,
    }

    option_setters! {
        with_grid_style => grid_style: ContainerStyle,
        with_horizontal_cell_content_alignment => horizontal_cell_content_alignment: HorizontalAlignment,
        with_vertical_cell_content_alignment => vertical_cell_content_alignment: VerticalAlignment,
    }

    flag_setters! {
        first_row_as_header / with_first_row_as_header => first_row_as_header,
        show_grid_lines / with_show_grid_lines => show_grid_lines,
    }
}
