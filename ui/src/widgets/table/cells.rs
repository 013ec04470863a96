//! Cell rendering functions for the field table.
//!
//! Every [`CellView`] variant has one renderer here. Interactive cells
//! return the [`Refetch`] their handler asked for.

use egui::{
    Align, CornerRadius, Frame, Hyperlink, Layout, Margin, OpenUrl, RichText, Sense, Ui,
    WidgetInfo, WidgetType, vec2,
};
use gigboard_business::cell::FINAL_STATUS_LABEL;
use gigboard_business::format::PLACEHOLDER;
use gigboard_business::format::array::Summary;
use gigboard_business::format::status::StatusPill;
use gigboard_business::{
    ActionCell, ActionOption, ActionOutcome, CellAlign, CellStyle, CellView, Refetch, ToggleCell,
};

use super::state::{FieldTableState, ToggleSlot};
use crate::utils::colors::{PILL_BG_COLOR, PILL_TEXT_COLOR, SKELETON_COLOR, to_color32};

const SKELETON_HEIGHT: f32 = 12.0;
const SKELETON_MAX_WIDTH: f32 = 120.0;
/// Accessible label of a skeleton block.
pub const SKELETON_LABEL: &str = "Placeholder";

/// Renders `cell` with the column's alignment.
pub fn render_cell_view(
    ui: &mut Ui,
    cell: &CellView,
    style: CellStyle,
    column: usize,
    state: &mut FieldTableState,
) -> Refetch {
    ui.with_layout(cell_layout(style.align), |ui| {
        render_content(ui, cell, style, column, state)
    })
    .inner
}

#[inline]
fn cell_layout(align: CellAlign) -> Layout {
    match align {
        CellAlign::Left => Layout::left_to_right(Align::Center),
        CellAlign::Center => Layout::left_to_right(Align::Center).with_main_align(Align::Center),
        CellAlign::Right => Layout::right_to_left(Align::Center),
    }
}

fn render_content(
    ui: &mut Ui,
    cell: &CellView,
    style: CellStyle,
    column: usize,
    state: &mut FieldTableState,
) -> Refetch {
    match cell {
        CellView::Placeholder => {
            ui.label(RichText::new(PLACEHOLDER).weak());
        }
        CellView::Text(text) => {
            ui.label(styled(text, style));
        }
        CellView::Tooltip { visible, full } => {
            ui.label(styled(visible, style)).on_hover_text(full);
        }
        CellView::Link { label, href } => {
            ui.add(Hyperlink::from_label_and_url(styled(label, style), href).open_in_new_tab(true));
        }
        CellView::Pill(pill) => render_pill(ui, pill),
        CellView::Summary(summary) => render_summary(ui, summary, style),
        CellView::Toggle(toggle) => return render_toggle(ui, toggle, column, state),
        CellView::Actions(actions) => return render_actions(ui, actions),
        CellView::FinalStatus => {
            ui.label(RichText::new(FINAL_STATUS_LABEL).weak());
        }
        CellView::Stack(parts) => {
            return ui
                .horizontal(|ui| {
                    parts.iter().fold(Refetch::Keep, |refetch, part| {
                        refetch.merge(render_content(ui, part, style, column, state))
                    })
                })
                .inner;
        }
    }
    Refetch::Keep
}

#[inline]
fn styled(text: &str, style: CellStyle) -> RichText {
    let mut text = RichText::new(text);
    if style.monospace {
        text = text.monospace();
    }
    if style.strong {
        text = text.strong();
    }
    text
}

/// Renders a status pill with the format's colors.
#[inline]
pub fn render_pill(ui: &mut Ui, pill: &StatusPill) {
    let fill = pill.background.map_or(PILL_BG_COLOR, to_color32);
    let text = pill.text.map_or(PILL_TEXT_COLOR, to_color32);

    Frame::NONE
        .fill(fill)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(&pill.label).color(text).small());
        });
}

#[inline]
fn render_summary(ui: &mut Ui, summary: &Summary, style: CellStyle) {
    ui.label(styled(&summary.visible(), style))
        .on_hover_text(&summary.full);
}

/// Renders the switch. Flips are stored in `state` until the data catches up.
fn render_toggle(
    ui: &mut Ui,
    toggle: &ToggleCell,
    column: usize,
    state: &mut FieldTableState,
) -> Refetch {
    let slot = ToggleSlot::new(column, toggle.row_id.clone());
    let mut on = state.toggle_value(&slot, toggle.on);

    if ui.checkbox(&mut on, "").changed() {
        log::debug!("Toggle in column {column} on row {} flipped to {on}", toggle.row_id);
        state.set_toggle(slot, toggle.on, on);
        return toggle.flip(on);
    }
    Refetch::Keep
}

/// Renders one arrow button for a single option, or a menu for several.
fn render_actions(ui: &mut Ui, actions: &ActionCell) -> Refetch {
    let mut outcome = None;

    if actions.is_single() {
        if let Some(option) = actions.options.first()
            && ui
                .button(actions.trigger_icon())
                .on_hover_text(&option.label)
                .clicked()
        {
            outcome = Some(actions.press(option));
        }
    } else {
        ui.menu_button(actions.trigger_icon(), |ui| {
            for option in &actions.options {
                if ui.button(option_label(option)).clicked() {
                    outcome = Some(actions.press(option));
                    ui.close();
                }
            }
        });
    }

    match outcome {
        Some(ActionOutcome::Done(refetch)) => refetch,
        Some(ActionOutcome::Navigate(href)) => {
            log::info!("Opening {href} for row {}", actions.row_id);
            ui.ctx().open_url(OpenUrl::same_tab(href));
            Refetch::Keep
        }
        None => Refetch::Keep,
    }
}

#[inline]
fn option_label(option: &ActionOption) -> String {
    match &option.icon {
        Some(icon) => format!("{icon} {}", option.label),
        None => option.label.clone(),
    }
}

/// Renders a gray block standing in for a cell that has not loaded.
#[inline]
pub fn render_skeleton_cell(ui: &mut Ui) {
    let width = ui.available_width().clamp(24.0, SKELETON_MAX_WIDTH);
    let (rect, response) = ui.allocate_exact_size(vec2(width, SKELETON_HEIGHT), Sense::hover());
    ui.painter().rect_filled(rect, 4.0, SKELETON_COLOR);
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Label, ui.is_enabled(), SKELETON_LABEL));
}
