use eframe::egui::{Color32, Frame, Margin, RichText, ScrollArea, Sense, Ui, Vec2};
use egui_extras::{Size, StripBuilder};
use wayfarer_gallery::{ImageSize, RenderableUnit};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::textures::{TextureCache, TextureSlot},
};

const BACKGROUND: Color32 = Color32::from_rgb(240, 248, 255);
const SELECTED: Color32 = Color32::from_rgb(173, 216, 230);
const FOOTER_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct DestinationRowViewModel<'a> {
    unit: &'a RenderableUnit,
    selected: bool,
}

impl<'a> DestinationRowViewModel<'a> {
    pub fn new(unit: &'a RenderableUnit, selected: bool) -> Self {
        Self { unit, selected }
    }
}

#[derive(Debug, Clone)]
pub struct DestinationListViewModel<'a> {
    rows: Vec<DestinationRowViewModel<'a>>,
    version: String,
}

impl<'a> DestinationListViewModel<'a> {
    pub fn new(rows: Vec<DestinationRowViewModel<'a>>, version: String) -> Self {
        Self { rows, version }
    }
}

pub fn show(
    ui: &mut Ui,
    vm: &DestinationListViewModel,
    textures: &mut TextureCache,
    action_queue: &mut ActionRequestQueue,
) {
    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(FOOTER_HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if vm.rows.is_empty() {
                            ui.label("No destinations to show.");
                        }
                        for (index, row) in vm.rows.iter().enumerate() {
                            show_row(ui, index, row, textures, action_queue);
                        }
                    });
            });
            strip.cell(|ui| {
                ui.weak(format!("Wayfarer {}", vm.version));
            });
        });
}

fn show_row(
    ui: &mut Ui,
    index: usize,
    row: &DestinationRowViewModel,
    textures: &mut TextureCache,
    action_queue: &mut ActionRequestQueue,
) {
    let ImageSize { width, height } = ImageSize::LIST_ROW;
    #[expect(clippy::cast_precision_loss)]
    let image_size = Vec2::new(width as f32, height as f32);

    let fill = if row.selected { SELECTED } else { BACKGROUND };
    let response = Frame::new()
        .fill(fill)
        .inner_margin(Margin::same(6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                super::show_unit_image(
                    ui,
                    textures,
                    TextureSlot::ListRow(index),
                    row.unit,
                    image_size,
                );
                ui.vertical(|ui| {
                    let text = row.unit.text();
                    ui.label(
                        RichText::new(text.title())
                            .strong()
                            .size(18.0)
                            .color(Color32::BLACK),
                    );
                    ui.label(RichText::new(text.description()).color(Color32::DARK_GRAY));
                });
            });
        })
        .response
        .interact(Sense::click())
        .on_hover_text(row.unit.text().to_string());

    if response.clicked() && !row.selected {
        action_queue.request(Action::SelectRow(index));
    }
}
