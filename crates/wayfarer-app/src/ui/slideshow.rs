use eframe::egui::{Align, Color32, Frame, Layout, Margin, RichText, ScrollArea, Ui, Vec2};
use egui_extras::{Size, StripBuilder};
use wayfarer_gallery::{ImageSize, SlideView};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::textures::{TextureCache, TextureSlot},
};

const DESCRIPTION_FILL: Color32 = Color32::from_rgb(173, 216, 230);
const CONTROLS_HEIGHT: f32 = 32.0;
const DESCRIPTION_HEIGHT: f32 = 110.0;

#[derive(Debug, Clone)]
pub struct SlideshowViewModel<'a> {
    slide: Option<SlideView<'a>>,
    position_label: Option<String>,
}

impl<'a> SlideshowViewModel<'a> {
    pub fn new(slide: Option<SlideView<'a>>, position_label: Option<String>) -> Self {
        Self {
            slide,
            position_label,
        }
    }

    pub fn position_label(&self) -> Option<&str> {
        self.position_label.as_deref()
    }
}

pub fn show(
    ui: &mut Ui,
    vm: &SlideshowViewModel,
    textures: &mut TextureCache,
    action_queue: &mut ActionRequestQueue,
) {
    let Some(slide) = &vm.slide else {
        ui.centered_and_justified(|ui| {
            ui.label("No slides to show.");
        });
        return;
    };

    StripBuilder::new(ui)
        .size(Size::exact(CONTROLS_HEIGHT))
        .size(Size::remainder())
        .size(Size::exact(DESCRIPTION_HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| show_controls(ui, slide, vm.position_label(), action_queue));
            strip.cell(|ui| {
                let ImageSize { width, height } = ImageSize::SLIDE;
                #[expect(clippy::cast_precision_loss)]
                let full = Vec2::new(width as f32, height as f32);
                let scale = (ui.available_width() / full.x)
                    .min(ui.available_height() / full.y)
                    .min(1.0);
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    super::show_unit_image(
                        ui,
                        textures,
                        TextureSlot::Slide(slide.index()),
                        slide.unit(),
                        full * scale,
                    );
                });
            });
            strip.cell(|ui| {
                Frame::new()
                    .fill(DESCRIPTION_FILL)
                    .inner_margin(Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_min_size(ui.available_size());
                        ScrollArea::vertical().show(ui, |ui| {
                            let text = slide.text();
                            ui.label(
                                RichText::new(text.title())
                                    .strong()
                                    .size(18.0)
                                    .color(Color32::BLACK),
                            );
                            ui.label(RichText::new(text.description()).color(Color32::BLACK));
                        });
                    });
            });
        });
}

fn show_controls(
    ui: &mut Ui,
    slide: &SlideView,
    position_label: Option<&str>,
    action_queue: &mut ActionRequestQueue,
) {
    ui.horizontal_centered(|ui| {
        if ui.button("\u{2190} Previous").clicked() {
            action_queue.request(Action::PreviousSlide);
        }
        if ui.button("Next \u{2192}").clicked() {
            action_queue.request(Action::NextSlide);
        }

        ui.separator();
        let mut target = slide.index();
        for index in 0..slide.slide_count() {
            ui.selectable_value(&mut target, index, (index + 1).to_string());
        }
        if target != slide.index() {
            action_queue.request(Action::GoToSlide(target));
        }
        if let Some(label) = position_label {
            ui.separator();
            ui.label(label);
        }
    });
}
