pub mod destination_list;
pub mod input;
pub mod search_panel;
pub mod slideshow;
pub mod textures;
pub mod top_bar;

use eframe::egui::{Image, Layout, RichText, Ui, Vec2, load::SizedTexture};
use wayfarer_gallery::RenderableUnit;

use self::textures::{TextureCache, TextureSlot};

/// Shows the unit's image scaled into `size`, or its fallback text in a box of that size.
fn show_unit_image(
    ui: &mut Ui,
    textures: &mut TextureCache,
    slot: TextureSlot,
    unit: &RenderableUnit,
    size: Vec2,
) {
    if let Some(image) = unit.image() {
        let texture = textures.get_or_load(ui.ctx(), slot, image);
        ui.add(
            Image::from_texture(SizedTexture::from_handle(&texture))
                .fit_to_exact_size(size)
                .maintain_aspect_ratio(true),
        );
        return;
    }

    let fallback = unit.fallback().unwrap_or_default();
    let layout = Layout::centered_and_justified(ui.layout().main_dir());
    ui.allocate_ui_with_layout(size, layout, |ui| {
        ui.set_min_size(size);
        ui.label(
            RichText::new(fallback)
                .italics()
                .color(ui.visuals().warn_fg_color),
        );
    });
}
