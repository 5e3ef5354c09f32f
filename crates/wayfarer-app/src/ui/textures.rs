use std::{collections::HashMap, fmt};

use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};
use wayfarer_gallery::ImageHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    ListRow(usize),
    Slide(usize),
}

/// GPU textures for the images of the current session.
///
/// Slots are positions in the presented sequences, so the cache is emptied
/// whenever the session generation changes.
#[derive(Default)]
pub struct TextureCache {
    generation: u64,
    textures: HashMap<TextureSlot, TextureHandle>,
}

impl fmt::Debug for TextureCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextureCache")
            .field("generation", &self.generation)
            .field("textures", &self.textures.len())
            .finish()
    }
}

impl TextureCache {
    pub fn sync(&mut self, generation: u64) {
        if self.generation != generation {
            log::debug!(
                "dropping {} textures from generation {}",
                self.textures.len(),
                self.generation
            );
            self.textures.clear();
            self.generation = generation;
        }
    }

    pub fn get_or_load(
        &mut self,
        ctx: &Context,
        slot: TextureSlot,
        image: &ImageHandle,
    ) -> TextureHandle {
        self.textures
            .entry(slot)
            .or_insert_with(|| {
                let size = image.size();
                let color_image = ColorImage::from_rgba_unmultiplied(
                    [size.width as usize, size.height as usize],
                    image.rgba(),
                );
                ctx.load_texture(format!("{slot:?}"), color_image, TextureOptions::LINEAR)
            })
            .clone()
    }
}
