use wayfarer_gallery::MissingImagePolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub missing_images: MissingImagePolicy,
    pub show_slide_position: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            missing_images: MissingImagePolicy::Omit,
            show_slide_position: true,
        }
    }
}
