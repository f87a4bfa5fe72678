//! GPU textures for gallery items

use egui::{ColorImage, TextureHandle, TextureOptions};
use gallery_core::LoadedImage;

/// One optional texture per gallery item, in gallery order
#[derive(Default)]
pub struct TextureSet {
    textures: Vec<Option<TextureHandle>>,
}

impl TextureSet {
    /// Upload decoded images; missing entries stay `None`
    pub fn upload(ctx: &egui::Context, images: Vec<Option<LoadedImage>>) -> Self {
        let textures = images
            .into_iter()
            .enumerate()
            .map(|(index, image)| {
                image.map(|img| {
                    let color_image = ColorImage::from_rgba_unmultiplied(
                        [img.width as usize, img.height as usize],
                        &img.data,
                    );
                    ctx.load_texture(format!("gallery-{}", index), color_image, TextureOptions::LINEAR)
                })
            })
            .collect::<Vec<_>>();

        let loaded = textures.iter().filter(|t| t.is_some()).count();
        tracing::info!("Uploaded {} of {} gallery textures", loaded, textures.len());

        Self { textures }
    }

    pub fn get(&self, index: usize) -> Option<&TextureHandle> {
        self.textures.get(index).and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_keeps_positions() {
        let ctx = egui::Context::default();
        let images = vec![
            None,
            Some(LoadedImage {
                width: 2,
                height: 1,
                data: vec![255; 8],
            }),
        ];

        let set = TextureSet::upload(&ctx, images);
        assert!(set.get(0).is_none());
        assert_eq!(set.get(1).map(|t| t.size()), Some([2, 1]));
        assert!(set.get(2).is_none());
    }
}
