use std::collections::HashMap;

use eframe::egui;

use crate::display::{Bitmap, DisplayConfig, render_with};
use crate::runtime::{ImageStore, Slot};

struct PanelTexture {
    revision: u64,
    target: [u32; 2],
    handle: egui::TextureHandle,
}

/// Uploaded panel bitmaps, re-rendered when the slot or the panel size changes.
#[derive(Default)]
pub(super) struct PanelTextures {
    textures: HashMap<Slot, PanelTexture>,
}

impl PanelTextures {
    pub(super) fn show(
        &mut self,
        ui: &mut egui::Ui,
        store: &ImageStore,
        config: &DisplayConfig,
        slot: Slot,
    ) {
        ui.vertical_centered(|ui| {
            ui.strong(slot.label());
        });
        ui.separator();

        let Some(image) = store.get(slot) else {
            self.textures.remove(&slot);
            ui.centered_and_justified(|ui| {
                ui.weak("No image");
            });
            return;
        };

        let pixels_per_point = ui.ctx().pixels_per_point();
        let target = panel_target(ui.available_size(), pixels_per_point);
        let revision = store.revision(slot);
        let stale = self
            .textures
            .get(&slot)
            .is_none_or(|texture| texture.revision != revision || texture.target != target);

        if stale {
            let color = match render_with(config, image, target[0], target[1]) {
                Ok(bitmap) => to_color_image(&bitmap),
                Err(err) => {
                    log::error!("failed to render {} panel: {err}", slot.label());
                    self.textures.remove(&slot);
                    return;
                }
            };
            match self.textures.get_mut(&slot) {
                Some(texture) => {
                    texture.handle.set(color, egui::TextureOptions::LINEAR);
                    texture.revision = revision;
                    texture.target = target;
                }
                None => {
                    let handle = ui.ctx().load_texture(
                        format!("panel-{}", slot.label()),
                        color,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(
                        slot,
                        PanelTexture {
                            revision,
                            target,
                            handle,
                        },
                    );
                }
            }
        }

        if let Some(texture) = self.textures.get(&slot) {
            ui.vertical_centered(|ui| {
                ui.image((
                    texture.handle.id(),
                    texture.handle.size_vec2() / pixels_per_point,
                ));
            });
        }
    }
}

/// Panel area in physical pixels; zero while the layout has not settled.
pub(super) fn panel_target(available: egui::Vec2, pixels_per_point: f32) -> [u32; 2] {
    let physical = available * pixels_per_point;
    [
        physical.x.max(0.0).floor() as u32,
        physical.y.max(0.0).floor() as u32,
    ]
}

pub(super) fn to_color_image(bitmap: &Bitmap) -> egui::ColorImage {
    egui::ColorImage::from_rgb(bitmap.size(), &bitmap.rgb)
}
