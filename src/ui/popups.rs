use eframe::egui::{Align2, Area, Color32, Context, Id, Order, Pos2, RichText, Vec2, Window};

use crate::app::PromoApp;
use crate::config::PAGE;
use crate::ui::{UI_CONFIG, UiStyleExt};

impl PromoApp {
    pub(crate) fn render_popup(&mut self, ctx: &Context) {
        // 1. Check if open
        let Some(kind) = self.popup else { return };
        let copy = PAGE.popup(kind);
        let palette = self.theme.palette();

        // 2. Dimmed backdrop under the card
        let screen = ctx.screen_rect();
        Area::new(Id::new("popup_backdrop"))
            .order(Order::Middle)
            .fixed_pos(Pos2::ZERO)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, 0.0, Color32::from_black_alpha(160));
            });

        // 3. The card
        let mut open = true;
        let window = Window::new(copy.title)
            .collapsible(false)
            .resizable(false)
            .order(Order::Tooltip) // Above the backdrop layer
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .open(&mut open)
            .default_width(UI_CONFIG.popup_width)
            .show(ctx, |ui| {
                for paragraph in copy.body {
                    ui.label(RichText::new(*paragraph).color(palette.label));
                    ui.add_space(6.0);
                }

                if let Some(action) = copy.action {
                    ui.add_space(6.0);
                    if ui.action_button(action, palette).clicked() {
                        self.popup = None;
                    }
                }
            });

        if !open {
            self.popup = None;
        }

        // 4. A click on the backdrop (outside the card) closes too
        if let Some(window) = window {
            if ctx.input(|i| i.pointer.primary_clicked()) {
                let pos = ctx.input(|i| i.pointer.interact_pos().unwrap_or_default());
                if !window.response.rect.contains(pos) {
                    self.popup = None;
                }
            }
        }
    }
}
