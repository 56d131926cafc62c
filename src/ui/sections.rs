use eframe::egui::{
    Align, CentralPanel, Context, CornerRadius, FontId, Frame, Layout, Margin, RichText,
    ScrollArea, Stroke, TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::app::PromoApp;
use crate::config::{GESTURE, PAGE, SectionCopy, TICKER, ThemeId, ThemePalette};
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

impl PromoApp {
    pub(crate) fn render_header_panel(&mut self, ctx: &Context) {
        let palette = self.theme.palette();

        TopBottomPanel::top("header")
            .frame(UI_CONFIG.header_frame(palette))
            .min_height(UI_CONFIG.header_height)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    // Wordmark. The glyph swaps with the theme, like the old
                    // logo image did.
                    ui.label(
                        RichText::new(format!("{} {}", palette.logo_glyph, PAGE.product_name))
                            .font(FontId::proportional(20.0))
                            .strong()
                            .color(palette.main),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        // Right-to-left: add the rightmost control first.
                        let themes: Vec<ThemeId> = ThemeId::iter().collect();
                        for theme in themes.into_iter().rev() {
                            let selected = self.theme == theme;
                            let response = ui.interactive_label(
                                theme.palette().name,
                                selected,
                                palette.label,
                                FontId::proportional(12.0),
                            );
                            if response.clicked() {
                                self.set_theme(theme);
                            }
                        }
                        ui.label_subdued(UI_TEXT.theme_picker_label);
                    });
                });
            });
    }

    pub(crate) fn render_ticker_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("ticker_strip")
            .frame(UI_CONFIG.ticker_frame())
            .min_height(TICKER.height)
            .resizable(false)
            .show(ctx, |ui| {
                self.ticker.render(ui);
            });
    }

    pub(crate) fn render_page(&mut self, ctx: &Context) {
        let palette = self.theme.palette();

        CentralPanel::default()
            .frame(UI_CONFIG.page_frame(palette))
            .show(ctx, |ui| {
                let output = ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(UI_CONFIG.content_max_width);

                            self.render_hero(ui, palette);
                            for section in PAGE.sections {
                                self.render_section(ui, section, palette);
                            }
                            self.render_final_block(ui, palette);
                            if self.reveal.is_revealed() {
                                self.render_secret_section(ui, palette);
                            }
                            ui.add_space(UI_CONFIG.section_gap);
                        });
                    });

                // Feed the reveal gesture: only wheel events count, and only
                // while the page sits at the final block.
                let at_final_block = output.state.offset.y + output.inner_rect.height()
                    >= output.content_size.y - GESTURE.bottom_slack;
                let wheel_down = ctx.input(|i| -i.raw_scroll_delta.y);
                if wheel_down != 0.0 && self.reveal.on_wheel(wheel_down, at_final_block) {
                    self.scroll_to_secret = true;
                    ctx.request_repaint();
                }
            });
    }

    fn render_hero(&mut self, ui: &mut Ui, palette: &ThemePalette) {
        ui.add_space(UI_CONFIG.section_gap);
        ui.label(
            RichText::new(PAGE.hero_heading)
                .font(FontId::proportional(34.0))
                .strong()
                .color(palette.heading),
        );
        ui.add_space(12.0);
        ui.label(
            RichText::new(PAGE.hero_sub)
                .font(FontId::proportional(16.0))
                .color(palette.label),
        );
    }

    fn render_section(&mut self, ui: &mut Ui, section: &SectionCopy, palette: &ThemePalette) {
        ui.add_space(UI_CONFIG.section_gap);
        ui.label(
            RichText::new(section.heading)
                .font(FontId::proportional(22.0))
                .strong()
                .color(palette.heading),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(section.body).color(palette.label));

        if let Some((label, kind)) = section.action {
            ui.add_space(10.0);
            if ui.action_button(label, palette).clicked() {
                self.popup = Some(kind);
            }
        }
    }

    fn render_final_block(&mut self, ui: &mut Ui, palette: &ThemePalette) {
        ui.add_space(UI_CONFIG.section_gap);
        ui.label(
            RichText::new(PAGE.final_heading)
                .font(FontId::proportional(22.0))
                .strong()
                .color(palette.heading),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(PAGE.final_body).color(palette.label));
        ui.add_space(12.0);
        ui.label_subdued(UI_TEXT.secret_hint);
    }

    fn render_secret_section(&mut self, ui: &mut Ui, palette: &ThemePalette) {
        ui.add_space(UI_CONFIG.section_gap);

        let frame = Frame {
            fill: palette.panel_fill,
            stroke: Stroke::new(1.0, palette.main),
            inner_margin: Margin::same(24),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        };

        let response = frame
            .show(ui, |ui| {
                ui.label(
                    RichText::new(PAGE.secret_heading)
                        .font(FontId::proportional(26.0))
                        .strong()
                        .color(palette.main),
                );
                ui.add_space(10.0);
                for line in PAGE.secret_body {
                    ui.label(RichText::new(*line).color(palette.heading));
                    ui.add_space(4.0);
                }
            })
            .response;

        if self.scroll_to_secret {
            response.scroll_to_me(Some(Align::Center));
            self.scroll_to_secret = false;
        }
    }
}
