use std::time::Duration;

use eframe::egui::{FontId, OpenUrl, Pos2, Rect, Sense, Ui, Vec2};

use crate::config::{DF, TICKER};
use crate::ticker::{Debounce, TickerAnimator, TickerItem, Track, plan_fill, single_set_width};
use crate::trace_time;
use crate::utils::AppInstant;

/// egui face of the ticker core: measures item galleys, fills the track,
/// anchors the animator, and paints the strip.
pub struct TickerStrip {
    track: Track,
    animator: TickerAnimator,
    resize: Debounce,
    last_viewport_width: f32,
    needs_fill: bool,
}

impl TickerStrip {
    pub fn new(items: Vec<TickerItem>, speed_px_per_sec: f32) -> Self {
        Self {
            track: Track::new(items),
            animator: TickerAnimator::new(speed_px_per_sec),
            resize: Debounce::new(Duration::from_millis(TICKER.resize_debounce_ms)),
            last_viewport_width: 0.0,
            needs_fill: true,
        }
    }

    /// Track the viewport width; bursts of resize events coalesce through
    /// the debounce into a single rebuild.
    fn observe_viewport(&mut self, width: f32, now: AppInstant) {
        if self.last_viewport_width > 0.0 && (width - self.last_viewport_width).abs() > 0.5 {
            self.resize.poke(now);
        }
        self.last_viewport_width = width;

        if self.resize.fire_if_ready(now) {
            self.needs_fill = true;
        }
    }

    /// Measure one set at its natural width, refill the track, and restart
    /// the animation run.
    fn measure_and_fill(&mut self, ui: &Ui, viewport_width: f32) {
        let font_id = FontId::monospace(TICKER.font_size);
        let widths: Vec<f32> = self
            .track
            .originals()
            .iter()
            .map(|item| {
                ui.painter()
                    .layout_no_wrap(item.text.clone(), font_id.clone(), TICKER.text_color)
                    .size()
                    .x
            })
            .collect();

        let single = single_set_width(&widths, TICKER.item_spacing);
        let plan = plan_fill(single, viewport_width, TICKER.width_multiplier, TICKER.min_sets);

        self.track.fill(plan.sets_needed);
        self.animator.start(plan.track_width);

        // A zero-width measurement (empty or hidden strip) stays pending and
        // re-measures next frame.
        self.needs_fill = plan.track_width <= 0.0;

        if DF.log_ticker_fills {
            log::info!(
                "Ticker fill: {} items x {} sets = {:.0}px (viewport {:.0}px)",
                self.track.originals().len(),
                self.track.sets(),
                plan.track_width,
                viewport_width,
            );
        }
    }

    pub fn render(&mut self, ui: &mut Ui) {
        let rect = ui.available_rect_before_wrap();
        let panel_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), TICKER.height));
        let response = ui.allocate_rect(panel_rect, Sense::click());
        ui.painter()
            .rect_filled(panel_rect, 0.0, TICKER.background_color); // Background

        let viewport_width = ui.ctx().screen_rect().width();
        self.observe_viewport(viewport_width, AppInstant::now());

        if self.needs_fill {
            trace_time!("ticker_fill", 500, {
                self.measure_and_fill(ui, viewport_width);
            });
        }

        let track_width = self.animator.track_width();
        if track_width < 1.0 {
            // Nothing measurable yet; try again next frame.
            ui.ctx().request_repaint();
            return;
        }

        let now = ui.input(|i| i.time);
        let offset = self.animator.offset_at(now);

        // Clip content (don't draw outside the strip)
        let painter = ui.painter().with_clip_rect(panel_rect);
        let font_id = FontId::monospace(TICKER.font_size);
        let screen_width = panel_rect.width();
        let start_pos = panel_rect.min;

        // The filled track is wider than the viewport by construction;
        // repeat it until the panel is covered so the wrap instant shows no
        // seam.
        let mut pass_x = -offset;
        while pass_x < screen_width {
            let mut loop_x = pass_x;

            for item in self.track.items() {
                let text_color = if item.url.is_some() {
                    TICKER.text_color_link
                } else {
                    TICKER.text_color
                };

                let galley = painter.layout_no_wrap(item.text.clone(), font_id.clone(), text_color);
                let w = galley.size().x;
                let h = galley.size().y;

                // Draw if visible
                if loop_x + w > 0.0 && loop_x < screen_width {
                    let x_snapped = (start_pos.x + loop_x).round();
                    let y_snapped = (start_pos.y + (TICKER.height - h) / 2.0).round();
                    let pos = Pos2::new(x_snapped, y_snapped);

                    painter.galley(pos, galley, text_color);

                    // Underline for links
                    if item.url.is_some() {
                        let line_y = y_snapped + h + 2.0; // 2px gap
                        painter.line_segment(
                            [Pos2::new(x_snapped, line_y), Pos2::new(x_snapped + w, line_y)],
                            (1.0, text_color), // 1px width
                        );
                    }

                    // Click detection
                    if response.clicked() {
                        if let Some(pointer) = response.interact_pointer_pos() {
                            let item_rect = Rect::from_min_size(pos, Vec2::new(w, TICKER.height));
                            if item_rect.contains(pointer) {
                                if let Some(url) = &item.url {
                                    ui.ctx().open_url(OpenUrl::new_tab(url));
                                }
                            }
                        }
                    }
                }

                loop_x += w + TICKER.item_spacing;
            }

            pass_x += track_width;
        }

        // Keep the strip moving
        ui.ctx().request_repaint();
    }
}
