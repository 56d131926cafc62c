use eframe::Frame;
use eframe::egui::{Context, Key};

use crate::Cli;
use crate::app::RevealState;
use crate::config::{DF, PAGE, PopupKind, TICKER, ThemeId};
use crate::ticker::TickerItem;
use crate::ui::{TickerStrip, apply_theme_visuals};

pub struct PromoApp {
    pub(crate) theme: ThemeId,
    pub(crate) popup: Option<PopupKind>,
    pub(crate) reveal: RevealState,
    pub(crate) ticker: TickerStrip,
    /// One-shot: scroll the freshly revealed section into view.
    pub(crate) scroll_to_secret: bool,
}

impl PromoApp {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let items = PAGE
            .ticker_messages
            .iter()
            .map(|(text, url)| match url {
                Some(url) => TickerItem::link(*text, *url),
                None => TickerItem::text(*text),
            })
            .collect();

        let speed = args.speed.unwrap_or(TICKER.speed_px_per_sec);

        Self {
            theme: ThemeId::default(),
            popup: None,
            reveal: if args.unlocked {
                RevealState::revealed()
            } else {
                RevealState::default()
            },
            ticker: TickerStrip::new(items, speed),
            scroll_to_secret: false,
        }
    }

    pub(crate) fn set_theme(&mut self, theme: ThemeId) {
        if self.theme != theme {
            if DF.log_theme_changes {
                log::info!("Theme -> {}", theme.palette().name);
            }
            self.theme = theme;
        }
    }

    fn handle_global_shortcuts(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                self.popup = None;
            }
        });
    }
}

impl eframe::App for PromoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        apply_theme_visuals(ctx, self.theme);

        // Disable text selection globally. This stops the I-Beam cursor
        // appearing on labels/buttons and keeps page copy from being
        // highlighted like a document.
        ctx.style_mut(|s| s.interaction.selectable_labels = false);

        self.handle_global_shortcuts(ctx);

        self.render_header_panel(ctx); // Render first so it claims the top edge
        self.render_ticker_panel(ctx);
        self.render_page(ctx);

        // Modals
        self.render_popup(ctx);
    }
}
