//! All page copy in one place: hero, sections, popups, ticker messages.

use strum_macros::EnumIter;

/// Overlay popup cards the page can open. One at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum PopupKind {
    Details,
    Pricing,
    Contacts,
}

pub struct PopupCopy {
    pub title: &'static str,
    pub body: &'static [&'static str],
    /// Optional action button label shown under the body.
    pub action: Option<&'static str>,
}

pub struct SectionCopy {
    pub heading: &'static str,
    pub body: &'static str,
    /// Action button label + the popup it opens.
    pub action: Option<(&'static str, PopupKind)>,
}

pub struct PageContent {
    pub window_title: &'static str,
    pub product_name: &'static str,
    pub hero_heading: &'static str,
    pub hero_sub: &'static str,
    pub sections: &'static [SectionCopy],
    pub final_heading: &'static str,
    pub final_body: &'static str,
    pub secret_heading: &'static str,
    pub secret_body: &'static [&'static str],
    /// Ticker strip items: text plus an optional link target.
    pub ticker_messages: &'static [(&'static str, Option<&'static str>)],

    pub details: PopupCopy,
    pub pricing: PopupCopy,
    pub contacts: PopupCopy,
}

impl PageContent {
    pub const fn popup(&self, kind: PopupKind) -> &PopupCopy {
        match kind {
            PopupKind::Details => &self.details,
            PopupKind::Pricing => &self.pricing,
            PopupKind::Contacts => &self.contacts,
        }
    }
}

pub const PAGE: PageContent = PageContent {
    window_title: "Pulse — keep every launch on beat",
    product_name: "Pulse",
    hero_heading: "Keep every launch on beat.",
    hero_sub: "Pulse turns your release chaos into one calm, scrolling heartbeat. \
               Plug it in, lean back, watch it tick.",

    sections: &[
        SectionCopy {
            heading: "See everything at once",
            body: "One strip across the top of the room: builds, deploys, incidents, \
                   sign-ups. No dashboards to rotate, no tabs to babysit.",
            action: Some(("How it works", PopupKind::Details)),
        },
        SectionCopy {
            heading: "Start free, stay cheap",
            body: "The first board is free forever. Every board after that costs less \
                   than the coffee your standup burns.",
            action: Some(("See pricing", PopupKind::Pricing)),
        },
        SectionCopy {
            heading: "Humans included",
            body: "Real people answer the support line. Average first reply is under \
                   an hour, even on launch day. Especially on launch day.",
            action: Some(("Talk to us", PopupKind::Contacts)),
        },
    ],

    final_heading: "That's the whole pitch.",
    final_body: "No funnels, no webinars, no \"book a demo\" maze. \
                 Scroll back up and hit a button, or keep scrolling if you think \
                 there's more page down there.",

    secret_heading: "You found the quiet room.",
    secret_body: &[
        "Most visitors stop at the pitch. You pushed past the end of the page, twice.",
        "That is exactly the kind of stubbornness Pulse is built for.",
        "Use the code PUSH-TWICE when you sign up and the second board is on us.",
    ],

    ticker_messages: &[
        ("PULSE 1.0 IS LIVE", None),
        ("Built with Rust", Some("https://www.rust-lang.org")),
        ("Ships on desktop and in your browser", None),
        ("Star us on GitHub", Some("https://github.com/pulse-hq/pulse-promo")),
        ("First board free forever", None),
    ],

    details: PopupCopy {
        title: "How Pulse works",
        body: &[
            "Point Pulse at the feeds you already have: CI, error tracker, \
             status page, store front.",
            "Pulse folds them into one ordered stream and keeps it moving across \
             any screen you park it on.",
            "When something needs a human, the stream slows down and turns the \
             room's attention into a queue, not a panic.",
        ],
        action: Some("Get started"),
    },
    pricing: PopupCopy {
        title: "Pricing",
        body: &[
            "First board: free, forever, no card.",
            "Every additional board: a flat monthly fee. No seats, no tiers, \
             no surprise invoice in March.",
            "Self-hosting is free for teams under ten people.",
        ],
        action: Some("Start free"),
    },
    contacts: PopupCopy {
        title: "Talk to us",
        body: &[
            "hello@pulse.example — a person reads this inbox.",
            "For incidents with the hosted service, the status line in the app \
             footer is always current.",
        ],
        action: None,
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_popup_kind_has_copy() {
        for kind in PopupKind::iter() {
            let copy = PAGE.popup(kind);
            assert!(!copy.title.is_empty());
            assert!(!copy.body.is_empty());
        }
    }

    #[test]
    fn every_section_action_points_at_a_popup_with_copy() {
        for section in PAGE.sections {
            if let Some((label, kind)) = section.action {
                assert!(!label.is_empty());
                assert!(!PAGE.popup(kind).title.is_empty());
            }
        }
    }

    #[test]
    fn ticker_has_content_to_scroll() {
        assert!(!PAGE.ticker_messages.is_empty());
        assert!(PAGE.ticker_messages.iter().any(|(_, url)| url.is_some()));
    }
}
