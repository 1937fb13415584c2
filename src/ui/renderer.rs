//! Plain-text rendering of view models.
//!
//! Every function returns a `String` so the driver decides where output goes.
//! With `styled = false` no escape sequences are emitted, which keeps the output
//! stable for tests and for non-terminal stdout.

use crate::app::pagination::PageItem;
use crate::app::AppState;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CatalogStatus, CatalogView, CharacterCard, CharacterDetail, FavoritesView, PaginationView,
    EMPTY_RESULTS_MESSAGE, ERROR_TITLE, LOADING_MESSAGE,
};
use std::fmt::Write;

/// Renders text with optional ANSI styling.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    styled: bool,
}

impl Renderer {
    #[must_use]
    pub fn new(theme: Theme, styled: bool) -> Self {
        Self { theme, styled }
    }

    /// Renderer that never emits escape sequences.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(Theme::default(), false)
    }

    /// Renders both panels of `state`.
    #[must_use]
    pub fn render(&self, state: &AppState) -> String {
        let mut out = self.render_catalog(&state.compute_catalog_view());
        out.push('\n');
        out.push_str(&self.render_favorites(&state.compute_favorites_view()));
        out
    }

    #[must_use]
    pub fn render_catalog(&self, view: &CatalogView) -> String {
        let mut out = String::new();

        let title = if view.search_query.is_empty() {
            "Characters".to_string()
        } else {
            format!("Characters matching \"{}\"", view.search_query)
        };
        let _ = writeln!(out, "{}", self.paint(&self.theme.header, &title, true));

        match &view.status {
            CatalogStatus::Loading => {
                let _ = writeln!(out, "{LOADING_MESSAGE}");
                return out;
            }
            CatalogStatus::Error { message, status } => {
                let heading = match status {
                    Some(code) => format!("{ERROR_TITLE} ({code})"),
                    None => ERROR_TITLE.to_string(),
                };
                let _ = writeln!(out, "{}", self.paint(&self.theme.error, &heading, true));
                let _ = writeln!(out, "{message}");
                let _ = writeln!(out, "Type 'r' to try again.");
                return out;
            }
            CatalogStatus::Ready => {}
        }

        if view.cards.is_empty() {
            let _ = writeln!(out, "{EMPTY_RESULTS_MESSAGE}");
        }
        for (index, card) in view.cards.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", index + 1, self.render_card(card));
        }

        if let Some(pager) = &view.pagination {
            out.push_str(&self.render_pagination(pager));
        }
        out
    }

    #[must_use]
    pub fn render_favorites(&self, view: &FavoritesView) -> String {
        let mut out = String::new();
        let accent = self.theme.accent(view.color).to_string();
        let _ = writeln!(
            out,
            "{} [{}]",
            self.paint(&accent, &view.title, true),
            view.color
        );

        if let Some(message) = view.empty_message {
            let _ = writeln!(out, "{message}");
        }
        for card in &view.cards {
            let _ = writeln!(out, "  - {}", self.render_card(card));
        }
        out
    }

    #[must_use]
    pub fn render_pagination(&self, pager: &PaginationView) -> String {
        let mut line = String::new();
        line.push_str(if pager.can_previous { "<" } else { " " });
        for item in &pager.items {
            line.push(' ');
            match item {
                PageItem::Page(p) if *p == pager.current => {
                    let _ = write!(line, "[{p}]");
                }
                PageItem::Page(p) => {
                    let _ = write!(line, "{p}");
                }
                PageItem::Ellipsis => line.push_str("..."),
            }
        }
        line.push(' ');
        line.push_str(if pager.can_next { ">" } else { " " });

        let mut out = format!("{}\n", line.trim_end());
        if let Some(summary) = &pager.summary {
            let _ = writeln!(out, "{}", self.paint(&self.theme.text_dim, summary, false));
        }
        out
    }

    #[must_use]
    pub fn render_detail(&self, detail: &CharacterDetail) -> String {
        let mut out = String::new();
        let heart = if detail.is_favorite { " *" } else { "" };
        let _ = writeln!(
            out,
            "{}{heart}",
            self.paint(&self.theme.header, &detail.name, true)
        );
        let status = detail.status.to_string();
        let _ = writeln!(
            out,
            "  Status:   {}",
            self.paint(self.theme.status(detail.status), &status, false)
        );
        let _ = writeln!(out, "  Species:  {}", detail.species);
        let _ = writeln!(out, "  Gender:   {}", detail.gender);
        let _ = writeln!(out, "  Episodes: {} episodes", detail.episode_count);
        let _ = writeln!(out, "  Origin:   {}", detail.origin);
        if let Some(kind) = &detail.kind {
            let _ = writeln!(out, "  Type:     {kind}");
        }
        let _ = writeln!(out, "  Location: {}", detail.location);
        if !detail.image.is_empty() {
            let _ = writeln!(out, "  Image:    {}", detail.image);
        }
        out
    }

    fn render_card(&self, card: &CharacterCard) -> String {
        let marker = if card.is_favorite { "*" } else { " " };
        let status = card.status.to_string();
        format!(
            "{marker} #{:<4} {} ({} - {})",
            card.id,
            card.name,
            self.paint(self.theme.status(card.status), &status, false),
            card.species
        )
    }

    fn paint(&self, hex: &str, text: &str, bold: bool) -> String {
        if !self.styled {
            return text.to_string();
        }
        let weight = if bold { Theme::bold() } else { "" };
        format!("{weight}{}{text}{}", Theme::fg(hex), Theme::reset())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::plain()
    }
}
