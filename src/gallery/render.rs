//! View models for the gallery page and their HTML rendering.
//!
//! Every string that came from the backend or the user is escaped here, at the
//! single point where markup is produced.

use crate::gallery::session::GallerySession;
use crate::models::Artwork;

pub const NO_RESULTS_TEXT: &str = "No artworks found";
pub const WELCOME_TITLE: &str = "Welcome to Your Personalized Gallery";
pub const WELCOME_TEXT: &str =
    "Click \"Get AI Recommendations\" to see your personalized art collection!";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Two decimal places, as shown in the score badge. Exact ties round away from zero.
pub fn format_score(score: f64) -> String {
    // A value sits exactly on a third-decimal 5 only when it is an odd number of eighths.
    let eighths = score * 8.0;
    if eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (score * 100.0).round() / 100.0);
    }
    format!("{:.2}", score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikeButtonView {
    pub liked: bool,
    /// A toggle is in flight; the button is disabled until it completes.
    pub pending: bool,
}

impl LikeButtonView {
    pub fn label(&self) -> &'static str {
        if self.liked {
            "❤️ Liked"
        } else {
            "🤍 Like"
        }
    }

    pub fn css_class(&self) -> &'static str {
        if self.liked {
            "like-btn liked"
        } else {
            "like-btn"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerateButtonView {
    pub busy: bool,
}

impl GenerateButtonView {
    pub fn idle() -> Self {
        Self { busy: false }
    }

    pub fn busy() -> Self {
        Self { busy: true }
    }

    pub fn label(&self) -> &'static str {
        if self.busy {
            "Generating..."
        } else {
            "Generate Artwork"
        }
    }

    pub fn enabled(&self) -> bool {
        !self.busy
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub artwork_id: String,
    pub title: String,
    pub artist: String,
    pub style: String,
    pub tags: Vec<String>,
    pub score_text: Option<String>,
    pub ai_generated: bool,
    pub like: LikeButtonView,
}

impl CardView {
    pub fn from_artwork(artwork: &Artwork, show_scores: bool, session: &GallerySession) -> Self {
        let score_text = if show_scores {
            artwork.recommendation_score.map(format_score)
        } else {
            None
        };

        Self {
            artwork_id: artwork.id.clone(),
            title: artwork.title.clone(),
            artist: artwork.artist.clone(),
            style: artwork.style.clone(),
            tags: artwork.tags.clone(),
            score_text,
            ai_generated: artwork.ai_generated,
            like: LikeButtonView {
                liked: session.is_liked(&artwork.id),
                pending: session.is_pending(&artwork.id),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    /// A single text line in place of cards: loading, error or no results.
    Placeholder(String),
    Cards(Vec<CardView>),
}

impl GridView {
    pub fn placeholder(text: impl Into<String>) -> Self {
        GridView::Placeholder(text.into())
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            GridView::Cards(cards) => cards,
            GridView::Placeholder(_) => &[],
        }
    }

    pub fn placeholder_text(&self) -> Option<&str> {
        match self {
            GridView::Placeholder(text) => Some(text),
            GridView::Cards(_) => None,
        }
    }
}

impl Default for GridView {
    fn default() -> Self {
        GridView::placeholder(WELCOME_TEXT)
    }
}

/// One card per artwork in input order, or the no-results placeholder.
pub fn build_grid(artworks: &[Artwork], show_scores: bool, session: &GallerySession) -> GridView {
    if artworks.is_empty() {
        return GridView::placeholder(NO_RESULTS_TEXT);
    }
    GridView::Cards(
        artworks
            .iter()
            .map(|artwork| CardView::from_artwork(artwork, show_scores, session))
            .collect(),
    )
}

pub fn render_like_button_html(artwork_id: &str, like: &LikeButtonView) -> String {
    format!(
        r#"<button class="{}" data-action="like" data-artwork-id="{}"{}>{}</button>"#,
        like.css_class(),
        escape_html(artwork_id),
        if like.pending { " disabled" } else { "" },
        like.label()
    )
}

pub fn render_card_html(card: &CardView) -> String {
    let id = escape_html(&card.artwork_id);
    let mut html = String::new();

    html.push_str(&format!(
        r#"<div class="artwork-card" data-artwork-id="{}">"#,
        id
    ));
    html.push_str(r#"<div class="artwork-image">🎨"#);
    if let Some(score) = &card.score_text {
        html.push_str(&format!(r#"<div class="score">Score: {}</div>"#, score));
    }
    if card.ai_generated {
        html.push_str(r#"<div class="ai-badge">AI</div>"#);
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="artwork-info">"#);
    html.push_str(&format!(
        r#"<div class="artwork-title">{}</div>"#,
        escape_html(&card.title)
    ));
    html.push_str(&format!(
        r#"<div class="artwork-artist">by {}</div>"#,
        escape_html(&card.artist)
    ));
    html.push_str(&format!(
        r#"<div class="artwork-style">{}</div>"#,
        escape_html(&card.style)
    ));
    html.push_str(r#"<div class="artwork-tags">"#);
    for tag in &card.tags {
        html.push_str(&format!(r#"<span class="tag">{}</span>"#, escape_html(tag)));
    }
    html.push_str("</div>");
    html.push_str(r#"<div class="artwork-actions">"#);
    html.push_str(&render_like_button_html(&card.artwork_id, &card.like));
    html.push_str("</div></div></div>");

    html
}

pub fn render_grid_html(grid: &GridView) -> String {
    match grid {
        GridView::Placeholder(text) => {
            format!(r#"<div class="loading">{}</div>"#, escape_html(text))
        }
        GridView::Cards(cards) => cards.iter().map(render_card_html).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Artwork {
        Artwork::new("art001", "Digital Dreams", "Alex Chen", "digital")
            .with_tags(["futuristic", "neon"])
            .with_score(0.8)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<img src=x onerror="alert('x')">&"#),
            "&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt;&amp;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.8), "0.80");
        assert_eq!(format_score(0.456), "0.46");
        assert_eq!(format_score(1.0), "1.00");
    }

    #[test]
    fn test_format_score_rounds_ties_up() {
        assert_eq!(format_score(0.125), "0.13");
        assert_eq!(format_score(0.625), "0.63");
        assert_eq!(format_score(0.375), "0.38");
        assert_eq!(format_score(-0.125), "-0.13");
        // Stored just below the tie, so these round down.
        assert_eq!(format_score(1.005), "1.00");
        assert_eq!(format_score(2.675), "2.67");
        assert_eq!(format_score(0.0), "0.00");
    }

    #[test]
    fn test_empty_list_is_placeholder() {
        let grid = build_grid(&[], true, &GallerySession::new());
        assert_eq!(grid.placeholder_text(), Some(NO_RESULTS_TEXT));
        assert!(grid.cards().is_empty());
    }

    #[test]
    fn test_cards_keep_input_order() {
        let artworks = vec![
            Artwork::new("b", "B", "x", "s"),
            Artwork::new("a", "A", "x", "s"),
            Artwork::new("c", "C", "x", "s"),
        ];
        let grid = build_grid(&artworks, false, &GallerySession::new());
        let ids: Vec<_> = grid.cards().iter().map(|c| c.artwork_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_score_needs_flag_and_value() {
        let session = GallerySession::new();
        let scored = sample();
        let unscored = Artwork::new("art002", "Quiet", "B", "abstract");

        assert_eq!(
            CardView::from_artwork(&scored, true, &session).score_text.as_deref(),
            Some("0.80")
        );
        assert!(CardView::from_artwork(&scored, false, &session).score_text.is_none());
        assert!(CardView::from_artwork(&unscored, true, &session).score_text.is_none());

        let zero = Artwork::new("z", "Zero", "C", "minimal").with_score(0.0);
        assert_eq!(
            CardView::from_artwork(&zero, true, &session).score_text.as_deref(),
            Some("0.00")
        );
    }

    #[test]
    fn test_card_reflects_liked_set() {
        let session = GallerySession::new();
        session.seed_likes(["art001"]);
        let card = CardView::from_artwork(&sample(), false, &session);
        assert!(card.like.liked);
        assert_eq!(card.like.label(), "❤️ Liked");

        let html = render_card_html(&card);
        assert!(html.contains(r#"class="like-btn liked""#));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_card_html_escapes_backend_text() {
        let artwork = Artwork::new("x\"1", "<script>alert(1)</script>", "Bob & Co", "pop'art")
            .with_tags(["<b>bold</b>"]);
        let html = render_card_html(&CardView::from_artwork(&artwork, false, &GallerySession::new()));

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("by Bob &amp; Co"));
        assert!(html.contains("pop&#39;art"));
        assert!(html.contains(r#"data-artwork-id="x&quot;1""#));
        assert!(html.contains(r#"<span class="tag">&lt;b&gt;bold&lt;/b&gt;</span>"#));
    }

    #[test]
    fn test_card_html_score_badge() {
        let session = GallerySession::new();
        let with = render_card_html(&CardView::from_artwork(&sample(), true, &session));
        let without = render_card_html(&CardView::from_artwork(&sample(), false, &session));
        assert!(with.contains(r#"<div class="score">Score: 0.80</div>"#));
        assert!(!without.contains("Score:"));
    }

    #[test]
    fn test_pending_button_is_disabled() {
        let html = render_like_button_html(
            "art001",
            &LikeButtonView {
                liked: false,
                pending: true,
            },
        );
        assert_eq!(
            html,
            r#"<button class="like-btn" data-action="like" data-artwork-id="art001" disabled>🤍 Like</button>"#
        );
    }

    #[test]
    fn test_placeholder_html() {
        assert_eq!(
            render_grid_html(&GridView::placeholder("Error loading artworks")),
            r#"<div class="loading">Error loading artworks</div>"#
        );
    }

    #[test]
    fn test_generate_button_labels() {
        assert_eq!(GenerateButtonView::idle().label(), "Generate Artwork");
        assert!(GenerateButtonView::idle().enabled());
        assert_eq!(GenerateButtonView::busy().label(), "Generating...");
        assert!(!GenerateButtonView::busy().enabled());
    }
}
