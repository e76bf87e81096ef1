use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::gallery::render::{
    escape_html, render_grid_html, GenerateButtonView, GridView, LikeButtonView, WELCOME_TITLE,
};
use crate::models::ColorScheme;

/// Current contents of the generation dialog's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateForm {
    pub title: String,
    pub scheme: ColorScheme,
}

/// The page regions the gallery components draw into.
pub trait Surface: Send + Sync {
    fn set_section_title(&self, title: &str);
    /// Replaces the whole grid region.
    fn render_grid(&self, grid: GridView);
    /// Redraws one card's like button in place.
    fn update_like_button(&self, artwork_id: &str, button: LikeButtonView);
    fn set_modal_visible(&self, visible: bool);
    fn generate_form(&self) -> GenerateForm;
    fn reset_generate_form(&self, scheme: ColorScheme);
    fn set_generate_button(&self, button: GenerateButtonView);
    /// Blocking notice to the user.
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone)]
struct PageState {
    section_title: String,
    grid: GridView,
    modal_visible: bool,
    form: GenerateForm,
    generate_button: GenerateButtonView,
    alerts: Vec<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            section_title: WELCOME_TITLE.to_string(),
            grid: GridView::default(),
            modal_visible: false,
            form: GenerateForm::default(),
            generate_button: GenerateButtonView::idle(),
            alerts: Vec::new(),
        }
    }
}

/// In-memory page. Backs the terminal driver and the tests.
#[derive(Debug, Default)]
pub struct MemorySurface {
    page: Mutex<PageState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn section_title(&self) -> String {
        self.lock().section_title.clone()
    }

    pub fn grid(&self) -> GridView {
        self.lock().grid.clone()
    }

    pub fn like_button(&self, artwork_id: &str) -> Option<LikeButtonView> {
        self.lock()
            .grid
            .cards()
            .iter()
            .find(|card| card.artwork_id == artwork_id)
            .map(|card| card.like)
    }

    pub fn modal_visible(&self) -> bool {
        self.lock().modal_visible
    }

    pub fn generate_button(&self) -> GenerateButtonView {
        self.lock().generate_button
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    pub fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut self.lock().alerts)
    }

    /// Simulates typing into the title field.
    pub fn set_form_title(&self, title: impl Into<String>) {
        self.lock().form.title = title.into();
    }

    /// Simulates picking a color scheme.
    pub fn set_form_scheme(&self, scheme: ColorScheme) {
        self.lock().form.scheme = scheme;
    }

    pub fn grid_html(&self) -> String {
        render_grid_html(&self.lock().grid)
    }

    /// Title and grid regions as one HTML fragment.
    pub fn snapshot_html(&self) -> String {
        let page = self.lock();
        format!(
            r#"<h2 class="section-title" id="section-title">{}</h2><div class="artwork-grid" id="artwork-grid">{}</div>"#,
            escape_html(&page.section_title),
            render_grid_html(&page.grid)
        )
    }
}

impl Surface for MemorySurface {
    fn set_section_title(&self, title: &str) {
        self.lock().section_title = title.to_string();
    }

    fn render_grid(&self, grid: GridView) {
        self.lock().grid = grid;
    }

    fn update_like_button(&self, artwork_id: &str, button: LikeButtonView) {
        if let GridView::Cards(cards) = &mut self.lock().grid {
            for card in cards.iter_mut().filter(|card| card.artwork_id == artwork_id) {
                card.like = button;
            }
        }
    }

    fn set_modal_visible(&self, visible: bool) {
        self.lock().modal_visible = visible;
    }

    fn generate_form(&self) -> GenerateForm {
        self.lock().form.clone()
    }

    fn reset_generate_form(&self, scheme: ColorScheme) {
        self.lock().form = GenerateForm {
            title: String::new(),
            scheme,
        };
    }

    fn set_generate_button(&self, button: GenerateButtonView) {
        self.lock().generate_button = button;
    }

    fn alert(&self, message: &str) {
        log::info!("Alert: {}", message);
        self.lock().alerts.push(message.to_string());
    }
}
