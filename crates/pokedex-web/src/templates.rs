//! HTML rendering via `minijinja`.
//!
//! Templates are embedded at compile time from the crate's `templates/`
//! directory. Names end in `.html` so output is HTML-escaped.

use minijinja::{Environment, context};

use crate::error::WebError;
use crate::view::{CatalogView, SelectionView};

const PAGE: &str = "page.html";
const CATALOG: &str = "catalog.html";

/// Renders the full page and the catalog fragment.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Load the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Template`] if a template fails to parse.
    pub fn new() -> Result<Self, WebError> {
        let mut env = Environment::new();
        env.add_template(CATALOG, include_str!("../templates/catalog.html.j2"))
            .map_err(|e| WebError::Template(format!("failed to add catalog template: {e}")))?;
        env.add_template(PAGE, include_str!("../templates/page.html.j2"))
            .map_err(|e| WebError::Template(format!("failed to add page template: {e}")))?;
        Ok(Self { env })
    }

    /// Render the whole page: header, search input, catalog, footer.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Template`] if rendering fails.
    pub fn page(&self, catalog: &CatalogView, selection: &SelectionView) -> Result<String, WebError> {
        self.render(PAGE, catalog, selection)
    }

    /// Render only the active catalog section and the selection panel.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Template`] if rendering fails.
    pub fn catalog(
        &self,
        catalog: &CatalogView,
        selection: &SelectionView,
    ) -> Result<String, WebError> {
        self.render(CATALOG, catalog, selection)
    }

    fn render(
        &self,
        name: &str,
        catalog: &CatalogView,
        selection: &SelectionView,
    ) -> Result<String, WebError> {
        self.env
            .get_template(name)
            .map_err(|e| WebError::Template(format!("missing {name} template: {e}")))?
            .render(context! { catalog => catalog, selection => selection })
            .map_err(|e| WebError::Template(format!("{name} render failed: {e}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pokedex_core::memory::fixture_record;
    use pokedex_core::{DetailState, ListState, SearchState};
    use pokedex_types::{ApiError, LoadingState, PageCursor};

    use super::*;
    use crate::view::ViewMode;

    fn browse(records: Vec<pokedex_types::Pokemon>, error: Option<ApiError>) -> CatalogView {
        let list = ListState {
            loading: if error.is_some() {
                LoadingState::Error
            } else {
                LoadingState::Success
            },
            records,
            error,
            cursor: PageCursor::new(20),
            has_more: true,
        };
        CatalogView::compose(ViewMode::Browse, &list, &SearchState::default())
    }

    fn no_selection() -> SelectionView {
        SelectionView::from(&DetailState::default())
    }

    #[test]
    fn page_has_chrome_and_cards() {
        let templates = Templates::new().unwrap();
        let html = templates
            .page(
                &browse(vec![fixture_record(4, "charmander", &["fire"])], None),
                &no_selection(),
            )
            .unwrap();
        assert!(html.contains("ポケモン図鑑"));
        assert!(html.contains("ポケモンを検索..."));
        assert!(html.contains("#004"));
        assert!(html.contains("Charmander"));
        assert!(html.contains("ほのお"));
        assert!(html.contains("もっと見る"));
    }

    #[test]
    fn error_banner_offers_reload() {
        let templates = Templates::new().unwrap();
        let html = templates
            .catalog(
                &browse(Vec::new(), Some(ApiError::network("connection refused"))),
                &no_selection(),
            )
            .unwrap();
        assert!(html.contains("エラーが発生しました: connection refused"));
        assert!(html.contains("再読み込み"));
        assert!(!html.contains("ポケモンが見つかりませんでした"));
    }

    #[test]
    fn names_are_escaped() {
        let templates = Templates::new().unwrap();
        let html = templates
            .catalog(
                &browse(vec![fixture_record(1, "<script>", &[])], None),
                &no_selection(),
            )
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
