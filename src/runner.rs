use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::dom::Dom;
use crate::filter::{Filter, Scroll};
use crate::loader::{LoadError, MenuLoader, MenuSource, SourceLoader};
use crate::menu::Menu;
use crate::page::{MenuPage, PageShell};
use crate::render;

#[derive(Clone, Debug)]
pub struct Options {
    pub source: MenuSource,
    pub shell: PageShell,
    pub fallback_image: String,
    pub initial_filter: Option<Filter>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: MenuSource::File(render::MENU_DATA_FILE_NAME.into()),
            shell: PageShell::default(),
            fallback_image: render::DEFAULT_FALLBACK_IMAGE.to_string(),
            initial_filter: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("fallback image path is empty")]
    EmptyFallbackImage,

    #[error("failed to build HTTP client: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RenderOutcome {
    Ready { categories: usize, items: usize },
    Empty,
    Failed { message: String },
    // no sections container
    Skipped,
}

pub async fn load_and_render<L: MenuLoader>(page: &mut MenuPage, loader: &L) -> RenderOutcome {
    if page.handles.sections_root.is_none() {
        warn!("sections container not found, nothing to render");
        return RenderOutcome::Skipped;
    }

    page.show_loading();

    let menu = match loader.load().await {
        Ok(value) => Menu::from_json(&value).map_err(LoadError::from),
        Err(e) => Err(e),
    };
    let menu = match menu {
        Ok(menu) => menu,
        Err(e) => {
            page.show_load_error();
            error!(error = %e, "couldn't load the menu");
            return RenderOutcome::Failed {
                message: e.to_string(),
            };
        }
    };

    if menu.is_empty() {
        page.show_unavailable();
        info!("menu data has no categories");
        return RenderOutcome::Empty;
    }

    page.render_sections(&menu);
    page.wire_filter_dropdown();
    page.wire_filters();
    page.disable_missing_filters();
    page.wire_mobile_nav_close();
    page.apply_filter(&Filter::All);

    RenderOutcome::Ready {
        categories: menu.categories.len(),
        items: menu.item_count(),
    }
}

#[derive(Clone, Debug)]
pub struct RenderResult {
    pub page: MenuPage,
    pub outcome: RenderOutcome,
    pub scroll: Option<Scroll>,
}

#[derive(Clone, Debug)]
pub struct Renderer {
    options: Options,
    client: reqwest::Client,
}

impl Renderer {
    pub fn new(options: Options) -> Result<Self, RendererError> {
        if options.fallback_image.trim().is_empty() {
            return Err(RendererError::EmptyFallbackImage);
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|source| RendererError::HttpClientBuild { source })?;
        Ok(Self { options, client })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn new_page(&self) -> MenuPage {
        self.page_from(self.options.shell.build())
    }

    pub fn page_from(&self, dom: Dom) -> MenuPage {
        MenuPage::new(dom).with_fallback_image(&self.options.fallback_image)
    }

    pub async fn render(&self) -> RenderResult {
        let loader = SourceLoader::new(self.options.source.clone(), self.client.clone());
        self.render_with(&loader).await
    }

    pub async fn render_with<L: MenuLoader>(&self, loader: &L) -> RenderResult {
        let mut page = self.new_page();
        let outcome = load_and_render(&mut page, loader).await;
        let scroll = match (&outcome, self.options.initial_filter.as_ref()) {
            (RenderOutcome::Ready { .. }, Some(filter)) => page.apply_filter(filter),
            _ => None,
        };
        RenderResult {
            page,
            outcome,
            scroll,
        }
    }
}
