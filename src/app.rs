use crate::catalog::{Catalog, CategoryFilter};
use crate::loader;
use crate::messages::CatalogMessage;
use crate::recipe::Recipe;
use chrono::Datelike;
use std::path::PathBuf;

/// Which part of the main screen receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Filters,
}

/// Text entry mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    ImportPath,
}

/// Startup load progress. `Loaded` and `LoadFailed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    LoadFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportState {
    Idle,
    Importing,
}

/// Grid selection movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
}

/// The detail overlay for one recipe.
#[derive(Debug, Clone)]
pub struct DetailOverlay {
    pub recipe: Recipe,
    /// Index of the active thumbnail; meaningful only when the recipe has images.
    pub active_image: usize,
    pub scroll: u16,
}

impl DetailOverlay {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            active_image: 0,
            scroll: 0,
        }
    }

    /// The image currently shown large.
    pub fn primary_image(&self) -> Option<&str> {
        self.recipe.images.get(self.active_image).map(String::as_str)
    }

    /// Make the thumbnail at `index` active. Out-of-range indices are ignored.
    pub fn select_image(&mut self, index: usize) {
        if index < self.recipe.images.len() {
            self.active_image = index;
        }
    }

    pub fn next_image(&mut self) {
        let count = self.recipe.images.len();
        if count > 0 {
            self.active_image = (self.active_image + 1) % count;
        }
    }

    pub fn prev_image(&mut self) {
        let count = self.recipe.images.len();
        if count > 0 {
            self.active_image = (self.active_image + count - 1) % count;
        }
    }
}

/// A user intent, produced by the keymap and applied by `App::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    DismissAlert,

    BeginSearch,
    EndSearch,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,

    FocusFilters,
    FocusGrid,
    ChipPrev,
    ChipNext,
    SelectCategory(CategoryFilter),

    MoveSelection(GridMove),
    OpenDetail(String),
    CloseDetail,
    SelectImage(usize),
    NextImage,
    PrevImage,
    ScrollDetail(i16),

    Export,
    BeginImport,
    ImportInput(char),
    ImportBackspace,
    CancelImport,
    SubmitImport,
}

/// Work the event loop must start after an action is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Import(PathBuf),
}

/// Height of a grid card in rows, borders included.
pub const CARD_HEIGHT: u16 = 8;
/// Narrowest card before the grid drops a column.
pub const CARD_MIN_WIDTH: u16 = 36;
pub const MAX_COLUMNS: usize = 4;
/// Rows taken by header, search bar, filter bar, status line and grid borders.
pub const GRID_OVERHEAD: u16 = 10;

/// Main application state.
pub struct App {
    pub catalog: Catalog,
    pub should_quit: bool,
    pub show_help: bool,

    pub focus: Focus,
    pub input_mode: InputMode,

    // Filter bar, rebuilt whenever the collection is replaced
    pub category_options: Vec<CategoryFilter>,
    pub chip_cursor: usize,

    // Grid, rebuilt on every filter change
    pub visible: Vec<usize>,
    pub grid_selected: usize,
    pub grid_columns: usize,
    pub grid_rows: usize,

    pub detail: Option<DetailOverlay>,

    pub import_buffer: String,
    pub alert: Option<String>,

    pub load_state: LoadState,
    pub import_state: ImportState,
    pub export_dir: PathBuf,

    pub year: i32,
    pub status_msg: String,
}

impl App {
    pub fn new(export_dir: PathBuf) -> Self {
        let mut app = Self {
            catalog: Catalog::default(),
            should_quit: false,
            show_help: false,

            focus: Focus::Grid,
            input_mode: InputMode::Normal,

            category_options: Vec::new(),
            chip_cursor: 0,

            visible: Vec::new(),
            grid_selected: 0,
            grid_columns: 1,
            grid_rows: 1,

            detail: None,

            import_buffer: String::new(),
            alert: None,

            load_state: LoadState::Loading,
            import_state: ImportState::Idle,
            export_dir,

            year: chrono::Local::now().year(),
            status_msg: "Loading recipes...".to_string(),
        };
        app.rebuild_filters();
        app
    }

    /// Recipes currently shown in the grid, in order.
    pub fn visible_recipes(&self) -> impl Iterator<Item = &Recipe> + '_ {
        let recipes = self.catalog.recipes();
        self.visible.iter().map(move |&i| &recipes[i])
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.visible
            .get(self.grid_selected)
            .map(|&i| &self.catalog.recipes()[i])
    }

    /// Recompute the visible subset after a filter or data change.
    pub fn refresh_grid(&mut self) {
        self.visible = self.catalog.filtered_indices();
        if self.grid_selected >= self.visible.len() {
            self.grid_selected = self.visible.len().saturating_sub(1);
        }
    }

    /// Rebuild the filter bar options from the current data. The chip cursor
    /// follows the active category, or returns to `All` if it is gone.
    pub fn rebuild_filters(&mut self) {
        self.category_options = self.catalog.category_options();
        self.chip_cursor = self
            .category_options
            .iter()
            .position(|option| *option == self.catalog.category)
            .unwrap_or(0);
    }

    /// Replace the collection, rebuilding both the filter bar and the grid.
    pub fn replace_recipes(&mut self, recipes: Vec<Recipe>) {
        self.catalog.replace(recipes);
        self.rebuild_filters();
        self.refresh_grid();
    }

    /// Update grid geometry from the terminal size.
    pub fn update_layout(&mut self, width: u16, height: u16) {
        self.grid_columns = ((width / CARD_MIN_WIDTH) as usize).clamp(1, MAX_COLUMNS);
        self.grid_rows = (height.saturating_sub(GRID_OVERHEAD) / CARD_HEIGHT).max(1) as usize;
    }

    /// Open the detail overlay. Unknown ids are ignored.
    pub fn open_detail(&mut self, id: &str) {
        match self.catalog.find(id) {
            Some(recipe) => {
                self.detail = Some(DetailOverlay::new(recipe.clone()));
            }
            None => {
                tracing::debug!(id, "detail requested for unknown recipe");
            }
        }
    }

    fn move_selection(&mut self, movement: GridMove) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let cols = self.grid_columns.max(1);
        let page = cols * self.grid_rows.max(1);
        let sel = self.grid_selected;
        self.grid_selected = match movement {
            GridMove::Left => sel.saturating_sub(1),
            GridMove::Right => (sel + 1).min(len - 1),
            GridMove::Up => sel.checked_sub(cols).unwrap_or(sel),
            GridMove::Down => {
                if sel + cols < len {
                    sel + cols
                } else {
                    sel
                }
            }
            GridMove::PageUp => sel.saturating_sub(page),
            GridMove::PageDown => (sel + page).min(len - 1),
            GridMove::First => 0,
            GridMove::Last => len - 1,
        };
    }

    fn export(&mut self) {
        match loader::export_collection(self.catalog.recipes(), &self.export_dir) {
            Ok(path) => {
                tracing::info!(path = %path.display(), count = self.catalog.recipes().len(), "exported recipes");
                self.status_msg = format!("Exported to {}", path.display());
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                self.alert = Some(format!("Export failed: {}", e.user_message()));
            }
        }
    }

    /// Apply an action. Returns asynchronous work the caller must start.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::DismissAlert => self.alert = None,

            Action::BeginSearch => self.input_mode = InputMode::Search,
            Action::EndSearch => self.input_mode = InputMode::Normal,
            Action::SearchInput(c) => {
                self.catalog.query.push(c);
                self.grid_selected = 0;
                self.refresh_grid();
            }
            Action::SearchBackspace => {
                self.catalog.query.pop();
                self.grid_selected = 0;
                self.refresh_grid();
            }
            Action::ClearSearch => {
                if !self.catalog.query.is_empty() {
                    self.catalog.query.clear();
                    self.grid_selected = 0;
                    self.refresh_grid();
                }
            }

            Action::FocusFilters => self.focus = Focus::Filters,
            Action::FocusGrid => self.focus = Focus::Grid,
            Action::ChipPrev => {
                let len = self.category_options.len().max(1);
                self.chip_cursor = (self.chip_cursor + len - 1) % len;
            }
            Action::ChipNext => {
                let len = self.category_options.len().max(1);
                self.chip_cursor = (self.chip_cursor + 1) % len;
            }
            Action::SelectCategory(category) => {
                self.catalog.category = category;
                self.grid_selected = 0;
                self.refresh_grid();
            }

            Action::MoveSelection(movement) => self.move_selection(movement),
            Action::OpenDetail(id) => self.open_detail(&id),
            Action::CloseDetail => self.detail = None,
            Action::SelectImage(index) => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.select_image(index);
                }
            }
            Action::NextImage => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.next_image();
                }
            }
            Action::PrevImage => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.prev_image();
                }
            }
            Action::ScrollDetail(delta) => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.scroll = detail.scroll.saturating_add_signed(delta);
                }
            }

            Action::Export => self.export(),
            Action::BeginImport => {
                self.import_buffer.clear();
                self.input_mode = InputMode::ImportPath;
            }
            Action::ImportInput(c) => self.import_buffer.push(c),
            Action::ImportBackspace => {
                self.import_buffer.pop();
            }
            Action::CancelImport => {
                self.import_buffer.clear();
                self.input_mode = InputMode::Normal;
            }
            Action::SubmitImport => {
                let path = std::mem::take(&mut self.import_buffer);
                self.input_mode = InputMode::Normal;
                let path = path.trim();
                if path.is_empty() {
                    return None;
                }
                self.import_state = ImportState::Importing;
                self.status_msg = format!("Importing {}...", path);
                return Some(Effect::Import(PathBuf::from(path)));
            }
        }
        None
    }

    /// Apply a finished load or import. Messages are applied in arrival order,
    /// so the last one to complete determines the collection.
    pub fn apply_message(&mut self, message: CatalogMessage) {
        match message {
            CatalogMessage::Loaded(Ok(recipes)) => {
                tracing::info!(count = recipes.len(), "loaded recipe collection");
                self.status_msg = format!("{} recipes loaded", recipes.len());
                self.load_state = LoadState::Loaded;
                self.replace_recipes(recipes);
            }
            CatalogMessage::Loaded(Err(e)) => {
                tracing::error!(error = %e, "failed to load recipe collection");
                self.status_msg = "No recipes loaded".to_string();
                self.load_state = LoadState::LoadFailed;
                self.replace_recipes(Vec::new());
            }
            CatalogMessage::Imported { path, result } => {
                self.import_state = ImportState::Idle;
                match result {
                    Ok(recipes) => {
                        tracing::info!(path = %path.display(), count = recipes.len(), "imported recipe collection");
                        self.status_msg =
                            format!("Imported {} recipes from {}", recipes.len(), path.display());
                        self.replace_recipes(recipes);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "import rejected");
                        self.status_msg.clear();
                        self.alert = Some(e.user_message());
                    }
                }
            }
        }
    }
}
