use crate::{
    CategoryId, FetchError, ItemId, Language, Menu, MenuCategory, RequestId, RequestSequence,
};

/// Coarse lifecycle of the menu section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuPhase {
    Loading,
    Empty,
    Ready,
    /// No menu has ever loaded and the last attempt failed.
    Failed { message: String },
}

/// Where a click on the open image overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    Backdrop,
    CloseButton,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// The response belonged to a request that has since been superseded.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabView<'a> {
    pub id: &'a CategoryId,
    pub name: &'a str,
    pub active: bool,
}

/// Everything a front-end needs to draw the menu section.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuRender<'a> {
    Loading,
    Failed {
        message: &'a str,
    },
    Empty {
        notice: Option<&'a str>,
    },
    Ready {
        tabs: Vec<TabView<'a>>,
        category: &'a MenuCategory,
        overlay: Option<&'a str>,
        notice: Option<&'a str>,
    },
}

/// State machine behind the menu section: owns the selected tab and the
/// enlarged image, and decides what happens when a fetch resolves.
///
/// It never performs I/O. Callers ask it for a [`RequestId`] through
/// [`MenuView::begin_load`], run the fetch however they like and hand the
/// result back to [`MenuView::complete_load`].
#[derive(Debug, Clone)]
pub struct MenuView {
    /// Language of the menu on screen
    language: Language,
    requested: Language,
    phase: MenuPhase,
    menu: Option<Menu>,
    active_tab: Option<CategoryId>,
    tab_chosen_by_user: bool,
    selected_image: Option<String>,
    requests: RequestSequence,
    in_flight: Option<RequestId>,
    last_error: Option<String>,
}

impl MenuView {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            requested: language,
            phase: MenuPhase::Loading,
            menu: None,
            active_tab: None,
            tab_chosen_by_user: false,
            selected_image: None,
            requests: RequestSequence::default(),
            in_flight: None,
            last_error: None,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Language of the latest fetch. Equals [`MenuView::language`] once that
    /// fetch resolves, or falls back to it when the fetch fails.
    pub fn requested_language(&self) -> Language {
        self.requested
    }

    pub fn phase(&self) -> &MenuPhase {
        &self.phase
    }

    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    pub fn active_tab(&self) -> Option<&CategoryId> {
        self.active_tab.as_ref()
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Category whose items are on screen. Falls back to the first category
    /// when the active id is not part of the loaded set.
    pub fn active_category(&self) -> Option<&MenuCategory> {
        let menu = self.menu.as_ref()?;
        self.active_tab
            .as_ref()
            .and_then(|id| menu.category(id))
            .or_else(|| menu.first())
    }

    /// Enters `Loading` for `language` and returns the tag the caller must
    /// attach to the fetch.
    pub fn begin_load(&mut self, language: Language) -> RequestId {
        let id = self.requests.issue();
        self.requested = language;
        self.phase = MenuPhase::Loading;
        self.in_flight = Some(id);
        id
    }

    /// Applies the result of the fetch tagged `request_id`. Anything but the
    /// latest request is dropped untouched.
    pub fn complete_load(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<MenuCategory>, FetchError>,
    ) -> LoadOutcome {
        if self.in_flight != Some(request_id) || !self.requests.is_current(request_id) {
            return LoadOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(categories) => self.apply_menu(Menu::new(self.requested, categories)),
            Err(err) => self.apply_error(&err),
        }
        LoadOutcome::Applied
    }

    fn apply_menu(&mut self, menu: Menu) {
        self.last_error = None;
        self.language = menu.language;

        if menu.is_empty() {
            self.active_tab = None;
            self.selected_image = None;
            self.phase = MenuPhase::Empty;
            self.menu = Some(menu);
            return;
        }

        let keep_active = self.tab_chosen_by_user
            && self
                .active_tab
                .as_ref()
                .is_some_and(|id| menu.category(id).is_some());
        if !keep_active {
            self.active_tab = menu.first().map(|category| category.id.clone());
        }

        if self
            .selected_image
            .as_deref()
            .is_some_and(|url| !menu.contains_image(url))
        {
            self.selected_image = None;
        }

        self.phase = MenuPhase::Ready;
        self.menu = Some(menu);
    }

    fn apply_error(&mut self, err: &FetchError) {
        let message = err.to_string();
        self.requested = self.language;
        self.phase = match &self.menu {
            Some(menu) if menu.is_empty() => MenuPhase::Empty,
            Some(_) => MenuPhase::Ready,
            None => MenuPhase::Failed { message: message.clone() },
        };
        self.last_error = Some(message);
    }

    /// Switches the visible category. Returns `false` when nothing changed.
    pub fn select_tab(&mut self, id: &CategoryId) -> bool {
        if self.phase != MenuPhase::Ready {
            return false;
        }
        let Some(menu) = &self.menu else {
            return false;
        };
        if menu.category(id).is_none() {
            return false;
        }
        self.active_tab = Some(id.clone());
        self.tab_chosen_by_user = true;
        true
    }

    /// Moves the active tab by `delta` positions, wrapping at both ends.
    pub fn step_tab(&mut self, delta: isize) -> bool {
        let Some(menu) = &self.menu else {
            return false;
        };
        let len = menu.categories.len() as isize;
        if len == 0 {
            return false;
        }
        let current = self
            .active_category()
            .and_then(|active| menu.categories.iter().position(|c| c.id == active.id))
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        let id = menu.categories[next].id.clone();
        self.select_tab(&id)
    }

    /// Enlarges the image of an item in the visible category. Items without
    /// an image are ignored.
    pub fn open_image(&mut self, item_id: &ItemId) -> bool {
        if self.phase != MenuPhase::Ready {
            return false;
        }
        let Some(url) = self
            .active_category()
            .and_then(|category| category.find_item(item_id))
            .and_then(|item| item.image_url.clone())
        else {
            return false;
        };
        self.selected_image = Some(url);
        true
    }

    pub fn overlay_click(&mut self, target: OverlayTarget) {
        match target {
            OverlayTarget::Backdrop | OverlayTarget::CloseButton => self.selected_image = None,
            OverlayTarget::Content => {}
        }
    }

    pub fn render_model(&self) -> MenuRender<'_> {
        match &self.phase {
            MenuPhase::Loading => MenuRender::Loading,
            MenuPhase::Failed { message } => MenuRender::Failed { message },
            MenuPhase::Empty => MenuRender::Empty { notice: self.last_error() },
            MenuPhase::Ready => {
                let (Some(menu), Some(category)) = (self.menu.as_ref(), self.active_category())
                else {
                    return MenuRender::Empty { notice: self.last_error() };
                };
                let tabs = menu
                    .categories
                    .iter()
                    .map(|c| TabView { id: &c.id, name: &c.name, active: c.id == category.id })
                    .collect();
                MenuRender::Ready {
                    tabs,
                    category,
                    overlay: self.selected_image(),
                    notice: self.last_error(),
                }
            }
        }
    }
}
