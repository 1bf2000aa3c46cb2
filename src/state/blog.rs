//! Blog listing state: category filter and the load-more stub

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// A blog card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub read_minutes: u32,
}

/// Which cards the listing shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter value; `all` selects every card
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Category(c) => c,
        }
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => post.category == *c,
        }
    }
}

/// Phase of the load-more button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMorePhase {
    Ready,
    Loading { since: Instant },
    Exhausted { since: Instant },
    Hidden,
}

/// Load-more stub: pretends to fetch, then reports there is nothing more
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreState {
    pub phase: LoadMorePhase,
}

impl LoadMoreState {
    /// Simulated fetch time
    pub const LOADING_DURATION: Duration = Duration::from_millis(1000);
    /// How long "no more posts" shows before the button goes away
    pub const EXHAUSTED_DURATION: Duration = Duration::from_millis(2000);

    pub const READY_LABEL: &'static str = "Load More Gossip";
    pub const LOADING_LABEL: &'static str = "Loading More Gossip...";
    pub const EXHAUSTED_LABEL: &'static str = "No More Posts (For Now)";
    pub const END_NOTE: &'static str =
        "That's all the gossip for now. Check back soon for more! Or just subscribe to the newsletter.";

    pub fn new() -> Self {
        Self {
            phase: LoadMorePhase::Ready,
        }
    }

    /// Press the button; only reacts while it is ready
    pub fn press(&mut self, now: Instant) {
        if self.phase == LoadMorePhase::Ready {
            self.phase = LoadMorePhase::Loading { since: now };
        }
    }

    /// Advance timed transitions
    pub fn tick(&mut self, now: Instant) {
        self.phase = match self.phase {
            LoadMorePhase::Loading { since }
                if now.saturating_duration_since(since) >= Self::LOADING_DURATION =>
            {
                LoadMorePhase::Exhausted {
                    since: since + Self::LOADING_DURATION,
                }
            }
            LoadMorePhase::Exhausted { since }
                if now.saturating_duration_since(since) >= Self::EXHAUSTED_DURATION =>
            {
                LoadMorePhase::Hidden
            }
            phase => phase,
        };
    }

    /// Button text, or `None` once the button is hidden
    pub fn button_label(&self) -> Option<&'static str> {
        match self.phase {
            LoadMorePhase::Ready => Some(Self::READY_LABEL),
            LoadMorePhase::Loading { .. } => Some(Self::LOADING_LABEL),
            LoadMorePhase::Exhausted { .. } => Some(Self::EXHAUSTED_LABEL),
            LoadMorePhase::Hidden => None,
        }
    }

    /// The button is disabled from the first press onward
    pub fn is_enabled(&self) -> bool {
        self.phase == LoadMorePhase::Ready
    }

    /// Note shown in place of the button after it hides
    pub fn end_note(&self) -> Option<&'static str> {
        (self.phase == LoadMorePhase::Hidden).then_some(Self::END_NOTE)
    }
}

impl Default for LoadMoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Blog listing state
#[derive(Debug, Clone, Default)]
pub struct BlogState {
    pub posts: Vec<BlogPost>,
    pub filters: Vec<CategoryFilter>,
    pub active_filter: CategoryFilter,
    /// Filter button under the cursor
    pub selected_filter: usize,
    /// Card under the cursor, as an index into the visible cards
    pub selected_post: usize,
    pub load_more: LoadMoreState,
}

impl BlogState {
    pub fn new(posts: Vec<BlogPost>) -> Self {
        let mut filters = vec![CategoryFilter::All];
        for post in &posts {
            let filter = CategoryFilter::Category(post.category.clone());
            if !filters.contains(&filter) {
                filters.push(filter);
            }
        }
        Self {
            posts,
            filters,
            ..Default::default()
        }
    }

    /// Make `filter` the active one and reset the card cursor
    pub fn apply_filter(&mut self, filter: CategoryFilter) {
        debug!(filter = filter.label(), "blog filter applied");
        if let Some(index) = self.filters.iter().position(|f| *f == filter) {
            self.selected_filter = index;
        }
        self.active_filter = filter;
        self.selected_post = 0;
    }

    /// Apply the filter button under the cursor
    pub fn apply_selected_filter(&mut self) {
        if let Some(filter) = self.filters.get(self.selected_filter).cloned() {
            self.apply_filter(filter);
        }
    }

    pub fn visible_posts(&self) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|p| self.active_filter.matches(p))
            .collect()
    }

    pub fn next_filter(&mut self) {
        if !self.filters.is_empty() {
            self.selected_filter = (self.selected_filter + 1) % self.filters.len();
        }
    }

    pub fn prev_filter(&mut self) {
        if !self.filters.is_empty() {
            self.selected_filter = self
                .selected_filter
                .checked_sub(1)
                .unwrap_or(self.filters.len() - 1);
        }
    }

    pub fn next_post(&mut self) {
        let count = self.visible_posts().len();
        if count > 0 {
            self.selected_post = (self.selected_post + 1).min(count - 1);
        }
    }

    pub fn prev_post(&mut self) {
        self.selected_post = self.selected_post.saturating_sub(1);
    }
}
