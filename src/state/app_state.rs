//! Application state definitions

use super::blog::BlogState;
use super::faq::FaqState;
use super::forms::SharedSignupForm;
use crate::content::SiteContent;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Blog,
    Faq,
    Subscribe,
}

impl View {
    /// Views in sidebar order
    pub const ALL: [View; 3] = [View::Blog, View::Faq, View::Subscribe];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Blog => "Blog",
            Self::Faq => "FAQ",
            Self::Subscribe => "Subscribe",
        }
    }

    /// Key that jumps to this view from outside the form
    pub fn shortcut(&self) -> char {
        match self {
            Self::Blog => '1',
            Self::Faq => '2',
            Self::Subscribe => '3',
        }
    }

    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Subscribe)
    }
}

/// Focus within the blog view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlogFocus {
    #[default]
    Filters,
    Posts,
    LoadMore,
}

impl BlogFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Filters => Self::Posts,
            Self::Posts => Self::LoadMore,
            Self::LoadMore => Self::Filters,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub blog: BlogState,
    pub blog_focus: BlogFocus,
    pub faq: FaqState,
    pub signup: SharedSignupForm,
}

impl AppState {
    pub fn new(content: SiteContent) -> Self {
        Self {
            blog: BlogState::new(content.posts),
            faq: FaqState::new(content.faqs),
            ..Default::default()
        }
    }
}
