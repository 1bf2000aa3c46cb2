//! Application state module

mod app_state;
mod blog;
mod faq;
mod forms;

pub use app_state::*;
pub use blog::*;
pub use faq::*;
pub use forms::*;
