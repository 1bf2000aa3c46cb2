//! Blog and FAQ content shown by the TUI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::state::{BlogPost, FaqItem};

/// Everything the blog and FAQ views display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub faqs: Vec<FaqItem>,
}

impl SiteContent {
    /// Load content from `path`, or fall back to the built-in catalog
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading content {}", path.display()))?;
        let content = serde_json::from_str(&raw)
            .with_context(|| format!("parsing content {}", path.display()))?;
        Ok(content)
    }
}

fn post(title: &str, category: &str, excerpt: &str, read_minutes: u32) -> BlogPost {
    BlogPost {
        title: title.to_string(),
        category: category.to_string(),
        excerpt: excerpt.to_string(),
        read_minutes,
    }
}

fn faq(question: &str, answer: &str) -> FaqItem {
    FaqItem {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            posts: vec![
                post(
                    "The Cyber Hub Brunch Wars",
                    "food",
                    "Three cafes, one weekend crowd, zero free tables.",
                    4,
                ),
                post(
                    "Who Really Runs Sector 29 After Midnight",
                    "nightlife",
                    "The bouncers know. Now so do we.",
                    6,
                ),
                post(
                    "Golf Course Road's Quietest Feud",
                    "society",
                    "Two RWAs, one parking lot and a very long WhatsApp thread.",
                    5,
                ),
                post(
                    "Momos of Gurgaon, Ranked Without Mercy",
                    "food",
                    "We ate forty plates so you don't have to.",
                    7,
                ),
                post(
                    "The Aravalli Sunrise Crowd",
                    "events",
                    "Fitness, influencers and at least one marriage proposal.",
                    3,
                ),
            ],
            faqs: vec![
                faq(
                    "What is GossipYah?",
                    "A monthly newsletter about what Gurgaon is talking about, delivered on WhatsApp.",
                ),
                faq(
                    "How often will I hear from you?",
                    "Once a month, plus the occasional breaking story.",
                ),
                faq(
                    "Is it free?",
                    "Yes. Sign up with your name and mobile number.",
                ),
                faq(
                    "How do I unsubscribe?",
                    "Reply STOP to any message and you will be removed.",
                ),
            ],
        }
    }
}
