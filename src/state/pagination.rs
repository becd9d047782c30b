//! List pagination across conversational turns
//!
//! A fetched list lives in the session attributes under index keys together
//! with a cursor. Every turn reads out the next batch with ordinal prefixes,
//! writes the advanced cursor back and decides whether to offer more.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::SkillConfig;
use crate::utils::errors::{SkillError, Result};
use super::attributes::SessionAttributes;

/// Prompt appended while more items remain
pub const HEAR_MORE_PROMPT: &str = "Would you like to hear more?";

/// Re-prompt used when "hear more" arrives before any list was started
pub const CHOOSE_CATEGORY_PROMPT: &str =
    "Please say the category you would like to hear the top sellers for. For example, books, movies or music.";

/// One item read out in a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub index: usize,
    pub ordinal: String,
    pub text: String,
}

/// Result of reading out one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub entries: Vec<PageEntry>,
    /// Indices inside the batch that had no stored item
    pub missing: Vec<usize>,
    /// Cursor after this batch
    pub cursor: usize,
    pub speech: String,
    pub reprompt: Option<String>,
    /// The caller must ask a yes/no follow-up when set
    pub should_continue: bool,
}

/// Outcome of [`PaginationEngine::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// No list is active; the session was left untouched
    NoActiveList { speech: String, reprompt: String },
    Page(Page),
}

/// Reads stored result lists out in fixed-size batches
#[derive(Debug, Clone)]
pub struct PaginationEngine {
    config: Arc<SkillConfig>,
}

impl PaginationEngine {
    pub fn new(config: Arc<SkillConfig>) -> Self {
        Self { config }
    }

    /// Store a freshly fetched list and read out its first batch
    pub fn start<S: AsRef<str>>(
        &self,
        session: &mut SessionAttributes,
        category: &str,
        items: &[S],
    ) -> Result<Page> {
        if items.is_empty() {
            return Err(SkillError::InvalidInput(format!(
                "no items to read for category {}",
                category
            )));
        }

        let kept = &items[..items.len().min(self.config.max_items())];
        session.set_items(kept);
        session.set_category(category);
        session.set_cursor(0);

        debug!(category = %category, items = kept.len(), "Starting paginated list");
        let lead_in = format!("Here are the top sellers for {}.", category);
        Ok(self.read_batch(session, 0, Some(lead_in)))
    }

    /// Read out the next batch of the active list
    pub fn advance(&self, session: &mut SessionAttributes) -> Result<Advance> {
        match session.cursor()? {
            None => {
                debug!("Asked for more items without an active list");
                Ok(Advance::NoActiveList {
                    speech: CHOOSE_CATEGORY_PROMPT.to_string(),
                    reprompt: CHOOSE_CATEGORY_PROMPT.to_string(),
                })
            }
            Some(cursor) => Ok(Advance::Page(self.read_batch(session, cursor, None))),
        }
    }

    fn read_batch(&self, session: &mut SessionAttributes, start: usize, lead_in: Option<String>) -> Page {
        let max_items = self.config.max_items();
        if start > max_items {
            warn!(cursor = start, max_items = max_items, "Cursor past end of list, clamping");
        }

        let category = session.category().unwrap_or("selected").to_string();
        let mut cursor = start.min(max_items);
        let mut entries = Vec::new();
        let mut missing = Vec::new();
        let mut sentences: Vec<String> = lead_in.into_iter().collect();

        for _ in 0..self.config.batch_size() {
            if cursor >= max_items {
                break;
            }

            match session.item(cursor).map(|item| item.trim().trim_end_matches('.')) {
                Some(item) if !item.trim().is_empty() => {
                    let position = cursor + 1;
                    let ordinal = self
                        .config
                        .ordinal(position)
                        .map(str::to_string)
                        .unwrap_or_else(|| position.to_string());

                    let text = if position == max_items {
                        format!(
                            "And the {} top seller is {}. Those were the {} top sellers in the {} department.",
                            ordinal.to_lowercase(),
                            item,
                            max_items,
                            category
                        )
                    } else {
                        format!("{}. {}.", ordinal, item)
                    };

                    sentences.push(text.clone());
                    entries.push(PageEntry {
                        index: cursor,
                        ordinal,
                        text,
                    });
                }
                _ => {
                    warn!(index = cursor, category = %category, "Missing list item, skipping");
                    missing.push(cursor);
                }
            }

            cursor += 1;
        }

        session.set_cursor(cursor);

        let should_continue = cursor < max_items;
        let concluded = entries.iter().any(|entry| entry.index + 1 == max_items);
        if should_continue {
            sentences.push(HEAR_MORE_PROMPT.to_string());
        } else if !concluded {
            sentences.push(format!(
                "There are no more top sellers in the {} department.",
                category
            ));
        }

        debug!(
            from = start,
            to = cursor,
            read = entries.len(),
            missing = missing.len(),
            should_continue = should_continue,
            "Read list batch"
        );

        Page {
            entries,
            missing,
            cursor,
            speech: sentences.join(" "),
            reprompt: should_continue.then(|| HEAR_MORE_PROMPT.to_string()),
            should_continue,
        }
    }
}
