//! Query parameters and pagination for the dataset routes.

use serde::{Deserialize, Serialize};

use super::{GrammarPoint, WordEntry};

const DEFAULT_PAGE_SIZE: usize = 50;
const MAX_PAGE_SIZE: usize = 200;

#[derive(Debug, Default, Deserialize)]
pub struct VocabularyQuery {
    pub level: Option<String>,
    pub topic: Option<String>,
    pub pos: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl VocabularyQuery {
    pub fn matches(&self, word: &WordEntry) -> bool {
        if let Some(level) = &self.level
            && !word.level.eq_ignore_ascii_case(level)
        {
            return false;
        }
        if let Some(topic) = &self.topic
            && !contains_ci(&word.topic, topic)
        {
            return false;
        }
        if let Some(pos) = &self.pos
            && !word.part_of_speech.eq_ignore_ascii_case(pos)
        {
            return false;
        }
        if let Some(search) = &self.search
            && !contains_ci(&word.base_word, search)
            && !contains_ci(&word.guideword, search)
        {
            return false;
        }
        true
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GrammarQuery {
    pub level: Option<String>,
    #[serde(rename = "super")]
    pub super_category: Option<String>,
    #[serde(rename = "sub")]
    pub sub_category: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl GrammarQuery {
    pub fn matches(&self, point: &GrammarPoint) -> bool {
        if let Some(level) = &self.level
            && !point.level.eq_ignore_ascii_case(level)
        {
            return false;
        }
        if let Some(category) = &self.super_category
            && !contains_ci(&point.super_category, category)
        {
            return false;
        }
        if let Some(category) = &self.sub_category
            && !contains_ci(&point.sub_category, category)
        {
            return false;
        }
        if let Some(search) = &self.search
            && !contains_ci(&point.guideword, search)
            && !contains_ci(&point.can_do, search)
        {
            return false;
        }
        true
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Slice one page out of the full filtered result set.
    pub fn build(items: Vec<T>, page: Option<usize>, limit: Option<usize>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let total = items.len();
        let total_pages = total.div_ceil(limit);
        let data: Vec<T> = items
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();
        Page {
            data,
            pagination: Pagination {
                page,
                limit,
                total,
                total_pages,
            },
        }
    }
}
