use anyhow::Context;
use chrono::NaiveDate;

use crate::metadata::Metadata;

use super::utils::format_date;

const DEFAULT_TAG: &str = "GENERAL";

/// Front matter of a post after the required keys have been checked.
#[derive(Debug, Clone)]
pub(crate) struct ArticleMetadata {
    /// The `date` value as written; doubles as the article's element id.
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub tags: Vec<String>,
}

impl ArticleMetadata {
    pub fn from_metadata(meta: &Metadata) -> anyhow::Result<Self> {
        let raw_date = meta.get("date").context("missing `date` in front matter")?;
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format {raw_date:?}, expected YYYY-MM-DD"))?;
        let title = meta.get("title").context("missing `title` in front matter")?;

        Ok(Self {
            id: raw_date.to_string(),
            date,
            title: title.to_string(),
            tags: meta.tags().to_vec(),
        })
    }

    pub fn display_date(&self) -> String {
        format_date(self.date)
    }

    pub fn primary_tag(&self) -> &str {
        self.tags.first().map_or(DEFAULT_TAG, String::as_str)
    }
}

/// A rendered post, ready to be placed on the page.
#[derive(Debug, Clone)]
pub(crate) struct Post {
    pub meta: ArticleMetadata,
    pub fragment: String,
    pub file_name: String,
}
