//! List Posts Use Case

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::entities::PostSummary;
use crate::domain::frontmatter;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::Locale;
use crate::error::ContentResult;

/// Listing queries for one locale
pub struct ListPostsUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All posts, newest first
    ///
    /// Undated posts come last. The sort is stable over file-name order, so
    /// equal dates (including every undated post) keep file-name order.
    pub async fn list_records(&self, locale: &Locale) -> ContentResult<Vec<PostSummary>> {
        let documents = self.repo.load_documents(locale).await?;

        let mut summaries: Vec<PostSummary> = documents
            .iter()
            .map(|source| {
                let doc = frontmatter::parse(&source.raw);
                PostSummary::from_document(&doc, &source.stem, locale)
            })
            .collect();
        summaries.sort_by_key(|summary| std::cmp::Reverse(summary.sort_key_ms()));

        Ok(summaries)
    }

    /// Posts whose category matches exactly, newest first
    pub async fn list_records_by_category(
        &self,
        category: &str,
        locale: &Locale,
    ) -> ContentResult<Vec<PostSummary>> {
        let mut summaries = self.list_records(locale).await?;
        summaries.retain(|summary| summary.category == category);
        Ok(summaries)
    }

    /// Distinct categories in use
    pub async fn list_categories(&self, locale: &Locale) -> ContentResult<BTreeSet<String>> {
        Ok(self
            .list_records(locale)
            .await?
            .into_iter()
            .map(|summary| summary.category)
            .collect())
    }
}
