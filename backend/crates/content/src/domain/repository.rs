//! Repository Traits

use crate::domain::entities::SourceDocument;
use crate::domain::value_objects::Locale;
use crate::error::ContentResult;

/// Source of raw content files
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Every readable content file for `locale`, ordered by file name
    ///
    /// A locale with no content location yields an empty list.
    async fn load_documents(&self, locale: &Locale) -> ContentResult<Vec<SourceDocument>>;
}
