//! Get Post Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::frontmatter;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::Locale;
use crate::error::{ContentError, ContentResult};

/// Single-post lookup
pub struct GetPostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// First file, in file-name order, whose declared slug or file stem equals `slug`
    pub async fn get_record_by_slug(
        &self,
        slug: &str,
        locale: &Locale,
    ) -> ContentResult<Option<Post>> {
        let documents = self.repo.load_documents(locale).await?;

        for source in documents {
            let doc = frontmatter::parse(&source.raw);
            let declared = doc.get("slug") == Some(slug);
            if declared || source.stem == slug {
                return Ok(Some(Post::from_document(doc, &source.stem, locale)));
            }
        }
        Ok(None)
    }

    /// Like `get_record_by_slug`, with absence as `PostNotFound`
    pub async fn execute(&self, slug: &str, locale: &Locale) -> ContentResult<Post> {
        self.get_record_by_slug(slug, locale)
            .await?
            .ok_or_else(|| ContentError::PostNotFound {
                slug: slug.to_string(),
            })
    }
}
