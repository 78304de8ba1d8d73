//! Taxonomy: the flat set of categories posts are filed under.

use std::sync::Arc;

use crate::domain::Category;
use crate::error::DomainError;
use crate::ports::{BaseRepository, CategoryRepository};

#[derive(Clone)]
pub struct Taxonomy {
    categories: Arc<dyn CategoryRepository>,
}

impl Taxonomy {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.categories.list().await?)
    }

    /// Exact title lookup. No trimming or case folding.
    pub async fn resolve_by_title(&self, title: &str) -> Result<Category, DomainError> {
        self.categories
            .find_by_title(title)
            .await?
            .ok_or_else(|| DomainError::not_found("Category", title))
    }

    /// Resolve every title, failing on the first unknown one.
    pub async fn resolve_all(&self, titles: &[String]) -> Result<Vec<Category>, DomainError> {
        let mut resolved = Vec::with_capacity(titles.len());
        for title in titles {
            resolved.push(self.resolve_by_title(title).await?);
        }
        Ok(resolved)
    }

    pub async fn create_category(&self, title: String) -> Result<Category, DomainError> {
        let category = Category::new(title)?;
        if self.categories.find_by_title(&category.title).await?.is_some() {
            return Err(DomainError::Duplicate(format!(
                "category '{}' already exists",
                category.title
            )));
        }

        let saved = self.categories.insert(category).await?;
        tracing::info!(category_id = %saved.id, title = %saved.title, "Category created");
        Ok(saved)
    }
}
