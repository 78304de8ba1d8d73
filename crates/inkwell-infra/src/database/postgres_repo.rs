//! PostgreSQL repository implementations.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use sea_orm::{DatabaseTransaction, JoinType};
use uuid::Uuid;

use inkwell_core::domain::{Author, Category, Comment, Post, PostFilter, PostView, User};
use inkwell_core::error::RepoError;
use inkwell_core::ports::{
    AuthorRepository, CategoryRepository, CommentRepository, PostRepository, PostViewRepository,
    UserRepository,
};
use inkwell_core::services::Repositories;

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_category::{self, Entity as PostCategoryEntity};
use super::entity::post_view::{self, Entity as PostViewEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, query_err, write_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL post view repository.
pub type PostgresPostViewRepository = PostgresBaseRepository<PostViewEntity>;

/// Build every repository on one connection pool.
pub fn postgres_repositories(db: Arc<DbConn>) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(db.clone())),
        authors: Arc::new(PostgresAuthorRepository::new(db.clone())),
        categories: Arc::new(PostgresCategoryRepository::new(db.clone())),
        posts: Arc::new(PostgresPostRepository::new(db.clone())),
        comments: Arc::new(PostgresCommentRepository::new(db.clone())),
        views: Arc::new(PostgresPostViewRepository::new(db)),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(%username, "Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, RepoError> {
        let result = CategoryEntity::find()
            .order_by_asc(category::Column::Title)
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Category>, RepoError> {
        let result = CategoryEntity::find()
            .filter(category::Column::Title.eq(title))
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        let result = AuthorEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Author>, RepoError> {
        let result = AuthorEntity::find()
            .filter(author::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn get_or_create(&self, author: Author) -> Result<Author, RepoError> {
        let user_id = author.user_id;
        let inserted = AuthorEntity::insert(author::ActiveModel::from(author))
            .on_conflict(
                OnConflict::column(author::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(write_err)?;
        tracing::debug!(%user_id, created = inserted > 0, "Author get-or-create");

        self.find_by_user(user_id).await?.ok_or(RepoError::NotFound)
    }
}

impl PostgresPostRepository {
    /// Replace the category associations of a post inside `txn`.
    async fn link_categories(
        txn: &DatabaseTransaction,
        post_id: Uuid,
        category_ids: &[Uuid],
    ) -> Result<(), RepoError> {
        PostCategoryEntity::delete_many()
            .filter(post_category::Column::PostId.eq(post_id))
            .exec(txn)
            .await
            .map_err(query_err)?;

        if category_ids.is_empty() {
            return Ok(());
        }

        let rows = category_ids.iter().map(|&category_id| post_category::ActiveModel {
            post_id: Set(post_id),
            category_id: Set(category_id),
        });
        PostCategoryEntity::insert_many(rows)
            .exec_without_returning(txn)
            .await
            .map_err(write_err)?;

        Ok(())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, RepoError> {
        let query = PostEntity::find().order_by_desc(post::Column::CreatedAt);
        let query = match filter {
            PostFilter::All => query,
            PostFilter::Featured => query.filter(post::Column::Featured.eq(true)),
            PostFilter::ByAuthor(user_id) => query
                .join(JoinType::InnerJoin, post::Relation::Author.def())
                .filter(author::Column::UserId.eq(user_id)),
        };

        let result = query.all(self.db.as_ref()).await.map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, post: Post, category_ids: &[Uuid]) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(query_err)?;

        let model = post::ActiveModel::from(post)
            .insert(&txn)
            .await
            .map_err(write_err)?;
        Self::link_categories(&txn, model.id, category_ids).await?;

        txn.commit().await.map_err(query_err)?;
        Ok(model.into())
    }

    async fn update(&self, post: Post, category_ids: Option<&[Uuid]>) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(query_err)?;

        let model = post::ActiveModel::from(post)
            .update(&txn)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                other => write_err(other),
            })?;
        if let Some(ids) = category_ids {
            Self::link_categories(&txn, model.id, ids).await?;
        }

        txn.commit().await.map_err(query_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(query_err)?;

        // Dependents first. The schema cascades as well.
        CommentEntity::delete_many()
            .filter(comment::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(query_err)?;
        PostViewEntity::delete_many()
            .filter(post_view::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(query_err)?;
        PostCategoryEntity::delete_many()
            .filter(post_category::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(query_err)?;
        for column in [post::Column::PreviousPostId, post::Column::NextPostId] {
            PostEntity::update_many()
                .col_expr(column, Expr::value(Option::<Uuid>::None))
                .filter(column.eq(id))
                .exec(&txn)
                .await
                .map_err(query_err)?;
        }

        let result = PostEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        txn.commit().await.map_err(query_err)?;
        Ok(())
    }

    async fn categories(&self, post_id: Uuid) -> Result<Vec<Category>, RepoError> {
        let result = CategoryEntity::find()
            .join(JoinType::InnerJoin, category::Relation::PostCategory.def())
            .filter(post_category::Column::PostId.eq(post_id))
            .order_by_asc(category::Column::Title)
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: Comment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(comment)
            .insert(self.db.as_ref())
            .await
            .map_err(write_err)?;

        Ok(model.into())
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_desc(comment::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count_for_post(&self, post_id: Uuid) -> Result<u64, RepoError> {
        CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .count(self.db.as_ref())
            .await
            .map_err(query_err)
    }
}

#[async_trait]
impl PostViewRepository for PostgresPostViewRepository {
    async fn get_or_create(&self, view: PostView) -> Result<PostView, RepoError> {
        let (user_id, post_id) = (view.user_id, view.post_id);
        PostViewEntity::insert(post_view::ActiveModel::from(view))
            .on_conflict(
                OnConflict::columns([post_view::Column::UserId, post_view::Column::PostId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(write_err)?;

        let result = PostViewEntity::find()
            .filter(post_view::Column::UserId.eq(user_id))
            .filter(post_view::Column::PostId.eq(post_id))
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?;

        result.map(Into::into).ok_or(RepoError::NotFound)
    }

    async fn count_for_post(&self, post_id: Uuid) -> Result<u64, RepoError> {
        PostViewEntity::find()
            .filter(post_view::Column::PostId.eq(post_id))
            .count(self.db.as_ref())
            .await
            .map_err(query_err)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<PostView>, RepoError> {
        let result = PostViewEntity::find()
            .filter(post_view::Column::UserId.eq(user_id))
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
