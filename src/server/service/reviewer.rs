use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{review::ReviewDto, reviewer::ReviewerDto},
    server::{
        data::{review::ReviewRepository, reviewer::ReviewerRepository},
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        util::name::find_duplicate,
    },
};

pub struct ReviewerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewerService<'a> {
    /// Creates a new instance of [`ReviewerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_reviewers(&self) -> Result<Vec<ReviewerDto>, Error> {
        let reviewer_repo = ReviewerRepository::new(self.db);

        let reviewers = reviewer_repo.get_all().await?;

        Ok(reviewers.into_iter().map(ReviewerDto::from).collect())
    }

    pub async fn get_reviewer(&self, id: i32) -> Result<ReviewerDto, Error> {
        let reviewer_repo = ReviewerRepository::new(self.db);

        let reviewer = reviewer_repo
            .get_by_id(id)
            .await?
            .ok_or(ResourceError::not_found(Resource::Reviewer, id))?;

        Ok(reviewer.into())
    }

    pub async fn get_reviews_of_reviewer(&self, reviewer_id: i32) -> Result<Vec<ReviewDto>, Error> {
        let reviewer_repo = ReviewerRepository::new(self.db);

        if !reviewer_repo.exists(reviewer_id).await? {
            return Err(ResourceError::not_found(Resource::Reviewer, reviewer_id).into());
        }

        let reviews = reviewer_repo.get_reviews_by_reviewer(reviewer_id).await?;

        Ok(reviews.into_iter().map(ReviewDto::from).collect())
    }

    /// Creates a reviewer unless one with the same last name exists
    pub async fn create_reviewer(&self, reviewer: ReviewerDto) -> Result<ReviewerDto, Error> {
        let reviewer_repo = ReviewerRepository::new(self.db);

        let existing = reviewer_repo.get_all().await?;
        if let Some(name) = find_duplicate(
            existing.iter().map(|r| r.last_name.as_str()),
            &reviewer.last_name,
        ) {
            return Err(ResourceError::already_exists(Resource::Reviewer, name).into());
        }

        let created = reviewer_repo
            .create(reviewer.first_name, reviewer.last_name)
            .await?;

        tracing::debug!("Created reviewer {}", created.id);

        Ok(created.into())
    }

    pub async fn update_reviewer(&self, id: i32, reviewer: ReviewerDto) -> Result<(), Error> {
        if reviewer.id != id {
            return Err(ResourceError::id_mismatch(Resource::Reviewer, id, reviewer.id).into());
        }

        let reviewer_repo = ReviewerRepository::new(self.db);

        if !reviewer_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Reviewer, id).into());
        }

        if reviewer_repo
            .update(id, reviewer.first_name, reviewer.last_name)
            .await?
            .is_none()
        {
            return Err(ResourceError::not_saved(Resource::Reviewer, "update", id).into());
        }

        Ok(())
    }

    /// Deletes a reviewer together with every review they wrote
    ///
    /// Both deletes share one transaction.
    pub async fn delete_reviewer(&self, id: i32) -> Result<(), Error> {
        let reviewer_repo = ReviewerRepository::new(self.db);

        if !reviewer_repo.exists(id).await? {
            return Err(ResourceError::not_found(Resource::Reviewer, id).into());
        }

        let txn = self.db.begin().await?;

        let reviews = ReviewRepository::new(&txn)
            .delete_reviews_by_reviewer(id)
            .await?;

        let result = ReviewerRepository::new(&txn).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::not_saved(Resource::Reviewer, "delete", id).into());
        }

        txn.commit().await?;

        tracing::debug!(
            "Deleted reviewer {} and {} review(s)",
            id,
            reviews.rows_affected
        );

        Ok(())
    }
}
