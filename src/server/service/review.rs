//! Review business rules and the derived bootcamp average rating.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{bootcamp::BootcampRepository, review::ReviewRepository},
    error::AppError,
    model::{
        query::{AdvancedQuery, AdvancedResults},
        review::{CreateReviewParam, Review, UpdateReviewParam},
        user::User,
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, query: &AdvancedQuery) -> Result<AdvancedResults<Review>, AppError> {
        ReviewRepository::new(self.db).get_advanced(query).await
    }

    pub async fn get_by_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<Review>, AppError> {
        ReviewRepository::new(self.db).find_by_bootcamp(bootcamp_id).await
    }

    /// Gets a review with its bootcamp's name and description.
    ///
    /// # Returns
    /// - `Ok(Review)` - The review
    /// - `Err(AppError::NotFound)` - No review with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Review, AppError> {
        ReviewRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| review_not_found(id))
    }

    /// Adds `actor`'s review of a bootcamp.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(AppError::NotFound)` - No bootcamp with that ID
    /// - `Err(AppError::BadRequest)` - Actor already reviewed the bootcamp
    pub async fn create(
        &self,
        actor: &User,
        bootcamp_id: i32,
        param: CreateReviewParam,
    ) -> Result<Review, AppError> {
        let repo = ReviewRepository::new(self.db);

        if BootcampRepository::new(self.db)
            .find_by_id(bootcamp_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Bootcamp not found with id of {}",
                bootcamp_id
            )));
        }

        if repo
            .find_by_user_and_bootcamp(actor.id, bootcamp_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "Duplicate field value entered".to_string(),
            ));
        }

        let review = repo.create(bootcamp_id, actor.id, param).await?;
        self.refresh_average_rating(bootcamp_id).await?;

        Ok(review)
    }

    /// Updates a review written by `actor`.
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        param: UpdateReviewParam,
    ) -> Result<Review, AppError> {
        let existing = self.get_by_id(id).await?;
        actor.ensure_owner(existing.user_id, "update the review")?;

        let review = ReviewRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| review_not_found(id))?;
        self.refresh_average_rating(review.bootcamp_id).await?;

        Ok(review)
    }

    /// Deletes a review written by `actor`.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let existing = self.get_by_id(id).await?;
        actor.ensure_owner(existing.user_id, "delete the review")?;

        ReviewRepository::new(self.db).delete(id).await?;
        self.refresh_average_rating(existing.bootcamp_id).await?;

        Ok(())
    }

    /// Recomputes the average rating of a bootcamp from its current reviews.
    pub async fn refresh_average_rating(&self, bootcamp_id: i32) -> Result<Option<f64>, AppError> {
        let ratings = ReviewRepository::new(self.db)
            .ratings_for_bootcamp(bootcamp_id)
            .await?;
        let average = average_rating(&ratings);

        BootcampRepository::new(self.db)
            .set_average_rating(bootcamp_id, average)
            .await?;

        tracing::debug!("Bootcamp {} average rating is now {:?}", bootcamp_id, average);
        Ok(average)
    }
}

/// Mean rating, `None` without reviews.
pub fn average_rating(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }

    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    Some(sum as f64 / ratings.len() as f64)
}

fn review_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Review not found with id of {}", id))
}
