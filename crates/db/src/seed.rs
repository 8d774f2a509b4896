//! Sample reviews inserted into a freshly created database.

use sqlx::SqlitePool;

use crate::models::review::CreateReview;
use crate::repositories::ReviewRepo;

/// (name, title, rating, comment) of each sample review.
const SAMPLE_REVIEWS: &[(&str, &str, i32, &str)] = &[
    (
        "Alex Thompson",
        "Product Designer",
        5,
        "CTRL revolutionized our workflow. The seamless integration between design and code has cut our development time in half.",
    ),
    (
        "Sarah Chen",
        "Frontend Developer",
        5,
        "As someone who codes, I was skeptical. But CTRL generates clean, maintainable code that I can actually work with. Game changer!",
    ),
    (
        "Marcus Johnson",
        "Startup Founder",
        4,
        "We launched our MVP in weeks instead of months. The visual programming features are intuitive enough for our non-technical team members.",
    ),
];

/// Insert the sample reviews as already approved. Returns how many were
/// written.
///
/// Not idempotent; callers only invoke it when the schema was just created.
pub async fn seed_sample_reviews(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    for &(name, title, rating, comment) in SAMPLE_REVIEWS {
        let input = CreateReview {
            name: name.to_string(),
            title: Some(title.to_string()),
            rating,
            comment: comment.to_string(),
            is_approved: true,
        };
        ReviewRepo::create(pool, &input).await?;
    }

    tracing::info!(count = SAMPLE_REVIEWS.len(), "Seeded sample reviews");
    Ok(SAMPLE_REVIEWS.len())
}
