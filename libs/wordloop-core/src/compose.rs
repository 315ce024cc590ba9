//! Working-batch composition.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{Item, SessionConfig};

/// Select a working batch from the full catalog.
///
/// Overdue learned items are picked first, longest-overdue prioritized and
/// capped at `max_review_items`. The batch is then topped up towards
/// `target_batch_size` with not-yet-learned items in catalog order, capped
/// at `max_new_items`. The combined selection is uniformly shuffled.
///
/// An empty result means nothing is due and no new items remain; callers
/// treat that as an already-complete batch.
pub fn compose_batch<R: Rng + ?Sized>(
    catalog: &[Item],
    now: DateTime<Utc>,
    config: &SessionConfig,
    rng: &mut R,
) -> Vec<Item> {
    let mut review: Vec<Item> = catalog
        .iter()
        .filter(|item| {
            item.review.is_learned && item.review.next_review_date.is_some_and(|due| due <= now)
        })
        .cloned()
        .collect();
    review.sort_by_key(|item| item.review.next_review_date);
    review.truncate(config.max_review_items);

    let wanted_new = config
        .target_batch_size
        .saturating_sub(review.len())
        .min(config.max_new_items);

    let mut batch = review;
    batch.extend(
        catalog
            .iter()
            .filter(|item| !item.review.is_learned)
            .take(wanted_new)
            .cloned(),
    );
    batch.shuffle(rng);
    batch
}
