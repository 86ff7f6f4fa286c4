use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

use super::ClientCategoryId;

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Category(ClientCategoryId),
}

impl QuizCategory {
    pub fn storage_filter(self) -> Option<i64> {
        match self {
            QuizCategory::All => None,
            QuizCategory::Category(id) => Some(id.storage_id()),
        }
    }
}

/// Picks one question whose id is not in `previous`, uniformly at random.
/// `None` once every candidate has been asked.
pub fn select_next<'a, R>(
    candidates: &'a [Question],
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    unseen.choose(rng).copied()
}
