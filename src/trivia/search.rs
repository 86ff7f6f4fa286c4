use crate::db::Question;

/// Keeps the questions whose text contains `term`, ignoring case.
pub fn filter_by_term(questions: Vec<Question>, term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}
