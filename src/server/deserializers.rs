use serde::{Deserialize, Deserializer};

use crate::trivia::Page;

// `?page=` behaves like a form field: anything that is not a positive number means page 1
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<Page, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .and_then(Page::new)
        .unwrap_or_default())
}
