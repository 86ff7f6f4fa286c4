//! Pure question handling: paging, searching, quiz selection and the
//! client/storage category id mapping. Nothing in here touches the database.

pub mod category;
pub mod pager;
pub mod quiz;
pub mod search;

pub use category::ClientCategoryId;
pub use pager::{paginate, Page, QUESTIONS_PER_PAGE};
pub use quiz::{select_next, QuizCategory};
pub use search::filter_by_term;
