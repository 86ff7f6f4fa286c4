/// Category id as sent by the frontend: the 0-based position of the category
/// in the `GET /categories` list. Storage ids start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientCategoryId(pub i64);

impl ClientCategoryId {
    pub fn storage_id(self) -> i64 {
        self.0 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_listed_category_is_storage_id_one() {
        assert_eq!(ClientCategoryId(0).storage_id(), 1);
        assert_eq!(ClientCategoryId(5).storage_id(), 6);
    }
}
