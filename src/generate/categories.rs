//! Fixed category reference list.

use crate::models::Category;

/// Category names, stored with ids `1..=12` in this order.
pub const CATEGORY_NAMES: [&str; 12] = [
    "Electronics",
    "Clothing",
    "Home & Kitchen",
    "Books",
    "Toys",
    "Sports",
    "Beauty",
    "Groceries",
    "Automotive",
    "Office",
    "Garden",
    "Health",
];

pub fn reference_categories() -> Vec<Category> {
    CATEGORY_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| Category {
            id: idx as i32 + 1,
            name: name.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let categories = reference_categories();
        assert_eq!(categories.len(), 12);
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].name, "Electronics");
        assert_eq!(categories[11].id, 12);
        assert_eq!(categories[11].name, "Health");
        assert_eq!(categories, reference_categories());
    }
}
