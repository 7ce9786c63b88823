use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;
use crate::features::questions::dtos::QuestionResponseDto;

/// Response DTO for `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    pub success: bool,
    /// Category label keyed by category id
    pub categories: BTreeMap<i32, String>,
    pub total_categories: usize,
}

impl From<Vec<Category>> for CategoriesResponseDto {
    fn from(categories: Vec<Category>) -> Self {
        let categories: BTreeMap<i32, String> = categories
            .into_iter()
            .map(|c| (c.id, c.category_type))
            .collect();

        Self {
            success: true,
            total_categories: categories.len(),
            categories,
        }
    }
}

/// Response DTO for `GET /categories/{category_id}/questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponseDto {
    pub success: bool,
    pub total_questions: usize,
    /// Category of the first matched question
    pub current_category: i32,
    pub questions: Vec<QuestionResponseDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_categories_serialize_as_id_keyed_map() {
        let dto = CategoriesResponseDto::from(vec![
            Category {
                id: 2,
                category_type: "Art".to_string(),
            },
            Category {
                id: 1,
                category_type: "Science".to_string(),
            },
        ]);

        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            json!({
                "success": true,
                "categories": {"1": "Science", "2": "Art"},
                "total_categories": 2
            })
        );
    }

    #[test]
    fn test_no_categories_is_empty_map() {
        let dto = CategoriesResponseDto::from(Vec::new());
        assert!(dto.success);
        assert!(dto.categories.is_empty());
        assert_eq!(dto.total_categories, 0);
    }
}
