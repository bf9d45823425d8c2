use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub category: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u32,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub pdf_base64: Option<String>,
}

/// Inbound envelope of a callable invocation: `{"data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct CallableRequest {
    pub data: ExtractionRequest,
}

/// A static recipe with the caller's source attached.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeData {
    #[serde(flatten)]
    pub recipe: &'static Recipe,
    pub source_url: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractionResult {
    pub success: bool,
    pub data: RecipeData,
}

#[derive(Debug, Serialize)]
pub struct CallableResponse<T> {
    pub result: T,
}

#[derive(Debug, Serialize)]
pub struct CallableErrorBody {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CallableError {
    pub error: CallableErrorBody,
}
