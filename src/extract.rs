use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::auth::CallerIdentity;
use crate::models::{ExtractionRequest, ExtractionResult, Recipe, RecipeData};
use crate::recipes::{RecipeKey, RECIPES};

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);
const UPLOADED_DOCUMENT: &str = "Uploaded Document";

// ── Lazy static regexes ──────────────────────────────────────────────────────

// Checked in order against the lowercased input; first match wins.
static CLASSIFIERS: Lazy<[(RecipeKey, Regex); 4]> = Lazy::new(|| {
    [
        (RecipeKey::Pasta, Regex::new(r"pasta|spaghetti|italian").unwrap()),
        (RecipeKey::Chicken, Regex::new(r"chicken|curry|roast").unwrap()),
        (RecipeKey::Salad, Regex::new(r"salad|healthy|vegan").unwrap()),
        (RecipeKey::Cake, Regex::new(r"cake|dessert|sweet").unwrap()),
    ]
});

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Auth required.")]
    Unauthenticated,
}

impl ExtractionError {
    /// Status string used in the callable error envelope.
    pub fn status(&self) -> &'static str {
        match self {
            ExtractionError::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

// ── Public API ───────────────────────────────────────────────────────────────

pub async fn extract_recipe(
    request: &ExtractionRequest,
    caller: Option<&CallerIdentity>,
    delay: Duration,
) -> Result<ExtractionResult, ExtractionError> {
    let caller = caller.ok_or(ExtractionError::Unauthenticated)?;
    tracing::debug!(
        uid = %caller.uid,
        document_len = request.pdf_base64.as_deref().map_or(0, str::len),
        "extractRecipe invoked"
    );

    let input = request.url.as_deref().unwrap_or("").to_lowercase();

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    tracing::info!(
        "Processing extraction for: {}",
        if input.is_empty() { "PDF" } else { input.as_str() }
    );

    let key = classify(&input);
    tracing::debug!(recipe = key.as_str(), "classified input");
    Ok(success(RECIPES.lookup(key), request.url.as_deref()))
}

/// Pick a recipe for an already-lowercased input string.
pub fn classify(input: &str) -> RecipeKey {
    CLASSIFIERS
        .iter()
        .find(|(_, re)| re.is_match(input))
        .map(|(key, _)| *key)
        .unwrap_or(RecipeKey::Default)
}

// ── Result construction ──────────────────────────────────────────────────────

fn success(recipe: &'static Recipe, source: Option<&str>) -> ExtractionResult {
    let source_url = match source {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => UPLOADED_DOCUMENT.to_string(),
    };
    ExtractionResult {
        success: true,
        data: RecipeData { recipe, source_url },
    }
}
