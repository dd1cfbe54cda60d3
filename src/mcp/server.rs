//! Freezer Batch MCP Server Implementation
//!
//! Implements the MCP server with all freezer batch tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::models::Ingredient;
use crate::tools::status::StatusTracker;
use crate::tools::{batches, recipes, ToolError};
use crate::units::VolumeUnit;

/// Freezer Batch MCP Service
#[derive(Clone)]
pub struct FreezerBatchService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: ServerConfig,
    tool_router: ToolRouter<FreezerBatchService>,
}

impl FreezerBatchService {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config))),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn invalid_params(e: ToolError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn recipe_not_found(recipe_id: &str) -> Result<CallToolResult, McpError> {
    to_json(&serde_json::json!({
        "error": "Recipe not found",
        "recipe_id": recipe_id,
    }))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientParams {
    /// Ingredient name
    pub name: String,
    /// Amount for a single serving (>= 0)
    pub amount: f64,
    /// ml, oz, cl, dash, barspoon, tsp or tbsp (unknown units are treated as ml)
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Alcohol by volume, percent (0-100)
    #[serde(default)]
    pub abv: f64,
    /// Mark as the spirit whose bottle holds the batch
    #[serde(default)]
    pub is_base_spirit: bool,
}

fn default_unit() -> String { "oz".to_string() }

impl From<IngredientParams> for Ingredient {
    fn from(p: IngredientParams) -> Self {
        Ingredient {
            name: p.name,
            amount: p.amount,
            unit: VolumeUnit::parse_lenient(&p.unit),
            abv: p.abv,
            is_base_spirit: p.is_base_spirit,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateFreeformBatchParams {
    /// Single-serving recipe
    pub ingredients: Vec<IngredientParams>,
    /// Bottle volume in ml (default 750)
    pub bottle_ml: Option<f64>,
    /// Share of the bottle reserved for water, percent (default 20)
    pub dilution_percent: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateReferenceBatchParams {
    /// Recipe id from list_recipes (e.g. "margarita")
    pub recipe_id: String,
    /// Bottle volume in ml (default 750)
    pub bottle_ml: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateRecipeBatchParams {
    /// Recipe id from list_recipes (e.g. "negroni")
    pub recipe_id: String,
    /// Bottle volume in ml (default 750)
    pub bottle_ml: Option<f64>,
    /// Dilution percent (defaults to the recipe's recommendation)
    pub dilution_percent: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetRecipeParams {
    /// Recipe id
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SuggestAbvParams {
    /// Free-text ingredient name
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertVolumeParams {
    pub amount: f64,
    /// ml, oz, cl, dash, barspoon, tsp or tbsp
    pub unit: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FreezerBatchService {
    // --- Status ---

    #[tool(description = "Get the current status of the freezer batch service including version, catalogue size, configured defaults, and process information")]
    async fn freezer_batch_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for calculating freezer batches. Call this when unsure which batch tool to use or how to read a result.")]
    fn batch_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::BATCH_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(BATCH_INSTRUCTIONS)]))
    }

    // --- Batches ---

    #[tool(description = "Convert a single-serving recipe into a full-bottle freezer batch: pour-off, ingredients to add, water, final ABV and freeze status")]
    fn calculate_freeform_batch(&self, Parameters(p): Parameters<CalculateFreeformBatchParams>) -> Result<CallToolResult, McpError> {
        let ingredients: Vec<Ingredient> = p.ingredients.into_iter().map(Ingredient::from).collect();
        let result = batches::calculate_freeform_batch(&self.config, &ingredients, p.bottle_ml, p.dilution_percent)
            .map_err(invalid_params)?;
        to_json(&result)
    }

    #[tool(description = "Scale a tested reference batch (measured for 750 ml) to any bottle size, rounded to quarter ounces")]
    fn calculate_reference_batch(&self, Parameters(p): Parameters<CalculateReferenceBatchParams>) -> Result<CallToolResult, McpError> {
        match batches::calculate_reference_batch(&self.config, &p.recipe_id, p.bottle_ml).map_err(invalid_params)? {
            Some(result) => to_json(&result),
            None => recipe_not_found(&p.recipe_id),
        }
    }

    #[tool(description = "Batch a catalogue recipe from its single-serving measurements, with its recommended dilution unless one is given")]
    fn calculate_recipe_batch(&self, Parameters(p): Parameters<CalculateRecipeBatchParams>) -> Result<CallToolResult, McpError> {
        match batches::calculate_recipe_batch(&self.config, &p.recipe_id, p.bottle_ml, p.dilution_percent)
            .map_err(invalid_params)?
        {
            Some(result) => to_json(&result),
            None => recipe_not_found(&p.recipe_id),
        }
    }

    // --- Catalogue ---

    #[tool(description = "List catalogue recipes with base spirit and recommended dilution")]
    fn list_recipes(&self) -> Result<CallToolResult, McpError> {
        to_json(&recipes::list_recipes())
    }

    #[tool(description = "Get a catalogue recipe: single-serving ingredients, 750 ml reference batch, and recommended dilution")]
    fn get_recipe(&self, Parameters(p): Parameters<GetRecipeParams>) -> Result<CallToolResult, McpError> {
        match recipes::get_recipe(&p.id) {
            Some(detail) => to_json(&detail),
            None => recipe_not_found(&p.id),
        }
    }

    // --- Helpers ---

    #[tool(description = "Suggest a default ABV for an ingredient name. Best effort; returns null when nothing matches")]
    fn suggest_abv(&self, Parameters(p): Parameters<SuggestAbvParams>) -> Result<CallToolResult, McpError> {
        to_json(&recipes::suggest_ingredient_abv(&p.name))
    }

    #[tool(description = "Convert a bar measurement to milliliters and fluid ounces")]
    fn convert_volume(&self, Parameters(p): Parameters<ConvertVolumeParams>) -> Result<CallToolResult, McpError> {
        let result = batches::convert_volume(p.amount, &p.unit).map_err(invalid_params)?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FreezerBatchService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "freezer-batch".into(),
                version: crate::about::VERSION.into(),
                title: Some(crate::about::DISPLAY_NAME.into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Freezer Batch - converts a full bottle of spirit into a freezer-ready cocktail batch. \
                 Call batch_instructions first if unsure. \
                 Batches: calculate_reference_batch, calculate_recipe_batch, calculate_freeform_batch. \
                 Catalogue: list_recipes, get_recipe. \
                 Helpers: suggest_abv, convert_volume, freezer_batch_status."
                    .into(),
            ),
        }
    }
}
