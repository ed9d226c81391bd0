pub mod engine;
pub mod recipe_pipeline;

pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::domain::step::{RecipeStep, StepPlan};
pub use crate::utils::error::Result;
