use crate::domain::step::RecipeStep;
use crate::utils::error::Result;
use polars::prelude::{DataFrame, LazyFrame};

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// Human-readable location of `path` inside this storage.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn has_header(&self) -> bool;
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> &str;
    fn steps(&self) -> &[RecipeStep];
}

pub trait Pipeline {
    fn extract(&self) -> Result<LazyFrame>;
    fn transform(&self, frame: LazyFrame) -> Result<LazyFrame>;
    fn load(&self, frame: DataFrame) -> Result<String>;
}
