use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::domain::step::StepPlan;
use crate::utils::error::Result;
use polars::prelude::*;

/// Reads one CSV file, applies the recipe steps in order and writes the result as CSV.
pub struct CsvRecipePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvRecipePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

pub fn apply_plan(frame: LazyFrame, plan: StepPlan) -> LazyFrame {
    match plan {
        StepPlan::WithColumns(exprs) => frame.with_columns(exprs),
        StepPlan::Select(exprs) => frame.select(exprs),
        StepPlan::Filter(predicate) => frame.filter(predicate),
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CsvRecipePipeline<S, C> {
    fn extract(&self) -> Result<LazyFrame> {
        tracing::debug!("Scanning CSV: {}", self.config.input_path());
        let frame = LazyCsvReader::new(self.config.input_path())
            .with_has_header(self.config.has_header())
            .finish()?;
        Ok(frame)
    }

    fn transform(&self, frame: LazyFrame) -> Result<LazyFrame> {
        let mut frame = frame;
        for (position, step) in self.config.steps().iter().enumerate() {
            tracing::debug!("Step {} ({}): {}", position, step.op_name(), step.describe());
            frame = apply_plan(frame, step.compile()?);
        }
        Ok(frame)
    }

    fn load(&self, frame: DataFrame) -> Result<String> {
        let mut frame = frame;
        let mut buffer = Vec::new();
        CsvWriter::new(&mut buffer)
            .include_header(true)
            .finish(&mut frame)?;

        let filename = self.config.output_filename();
        tracing::debug!("Writing {} bytes to {}", buffer.len(), filename);
        self.storage.write_file(filename, &buffer)?;

        Ok(self.storage.location(filename))
    }
}
