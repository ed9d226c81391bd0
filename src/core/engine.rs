use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct RecipeEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> RecipeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Returns the location of the written output.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting recipe run");

        tracing::info!("Extracting data...");
        let frame = self.pipeline.extract()?;
        self.monitor.log_stats("Extract");

        tracing::info!("Building expressions...");
        let frame = self.pipeline.transform(frame)?;

        let collected = frame.collect()?;
        tracing::info!(
            "Collected {} rows x {} columns",
            collected.height(),
            collected.width()
        );
        self.monitor.log_stats("Transform");

        tracing::info!("Loading data...");
        let output_path = self.pipeline.load(collected)?;
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        tracing::info!("Output saved to: {}", output_path);
        Ok(output_path)
    }
}
