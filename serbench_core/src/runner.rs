use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::measure::{Bench, Measurement};
use crate::record::Shape;

/// Results of one benchmark run plus the settings that held for all of it.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub text_codec: String,
    pub binary_codec: String,
    pub compressor: String,
    pub compressor_settings: String,
    pub results: Vec<Measurement>,
}

/// The measurement plan, shapes-major and counts-minor.
fn plan(shapes: &[Shape], counts: &[u32]) -> Vec<(Shape, u32)> {
    shapes
        .iter()
        .flat_map(|&shape| counts.iter().map(move |&count| (shape, count)))
        .collect()
}

impl Bench {
    /// Measure every (shape, count) pair in order.
    ///
    /// Results come back shapes-major, counts-minor. The first failure aborts
    /// the run and no partial batch is returned.
    pub fn run(&self, shapes: &[Shape], counts: &[u32]) -> Result<RunReport> {
        let plan = plan(shapes, counts);
        info!(
            measurements = plan.len(),
            compressor = self.compressor.name(),
            "starting run"
        );

        let results = plan
            .into_iter()
            .map(|(shape, count)| self.measure(shape, count))
            .collect::<Result<Vec<_>>>()?;

        info!(measurements = results.len(), "run complete");
        Ok(self.report(results))
    }

    /// Same contract as [`Bench::run`], with measurements spread over the
    /// rayon thread pool. Result order is preserved.
    pub fn run_parallel(&self, shapes: &[Shape], counts: &[u32]) -> Result<RunReport> {
        let plan = plan(shapes, counts);
        info!(
            measurements = plan.len(),
            threads = rayon::current_num_threads(),
            compressor = self.compressor.name(),
            "starting parallel run"
        );

        let results = plan
            .into_par_iter()
            .map(|(shape, count)| self.measure(shape, count))
            .collect::<Result<Vec<_>>>()?;

        info!(measurements = results.len(), "run complete");
        Ok(self.report(results))
    }

    fn report(&self, results: Vec<Measurement>) -> RunReport {
        RunReport {
            text_codec: self.text.describe(),
            binary_codec: self.binary.describe(),
            compressor: self.compressor.name().to_string(),
            compressor_settings: self.compressor.settings(),
            results,
        }
    }
}
