//! Execution planning: convert parsed CLI data into a job specification used by main.

use crate::data::{self, DataSource, InputStream, Parameters};
use crate::error::PlannerError;

pub struct ComputePlan {
    pub inputs: InputStream,
    pub params: Parameters,
}

pub struct OutputPlan {
    pub flush_each_record: bool,
    /// Batch inputs are rendered as a table in text mode.
    pub tabular: bool,
}

pub fn build_job(
    source: DataSource,
    params: Parameters,
) -> Result<(ComputePlan, OutputPlan), PlannerError> {
    let output_plan = OutputPlan {
        flush_each_record: source.uses_stdin(),
        tabular: source.is_batch(),
    };

    let inputs = data::expand_data_source(source).map_err(PlannerError::from)?;

    Ok((ComputePlan { inputs, params }, output_plan))
}
