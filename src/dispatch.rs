//! Ordered-fallback dispatch across inference backends.

use anyhow::{anyhow, Result};
use tracing::{debug, info};

use crate::backends::{fallback, mlx, pipeline, DependencySet, Request};
use crate::config::Settings;

/// One attempt in the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Accelerated,
    General,
    Fallback,
}

/// Compute the ordered list of stages worth attempting for a request.
pub fn plan(request: &Request, deps: DependencySet) -> Vec<Stage> {
    let mut stages = Vec::new();
    if request.accelerated() && deps.mlx {
        stages.push(Stage::Accelerated);
    }
    if deps.general && !request.accelerated() {
        stages.push(Stage::General);
    }
    if deps.general {
        stages.push(Stage::Fallback);
    }
    stages
}

/// Try each planned stage in order, returning the first usable summary.
pub async fn summarize(
    settings: &Settings,
    request: &Request,
    deps: DependencySet,
) -> Result<String> {
    let stages = plan(request, deps);
    debug!(?stages, "dispatch plan");

    for stage in stages {
        let outcome = match stage {
            Stage::Accelerated => mlx::summarize(settings, request),
            Stage::General => pipeline::summarize(settings, request),
            Stage::Fallback => fallback::summarize(settings, request),
        };
        match outcome {
            Some(summary) if !summary.trim().is_empty() => {
                info!(?stage, "backend produced a summary");
                return Ok(summary.trim().to_string());
            }
            _ => debug!(?stage, "no summary from stage, advancing"),
        }
    }

    Err(failure_diagnostic(request))
}

/// Model-family-specific diagnostic for an exhausted dispatch.
pub fn failure_diagnostic(request: &Request) -> anyhow::Error {
    if request.in_accelerated_namespace() {
        anyhow!(
            "could not summarize with {}: accelerated models need a build with the `metal` \
             feature, the --use-mlx flag, and Apple-silicon hardware",
            request.model
        )
    } else {
        anyhow!("failed to generate a summary with {}", request.model)
    }
}
