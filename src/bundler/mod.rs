//! Build-stage bundler configuration
//!
//! The host bundler asks for configuration once per build stage. Only the
//! production JavaScript stage registers the dead-code-elimination
//! optimizer; every other stage keeps the defaults.

use serde::Serialize;

/// Build stages of the host bundler lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildStage {
    Develop,
    DevelopHtml,
    BuildJavascript,
    BuildHtml,
}

/// Optimizer plugins this system can register with the bundler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizerPlugin {
    /// Rewrites utility-library imports per method so unused helpers drop
    /// out of the production bundle
    TreeShake,
}

/// Bundler configuration for one build stage
#[derive(Debug, Clone, Serialize)]
pub struct StageConfig {
    pub stage: BuildStage,
    pub plugins: Vec<OptimizerPlugin>,
}

impl StageConfig {
    fn new(stage: BuildStage) -> Self {
        Self {
            stage,
            plugins: Vec::new(),
        }
    }

    fn register_plugin(&mut self, plugin: OptimizerPlugin) {
        self.plugins.push(plugin);
    }
}

/// Build the bundler configuration for one stage
pub fn configure_stage(stage: BuildStage) -> StageConfig {
    let mut config = StageConfig::new(stage);
    if stage == BuildStage::BuildJavascript {
        config.register_plugin(OptimizerPlugin::TreeShake);
    }
    config
}
