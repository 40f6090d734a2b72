//! Named-pipeline registry
//!
//! The indexing and query engines look pipelines up by name, optionally with
//! a field hint, and ask for the scoring policy paired with each name.
//! Registration and lookup may run concurrently from any thread.
//!
//! ```text
//! "stemmed" ──▶ Entry { factory, similarity }
//!                  └─ field overrides: ("stemmed", "title") ──▶ factory
//! ```

use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use strata_analysis::presets::{self, PRESET_NAMES};
use strata_analysis::{AnalysisResources, AnalysisStream, PipelineFactory, PipelineSpec};
use strata_core::{AnalysisConfig, Error, Result};
use strata_search::{ScoringPolicy, Similarity};
use tracing::{debug, info};

/// Scoring policy paired with each preset
pub fn default_policy(name: &str) -> ScoringPolicy {
    match name {
        presets::EXACT
        | presets::KEYWORD
        | presets::GROWTH
        | presets::SHINGLE
        | presets::ALNUM_PARTS => ScoringPolicy::Flat,
        _ => ScoringPolicy::NoLength,
    }
}

#[derive(Clone)]
struct Entry {
    factory: PipelineFactory,
    similarity: Arc<dyn Similarity>,
}

/// Thread-safe map from pipeline name to factory and scoring policy
pub struct AnalyzerRegistry {
    resources: Arc<AnalysisResources>,
    pipelines: DashMap<String, Entry>,
    field_overrides: DashMap<(String, String), PipelineFactory>,
}

impl AnalyzerRegistry {
    /// Empty registry building stages from `config`
    pub fn new(config: &AnalysisConfig) -> Self {
        Self::with_resources(Arc::new(AnalysisResources::new(config)))
    }

    /// Empty registry sharing `resources` (custom stemmer or normalizer)
    pub fn with_resources(resources: Arc<AnalysisResources>) -> Self {
        AnalyzerRegistry {
            resources,
            pipelines: DashMap::new(),
            field_overrides: DashMap::new(),
        }
    }

    /// Registry holding every preset with its default policy
    pub fn with_defaults(config: &AnalysisConfig) -> Result<Self> {
        let registry = Self::new(config);
        registry.register_presets()?;
        Ok(registry)
    }

    /// Register every preset with its default policy
    pub fn register_presets(&self) -> Result<()> {
        for name in PRESET_NAMES {
            let spec = presets::preset(name, self.resources.config())?;
            self.register(name, spec, default_policy(name))?;
        }
        Ok(())
    }

    /// Shared stage resources
    pub fn resources(&self) -> &Arc<AnalysisResources> {
        &self.resources
    }

    /// Register `spec` under `name` with a built-in policy
    ///
    /// Replaces any pipeline already registered under `name`. Fails with
    /// `ConfigError` if the spec does not validate.
    pub fn register(&self, name: &str, spec: PipelineSpec, policy: ScoringPolicy) -> Result<()> {
        self.register_with_similarity(name, spec, policy.similarity())
    }

    /// Register `spec` under `name` with a host-defined policy
    pub fn register_with_similarity(
        &self,
        name: &str,
        spec: PipelineSpec,
        similarity: Arc<dyn Similarity>,
    ) -> Result<()> {
        let factory = PipelineFactory::new(spec, Arc::clone(&self.resources))?;
        info!(
            pipeline = name,
            segmenter = ?factory.spec().segmenter,
            filters = factory.spec().filters.len(),
            similarity = similarity.name(),
            "Registered analysis pipeline"
        );
        self.pipelines.insert(
            name.to_string(),
            Entry {
                factory,
                similarity,
            },
        );
        Ok(())
    }

    /// Use `spec` instead of the named pipeline's own for `field`
    ///
    /// The named pipeline must already be registered; the override shares
    /// its scoring policy.
    pub fn register_field(&self, name: &str, field: &str, spec: PipelineSpec) -> Result<()> {
        if !self.pipelines.contains_key(name) {
            return Err(Error::UnknownPipeline(name.to_string()));
        }
        let factory = PipelineFactory::new(spec, Arc::clone(&self.resources))?;
        debug!(pipeline = name, field, "Registered field override");
        self.field_overrides
            .insert((name.to_string(), field.to_string()), factory);
        Ok(())
    }

    /// Factory for `name`, honoring a field override when `field_hint` has one
    pub fn get_pipeline(&self, name: &str, field_hint: Option<&str>) -> Result<PipelineFactory> {
        if let Some(field) = field_hint {
            let key = (name.to_string(), field.to_string());
            if let Some(factory) = self.field_overrides.get(&key) {
                return Ok(factory.clone());
            }
        }
        self.pipelines
            .get(name)
            .map(|entry| entry.factory.clone())
            .ok_or_else(|| Error::UnknownPipeline(name.to_string()))
    }

    /// Scoring policy paired with `name`
    pub fn similarity(&self, name: &str) -> Result<Arc<dyn Similarity>> {
        self.pipelines
            .get(name)
            .map(|entry| Arc::clone(&entry.similarity))
            .ok_or_else(|| Error::UnknownPipeline(name.to_string()))
    }

    /// Open a stream of pipeline `name` over `text` for `field`
    pub fn open(&self, name: &str, field: &str, text: &str) -> Result<AnalysisStream> {
        Ok(self.get_pipeline(name, Some(field))?.open(field, text))
    }

    /// Check whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.pipelines.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.pipelines.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzerRegistry")
            .field("pipelines", &self.names())
            .field("field_overrides", &self.field_overrides.len())
            .finish()
    }
}
