//! Training configurator and validator component.
//!
//! Prepares and validates configuration for a downstream AutoML tabular
//! training job. All actual validation runs inside a fixed external
//! container image; this component only marshals its typed inputs into
//! that container's command-line contract and declares artifact bindings.
//!
//! # Wire contract
//!
//! The argument list is the subcommand literal followed by `--flag=value`
//! fragments in the fixed order laid out in `field_table`. The external
//! binary's parser is versioned with the image; reordering fields or
//! changing an encoding is a breaking change.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::args::{ArgField, ArgListBuilder, ArgValue};
use crate::models::{ArtifactBinding, ArtifactRef, ContainerStep};

use super::ComponentError;

/// Versioned container image that performs the actual configuration and
/// validation. Changing training/validation logic means publishing a new
/// image version, not modifying this component.
pub const CONFIGURATOR_IMAGE: &str =
    "us-docker.pkg.dev/vertex-ai/automl-tabular/feature-transform-engine:20230817_0125";

/// Subcommand literal, always the first invocation argument.
pub const CONFIGURATOR_SUBCOMMAND: &str = "training_configurator_and_validator";

/// Artifact references for the configurator step.
///
/// Three inputs read by the container, two outputs written by it. The
/// component passes URIs through as strings and never touches contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguratorArtifacts {
    /// Dataset stats generated by the feature transform engine.
    pub dataset_stats: ArtifactRef,
    /// Schema of input data to the model at training time.
    pub training_schema: ArtifactRef,
    /// Schema of input data to the model at serving time.
    pub instance_schema: ArtifactRef,
    /// Output: the tabular example gen metadata.
    pub metadata: ArtifactRef,
    /// Output: the instance baseline.
    pub instance_baseline: ArtifactRef,
}

impl ConfiguratorArtifacts {
    /// Create the artifact set from the three inputs and two outputs.
    pub fn new(
        dataset_stats: ArtifactRef,
        training_schema: ArtifactRef,
        instance_schema: ArtifactRef,
        metadata: ArtifactRef,
        instance_baseline: ArtifactRef,
    ) -> Self {
        Self {
            dataset_stats,
            training_schema,
            instance_schema,
            metadata,
            instance_baseline,
        }
    }

    /// All five references, for shape validation.
    fn all(&self) -> [&ArtifactRef; 5] {
        [
            &self.dataset_stats,
            &self.training_schema,
            &self.instance_schema,
            &self.metadata,
            &self.instance_baseline,
        ]
    }
}

/// Typed parameter set for the configurator step.
///
/// Always-emit fields keep their sentinel defaults (`""`, `-1`, `false`,
/// `[]`, `{}`) and still appear on the command line when unset. Conditional
/// fields are `Option`s; `None` means the flag is entirely absent from the
/// argument list. Values are passed through without range validation - the
/// external container rejects out-of-range configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguratorParams {
    /// JSON string of data split example counts for train, validate, and
    /// test splits.
    #[serde(default)]
    pub split_example_counts: String,

    /// Target column of input data.
    #[serde(default)]
    pub target_column: String,

    /// Weight column of input data.
    #[serde(default)]
    pub weight_column: String,

    /// Model prediction type. One of "classification", "regression",
    /// "time_series".
    #[serde(default)]
    pub prediction_type: String,

    /// Objective function the model is optimizing towards. If unset, the
    /// container picks a default for the prediction type.
    #[serde(default)]
    pub optimization_objective: String,

    /// Required when optimization_objective is
    /// "maximize-precision-at-recall". `-1` means unset but is still
    /// emitted.
    #[serde(default = "default_neg_one_f64")]
    pub optimization_objective_recall_value: f64,

    /// Required when optimization_objective is
    /// "maximize-recall-at-precision". `-1` means unset but is still
    /// emitted.
    #[serde(default = "default_neg_one_f64")]
    pub optimization_objective_precision_value: f64,

    /// Whether evaluation runs in the training pipeline.
    #[serde(default)]
    pub run_evaluation: bool,

    /// Whether distillation should be applied to the training.
    #[serde(default)]
    pub run_distill: bool,

    /// If enabled, the model fits a distribution that captures prediction
    /// uncertainty.
    #[serde(default)]
    pub enable_probabilistic_inference: bool,

    /// Deprecated singular time series identifier column. Coexists with
    /// the plural field: both render independently when supplied, and no
    /// exclusivity is enforced here (the container owns that check, if
    /// any). Used by forecasting only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_series_identifier_column: Option<String>,

    /// The list of time series identifier columns. Used by forecasting
    /// only.
    #[serde(default)]
    pub time_series_identifier_columns: Vec<String>,

    /// The column that indicates the time. Used by forecasting only.
    #[serde(default)]
    pub time_column: String,

    /// The column names of the time series attributes.
    #[serde(default)]
    pub time_series_attribute_columns: Vec<String>,

    /// The names of the columns that are available at forecast time.
    #[serde(default)]
    pub available_at_forecast_columns: Vec<String>,

    /// The names of the columns that are not available at forecast time.
    #[serde(default)]
    pub unavailable_at_forecast_columns: Vec<String>,

    /// All quantiles that the model needs to predict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantiles: Option<Vec<f64>>,

    /// The length of the context window. `-1` means unset but is still
    /// emitted.
    #[serde(default = "default_neg_one_i64")]
    pub context_window: i64,

    /// The length of the forecast horizon. `-1` means unset but is still
    /// emitted.
    #[serde(default = "default_neg_one_i64")]
    pub forecast_horizon: i64,

    /// The forecasting model type, e.g. l2l, seq2seq, tft.
    #[serde(default)]
    pub forecasting_model_type: String,

    /// Mapping of auto and/or type resolutions to feature columns. The
    /// supported types are auto, categorical, numeric, text, and
    /// timestamp. Insertion order is preserved on the wire.
    #[serde(default)]
    pub forecasting_transformations: IndexMap<String, Vec<String>>,

    /// Stage 1 training budget in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_1_deadline_hours: Option<f64>,

    /// Stage 2 training budget in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_2_deadline_hours: Option<f64>,

    /// Time series attribute columns that define the time series
    /// hierarchy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_columns: Option<Vec<String>>,

    /// Weight of the loss for predictions aggregated over time series in
    /// the same group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_total_weight: Option<f64>,

    /// Weight of the loss for predictions aggregated over the horizon for
    /// a single time series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_total_weight: Option<f64>,

    /// Weight of the loss for predictions aggregated over both the
    /// horizon and time series in the same hierarchy group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_temporal_total_weight: Option<f64>,
}

fn default_neg_one_f64() -> f64 {
    -1.0
}

fn default_neg_one_i64() -> i64 {
    -1
}

impl Default for ConfiguratorParams {
    fn default() -> Self {
        Self {
            split_example_counts: String::new(),
            target_column: String::new(),
            weight_column: String::new(),
            prediction_type: String::new(),
            optimization_objective: String::new(),
            optimization_objective_recall_value: default_neg_one_f64(),
            optimization_objective_precision_value: default_neg_one_f64(),
            run_evaluation: false,
            run_distill: false,
            enable_probabilistic_inference: false,
            time_series_identifier_column: None,
            time_series_identifier_columns: Vec::new(),
            time_column: String::new(),
            time_series_attribute_columns: Vec::new(),
            available_at_forecast_columns: Vec::new(),
            unavailable_at_forecast_columns: Vec::new(),
            quantiles: None,
            context_window: default_neg_one_i64(),
            forecast_horizon: default_neg_one_i64(),
            forecasting_model_type: String::new(),
            forecasting_transformations: IndexMap::new(),
            stage_1_deadline_hours: None,
            stage_2_deadline_hours: None,
            group_columns: None,
            group_total_weight: None,
            temporal_total_weight: None,
            group_temporal_total_weight: None,
        }
    }
}

impl ConfiguratorParams {
    /// Set the deprecated singular time series identifier column.
    pub fn with_time_series_identifier_column(mut self, column: impl Into<String>) -> Self {
        self.time_series_identifier_column = Some(column.into());
        self
    }

    /// Set the quantiles the model needs to predict.
    pub fn with_quantiles(mut self, quantiles: Vec<f64>) -> Self {
        self.quantiles = Some(quantiles);
        self
    }

    /// Set the stage 1 training budget in hours.
    pub fn with_stage_1_deadline_hours(mut self, hours: f64) -> Self {
        self.stage_1_deadline_hours = Some(hours);
        self
    }

    /// Set the stage 2 training budget in hours.
    pub fn with_stage_2_deadline_hours(mut self, hours: f64) -> Self {
        self.stage_2_deadline_hours = Some(hours);
        self
    }

    /// Set the hierarchy group columns.
    pub fn with_group_columns(mut self, columns: Vec<String>) -> Self {
        self.group_columns = Some(columns);
        self
    }

    /// Set the group aggregated loss weight.
    pub fn with_group_total_weight(mut self, weight: f64) -> Self {
        self.group_total_weight = Some(weight);
        self
    }

    /// Set the temporal aggregated loss weight.
    pub fn with_temporal_total_weight(mut self, weight: f64) -> Self {
        self.temporal_total_weight = Some(weight);
        self
    }

    /// Set the group-temporal aggregated loss weight.
    pub fn with_group_temporal_total_weight(mut self, weight: f64) -> Self {
        self.group_temporal_total_weight = Some(weight);
        self
    }
}

/// The configurator component: artifacts plus parameters, marshalled into
/// a container step descriptor.
#[derive(Debug, Clone)]
pub struct TrainingConfiguratorAndValidator {
    artifacts: ConfiguratorArtifacts,
    params: ConfiguratorParams,
}

impl TrainingConfiguratorAndValidator {
    /// Create the component from its artifact set and parameters.
    pub fn new(artifacts: ConfiguratorArtifacts, params: ConfiguratorParams) -> Self {
        Self { artifacts, params }
    }

    /// The declared field table in wire order.
    ///
    /// This order matches the external container's argument parser and is
    /// authoritative: the step descriptor emits fields exactly as listed
    /// here, with conditional fields dropping out when unset.
    fn field_table(&self) -> Vec<ArgField> {
        let a = &self.artifacts;
        let p = &self.params;
        vec![
            ArgField::always("instance_schema_path", a.instance_schema.uri.as_str()),
            ArgField::always("training_schema_path", a.training_schema.uri.as_str()),
            ArgField::always("dataset_stats_path", a.dataset_stats.uri.as_str()),
            ArgField::always("split_example_counts", p.split_example_counts.as_str()),
            ArgField::always("target_column", p.target_column.as_str()),
            ArgField::always("weight_column", p.weight_column.as_str()),
            ArgField::always("prediction_type", p.prediction_type.as_str()),
            ArgField::always("optimization_objective", p.optimization_objective.as_str()),
            ArgField::always(
                "optimization_objective_recall_value",
                p.optimization_objective_recall_value,
            ),
            ArgField::always(
                "optimization_objective_precision_value",
                p.optimization_objective_precision_value,
            ),
            ArgField::always("metadata_path", a.metadata.uri.as_str()),
            ArgField::always("instance_baseline_path", a.instance_baseline.uri.as_str()),
            ArgField::always("run_evaluation", p.run_evaluation),
            ArgField::always("run_distill", p.run_distill),
            ArgField::always(
                "enable_probabilistic_inference",
                p.enable_probabilistic_inference,
            ),
            // Singular time series ID backwards support.
            ArgField::if_present(
                "time_series_identifier_column",
                p.time_series_identifier_column
                    .as_ref()
                    .map(|c| ArgValue::Str(c.clone())),
            ),
            ArgField::always(
                "time_series_identifier_columns",
                ArgValue::StrList(p.time_series_identifier_columns.clone()),
            ),
            ArgField::always("time_column", p.time_column.as_str()),
            ArgField::always(
                "time_series_attribute_columns",
                ArgValue::StrList(p.time_series_attribute_columns.clone()),
            ),
            ArgField::always(
                "available_at_forecast_columns",
                ArgValue::StrList(p.available_at_forecast_columns.clone()),
            ),
            ArgField::always(
                "unavailable_at_forecast_columns",
                ArgValue::StrList(p.unavailable_at_forecast_columns.clone()),
            ),
            ArgField::if_present(
                "quantiles",
                p.quantiles.as_ref().map(|q| ArgValue::FloatList(q.clone())),
            ),
            ArgField::always("context_window", p.context_window),
            ArgField::always("forecast_horizon", p.forecast_horizon),
            ArgField::always("forecasting_model_type", p.forecasting_model_type.as_str()),
            ArgField::always(
                "forecasting_transformations",
                ArgValue::StrListMap(p.forecasting_transformations.clone()),
            ),
            ArgField::if_present(
                "stage_1_deadline_hours",
                p.stage_1_deadline_hours.map(ArgValue::Float),
            ),
            ArgField::if_present(
                "stage_2_deadline_hours",
                p.stage_2_deadline_hours.map(ArgValue::Float),
            ),
            ArgField::if_present(
                "group_columns",
                p.group_columns.as_ref().map(|c| ArgValue::StrList(c.clone())),
            ),
            ArgField::if_present(
                "group_total_weight",
                p.group_total_weight.map(ArgValue::Float),
            ),
            ArgField::if_present(
                "temporal_total_weight",
                p.temporal_total_weight.map(ArgValue::Float),
            ),
            ArgField::if_present(
                "group_temporal_total_weight",
                p.group_temporal_total_weight.map(ArgValue::Float),
            ),
        ]
    }

    /// Build the complete argument list: subcommand plus ordered
    /// fragments.
    pub fn build_args(&self) -> Vec<String> {
        let mut builder = ArgListBuilder::new(CONFIGURATOR_SUBCOMMAND);
        for field in self.field_table() {
            builder = builder.field(field);
        }
        builder.build()
    }

    /// Package the component into a container step descriptor.
    ///
    /// Fails fast on malformed shape (an artifact with an empty URI)
    /// before anything reaches the orchestration engine. No value-range
    /// validation happens here.
    pub fn into_step(self, name: impl Into<String>) -> Result<ContainerStep, ComponentError> {
        for artifact in self.artifacts.all() {
            if artifact.uri.is_empty() {
                return Err(ComponentError::EmptyArtifactUri {
                    artifact: artifact.name.clone(),
                });
            }
        }

        let args = self.build_args();
        Ok(ContainerStep {
            name: name.into(),
            image: CONFIGURATOR_IMAGE.to_string(),
            command: vec![],
            args,
            inputs: vec![
                ArtifactBinding::input(&self.artifacts.dataset_stats),
                ArtifactBinding::input(&self.artifacts.training_schema),
                ArtifactBinding::input(&self.artifacts.instance_schema),
            ],
            outputs: vec![
                ArtifactBinding::output(&self.artifacts.metadata),
                ArtifactBinding::output(&self.artifacts.instance_baseline),
            ],
        })
    }
}
