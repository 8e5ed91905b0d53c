use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, SeriesDescriptor};
use crate::error::{DashboardError, DashboardResult};

/// Complete renderer configuration for one chart.
///
/// Serializes to the renderer's camelCase option shape. Every application
/// replaces the previous option as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub title: TitleOption,
    pub tooltip: TooltipOption,
    pub legend: LegendOption,
    pub x_axis: CategoryAxisOption,
    pub y_axis: ValueAxisOption,
    pub series: Vec<SeriesOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleOption {
    pub text: String,
    pub left: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Axis,
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipOption {
    pub trigger: TooltipTrigger,
}

/// Legend with renderer defaults; serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendOption {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxisOption {
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub boundary_gap: bool,
    pub data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabelOption {
    pub formatter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxisOption {
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub axis_label: AxisLabelOption,
}

/// A series descriptor stamped with the chart-wide kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesOption {
    #[serde(flatten)]
    pub descriptor: SeriesDescriptor,
    #[serde(rename = "type")]
    pub kind: ChartKind,
}

impl ChartOption {
    #[must_use]
    pub fn series_names(&self) -> Vec<&str> {
        self.series
            .iter()
            .map(|series| series.descriptor.name.as_str())
            .collect()
    }

    /// Checks that every series has one slot per category label.
    pub fn validate(&self) -> DashboardResult<()> {
        let expected = self.x_axis.data.len();
        for series in &self.series {
            if series.descriptor.data.len() != expected {
                return Err(DashboardError::InvalidData(format!(
                    "series `{}` has {} values but the category axis has {expected} labels",
                    series.descriptor.name,
                    series.descriptor.data.len()
                )));
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize chart option: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse chart option json: {e}"))
        })
    }
}
