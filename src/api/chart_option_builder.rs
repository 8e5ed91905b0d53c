use crate::core::{CategoryAxis, ChartKind, SeriesDescriptor};
use crate::render::{
    AxisLabelOption, AxisType, CategoryAxisOption, ChartOption, LegendOption, SeriesOption,
    TitleOption, TooltipOption, TooltipTrigger, ValueAxisOption,
};

/// Title shown when the host passes an empty one.
pub const DEFAULT_CHART_TITLE: &str = "Chart";
pub const VALUE_AXIS_LABEL_FORMATTER: &str = "{value}";

/// Every series must carry exactly one slot per category label.
#[must_use]
pub fn is_well_formed(series: &[SeriesDescriptor], categories: &CategoryAxis) -> bool {
    series
        .iter()
        .all(|descriptor| descriptor.len() == categories.len())
}

/// Derives the full renderer option from chart inputs.
///
/// Returns `None` for malformed input; callers treat that as "nothing to
/// show" and clear the chart. Non-finite values become gaps.
#[must_use]
pub fn build_chart_option(
    series: &[SeriesDescriptor],
    categories: &CategoryAxis,
    kind: ChartKind,
    title: &str,
) -> Option<ChartOption> {
    if !is_well_formed(series, categories) {
        return None;
    }

    let text = if title.is_empty() {
        DEFAULT_CHART_TITLE
    } else {
        title
    };

    Some(ChartOption {
        title: TitleOption {
            text: text.to_owned(),
            left: "center".to_owned(),
        },
        tooltip: TooltipOption {
            trigger: TooltipTrigger::Axis,
        },
        legend: LegendOption::default(),
        x_axis: CategoryAxisOption {
            axis_type: AxisType::Category,
            boundary_gap: false,
            data: categories.labels().to_vec(),
        },
        y_axis: ValueAxisOption {
            axis_type: AxisType::Value,
            axis_label: AxisLabelOption {
                formatter: VALUE_AXIS_LABEL_FORMATTER.to_owned(),
            },
        },
        series: series
            .iter()
            .map(|descriptor| stamp_series(descriptor, kind))
            .collect(),
    })
}

fn stamp_series(descriptor: &SeriesDescriptor, kind: ChartKind) -> SeriesOption {
    let mut descriptor = descriptor.clone();
    for value in &mut descriptor.data {
        if value.is_some_and(|v| !v.is_finite()) {
            *value = None;
        }
    }
    SeriesOption { descriptor, kind }
}
