mod chart_binding;
mod chart_option_builder;

pub use chart_binding::{BindingStatus, ChartBinding, ChartProps};
pub use chart_option_builder::{
    DEFAULT_CHART_TITLE, VALUE_AXIS_LABEL_FORMATTER, build_chart_option, is_well_formed,
};
