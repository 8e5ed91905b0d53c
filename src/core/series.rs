use serde::{Deserialize, Serialize};

/// Derived line a renderer computes from series data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkLineKind {
    Average,
    Min,
    Max,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkLineItem {
    #[serde(rename = "type")]
    pub kind: MarkLineKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl MarkLineItem {
    #[must_use]
    pub fn new(kind: MarkLineKind) -> Self {
        Self { kind, name: None }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Average line labelled `Avg`.
    #[must_use]
    pub fn average() -> Self {
        Self::new(MarkLineKind::Average).with_name("Avg")
    }
}

/// Set of derived-line requests attached to one series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkLine {
    pub data: Vec<MarkLineItem>,
}

impl MarkLine {
    #[must_use]
    pub fn new(data: Vec<MarkLineItem>) -> Self {
        Self { data }
    }
}

/// One named dataset plotted against the shared category axis.
///
/// `data` holds one slot per category label; `None` marks a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDescriptor {
    pub name: String,
    pub data: Vec<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLine>,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            data,
            smooth: None,
            mark_line: None,
        }
    }

    /// Builds a gap-free series from plain values.
    #[must_use]
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(name, values.iter().copied().map(Some).collect())
    }

    #[must_use]
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = Some(smooth);
        self
    }

    #[must_use]
    pub fn with_mark_line(mut self, mark_line: MarkLine) -> Self {
        self.mark_line = Some(mark_line);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Ordered labels shared by every series of one chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryAxis(Vec<String>);

impl CategoryAxis {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self(labels)
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CategoryAxis {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
