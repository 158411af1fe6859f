//! Augmented table handed to the rendering layer.

use serde::{Deserialize, Serialize};

use super::series::{Series, SeriesTable};
use super::signal::{Levels, SignalSeries, TrendLabel};
use crate::config::Variant;

/// Values of one derived column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum ColumnValues {
    Numeric(Series),
    Flag(SignalSeries),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Flag(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named column aligned by position with the input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedColumn {
    pub name: String,
    #[serde(flatten)]
    pub values: ColumnValues,
}

impl DerivedColumn {
    pub fn numeric(name: impl Into<String>, values: Series) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::Numeric(values),
        }
    }

    pub fn flag(name: impl Into<String>, values: SignalSeries) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::Flag(values),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendCoefficients {
    pub slope: f64,
    pub intercept: f64,
}

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub variant: Variant,
    pub timestamp_column: String,
    pub table: SeriesTable,
    pub columns: Vec<DerivedColumn>,
    pub levels: Levels,
    pub trend: TrendLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trendline: Option<TrendCoefficients>,
}

impl AnalysisReport {
    pub fn column(&self, name: &str) -> Option<&DerivedColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn numeric(&self, name: &str) -> Option<&[Option<f64>]> {
        match &self.column(name)?.values {
            ColumnValues::Numeric(values) => Some(values),
            ColumnValues::Flag(_) => None,
        }
    }

    pub fn flag(&self, name: &str) -> Option<&[Option<bool>]> {
        match &self.column(name)?.values {
            ColumnValues::Flag(values) => Some(values),
            ColumnValues::Numeric(_) => None,
        }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
