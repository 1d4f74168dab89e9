//! Domain records and their closed enumerations.
//!
//! All enums carry an `Unknown` catch-all so rendering always has a defined
//! fallback: lenient decoding (`serde`, `#[serde(other)]`) folds unrecognized
//! tokens into `Unknown`, while strict parsing (`FromStr`) rejects them with
//! `Error::UnknownVariant`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Direction of a metric over the reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
    #[serde(other)]
    Unknown,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
            Trend::Unknown => "unknown",
        }
    }
}

impl FromStr for Trend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Trend::Up),
            "down" => Ok(Trend::Down),
            "neutral" => Ok(Trend::Neutral),
            other => Err(Error::UnknownVariant {
                field: "trend",
                value: other.to_string(),
            }),
        }
    }
}

/// Lifecycle state of a workflow task or one of its steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Unknown => "unknown",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(Error::UnknownVariant {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Unknown => "unknown",
        }
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(Error::UnknownVariant {
                field: "priority",
                value: other.to_string(),
            }),
        }
    }
}

/// Business area an insight belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Marketing,
    Hr,
    Operations,
    #[serde(other)]
    Unknown,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Marketing => "marketing",
            Category::Hr => "hr",
            Category::Operations => "operations",
            Category::Unknown => "unknown",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "marketing" => Ok(Category::Marketing),
            "hr" => Ok(Category::Hr),
            "operations" => Ok(Category::Operations),
            other => Err(Error::UnknownVariant {
                field: "category",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
    #[serde(other)]
    Unknown,
}

impl Impact {
    pub fn label(self) -> &'static str {
        match self {
            Impact::Positive => "positive",
            Impact::Negative => "negative",
            Impact::Neutral => "neutral",
            Impact::Unknown => "unknown",
        }
    }
}

impl FromStr for Impact {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Impact::Positive),
            "negative" => Ok(Impact::Negative),
            "neutral" => Ok(Impact::Neutral),
            other => Err(Error::UnknownVariant {
                field: "impact",
                value: other.to_string(),
            }),
        }
    }
}

/// A headline metric value — either a plain count or preformatted text
/// ("2.4k", "98%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(u64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

/// One row of a metric's detail breakdown. Counts and scores are distinct in
/// the source data, so they stay distinct here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownValue {
    Count(u64),
    Score(String),
}

impl fmt::Display for BreakdownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakdownValue::Count(n) => write!(f, "{n}"),
            BreakdownValue::Score(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub label: String,
    pub value: BreakdownValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDetails {
    pub description: String,
    pub breakdown: Vec<BreakdownRow>,
}

/// A dashboard headline metric. Identity is `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
    /// Percent change over the period; zero change is not shown on the card.
    pub change: i32,
    pub trend: Trend,
    pub details: MetricDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub name: String,
    pub status: TaskStatus,
}

/// An automated workflow task. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTask {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub assignee: String,
    pub description: String,
    pub steps: Vec<WorkflowStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightMetric {
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightDetails {
    pub metrics: Vec<InsightMetric>,
    pub recommendations: Vec<String>,
}

/// An AI-generated insight card. Identity is `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub impact: Impact,
    pub value: Option<String>,
    pub details: InsightDetails,
}

/// The signed-in user shown in the profile popover. Identity is `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: String,
}
