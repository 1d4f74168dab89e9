//! The built-in dataset.
//!
//! Every record the dashboard shows lives here, constructed once at startup
//! and never mutated. Ordering is insertion order and is part of the UI
//! contract (card position, workflow listing, insight grid).

use chrono::NaiveDate;

use crate::model::{
    BreakdownRow, BreakdownValue, Category, Impact, Insight, InsightDetails, InsightMetric,
    Metric, MetricDetails, MetricValue, Priority, TaskStatus, Trend, UserProfile, WorkflowStep,
    WorkflowTask,
};

/// The full static dataset backing the dashboard.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub metrics: Vec<Metric>,
    pub workflows: Vec<WorkflowTask>,
    pub insights: Vec<Insight>,
    pub user: UserProfile,
}

impl Catalog {
    /// Build the built-in dataset.
    pub fn builtin() -> Self {
        Self {
            metrics: builtin_metrics(),
            workflows: builtin_workflows(),
            insights: builtin_insights(),
            user: builtin_user(),
        }
    }

    /// Look up a workflow by id.
    pub fn workflow_by_id(&self, id: &str) -> Option<&WorkflowTask> {
        self.workflows.iter().find(|w| w.id == id)
    }

    /// Look up a metric by its label.
    pub fn metric_by_label(&self, label: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.label == label)
    }

    /// Look up an insight by its title.
    pub fn insight_by_title(&self, title: &str) -> Option<&Insight> {
        self.insights.iter().find(|i| i.title == title)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn builtin_metrics() -> Vec<Metric> {
    vec![
        Metric {
            label: "Active Workflows".into(),
            value: MetricValue::Count(24),
            change: 12,
            trend: Trend::Up,
            details: MetricDetails {
                description: "Number of automated workflows currently running in the system."
                    .into(),
                breakdown: vec![
                    count_row("Customer Onboarding", 8),
                    count_row("Document Processing", 10),
                    count_row("Data Sync", 6),
                ],
            },
        },
        Metric {
            label: "AI Interactions".into(),
            value: MetricValue::Text("2.4k".into()),
            change: 8,
            trend: Trend::Up,
            details: MetricDetails {
                description: "Total AI-powered interactions processed this month.".into(),
                breakdown: vec![
                    count_row("Customer Support", 1200),
                    count_row("Data Analysis", 800),
                    count_row("Process Automation", 400),
                ],
            },
        },
        Metric {
            label: "Security Score".into(),
            value: MetricValue::Text("98%".into()),
            change: -2,
            trend: Trend::Down,
            details: MetricDetails {
                description: "Overall security health score based on multiple factors.".into(),
                breakdown: vec![
                    score_row("Access Control", "100%"),
                    score_row("Data Encryption", "98%"),
                    score_row("Threat Detection", "96%"),
                ],
            },
        },
        Metric {
            label: "Active Users".into(),
            value: MetricValue::Count(156),
            change: 0,
            trend: Trend::Neutral,
            details: MetricDetails {
                description: "Number of users currently active in the system.".into(),
                breakdown: vec![
                    count_row("Administrators", 12),
                    count_row("Regular Users", 124),
                    count_row("Guests", 20),
                ],
            },
        },
    ]
}

fn builtin_workflows() -> Vec<WorkflowTask> {
    vec![
        WorkflowTask {
            id: "1".into(),
            title: "Customer Onboarding Automation".into(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            due_date: date(2024, 3, 25),
            assignee: "Sarah Chen".into(),
            description: "Automate the customer onboarding process including document \
                          verification, account setup, and welcome email sequence."
                .into(),
            steps: vec![
                step("Document Collection", TaskStatus::Completed),
                step("Verification Process", TaskStatus::InProgress),
                step("Account Setup", TaskStatus::Pending),
                step("Welcome Email", TaskStatus::Pending),
            ],
        },
        WorkflowTask {
            id: "2".into(),
            title: "Invoice Processing Workflow".into(),
            status: TaskStatus::Completed,
            priority: Priority::Medium,
            due_date: date(2024, 3, 23),
            assignee: "Mike Johnson".into(),
            description: "Automated invoice processing system including validation, approval \
                          workflow, and payment processing."
                .into(),
            steps: vec![
                step("Invoice Receipt", TaskStatus::Completed),
                step("Data Extraction", TaskStatus::Completed),
                step("Approval Process", TaskStatus::Completed),
                step("Payment Processing", TaskStatus::Completed),
            ],
        },
        WorkflowTask {
            id: "3".into(),
            title: "HR Document Approval".into(),
            status: TaskStatus::Pending,
            priority: Priority::High,
            due_date: date(2024, 3, 26),
            assignee: "Emma Davis".into(),
            description: "Streamline HR document approval process for employee onboarding, \
                          reviews, and policy updates."
                .into(),
            steps: vec![
                step("Document Preparation", TaskStatus::Completed),
                step("Initial Review", TaskStatus::Pending),
                step("Department Approval", TaskStatus::Pending),
                step("Final Sign-off", TaskStatus::Pending),
            ],
        },
    ]
}

fn builtin_insights() -> Vec<Insight> {
    vec![
        Insight {
            title: "Marketing Campaign Performance".into(),
            description: "Email campaign conversion rate increased by 25%".into(),
            category: Category::Marketing,
            impact: Impact::Positive,
            value: Some("+25%".into()),
            details: InsightDetails {
                metrics: vec![
                    insight_metric("Open Rate", "45%", Trend::Up),
                    insight_metric("Click Rate", "12%", Trend::Up),
                    insight_metric("Conversion Rate", "8%", Trend::Up),
                ],
                recommendations: vec![
                    "Optimize email subject lines for better open rates".into(),
                    "Segment audience based on engagement levels".into(),
                    "A/B test call-to-action buttons".into(),
                ],
            },
        },
        Insight {
            title: "Employee Satisfaction".into(),
            description: "Team engagement scores show positive trend".into(),
            category: Category::Hr,
            impact: Impact::Positive,
            value: Some("92%".into()),
            details: InsightDetails {
                metrics: vec![
                    insight_metric("Overall Satisfaction", "92%", Trend::Up),
                    insight_metric("Work-Life Balance", "88%", Trend::Up),
                    insight_metric("Career Growth", "85%", Trend::Neutral),
                ],
                recommendations: vec![
                    "Implement regular feedback sessions".into(),
                    "Enhance professional development programs".into(),
                    "Review and adjust work-life balance policies".into(),
                ],
            },
        },
        Insight {
            title: "Resource Utilization".into(),
            description: "Server capacity optimization needed".into(),
            category: Category::Operations,
            impact: Impact::Negative,
            value: Some("78%".into()),
            details: InsightDetails {
                metrics: vec![
                    insight_metric("CPU Usage", "78%", Trend::Down),
                    insight_metric("Memory Usage", "85%", Trend::Neutral),
                    insight_metric("Storage Usage", "92%", Trend::Up),
                ],
                recommendations: vec![
                    "Implement auto-scaling policies".into(),
                    "Optimize database queries".into(),
                    "Archive unused data".into(),
                ],
            },
        },
    ]
}

fn builtin_user() -> UserProfile {
    UserProfile {
        name: "John Doe".into(),
        email: "johndoe@example.com".into(),
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&ixid=eyJhcHBfaWQiOjEyMDd9&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80".into(),
        role: "Admin".into(),
    }
}

fn count_row(label: &str, count: u64) -> BreakdownRow {
    BreakdownRow {
        label: label.into(),
        value: BreakdownValue::Count(count),
    }
}

fn score_row(label: &str, score: &str) -> BreakdownRow {
    BreakdownRow {
        label: label.into(),
        value: BreakdownValue::Score(score.into()),
    }
}

fn step(name: &str, status: TaskStatus) -> WorkflowStep {
    WorkflowStep {
        name: name.into(),
        status,
    }
}

fn insight_metric(label: &str, value: &str, trend: Trend) -> InsightMetric {
    InsightMetric {
        label: label.into(),
        value: value.into(),
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.metrics.len(), 4);
        assert_eq!(catalog.workflows.len(), 3);
        assert_eq!(catalog.insights.len(), 3);
    }

    #[test]
    fn security_score_detail() {
        let catalog = Catalog::builtin();
        let metric = catalog.metric_by_label("Security Score").unwrap();
        assert_eq!(metric.value, MetricValue::Text("98%".into()));
        assert_eq!(metric.trend, Trend::Down);
        assert!(metric
            .details
            .description
            .starts_with("Overall security health score"));
        let threat = metric
            .details
            .breakdown
            .iter()
            .find(|r| r.label == "Threat Detection")
            .unwrap();
        assert_eq!(threat.value, BreakdownValue::Score("96%".into()));
    }

    #[test]
    fn hr_approval_steps() {
        let catalog = Catalog::builtin();
        let task = catalog.workflow_by_id("3").unwrap();
        assert_eq!(task.title, "HR Document Approval");
        assert_eq!(task.steps.len(), 4);
        assert_eq!(task.steps[0].status, TaskStatus::Completed);
        for later in &task.steps[1..] {
            assert_ne!(later.status, TaskStatus::Completed);
        }
    }

    #[test]
    fn user_profile_fields() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.user.name, "John Doe");
        assert_eq!(catalog.user.email, "johndoe@example.com");
        assert_eq!(catalog.user.role, "Admin");
        // Full original URL, query string included.
        assert!(catalog.user.avatar.starts_with("https://images.unsplash.com/"));
        assert!(catalog.user.avatar.contains("fit=facearea"));
        assert!(catalog.user.avatar.ends_with("q=80"));
    }

    #[test]
    fn metric_order_is_stable() {
        let catalog = Catalog::builtin();
        let labels: Vec<&str> = catalog.metrics.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Active Workflows",
                "AI Interactions",
                "Security Score",
                "Active Users"
            ]
        );
    }

    #[test]
    fn every_insight_has_three_recommendations() {
        let catalog = Catalog::builtin();
        for insight in &catalog.insights {
            assert_eq!(insight.details.recommendations.len(), 3);
            assert_eq!(insight.details.metrics.len(), 3);
        }
    }
}
