use serde::Serialize;

use super::super::archetype::Tint;
use super::super::quiz::QuizQuestion;

/// Coarse grouping of onboarding screens, used by flow reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenStage {
    Introduction,
    UserInput,
    Planning,
    Permission,
    Completion,
}

impl ScreenStage {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Introduction,
            Self::UserInput,
            Self::Planning,
            Self::Permission,
            Self::Completion,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::UserInput => "User Input",
            Self::Planning => "Planning",
            Self::Permission => "Permission",
            Self::Completion => "Completion",
        }
    }
}

/// Permissions the flow can ask for. The standard flow only requests
/// photo access; the rest exist for custom flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionKind {
    PhotoAccess,
    Notifications,
    Analytics,
    Location,
}

impl PermissionKind {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::PhotoAccess,
            Self::Notifications,
            Self::Analytics,
            Self::Location,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PhotoAccess => "Photo Access",
            Self::Notifications => "Notifications",
            Self::Analytics => "Analytics",
            Self::Location => "Location",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::PhotoAccess => {
                "Access your photos to analyze your style and create recommendations"
            }
            Self::Notifications => "Send you reminders and updates about your style journey",
            Self::Analytics => "Help us improve the app by collecting anonymous usage data",
            Self::Location => "Provide location-based style recommendations and weather updates",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::PhotoAccess => "photo.stack",
            Self::Notifications => "bell",
            Self::Analytics => "chart.bar",
            Self::Location => "location",
        }
    }
}

/// One row of the benefits checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistRow {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Tagged payload of a single onboarding screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScreenContent {
    Hero {
        image: &'static str,
        title: &'static str,
        subtitle: &'static str,
        cta: &'static str,
    },
    Welcome {
        name: String,
    },
    ProblemStatement {
        title: &'static str,
        description: &'static str,
        image: &'static str,
    },
    Benefits {
        title: &'static str,
        items: Vec<ChecklistRow>,
    },
    NameInput,
    PopulationSelect,
    Question {
        question: QuizQuestion,
    },
    PersonalizedPlan {
        name: String,
        days_count: u32,
    },
    ProgressTracking {
        title: &'static str,
        description: &'static str,
    },
    HabitTracking {
        title: &'static str,
        description: &'static str,
    },
    DailyCheckin {
        title: &'static str,
        description: &'static str,
    },
    CustomPlan {
        name: String,
        plan_details: &'static str,
    },
    ProgressGraph {
        title: &'static str,
        weeks: u32,
    },
    PermissionRequest {
        title: &'static str,
        description: &'static str,
        permission: PermissionKind,
    },
    Summary {
        title: &'static str,
        body: &'static str,
        accent: Tint,
        cta: &'static str,
    },
    ReadyToStart {
        name: String,
        cta: &'static str,
    },
}

impl ScreenContent {
    pub const fn stage(&self) -> ScreenStage {
        match self {
            Self::Hero { .. }
            | Self::Welcome { .. }
            | Self::ProblemStatement { .. }
            | Self::Benefits { .. } => ScreenStage::Introduction,
            Self::NameInput | Self::PopulationSelect | Self::Question { .. } => {
                ScreenStage::UserInput
            }
            Self::PersonalizedPlan { .. }
            | Self::ProgressTracking { .. }
            | Self::HabitTracking { .. }
            | Self::DailyCheckin { .. }
            | Self::CustomPlan { .. }
            | Self::ProgressGraph { .. } => ScreenStage::Planning,
            Self::PermissionRequest { .. } => ScreenStage::Permission,
            Self::Summary { .. } | Self::ReadyToStart { .. } => ScreenStage::Completion,
        }
    }

    /// Screens that block advancing until the user acts.
    pub const fn requires_interaction(&self) -> bool {
        matches!(
            self,
            Self::NameInput | Self::PopulationSelect | Self::Question { .. }
                | Self::PermissionRequest { .. }
        )
    }

    pub const fn can_be_skipped(&self) -> bool {
        matches!(self, Self::PermissionRequest { .. })
    }
}

/// One step of a composed onboarding sequence.
///
/// `position` is 1-based and contiguous within a composition; `total` is the
/// fixed flow denominator, which may overstate the true step count when
/// optional screens are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenDescriptor {
    pub position: usize,
    pub total: usize,
    pub content: ScreenContent,
}

impl ScreenDescriptor {
    pub fn progress_label(&self) -> String {
        format!(
            "Step {} of {}",
            self.position.min(self.total),
            self.total.max(1)
        )
    }

    pub fn progress_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.position as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    pub fn is_first(&self) -> bool {
        self.position == 1
    }

    pub fn is_last(&self) -> bool {
        self.position == self.total
    }

    pub fn stage(&self) -> ScreenStage {
        self.content.stage()
    }

    pub fn to_view(&self) -> ScreenView {
        ScreenView {
            position: self.position,
            total: self.total,
            progress_label: self.progress_label(),
            stage: self.stage(),
            stage_label: self.stage().label(),
            requires_interaction: self.content.requires_interaction(),
            can_be_skipped: self.content.can_be_skipped(),
            content: self.content.clone(),
        }
    }
}

/// Serialized representation of a screen for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenView {
    pub position: usize,
    pub total: usize,
    pub progress_label: String,
    pub stage: ScreenStage,
    pub stage_label: &'static str,
    pub requires_interaction: bool,
    pub can_be_skipped: bool,
    pub content: ScreenContent,
}
