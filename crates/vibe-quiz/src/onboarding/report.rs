use std::collections::HashMap;

use serde::Serialize;

use super::flow::ScreenStage;

/// Snapshot of a session's composed flow and answer progress.
#[derive(Debug, Default, Clone)]
pub struct FlowReport {
    pub stage_screens: HashMap<ScreenStage, usize>,
    pub questions_total: usize,
    pub questions_answered: usize,
    pub steps: usize,
    pub total_steps: usize,
    pub position: usize,
}

impl FlowReport {
    pub fn summary(&self) -> FlowReportSummary {
        let stages = ScreenStage::ordered()
            .into_iter()
            .filter_map(|stage| {
                self.stage_screens.get(&stage).map(|&screens| StageEntry {
                    stage,
                    stage_label: stage.label(),
                    screens,
                })
            })
            .collect();

        FlowReportSummary {
            stages,
            questions_total: self.questions_total,
            questions_answered: self.questions_answered,
            steps: self.steps,
            total_steps: self.total_steps,
            position: self.position,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StageEntry {
    pub stage: ScreenStage,
    pub stage_label: &'static str,
    pub screens: usize,
}

/// Ordered, serializable view of a flow report.
#[derive(Debug, Clone, Serialize)]
pub struct FlowReportSummary {
    pub stages: Vec<StageEntry>,
    pub questions_total: usize,
    pub questions_answered: usize,
    pub steps: usize,
    pub total_steps: usize,
    pub position: usize,
}
