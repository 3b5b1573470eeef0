use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::scenario::ScenarioId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseId {
    Preparation,
    Filing,
    Processing,
    Decision,
}

impl PhaseId {
    pub const ALL: [PhaseId; 4] = [
        PhaseId::Preparation,
        PhaseId::Filing,
        PhaseId::Processing,
        PhaseId::Decision,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PhaseId::Preparation => "preparation",
            PhaseId::Filing => "filing",
            PhaseId::Processing => "processing",
            PhaseId::Decision => "decision",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PhaseId::Preparation => "Case Preparation",
            PhaseId::Filing => "Filing & Submission",
            PhaseId::Processing => "USCIS Processing",
            PhaseId::Decision => "Decision & Next Steps",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PhaseId::Preparation => "Document gathering and initial assessment",
            PhaseId::Filing => "Petition preparation and USCIS submission",
            PhaseId::Processing => "USCIS review and adjudication",
            PhaseId::Decision => "Final decision and post-approval steps",
        }
    }

    /// Share of the adjusted total duration allotted to this phase.
    pub fn proportion(self) -> f64 {
        match self {
            PhaseId::Preparation => 0.20,
            PhaseId::Filing => 0.15,
            PhaseId::Processing => 0.45,
            PhaseId::Decision => 0.20,
        }
    }

    pub fn minimum_months(self) -> u32 {
        match self {
            PhaseId::Processing => 2,
            _ => 1,
        }
    }

    pub fn details(self) -> &'static [&'static str] {
        match self {
            PhaseId::Preparation => &[
                "Initial consultation and case assessment",
                "Document collection checklist",
                "Evidence compilation",
                "Expert letter requests",
            ],
            PhaseId::Filing => &[
                "Petition drafting",
                "Form preparation (I-140, I-129, etc.)",
                "Supporting documentation",
                "USCIS submission",
            ],
            PhaseId::Processing => &[
                "Receipt notice",
                "Biometrics appointment (if required)",
                "Background checks",
                "Case adjudication",
            ],
            PhaseId::Decision => &[
                "Approval notice",
                "Consular processing (if applicable)",
                "Status activation",
                "EAD/AP (if applicable)",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePhase {
    pub id: PhaseId,
    pub name: String,
    pub description: String,
    pub duration_months: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Steps shown when the phase is expanded.
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub scenario: ScenarioId,
    /// Rounded `base * country multiplier * premium reduction`. Not
    /// necessarily equal to the sum of the phase durations.
    pub adjusted_total_months: i64,
    pub phases: Vec<TimelinePhase>,
}

impl Timeline {
    pub fn empty(scenario: ScenarioId) -> Self {
        Self {
            scenario,
            adjusted_total_months: 0,
            phases: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn total_months(&self) -> u64 {
        self.phases
            .iter()
            .map(|phase| u64::from(phase.duration_months))
            .sum()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.phases.first().map(|phase| phase.start_date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.phases.last().map(|phase| phase.end_date)
    }
}
