use crate::collections::Collection;
use crate::models::{Contact, ContactStatus, Deal, DealStage, Task};

/// Which screen the UI is showing. Navigation just swaps this value;
/// logout resets it to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Contacts,
    Deals,
    Tasks,
    Settings,
}

/// Aggregates rendered on the dashboard, recomputed from the live
/// collections on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_pipeline_value: f64,
    pub active_contacts: usize,
    pub open_deals: usize,
    pub pending_tasks: usize,
    pub stage_funnel: StageFunnel,
}

/// Deal counts per pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageFunnel {
    pub lead: usize,
    pub qualified: usize,
    pub proposal: usize,
    pub negotiation: usize,
    pub won: usize,
}

impl DashboardStats {
    pub fn compute(
        deals: &Collection<Deal>,
        contacts: &Collection<Contact>,
        tasks: &Collection<Task>,
    ) -> Self {
        let mut stage_funnel = StageFunnel::default();
        for deal in deals.iter() {
            match deal.stage {
                DealStage::Lead => stage_funnel.lead += 1,
                DealStage::Qualified => stage_funnel.qualified += 1,
                DealStage::Proposal => stage_funnel.proposal += 1,
                DealStage::Negotiation => stage_funnel.negotiation += 1,
                DealStage::ClosedWon => stage_funnel.won += 1,
            }
        }

        Self {
            total_pipeline_value: deals.iter().map(|d| d.value).sum(),
            active_contacts: contacts
                .iter()
                .filter(|c| c.status == ContactStatus::Active)
                .count(),
            open_deals: deals
                .iter()
                .filter(|d| d.stage != DealStage::ClosedWon)
                .count(),
            pending_tasks: tasks.iter().filter(|t| !t.completed).count(),
            stage_funnel,
        }
    }
}
