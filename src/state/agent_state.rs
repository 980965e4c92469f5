//! Agent indicator panel state.
//!
//! The seven indicators are a display convention: they always move as one
//! group, and the group state says nothing about which agents actually ran
//! on the service side.

/// Shared visual state of the agent roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentStatus {
    #[default]
    Idle,
    Running,
}

impl AgentStatus {
    /// Indicator glyph for this status.
    pub fn glyph(&self) -> &'static str {
        match self {
            AgentStatus::Idle => "●",
            AgentStatus::Running => "⟳",
        }
    }

    /// Whether the in-progress styling applies.
    pub fn is_running(&self) -> bool {
        matches!(self, AgentStatus::Running)
    }
}

/// One named indicator in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentIndicator {
    /// Short roster id.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    pub status: AgentStatus,
}

/// The fixed roster, in panel order.
const ROSTER: [(&str, &str); 7] = [
    ("ceo", "CEO"),
    ("risk", "Risk Mgr"),
    ("quant", "Quant"),
    ("tech", "Technical"),
    ("fund", "Fundamental"),
    ("sent", "Sentiment"),
    ("ml", "ML"),
];

/// State of the agent indicator panel. A single setter fans the shared
/// status out across all members as one batch; there is no per-agent
/// independent state.
#[derive(Debug, Clone)]
pub struct AgentPanelState {
    indicators: Vec<AgentIndicator>,
}

impl Default for AgentPanelState {
    fn default() -> Self {
        Self {
            indicators: ROSTER
                .iter()
                .map(|&(id, label)| AgentIndicator {
                    id,
                    label,
                    status: AgentStatus::Idle,
                })
                .collect(),
        }
    }
}

impl AgentPanelState {
    /// Set every indicator to the given status. Each member update is
    /// independent of the others; idempotent under repeated calls.
    pub fn set_status(&mut self, status: AgentStatus) {
        for indicator in &mut self.indicators {
            indicator.status = status;
        }
    }

    /// All indicators, in panel order.
    pub fn indicators(&self) -> &[AgentIndicator] {
        &self.indicators
    }

    /// Whether every indicator shows the given status.
    pub fn all(&self, status: AgentStatus) -> bool {
        self.indicators.iter().all(|a| a.status == status)
    }
}
