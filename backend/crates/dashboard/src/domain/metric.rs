//! KPI metric and team vocabulary

use derive_more::Display;

use crate::domain::trend::Polarity;

/// The three metrics shown per team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MetricKind {
    #[display("open")]
    OpenTasks,
    #[display("cycle")]
    CycleTime,
    #[display("completions")]
    Completions,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [
        MetricKind::OpenTasks,
        MetricKind::CycleTime,
        MetricKind::Completions,
    ];

    /// Growth in open work or cycle time is bad; growth in completions is good.
    pub const fn polarity(&self) -> Polarity {
        match self {
            MetricKind::OpenTasks => Polarity::LowerIsBetter,
            MetricKind::CycleTime => Polarity::LowerIsBetter,
            MetricKind::Completions => Polarity::HigherIsBetter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Team {
    #[display("pursuits")]
    Pursuits,
    #[display("creative")]
    Creative,
}
