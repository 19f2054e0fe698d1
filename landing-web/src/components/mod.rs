//! UI Components

pub mod dialog;
pub mod sections;
pub mod trending;

pub use dialog::Dialog;
pub use sections::{ActionSteps, AiEngineSection, MonitoringSection, TechStacks};
pub use trending::TrendingWidget;
