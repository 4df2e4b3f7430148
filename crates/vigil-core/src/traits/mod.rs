pub mod risk_scorer;

pub use risk_scorer::RiskScorer;
