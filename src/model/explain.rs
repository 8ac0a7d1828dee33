use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Transaction fields submitted to `POST /api/explain`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSample {
    pub transaction_id: String,
    pub amount: f64,
    pub merchant: String,
    pub merchant_risk_score: f64,
    pub location: String,
    pub is_international: bool,
    pub transaction_hour: u8,
    pub velocity_1h: u32,
    pub user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Fraud,
    Legitimate,
}

/// One node of the decision path through the tree model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionNode {
    pub node: u32,
    pub feature: String,
    pub condition: String,
    pub decision: String,
    pub samples: u64,
    pub fraud_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub factor: String,
    pub value: String,
    /// "INCREASES_RISK" or "DECREASES_RISK".
    pub impact: String,
    pub weight: f64,
    pub explanation: String,
}

impl RiskFactor {
    pub fn increases_risk(&self) -> bool {
        self.impact == "INCREASES_RISK"
    }
}

/// `explanation` payload of `POST /api/explain`.
///
/// The backend also sends `counterfactuals` and `similar_cases`; they are not
/// part of the canonical schema and are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub decision: Decision,
    pub confidence: f64,
    pub risk_score: f64,
    pub decision_path: Vec<DecisionNode>,
    pub top_factors: Vec<RiskFactor>,
    pub feature_impacts: BTreeMap<String, f64>,
    pub model_reasoning: String,
}

impl Explanation {
    /// Feature impacts, largest first.
    pub fn ranked_impacts(&self) -> Vec<(&str, f64)> {
        let mut impacts: Vec<(&str, f64)> = self
            .feature_impacts
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        impacts.sort_by(|a, b| b.1.total_cmp(&a.1));
        impacts
    }
}
