use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelScore {
    pub model: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
}

impl ModelScore {
    /// Harmonic mean of precision and recall.
    pub fn f1(&self) -> f64 {
        let sum = self.precision + self.recall;
        if sum == 0.0 {
            return 0.0;
        }
        2.0 * self.precision * self.recall / sum
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleWeight {
    pub model: String,
    pub weight: u64,
}

/// Model Insights page data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInsights {
    pub feature_importance: Vec<FeatureWeight>,
    pub model_performance: Vec<ModelScore>,
    pub ensemble_weights: Vec<EnsembleWeight>,
}
