//! Built-in sample data.
//!
//! These values are the defaults every view starts with and keeps showing when
//! the backend cannot be reached. Views without a backend endpoint serve them
//! as their only data.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::model::biometrics::{
    DeviceAnalysis, DeviceAttributes, DeviceData, MouseAnalysis, MouseData, SessionAnalysis,
    SessionData, TypingAnalysis, TypingData,
};
use crate::model::{
    Alert, AlertFeed, AnalyticsSnapshot, BiometricReport, BiometricSample, CategoryShare,
    DailyVolume, DashboardStats, Decision, DecisionNode, EmergingThreat, EnsembleWeight,
    Explanation, FeatureWeight, GeoHotspot, HourlyCount, ModelInsights, ModelScore, RiskFactor,
    RiskLevel, RiskPoint, SectorForecast, ThreatForecast, Transaction, TransactionSample,
    TransactionStatus, Trend,
};

fn iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339()
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_transactions: 12_543,
        fraud_detected: 127,
        blocked_transactions: 98,
        accuracy: 97.8,
    }
}

pub fn transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        Transaction {
            id: "TXN001".to_string(),
            amount: 1250.50,
            merchant: "Amazon".to_string(),
            status: TransactionStatus::Approved,
            risk_score: 0.15,
            timestamp: iso(now),
        },
        Transaction {
            id: "TXN002".to_string(),
            amount: 5000.0,
            merchant: "Unknown Casino".to_string(),
            status: TransactionStatus::Blocked,
            risk_score: 0.92,
            timestamp: iso(now - Duration::minutes(5)),
        },
        Transaction {
            id: "TXN003".to_string(),
            amount: 899.99,
            merchant: "Walmart".to_string(),
            status: TransactionStatus::Approved,
            risk_score: 0.08,
            timestamp: iso(now - Duration::minutes(10)),
        },
        Transaction {
            id: "TXN004".to_string(),
            amount: 3420.00,
            merchant: "Online Electronics Store".to_string(),
            status: TransactionStatus::Review,
            risk_score: 0.67,
            timestamp: iso(now - Duration::minutes(18)),
        },
    ]
}

pub fn alert_feed(now: DateTime<Utc>) -> AlertFeed {
    let alert = |id: &str, severity, kind: &str, message: &str, ago: i64, affected| Alert {
        id: id.to_string(),
        severity,
        kind: kind.to_string(),
        message: message.to_string(),
        timestamp: iso(now - Duration::seconds(ago)),
        affected_accounts: affected,
    };
    AlertFeed {
        alerts: vec![
            alert(
                "ALERT001",
                RiskLevel::Critical,
                "Unusual Transaction Amount",
                "Transaction amount $8,500 is 5x user average",
                120,
                1,
            ),
            alert(
                "ALERT002",
                RiskLevel::High,
                "Geographic Anomaly Detected",
                "Transaction from London detected, last transaction was in NYC 2 hours ago",
                300,
                1,
            ),
            alert(
                "ALERT003",
                RiskLevel::Medium,
                "High Transaction Velocity",
                "12 transactions in the last 30 minutes from this user",
                600,
                1,
            ),
            alert(
                "ALERT004",
                RiskLevel::Critical,
                "Fraud Detected and Blocked",
                "High-risk transaction automatically blocked",
                3600,
                1,
            ),
        ],
        timestamp: iso(now),
    }
}

pub fn analytics() -> AnalyticsSnapshot {
    let day = |day: &str, legitimate, fraud| DailyVolume {
        day: day.to_string(),
        legitimate,
        fraud,
    };
    let share = |name: &str, value| CategoryShare {
        name: name.to_string(),
        value,
    };
    let hour = |hour: &str, count| HourlyCount {
        hour: hour.to_string(),
        count,
    };
    AnalyticsSnapshot {
        fraud_trend: vec![
            day("Mon", 450, 12),
            day("Tue", 520, 18),
            day("Wed", 380, 8),
            day("Thu", 610, 25),
            day("Fri", 780, 32),
        ],
        category_distribution: vec![
            share("Retail", 45),
            share("Travel", 25),
            share("Gaming", 18),
            share("Other", 12),
        ],
        hourly_transactions: vec![
            hour("00:00", 120),
            hour("04:00", 85),
            hour("08:00", 250),
            hour("12:00", 380),
            hour("16:00", 420),
            hour("20:00", 310),
        ],
    }
}

pub fn model_insights() -> ModelInsights {
    let feature = |name: &str, value| FeatureWeight {
        name: name.to_string(),
        value,
    };
    let score = |model: &str, accuracy, precision, recall| ModelScore {
        model: model.to_string(),
        accuracy,
        precision,
        recall,
    };
    let weight = |model: &str, weight| EnsembleWeight {
        model: model.to_string(),
        weight,
    };
    ModelInsights {
        feature_importance: vec![
            feature("Amount", 28),
            feature("Transaction Frequency", 22),
            feature("Geographic Distance", 18),
            feature("Time of Day", 16),
            feature("Merchant Category", 12),
            feature("Device Consistency", 10),
        ],
        model_performance: vec![
            score("XGBoost", 97.2, 96.8, 94.5),
            score("LightGBM", 96.8, 96.2, 93.8),
            score("Random Forest", 95.5, 94.9, 92.1),
            score("Gradient Boosting", 94.8, 93.5, 91.2),
        ],
        ensemble_weights: vec![
            weight("XGBoost", 30),
            weight("LightGBM", 30),
            weight("Random Forest", 20),
            weight("Gradient Boosting", 10),
            weight("Logistic Regression", 5),
            weight("SVM", 5),
        ],
    }
}

/// Transaction submitted for explanation.
pub fn sample_transaction() -> TransactionSample {
    TransactionSample {
        transaction_id: "TXN_12345".to_string(),
        amount: 2500.0,
        merchant: "Online Electronics Store".to_string(),
        merchant_risk_score: 0.75,
        location: "Romania".to_string(),
        is_international: true,
        transaction_hour: 3,
        velocity_1h: 5,
        user_id: "USR_789".to_string(),
    }
}

pub fn explanation() -> Explanation {
    let node = |node, feature: &str, condition: &str, decision: &str, samples, fraud_rate| {
        DecisionNode {
            node,
            feature: feature.to_string(),
            condition: condition.to_string(),
            decision: decision.to_string(),
            samples,
            fraud_rate,
        }
    };
    let factor = |factor: &str, value: &str, weight, explanation: &str| RiskFactor {
        factor: factor.to_string(),
        value: value.to_string(),
        impact: "INCREASES_RISK".to_string(),
        weight,
        explanation: explanation.to_string(),
    };

    let feature_impacts: BTreeMap<String, f64> = [
        ("amount", 0.18),
        ("merchant_risk", 0.15),
        ("international", 0.14),
        ("unusual_time", 0.12),
        ("velocity", 0.15),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    Explanation {
        decision: Decision::Fraud,
        confidence: 0.87,
        risk_score: 0.89,
        decision_path: vec![
            node(1, "transaction_amount", "amount > 1000", "HIGH_RISK_PATH", 1245, 0.73),
            node(2, "merchant_risk", "merchant_risk > 0.7", "SUSPICIOUS_MERCHANT", 445, 0.89),
            node(3, "location", "international_transaction", "CROSS_BORDER_FLAG", 312, 0.65),
        ],
        top_factors: vec![
            factor(
                "High Transaction Amount",
                "$2500.00",
                0.25,
                "Amount $2500.00 is 3.2x above user average",
            ),
            factor(
                "Suspicious Merchant",
                "75.0%",
                0.22,
                "Merchant has 47% fraud rate in last 30 days",
            ),
            factor(
                "International Transaction",
                "Romania",
                0.18,
                "User has never transacted from this country before",
            ),
        ],
        feature_impacts,
        model_reasoning: "This transaction shows multiple high-risk indicators: the amount \
            ($2500.00) is significantly above normal, the merchant has a poor reputation score, \
            and the transaction pattern deviates from the user's typical behavior."
            .to_string(),
    }
}

/// Session telemetry submitted for biometric analysis.
pub fn sample_biometrics() -> BiometricSample {
    BiometricSample {
        user_id: "USR_789".to_string(),
        typing_data: TypingData {
            avg_time: 180.0,
            variance: 35.0,
            rhythm_score: 0.7,
        },
        mouse_data: MouseData {
            speed: 1200.0,
            curvature: 0.6,
            pauses: 8,
        },
        device_data: DeviceData {
            browser: "Chrome 120".to_string(),
            os: "Windows 11".to_string(),
            screen_resolution: "1920x1080".to_string(),
            timezone: "UTC-5".to_string(),
            language: "en-US".to_string(),
            is_new: false,
            vpn_detected: false,
            tor_detected: false,
            emulator_detected: false,
        },
        session_data: SessionData {
            duration: 245,
            pages_visited: 7,
            direct_to_payment: false,
            failed_logins: 0,
            rapid_clicks: 3,
        },
    }
}

pub fn biometric_report() -> BiometricReport {
    BiometricReport {
        biometric_risk_score: 0.28,
        risk_level: RiskLevel::Low,
        typing_analysis: TypingAnalysis {
            score: 0.15,
            avg_keystroke_time: 180.0,
            pattern_match: 0.85,
            anomalies: Vec::new(),
        },
        mouse_analysis: MouseAnalysis {
            score: 0.25,
            movement_speed: 1200.0,
            pattern_match: 0.75,
            anomalies: Vec::new(),
        },
        device_analysis: DeviceAnalysis {
            score: 0.1,
            fingerprint: "a3f8d92bc4e1a567".to_string(),
            is_known_device: true,
            device_attributes: DeviceAttributes {
                browser: "Chrome 120".to_string(),
                os: "Windows 11".to_string(),
                screen: "1920x1080".to_string(),
                timezone: "UTC-5".to_string(),
                language: "en-US".to_string(),
                vpn: false,
                tor: false,
            },
        },
        session_analysis: SessionAnalysis {
            score: 0.2,
            pattern_match: 0.8,
            anomalies: Vec::new(),
        },
        confidence: 0.92,
        recommendation: "ALLOW - Behavioral patterns match user profile".to_string(),
    }
}

/// Forecast for `days` days starting at `now`.
///
/// The risk curve is a deterministic weekly wave so the fallback renders the
/// same way every time.
pub fn threat_forecast(days: u32, now: DateTime<Utc>) -> ThreatForecast {
    let threat = |id: &str,
                  name: &str,
                  description: &str,
                  probability,
                  severity,
                  impact: &str,
                  in_days: i64,
                  indicators: [&str; 3],
                  mitigation: &str| EmergingThreat {
        threat_id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        probability,
        severity,
        estimated_impact: impact.to_string(),
        emergence_date: iso(now + Duration::days(in_days)),
        indicators: indicators.iter().map(|s| s.to_string()).collect(),
        mitigation: mitigation.to_string(),
    };

    let risk_timeline = (0..days)
        .map(|i| {
            let date = now + Duration::days(i as i64);
            let risk = (0.15 + (i as f64 / 7.0).sin() * 0.1 + 0.025).min(0.95);
            RiskPoint {
                date: date.format("%Y-%m-%d").to_string(),
                risk_score: risk,
                risk_level: RiskLevel::from_score(risk),
                expected_fraud_volume: (1000.0 * risk) as u64,
            }
        })
        .collect();

    let sector = |sector: &str, current, predicted, change, reason: &str, threats: [&str; 3]| {
        SectorForecast {
            sector: sector.to_string(),
            current_risk: current,
            predicted_risk: predicted,
            trend: Trend::Increasing,
            change_percent: change,
            reason: reason.to_string(),
            top_threats: threats.iter().map(|s| s.to_string()).collect(),
        }
    };

    let hotspot = |region: &str, codes: [&str; 3], risk, trend, types: [&str; 2], attacks| {
        GeoHotspot {
            region: region.to_string(),
            country_codes: codes.iter().map(|s| s.to_string()).collect(),
            risk_score: risk,
            trend,
            primary_fraud_types: types.iter().map(|s| s.to_string()).collect(),
            estimated_attacks: attacks,
        }
    };

    ThreatForecast {
        prediction_date: iso(now),
        forecast_period: format!("{} days", days),
        emerging_threats: vec![
            threat(
                "EMT-2026-001",
                "AI-Powered Social Engineering",
                "Deepfake voice/video used to bypass verification",
                0.78,
                RiskLevel::Critical,
                "$2.4M potential loss",
                15,
                [
                    "Unusual verification bypass patterns",
                    "Voice authentication failures followed by success",
                    "Video verification in unusual contexts",
                ],
                "Implement multi-modal biometric verification",
            ),
            threat(
                "EMT-2026-002",
                "Behavioral Cloning Attacks",
                "ML models trained to mimic legitimate user behavior",
                0.89,
                RiskLevel::Critical,
                "$3.1M potential loss",
                8,
                [
                    "Perfect behavioral scores on suspicious transactions",
                    "Timing patterns that match user history exactly",
                    "Suspicious account access prior to fraud",
                ],
                "Implement unpredictable challenge-response mechanisms",
            ),
            threat(
                "EMT-2026-003",
                "Supply Chain Transaction Injection",
                "Fraudulent transactions injected via compromised payment processors",
                0.62,
                RiskLevel::High,
                "$1.7M potential loss",
                22,
                [
                    "Unusual routing patterns",
                    "Duplicate transaction IDs",
                    "Processing time anomalies",
                ],
                "Enhanced processor verification and monitoring",
            ),
        ],
        risk_timeline,
        targeted_sectors: vec![
            sector(
                "E-commerce",
                0.72,
                0.84,
                16.7,
                "Holiday season approaching, increased transaction volume",
                ["Card testing", "Account takeover", "Refund fraud"],
            ),
            sector(
                "Financial Services",
                0.65,
                0.78,
                20.0,
                "New digital banking features increase attack surface",
                ["Wire fraud", "Account draining", "Synthetic identity"],
            ),
            sector(
                "Cryptocurrency",
                0.81,
                0.89,
                9.9,
                "Rising crypto values attract more fraud attempts",
                ["Wallet compromise", "Exchange hacking", "Phishing"],
            ),
        ],
        geographic_hotspots: vec![
            hotspot(
                "Eastern Europe",
                ["RO", "BG", "UA"],
                0.87,
                Trend::Increasing,
                ["Card fraud", "Identity theft"],
                23_000,
            ),
            hotspot(
                "Southeast Asia",
                ["VN", "PH", "ID"],
                0.73,
                Trend::Stable,
                ["Mobile fraud", "App fraud"],
                18_500,
            ),
            hotspot(
                "West Africa",
                ["NG", "GH", "CI"],
                0.79,
                Trend::Increasing,
                ["Romance scams", "BEC"],
                12_300,
            ),
        ],
    }
}
