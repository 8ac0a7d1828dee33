/// Top-level dashboard pages, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Transactions,
    Analytics,
    ModelInsights,
    Alerts,
    Explainability,
    Biometrics,
    Predictor,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Dashboard,
        Page::Transactions,
        Page::Analytics,
        Page::ModelInsights,
        Page::Alerts,
        Page::Explainability,
        Page::Biometrics,
        Page::Predictor,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Transactions => "Transactions",
            Page::Analytics => "Analytics",
            Page::ModelInsights => "Model Insights",
            Page::Alerts => "Live Alerts",
            Page::Explainability => "Explainable AI",
            Page::Biometrics => "Biometrics",
            Page::Predictor => "Threat Predictor",
        }
    }

    pub fn index(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    /// Page for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Page> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Page::ALL.get(index).copied()
    }

    pub fn next(&self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn prev(&self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}
