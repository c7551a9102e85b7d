use serde::Serialize;

/// Derived values at full precision. Rounding happens only when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultSet {
    pub cost_per_call: f64,
    pub total_api_cost: f64,
    pub human_cost_per_second: f64,
    pub total_human_cost: f64,
    pub ai_covered_cost: f64,
    pub remaining_human_cost: f64,
    pub net_savings: f64,
    pub remaining_hours: f64,
    pub remaining_workdays: f64,
}

impl ResultSet {
    /// (name, value) pairs in display order
    pub fn fields(&self) -> [(&'static str, f64); 9] {
        [
            ("cost_per_call", self.cost_per_call),
            ("total_api_cost", self.total_api_cost),
            ("human_cost_per_second", self.human_cost_per_second),
            ("total_human_cost", self.total_human_cost),
            ("ai_covered_cost", self.ai_covered_cost),
            ("remaining_human_cost", self.remaining_human_cost),
            ("net_savings", self.net_savings),
            ("remaining_hours", self.remaining_hours),
            ("remaining_workdays", self.remaining_workdays),
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_finite())
    }

    /// Names of fields holding infinity or NaN
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        self.fields()
            .iter()
            .filter(|(_, value)| !value.is_finite())
            .map(|(name, _)| *name)
            .collect()
    }
}
