use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Legal,
    Government,
    Dependents,
    StatusAdjustment,
    Premium,
}

impl CostCategory {
    pub fn name(self) -> &'static str {
        match self {
            CostCategory::Legal => "Legal Fees",
            CostCategory::Government => "USCIS Fees",
            CostCategory::Dependents => "Dependent Fees",
            CostCategory::StatusAdjustment => "Status Adjustment",
            CostCategory::Premium => "Premium Processing",
        }
    }

    pub fn color(self) -> (u8, u8, u8) {
        match self {
            CostCategory::Legal => (0x1a, 0x1f, 0x4e),
            CostCategory::Government => (0x3b, 0x82, 0xf6),
            CostCategory::Dependents => (0x14, 0xb8, 0xa6),
            CostCategory::StatusAdjustment => (0x8b, 0x5c, 0xf6),
            CostCategory::Premium => (0xf5, 0x9e, 0x0b),
        }
    }

    pub fn color_hex(self) -> String {
        let (r, g, b) = self.color();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdownItem {
    pub category: CostCategory,
    pub name: String,
    pub value: f64,
    pub description: String,
    pub color: String,
}

impl CostBreakdownItem {
    pub fn new(category: CostCategory, value: f64, description: impl Into<String>) -> Self {
        Self {
            category,
            name: category.name().to_string(),
            value,
            description: description.into(),
            color: category.color_hex(),
        }
    }

    /// Percentage of `total` this item represents, 0 when the total is 0.
    pub fn share_of(&self, total: f64) -> f64 {
        if total == 0.0 {
            return 0.0;
        }
        self.value / total * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketComparison {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CostSummary {
    pub total: f64,
    pub legal_fees: f64,
    pub government_fees: f64,
    pub breakdown: Vec<CostBreakdownItem>,
    pub market_comparison: Vec<MarketComparison>,
}

impl CostSummary {
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }

    pub fn item(&self, category: CostCategory) -> Option<&CostBreakdownItem> {
        self.breakdown.iter().find(|item| item.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_formats_lowercase_rgb() {
        assert_eq!(CostCategory::Legal.color_hex(), "#1a1f4e");
        assert_eq!(CostCategory::Premium.color_hex(), "#f59e0b");
    }

    #[test]
    fn share_of_zero_total_is_zero() {
        let item = CostBreakdownItem::new(CostCategory::Legal, 100.0, "x");
        assert_eq!(item.share_of(0.0), 0.0);
        assert_eq!(item.share_of(400.0), 25.0);
    }
}
