use crate::domain::visa::VisaTypeOption;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentStatus {
    pub label: Option<String>,
    pub cost_adjustment: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dependents {
    pub count: Option<u32>,
    pub cost_per_dependent: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PremiumProcessing {
    pub cost: Option<f64>,
    pub time_reduction: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Country {
    pub label: Option<String>,
    pub time_multiplier: Option<f64>,
}

/// Questionnaire state. Each field is filled in once its question has been
/// answered; an estimate needs at least `visa_type`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    pub visa_type: Option<VisaTypeOption>,
    pub current_status: Option<CurrentStatus>,
    pub dependents: Option<Dependents>,
    pub premium: Option<PremiumProcessing>,
    pub country: Option<Country>,
}

/// Answers with every absent number replaced by the identity of the
/// operation it takes part in: 0 for surcharges and fees, 1 for multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAnswers<'a> {
    pub visa_type: &'a VisaTypeOption,
    pub status_adjustment: f64,
    pub dependent_count: u32,
    pub cost_per_dependent: f64,
    pub premium_cost: f64,
    pub premium_time_reduction: f64,
    pub country_time_multiplier: f64,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.visa_type.is_some()
    }

    pub fn resolve(&self) -> Option<ResolvedAnswers<'_>> {
        let visa_type = self.visa_type.as_ref()?;
        let dependents = self.dependents.as_ref();
        let premium = self.premium.as_ref();

        Some(ResolvedAnswers {
            visa_type,
            status_adjustment: self
                .current_status
                .as_ref()
                .and_then(|status| status.cost_adjustment)
                .unwrap_or(0.0),
            dependent_count: dependents.and_then(|d| d.count).unwrap_or(0),
            cost_per_dependent: dependents
                .and_then(|d| d.cost_per_dependent)
                .unwrap_or(0.0),
            premium_cost: premium.and_then(|p| p.cost).unwrap_or(0.0),
            premium_time_reduction: premium.and_then(|p| p.time_reduction).unwrap_or(1.0),
            country_time_multiplier: self
                .country
                .as_ref()
                .and_then(|country| country.time_multiplier)
                .unwrap_or(1.0),
        })
    }
}
