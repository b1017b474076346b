// Core entities and error types.
use serde::Deserialize;
use thiserror::Error;

/// The seven analytics pages, each backed by one domain endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Market,
    Pricing,
    Competitors,
    Regional,
    Services,
    Trends,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Market,
        Page::Pricing,
        Page::Competitors,
        Page::Regional,
        Page::Services,
        Page::Trends,
    ];

    pub fn endpoint(&self) -> &'static str {
        match self {
            Page::Dashboard => "/api/dashboard/summary",
            Page::Market => "/api/market/overview",
            Page::Pricing => "/api/pricing",
            Page::Competitors => "/api/competitors",
            Page::Regional => "/api/regional",
            Page::Services => "/api/services",
            Page::Trends => "/api/trends",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Market => "Market Overview",
            Page::Pricing => "Pricing Analysis",
            Page::Competitors => "Competitor Analysis",
            Page::Regional => "Regional Analysis",
            Page::Services => "Service Demand",
            Page::Trends => "Industry Trends",
        }
    }
}

/// A market participant. Identity is required; every metric may be
/// missing and must surface as unknown, never as zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub market_share: Option<f64>,
    pub revenue_millions: Option<f64>,
    pub growth_rate_yoy: Option<f64>,
    pub employee_count: Option<f64>,
    pub customer_satisfaction: Option<f64>,
    pub digital_adoption_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Region {
    pub region: String,
    pub market_size_billions: Option<f64>,
    pub growth_rate: Option<f64>,
    pub number_of_companies: Option<f64>,
    pub avg_service_cost_index: Option<f64>,
    pub labor_cost_index: Option<f64>,
    pub digital_maturity: Option<f64>,
    pub regulatory_complexity: Option<String>,
    pub market_potential: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingService {
    pub service: String,
    pub avg_hourly_rate: Option<f64>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
    pub avg_contract_monthly: Option<f64>,
    pub market_demand_score: Option<f64>,
    pub price_trend: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendItem {
    pub trend: String,
    pub adoption_rate: Option<f64>,
    pub growth_potential: Option<f64>,
    pub impact_score: Option<f64>,
    pub investment_millions: Option<f64>,
    pub maturity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceDemandRecord {
    pub date: String,
    pub service_type: String,
    pub demand_score: Option<f64>,
    pub volume: Option<f64>,
    pub avg_ticket_value: Option<f64>,
}

/// One observed year of market sizing, with per-segment breakdown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketYear {
    pub year: Option<i64>,
    pub market_size_billions: Option<f64>,
    pub segment_residential: Option<f64>,
    pub segment_commercial: Option<f64>,
    pub segment_industrial: Option<f64>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid json body: {0}")]
    InvalidBody(String),
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Connected,
    Disconnected,
}
