// Per-page transformers: each turns one raw domain payload into the
// chart-ready view-model its page renders.

pub mod competitor;
pub mod dashboard;
pub mod market;
pub mod pricing;
pub mod regional;
pub mod service_demand;
pub mod trends;

use crate::model::Page;
use serde_json::Value;

/// View-model of whichever page was fetched.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Dashboard(dashboard::DashboardView),
    Market(market::MarketOverviewView),
    Pricing(pricing::PricingView),
    Competitors(competitor::CompetitorView),
    Regional(regional::RegionalView),
    Services(service_demand::ServiceDemandView),
    Trends(trends::TrendsView),
}

pub fn transform(page: Page, raw: &Value) -> PageView {
    match page {
        Page::Dashboard => PageView::Dashboard(dashboard::transform(raw)),
        Page::Market => PageView::Market(market::transform(raw)),
        Page::Pricing => PageView::Pricing(pricing::transform(raw)),
        Page::Competitors => PageView::Competitors(competitor::transform(raw)),
        Page::Regional => PageView::Regional(regional::transform(raw)),
        Page::Services => PageView::Services(service_demand::transform(raw)),
        Page::Trends => PageView::Trends(trends::transform(raw)),
    }
}

impl PageView {
    /// One-line summary for the cycle log.
    pub fn headline(&self) -> String {
        match self {
            PageView::Dashboard(v) => format!(
                "market {} | CAGR {} | {} leaders",
                v.current_market_size,
                v.cagr,
                v.leaders.len()
            ),
            PageView::Market(v) => format!(
                "CAGR {} | R² {} | {} years",
                v.cagr,
                v.r_squared,
                v.series.len()
            ),
            PageView::Pricing(v) => format!(
                "mean rate {} | {} services",
                v.mean_rate,
                v.rows.len()
            ),
            PageView::Competitors(v) => format!(
                "HHI {} | CR4 {} | {} competitors",
                v.hhi_index,
                v.cr4_ratio,
                v.rows.len()
            ),
            PageView::Regional(v) => format!(
                "total {} | weighted growth {} | {} regions",
                v.total_market,
                v.weighted_growth,
                v.rows.len()
            ),
            PageView::Services(v) => format!(
                "top service {} | {} periods",
                v.highest_demand_service,
                v.series.len()
            ),
            PageView::Trends(v) => format!(
                "avg adoption {} | {} trends",
                v.industry_average_adoption,
                v.cards.len()
            ),
        }
    }
}
