use askama::Template;

use crate::models::landing::{FEATURES, Feature, PRICING_TIERS, PricingTier, TESTIMONIALS, Testimonial};
use super::PageContext;

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub features: &'static [Feature],
    pub tiers: &'static [PricingTier],
    pub testimonials: &'static [Testimonial],
}

impl HomeTemplate {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            features: &FEATURES,
            tiers: &PRICING_TIERS,
            testimonials: &TESTIMONIALS,
        }
    }
}
