//! Static site content and the pricing arithmetic behind the billing toggle.

pub const BRAND: &str = "StartupAI";

/// Monthly vs. annual billing, as chosen by the pricing toggle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    #[default]
    Annual,
}

impl BillingCycle {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Annual,
            Self::Annual => Self::Monthly,
        }
    }

    pub const fn is_annual(self) -> bool {
        matches!(self, Self::Annual)
    }
}

pub struct Plan {
    pub name: &'static str,
    pub tagline: &'static str,
    /// Dollars per month when billed monthly
    pub monthly: u32,
    /// Dollars per month when billed annually
    pub annual: u32,
    pub cta: &'static str,
    pub featured: bool,
    /// Feature text and whether the plan includes it
    pub features: &'static [(&'static str, bool)],
}

impl Plan {
    pub const fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Annual => self.annual,
        }
    }

    /// Shown next to the price; free plans have nothing to bill
    pub const fn billing_note(&self, cycle: BillingCycle) -> Option<&'static str> {
        if cycle.is_annual() && self.annual > 0 {
            Some("billed annually")
        } else {
            None
        }
    }

    /// Whole-percent saving of annual over monthly billing
    pub const fn annual_saving_percent(&self) -> u32 {
        if self.monthly == 0 {
            return 0;
        }
        (self.monthly - self.annual) * 100 / self.monthly
    }
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Free",
        tagline: "Start your startup journey",
        monthly: 0,
        annual: 0,
        cta: "Get Started",
        featured: false,
        features: &[
            ("Basic startup validation", true),
            ("1 product test per month", true),
            ("Limited AI brainstorming", true),
            ("Email support", true),
            ("Advanced analytics", false),
            ("Business architecture builder", false),
        ],
    },
    Plan {
        name: "Pro",
        tagline: "For growing startups",
        monthly: 49,
        annual: 39,
        cta: "Upgrade Now",
        featured: true,
        features: &[
            ("Advanced startup validation", true),
            ("5 product tests per month", true),
            ("Full AI brainstorming", true),
            ("Priority email support", true),
            ("Advanced analytics", true),
            ("Business architecture builder", true),
            ("Competitor analysis", false),
        ],
    },
    Plan {
        name: "Enterprise",
        tagline: "For established startups",
        monthly: 129,
        annual: 99,
        cta: "Contact Us",
        featured: false,
        features: &[
            ("All Pro features", true),
            ("Unlimited product tests", true),
            ("Custom AI training", true),
            ("Dedicated support", true),
            ("API access", true),
            ("Competitor analysis", true),
            ("Custom reporting", true),
        ],
    },
];

pub const ANNUAL_BADGE: &str = "Save 20%";

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 8] = [
    Feature {
        title: "Product Tester",
        description: "Analyze every aspect of your startup's product for market readiness with comprehensive AI-driven evaluations.",
    },
    Feature {
        title: "Business AI Brainstorming",
        description: "Refine your business idea with AI-powered insights that identify strengths, weaknesses, and untapped opportunities.",
    },
    Feature {
        title: "Startup Validator",
        description: "Get an in-depth analysis of your startup's viability with data-backed recommendations for immediate improvement.",
    },
    Feature {
        title: "Business Architecture Builder",
        description: "Map out your startup's structure for scalable growth with AI-optimized organizational frameworks.",
    },
    Feature {
        title: "Target Market Analyzer",
        description: "Identify your ideal customer segments and discover the most effective ways to reach them.",
    },
    Feature {
        title: "Competitor Intelligence",
        description: "Gain strategic insights on your competition and discover gaps in the market you can leverage.",
    },
    Feature {
        title: "Growth Strategy Planner",
        description: "Create data-driven growth roadmaps that help you achieve sustainable expansion with minimal risk.",
    },
    Feature {
        title: "Pitch Deck Optimizer",
        description: "Enhance your investor presentations with AI-recommended improvements that highlight your startup's unique value.",
    },
];

pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        title: "Enter your startup details",
        description: "Share your business concept, market, and objectives through our intuitive interface.",
    },
    Step {
        title: "AI analyzes and validates your business",
        description: "Our advanced algorithms assess market fit, competitive landscape, and growth potential.",
    },
    Step {
        title: "Receive actionable insights & recommendations",
        description: "Get detailed reports with clear steps to improve and optimize your startup strategy.",
    },
    Step {
        title: "Optimize your strategy and scale with confidence",
        description: "Implement AI-driven recommendations and track your progress as you grow.",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Alexandra Chen",
        role: "Founder & CEO, TechVista",
        quote: "StartupAI helped us identify critical gaps in our business model that we completely overlooked. The AI recommendations led to a 40% increase in customer acquisition within just 3 months.",
    },
    Testimonial {
        name: "Marcus Johnson",
        role: "Co-founder, FinEdge Solutions",
        quote: "The product testing feature saved us months of development time. We pivoted our core offering based on the AI insights and secured our Series A funding shortly after.",
    },
    Testimonial {
        name: "Sophia Martinez",
        role: "CTO, GreenLoop",
        quote: "As a technical founder, I was skeptical about AI-driven business advice, but the platform's recommendations were surprisingly insightful. It's like having a seasoned business consultant at your fingertips.",
    },
];

pub const CTA_BENEFITS: [&str; 3] = [
    "Free startup validation report",
    "Access to basic AI tools",
    "14-day Pro trial included",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices_follow_cycle() {
        let [free, pro, enterprise] = &PLANS;
        assert_eq!(free.price(BillingCycle::Annual), 0);
        assert_eq!(pro.price(BillingCycle::Monthly), 49);
        assert_eq!(pro.price(BillingCycle::Annual), 39);
        assert_eq!(enterprise.price(BillingCycle::Monthly), 129);
        assert_eq!(enterprise.price(BillingCycle::Annual), 99);
    }

    #[test]
    fn test_billing_note_only_for_paid_annual() {
        let [free, pro, _] = &PLANS;
        assert_eq!(pro.billing_note(BillingCycle::Annual), Some("billed annually"));
        assert_eq!(pro.billing_note(BillingCycle::Monthly), None);
        assert_eq!(free.billing_note(BillingCycle::Annual), None);
    }

    #[test]
    fn test_annual_saving_matches_badge() {
        assert_eq!(PLANS[1].annual_saving_percent(), 20);
        assert_eq!(PLANS[2].annual_saving_percent(), 23);
        assert_eq!(PLANS[0].annual_saving_percent(), 0);
    }

    #[test]
    fn test_toggle_defaults_to_annual() {
        assert!(BillingCycle::default().is_annual());
        assert_eq!(BillingCycle::Annual.toggled(), BillingCycle::Monthly);
    }

    #[test]
    fn test_exactly_one_featured_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
    }
}
