//! Service catalog
//!
//! The ten offerings of FC and Sons Consulting, plus lookup helpers used by
//! the CLI, the detail view and the contact form's subject picker.

use crate::error::{ConsultError, ConsultResult};
use crate::models::{ServiceIcon, ServiceItem, OTHER_SUBJECT};

/// Every service, in display order
pub static SERVICES: [ServiceItem; 10] = [
    ServiceItem {
        id: 1,
        title: "Mutual Funds",
        description: "Expertly managed investment portfolios.",
        icon: ServiceIcon::TrendingUp,
        long_description: "Unlock the potential of the equity and debt markets with our scientifically curated mutual fund portfolios. We analyze thousands of funds to select those that align strictly with your risk appetite and financial horizons, ensuring optimal returns over time.",
        features: &[
            "Personalized Risk Profiling",
            "Quarterly Portfolio Rebalancing",
            "SIP, SWP & Lumpsum Facilities",
            "Tax Saving (ELSS) Recommendations",
        ],
    },
    ServiceItem {
        id: 2,
        title: "Demat Services",
        description: "Secure and seamless electronic trading.",
        icon: ServiceIcon::Landmark,
        long_description: "Experience seamless trading and investing with our state-of-the-art Demat services. We provide a highly secure platform for holding your shares and securities electronically, effectively eliminating the risks associated with physical certificates and paperwork.",
        features: &[
            "Zero Account Opening Charges",
            "Lowest Brokerage Rates",
            "Real-time Portfolio Analytics",
            "Integrated Mobile Trading App",
        ],
    },
    ServiceItem {
        id: 3,
        title: "Insurance",
        description: "Comprehensive Health & Vehicle coverage.",
        icon: ServiceIcon::Shield,
        long_description: "Protect what matters most with our comprehensive insurance solutions. Whether it is safeguarding your health against rising medical costs or insuring your vehicle against accidents, we provide policies with the best claim settlement ratios in the industry.",
        features: &[
            "Cashless Hospitalization Network",
            "24/7 Claim Assistance",
            "Comprehensive & Third-party Auto Cover",
            "Critical Illness Riders",
        ],
    },
    ServiceItem {
        id: 4,
        title: "Forex",
        description: "Competitive foreign exchange rates.",
        icon: ServiceIcon::RefreshCcw,
        long_description: "Navigate the global market with ease. Our Forex services offer competitive exchange rates for travel, education, and business purposes. We ensure compliance with all FEMA regulations while providing swift currency conversion and remittance services.",
        features: &[
            "Best Market Rates",
            "Multi-currency Travel Cards",
            "Outward Remittance for Education",
            "Doorstep Currency Delivery",
        ],
    },
    ServiceItem {
        id: 5,
        title: "Customs Duty",
        description: "Navigating import/export taxes efficiently.",
        icon: ServiceIcon::Truck,
        long_description: "Streamline your international trade with our expert Customs Duty consultancy. We assist businesses in classifying goods correctly, calculating precise duties, and leveraging government schemes to minimize costs and avoid legal hurdles at the border.",
        features: &[
            "HSN Code Classification",
            "Duty Drawback Assistance",
            "IGST Refund Processing",
            "Import/Export Licensing",
        ],
    },
    ServiceItem {
        id: 6,
        title: "Accounting & Taxation",
        description: "Precise bookkeeping and tax planning.",
        icon: ServiceIcon::Calculator,
        long_description: "Stay compliant and stress-free with our end-to-end accounting and taxation services. From maintaining daily ledgers to filing complex GST and Income Tax returns, our chartered accountants ensure your financial records are impeccable.",
        features: &[
            "GST Registration & Filing",
            "Income Tax Return (ITR)",
            "Bookkeeping & Payroll",
            "Tax Planning & Optimization",
        ],
    },
    ServiceItem {
        id: 7,
        title: "Auditing & Assurance",
        description: "Internal and statutory audit services.",
        icon: ServiceIcon::FileCheck,
        long_description: "Enhance the credibility of your financial statements with our Auditing and Assurance services. We conduct thorough internal, statutory, and tax audits to identify discrepancies, improve operational efficiency, and ensure regulatory compliance.",
        features: &[
            "Statutory Audit",
            "Internal Control Review",
            "Tax Audit (Section 44AB)",
            "Due Diligence Reports",
        ],
    },
    ServiceItem {
        id: 8,
        title: "Real Estate",
        description: "Property investment and management.",
        icon: ServiceIcon::Home,
        long_description: "Build tangible wealth with our Real Estate advisory. We help you identify high-growth residential and commercial properties, manage rental yields, and handle the legal documentation required for buying, selling, or leasing property.",
        features: &[
            "Property Valuation",
            "Legal Title Verification",
            "Commercial Leasing",
            "Investment Advisory",
        ],
    },
    ServiceItem {
        id: 9,
        title: "Bill Discounting",
        description: "Improve cash flow with invoice financing.",
        icon: ServiceIcon::Banknote,
        long_description: "Don't let unpaid invoices stall your business growth. Our Bill Discounting services provide you with immediate working capital by converting your accounts receivable into cash, allowing you to maintain a healthy cash flow cycle.",
        features: &[
            "Instant Liquidity",
            "Competitive Discount Rates",
            "Off-balance Sheet Financing",
            "Flexible Repayment Terms",
        ],
    },
    ServiceItem {
        id: 10,
        title: "FD and Bonds",
        description: "Secure fixed income investment options.",
        icon: ServiceIcon::PiggyBank,
        long_description: "Secure your future with risk-free investment options. We offer a wide range of Corporate Fixed Deposits and Government Bonds that provide higher interest rates than traditional savings accounts, ensuring steady and guaranteed returns.",
        features: &[
            "High Interest Corporate FDs",
            "Sovereign Gold Bonds (SGB)",
            "RBI Floating Rate Bonds",
            "Senior Citizen Special Schemes",
        ],
    },
];

/// Footer shortcuts: (label, contact subject they prefill)
pub const FOOTER_LINKS: [(&str, &str); 4] = [
    ("Mutual Funds", "Mutual Funds"),
    ("Taxation", "Accounting & Taxation"),
    ("Real Estate", "Real Estate"),
    ("Forex", "Forex"),
];

/// Read-only access to the catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogService;

impl CatalogService {
    /// Create a new catalog service
    pub fn new() -> Self {
        Self
    }

    /// All services in display order
    pub fn all(&self) -> &'static [ServiceItem] {
        &SERVICES
    }

    /// Number of services
    pub fn len(&self) -> usize {
        SERVICES.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        SERVICES.is_empty()
    }

    /// Get a service by id
    pub fn get(&self, id: u32) -> Option<&'static ServiceItem> {
        SERVICES.iter().find(|s| s.id == id)
    }

    /// Get a service by its position in the display order
    pub fn at(&self, index: usize) -> Option<&'static ServiceItem> {
        SERVICES.get(index)
    }

    /// Position of a service in the display order
    pub fn index_of(&self, id: u32) -> Option<usize> {
        SERVICES.iter().position(|s| s.id == id)
    }

    /// Find a service by numeric id or case-insensitive title
    pub fn find(&self, query: &str) -> ConsultResult<&'static ServiceItem> {
        let query = query.trim();

        let by_id = query.parse::<u32>().ok().and_then(|id| self.get(id));
        by_id
            .or_else(|| SERVICES.iter().find(|s| s.title_matches(query)))
            .ok_or_else(|| ConsultError::service_not_found(query))
    }

    /// Choices for the contact form subject: every title, then "Other"
    pub fn subject_options(&self) -> Vec<&'static str> {
        SERVICES
            .iter()
            .map(|s| s.title)
            .chain(std::iter::once(OTHER_SUBJECT))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_shape() {
        let catalog = CatalogService::new();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());

        let ids: HashSet<u32> = catalog.all().iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=10).collect());

        for service in catalog.all() {
            assert_eq!(service.features.len(), 4, "{}", service.title);
            assert!(!service.long_description.is_empty());
        }
    }

    #[test]
    fn test_find_by_id_and_title() {
        let catalog = CatalogService::new();
        assert_eq!(catalog.find("4").unwrap().title, "Forex");
        assert_eq!(catalog.find("real estate").unwrap().id, 8);
        assert_eq!(catalog.find("  FD AND BONDS ").unwrap().id, 10);
    }

    #[test]
    fn test_find_missing() {
        let catalog = CatalogService::new();
        assert!(catalog.find("42").unwrap_err().is_not_found());
        assert!(catalog.find("Crypto").unwrap_err().is_not_found());
    }

    #[test]
    fn test_positions() {
        let catalog = CatalogService::new();
        assert_eq!(catalog.at(0).unwrap().title, "Mutual Funds");
        assert_eq!(catalog.index_of(10), Some(9));
        assert!(catalog.at(10).is_none());
    }

    #[test]
    fn test_subject_options() {
        let options = CatalogService::new().subject_options();
        assert_eq!(options.len(), 11);
        assert_eq!(options[0], "Mutual Funds");
        assert_eq!(options.last(), Some(&"Other"));
    }

    #[test]
    fn test_footer_links_resolve() {
        let catalog = CatalogService::new();
        for (_, subject) in FOOTER_LINKS {
            assert!(catalog.find(subject).is_ok(), "{}", subject);
        }
    }
}
