// Static site content: navigation targets, service packages, plans, projects.

use yew_router::Routable;

use crate::Route;

/// A place the header can send the visitor to.
/// `route: None` stays on the current page and only jumps to the anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct Destination {
    pub label: &'static str,
    pub route: Option<Route>,
    pub anchor: Option<&'static str>,
    /// Rendered as the call-to-action pill.
    pub emphasized: bool,
}

impl Destination {
    pub fn href(&self) -> String {
        let path = self.route.as_ref().map(|route| route.to_path()).unwrap_or_default();
        match self.anchor {
            Some(anchor) => format!("{}#{}", path, anchor),
            None if path.is_empty() => "#".to_string(),
            None => path,
        }
    }
}

pub fn nav_destinations() -> Vec<Destination> {
    vec![
        Destination { label: "Services", route: Some(Route::Home), anchor: Some("services"), emphasized: false },
        Destination { label: "About", route: Some(Route::Home), anchor: Some("about"), emphasized: false },
        Destination { label: "Work", route: Some(Route::Home), anchor: Some("portfolio"), emphasized: false },
        Destination { label: "Let's Chat", route: None, anchor: Some("contact"), emphasized: true },
    ]
}

pub struct ServicePackage {
    pub title: &'static str,
    pub pitch: &'static str,
    pub highlights: [&'static str; 3],
    pub featured: bool,
}

pub const SERVICE_PACKAGES: [ServicePackage; 3] = [
    ServicePackage {
        title: "Nail Your Launch",
        pitch: "For the ambitious host starting from scratch. Sidestep the rookie mistakes and launch a listing that's profitable from day one.",
        highlights: ["Market & Yield Analysis", "Brand & Listing Creation", "Professional Media Production"],
        featured: false,
    },
    ServicePackage {
        title: "Boost Your Bookings",
        pitch: "For the seasoned host who's ready for more. We'll audit your operations and fine-tune your marketing to unlock true earning potential.",
        highlights: ["100-Point Listing Audit", "Dynamic Pricing Strategy", "Direct Booking & Social Growth"],
        featured: true,
    },
    ServicePackage {
        title: "Build Your Brand",
        pitch: "For the visionary ready to scale. Grow from a single listing into a scalable hospitality brand with a life of its own.",
        highlights: ["Multi-Unit Operational Systems", "Portfolio & Brand Expansion", "Business Valuation & Exit Plan"],
        featured: false,
    },
];

pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub audience: &'static str,
    pub price: &'static str,
    pub billing: &'static str,
    pub features: [&'static str; 4],
    pub cta: &'static str,
    pub featured: bool,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        id: "launch",
        name: "The Launchpad",
        audience: "For new properties or first-time hosts.",
        price: "Starting at $2,500",
        billing: "One-time project fee",
        features: [
            "Market Analysis & Revenue Projections",
            "Compliance & Permitting Guidance",
            "Full Listing Creation & Copywriting",
            "Professional Photoshoot & Video",
        ],
        cta: "Get Started",
        featured: false,
    },
    Plan {
        id: "boost",
        name: "The Performance Audit",
        audience: "For existing listings ready to level up.",
        price: "Starting at $1,800",
        billing: "One-time project fee",
        features: [
            "100-Point Audit of Listing & Operations",
            "Dynamic Pricing & SEO Overhaul",
            "Guest Experience Enhancement Plan",
            "Direct Booking & Social Media Strategy",
        ],
        cta: "Boost My Bookings",
        featured: true,
    },
    Plan {
        id: "brand",
        name: "The Portfolio Strategy",
        audience: "For hosts scaling to a multi-property brand.",
        price: "Custom Retainer",
        billing: "Bespoke monthly advising",
        features: [
            "Multi-Property System Development",
            "Hospitality Brand Building",
            "Team Building & SOP Creation",
            "Valuation & Exit/Acquisition Strategy",
        ],
        cta: "Build My Brand",
        featured: false,
    },
];

pub struct Project {
    pub name: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        name: "The Hudson Hideaway",
        image: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&w=800&q=80",
        alt: "Project 1",
    },
    Project {
        name: "Poconos Modern Cabin",
        image: "https://images.unsplash.com/photo-1617806118233-18e1de247200?auto=format&fit=crop&w=800&q=80",
        alt: "Project 2",
    },
    Project {
        name: "Brooklyn Brownstone",
        image: "https://images.unsplash.com/photo-1598928506311-c55ded91a20c?auto=format&fit=crop&w=800&q=80",
        alt: "Project 3",
    },
];

/// Reveal delays for a row of three staggered cards.
pub const CARD_DELAYS: [f64; 3] = [0.1, 0.2, 0.3];
pub const PLAN_DELAYS: [f64; 3] = [0.2, 0.3, 0.4];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_hrefs() {
        let hrefs: Vec<String> = nav_destinations().iter().map(Destination::href).collect();
        assert_eq!(hrefs, vec!["/#services", "/#about", "/#portfolio", "#contact"]);
    }

    #[test]
    fn test_only_chat_is_emphasized() {
        let emphasized: Vec<&str> = nav_destinations()
            .into_iter()
            .filter(|destination| destination.emphasized)
            .map(|destination| destination.label)
            .collect();
        assert_eq!(emphasized, vec!["Let's Chat"]);
    }

    #[test]
    fn test_pricing_href_without_anchor() {
        let destination = Destination { label: "Pricing", route: Some(Route::Pricing), anchor: None, emphasized: false };
        assert_eq!(destination.href(), "/pricing");
    }

    #[test]
    fn test_one_featured_card_each() {
        assert_eq!(SERVICE_PACKAGES.iter().filter(|p| p.featured).count(), 1);
        assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
    }
}
