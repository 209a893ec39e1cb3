// web_app/content.rs - Static site configuration
//
// Every piece of copy, every image path and every entry animation on the
// landing page is declared here. Components read from these constants and
// hold no copy of their own.

use serde_json::{json, Value};

use super::model::{Motion, NavigationTarget, ProductListing, Transition, Trigger, VisualState};

pub const BRAND: &str = "TwineFishery";
pub const PAGE_TITLE: &str = "TwineFishery | Fresh Seafood from Indonesia";
pub const META_DESCRIPTION: &str =
    "Premium quality seafood exported from Indonesia's pristine waters to markets worldwide.";
pub const STYLESHEET_PATH: &str = "/pkg/twinefishery.css";

/// A button label and where it leads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: NavigationTarget,
}

/// The header title doubles as a link home
pub const HEADER_TITLE: CallToAction = CallToAction {
    label: BRAND,
    target: NavigationTarget::Home,
};
pub const SUN_ICON: &str = "☀️";
pub const MOON_ICON: &str = "🌙";

pub mod hero {
    use super::*;

    pub const BACKGROUND_IMAGE: &str = "/images/hero.jpg";
    pub const HEADING: &str = "FRESH FROM INDONESIA TO THE WORLD";
    pub const SUBTITLE: &str =
        "Delivering premium quality seafood from Indonesia’s pristine waters directly to your market.";
    pub const CTA: CallToAction = CallToAction {
        label: "Explore Products",
        target: NavigationTarget::Products,
    };

    pub const SECTION_MOTION: Motion = Motion {
        initial: VisualState::hidden(0, 0),
        target: VisualState::SHOWN,
        transition: Transition::new(1000, 0),
        trigger: Trigger::Mount,
    };
    pub const HEADING_MOTION: Motion = Motion {
        initial: VisualState::hidden(0, -20),
        target: VisualState::SHOWN,
        transition: Transition::delayed(300),
        trigger: Trigger::Mount,
    };
    pub const SUBTITLE_MOTION: Motion = Motion {
        initial: VisualState::hidden(0, 20),
        target: VisualState::SHOWN,
        transition: Transition::delayed(600),
        trigger: Trigger::Mount,
    };
}

pub mod about {
    use super::*;

    pub const HEADING: &str = "FRESH & SUSTAINABLE";
    pub const BODY: &str = "At TwineFishery, we connect Indonesia’s top-quality fisheries with global seafood lovers, focusing on sustainability and traceability in every shipment.";
    pub const CTA: CallToAction = CallToAction {
        label: "Learn More",
        target: NavigationTarget::About,
    };

    pub const HEADING_MOTION: Motion = Motion {
        initial: VisualState::hidden(0, 0),
        target: VisualState::SHOWN,
        transition: Transition::new(600, 0),
        trigger: Trigger::Viewport,
    };
    pub const BODY_MOTION: Motion = Motion {
        initial: VisualState::hidden(0, 0),
        target: VisualState::SHOWN,
        transition: Transition::delayed(200),
        trigger: Trigger::Viewport,
    };
}

pub mod story {
    use super::*;

    pub const IMAGE: &str = "/images/story.jpg";
    pub const IMAGE_ALT: &str = "Our Story";
    pub const HEADING: &str = "OUR STORY";
    pub const BODY: &str = "Born out of passion for seafood and innovation, TwineFishery aims to revolutionize how fresh seafood is sourced and delivered. We work directly with coastal communities to ensure fair trade and top quality.";
    pub const CTA: CallToAction = CallToAction {
        label: "Read More",
        target: NavigationTarget::About,
    };

    pub const TEXT_MOTION: Motion = Motion {
        initial: VisualState::hidden(50, 0),
        target: VisualState::SHOWN,
        transition: Transition::new(500, 0),
        trigger: Trigger::Viewport,
    };
}

pub mod products {
    use super::*;

    pub const HEADING: &str = "OUR PRODUCTS";
    pub const INTRO: &str = "From live groupers to processed seafood, we offer a wide variety of fish and marine goods tailored to meet the needs of global buyers.";

    /// Showcase entries, rendered in this order
    pub const LISTINGS: [ProductListing; 3] = [
        ProductListing {
            image_path: "/images/groupers.jpg",
            display_name: "Live Groupers",
        },
        ProductListing {
            image_path: "/images/fillets.jpg",
            display_name: "Fish Fillets",
        },
        ProductListing {
            image_path: "/images/frozen.jpg",
            display_name: "Frozen Seafood",
        },
    ];
}

pub mod partnering {
    use super::*;

    pub const HEADING: &str = "PARTNERING FOR EXCELLENCE";
    pub const BODY: &str = "Join hands with us and discover a seamless export process, with full quality control and timely shipments to your destination.";
    pub const CTA: CallToAction = CallToAction {
        label: "Contact Us",
        target: NavigationTarget::Contact,
    };
}

pub mod newsletter {
    pub const HEADING: &str = "SIGN UP TO OUR NEWSLETTER";
    pub const BODY: &str =
        "Get the latest news on our seafood offerings and global shipping updates.";
    pub const PLACEHOLDER: &str = "Enter your email";
    pub const SUBMIT_LABEL: &str = "Subscribe";
}

pub mod footer {
    pub const TAGLINE: &str = "Exporting quality seafood from Indonesia to the world.";
    pub const EMAIL: &str = "hello@twinefishery.com";
    pub const PHONE: &str = "+62 812 3456 7890";
    pub const SOCIAL: &str = "Instagram / Facebook / LinkedIn";
}

/// Footer copyright line for the given year
pub fn copyright_notice(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND)
}

/// schema.org Organization record embedded in the page head
pub fn organization_json_ld() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": BRAND,
        "description": META_DESCRIPTION,
        "email": footer::EMAIL,
        "telephone": footer::PHONE,
        "makesOffer": products::LISTINGS
            .iter()
            .map(|item| json!({
                "@type": "Offer",
                "itemOffered": { "@type": "Product", "name": item.display_name, "image": item.image_path },
            }))
            .collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_notice_format() {
        assert_eq!(
            copyright_notice(2025),
            "© 2025 TwineFishery. All rights reserved."
        );
    }

    #[test]
    fn test_hero_cta_goes_to_products() {
        assert_eq!(hero::CTA.label, "Explore Products");
        assert_eq!(hero::CTA.target.path(), "/products");
    }

    #[test]
    fn test_hero_fades_in_over_one_second_on_mount() {
        let m = hero::SECTION_MOTION;
        assert_eq!(m.initial.opacity, 0.0);
        assert_eq!(m.target.opacity, 1.0);
        assert_eq!(m.transition.duration_ms, 1000);
        assert_eq!(m.trigger, Trigger::Mount);
    }

    #[test]
    fn test_viewport_sections() {
        for m in [about::HEADING_MOTION, about::BODY_MOTION, story::TEXT_MOTION] {
            assert_eq!(m.trigger, Trigger::Viewport);
            assert_eq!(m.target, VisualState::SHOWN);
        }
    }

    #[test]
    fn test_json_ld_lists_products_in_order() {
        let ld = organization_json_ld();
        assert_eq!(ld["name"], "TwineFishery");
        let names: Vec<&str> = ld["makesOffer"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["itemOffered"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Live Groupers", "Fish Fillets", "Frozen Seafood"]);
    }
}
