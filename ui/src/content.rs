//! Static page content: slides, services, pillars and the team roster.
//!
//! Copy that the platform translates goes through Fluent (`t!`); marketing
//! copy that only exists in English lives here as constants.

use crate::routes::NavTarget;
use crate::t;

pub struct HeroSlide {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static HERO_SLIDES: [HeroSlide; 5] = [
    HeroSlide {
        image: "/images/1.jpg",
        title: "Empowering Sustainable Mining",
        description: "Revolutionizing the minerals sector with digital solutions for responsible resource extraction.",
    },
    HeroSlide {
        image: "/images/2.jpg",
        title: "Transparent Licensing",
        description: "Streamline mining permits and certifications with our blockchain-backed verification system.",
    },
    HeroSlide {
        image: "/images/3.jpg",
        title: "Automated Royalty Calculations",
        description: "Precision mineral valuation and tax assessment using real-time market rates and production data.",
    },
    HeroSlide {
        image: "/images/4.jpg",
        title: "Environmental Stewardship",
        description: "Monitor ecological impact with integrated satellite imagery, IoT sensors, and AI analytics.",
    },
    HeroSlide {
        image: "/images/5.jpg",
        title: "Digital Transformation",
        description: "Harness machine learning to optimize extraction workflows and resource management.",
    },
];

pub struct Feature {
    pub id: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        id: 1,
        title: "DIGITAL LICENSING",
        subtitle: "Streamlined Concessions & Permits",
        description: "Centralize mining rights applications with blockchain-verified documentation to reduce processing time from months to days while ensuring regulatory compliance and preventing fraud.",
        image: "/images/13.jpg",
    },
    Feature {
        id: 2,
        title: "AUTOMATED ROYALTY CALCULATION",
        subtitle: "Precision Resource Valuation",
        description: "Advanced algorithms process real-time mineral extraction data, market prices, and grade classifications to ensure accurate royalty computations with transparent audit trails for both operators and authorities.",
        image: "/images/8.jpg",
    },
    Feature {
        id: 3,
        title: "SUSTAINABLE MINING OVERSIGHT",
        subtitle: "Environmental Intelligence",
        description: "Integrate satellite imagery, drone surveys, and IoT sensor networks to monitor water quality, air emissions, and land disturbance metrics with automated compliance reporting and remediation workflows.",
        image: "/images/9.jpg",
    },
];

/// Cards in the landing page's key-services grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Map,
    Licenses,
    Royalty,
    Minebot,
    Complaints,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::Map,
        Service::Licenses,
        Service::Royalty,
        Service::Minebot,
        Service::Complaints,
    ];

    pub fn target(self) -> NavTarget {
        match self {
            Service::Map => NavTarget::Map,
            Service::Licenses => NavTarget::Licenses,
            Service::Royalty => NavTarget::Royalty,
            Service::Minebot => NavTarget::Minebot,
            Service::Complaints => NavTarget::Complaints,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Service::Map => "🗺️",
            Service::Licenses => "📋",
            Service::Royalty => "🧮",
            Service::Minebot => "🤖",
            Service::Complaints => "📝",
        }
    }

    /// Accent modifier used for the icon badge gradient.
    pub fn accent(self) -> &'static str {
        match self {
            Service::Map => "service-card--blue",
            Service::Licenses => "service-card--green",
            Service::Royalty => "service-card--orange",
            Service::Minebot => "service-card--yellow",
            Service::Complaints => "service-card--red",
        }
    }

    pub fn title(self) -> String {
        match self {
            Service::Map => t!("service-map-title"),
            Service::Licenses => t!("service-licenses-title"),
            Service::Royalty => t!("service-royalty-title"),
            Service::Minebot => t!("service-minebot-title"),
            Service::Complaints => t!("service-complaints-title"),
        }
    }

    pub fn description(self) -> String {
        match self {
            Service::Map => t!("service-map-text"),
            Service::Licenses => t!("service-licenses-text"),
            Service::Royalty => t!("service-royalty-text"),
            Service::Minebot => t!("service-minebot-text"),
            Service::Complaints => t!("service-complaints-text"),
        }
    }
}

/// The commitment section's three pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pillar {
    Transparency,
    Efficiency,
    Sustainability,
}

impl Pillar {
    pub const ALL: [Pillar; 3] = [Pillar::Transparency, Pillar::Efficiency, Pillar::Sustainability];

    pub fn icon(self) -> &'static str {
        match self {
            Pillar::Transparency => "🔍",
            Pillar::Efficiency => "⚙️",
            Pillar::Sustainability => "🌱",
        }
    }

    pub fn title(self) -> String {
        match self {
            Pillar::Transparency => t!("pillar-transparency"),
            Pillar::Efficiency => t!("pillar-efficiency"),
            Pillar::Sustainability => t!("pillar-sustainability"),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Pillar::Transparency => "Immutable ledger technology provides unalterable records of permits, production volumes, and financial transactions for all stakeholders.",
            Pillar::Efficiency => "Machine learning algorithms optimize application processing, resource assessment, and compliance verification, reducing administrative overhead by up to 70%.",
            Pillar::Sustainability => "Advanced monitoring systems integrate with restoration planning tools to minimize ecological impact and enhance post-mining land rehabilitation.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    LinkedIn,
    Instagram,
    Twitter,
    GitHub,
}

impl SocialPlatform {
    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::GitHub => "GitHub",
        }
    }

    /// 24x24 filled SVG path for the platform's glyph.
    pub fn icon_path(self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
            SocialPlatform::Instagram => "M12 2.163c3.204 0 3.584.012 4.85.07 1.366.062 2.633.336 3.608 1.311.975.975 1.249 2.242 1.311 3.608.058 1.266.07 1.646.07 4.85s-.012 3.584-.07 4.85c-.062 1.366-.336 2.633-1.311 3.608-.975.975-2.242 1.249-3.608 1.311-1.266.058-1.646.07-4.85.07s-3.584-.012-4.85-.07c-1.366-.062-2.633-.336-3.608-1.311-.975-.975-1.249-2.242-1.311-3.608C2.175 15.584 2.163 15.204 2.163 12s.012-3.584.07-4.85c.062-1.366.336-2.633 1.311-3.608.975-.975 2.242-1.249 3.608-1.311C8.416 2.175 8.796 2.163 12 2.163zm0 3.675a6.162 6.162 0 100 12.324 6.162 6.162 0 000-12.324zM12 16a4 4 0 110-8 4 4 0 010 8zm6.406-11.845a1.44 1.44 0 100 2.881 1.44 1.44 0 000-2.881z",
            SocialPlatform::Twitter => "M23.953 4.57a10 10 0 01-2.825.775 4.958 4.958 0 002.163-2.723c-.951.555-2.005.959-3.127 1.184a4.92 4.92 0 00-8.384 4.482C7.69 8.095 4.067 6.13 1.64 3.162a4.822 4.822 0 00-.666 2.475c0 1.71.87 3.213 2.188 4.096a4.904 4.904 0 01-2.228-.616v.06a4.923 4.923 0 003.946 4.827 4.996 4.996 0 01-2.212.085 4.936 4.936 0 004.604 3.417 9.867 9.867 0 01-6.102 2.105c-.39 0-.779-.023-1.17-.067a13.995 13.995 0 007.557 2.209c9.053 0 13.998-7.496 13.998-13.985 0-.21 0-.42-.015-.63A9.935 9.935 0 0024 4.59z",
            SocialPlatform::GitHub => "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub id: u8,
    pub name: &'static str,
    pub position: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
    pub socials: &'static [SocialLink],
}

const DEFAULT_SOCIALS: &[SocialLink] = &[
    SocialLink {
        platform: SocialPlatform::LinkedIn,
        url: "#",
    },
    SocialLink {
        platform: SocialPlatform::Instagram,
        url: "#",
    },
];

pub static TEAM: [TeamMember; 7] = [
    TeamMember {
        id: 1,
        name: "Senuji De Silva",
        position: "Co-Founder & Lead Developer",
        image: "/images/senuji.png",
        bio: "With a passion for innovation and sustainability, Senuji co-founded Ceylon Mine to modernize mining operations through technology. She leads the development of intelligent systems that optimize efficiency, transparency, and compliance in the industry.",
        socials: DEFAULT_SOCIALS,
    },
    TeamMember {
        id: 2,
        name: "Minsandi De Silva",
        position: "Co-Founder & Software Solutions Lead",
        image: "/images/minsandi.jpg",
        bio: "Driven by a vision for digital transformation, Minsandi ensures that Ceylon Mine bridges the gap between technology and the mining sector. She oversees project execution, ensuring seamless integration of automation and user-centric solutions.",
        socials: DEFAULT_SOCIALS,
    },
    TeamMember {
        id: 3,
        name: "Nisil Liyanage",
        position: "Software Architect & Backend Specialist",
        image: "/images/nisil2.jpg",
        bio: "Nisil specializes in developing scalable and secure infrastructures for enterprise applications. At Ceylon Mine, he focuses on building a reliable, data-driven platform that enhances efficiency in mining operations.",
        socials: DEFAULT_SOCIALS,
    },
    TeamMember {
        id: 4,
        name: "Thisal De Silva",
        position: "Frontend Developer & UI/UX Specialist",
        image: "/images/thisal2.jpg",
        bio: "Thisal brings creativity and technical expertise to Ceylon Mine's user interface design. He ensures that our platform is not only functional but also intuitive and accessible to all users, from mining professionals to government officials.",
        socials: DEFAULT_SOCIALS,
    },
    TeamMember {
        id: 5,
        name: "Janidu De Silva",
        position: "Full Stack Developer & System Integrator",
        image: "/images/janidu.jpg",
        bio: "Janidu excels in creating seamless connections between different systems and technologies. At Ceylon Mine, he works on integrating various mining management tools into a cohesive, efficient platform.",
        socials: DEFAULT_SOCIALS,
    },
    TeamMember {
        id: 6,
        name: "Banu De Silva",
        position: "Data Analyst & Business Intelligence Lead",
        image: "/images/Banu.png",
        bio: "Banu transforms complex mining data into actionable insights. She develops analytics tools that help stakeholders make informed decisions about mining operations, compliance, and resource management.",
        socials: DEFAULT_SOCIALS,
    },
    TeamMember {
        id: 7,
        name: "Suresh De Silva",
        position: "DevOps Engineer & Infrastructure Specialist",
        image: "/images/Suresh.png",
        bio: "Suresh ensures that Ceylon Mine's platform runs smoothly and securely. He manages our cloud infrastructure, deployment processes, and system monitoring to maintain high availability and performance.",
        socials: DEFAULT_SOCIALS,
    },
];

pub struct AboutCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub static ABOUT_CARDS: [AboutCard; 3] = [
    AboutCard {
        icon: "🎯",
        title: "Our Mission",
        body: "To digitize and modernize Sri Lanka's mining sector by providing comprehensive digital solutions that enhance transparency, efficiency, and compliance while promoting sustainable mining practices.",
    },
    AboutCard {
        icon: "🔮",
        title: "Our Vision",
        body: "To become the leading digital platform for mining management in South Asia, setting new standards for transparency, efficiency, and environmental responsibility in the mining industry.",
    },
    AboutCard {
        icon: "💎",
        title: "Our Values",
        body: "Innovation, transparency, sustainability, and excellence drive everything we do. We believe in creating solutions that benefit all stakeholders while protecting our environment for future generations.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn services_link_to_distinct_external_routes() {
        let targets: HashSet<_> = Service::ALL.iter().map(|s| s.target()).collect();
        assert_eq!(targets.len(), Service::ALL.len());
        assert!(targets.iter().all(|t| !t.is_local()));
    }

    #[test]
    fn team_ids_are_unique_and_socials_present() {
        let ids: HashSet<_> = TEAM.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), TEAM.len());
        for member in &TEAM {
            assert!(!member.socials.is_empty(), "{} has no social links", member.name);
        }
    }

    #[test]
    fn every_social_platform_has_an_icon() {
        for platform in [
            SocialPlatform::LinkedIn,
            SocialPlatform::Instagram,
            SocialPlatform::Twitter,
            SocialPlatform::GitHub,
        ] {
            assert!(platform.icon_path().starts_with('M'));
            assert!(!platform.label().is_empty());
        }
    }
}
