//! Static copy for the landing page.

use crate::models::{Feature, Link, SecurityFeature, SubFeature};

pub const PRODUCT_NAME: &str = "Support3";

pub const DEFAULT_TITLE: &str = "The Technical Support Agent For Web3";

pub const META_DESCRIPTION: &str =
    "Support3 is a technical support agent for Web3 that tracks, prioritizes and resolves issues across your channels.";

pub const HERO_BLURB: &str = "Support3 is a technical support agent for Web3, designed to help you scale support without hiring linearly. \
It monitors customer channels, tracks and prioritizes issues, and resolves technical queries. \
It also takes autonomous actions across internal tools and seamlessly integrates into your workflows.";

pub const CTA_LABEL: &str = "Get Started";
pub const CTA_FORM_URL: &str = "https://forms.gle/HUuKBhGsimgeVWvH7";

pub const VIDEO_EMBED_URL: &str =
    "https://www.loom.com/embed/6200d1241179478b80ee89599e585ba0?sid=2eeab290-f86a-489f-b98a-199e089f164f";

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub static FEATURES: &[Feature] = &[
    Feature {
        title: "Add the agent to any channel or platform",
        description: "Support3 integrates with conversational channels and support tools, with API access for flexibility.",
        sub_features: &[
            SubFeature {
                heading: "Optimized for chat platforms",
                text: "Works seamlessly in Telegram, Discord, and Slack to track and manage support requests.",
            },
            SubFeature {
                heading: "Compatible with support tools",
                text: "Can be embedded in platforms like Intercom, Zendesk, and Pylon for better issue tracking.",
            },
            SubFeature {
                heading: "API access for full flexibility",
                text: "Use API access to integrate Support3 into any platform or workflow.",
            },
        ],
        image_url: "/images/channels.png",
    },
    Feature {
        title: "Automatically track issues and topics of interest",
        description: "Support3 monitors conversations across channels to capture important discussions.",
        sub_features: &[
            SubFeature {
                heading: "Tracks across public and private channels",
                text: "Identifies bugs, feature requests, support questions, and mentions across community and internal spaces.",
            },
            SubFeature {
                heading: "Organizes and prioritizes automatically",
                text: "Tags issues with priority and category so nothing is overlooked.",
            },
            SubFeature {
                heading: "Ensures nothing slips through",
                text: "Keeps teams informed without requiring manual tracking or message scanning.",
            },
        ],
        image_url: "/images/issues.png",
    },
    Feature {
        title: "Automatically resolve issues",
        description: "Support3 handles L1 support and helps accelerate complex issue resolution.",
        sub_features: &[
            SubFeature {
                heading: "Resolves common support questions",
                text: "Uses internal tools and knowledge bases to handle L1 issues automatically.",
            },
            SubFeature {
                heading: "Assists with deeper issue research",
                text: "Gathers relevant information on L2/L3 issues to improve response quality and speed.",
            },
            SubFeature {
                heading: "Frees up the team for critical work",
                text: "Reduces time spent on repetitive queries, allowing teams to focus on higher-value tasks.",
            },
        ],
        image_url: "/images/resolution.png",
    },
    Feature {
        title: "Works with your tools",
        description: "Support3 automates workflows by integrating with existing systems.",
        sub_features: &[
            SubFeature {
                heading: "Logs issues in support platforms",
                text: "Automatically creates tickets in tools like Intercom, Zendesk, and Linear.",
            },
            SubFeature {
                heading: "Updates issue trackers and CRMs",
                text: "Ensures important data is logged in platforms like Jira and HubSpot.",
            },
            SubFeature {
                heading: "Reduces manual admin work",
                text: "Automates tedious logging and tracking so teams can focus on customer interactions.",
            },
        ],
        image_url: "/images/workflow-image.png",
    },
    Feature {
        title: "Actionable insights for product and revenue",
        description: "Support3 helps teams improve products and customer experience.",
        sub_features: &[
            SubFeature {
                heading: "Aggregates customer feedback",
                text: "Identifies common themes and pain points from conversations.",
            },
            SubFeature {
                heading: "Highlights documentation gaps",
                text: "Surfaces missing or unclear information to improve self-serve support.",
            },
            SubFeature {
                heading: "Helps draft FAQs and responses",
                text: "Generates content based on real customer interactions to enhance support resources.",
            },
        ],
        image_url: "/images/insight.png",
    },
];

pub const SECURITY_HEADING: &str = "Security and Privacy You Can Trust";
pub const SECURITY_BLURB: &str = "With our team's experience from building Oxpass.io, we've embedded security and privacy into Support3 from day one.";

pub static SECURITY_FEATURES: &[SecurityFeature] = &[
    SecurityFeature {
        icon: "🛡️",
        title: "Enterprise Security",
        description: "All tools used ensure the highest levels of security compliance, providing enterprise-level protection.",
    },
    SecurityFeature {
        icon: "🔐",
        title: "Data Encryption",
        description: "Your data is encrypted and protected using industry-leading security standards and best practices.",
    },
    SecurityFeature {
        icon: "🏗️",
        title: "Secure Infrastructure",
        description: "Built on enterprise-grade infrastructure with multiple layers of security and redundancy.",
    },
];

pub const COPYRIGHT: &str = "© 2025 Chennchuu Inc. All rights reserved.";

pub static FOOTER_LINKS: &[Link] = &[
    Link {
        label: "Privacy Policy",
        href: "https://support3.xyz/privacy",
    },
    Link {
        label: "Terms of Service",
        href: "https://support3.xyz/terms",
    },
];
