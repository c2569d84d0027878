use super::{Block, CalloutKind, Doc, Feature};

use egui_phosphor::regular as icons;

pub static DOC: Doc = Doc {
    id: "overview",
    title: "Project Overview",
    intro: "The API is built using .NET 8 (or latest) with Swagger enabled for API testing \
            and documentation. The architecture ensures scalability, maintainability, and \
            security.",
    blocks: &[
        Block::Callout {
            kind: CalloutKind::Highlight,
            text: "Key Features: Production-ready ASP.NET Core Web API with modern best \
                   practices, comprehensive security, and developer-friendly documentation.",
        },
        Block::FeatureGrid(&[
            Feature {
                icon: icons::ROCKET_LAUNCH,
                title: "Modern Stack",
                text: ".NET 8 with latest features and performance improvements",
            },
            Feature {
                icon: icons::BOOKS,
                title: "Swagger Integration",
                text: "Interactive API documentation and testing interface",
            },
            Feature {
                icon: icons::SHIELD_CHECK,
                title: "Enterprise Security",
                text: "JWT authentication with role-based authorization",
            },
            Feature {
                icon: icons::CHART_LINE_UP,
                title: "Scalable Architecture",
                text: "Clean code structure designed for growth",
            },
        ]),
    ],
};
