use super::{Block, CalloutKind, Doc, Feature};

use egui_phosphor::regular as icons;

pub static DOC: Doc = Doc {
    id: "summary",
    title: "Architecture Summary",
    intro: "This implementation provides a complete, production-ready foundation for \
            building secure and scalable web APIs with ASP.NET Core.",
    blocks: &[
        Block::FeatureGrid(&[
            Feature {
                icon: icons::DATABASE,
                title: "Entity Framework Core",
                text: "SQL Server integration with type-safe queries",
            },
            Feature {
                icon: icons::LOCK_KEY,
                title: "JWT Authentication",
                text: "Secure API access with token validation",
            },
            Feature {
                icon: icons::USERS_THREE,
                title: "Role-Based Authorization",
                text: "Endpoint protection with user roles",
            },
            Feature {
                icon: icons::PACKAGE,
                title: "Standardized Responses",
                text: "ApiResponse wrapper for consistency",
            },
            Feature {
                icon: icons::GEAR,
                title: "Full CRUD",
                text: "Complete data manipulation operations",
            },
            Feature {
                icon: icons::BOOKS,
                title: "Swagger Support",
                text: "Interactive API testing and documentation",
            },
        ]),
        Block::Callout {
            kind: CalloutKind::Highlight,
            text: "Ready for Production: This architecture follows industry best practices \
                   and is designed to scale with your application needs.",
        },
    ],
};
