use super::{Block, CalloutKind, Doc, ListItem};

pub static DOC: Doc = Doc {
    id: "jwt",
    title: "JWT Authentication",
    intro: "JWT (JSON Web Token) is implemented to secure the API endpoints. Token \
            validation ensures issuer, audience, lifetime, and signing key integrity for \
            robust security.",
    blocks: &[
        Block::Code {
            lang: "cs",
            source: r#"var jwtSettings = builder.Configuration.GetSection("Jwt");
var key = Encoding.UTF8.GetBytes(jwtSettings["Key"]);

builder.Services.AddAuthentication("Bearer")
    .AddJwtBearer("Bearer", options =>
    {
        options.TokenValidationParameters = new TokenValidationParameters
        {
            ValidateIssuer = true,
            ValidateAudience = true,
            ValidateLifetime = true,
            ValidateIssuerSigningKey = true
        };
    });

builder.Services.AddAuthorization();"#,
        },
        Block::Heading("Security Validations"),
        Block::Bullets(&[
            ListItem {
                lead: Some("Issuer Validation:"),
                text: "Ensures tokens come from trusted sources",
            },
            ListItem {
                lead: Some("Audience Validation:"),
                text: "Verifies tokens are intended for this API",
            },
            ListItem {
                lead: Some("Lifetime Validation:"),
                text: "Checks token expiration timestamps",
            },
            ListItem {
                lead: Some("Signing Key Validation:"),
                text: "Confirms token signature integrity",
            },
        ]),
        Block::Callout {
            kind: CalloutKind::Highlight,
            text: "JWT provides stateless authentication, enabling horizontal scaling \
                   without session storage.",
        },
    ],
};
