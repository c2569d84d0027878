use super::{Block, CalloutKind, Doc, ListItem};

pub static DOC: Doc = Doc {
    id: "swagger",
    title: "Swagger Configuration",
    intro: "Swagger provides interactive API documentation and testing capabilities. This \
            configuration integrates JWT Bearer authentication into Swagger UI, allowing \
            you to test protected endpoints.",
    blocks: &[
        Block::Heading("Complete Swagger Setup with JWT"),
        Block::Paragraph("Add the following configuration to your Program.cs file:"),
        Block::Code {
            lang: "cs",
            source: r#"builder.Services.AddSwaggerGen(options =>
{
    options.AddSecurityDefinition("Bearer", new Microsoft.OpenApi.Models.OpenApiSecurityScheme
    {
        Name = "Authorization",
        Type = Microsoft.OpenApi.Models.SecuritySchemeType.Http,
        Scheme = "bearer",
        BearerFormat = "JWT",
        In = Microsoft.OpenApi.Models.ParameterLocation.Header,
        Description = "JWT Authorization header using the Bearer scheme."
    });

    options.AddSecurityRequirement(new Microsoft.OpenApi.Models.OpenApiSecurityRequirement
    {
        {
            new Microsoft.OpenApi.Models.OpenApiSecurityScheme
            {
                Reference = new Microsoft.OpenApi.Models.OpenApiReference
                {
                    Type = Microsoft.OpenApi.Models.ReferenceType.SecurityScheme,
                    Id = "Bearer"
                }
            },
            Array.Empty<string>()
        }
    });
});"#,
        },
        Block::Heading("Configuration Breakdown"),
        Block::SubHeading("Security Definition"),
        Block::Bullets(&[
            ListItem {
                lead: Some("Name:"),
                text: "\"Authorization\" - The header name where the token will be sent",
            },
            ListItem {
                lead: Some("Type:"),
                text: "Http - Specifies HTTP authentication scheme",
            },
            ListItem {
                lead: Some("Scheme:"),
                text: "\"bearer\" - Uses Bearer token authentication",
            },
            ListItem {
                lead: Some("BearerFormat:"),
                text: "\"JWT\" - Indicates the token format",
            },
            ListItem {
                lead: Some("In:"),
                text: "Header - Token is sent in the request header",
            },
        ]),
        Block::SubHeading("Security Requirement"),
        Block::Paragraph(
            "The AddSecurityRequirement method applies the Bearer authentication globally \
             to all endpoints in Swagger UI. This adds the \"Authorize\" button to the \
             Swagger interface.",
        ),
        Block::Heading("Enable Swagger Middleware"),
        Block::Paragraph("Add these lines to enable Swagger in your application pipeline:"),
        Block::Code {
            lang: "cs",
            source: r#"if (app.Environment.IsDevelopment())
{
    app.UseSwagger();
    app.UseSwaggerUI(c =>
    {
        c.SwaggerEndpoint("/swagger/v1/swagger.json", "My API V1");
        c.RoutePrefix = "swagger";
    });
}"#,
        },
        Block::Heading("Using Swagger with JWT"),
        Block::Step {
            number: 1,
            title: "Obtain JWT Token",
        },
        Block::Paragraph("First, call your login endpoint to get a JWT token:"),
        Block::Code {
            lang: "json",
            source: r#"POST /api/auth/login
{
  "username": "admin@example.com",
  "password": "Admin@123"
}

Response:
{
  "error": false,
  "message": "Login successful",
  "data": {
    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
  }
}"#,
        },
        Block::Step {
            number: 2,
            title: "Authorize in Swagger",
        },
        Block::Callout {
            kind: CalloutKind::Info,
            text: "Click the \"Authorize\" button at the top of Swagger UI, paste your \
                   token (without \"Bearer\" prefix), and click \"Authorize\". All \
                   subsequent requests will include the JWT token automatically.",
        },
        Block::Step {
            number: 3,
            title: "Test Protected Endpoints",
        },
        Block::Paragraph(
            "Now you can test any protected endpoint. Swagger will automatically include \
             the Authorization header with your JWT token in all requests.",
        ),
        Block::Callout {
            kind: CalloutKind::Warning,
            text: "Important: Only enable Swagger in development environments. For \
                   production, remove or secure the Swagger endpoint to prevent exposing \
                   your API structure.",
        },
    ],
};
