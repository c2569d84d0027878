use super::{Block, CalloutKind, Doc, ListItem};

pub static DOC: Doc = Doc {
    id: "getting-started",
    title: "Getting Started",
    intro: "Follow these steps to set up and run the ASP.NET Core Web API on your local \
            development environment.",
    blocks: &[
        Block::Heading("Prerequisites"),
        Block::Bullets(&[
            ListItem {
                lead: None,
                text: ".NET 8 SDK or later",
            },
            ListItem {
                lead: None,
                text: "SQL Server (LocalDB, Express, or Full version)",
            },
            ListItem {
                lead: None,
                text: "Visual Studio 2022 or VS Code with C# extension",
            },
            ListItem {
                lead: None,
                text: "Postman or similar API testing tool (optional)",
            },
        ]),
        Block::Heading("Installation Steps"),
        Block::Step {
            number: 1,
            title: "Create New Project",
        },
        Block::Code {
            lang: "sh",
            source: "dotnet new webapi -n MyWebApi\ncd MyWebApi",
        },
        Block::Step {
            number: 2,
            title: "Install Required Packages",
        },
        Block::Code {
            lang: "sh",
            source: "dotnet add package Microsoft.EntityFrameworkCore.SqlServer\n\
                     dotnet add package Microsoft.EntityFrameworkCore.Tools\n\
                     dotnet add package Microsoft.AspNetCore.Authentication.JwtBearer\n\
                     dotnet add package Swashbuckle.AspNetCore",
        },
        Block::Step {
            number: 3,
            title: "Configure Connection String",
        },
        Block::Paragraph("Update your appsettings.json file:"),
        Block::Code {
            lang: "json",
            source: r#"{
  "ConnectionStrings": {
    "DefaultConnection": "Server=(localdb)\\mssqllocaldb;Database=MyApiDb;Trusted_Connection=true;"
  },
  "Jwt": {
    "Key": "YourSuperSecretKeyHere123456789",
    "Issuer": "https://localhost:7001",
    "Audience": "https://localhost:7001"
  }
}"#,
        },
        Block::Step {
            number: 4,
            title: "Run Database Migrations",
        },
        Block::Code {
            lang: "sh",
            source: "dotnet ef migrations add InitialCreate\ndotnet ef database update",
        },
        Block::Step {
            number: 5,
            title: "Run the Application",
        },
        Block::Code {
            lang: "sh",
            source: "dotnet run",
        },
        Block::Callout {
            kind: CalloutKind::Success,
            text: "Your API should now be running at https://localhost:7001 and Swagger UI \
                   at https://localhost:7001/swagger",
        },
    ],
};
