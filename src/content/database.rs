use super::{Block, Doc, ListItem};

pub static DOC: Doc = Doc {
    id: "database",
    title: "Database Configuration",
    intro: "Entity Framework Core is used with SQL Server for data persistence. The \
            DbContext manages entity relationships and database operations with a clean, \
            type-safe API.",
    blocks: &[
        Block::Code {
            lang: "cs",
            source: r#"public class AppDbContext : DbContext
{
    public AppDbContext(DbContextOptions<AppDbContext> options)
        : base(options)
    {
    }

    public DbSet<User> Users { get; set; }
    public DbSet<Product> Products { get; set; }
}"#,
        },
        Block::Heading("Registering the DbContext"),
        Block::Paragraph("Add this to Program.cs:"),
        Block::Code {
            lang: "cs",
            source: r#"builder.Services.AddDbContext<ApplicationDbContext>(options =>
    options.UseSqlServer(
        builder.Configuration.GetConnectionString("DefaultConnection")));"#,
        },
        Block::Heading("Configuration Features"),
        Block::Bullets(&[
            ListItem {
                lead: None,
                text: "Entity Framework Core for ORM capabilities",
            },
            ListItem {
                lead: None,
                text: "SQL Server as the primary database provider",
            },
            ListItem {
                lead: None,
                text: "DbSet collections for entity management",
            },
            ListItem {
                lead: None,
                text: "Migration support for schema versioning",
            },
            ListItem {
                lead: None,
                text: "LINQ query support for type-safe data access",
            },
        ]),
    ],
};
