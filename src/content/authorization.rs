use super::{Block, Doc, ListItem};

pub static DOC: Doc = Doc {
    id: "authorization",
    title: "Role-Based Authorization",
    intro: "Role-based access control restricts endpoint access based on user roles such \
            as Admin or User. This ensures proper separation of concerns and security \
            boundaries.",
    blocks: &[
        Block::Code {
            lang: "cs",
            source: r#"[Authorize(Roles = "Admin")]
[HttpPost]
public IActionResult CreateProduct(Product product)
{
    // Only users with Admin role can access this endpoint
    _context.Products.Add(product);
    _context.SaveChanges();

    return Ok(new ApiResponse<Product>
    {
        Error = false,
        Message = "Product created successfully",
        Data = product
    });
}"#,
        },
        Block::Heading("Authorization Features"),
        Block::Bullets(&[
            ListItem {
                lead: None,
                text: "Attribute-based role enforcement",
            },
            ListItem {
                lead: None,
                text: "Multiple role support per endpoint",
            },
            ListItem {
                lead: None,
                text: "Automatic 401/403 responses for unauthorized access",
            },
            ListItem {
                lead: None,
                text: "Claims-based identity integration",
            },
            ListItem {
                lead: None,
                text: "Policy-based authorization support",
            },
        ]),
    ],
};
