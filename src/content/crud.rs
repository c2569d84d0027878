use super::{Block, Doc, ListItem};

pub static DOC: Doc = Doc {
    id: "crud",
    title: "CRUD Operations",
    intro: "The API provides full Create, Read, Update, and Delete functionality using \
            standardized responses. All operations follow RESTful conventions and return \
            consistent ApiResponse wrappers.",
    blocks: &[
        Block::Code {
            lang: "cs",
            source: r#"[HttpGet]
public IActionResult GetAll()
{
    var products = _context.Products.ToList();

    return Ok(new ApiResponse<List<Product>>
    {
        Error = false,
        Message = "Operation Successful",
        Data = products
    });
}

[HttpGet("{id}")]
public IActionResult GetById(int id)
{
    var product = _context.Products.Find(id);

    if (product == null)
    {
        return NotFound(new ApiResponse<Product>
        {
            Error = true,
            Message = "Product not found",
            Data = null
        });
    }

    return Ok(new ApiResponse<Product>
    {
        Error = false,
        Message = "Product retrieved successfully",
        Data = product
    });
}"#,
        },
        Block::Heading("Supported Operations"),
        Block::Bullets(&[
            ListItem {
                lead: Some("GET:"),
                text: "Retrieve single or multiple resources",
            },
            ListItem {
                lead: Some("POST:"),
                text: "Create new resources",
            },
            ListItem {
                lead: Some("PUT:"),
                text: "Update existing resources",
            },
            ListItem {
                lead: Some("DELETE:"),
                text: "Remove resources",
            },
        ]),
    ],
};
