use super::{Block, CalloutKind, Doc};

pub static DOC: Doc = Doc {
    id: "error-handling",
    title: "Error Handling",
    intro: "The API implements comprehensive error handling to provide clear, actionable \
            error messages to clients while maintaining security best practices.",
    blocks: &[
        Block::Heading("Standard Error Response"),
        Block::Paragraph("All errors follow the same ApiResponse structure:"),
        Block::Code {
            lang: "json",
            source: r#"{
  "error": true,
  "message": "Descriptive error message",
  "data": null
}"#,
        },
        Block::Heading("HTTP Status Codes"),
        Block::Table {
            headers: &["Status Code", "Meaning", "When Used"],
            rows: &[
                &["200 OK", "Success", "Request completed successfully"],
                &["201 Created", "Resource Created", "New resource created successfully"],
                &[
                    "400 Bad Request",
                    "Invalid Input",
                    "Validation errors or malformed request",
                ],
                &[
                    "401 Unauthorized",
                    "Not Authenticated",
                    "Missing or invalid JWT token",
                ],
                &[
                    "403 Forbidden",
                    "Not Authorized",
                    "User lacks required role/permissions",
                ],
                &[
                    "404 Not Found",
                    "Resource Not Found",
                    "Requested resource doesn't exist",
                ],
                &[
                    "500 Internal Server Error",
                    "Server Error",
                    "Unexpected server-side error",
                ],
            ],
        },
        Block::Heading("Common Error Scenarios"),
        Block::SubHeading("Validation Error (400)"),
        Block::Code {
            lang: "json",
            source: r#"{
  "error": true,
  "message": "Validation failed",
  "data": {
    "errors": {
      "Name": ["The Name field is required."],
      "Price": ["Price must be greater than 0."]
    }
  }
}"#,
        },
        Block::SubHeading("Authentication Error (401)"),
        Block::Code {
            lang: "json",
            source: r#"{
  "error": true,
  "message": "Invalid credentials",
  "data": null
}"#,
        },
        Block::SubHeading("Authorization Error (403)"),
        Block::Code {
            lang: "json",
            source: r#"{
  "error": true,
  "message": "You do not have permission to perform this action",
  "data": null
}"#,
        },
        Block::SubHeading("Not Found Error (404)"),
        Block::Code {
            lang: "json",
            source: r#"{
  "error": true,
  "message": "Product not found",
  "data": null
}"#,
        },
        Block::Heading("Global Exception Handler"),
        Block::Paragraph("Implement a global exception handler in Program.cs:"),
        Block::Code {
            lang: "cs",
            source: r#"app.UseExceptionHandler(errorApp =>
{
    errorApp.Run(async context =>
    {
        context.Response.StatusCode = 500;
        context.Response.ContentType = "application/json";

        var error = context.Features.Get<IExceptionHandlerFeature>();
        if (error != null)
        {
            var response = new ApiResponse<object>
            {
                Error = true,
                Message = "An unexpected error occurred",
                Data = null
            };

            await context.Response.WriteAsJsonAsync(response);
        }
    });
});"#,
        },
        Block::Callout {
            kind: CalloutKind::Warning,
            text: "Security Note: Never expose sensitive error details (like stack traces \
                   or database connection strings) in production. Log detailed errors \
                   server-side only.",
        },
    ],
};
