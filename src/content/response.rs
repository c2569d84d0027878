use super::{Block, CalloutKind, Doc, ListItem};

pub static DOC: Doc = Doc {
    id: "response",
    title: "Standard API Response Model",
    intro: "All endpoints return a consistent response structure to ensure predictable \
            client-side handling. This standardization simplifies error handling and data \
            processing across your application.",
    blocks: &[
        Block::Code {
            lang: "cs",
            source: r#"public class ApiResponse<T>
{
    public bool Error { get; set; }
    public string Message { get; set; }
    public T Data { get; set; }
}"#,
        },
        Block::Heading("Response Properties"),
        Block::Bullets(&[
            ListItem {
                lead: Some("Error:"),
                text: "Boolean flag indicating operation success or failure",
            },
            ListItem {
                lead: Some("Message:"),
                text: "Human-readable description of the operation result",
            },
            ListItem {
                lead: Some("Data:"),
                text: "Generic type containing the actual response payload",
            },
        ]),
        Block::Callout {
            kind: CalloutKind::Highlight,
            text: "This pattern ensures consistent error handling and makes it easier to \
                   build robust client applications.",
        },
    ],
};
