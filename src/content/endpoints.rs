use super::{Block, CalloutKind, Doc, Endpoint, HttpMethod};

pub static DOC: Doc = Doc {
    id: "endpoints",
    title: "API Endpoints",
    intro: "Complete reference of all available API endpoints with request/response \
            examples.",
    blocks: &[
        Block::Heading("Authentication Endpoints"),
        Block::Endpoint(Endpoint {
            method: HttpMethod::Post,
            path: "/api/auth/register",
            admin_only: false,
            summary: "Register a new user account",
            example: r#"Request Body:
{
  "username": "user@example.com",
  "password": "User@123",
  "role": "User"
}

Response:
{
  "error": false,
  "message": "User registered successfully",
  "data": {
    "id": 1,
    "username": "user@example.com",
    "role": "User"
  }
}"#,
        }),
        Block::Endpoint(Endpoint {
            method: HttpMethod::Post,
            path: "/api/auth/login",
            admin_only: false,
            summary: "Authenticate and receive JWT token",
            example: r#"Request Body:
{
  "username": "user@example.com",
  "password": "User@123"
}

Response:
{
  "error": false,
  "message": "Login successful",
  "data": {
    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
    "expiration": "2024-12-31T23:59:59Z"
  }
}"#,
        }),
        Block::Heading("Product Endpoints"),
        Block::Endpoint(Endpoint {
            method: HttpMethod::Get,
            path: "/api/products",
            admin_only: false,
            summary: "Get all products",
            example: r#"Response:
{
  "error": false,
  "message": "Operation successful",
  "data": [
    {
      "id": 1,
      "name": "Product 1",
      "price": 99.99,
      "description": "Product description"
    }
  ]
}"#,
        }),
        Block::Endpoint(Endpoint {
            method: HttpMethod::Get,
            path: "/api/products/{id}",
            admin_only: false,
            summary: "Get product by ID",
            example: r#"Response:
{
  "error": false,
  "message": "Product retrieved successfully",
  "data": {
    "id": 1,
    "name": "Product 1",
    "price": 99.99,
    "description": "Product description"
  }
}"#,
        }),
        Block::Endpoint(Endpoint {
            method: HttpMethod::Post,
            path: "/api/products",
            admin_only: true,
            summary: "Create a new product",
            example: r#"Request Body:
{
  "name": "New Product",
  "price": 149.99,
  "description": "Product description"
}

Response:
{
  "error": false,
  "message": "Product created successfully",
  "data": {
    "id": 2,
    "name": "New Product",
    "price": 149.99,
    "description": "Product description"
  }
}"#,
        }),
        Block::Endpoint(Endpoint {
            method: HttpMethod::Put,
            path: "/api/products/{id}",
            admin_only: true,
            summary: "Update an existing product",
            example: r#"Request Body:
{
  "name": "Updated Product",
  "price": 199.99,
  "description": "Updated description"
}

Response:
{
  "error": false,
  "message": "Product updated successfully",
  "data": {
    "id": 1,
    "name": "Updated Product",
    "price": 199.99,
    "description": "Updated description"
  }
}"#,
        }),
        Block::Endpoint(Endpoint {
            method: HttpMethod::Delete,
            path: "/api/products/{id}",
            admin_only: true,
            summary: "Delete a product",
            example: r#"Response:
{
  "error": false,
  "message": "Product deleted successfully",
  "data": null
}"#,
        }),
        Block::Callout {
            kind: CalloutKind::Info,
            text: "Note: Endpoints marked as admin-only require authentication and \
                   specific roles. Include the JWT token in the Authorization header: \
                   Bearer {token}",
        },
    ],
};
