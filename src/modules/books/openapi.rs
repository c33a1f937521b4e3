use serde_json::{json, Value};

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" }
            }
        }
    })
}

fn success_response(description: &str, data: Value) -> Value {
    let mut properties = json!({
        "status": { "type": "string", "enum": ["success"] },
        "message": { "type": "string" }
    });
    if !data.is_null() {
        properties["data"] = data;
    }

    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "type": "object", "properties": properties }
            }
        }
    })
}

fn id_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "string" }
    })
}

fn book_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/BookInput" }
            }
        }
    })
}

/// OpenAPI fragment for the books module; paths are relative to `/books`.
pub fn document() -> Value {
    json!({
        "paths": {
            "/": {
                "get": {
                    "summary": "List books",
                    "tags": ["Books"],
                    "parameters": [
                        {
                            "name": "reading",
                            "in": "query",
                            "description": "1 for books being read, 0 for the rest",
                            "schema": { "type": "string", "enum": ["0", "1"] }
                        },
                        {
                            "name": "finished",
                            "in": "query",
                            "description": "1 for finished books, 0 for the rest",
                            "schema": { "type": "string", "enum": ["0", "1"] }
                        },
                        {
                            "name": "name",
                            "in": "query",
                            "description": "Case-insensitive name fragment",
                            "schema": { "type": "string" }
                        }
                    ],
                    "responses": {
                        "200": success_response("Matching books", json!({
                            "type": "object",
                            "properties": {
                                "books": {
                                    "type": "array",
                                    "items": { "$ref": "#/components/schemas/BookSummary" }
                                }
                            }
                        }))
                    }
                },
                "post": {
                    "summary": "Add a book",
                    "tags": ["Books"],
                    "requestBody": book_body(),
                    "responses": {
                        "201": success_response("Book added", json!({
                            "type": "object",
                            "properties": { "bookId": { "type": "string" } }
                        })),
                        "400": error_response("Missing name or readPage greater than pageCount"),
                        "500": error_response("Book could not be added")
                    }
                }
            },
            "/{id}": {
                "get": {
                    "summary": "Get a book",
                    "tags": ["Books"],
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": success_response("Book details", json!({
                            "type": "object",
                            "properties": {
                                "book": { "$ref": "#/components/schemas/Book" }
                            }
                        })),
                        "404": error_response("Book not found")
                    }
                },
                "put": {
                    "summary": "Replace a book",
                    "tags": ["Books"],
                    "parameters": [id_parameter()],
                    "requestBody": book_body(),
                    "responses": {
                        "200": success_response("Book updated", Value::Null),
                        "400": error_response("Missing name or readPage greater than pageCount"),
                        "404": error_response("Id not found"),
                        "500": error_response("Book could not be updated")
                    }
                },
                "delete": {
                    "summary": "Delete a book",
                    "tags": ["Books"],
                    "parameters": [id_parameter()],
                    "responses": {
                        "200": success_response("Book deleted", Value::Null),
                        "404": error_response("Id not found")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "BookInput": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "year": { "type": "number" },
                        "author": { "type": "string" },
                        "summary": { "type": "string" },
                        "publisher": { "type": "string" },
                        "pageCount": { "type": "integer", "minimum": 0 },
                        "readPage": { "type": "integer", "minimum": 0 },
                        "reading": { "type": "boolean" }
                    },
                    "required": ["name"]
                },
                "Book": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "year": { "type": ["number", "null"] },
                        "author": { "type": ["string", "null"] },
                        "summary": { "type": ["string", "null"] },
                        "publisher": { "type": ["string", "null"] },
                        "pageCount": { "type": "integer" },
                        "readPage": { "type": "integer" },
                        "finished": { "type": "boolean" },
                        "reading": { "type": "boolean" },
                        "insertedAt": { "type": "string", "format": "date-time" },
                        "updatedAt": { "type": "string", "format": "date-time" }
                    },
                    "required": ["id", "name", "pageCount", "readPage", "finished", "reading", "insertedAt", "updatedAt"]
                },
                "BookSummary": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "publisher": { "type": ["string", "null"] }
                    },
                    "required": ["id", "name"]
                }
            }
        }
    })
}
