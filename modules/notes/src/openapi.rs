//! Static OpenAPI 3.0 description of the notes HTTP API.

use serde_json::{Value, json};

fn id_parameter(description: &str) -> Value {
    json!({
        "in": "path",
        "name": "id",
        "required": true,
        "schema": { "type": "integer" },
        "description": description
    })
}

fn title_body(example: &str) -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": {
                    "type": "object",
                    "required": ["title"],
                    "properties": {
                        "title": { "type": "string", "example": example }
                    }
                }
            }
        }
    })
}

fn note_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Note" }
            }
        }
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Error" }
            }
        }
    })
}

/// Build the document served at `/api-docs/openapi.json`.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "notes API",
            "version": "1.0.0",
            "description": "In-memory notes CRUD service."
        },
        "paths": {
            "/api/notes": {
                "get": {
                    "summary": "List all notes",
                    "responses": {
                        "200": {
                            "description": "All stored notes in creation order.",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/Note" }
                                    }
                                }
                            }
                        }
                    }
                },
                "post": {
                    "summary": "Create a note",
                    "requestBody": title_body("New note title"),
                    "responses": {
                        "201": note_response("The created note."),
                        "400": error_response("Title is missing or blank.")
                    }
                }
            },
            "/api/notes/{id}": {
                "get": {
                    "summary": "Get a note by id",
                    "parameters": [id_parameter("Id of the note to fetch")],
                    "responses": {
                        "200": note_response("The requested note."),
                        "404": error_response("No note with that id.")
                    }
                },
                "put": {
                    "summary": "Replace a note",
                    "parameters": [id_parameter("Id of the note to replace")],
                    "requestBody": title_body("Updated note title"),
                    "responses": {
                        "200": note_response("The replaced note."),
                        "400": error_response("Title is missing or blank."),
                        "404": error_response("No note with that id.")
                    }
                },
                "delete": {
                    "summary": "Delete a note",
                    "parameters": [id_parameter("Id of the note to delete")],
                    "responses": {
                        "204": { "description": "The note was deleted." },
                        "404": error_response("No note with that id.")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Note": {
                    "type": "object",
                    "required": ["id", "title"],
                    "properties": {
                        "id": { "type": "integer", "example": 1 },
                        "title": { "type": "string", "example": "First note" }
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["error"],
                    "properties": {
                        "error": { "type": "string", "example": "Note not found" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_covers_every_operation() {
        let doc = openapi_document();
        let paths = &doc["paths"];

        for method in ["get", "post"] {
            assert!(paths["/api/notes"][method].is_object(), "missing {}", method);
        }
        for method in ["get", "put", "delete"] {
            assert!(paths["/api/notes/{id}"][method].is_object(), "missing {}", method);
        }

        assert!(paths["/api/notes"]["post"]["responses"]["201"].is_object());
        assert!(paths["/api/notes/{id}"]["delete"]["responses"]["204"].is_object());
    }

    #[test]
    fn test_refs_resolve_to_components() {
        let doc = openapi_document();
        let schemas = &doc["components"]["schemas"];
        assert_eq!(schemas["Note"]["properties"]["id"]["type"], "integer");
        assert_eq!(schemas["Error"]["properties"]["error"]["type"], "string");
    }
}
