//! Static OpenAPI 3 description of the notes API, rendered by `/docs`

use axum::Json;
use serde_json::{json, Value};

/// Build the OpenAPI document
pub fn openapi_document() -> Value {
    let name_param = json!({
        "name": "name",
        "in": "path",
        "required": true,
        "description": "Note name (stored as <name>.txt)",
        "schema": { "type": "string" }
    });
    let not_found = json!({ "description": "No note with this name" });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Note Store",
            "description": "Plain-text notes stored one file per note",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/notes/{name}": {
                "get": {
                    "summary": "Get the text of a note",
                    "parameters": [name_param],
                    "responses": {
                        "200": {
                            "description": "Note text",
                            "content": { "text/plain": { "schema": { "type": "string" } } }
                        },
                        "404": not_found
                    }
                },
                "put": {
                    "summary": "Replace the text of an existing note",
                    "parameters": [name_param],
                    "requestBody": {
                        "required": true,
                        "content": { "text/plain": { "schema": { "type": "string" } } }
                    },
                    "responses": {
                        "200": { "description": "Note updated" },
                        "404": not_found
                    }
                },
                "delete": {
                    "summary": "Delete a note",
                    "parameters": [name_param],
                    "responses": {
                        "200": { "description": "Note deleted" },
                        "404": not_found
                    }
                }
            },
            "/notes": {
                "get": {
                    "summary": "List all notes",
                    "responses": {
                        "200": {
                            "description": "Every stored note",
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
                }
            },
            "/write": {
                "post": {
                    "summary": "Create a note from a form submission or a JSON body",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/x-www-form-urlencoded": {
                                "schema": { "$ref": "#/components/schemas/WriteNoteForm" }
                            },
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/WriteNoteForm" }
                            }
                        }
                    },
                    "responses": {
                        "201": { "description": "Note created" },
                        "400": { "description": "Unreadable body, missing field, or a note with this name already exists" }
                    }
                }
            },
            "/UploadForm.html": {
                "get": {
                    "summary": "HTML form for uploading a note",
                    "responses": {
                        "200": {
                            "description": "Upload form",
                            "content": { "text/html": {} }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Note": {
                    "type": "object",
                    "required": ["name", "text"],
                    "properties": {
                        "name": { "type": "string" },
                        "text": { "type": "string" }
                    }
                },
                "WriteNoteForm": {
                    "type": "object",
                    "required": ["note_name", "note"],
                    "properties": {
                        "note_name": { "type": "string" },
                        "note": { "type": "string" }
                    }
                }
            }
        }
    })
}

/// GET /openapi.json
pub async fn openapi_spec() -> Json<Value> {
    Json(openapi_document())
}
