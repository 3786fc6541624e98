#![allow(non_snake_case)]

//! The OpenAPI 3.0 document object model.
//!
//! Field declaration order here is the serialization order, and every
//! optional field is an `Option` skipped when `None`. A field set to an
//! explicitly empty collection is `Some(empty)` and still serializes,
//! which is how "present but empty" is kept distinct from "absent". All
//! maps are [`IndexMap`] so keys serialize in insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A security requirement list: each entry maps a scheme name to the
/// scopes required of it. Any single entry satisfying a request is enough.
pub type SecurityRequirement = Vec<IndexMap<String, Vec<String>>>;

/// An expression-keyed map of [`PathItem`]s describing out-of-band
/// callback requests an API provider may initiate.
pub type Callback = IndexMap<String, PathItem>;

/// The root object of an OpenAPI document.
///
/// `servers` and `paths` are always serialized, even when empty; the rest
/// of the optional tree is omitted until populated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Openapi {
    /// The OpenAPI specification version this document conforms to.
    pub openapi: String,
    pub info: Info,
    pub servers: Vec<Server>,
    pub paths: IndexMap<String, PathItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    /// Document-level security, overridable per operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub externalDocs: Option<ExternalDocs>,
}

impl Default for Openapi {
    fn default() -> Self {
        Openapi {
            openapi: "3.0.0".to_string(),
            info: Info {
                title: "API Spec".to_string(),
                version: "v1".to_string(),
                ..Default::default()
            },
            servers: Vec::new(),
            paths: IndexMap::new(),
            components: None,
            security: None,
            tags: None,
            externalDocs: None,
        }
    }
}

/// Metadata about the API.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Info {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termsOfService: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// The version of the document itself, not of the OpenAPI spec.
    pub version: String,
}

/// Contact information for the exposed API.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// License information for the exposed API.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct License {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A single server hosting the API. The `url` may contain `{variable}`
/// placeholders substituted from `variables`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Server {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<IndexMap<String, ServerVariable>>,
}

/// A substitutable variable in a server URL template.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ServerVariable {
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<String>>,
    /// The value used when no alternative is supplied. When
    /// `enumeration` is present this should be one of its members.
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Metadata for a single tag used by operations.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub externalDocs: Option<ExternalDocs>,
}

/// A reference to external documentation.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ExternalDocs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
}

/// The document's registry of reusable named definitions.
///
/// Each sub-map stays absent until first populated and persists once
/// created, even if later emptied again.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Components {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<IndexMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, Response>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, Example>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestBodies: Option<IndexMap<String, RequestBody>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, Header>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub securitySchemes: Option<IndexMap<String, SecurityScheme>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<IndexMap<String, Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<IndexMap<String, Callback>>,
}

/// The shape of a data value: an extended subset of JSON Schema as
/// profiled by OpenAPI 3.0.
///
/// `type` is the only required keyword. An object schema carries
/// `properties`, an array schema carries `items`, scalars carry neither;
/// `allOf`/`oneOf`/`anyOf`/`not` are composition modes layered on top.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Schema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multipleOf: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusiveMaximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusiveMinimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxLength: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minLength: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxItems: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minItems: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniqueItems: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxProperties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minProperties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allOf: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oneOf: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anyOf: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additionalProperties: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

impl Schema {
    /// A schema of the given `type` with every other keyword unset.
    pub fn typed(schema_type: impl Into<String>) -> Self {
        Schema {
            schema_type: schema_type.into(),
            ..Default::default()
        }
    }
}

/// A literal or externally referenced example value.
///
/// `value` and `externalValue` are documented as mutually exclusive but
/// setting both is accepted; both serialize if both are set.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Example {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub externalValue: Option<String>,
}

/// A single operation parameter, identified by `name` and location.
///
/// A parameter should carry either `schema` or `content`, not both;
/// neither rule is enforced here.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Parameter {
    pub name: String,
    /// One of `"query"`, `"header"`, `"path"` or `"cookie"`.
    #[serde(rename = "in")]
    pub in_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowEmptyValue: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowReserved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, Example>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

/// A response header: a [`Parameter`] without `name` and `in`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowEmptyValue: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowReserved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, Example>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

/// A single request body. `content` is always present, keyed by media
/// type, and may be empty.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: IndexMap<String, MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// Schema and examples for the media type identified by its key.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<IndexMap<String, Example>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<IndexMap<String, Encoding>>,
}

/// An encoding definition applied to a single schema property.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contentType: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, Header>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowReserved: Option<bool>,
}

/// A single response from an API operation.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Response {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, Header>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<IndexMap<String, Link>>,
}

/// A design-time link from a response to another operation.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operationRef: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operationId: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestBody: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,
}

/// The operations available at a single URL template, at most one per
/// HTTP method.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct PathItem {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
}

/// A single API operation on a path. `responses` is always present and
/// may be empty.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub externalDocs: Option<ExternalDocs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operationId: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestBody: Option<RequestBody>,
    pub responses: IndexMap<String, Response>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callbacks: Option<IndexMap<String, Callback>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Overrides the document-level security declaration when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
}

/// A security scheme definition. Which optional fields are relevant
/// depends on `type`: `apiKey` needs `name` and `in`, `http` needs
/// `scheme`, `oauth2` needs `flows`, `openIdConnect` needs
/// `openIdConnectUrl`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearerFormat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flows: Option<OAuthFlows>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openIdConnectUrl: Option<String>,
}

/// The supported OAuth flow configurations.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clientCredentials: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizationCode: Option<OAuthFlow>,
}

/// Configuration details for a single OAuth flow.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct OAuthFlow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizationUrl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokenUrl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refreshUrl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<IndexMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unset_optional_fields_are_omitted() {
        let server = Server {
            url: "https://api.example.com".to_string(),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&server).unwrap(),
            r#"{"url":"https://api.example.com"}"#
        );
    }

    #[test]
    fn explicitly_empty_collections_are_emitted() {
        let server = Server {
            url: "https://api.example.com".to_string(),
            description: None,
            variables: Some(IndexMap::new()),
        };

        assert_eq!(
            serde_json::to_string(&server).unwrap(),
            r#"{"url":"https://api.example.com","variables":{}}"#
        );
    }

    #[test]
    fn default_document_always_carries_servers_and_paths() {
        let doc = Openapi::default();

        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"openapi":"3.0.0","info":{"title":"API Spec","version":"v1"},"servers":[],"paths":{}}"#
        );
    }

    #[test]
    fn server_variable_serializes_enum_before_default() {
        let var = ServerVariable {
            enumeration: Some(vec!["3000".to_string(), "443".to_string()]),
            default: "3000".to_string(),
            description: None,
        };

        assert_eq!(
            serde_json::to_string(&var).unwrap(),
            r#"{"enum":["3000","443"],"default":"3000"}"#
        );
    }

    #[test]
    fn example_accepts_both_value_and_external_value() {
        let example = Example {
            summary: None,
            description: None,
            value: Some(serde_json::json!("literal")),
            externalValue: Some("https://example.com/payload.json".to_string()),
        };

        // Both fields are emitted; exclusivity is advisory only.
        assert_eq!(
            serde_json::to_string(&example).unwrap(),
            r#"{"value":"literal","externalValue":"https://example.com/payload.json"}"#
        );
    }

    #[test]
    fn map_keys_keep_insertion_order() {
        let mut properties = IndexMap::new();
        properties.insert("zulu".to_string(), Schema::typed("string"));
        properties.insert("alpha".to_string(), Schema::typed("number"));

        let schema = Schema {
            schema_type: "object".to_string(),
            properties: Some(properties),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&schema).unwrap(),
            r#"{"type":"object","properties":{"zulu":{"type":"string"},"alpha":{"type":"number"}}}"#
        );
    }

    #[test]
    fn parameter_renames_keyword_fields() {
        let param = Parameter {
            name: "itemId".to_string(),
            in_type: "path".to_string(),
            required: Some(true),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&param).unwrap(),
            r#"{"name":"itemId","in":"path","required":true}"#
        );
    }

    #[test]
    fn schema_type_precedes_format() {
        let schema = Schema {
            schema_type: "string".to_string(),
            format: Some("uuid".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&schema).unwrap(),
            r#"{"type":"string","format":"uuid"}"#
        );
    }
}
