//! A programmatic builder for OpenAPI 3.0 documents.
//!
//! Documents are assembled in code through chainable builders, collected
//! in a version-keyed [`registry::SpecRegistry`], and emitted as JSON or
//! YAML by [`generator`]. Construction never fails; the optional
//! [`validator`] pass reports semantic inconsistencies after the fact.
//!
//! ```
//! use oas_forge::builder::object;
//! use oas_forge::primitives::{STRING, UUID};
//! use oas_forge::registry::SpecRegistry;
//!
//! let mut registry = SpecRegistry::new();
//! registry.api("v1", |doc| {
//!     doc.title("Example API")
//!         .version("0.0.1")
//!         .schema("profile", |_| {
//!             object([("id", UUID.clone()), ("name", STRING.clone())])
//!         })
//! });
//!
//! let json = oas_forge::generator::to_json(registry.lookup("v1").unwrap()).unwrap();
//! assert!(json.contains("\"profile\""));
//! ```

pub mod builder;
pub mod generator;
pub mod models;
pub mod primitives;
pub mod registry;
pub mod validator;

pub use builder::{array, object, value_or_env};
pub use models::Openapi;
pub use registry::SpecRegistry;

#[cfg(test)]
mod tests {
    use crate::builder::{array, object};
    use crate::primitives::{DATETIME, NUMBER, STRING, UUID};
    use crate::registry::SpecRegistry;
    use pretty_assertions::assert_eq;

    fn describe(registry: &mut SpecRegistry, version: &str) {
        registry.api(version, |doc| {
            doc.openapi("3.0.0")
                .title("BillTheBoard API")
                .description("An API to serve BillTheBoard.")
                .version("0.0.1")
                .server(|s| {
                    s.description("Development Server")
                        .url("{host}:{port}/{apiVersion}")
                        .variable("host", |v| v.default_value("http://localhost"))
                        .variable("port", |v| {
                            v.enumeration(["3000", "443"]).default_value("3000")
                        })
                        .variable("apiVersion", |v| v.default_value("v2"))
                })
                .external_docs(|d| {
                    d.description("Just an example.").url("https://remotehost:45544")
                })
                .tag(|t| t.name("Profile").description("Profile control section."))
                .tag(|t| t.name("Auth").description("API access section."))
                .schema("profile", |_| {
                    object([
                        ("id", UUID.clone()),
                        ("firstName", STRING.clone()),
                        ("dateOfBirth", DATETIME.clone()),
                    ])
                })
                .schema("tile", |_| object([("lime", array(|| STRING.clone()))]))
                .schema("array", |_| {
                    object([(
                        "of",
                        array(|| object([("objects", array(|| STRING.clone()))])),
                    )])
                })
                .schema("space", |_| {
                    object([("time", object([("reality", STRING.clone())]))])
                })
                .schema("tor", |_| array(|| STRING.clone()))
                .schema("single", |_| NUMBER.clone())
                .example("profileSignUp", |e| {
                    e.value_text(
                        "
            {
            \t\"id\": \"3243ff-fdaf434-43344-4323\",
            \t\"firstName\": \"Lima\",
            \t\"dateOfBirth\": Wed Nov 10 19:50:04 EAT 2021\",
            }
            ",
                    )
                })
                .link("tied", |l| {
                    l.operation_ref("Operation reference")
                        .operation_id("Operation Id")
                        .parameter("someParam", "some value")
                        .parameter("someOtherParam", "some other value")
                        .request_body("Some value")
                        .description("Link description")
                        .server(|s| s.url("https://remotehost:32439"))
                })
        });
    }

    #[test]
    fn a_full_document_serializes_to_the_expected_json() {
        let mut registry = SpecRegistry::new();
        describe(&mut registry, "v1");

        let expected = r#"{"openapi":"3.0.0","info":{"title":"BillTheBoard API","description":"An API to serve BillTheBoard.","version":"0.0.1"},"servers":[{"url":"{host}:{port}/{apiVersion}","description":"Development Server","variables":{"host":{"default":"http://localhost"},"port":{"enum":["3000","443"],"default":"3000"},"apiVersion":{"default":"v2"}}}],"paths":{},"components":{"schemas":{"profile":{"type":"object","properties":{"id":{"type":"string","format":"uuid"},"firstName":{"type":"string"},"dateOfBirth":{"type":"string","format":"date-time"}}},"tile":{"type":"object","properties":{"lime":{"type":"array","items":{"type":"string"}}}},"array":{"type":"object","properties":{"of":{"type":"array","items":{"type":"object","properties":{"objects":{"type":"array","items":{"type":"string"}}}}}}},"space":{"type":"object","properties":{"time":{"type":"object","properties":{"reality":{"type":"string"}}}}},"tor":{"type":"array","items":{"type":"string"}},"single":{"type":"number"}},"examples":{"profileSignUp":{"value":"{\n\t\"id\": \"3243ff-fdaf434-43344-4323\",\n\t\"firstName\": \"Lima\",\n\t\"dateOfBirth\": Wed Nov 10 19:50:04 EAT 2021\",\n}"}},"links":{"tied":{"operationRef":"Operation reference","operationId":"Operation Id","parameters":{"someParam":"some value","someOtherParam":"some other value"},"requestBody":"Some value","description":"Link description","server":{"url":"https://remotehost:32439"}}}},"tags":[{"name":"Profile","description":"Profile control section."},{"name":"Auth","description":"API access section."}],"externalDocs":{"description":"Just an example.","url":"https://remotehost:45544"}}"#;

        let json = crate::generator::to_json(registry.lookup("v1").unwrap()).unwrap();
        assert_eq!(json, expected);
    }

    #[test]
    fn validation_reports_the_documents_one_inconsistency() {
        let mut registry = SpecRegistry::new();
        describe(&mut registry, "v1");

        // The "tied" link sets both operationRef and operationId, which
        // serializes fine but is semantically exclusive.
        let violations = crate::validator::validate(registry.lookup("v1").unwrap());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "components.links.tied");
    }

    #[test]
    fn describing_the_same_version_twice_starts_over() {
        let mut registry = SpecRegistry::new();
        describe(&mut registry, "v1");
        registry.api("v1", |doc| doc.title("Replacement API").version("1.0.0"));

        let doc = registry.lookup("v1").unwrap();
        assert_eq!(doc.info.title, "Replacement API");
        assert_eq!(doc.components, None);
        assert_eq!(
            crate::generator::to_json(doc).unwrap(),
            r#"{"openapi":"3.0.0","info":{"title":"Replacement API","version":"1.0.0"},"servers":[],"paths":{}}"#
        );
    }

    #[test]
    fn operations_round_out_a_registered_document() {
        let mut registry = SpecRegistry::new();
        registry.api("v2", |doc| {
            doc.title("BillTheBoard API").version("0.0.2").post(
                "/profiles",
                |op| {
                    op.tag("Profile")
                        .operation_id("createProfile")
                        .request_body(|b| {
                            b.required(true).content("application/json", |m| {
                                m.schema(object([("firstName", STRING.clone())]))
                            })
                        })
                        .response("201", |r| r.description("The created profile."))
                },
            )
        });

        let json = crate::generator::to_json(registry.lookup("v2").unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"openapi":"3.0.0","info":{"title":"BillTheBoard API","version":"0.0.2"},"servers":[],"paths":{"/profiles":{"post":{"tags":["Profile"],"operationId":"createProfile","requestBody":{"content":{"application/json":{"schema":{"type":"object","properties":{"firstName":{"type":"string"}}}}},"required":true},"responses":{"201":{"description":"The created profile."}}}}}}"#
        );
    }
}
