//! An optional, advisory validation pass over a finished document.
//!
//! Construction never fails, so semantic problems (mutually exclusive
//! fields both set, required fields left empty, malformed URLs) surface
//! only here. Validation walks the document tree, reports every
//! violation it finds, and never mutates or blocks anything. An empty
//! result means no known inconsistency, not spec conformance.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::models::{
    Components, Example, Header, Link, Openapi, Operation, Parameter, PathItem, SecurityScheme,
    Server,
};
use crate::primitives::{API_KEY_SCHEME, HTTP_SCHEME, OAUTH2_SCHEME, OPEN_ID_CONNECT_SCHEME};

static COMPONENT_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9.\-_]+$").unwrap());

/// A single advisory finding, with a path-style location into the
/// document and a human-readable message.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{location}: {message}")]
pub struct Violation {
    pub location: String,
    pub message: String,
}

fn report(out: &mut Vec<Violation>, location: impl Into<String>, message: impl Into<String>) {
    out.push(Violation {
        location: location.into(),
        message: message.into(),
    });
}

/// Checks a finished document and returns every violation found, in
/// document order.
pub fn validate(doc: &Openapi) -> Vec<Violation> {
    let mut out = Vec::new();

    if doc.info.title.is_empty() {
        report(&mut out, "info.title", "title must not be empty");
    }
    if doc.info.version.is_empty() {
        report(&mut out, "info.version", "version must not be empty");
    }
    if let Some(contact) = &doc.info.contact {
        if let Some(url) = &contact.url {
            check_url(&mut out, "info.contact.url", url);
        }
    }
    if let Some(license) = &doc.info.license {
        if license.name.is_empty() {
            report(&mut out, "info.license.name", "license name must not be empty");
        }
        if let Some(url) = &license.url {
            check_url(&mut out, "info.license.url", url);
        }
    }

    for (index, server) in doc.servers.iter().enumerate() {
        check_server(&mut out, &format!("servers[{index}]"), server);
    }

    if let Some(tags) = &doc.tags {
        for (index, tag) in tags.iter().enumerate() {
            if tag.name.is_empty() {
                report(
                    &mut out,
                    format!("tags[{index}].name"),
                    "tag name must not be empty",
                );
            }
            if let Some(docs) = &tag.externalDocs {
                check_url(&mut out, &format!("tags[{index}].externalDocs.url"), &docs.url);
            }
        }
    }

    if let Some(docs) = &doc.externalDocs {
        check_url(&mut out, "externalDocs.url", &docs.url);
    }

    if let Some(components) = &doc.components {
        check_components(&mut out, components);
    }

    for (path, item) in &doc.paths {
        check_path_item(&mut out, &format!("paths.{path}"), item);
    }

    out
}

fn check_url(out: &mut Vec<Violation>, location: &str, value: &str) {
    if Url::parse(value).is_err() {
        report(out, location, format!("not a valid URL: {value}"));
    }
}

fn check_server(out: &mut Vec<Violation>, location: &str, server: &Server) {
    if server.url.is_empty() {
        report(out, format!("{location}.url"), "server url must not be empty");
    }

    if let Some(variables) = &server.variables {
        for (name, variable) in variables {
            // Intended invariant, advisory only: every declared variable
            // should appear as a {name} placeholder in the url.
            if !server.url.contains(&format!("{{{name}}}")) {
                report(
                    out,
                    format!("{location}.variables.{name}"),
                    format!("no {{{name}}} placeholder in server url"),
                );
            }
            if let Some(allowed) = &variable.enumeration {
                if !allowed.contains(&variable.default) {
                    report(
                        out,
                        format!("{location}.variables.{name}.default"),
                        "default value is not a member of the enum",
                    );
                }
            }
        }
    }
}

fn check_component_keys<'a>(
    out: &mut Vec<Violation>,
    section: &str,
    keys: impl Iterator<Item = &'a String>,
) {
    for key in keys {
        if !COMPONENT_KEY_REGEX.is_match(key) {
            report(
                out,
                format!("components.{section}.{key}"),
                format!("key does not match {}", COMPONENT_KEY_REGEX.as_str()),
            );
        }
    }
}

fn check_components(out: &mut Vec<Violation>, components: &Components) {
    if let Some(schemas) = &components.schemas {
        check_component_keys(out, "schemas", schemas.keys());
    }
    if let Some(responses) = &components.responses {
        check_component_keys(out, "responses", responses.keys());
        for (key, response) in responses {
            if response.description.is_empty() {
                report(
                    out,
                    format!("components.responses.{key}.description"),
                    "response description must not be empty",
                );
            }
        }
    }
    if let Some(parameters) = &components.parameters {
        check_component_keys(out, "parameters", parameters.keys());
        for (key, parameter) in parameters {
            check_parameter(out, &format!("components.parameters.{key}"), parameter);
        }
    }
    if let Some(examples) = &components.examples {
        check_component_keys(out, "examples", examples.keys());
        for (key, example) in examples {
            check_example(out, &format!("components.examples.{key}"), example);
        }
    }
    if let Some(bodies) = &components.requestBodies {
        check_component_keys(out, "requestBodies", bodies.keys());
    }
    if let Some(headers) = &components.headers {
        check_component_keys(out, "headers", headers.keys());
        for (key, header) in headers {
            check_header(out, &format!("components.headers.{key}"), header);
        }
    }
    if let Some(schemes) = &components.securitySchemes {
        check_component_keys(out, "securitySchemes", schemes.keys());
        for (key, scheme) in schemes {
            check_security_scheme(out, &format!("components.securitySchemes.{key}"), scheme);
        }
    }
    if let Some(links) = &components.links {
        check_component_keys(out, "links", links.keys());
        for (key, link) in links {
            check_link(out, &format!("components.links.{key}"), link);
        }
    }
    if let Some(callbacks) = &components.callbacks {
        check_component_keys(out, "callbacks", callbacks.keys());
        for (key, callback) in callbacks {
            for (expression, item) in callback {
                check_path_item(
                    out,
                    &format!("components.callbacks.{key}.{expression}"),
                    item,
                );
            }
        }
    }
}

fn check_example(out: &mut Vec<Violation>, location: &str, example: &Example) {
    if example.value.is_some() && example.externalValue.is_some() {
        report(
            out,
            location,
            "value and externalValue are mutually exclusive",
        );
    }
}

fn check_parameter(out: &mut Vec<Violation>, location: &str, parameter: &Parameter) {
    if parameter.name.is_empty() {
        report(out, format!("{location}.name"), "parameter name must not be empty");
    }
    if parameter.in_type.is_empty() {
        report(out, format!("{location}.in"), "parameter location must not be empty");
    }
    match (&parameter.schema, &parameter.content) {
        (Some(_), Some(_)) => report(
            out,
            location,
            "schema and content are mutually exclusive",
        ),
        (None, None) => report(
            out,
            location,
            "either schema or content must be present",
        ),
        _ => {}
    }
    if let Some(examples) = &parameter.examples {
        for (key, example) in examples {
            check_example(out, &format!("{location}.examples.{key}"), example);
        }
    }
}

fn check_header(out: &mut Vec<Violation>, location: &str, header: &Header) {
    if header.schema.is_some() && header.content.is_some() {
        report(
            out,
            location,
            "schema and content are mutually exclusive",
        );
    }
    if let Some(examples) = &header.examples {
        for (key, example) in examples {
            check_example(out, &format!("{location}.examples.{key}"), example);
        }
    }
}

fn check_link(out: &mut Vec<Violation>, location: &str, link: &Link) {
    if link.operationRef.is_some() && link.operationId.is_some() {
        report(
            out,
            location,
            "operationRef and operationId are mutually exclusive",
        );
    }
}

fn check_security_scheme(out: &mut Vec<Violation>, location: &str, scheme: &SecurityScheme) {
    match scheme.scheme_type.as_str() {
        API_KEY_SCHEME => {
            if scheme.name.is_none() || scheme.in_type.is_none() {
                report(out, location, "apiKey scheme requires name and in");
            }
        }
        HTTP_SCHEME => {
            if scheme.scheme.is_none() {
                report(out, location, "http scheme requires scheme");
            }
        }
        OAUTH2_SCHEME => {
            if scheme.flows.is_none() {
                report(out, location, "oauth2 scheme requires flows");
            }
        }
        OPEN_ID_CONNECT_SCHEME => {
            if let Some(url) = &scheme.openIdConnectUrl {
                check_url(out, &format!("{location}.openIdConnectUrl"), url);
            } else {
                report(out, location, "openIdConnect scheme requires openIdConnectUrl");
            }
        }
        "" => report(out, location, "security scheme type must not be empty"),
        _ => {}
    }

    if let Some(flows) = &scheme.flows {
        for (flow_name, flow) in [
            ("implicit", &flows.implicit),
            ("password", &flows.password),
            ("clientCredentials", &flows.clientCredentials),
            ("authorizationCode", &flows.authorizationCode),
        ] {
            if let Some(flow) = flow {
                for (field, value) in [
                    ("authorizationUrl", &flow.authorizationUrl),
                    ("tokenUrl", &flow.tokenUrl),
                    ("refreshUrl", &flow.refreshUrl),
                ] {
                    if let Some(value) = value {
                        check_url(out, &format!("{location}.flows.{flow_name}.{field}"), value);
                    }
                }
            }
        }
    }
}

fn check_path_item(out: &mut Vec<Violation>, location: &str, item: &PathItem) {
    if let Some(parameters) = &item.parameters {
        for (index, parameter) in parameters.iter().enumerate() {
            check_parameter(out, &format!("{location}.parameters[{index}]"), parameter);
        }
    }
    if let Some(servers) = &item.servers {
        for (index, server) in servers.iter().enumerate() {
            check_server(out, &format!("{location}.servers[{index}]"), server);
        }
    }

    for (method, operation) in [
        ("get", &item.get),
        ("put", &item.put),
        ("post", &item.post),
        ("delete", &item.delete),
        ("options", &item.options),
        ("head", &item.head),
        ("patch", &item.patch),
        ("trace", &item.trace),
    ] {
        if let Some(operation) = operation {
            check_operation(out, &format!("{location}.{method}"), operation);
        }
    }
}

fn check_operation(out: &mut Vec<Violation>, location: &str, operation: &Operation) {
    if let Some(parameters) = &operation.parameters {
        for (index, parameter) in parameters.iter().enumerate() {
            check_parameter(out, &format!("{location}.parameters[{index}]"), parameter);
        }
    }

    for (code, response) in &operation.responses {
        if response.description.is_empty() {
            report(
                out,
                format!("{location}.responses.{code}.description"),
                "response description must not be empty",
            );
        }
        if let Some(headers) = &response.headers {
            for (name, header) in headers {
                check_header(
                    out,
                    &format!("{location}.responses.{code}.headers.{name}"),
                    header,
                );
            }
        }
        if let Some(links) = &response.links {
            for (name, link) in links {
                check_link(
                    out,
                    &format!("{location}.responses.{code}.links.{name}"),
                    link,
                );
            }
        }
    }

    if let Some(docs) = &operation.externalDocs {
        check_url(out, &format!("{location}.externalDocs.url"), &docs.url);
    }

    if let Some(callbacks) = &operation.callbacks {
        for (key, callback) in callbacks {
            for (expression, item) in callback {
                check_path_item(out, &format!("{location}.callbacks.{key}.{expression}"), item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::object;
    use crate::primitives::{STRING, UUID};

    #[test]
    fn a_consistent_document_has_no_violations() {
        let doc = Openapi::default()
            .title("Example API")
            .version("0.0.1")
            .server(|s| {
                s.url("{host}/api")
                    .variable("host", |v| v.default_value("http://localhost"))
            })
            .tag(|t| t.name("Profile"))
            .schema("profile", |_| object([("id", UUID.clone())]))
            .get("/profiles", |op| {
                op.query(|p| p.name("page").schema(STRING.clone()))
                    .response("200", |r| r.description("A page of profiles."))
            });

        assert_eq!(validate(&doc), Vec::new());
    }

    #[test]
    fn empty_required_fields_are_reported() {
        let doc = Openapi::default().title("").version("");

        let violations = validate(&doc);
        let locations: Vec<&str> = violations.iter().map(|v| v.location.as_str()).collect();
        assert!(locations.contains(&"info.title"));
        assert!(locations.contains(&"info.version"));
    }

    #[test]
    fn example_with_both_value_and_external_value_is_flagged_not_rejected() {
        // Construction accepts the inconsistent pair; only validation
        // reports it.
        let doc = Openapi::default().example("bad", |e| {
            e.value("literal").external_value("https://example.com/x.json")
        });

        let violations = validate(&doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "components.examples.bad");
    }

    #[test]
    fn parameter_must_carry_schema_xor_content() {
        let both = Openapi::default().get("/x", |op| {
            op.query(|p| {
                p.name("q")
                    .schema(STRING.clone())
                    .content("text/plain", |m| m)
            })
        });
        assert_eq!(validate(&both).len(), 1);

        let neither = Openapi::default().get("/x", |op| op.query(|p| p.name("q")));
        assert_eq!(validate(&neither).len(), 1);
    }

    #[test]
    fn server_variable_checks_fire() {
        let doc = Openapi::default().server(|s| {
            s.url("https://api.example.com")
                .variable("port", |v| v.enumeration(["3000", "443"]).default_value("8080"))
        });

        let violations = validate(&doc);
        let locations: Vec<&str> = violations.iter().map(|v| v.location.as_str()).collect();
        assert!(locations.contains(&"servers[0].variables.port"));
        assert!(locations.contains(&"servers[0].variables.port.default"));
    }

    #[test]
    fn security_scheme_discriminant_requirements_are_checked() {
        let doc = Openapi::default()
            .api_key_security_scheme("keyAuth", |s| s)
            .http_security_scheme("basicAuth", |s| s.scheme("basic"));

        let violations = validate(&doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "components.securitySchemes.keyAuth");
    }

    #[test]
    fn malformed_component_keys_are_reported() {
        let doc = Openapi::default().schema("bad key!", |_| STRING.clone());

        let violations = validate(&doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "components.schemas.bad key!");
        // The message quotes the enforced pattern verbatim.
        assert_eq!(
            violations[0].message,
            r"key does not match ^[a-zA-Z0-9.\-_]+$"
        );
    }

    #[test]
    fn malformed_urls_are_reported() {
        let doc = Openapi::default()
            .info(|i| i.contact(|c| c.url("not a url")))
            .external_docs(|d| d.url("https://example.com/docs"));

        let violations = validate(&doc);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "info.contact.url");
    }
}
