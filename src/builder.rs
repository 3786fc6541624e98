//! Chainable construction helpers for the document model.
//!
//! Every builder method takes ownership of the entity, mutates it, and
//! returns it, so configuration reads as one call chain. Nested entities
//! are configured through closures that receive a fresh default instance
//! and return the configured one; the parent stores whatever the closure
//! returns. None of these methods validate anything: setting semantically
//! inconsistent combinations is accepted and left to [`crate::validator`]
//! to report after the fact.
//!
//! Optional collections are lazily initialized on first use. Once a
//! container exists it stays present (and serializes) even if emptied
//! again later.

use indexmap::IndexMap;

use crate::models::{
    Callback, Contact, Encoding, Example, ExternalDocs, Header, Info, License, Link, MediaType,
    OAuthFlow, OAuthFlows, Openapi, Operation, Parameter, PathItem, RequestBody, Response, Schema,
    SecurityRequirement, SecurityScheme, Server, ServerVariable, Tag,
};
use crate::primitives::{
    API_KEY_SCHEME, ARRAY_TYPE, HTTP_SCHEME, IN_COOKIE, IN_HEADER, IN_PATH, IN_QUERY,
    OAUTH2_SCHEME, OBJECT_TYPE, OPEN_ID_CONNECT_SCHEME, STRING_TYPE,
};

/// Builds an object [`Schema`] whose `properties` map holds the given
/// pairs in the order given. Duplicate names: last write wins. An empty
/// input yields `{"type":"object","properties":{}}`.
pub fn object<K, I>(properties: I) -> Schema
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Schema)>,
{
    let mut map = IndexMap::new();
    for (name, schema) in properties {
        map.insert(name.into(), schema);
    }

    let mut s = Schema::typed(OBJECT_TYPE);
    s.properties = Some(map);
    s
}

/// Builds an array [`Schema`] whose `items` is the supplier's result.
/// The supplier is invoked exactly once.
pub fn array(items: impl FnOnce() -> Schema) -> Schema {
    let mut s = Schema::typed(ARRAY_TYPE);
    s.items = Some(Box::new(items()));
    s
}

/// Resolves to the named environment variable's value when it is set and
/// readable, else falls back to `literal`. Every lookup failure is
/// treated as "not set"; nothing propagates.
pub fn value_or_env(literal: &str, key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| literal.to_string())
}

/// Strips the common leading whitespace of all non-blank lines, the way
/// multi-line literals are conventionally dedented.
fn dedent(text: &str) -> String {
    // Indentation is measured and stripped in characters, not bytes, so
    // multibyte whitespace never splits a line mid-character.
    let indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                let cut = line
                    .char_indices()
                    .nth(indent)
                    .map(|(offset, _)| offset)
                    .unwrap_or(line.len());
                &line[cut..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Openapi {
    /// Sets the OpenAPI specification version string.
    pub fn openapi(mut self, version: impl Into<String>) -> Self {
        self.openapi = version.into();
        self
    }

    /// Sets `info.title`.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.info.title = title.into();
        self
    }

    /// Sets `info.description`.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.info.description = Some(description.into());
        self
    }

    /// Sets `info.version`: the document's own version, not the OpenAPI
    /// specification version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.info.version = version.into();
        self
    }

    /// Reconfigures the whole `info` block.
    pub fn info(mut self, block: impl FnOnce(Info) -> Info) -> Self {
        self.info = block(std::mem::take(&mut self.info));
        self
    }

    /// Appends a server.
    pub fn server(mut self, block: impl FnOnce(Server) -> Server) -> Self {
        self.servers.push(block(Server::default()));
        self
    }

    /// Appends a tag, creating the tag list on first use.
    pub fn tag(mut self, block: impl FnOnce(Tag) -> Tag) -> Self {
        self.tags
            .get_or_insert_with(Vec::new)
            .push(block(Tag::default()));
        self
    }

    pub fn external_docs(mut self, block: impl FnOnce(ExternalDocs) -> ExternalDocs) -> Self {
        self.externalDocs = Some(block(ExternalDocs::default()));
        self
    }

    /// Sets the document-level security requirement list.
    pub fn security(mut self, requirement: SecurityRequirement) -> Self {
        self.security = Some(requirement);
        self
    }

    fn components_mut(&mut self) -> &mut crate::models::Components {
        self.components.get_or_insert_with(Default::default)
    }

    /// Registers a reusable schema under `key`. The block starts from a
    /// plain string schema; returning any other schema replaces it
    /// wholesale. Re-registering a key overwrites the previous entry.
    pub fn schema(mut self, key: impl Into<String>, block: impl FnOnce(Schema) -> Schema) -> Self {
        let schema = block(Schema::typed(STRING_TYPE));
        self.components_mut()
            .schemas
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), schema);
        self
    }

    /// Registers a reusable example under `key`.
    pub fn example(
        mut self,
        key: impl Into<String>,
        block: impl FnOnce(Example) -> Example,
    ) -> Self {
        let example = block(Example::default());
        self.components_mut()
            .examples
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), example);
        self
    }

    /// Registers a reusable response under `key`.
    pub fn response(
        mut self,
        key: impl Into<String>,
        block: impl FnOnce(Response) -> Response,
    ) -> Self {
        let response = block(Response::default());
        self.components_mut()
            .responses
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), response);
        self
    }

    /// Registers a reusable parameter under `key`.
    pub fn parameter(
        mut self,
        key: impl Into<String>,
        block: impl FnOnce(Parameter) -> Parameter,
    ) -> Self {
        let parameter = block(Parameter::default());
        self.components_mut()
            .parameters
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), parameter);
        self
    }

    /// Registers a reusable request body under `key`.
    pub fn request_body(
        mut self,
        key: impl Into<String>,
        block: impl FnOnce(RequestBody) -> RequestBody,
    ) -> Self {
        let body = block(RequestBody::default());
        self.components_mut()
            .requestBodies
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), body);
        self
    }

    /// Registers a reusable header under `key`.
    pub fn header(mut self, key: impl Into<String>, block: impl FnOnce(Header) -> Header) -> Self {
        let header = block(Header::default());
        self.components_mut()
            .headers
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), header);
        self
    }

    /// Registers a reusable link under `key`.
    pub fn link(mut self, key: impl Into<String>, block: impl FnOnce(Link) -> Link) -> Self {
        let link = block(Link::default());
        self.components_mut()
            .links
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), link);
        self
    }

    /// Registers an empty callback map under `key`. Registering the same
    /// key again leaves the existing content untouched.
    pub fn callback(mut self, key: impl Into<String>) -> Self {
        self.components_mut()
            .callbacks
            .get_or_insert_with(IndexMap::new)
            .entry(key.into())
            .or_insert_with(Callback::new);
        self
    }

    /// Adds (or reconfigures) the [`PathItem`] stored at `expression`
    /// inside the callback registered under `key`.
    pub fn callback_path(
        mut self,
        key: impl Into<String>,
        expression: impl Into<String>,
        block: impl FnOnce(PathItem) -> PathItem,
    ) -> Self {
        let callback = self
            .components_mut()
            .callbacks
            .get_or_insert_with(IndexMap::new)
            .entry(key.into())
            .or_insert_with(Callback::new);
        let item = callback.entry(expression.into()).or_default();
        *item = block(std::mem::take(item));
        self
    }

    fn security_scheme(
        mut self,
        key: impl Into<String>,
        scheme_type: &str,
        block: impl FnOnce(SecurityScheme) -> SecurityScheme,
    ) -> Self {
        let seed = SecurityScheme {
            scheme_type: scheme_type.to_string(),
            ..Default::default()
        };
        self.components_mut()
            .securitySchemes
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), block(seed));
        self
    }

    /// Registers an `apiKey` security scheme; the `type` discriminant is
    /// pre-set before the block runs.
    pub fn api_key_security_scheme(
        self,
        key: impl Into<String>,
        block: impl FnOnce(SecurityScheme) -> SecurityScheme,
    ) -> Self {
        self.security_scheme(key, API_KEY_SCHEME, block)
    }

    /// Registers an `http` security scheme.
    pub fn http_security_scheme(
        self,
        key: impl Into<String>,
        block: impl FnOnce(SecurityScheme) -> SecurityScheme,
    ) -> Self {
        self.security_scheme(key, HTTP_SCHEME, block)
    }

    /// Registers an `oauth2` security scheme.
    pub fn oauth2_security_scheme(
        self,
        key: impl Into<String>,
        block: impl FnOnce(SecurityScheme) -> SecurityScheme,
    ) -> Self {
        self.security_scheme(key, OAUTH2_SCHEME, block)
    }

    /// Registers an `openIdConnect` security scheme.
    pub fn open_id_connect_security_scheme(
        self,
        key: impl Into<String>,
        block: impl FnOnce(SecurityScheme) -> SecurityScheme,
    ) -> Self {
        self.security_scheme(key, OPEN_ID_CONNECT_SCHEME, block)
    }

    /// Resolves or creates the [`PathItem`] at `path` and hands it to the
    /// block. Re-registering a path reuses the existing item, so method
    /// definitions accumulate instead of discarding one another.
    pub fn describe_path(
        mut self,
        path: impl Into<String>,
        block: impl FnOnce(PathItem) -> PathItem,
    ) -> Self {
        let item = self.paths.entry(path.into()).or_default();
        *item = block(std::mem::take(item));
        self
    }

    /// Registers a GET operation at `path`.
    pub fn get(self, path: impl Into<String>, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.describe_path(path, |item| item.get(block))
    }

    /// Registers a PUT operation at `path`.
    pub fn put(self, path: impl Into<String>, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.describe_path(path, |item| item.put(block))
    }

    /// Registers a POST operation at `path`.
    pub fn post(self, path: impl Into<String>, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.describe_path(path, |item| item.post(block))
    }

    /// Registers a DELETE operation at `path`.
    pub fn delete(
        self,
        path: impl Into<String>,
        block: impl FnOnce(Operation) -> Operation,
    ) -> Self {
        self.describe_path(path, |item| item.delete(block))
    }

    /// Registers an OPTIONS operation at `path`.
    pub fn options(
        self,
        path: impl Into<String>,
        block: impl FnOnce(Operation) -> Operation,
    ) -> Self {
        self.describe_path(path, |item| item.options(block))
    }

    /// Registers a HEAD operation at `path`.
    pub fn head(self, path: impl Into<String>, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.describe_path(path, |item| item.head(block))
    }

    /// Registers a PATCH operation at `path`.
    pub fn patch(
        self,
        path: impl Into<String>,
        block: impl FnOnce(Operation) -> Operation,
    ) -> Self {
        self.describe_path(path, |item| item.patch(block))
    }

    /// Registers a TRACE operation at `path`.
    pub fn trace(
        self,
        path: impl Into<String>,
        block: impl FnOnce(Operation) -> Operation,
    ) -> Self {
        self.describe_path(path, |item| item.trace(block))
    }
}

impl Info {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn terms_of_service(mut self, terms: impl Into<String>) -> Self {
        self.termsOfService = Some(terms.into());
        self
    }

    pub fn contact(mut self, block: impl FnOnce(Contact) -> Contact) -> Self {
        self.contact = Some(block(Contact::default()));
        self
    }

    pub fn license(mut self, block: impl FnOnce(License) -> License) -> Self {
        self.license = Some(block(License::default()));
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

impl Contact {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl License {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl Server {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a URL template variable, creating the variable map on first
    /// use. Re-adding a name replaces the previous definition.
    pub fn variable(
        mut self,
        name: impl Into<String>,
        block: impl FnOnce(ServerVariable) -> ServerVariable,
    ) -> Self {
        self.variables
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), block(ServerVariable::default()));
        self
    }
}

impl ServerVariable {
    /// Sets the allowed values from an explicit ordered list of names.
    pub fn enumeration<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.enumeration = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Tag {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn external_docs(mut self, block: impl FnOnce(ExternalDocs) -> ExternalDocs) -> Self {
        self.externalDocs = Some(block(ExternalDocs::default()));
        self
    }
}

impl ExternalDocs {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Schema {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn multiple_of(mut self, value: f64) -> Self {
        self.multipleOf = Some(value);
        self
    }

    pub fn maximum(mut self, value: f64) -> Self {
        self.maximum = Some(value);
        self
    }

    pub fn exclusive_maximum(mut self, value: f64) -> Self {
        self.exclusiveMaximum = Some(value);
        self
    }

    pub fn minimum(mut self, value: f64) -> Self {
        self.minimum = Some(value);
        self
    }

    pub fn exclusive_minimum(mut self, value: f64) -> Self {
        self.exclusiveMinimum = Some(value);
        self
    }

    pub fn max_length(mut self, value: u64) -> Self {
        self.maxLength = Some(value);
        self
    }

    pub fn min_length(mut self, value: u64) -> Self {
        self.minLength = Some(value);
        self
    }

    pub fn max_items(mut self, value: u64) -> Self {
        self.maxItems = Some(value);
        self
    }

    pub fn min_items(mut self, value: u64) -> Self {
        self.minItems = Some(value);
        self
    }

    pub fn unique_items(mut self, value: bool) -> Self {
        self.uniqueItems = Some(value);
        self
    }

    pub fn max_properties(mut self, value: u64) -> Self {
        self.maxProperties = Some(value);
        self
    }

    pub fn min_properties(mut self, value: u64) -> Self {
        self.minProperties = Some(value);
        self
    }

    /// Appends a property name to the `required` list.
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    pub fn enumeration<V: Into<serde_json::Value>>(
        mut self,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.enumeration = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn schema_type(mut self, schema_type: impl Into<String>) -> Self {
        self.schema_type = schema_type.into();
        self
    }

    /// Appends a schema to the `allOf` composition list.
    pub fn all_of(mut self, schema: Schema) -> Self {
        self.allOf.get_or_insert_with(Vec::new).push(schema);
        self
    }

    /// Appends a schema to the `oneOf` composition list.
    pub fn one_of(mut self, schema: Schema) -> Self {
        self.oneOf.get_or_insert_with(Vec::new).push(schema);
        self
    }

    /// Appends a schema to the `anyOf` composition list.
    pub fn any_of(mut self, schema: Schema) -> Self {
        self.anyOf.get_or_insert_with(Vec::new).push(schema);
        self
    }

    pub fn not(mut self, schema: Schema) -> Self {
        self.not = Some(Box::new(schema));
        self
    }

    pub fn items(mut self, schema: Schema) -> Self {
        self.items = Some(Box::new(schema));
        self
    }

    /// Adds a named property, creating the `properties` map on first
    /// use. Re-adding a name replaces the previous schema.
    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), schema);
        self
    }

    pub fn additional_properties(mut self, schema: Schema) -> Self {
        self.additionalProperties = Some(Box::new(schema));
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn nullable(mut self, value: bool) -> Self {
        self.nullable = Some(value);
        self
    }

    pub fn example(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.example = Some(value.into());
        self
    }

    pub fn deprecated(mut self, value: bool) -> Self {
        self.deprecated = Some(value);
        self
    }
}

impl Example {
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the literal example value. Exclusivity against
    /// `externalValue` is not enforced.
    pub fn value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the value from a multi-line text literal, dedented and
    /// trimmed so indented raw strings read naturally at the call site.
    pub fn value_text(mut self, text: &str) -> Self {
        self.value = Some(serde_json::Value::String(dedent(text).trim().to_string()));
        self
    }

    pub fn external_value(mut self, url: impl Into<String>) -> Self {
        self.externalValue = Some(url.into());
        self
    }
}

fn located_parameter(location: &str, block: impl FnOnce(Parameter) -> Parameter) -> Parameter {
    let seed = Parameter {
        in_type: location.to_string(),
        ..Default::default()
    };
    block(seed)
}

impl Parameter {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the parameter location (`query`, `header`, `path`, `cookie`).
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.in_type = location.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }

    pub fn allow_empty_value(mut self, allow: bool) -> Self {
        self.allowEmptyValue = Some(allow);
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn explode(mut self, explode: bool) -> Self {
        self.explode = Some(explode);
        self
    }

    pub fn allow_reserved(mut self, allow: bool) -> Self {
        self.allowReserved = Some(allow);
        self
    }

    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn example(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.example = Some(value.into());
        self
    }

    /// Adds a named example, creating the `examples` map on first use.
    pub fn example_named(
        mut self,
        key: impl Into<String>,
        block: impl FnOnce(Example) -> Example,
    ) -> Self {
        self.examples
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), block(Example::default()));
        self
    }

    /// Adds a media-type entry, creating the `content` map on first use.
    pub fn content(
        mut self,
        media_type: impl Into<String>,
        block: impl FnOnce(MediaType) -> MediaType,
    ) -> Self {
        self.content
            .get_or_insert_with(IndexMap::new)
            .insert(media_type.into(), block(MediaType::default()));
        self
    }
}

impl Header {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }

    pub fn allow_empty_value(mut self, allow: bool) -> Self {
        self.allowEmptyValue = Some(allow);
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn explode(mut self, explode: bool) -> Self {
        self.explode = Some(explode);
        self
    }

    pub fn allow_reserved(mut self, allow: bool) -> Self {
        self.allowReserved = Some(allow);
        self
    }

    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn example(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.example = Some(value.into());
        self
    }

    pub fn example_named(
        mut self,
        key: impl Into<String>,
        block: impl FnOnce(Example) -> Example,
    ) -> Self {
        self.examples
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), block(Example::default()));
        self
    }

    pub fn content(
        mut self,
        media_type: impl Into<String>,
        block: impl FnOnce(MediaType) -> MediaType,
    ) -> Self {
        self.content
            .get_or_insert_with(IndexMap::new)
            .insert(media_type.into(), block(MediaType::default()));
        self
    }
}

impl RequestBody {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a media-type entry to `content` (which always serializes,
    /// even while empty).
    pub fn content(
        mut self,
        media_type: impl Into<String>,
        block: impl FnOnce(MediaType) -> MediaType,
    ) -> Self {
        self.content
            .insert(media_type.into(), block(MediaType::default()));
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }
}

impl MediaType {
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn example(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.example = Some(value.into());
        self
    }

    pub fn example_named(
        mut self,
        key: impl Into<String>,
        block: impl FnOnce(Example) -> Example,
    ) -> Self {
        self.examples
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), block(Example::default()));
        self
    }

    pub fn encoding(
        mut self,
        property: impl Into<String>,
        block: impl FnOnce(Encoding) -> Encoding,
    ) -> Self {
        self.encoding
            .get_or_insert_with(IndexMap::new)
            .insert(property.into(), block(Encoding::default()));
        self
    }
}

impl Encoding {
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.contentType = Some(content_type.into());
        self
    }

    pub fn header(
        mut self,
        name: impl Into<String>,
        block: impl FnOnce(Header) -> Header,
    ) -> Self {
        self.headers
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), block(Header::default()));
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn explode(mut self, explode: bool) -> Self {
        self.explode = Some(explode);
        self
    }

    pub fn allow_reserved(mut self, allow: bool) -> Self {
        self.allowReserved = Some(allow);
        self
    }
}

impl Response {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn header(
        mut self,
        name: impl Into<String>,
        block: impl FnOnce(Header) -> Header,
    ) -> Self {
        self.headers
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), block(Header::default()));
        self
    }

    pub fn content(
        mut self,
        media_type: impl Into<String>,
        block: impl FnOnce(MediaType) -> MediaType,
    ) -> Self {
        self.content
            .get_or_insert_with(IndexMap::new)
            .insert(media_type.into(), block(MediaType::default()));
        self
    }

    pub fn link(mut self, name: impl Into<String>, block: impl FnOnce(Link) -> Link) -> Self {
        self.links
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), block(Link::default()));
        self
    }
}

impl Link {
    pub fn operation_ref(mut self, reference: impl Into<String>) -> Self {
        self.operationRef = Some(reference.into());
        self
    }

    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operationId = Some(id.into());
        self
    }

    /// Adds a parameter expression, creating the map on first use.
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn request_body(mut self, expression: impl Into<String>) -> Self {
        self.requestBody = Some(expression.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn server(mut self, block: impl FnOnce(Server) -> Server) -> Self {
        self.server = Some(block(Server::default()));
        self
    }
}

impl SecurityScheme {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the `in` location for `apiKey` schemes.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.in_type = Some(location.into());
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn bearer_format(mut self, format: impl Into<String>) -> Self {
        self.bearerFormat = Some(format.into());
        self
    }

    pub fn flows(mut self, block: impl FnOnce(OAuthFlows) -> OAuthFlows) -> Self {
        self.flows = Some(block(OAuthFlows::default()));
        self
    }

    pub fn open_id_connect_url(mut self, url: impl Into<String>) -> Self {
        self.openIdConnectUrl = Some(url.into());
        self
    }
}

impl OAuthFlows {
    pub fn implicit(mut self, block: impl FnOnce(OAuthFlow) -> OAuthFlow) -> Self {
        self.implicit = Some(block(OAuthFlow::default()));
        self
    }

    pub fn password(mut self, block: impl FnOnce(OAuthFlow) -> OAuthFlow) -> Self {
        self.password = Some(block(OAuthFlow::default()));
        self
    }

    pub fn client_credentials(mut self, block: impl FnOnce(OAuthFlow) -> OAuthFlow) -> Self {
        self.clientCredentials = Some(block(OAuthFlow::default()));
        self
    }

    pub fn authorization_code(mut self, block: impl FnOnce(OAuthFlow) -> OAuthFlow) -> Self {
        self.authorizationCode = Some(block(OAuthFlow::default()));
        self
    }
}

impl OAuthFlow {
    pub fn authorization_url(mut self, url: impl Into<String>) -> Self {
        self.authorizationUrl = Some(url.into());
        self
    }

    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.tokenUrl = Some(url.into());
        self
    }

    pub fn refresh_url(mut self, url: impl Into<String>) -> Self {
        self.refreshUrl = Some(url.into());
        self
    }

    /// Adds a scope, creating the map on first use.
    pub fn scope(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.scopes
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), description.into());
        self
    }
}

impl PathItem {
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn get(mut self, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.get = Some(block(Operation::default()));
        self
    }

    pub fn put(mut self, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.put = Some(block(Operation::default()));
        self
    }

    pub fn post(mut self, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.post = Some(block(Operation::default()));
        self
    }

    pub fn delete(mut self, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.delete = Some(block(Operation::default()));
        self
    }

    pub fn options(mut self, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.options = Some(block(Operation::default()));
        self
    }

    pub fn head(mut self, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.head = Some(block(Operation::default()));
        self
    }

    pub fn patch(mut self, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.patch = Some(block(Operation::default()));
        self
    }

    pub fn trace(mut self, block: impl FnOnce(Operation) -> Operation) -> Self {
        self.trace = Some(block(Operation::default()));
        self
    }

    pub fn server(mut self, block: impl FnOnce(Server) -> Server) -> Self {
        self.servers
            .get_or_insert_with(Vec::new)
            .push(block(Server::default()));
        self
    }

    /// Appends a query parameter shared by all operations on this path.
    pub fn query(mut self, block: impl FnOnce(Parameter) -> Parameter) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(located_parameter(IN_QUERY, block));
        self
    }

    /// Appends a header parameter shared by all operations on this path.
    pub fn header_param(mut self, block: impl FnOnce(Parameter) -> Parameter) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(located_parameter(IN_HEADER, block));
        self
    }

    /// Appends a path parameter shared by all operations on this path.
    pub fn path_param(mut self, block: impl FnOnce(Parameter) -> Parameter) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(located_parameter(IN_PATH, block));
        self
    }

    /// Appends a cookie parameter shared by all operations on this path.
    pub fn cookie(mut self, block: impl FnOnce(Parameter) -> Parameter) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(located_parameter(IN_COOKIE, block));
        self
    }
}

impl Operation {
    /// Appends a tag name.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn external_docs(mut self, block: impl FnOnce(ExternalDocs) -> ExternalDocs) -> Self {
        self.externalDocs = Some(block(ExternalDocs::default()));
        self
    }

    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operationId = Some(id.into());
        self
    }

    pub fn request_body(mut self, block: impl FnOnce(RequestBody) -> RequestBody) -> Self {
        self.requestBody = Some(block(RequestBody::default()));
        self
    }

    /// Adds the response for a status code (or `default`). `responses`
    /// always serializes, even while empty.
    pub fn response(
        mut self,
        code: impl Into<String>,
        block: impl FnOnce(Response) -> Response,
    ) -> Self {
        self.responses.insert(code.into(), block(Response::default()));
        self
    }

    /// Registers an empty callback map under `key`; repeat registrations
    /// of the same key leave existing content untouched.
    pub fn callback(mut self, key: impl Into<String>) -> Self {
        self.callbacks
            .get_or_insert_with(IndexMap::new)
            .entry(key.into())
            .or_insert_with(Callback::new);
        self
    }

    /// Adds (or reconfigures) the [`PathItem`] at `expression` inside
    /// the callback registered under `key`.
    pub fn callback_path(
        mut self,
        key: impl Into<String>,
        expression: impl Into<String>,
        block: impl FnOnce(PathItem) -> PathItem,
    ) -> Self {
        let callback = self
            .callbacks
            .get_or_insert_with(IndexMap::new)
            .entry(key.into())
            .or_insert_with(Callback::new);
        let item = callback.entry(expression.into()).or_default();
        *item = block(std::mem::take(item));
        self
    }

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }

    /// Sets the operation-level security requirement, overriding the
    /// document-level declaration.
    pub fn security(mut self, requirement: SecurityRequirement) -> Self {
        self.security = Some(requirement);
        self
    }

    pub fn server(mut self, block: impl FnOnce(Server) -> Server) -> Self {
        self.servers
            .get_or_insert_with(Vec::new)
            .push(block(Server::default()));
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, block: impl FnOnce(Parameter) -> Parameter) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(located_parameter(IN_QUERY, block));
        self
    }

    /// Appends a header parameter.
    pub fn header_param(mut self, block: impl FnOnce(Parameter) -> Parameter) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(located_parameter(IN_HEADER, block));
        self
    }

    /// Appends a path parameter.
    pub fn path_param(mut self, block: impl FnOnce(Parameter) -> Parameter) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(located_parameter(IN_PATH, block));
        self
    }

    /// Appends a cookie parameter.
    pub fn cookie(mut self, block: impl FnOnce(Parameter) -> Parameter) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(located_parameter(IN_COOKIE, block));
        self
    }
}
