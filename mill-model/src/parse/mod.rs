//! Event-model document parsing.
//!
//! The parser is strict about the document's outer shape and about the
//! fields every entity needs (ids, names), and lenient about everything the
//! generator can live without: unknown shapes, unsupported multi-schema
//! notes and version mismatches become warnings.

mod data_type;
mod json;

use eventmill_core::{Diagnostic, SpecVersion};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use uuid::Uuid;

use self::{
    data_type::TypeTreeParser,
    json::{JsonObject, kind_of, parse_uuid},
};
use crate::{
    Audience, Element, ElementKind, Error, EventModel, Flow, Interface, InterfaceKind, LaneKind,
    Note, NoteKind, Placement, Result, Schema, Stream, error::SourceContext,
};

/// Document format version this parser is written against.
pub const SUPPORTED_SPEC_VERSION: &str = "0.1.0-beta";

/// Namespace given to schemas whose qualified name has no separator.
pub const DEFAULT_NAMESPACE: &str = "default";

/// A parsed model plus the warnings raised while building it.
#[derive(Debug, Clone)]
pub struct ParsedModel {
    pub model: EventModel,
    pub diagnostics: Vec<Diagnostic>,
}

/// Turns a JSON document into an [`EventModel`].
pub struct ModelParser {
    diagnostics: Vec<Diagnostic>,
}

impl Default for ModelParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelParser {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    fn warn(&mut self, message: impl Into<String>, location: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::warning("parse", message).at(location).logged());
    }

    /// Parse `content`, using `filename` for error reporting.
    pub fn parse(mut self, content: &str, filename: &str) -> Result<ParsedModel> {
        let ctx = SourceContext::new(content, filename);
        let root: Value = serde_json::from_str(content).map_err(|e| ctx.syntax_error(e))?;

        let Value::Object(root) = &root else {
            return Err(Box::new(Error::UnexpectedRootShape {
                expected: "a JSON object",
                found: kind_of(&root),
            }));
        };
        self.check_version(root);

        let document = match root.get("event-model") {
            Some(document @ Value::Object(_)) => document,
            other => {
                return Err(Box::new(Error::UnexpectedRootShape {
                    expected: "an 'event-model' object",
                    found: other.map(kind_of).unwrap_or("nothing"),
                }));
            }
        };
        let document = JsonObject::new(document, "event-model")?;

        let model = EventModel {
            id: document.uuid("event-model/id")?,
            name: document.str("event-model/name")?.to_string(),
            description: document.opt_str("event-model/description")?.map(str::to_string),
            audiences: self.audiences(&document)?,
            streams: self.streams(&document)?,
            interfaces: self.interfaces(&document)?,
            read_models: self.notes(&document, NoteKind::ReadModel, "event-model/read-models")?,
            events: self.notes(&document, NoteKind::Event, "event-model/events")?,
            commands: self.notes(&document, NoteKind::Command, "event-model/commands")?,
            flows: self.flows(&document)?,
            placements: self.placements(&document)?,
            schemas: self.schemas(&document)?,
        };

        tracing::info!(
            model = %model.name,
            schemas = model.schemas.len(),
            placements = model.placements.len(),
            warnings = self.diagnostics.len(),
            "finished parsing event model"
        );

        Ok(ParsedModel {
            model,
            diagnostics: self.diagnostics,
        })
    }

    fn check_version(&mut self, root: &Map<String, Value>) {
        let declared = match root.get("spec-version") {
            Some(Value::String(declared)) => declared,
            _ => {
                self.warn(
                    format!("no spec-version declared, assuming {}", SUPPORTED_SPEC_VERSION),
                    "spec-version",
                );
                return;
            }
        };
        let supported: std::result::Result<SpecVersion, _> = SUPPORTED_SPEC_VERSION.parse();
        let matches = match (declared.parse::<SpecVersion>(), supported) {
            (Ok(declared), Ok(supported)) => declared == supported,
            _ => false,
        };
        if !matches {
            self.warn(
                format!(
                    "different spec-version: expected '{}' but was '{}'",
                    SUPPORTED_SPEC_VERSION, declared
                ),
                "spec-version",
            );
        }
    }

    /// Iterate an id-keyed object section, yielding the parsed key and entry.
    fn keyed<'a>(
        &self,
        document: &JsonObject<'a>,
        section: &str,
    ) -> Result<Vec<(Uuid, &'a Value, String)>> {
        let Some(map) = document.opt_object(section)? else {
            return Ok(Vec::new());
        };
        let prefix = section.trim_start_matches("event-model/");
        map.iter()
            .map(|(key, value)| {
                let location = format!("{}.{}", prefix, key);
                Ok((parse_uuid(key, &location)?, value, location))
            })
            .collect()
    }

    fn check_key(&mut self, key: Uuid, id: Uuid, location: &str) {
        if key != id {
            self.warn(format!("entry keyed by {} declares id {}", key, id), location);
        }
    }

    fn audiences(&mut self, document: &JsonObject<'_>) -> Result<Vec<Audience>> {
        let mut audiences: Vec<Audience> = Vec::new();
        for (i, item) in sequence(document, "event-model/audiences")?.iter().enumerate() {
            let location = format!("audiences[{}]", i);
            let obj = JsonObject::new(item, &location)?;
            let audience = Audience {
                id: obj.uuid("audience/id")?,
                name: obj.str("audience/name")?.to_string(),
            };
            if audiences.iter().any(|a| a.id == audience.id) {
                self.warn(format!("duplicate audience id {}, skipped", audience.id), location);
                continue;
            }
            audiences.push(audience);
        }
        Ok(audiences)
    }

    fn streams(&mut self, document: &JsonObject<'_>) -> Result<Vec<Stream>> {
        let mut streams: Vec<Stream> = Vec::new();
        for (i, item) in sequence(document, "event-model/streams")?.iter().enumerate() {
            let location = format!("streams[{}]", i);
            let obj = JsonObject::new(item, &location)?;
            let stream = Stream {
                id: obj.uuid("stream/id")?,
                name: obj.str("stream/name")?.to_string(),
            };
            if streams.iter().any(|s| s.id == stream.id) {
                self.warn(format!("duplicate stream id {}, skipped", stream.id), location);
                continue;
            }
            streams.push(stream);
        }
        Ok(streams)
    }

    fn interfaces(&mut self, document: &JsonObject<'_>) -> Result<IndexMap<Uuid, Interface>> {
        let mut interfaces = IndexMap::new();
        for (key, value, location) in self.keyed(document, "event-model/interfaces")? {
            let obj = JsonObject::new(value, &location)?;
            let id = obj.uuid("interface/id")?;
            self.check_key(key, id, &location);

            let tag = obj.str("interface/type")?;
            let kind = match last_segment(tag).as_str() {
                "blank" => InterfaceKind::Blank,
                "rest" => InterfaceKind::Rest,
                "html" => InterfaceKind::Html,
                "job" => InterfaceKind::Job,
                "figma" => InterfaceKind::Figma {
                    url: obj.opt_str("interface.type.figma/url")?.map(str::to_string),
                },
                _ => {
                    self.warn(format!("unknown interface type '{}', using blank", tag), &location);
                    InterfaceKind::Blank
                }
            };

            let interface = Interface {
                id,
                name: obj.str("interface/name")?.to_string(),
                description: obj.opt_str("interface/description")?.map(str::to_string),
                kind,
                elements: self.elements(&obj)?,
            };
            interfaces.insert(key, interface);
        }
        Ok(interfaces)
    }

    fn elements(&mut self, interface: &JsonObject<'_>) -> Result<IndexMap<Uuid, Element>> {
        let mut elements = IndexMap::new();
        let Some(map) = interface.opt_object("interface/elements")? else {
            return Ok(elements);
        };
        for (key, value) in map {
            let location = format!("{}.elements.{}", interface.location(), key);
            let key = parse_uuid(key, &location)?;
            let obj = JsonObject::new(value, &location)?;
            let id = obj.uuid("element/id")?;
            self.check_key(key, id, &location);

            let tag = obj.str("element/type")?;
            let Some(kind) = ElementKind::from_tag(&last_segment(tag)) else {
                self.warn(format!("unknown element type '{}', skipped", tag), &location);
                continue;
            };
            elements.insert(
                key,
                Element {
                    id,
                    kind,
                    name: obj.str("element/name")?.to_string(),
                },
            );
        }
        Ok(elements)
    }

    fn notes(
        &mut self,
        document: &JsonObject<'_>,
        kind: NoteKind,
        section: &str,
    ) -> Result<IndexMap<Uuid, Note>> {
        let prefix = kind.prefix();
        let mut notes = IndexMap::new();
        for (key, value, location) in self.keyed(document, section)? {
            let obj = JsonObject::new(value, &location)?;
            let id = obj.uuid(&format!("{prefix}/id"))?;
            self.check_key(key, id, &location);

            let schema_id = match obj.opt_object(&format!("{prefix}/schemas"))? {
                None => None,
                Some(schemas) if schemas.len() == 1 => {
                    match schemas.values().next() {
                        Some(Value::String(target)) => Some(parse_uuid(target, &location)?),
                        _ => {
                            return Err(Error::invalid_field(
                                format!("{prefix}/schemas"),
                                location,
                                "a map of schema ids",
                            ));
                        }
                    }
                }
                Some(schemas) => {
                    let message = if schemas.is_empty() {
                        "no schema declared, schema left unset".to_string()
                    } else {
                        format!(
                            "multiple schemas not supported ({} declared), schema left unset",
                            schemas.len()
                        )
                    };
                    self.warn(message, &location);
                    None
                }
            };

            let note = Note {
                id,
                name: obj.str(&format!("{prefix}/name"))?.to_string(),
                description: obj.opt_str(&format!("{prefix}/description"))?.map(str::to_string),
                schema_id,
            };
            notes.insert(key, note);
        }
        Ok(notes)
    }

    fn flows(&mut self, document: &JsonObject<'_>) -> Result<IndexMap<Uuid, Flow>> {
        let mut flows = IndexMap::new();
        for (key, value, location) in self.keyed(document, "event-model/flows")? {
            let obj = JsonObject::new(value, &location)?;
            let flow = Flow {
                from: obj.uuid("flow/from")?,
                to: obj.uuid("flow/to")?,
            };
            flows.insert(key, flow);
        }
        Ok(flows)
    }

    fn placements(&mut self, document: &JsonObject<'_>) -> Result<IndexMap<Uuid, Placement>> {
        const TARGETS: [(NoteKind, LaneKind, Option<&str>); 4] = [
            (NoteKind::Interface, LaneKind::Audience, Some("interface/audience")),
            (NoteKind::Command, LaneKind::Timeline, None),
            (NoteKind::ReadModel, LaneKind::Timeline, None),
            (NoteKind::Event, LaneKind::Stream, Some("event/stream")),
        ];

        let mut placements = IndexMap::new();
        for (key, value, location) in self.keyed(document, "event-model/placements")? {
            let obj = JsonObject::new(value, &location)?;
            let id = obj.uuid("placement/id")?;
            self.check_key(key, id, &location);

            let mut present = TARGETS
                .iter()
                .filter(|(kind, _, _)| obj.has(&format!("{}/id", kind.prefix())));
            let Some(&(note_kind, lane_kind, lane_key)) = present.next() else {
                self.warn("placement references no note, skipped", &location);
                continue;
            };
            if present.next().is_some() {
                self.warn(
                    format!("placement references several notes, using the {}", note_kind.prefix()),
                    &location,
                );
            }

            let lane_id = match lane_key {
                Some(lane_key) => obj.opt_uuid(lane_key)?,
                None => None,
            };
            let placement = Placement {
                id,
                index: obj.i64("placement/index")?,
                note_kind,
                note_id: obj.uuid(&format!("{}/id", note_kind.prefix()))?,
                lane_kind,
                lane_id,
            };
            placements.insert(key, placement);
        }
        Ok(placements)
    }

    fn schemas(&mut self, document: &JsonObject<'_>) -> Result<IndexMap<Uuid, Schema>> {
        let mut schemas = IndexMap::new();
        for (key, value, location) in self.keyed(document, "event-model/schemas")? {
            let obj = JsonObject::new(value, &location)?;
            let id = obj.uuid("schema/id")?;
            self.check_key(key, id, &location);

            let (namespace, name) = split_qualified_name(obj.str("schema/name")?);
            let Some(root) = obj.value("schema/schema") else {
                return Err(Error::missing_field("schema/schema", location));
            };
            let data_type = TypeTreeParser::new(&mut self.diagnostics).build(
                root,
                &name,
                false,
                &location,
            )?;

            let schema = Schema {
                id,
                name,
                namespace,
                description: obj.opt_str("schema/description")?.map(str::to_string),
                data_type,
            };
            schemas.insert(key, schema);
        }
        Ok(schemas)
    }
}

/// An optional array section.
fn sequence<'a>(document: &JsonObject<'a>, section: &str) -> Result<&'a [Value]> {
    Ok(document
        .opt_array(section)?
        .map(Vec::as_slice)
        .unwrap_or_default())
}

/// The part after the final `/`, lower-cased (`interface.type/rest` -> `rest`).
fn last_segment(tag: &str) -> String {
    tag.rsplit('/').next().unwrap_or(tag).to_lowercase()
}

/// Split `orders/Order` into (`orders`, `Order`) on the final `/`.
pub fn split_qualified_name(qualified: &str) -> (String, String) {
    match qualified.rsplit_once('/') {
        Some((namespace, name)) => (namespace.to_string(), name.to_string()),
        None => (DEFAULT_NAMESPACE.to_string(), qualified.to_string()),
    }
}
