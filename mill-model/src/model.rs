//! The parsed event model graph.
//!
//! Everything here is built once by the parser and only read afterwards.

use indexmap::IndexMap;
use uuid::Uuid;

use crate::DataType;

/// Root aggregate of a parsed document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub audiences: Vec<Audience>,
    pub streams: Vec<Stream>,
    pub interfaces: IndexMap<Uuid, Interface>,
    pub commands: IndexMap<Uuid, Note>,
    pub events: IndexMap<Uuid, Note>,
    pub read_models: IndexMap<Uuid, Note>,
    pub flows: IndexMap<Uuid, Flow>,
    pub placements: IndexMap<Uuid, Placement>,
    pub schemas: IndexMap<Uuid, Schema>,
}

impl EventModel {
    pub fn formatted_name(&self) -> String {
        eventmill_core::format_name(&self.name)
    }

    pub fn schema(&self, id: Uuid) -> Option<&Schema> {
        self.schemas.get(&id)
    }

    pub fn stream(&self, id: Uuid) -> Option<&Stream> {
        self.streams.iter().find(|s| s.id == id)
    }

    /// The command, event or read model a placement points at.
    pub fn note(&self, kind: NoteKind, id: Uuid) -> Option<&Note> {
        match kind {
            NoteKind::Command => self.commands.get(&id),
            NoteKind::Event => self.events.get(&id),
            NoteKind::ReadModel => self.read_models.get(&id),
            NoteKind::Interface => None,
        }
    }

    /// Notes of one kind, in document order.
    pub fn notes(&self, kind: NoteKind) -> impl Iterator<Item = &Note> {
        let notes = match kind {
            NoteKind::Command => Some(&self.commands),
            NoteKind::Event => Some(&self.events),
            NoteKind::ReadModel => Some(&self.read_models),
            NoteKind::Interface => None,
        };
        notes.into_iter().flat_map(|map| map.values())
    }

    /// Placements of a given note kind, in document order.
    pub fn placements_of(&self, kind: NoteKind) -> impl Iterator<Item = &Placement> {
        self.placements.values().filter(move |p| p.note_kind == kind)
    }
}

/// A lane holding interface notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audience {
    pub id: Uuid,
    pub name: String,
}

/// A lane holding event notes; the unit of partitioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    pub id: Uuid,
    pub name: String,
}

impl Stream {
    pub fn formatted_name(&self) -> String {
        eventmill_core::format_name(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub kind: InterfaceKind,
    pub elements: IndexMap<Uuid, Element>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceKind {
    Blank,
    Rest,
    Html,
    Job,
    Figma { url: Option<String> },
}

impl InterfaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceKind::Blank => "blank",
            InterfaceKind::Rest => "rest",
            InterfaceKind::Html => "html",
            InterfaceKind::Job => "job",
            InterfaceKind::Figma { .. } => "figma",
        }
    }
}

/// An element of an interface, e.g. an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: Uuid,
    pub kind: ElementKind,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl ElementKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "connect" => ElementKind::Connect,
            "delete" => ElementKind::Delete,
            "get" => ElementKind::Get,
            "head" => ElementKind::Head,
            "options" => ElementKind::Options,
            "patch" => ElementKind::Patch,
            "post" => ElementKind::Post,
            "put" => ElementKind::Put,
            "trace" => ElementKind::Trace,
            _ => return None,
        };
        Some(kind)
    }
}

/// A command, event or read model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Attached schema; unset when none or several were declared.
    pub schema_id: Option<Uuid>,
}

impl Note {
    pub fn formatted_name(&self) -> String {
        eventmill_core::format_name(&self.name)
    }
}

/// Which collection a note (or the placement of one) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    Interface,
    Command,
    ReadModel,
    Event,
}

impl NoteKind {
    /// Key prefix used by the document, e.g. `read-model` in `read-model/id`.
    pub fn prefix(&self) -> &'static str {
        match self {
            NoteKind::Interface => "interface",
            NoteKind::Command => "command",
            NoteKind::ReadModel => "read-model",
            NoteKind::Event => "event",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    Audience,
    Timeline,
    Stream,
}

/// A directed edge between two placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flow {
    pub from: Uuid,
    pub to: Uuid,
}

/// Position of a note inside a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub id: Uuid,
    pub index: i64,
    pub note_kind: NoteKind,
    pub note_id: Uuid,
    pub lane_kind: LaneKind,
    /// Absent on the timeline and for events in the implicit default stream.
    pub lane_id: Option<Uuid>,
}

/// A named, namespaced type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub id: Uuid,
    pub name: String,
    pub namespace: String,
    pub description: Option<String>,
    pub data_type: DataType,
}

impl Schema {
    pub fn formatted_name(&self) -> String {
        eventmill_core::format_name(&self.name)
    }
}
