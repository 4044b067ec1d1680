//! Bounded-context partitioning.
//!
//! Every stream, plus one synthetic default stream for events placed without
//! a lane, becomes a bounded context. A context holds the stream's event
//! placements, the command placements connected to one of those events by a
//! flow in either direction, and the read-model placements fed by one of
//! those events. Commands and read models may belong to several contexts.

use eventmill_model::{EventModel, LaneKind, NoteKind, Placement};
use indexmap::IndexSet;
use uuid::Uuid;

/// Name of the context that collects events without a stream.
pub const DEFAULT_STREAM_NAME: &str = "DefaultStream";

/// The placements generated together as one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedContext {
    /// `None` for the default stream.
    pub stream_id: Option<Uuid>,
    /// Display name of the stream.
    pub name: String,
    /// Placement ids: events, then commands, then read models.
    pub placements: Vec<Uuid>,
}

impl BoundedContext {
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn is_default(&self) -> bool {
        self.stream_id.is_none()
    }

    pub fn contains(&self, placement: Uuid) -> bool {
        self.placements.contains(&placement)
    }

    /// Project name: the stream name as a type name.
    pub fn project_name(&self) -> String {
        eventmill_core::to_type_name(&self.name)
    }
}

/// Computes bounded contexts over a model's flow/placement graph.
pub struct ContextPartitioner<'a> {
    model: &'a EventModel,
}

impl<'a> ContextPartitioner<'a> {
    pub fn new(model: &'a EventModel) -> Self {
        Self { model }
    }

    /// One context per stream in declaration order, then the default one.
    /// Empty contexts are included.
    pub fn partition(&self) -> Vec<BoundedContext> {
        let streams = self
            .model
            .streams
            .iter()
            .map(|stream| (Some(stream.id), stream.name.clone()));
        let default = std::iter::once((None, DEFAULT_STREAM_NAME.to_string()));

        streams
            .chain(default)
            .map(|(stream_id, name)| BoundedContext {
                stream_id,
                name,
                placements: self.placements_for(stream_id),
            })
            .collect()
    }

    /// Placement ids belonging to `stream` (`None` for the default stream).
    pub fn placements_for(&self, stream: Option<Uuid>) -> Vec<Uuid> {
        let events: IndexSet<Uuid> = self
            .model
            .placements_of(NoteKind::Event)
            .filter(|p| p.lane_kind == LaneKind::Stream && p.lane_id == stream)
            .map(|p| p.id)
            .collect();

        let commands = self
            .model
            .placements_of(NoteKind::Command)
            .filter(|p| self.touches(p, &events));

        let read_models = self
            .model
            .placements_of(NoteKind::ReadModel)
            .filter(|p| self.fed_by(p, &events));

        let mut placements: IndexSet<Uuid> = events.clone();
        placements.extend(commands.map(|p| p.id));
        placements.extend(read_models.map(|p| p.id));
        placements.into_iter().collect()
    }

    /// A flow in either direction links `placement` with one of `events`.
    fn touches(&self, placement: &Placement, events: &IndexSet<Uuid>) -> bool {
        self.model.flows.values().any(|flow| {
            (flow.from == placement.id && events.contains(&flow.to))
                || (flow.to == placement.id && events.contains(&flow.from))
        })
    }

    /// A flow runs from one of `events` into `placement`.
    fn fed_by(&self, placement: &Placement, events: &IndexSet<Uuid>) -> bool {
        self.model
            .flows
            .values()
            .any(|flow| flow.to == placement.id && events.contains(&flow.from))
    }
}
