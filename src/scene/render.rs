//! Renderer boundary.
//!
//! Drawing belongs to whatever consumes the placement list. The crate ships a
//! JSON renderer so a scene can be inspected or piped into another tool.

use std::io::Write;

use serde::Serialize;

use crate::core::Result;

use super::primitive::Placement;

/// Consumes an assembled scene.
pub trait Renderer {
    fn render(&mut self, placements: &[Placement]) -> Result<()>;
}

/// Collects placements in memory.
impl Renderer for Vec<Placement> {
    fn render(&mut self, placements: &[Placement]) -> Result<()> {
        self.extend_from_slice(placements);
        Ok(())
    }
}

#[derive(Serialize)]
struct SceneDocument<'a> {
    count: usize,
    placements: &'a [Placement],
}

/// Writes the scene as a JSON document `{ "count": n, "placements": [...] }`.
pub struct JsonRenderer<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    /// Pretty-printed output.
    pub fn new(writer: W) -> Self {
        Self { writer, pretty: true }
    }

    /// Single-line output.
    pub fn compact(writer: W) -> Self {
        Self { writer, pretty: false }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, placements: &[Placement]) -> Result<()> {
        let doc = SceneDocument {
            count: placements.len(),
            placements,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &doc)?;
        } else {
            serde_json::to_writer(&mut self.writer, &doc)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
