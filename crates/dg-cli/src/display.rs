//! Text rendering of generated dungeons

use std::fmt::{self, Write};

use strum::IntoEnumIterator;

use dg_core::{Cardinal, GeneratedDungeon, GridPos, RoomType};

/// Character grid with tiles on even cells and tile edges in between
struct Canvas {
    min: GridPos,
    max: GridPos,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    fn new(min: GridPos, max: GridPos) -> Self {
        let width = (2 * (max.x - min.x) + 1) as usize;
        let height = (2 * (max.y - min.y) + 1) as usize;
        Self {
            min,
            max,
            cells: vec![vec![' '; width]; height],
        }
    }

    /// Canvas cell of a tile; north is up
    fn cell(&self, pos: GridPos) -> (usize, usize) {
        let col = 2 * (pos.x - self.min.x);
        let row = 2 * (self.max.y - pos.y);
        (col as usize, row as usize)
    }

    /// Canvas cell on the edge between a tile and its neighbor
    fn edge_cell(&self, pos: GridPos, dir: Cardinal) -> (usize, usize) {
        let (c1, r1) = self.cell(pos);
        let (c2, r2) = self.cell(pos.step(dir));
        ((c1 + c2) / 2, (r1 + r2) / 2)
    }

    fn set(&mut self, (col, row): (usize, usize), ch: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = ch;
        }
    }

    fn into_string(self) -> String {
        let mut out = String::new();
        for row in self.cells {
            let line: String = row.into_iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Draw rooms with their type glyphs and doors as `+` (open) or `=` (locked)
pub fn render_ascii(dungeon: &GeneratedDungeon) -> String {
    let Some((min, max)) = dungeon.layout.tiles.bounds() else {
        return String::from("(empty dungeon)\n");
    };

    let graph = &dungeon.layout.graph;
    let mut canvas = Canvas::new(min, max);

    for boundary in dungeon.boundaries.iter() {
        let glyph = graph.room(boundary.room).room_type.glyph();
        canvas.set(canvas.cell(boundary.tile), glyph);

        // Fill edges inside a room so multi-tile rooms read as one block
        for dir in [Cardinal::East, Cardinal::South] {
            if boundary.edge(dir).is_none() {
                canvas.set(canvas.edge_cell(boundary.tile, dir), glyph);
            }
        }
        let diagonal = boundary.tile.step(Cardinal::East).step(Cardinal::South);
        if boundary.edge(Cardinal::East).is_none()
            && boundary.edge(Cardinal::South).is_none()
            && dungeon.layout.tiles.get(diagonal) == Some(boundary.room)
        {
            let (col, row) = canvas.cell(boundary.tile);
            canvas.set((col + 1, row + 1), glyph);
        }
    }

    for door in &dungeon.doors {
        let mark = if door.locked { '=' } else { '+' };
        canvas.set(canvas.edge_cell(door.tile, door.side), mark);
    }

    canvas.into_string()
}

/// Short human-readable report
pub fn render_summary(dungeon: &GeneratedDungeon) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_summary(&mut out, dungeon)?;
    Ok(out)
}

fn write_summary(out: &mut String, dungeon: &GeneratedDungeon) -> fmt::Result {
    let graph = &dungeon.layout.graph;
    let counts = &dungeon.layout.counts;

    writeln!(out, "seed:      {}", dungeon.seed)?;
    writeln!(out, "attempts:  {}", dungeon.attempts)?;
    writeln!(out, "rooms:     {}", graph.len())?;
    for room_type in RoomType::iter() {
        let n = graph.rooms_of_type(room_type).count();
        if n > 0 {
            writeln!(out, "  {:<9} {} ({})", room_type.to_string(), n, room_type.glyph())?;
        }
    }
    writeln!(out, "edges:     {} ({} loops)", graph.edge_count(), counts.loop_edges)?;
    writeln!(out, "locked:    {}", counts.locked_rooms)?;
    writeln!(out, "secrets:   {}", counts.secret_rooms)?;
    writeln!(out, "unplaced:  {}", counts.unplaced_rooms)?;
    writeln!(out, "doors:     {}", dungeon.doors.len())?;
    if let Some(boss) = graph.boss() {
        writeln!(out, "boss:      {} at depth {}", boss.id, boss.depth)?;
    }

    Ok(())
}
