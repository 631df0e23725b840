mod open_room;

pub use open_room::{OpenRoom, OpenRoomId};

use std::fmt;
use std::io::BufRead;

use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::error::{ContentError, PlanError, Result};
use crate::report;
use crate::room::Room;
use crate::segment::{multiple_overlaps, split, Segment};

/// Line-by-line floor plan parser.
///
/// Keeps the rooms whose walls are still visible on the latest line, keyed
/// in a slot map and matched in the order they were opened, plus the rooms
/// that have already been closed. A closed room never reopens.
#[derive(Debug, Default)]
pub struct FloorPlan {
    alphabet: Alphabet,
    open: SlotMap<OpenRoomId, OpenRoom>,
    /// Open room keys in opening order.
    order: Vec<OpenRoomId>,
    closed: Vec<Room>,
    line: usize,
}

impl FloorPlan {
    /// Creates a parser for the reference wall and furniture characters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a custom alphabet.
    #[must_use]
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of lines ingested so far, including a line that failed.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Ingests one line of the plan.
    ///
    /// Each open room, oldest first, claims the segments of this line that
    /// overlap its last segments; a room that claims nothing is closed.
    /// Segments left unclaimed open new rooms.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Segment`] for the first segment whose content
    /// cannot be parsed. Work already done on this line is kept.
    pub fn ingest(&mut self, line: &str) -> Result<()> {
        self.line += 1;
        let line_no = self.line;
        let mut pool = split(line, &self.alphabet);
        trace!(line = line_no, segments = pool.len(), "ingesting line");

        let mut i = 0;
        while i < self.order.len() {
            let id = self.order[i];
            // `order` holds exactly the keys of `open`.
            let open = &mut self.open[id];

            let (overlapping, rest) = multiple_overlaps(&open.segments, &pool);
            if overlapping.is_empty() {
                self.order.remove(i);
                self.close(id);
                continue;
            }

            open.absorb(&overlapping, &self.alphabet)
                .map_err(|(segment, source)| segment_error(line_no, segment, source))?;
            open.segments = overlapping;
            pool = rest;
            i += 1;
        }

        for segment in pool {
            let open = OpenRoom::seed(segment, &self.alphabet)
                .map_err(|(segment, source)| segment_error(line_no, &segment, source))?;
            let id = self.open.insert(open);
            self.order.push(id);
            debug!(line = line_no, ?id, "room opened");
        }

        Ok(())
    }

    /// Ingests every line from `reader` until end of input.
    ///
    /// # Errors
    ///
    /// Returns the first parse error, or [`PlanError::Io`] if reading fails.
    pub fn ingest_all<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            self.ingest(&line?)?;
        }
        debug!(
            lines = self.line,
            closed = self.closed.len(),
            open = self.order.len(),
            "input exhausted"
        );
        Ok(())
    }

    /// Returns `true` if some room never saw its closing wall.
    #[must_use]
    pub fn has_open_rooms(&self) -> bool {
        !self.order.is_empty()
    }

    /// Open rooms in the order they were opened.
    pub fn open_rooms(&self) -> impl Iterator<Item = &OpenRoom> + '_ {
        self.order.iter().filter_map(|&id| self.open.get(id))
    }

    /// Closed rooms in the order they were closed.
    #[must_use]
    pub fn closed_rooms(&self) -> &[Room] {
        &self.closed
    }

    /// Renders the closed rooms as a report; see [`report::render`].
    #[must_use]
    pub fn render(&self) -> String {
        report::render(&self.closed)
    }

    fn close(&mut self, id: OpenRoomId) {
        if let Some(open) = self.open.remove(id) {
            debug!(line = self.line, ?id, "room closed");
            self.closed.push(open.room);
        }
    }
}

impl fmt::Display for FloorPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn segment_error(line: usize, segment: &Segment, source: ContentError) -> PlanError {
    PlanError::Segment {
        line,
        content: segment.content().to_owned(),
        source,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ingest(input: &str) -> FloorPlan {
        let mut plan = FloorPlan::new();
        for line in input.split('\n') {
            plan.ingest(line).unwrap();
        }
        plan
    }

    #[test]
    fn upper_perimeter_opens_nothing() {
        let plan = ingest("+-----------+------------------------------------+");
        assert_eq!(plan.line(), 1);
        assert!(plan.closed_rooms().is_empty());
        assert!(!plan.has_open_rooms());
    }

    #[test]
    fn two_open_rooms() {
        let plan = ingest("\n+----+---+\n|    |   |");
        assert_eq!(plan.line(), 3);
        assert!(plan.closed_rooms().is_empty());
        let open: Vec<_> = plan.open_rooms().collect();
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].segments, vec![Segment::new(1, "    ")]);
        assert_eq!(open[1].segments, vec![Segment::new(6, "   ")]);
        assert!(plan.has_open_rooms());
    }

    #[test]
    fn one_closed_room() {
        let plan = ingest("+------+\n| W    |\n+------+");
        assert_eq!(plan.line(), 3);
        assert_eq!(plan.closed_rooms().len(), 1);
        let room = &plan.closed_rooms()[0];
        assert_eq!(room.name(), None);
        assert_eq!(room.count('W'), 1);
        assert_eq!(room.total(), 1);
        assert!(!plan.has_open_rooms());
    }

    #[test]
    fn two_rooms_with_title() {
        let plan = ingest(
            "
+------+
| W    |-----+
+------+ P   |
|   C        |
|     P      |
|   ( room)  |
+------------+
",
        );
        assert_eq!(plan.line(), 9);
        let closed = plan.closed_rooms();
        assert_eq!(closed.len(), 2);
        assert_eq!(closed[0].name(), None);
        assert_eq!(closed[0].count('W'), 1);
        assert_eq!(closed[1].name(), Some("room"));
        assert_eq!(closed[1].count('P'), 2);
        assert_eq!(closed[1].count('C'), 1);
        assert_eq!(closed[1].total(), 3);
    }

    #[test]
    fn one_room_inside_the_other() {
        let plan = ingest(
            "
+----------------+
| W          C   |
| C +------+     |
+---+W (x2)|     |
    +-+----+   P |
      |          |
      |  +-------+
+-----+  |
| P      +-----+
|              |
+-----+-----+  |
            |  |
  +---------+  |
  | (room) W W |
  +------------+
",
        );
        assert_eq!(plan.line(), 17);
        let closed = plan.closed_rooms();
        assert_eq!(closed.len(), 2);
        assert_eq!(closed[0].name(), Some("x2"));
        assert_eq!(closed[0].count('W'), 1);
        assert_eq!(closed[1].name(), Some("room"));
        assert_eq!(closed[1].count('W'), 3);
        assert_eq!(closed[1].count('C'), 2);
        assert_eq!(closed[1].count('P'), 2);
    }

    #[test]
    fn merging_walls_go_to_the_older_room() {
        let plan = ingest("+---+---+\n| W | C |\n|   +   |\n| P     |\n+-------+");
        let closed = plan.closed_rooms();
        assert_eq!(closed.len(), 2);
        // The room on the right loses the merged line and closes first.
        assert_eq!(closed[0].count('C'), 1);
        assert_eq!(closed[0].total(), 1);
        assert_eq!(closed[1].count('W'), 1);
        assert_eq!(closed[1].count('P'), 1);
    }

    #[test]
    fn segment_spanning_two_room_segments_counts_twice() {
        let plan = ingest("+-----+\n|  W  |\n|  +  |\n|  |  |\n|  P  |\n+-----+");
        let closed = plan.closed_rooms();
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].count('W'), 1);
        assert_eq!(closed[0].count('P'), 2);
    }

    #[test]
    fn room_segments_track_moving_walls() {
        let mut plan = FloorPlan::new();
        plan.ingest("+----+").unwrap();
        plan.ingest("| W  +---+").unwrap();
        plan.ingest("|        |").unwrap();
        let open: Vec<_> = plan.open_rooms().collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].segments, vec![Segment::new(1, "        ")]);
    }

    #[test]
    fn failing_line_keeps_earlier_work() {
        let mut plan = FloorPlan::new();
        plan.ingest("+---+---+").unwrap();
        let err = plan.ingest("| W | X |").unwrap_err();
        match err {
            PlanError::Segment {
                line,
                content,
                source,
            } => {
                assert_eq!(line, 2);
                assert_eq!(content, " X ");
                assert_eq!(
                    source,
                    ContentError::UnknownSymbol {
                        symbol: 'X',
                        offset: 1
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(plan.line(), 2);
        let open: Vec<_> = plan.open_rooms().collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].room.count('W'), 1);
    }

    #[test]
    fn failing_open_room_reports_line() {
        let mut plan = FloorPlan::new();
        plan.ingest("+--------+").unwrap();
        plan.ingest("| (hall  |").unwrap_err();
        plan.ingest("+--------+").unwrap();
        assert_eq!(plan.line(), 3);
        assert!(plan.closed_rooms().is_empty());
    }

    #[test]
    fn malformed_title_in_open_room() {
        let mut plan = FloorPlan::new();
        plan.ingest("+--------+").unwrap();
        plan.ingest("|        |").unwrap();
        let err = plan.ingest("| (hall  |").unwrap_err();
        assert_eq!(
            err.to_string(),
            "[line 3] [segment: ' (hall  '] error parsing segment: \
             room title did not close. It starts with 'hall'"
        );
    }

    #[test]
    fn ingest_all_reads_every_line() {
        let input = "+------+\r\n| W    |\r\n+------+\r\n|  C   |\n+------+";
        let mut plan = FloorPlan::new();
        plan.ingest_all(input.as_bytes()).unwrap();
        assert_eq!(plan.line(), 5);
        assert_eq!(plan.closed_rooms().len(), 2);
        assert_eq!(plan.closed_rooms()[1].count('C'), 1);
    }

    #[test]
    fn ingest_all_stops_at_first_error() {
        let input = "+------+\n| X    |\n| W    |\n+------+\n";
        let mut plan = FloorPlan::new();
        let err = plan.ingest_all(input.as_bytes()).unwrap_err();
        assert!(matches!(err, PlanError::Segment { line: 2, .. }));
        assert_eq!(plan.line(), 2);
    }

    #[test]
    fn ingest_all_surfaces_read_errors() {
        let input: &[u8] = b"+------+\n| \xff W  |\n+------+\n";
        let mut plan = FloorPlan::new();
        let err = plan.ingest_all(input).unwrap_err();
        match err {
            PlanError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(plan.line(), 1);
        assert!(!plan.has_open_rooms());
    }

    #[test]
    fn custom_alphabet() {
        let alphabet = Alphabet::default().with_furniture("T".chars()).unwrap();
        let mut plan = FloorPlan::with_alphabet(alphabet);
        plan.ingest_all("+---+\n| T |\n+---+".as_bytes()).unwrap();
        assert_eq!(plan.closed_rooms()[0].count('T'), 1);
        assert!(plan.ingest("| W |").is_err());
    }
}
