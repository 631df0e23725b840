use crate::alphabet::Alphabet;
use crate::error::ContentError;
use crate::room::Room;
use crate::segment::Segment;

slotmap::new_key_type! {
    /// Unique identifier for an open room in a [`FloorPlan`](super::FloorPlan).
    pub struct OpenRoomId;
}

/// A room whose walls were still present on the most recent line.
#[derive(Debug, Clone)]
pub struct OpenRoom {
    /// Everything attributed to the room so far.
    pub room: Room,
    /// The room's segments as of the last ingested line. Only the latest
    /// snapshot is kept.
    pub segments: Vec<Segment>,
}

impl OpenRoom {
    /// Opens a room on a single unclaimed segment.
    pub(crate) fn seed(
        segment: Segment,
        alphabet: &Alphabet,
    ) -> Result<Self, (Segment, ContentError)> {
        match Room::parse(segment.content(), alphabet) {
            Ok(room) => Ok(Self {
                room,
                segments: vec![segment],
            }),
            Err(err) => Err((segment, err)),
        }
    }

    /// Adds the content of each segment to the room, one at a time.
    ///
    /// Stops at the first segment that fails to parse; segments before it
    /// stay merged.
    pub(crate) fn absorb<'a>(
        &mut self,
        segments: &'a [Segment],
        alphabet: &Alphabet,
    ) -> Result<(), (&'a Segment, ContentError)> {
        for segment in segments {
            let fragment =
                Room::parse(segment.content(), alphabet).map_err(|err| (segment, err))?;
            self.room.merge(&fragment);
        }
        Ok(())
    }
}
