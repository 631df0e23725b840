use crate::room::Room;

/// Name of the synthetic room summing all closed rooms.
pub const TOTAL_NAME: &str = "total";

/// Sums the furniture of every room into one room called `name`.
#[must_use]
pub fn totals(rooms: &[Room], name: &str) -> Room {
    let mut total = Room::new();
    for room in rooms {
        total.merge(room);
    }
    total.set_name(Some(name.to_owned()));
    total
}

/// Renders the totals followed by every room, rooms sorted by name.
///
/// Unnamed rooms sort first. Each room's block is separated by a newline.
#[must_use]
pub fn render(rooms: &[Room]) -> String {
    let mut sorted: Vec<&Room> = rooms.iter().collect();
    sorted.sort_by(|a, b| a.name().unwrap_or_default().cmp(b.name().unwrap_or_default()));

    let mut blocks = Vec::with_capacity(sorted.len() + 1);
    blocks.push(totals(rooms, TOTAL_NAME).to_string());
    blocks.extend(sorted.iter().map(ToString::to_string));
    blocks.join("\n")
}
