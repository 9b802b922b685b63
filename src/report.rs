//! Timetable export.
//!
//! [`records`] flattens a timetable into serializable rows. [`group_grid`]
//! and [`render_group_grid`] lay one group's week out as periods × days.

use serde::Serialize;

use crate::models::{SessionKind, TimeSlot, Timetable, DAYS, DAY_NAMES, PERIODS};

/// One scheduled session as a flat row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentRecord {
    pub group: String,
    pub day: u8,
    pub period: u8,
    pub subject: String,
    pub lecturer: String,
    pub room: String,
    pub kind: SessionKind,
}

/// All sessions in (group, day, period) order.
pub fn records(timetable: &Timetable) -> Vec<AssignmentRecord> {
    timetable
        .iter()
        .map(|(key, a)| AssignmentRecord {
            group: key.group.clone(),
            day: key.slot.day,
            period: key.slot.period,
            subject: a.subject.clone(),
            lecturer: a.lecturer.clone(),
            room: a.room.clone(),
            kind: a.kind,
        })
        .collect()
}

/// One group's week: `grid[period][day]` holds
/// `"subject : lecturer : room :: kind"` or `None` for a free slot.
pub fn group_grid(timetable: &Timetable, group: &str) -> Vec<Vec<Option<String>>> {
    let mut grid = vec![vec![None; DAYS as usize]; PERIODS as usize];
    for (key, a) in timetable.entries_for_group(group) {
        let TimeSlot { day, period } = key.slot;
        if let Some(cell) = grid
            .get_mut(period as usize)
            .and_then(|row| row.get_mut(day as usize))
        {
            *cell = Some(format!(
                "{} : {} : {} :: {}",
                a.subject, a.lecturer, a.room, a.kind
            ));
        }
    }
    grid
}

/// Renders [`group_grid`] as tab-separated text with a day header.
/// Free slots are shown as `-`.
pub fn render_group_grid(timetable: &Timetable, group: &str) -> String {
    let mut out = format!("{group}\nPeriod\t{}\n", DAY_NAMES.join("\t"));
    for (period, row) in group_grid(timetable, group).iter().enumerate() {
        let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("-")).collect();
        out.push_str(&format!("P{}\t{}\n", period + 1, cells.join("\t")));
    }
    out
}
