//! Sample dataset shared by the demo pages.

use griddle::table::{Alignment, Column, TableRow};

#[derive(Debug, Clone)]
pub struct Track {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub duration_secs: u32,
    pub plays: u64,
}

impl Track {
    fn new(id: u64, title: &str, artist: &str, duration_secs: u32, plays: u64) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            duration_secs,
            plays,
        }
    }
}

impl TableRow for Track {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, column_index: usize) -> String {
        match column_index {
            0 => self.id.to_string(),
            1 => self.title.clone(),
            2 => self.artist.clone(),
            3 => format_duration(self.duration_secs),
            4 => self.plays.to_string(),
            _ => String::new(),
        }
    }
}

pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Column set matching [`Track::cell`] indices.
pub fn track_columns() -> Vec<Column> {
    vec![
        Column::new("Id", 6).align(Alignment::Right).sortable(),
        Column::new("Title", 26).sortable(),
        Column::new("Artist", 20).sortable(),
        Column::new("Duration", 10).align(Alignment::Right).sortable(),
        Column::new("Plays", 9).align(Alignment::Right).sortable(),
    ]
}

pub fn sample_tracks() -> Vec<Track> {
    vec![
        Track::new(1, "Midnight Static", "Glass Harbor", 214, 4821),
        Track::new(2, "Paper Lanterns", "Vela Nine", 187, 12093),
        Track::new(3, "Copper Sky", "The Longitudes", 243, 771),
        Track::new(4, "Driftwood", "Mara Quinn", 199, 8854),
        Track::new(5, "Neon Orchard", "Glass Harbor", 226, 3310),
        Track::new(6, "Second Winter", "Field Atlas", 305, 15002),
        Track::new(7, "Hollow Crown", "Vela Nine", 192, 640),
        Track::new(8, "Salt and Circuitry", "The Longitudes", 251, 9977),
        Track::new(9, "Ultraviolet Rain", "Mara Quinn", 208, 2189),
        Track::new(10, "Cartographer", "Field Atlas", 274, 11240),
        Track::new(11, "Low Tide Engine", "Glass Harbor", 233, 0),
        Track::new(12, "Borrowed Light", "Vela Nine", 181, 7465),
        Track::new(13, "Ferric", "The Longitudes", 266, 1893),
        Track::new(14, "Quiet Machines", "Mara Quinn", 217, 5567),
        Track::new(15, "Antenna Garden", "Field Atlas", 289, 13421),
        Track::new(16, "Glasswing", "Glass Harbor", 203, 902),
        Track::new(17, "North of Nowhere", "Vela Nine", 238, 6120),
        Track::new(18, "Pale Signal", "The Longitudes", 195, 0),
        Track::new(19, "Ember Weeks", "Mara Quinn", 247, 10338),
        Track::new(20, "Meridian Lines", "Field Atlas", 312, 4470),
        Track::new(21, "Stray Voltage", "Glass Harbor", 221, 8012),
        Track::new(22, "Winterforth", "Vela Nine", 256, 1554),
        Track::new(23, "Harbor Lights Out", "The Longitudes", 229, 9230),
        Track::new(24, "Compass Rose", "Mara Quinn", 184, 3777),
        Track::new(25, "Televiolet", "Field Atlas", 298, 14890),
        Track::new(26, "Saltgrass", "Glass Harbor", 211, 2640),
        Track::new(27, "Ninth Orbit", "Vela Nine", 242, 6891),
        Track::new(28, "Tin Constellations", "The Longitudes", 277, 512),
        Track::new(29, "Afterglow Arcade", "Mara Quinn", 206, 11765),
        Track::new(30, "Last Transmission", "Field Atlas", 321, 7308),
    ]
}
