use tabled::{settings::Style, Table, Tabled};
use crate::entry::Entry;
use crate::service::Stats;

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
pub struct EntryRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Age")]
    pub age: i64,
    #[tabled(rename = "Mail")]
    pub mail: String,
    #[tabled(rename = "Friends")]
    pub friends: i64,
    #[tabled(rename = "Best friend")]
    pub best: String,
}

impl From<&Entry> for EntryRow {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.0,
            name: entry.name.clone(),
            age: entry.age,
            mail: entry.mail.clone(),
            friends: entry.friend,
            best: entry.best.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render entries in the given order; empty input renders nothing
pub fn entries_table(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let rows: Vec<EntryRow> = entries.iter().map(EntryRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn stats_table(stats: &Stats) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Entries", &stats.entries.to_string());
    builder.add_row("Friendships", &stats.friendships.to_string());
    builder.add_row("Edge rows", &stats.edge_rows.to_string());
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryId;

    #[test]
    fn test_entries_table_lists_every_entry() {
        let entries = vec![
            Entry {
                id: EntryId(2),
                name: "Kamu".into(),
                age: 27,
                mail: "kamu.kiva@monkey.fi".into(),
                text: "Apina!".into(),
                friend: 1,
                best: Some("paavo@monkey.fi".into()),
            },
            Entry {
                id: EntryId(1),
                name: "Paavo".into(),
                age: 28,
                mail: "paavo@monkey.fi".into(),
                text: String::new(),
                friend: 1,
                best: None,
            },
        ];

        let table = entries_table(&entries);
        assert!(table.contains("kamu.kiva@monkey.fi"));
        assert!(table.contains("Paavo"));
        assert!(table.contains("Best friend"));
        assert!(table.find("Kamu").unwrap() < table.find("Paavo").unwrap());
        assert!(entries_table(&[]).is_empty());
    }

    #[test]
    fn test_stats_table() {
        let table = stats_table(&Stats {
            entries: 3,
            edge_rows: 4,
            friendships: 2,
        });
        assert!(table.contains("Entries"));
        assert!(table.contains("Edge rows"));
    }
}
