pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{
    detail, empty, error, faint, field, header, member, notice, section, success, warn,
};
pub use table::{entries_table, stats_table, TableBuilder};
pub use theme::{theme, Theme};
