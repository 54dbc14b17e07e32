pub mod formatter;

pub use formatter::{
    format_archetype, format_axis_detail, format_axis_table, format_tsv, should_use_colors,
};
