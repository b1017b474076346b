// Chart color assignment: purely ordinal, cyclic over a fixed palette.

/// Display palette shared by every chart. Color is a property of the
/// position in the rendered order, never of the entity itself, so
/// re-ordering a list re-colors it.
pub const PALETTE: [&str; 10] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8",
    "#82ca9d", "#ffc658", "#ff7c7c", "#8dd1e1", "#d084d0",
];

pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
