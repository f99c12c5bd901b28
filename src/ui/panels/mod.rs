// Celulares POA - ui/panels/mod.rs

pub mod charts;
pub mod drilldown;
pub mod overview;
pub mod raw_data;
