mod flow_table;
mod panel_list;

pub use flow_table::render_flow_table;
pub use panel_list::render_panel_list;
