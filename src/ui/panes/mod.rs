pub mod facet_pane;
pub mod results_pane;
