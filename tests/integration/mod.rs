mod credit_flow;
mod edge_cases;
mod locale_display;
