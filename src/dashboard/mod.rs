pub mod monitor;
pub mod shift_sales;
mod time_window;

pub use monitor::{MonitorDashboard, MonitorFooter, MonitorView};
pub use shift_sales::{SalesFilters, SalesSelection, ShiftSalesDashboard, ShiftSalesView};
pub use time_window::TimeWindow;

#[cfg(test)]
mod time_window_test;
