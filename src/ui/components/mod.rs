pub mod bar_chart;
pub mod card_table;
pub mod image_rotator;
pub mod kpi_card;
pub mod live_price_cell;
pub mod manual_copy;
pub mod pie_chart;
pub mod toast;
