pub mod dispatch;
pub mod menu;
pub mod schema;
