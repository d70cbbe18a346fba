pub mod dispatcher;
pub mod menu;
pub mod timing;
