pub mod feed_form;
pub mod feed_list;
pub mod log_viewer;
pub mod nav_bar;
pub mod notification;
pub mod router;
pub mod top;
