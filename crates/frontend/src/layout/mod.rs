pub mod admin_nav;
