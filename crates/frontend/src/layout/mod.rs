pub mod nav_highlight;
