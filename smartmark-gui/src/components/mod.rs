pub mod bookmark_form;
pub mod bookmark_list;
