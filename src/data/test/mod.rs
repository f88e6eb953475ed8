mod admin;
mod comment;
mod menu_day;
