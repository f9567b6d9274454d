mod controls;
mod details;
mod items;
mod panels;
