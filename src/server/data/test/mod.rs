mod catalog;
mod flavor;
mod image;
mod server;
