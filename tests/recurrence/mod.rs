mod check;
mod list;
