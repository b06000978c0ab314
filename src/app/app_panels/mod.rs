mod preview;
mod tools;
mod top_bar;
