mod basic;
mod lifecycle;
