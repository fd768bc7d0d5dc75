mod board;
mod engine;
