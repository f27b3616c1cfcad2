mod common;
mod intake;
mod roadmap;
mod roi;
mod scoring;
mod store;
